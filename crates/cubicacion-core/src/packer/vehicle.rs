use super::weight::known_limit;
use super::*;
use tracing::debug;

/// Places loaded pallets on a vehicle floor.
///
/// `pallet` is the box-level result for one pallet; it supplies the products,
/// volume and weight each pallet carries. Pallets are turned only about the
/// vertical axis and stacked at most `request.max_layers` high.
pub fn pack_pallets_in_vehicle(
    request: &VehicleLoadRequest,
    pallet: &PalletLoad,
) -> Result<VehicleLoad> {
    let footprint = request.pallet;
    let vehicle = &request.vehicle;

    require_positive("Pallet length", footprint.length)?;
    require_positive("Pallet width", footprint.width)?;
    require_positive("Pallet height", request.pallet_height)?;
    require_dims("vehicle", &vehicle.dims())?;

    let units_per_pallet = pallet.total_units;
    let pallet_volume = pallet.box_volume * pallet.total_boxes as f64;
    let pallet_weight = pallet.weight.total;
    let max_payload = known_limit(vehicle.max_payload);
    let vehicle_volume = vehicle.dims().volume();

    let (fit, layers) = match best_footprint(
        vehicle.length,
        vehicle.width,
        footprint.length,
        footprint.width,
    )? {
        Some(fit) => {
            let layers = fit_count(vehicle.height, request.pallet_height)
                .min(u64::from(request.max_layers));
            (Some(fit), layers)
        }
        None => (None, 0),
    };

    let Some(fit) = fit.filter(|_| layers > 0) else {
        debug!(?footprint, "no pallet fits in the vehicle");
        return Ok(VehicleLoad {
            pallets_along_length: fit.map_or(0, |f| f.along_length),
            pallets_along_width: fit.map_or(0, |f| f.along_width),
            pallets_per_layer: fit.map_or(0, |f| f.per_layer),
            layers: 0,
            total_pallets: 0,
            units_per_pallet,
            total_units: 0,
            pallet_length_in_vehicle: fit.map_or(footprint.length, |f| f.piece_length),
            pallet_width_in_vehicle: fit.map_or(footprint.width, |f| f.piece_width),
            pallet_height: request.pallet_height,
            rotated: fit.is_some_and(|f| f.rotated),
            pallet_volume,
            vehicle_volume,
            occupied_volume: 0.0,
            occupancy_pct: 0.0,
            weight: WeightSummary::empty(pallet_weight, max_payload),
        });
    };

    let pallets_per_layer = fit.per_layer;
    let total_pallets = checked_count("pallets", pallets_per_layer, layers)?;
    let total_units = checked_count("products", units_per_pallet, total_pallets)?;
    let occupied_volume = pallet_volume * total_pallets as f64;

    debug!(
        pallets_per_layer,
        layers,
        total_pallets,
        rotated = fit.rotated,
        "pallets loaded in vehicle"
    );

    Ok(VehicleLoad {
        pallets_along_length: fit.along_length,
        pallets_along_width: fit.along_width,
        pallets_per_layer,
        layers,
        total_pallets,
        units_per_pallet,
        total_units,
        pallet_length_in_vehicle: fit.piece_length,
        pallet_width_in_vehicle: fit.piece_width,
        pallet_height: request.pallet_height,
        rotated: fit.rotated,
        pallet_volume,
        vehicle_volume,
        occupied_volume,
        occupancy_pct: percentage(occupied_volume, vehicle_volume),
        weight: WeightSummary::for_load(pallet_weight, total_pallets, max_payload),
    })
}
