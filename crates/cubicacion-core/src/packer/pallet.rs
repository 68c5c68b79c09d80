use super::weight::{known_limit, known_weight};
use super::*;
use tracing::debug;

/// Stacks upright boxes on a pallet or container base.
///
/// Only the footprint is turned (0° or 90°); boxes always keep their height
/// axis vertical. When no box fits on the base the result is zero-filled and
/// still carries both volumes.
pub fn pack_boxes_on_pallet(request: &PalletLoadRequest) -> Result<PalletLoad> {
    let box_dims = request.box_dims;
    let container = &request.container;

    require_dims("box", &box_dims)?;
    require_dims("container", &container.dims())?;

    let load_height = match request.max_load_height {
        Some(height) => {
            require_positive("Maximum load height", height)?;
            height.min(container.height)
        }
        None => container.height,
    };

    let units_per_box = request.units_per_box.unwrap_or(1);
    let box_weight = known_weight(request.box_weight);
    let max_payload = known_limit(container.max_payload);
    let container_volume = container.dims().volume();

    let Some(fit) = best_footprint(
        container.length,
        container.width,
        box_dims.length,
        box_dims.width,
    )?
    else {
        debug!(?box_dims, "box footprint does not fit on the container base");
        return Ok(PalletLoad {
            boxes_along_length: 0,
            boxes_along_width: 0,
            boxes_per_layer: 0,
            layers: 0,
            total_boxes: 0,
            units_per_box,
            total_units: 0,
            box_length_on_pallet: box_dims.length,
            box_width_on_pallet: box_dims.width,
            rotated: false,
            load_height,
            box_volume: box_dims.volume(),
            container_volume,
            occupied_volume: 0.0,
            occupancy_pct: 0.0,
            weight: WeightSummary::empty(box_weight, max_payload),
        });
    };

    let boxes_per_layer = fit.per_layer;
    let layers = fit_count(load_height, box_dims.height);
    let total_boxes = checked_count("boxes", boxes_per_layer, layers)?;
    let total_units = checked_count("products", total_boxes, u64::from(units_per_box))?;

    let box_volume = fit.piece_length * fit.piece_width * box_dims.height;
    let occupied_volume = box_volume * total_boxes as f64;

    debug!(
        boxes_per_layer,
        layers,
        total_boxes,
        rotated = fit.rotated,
        "boxes stacked on pallet"
    );

    Ok(PalletLoad {
        boxes_along_length: fit.along_length,
        boxes_along_width: fit.along_width,
        boxes_per_layer,
        layers,
        total_boxes,
        units_per_box,
        total_units,
        box_length_on_pallet: fit.piece_length,
        box_width_on_pallet: fit.piece_width,
        rotated: fit.rotated,
        load_height,
        box_volume,
        container_volume,
        occupied_volume,
        occupancy_pct: percentage(occupied_volume, container_volume),
        weight: WeightSummary::for_load(box_weight, total_boxes, max_payload),
    })
}
