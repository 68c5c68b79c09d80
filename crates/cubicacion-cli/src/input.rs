//! Request files as people write them: mixed units, optional fields.
//! Everything is converted to one unit here, before the engine runs.

use anyhow::{bail, Context, Result};
use cubicacion_core::{
    BoxType, Container, Dims, Footprint, ItemLot, LengthUnit, MeasuredDims, PalletLoadRequest,
    RankingLot, UnitInBoxRequest, VehicleLoadRequest,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// Reads a YAML or JSON file, chosen by extension.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    parse(&content, path)
}

fn parse<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T> {
    let request = match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(content)?,
        _ => serde_json::from_str(content)?,
    };
    Ok(request)
}

/// `cubicacion box`: one product inside one box.
#[derive(Debug, Deserialize)]
pub struct BoxFile {
    pub item: MeasuredDims,
    #[serde(rename = "box")]
    pub box_external: MeasuredDims,
    /// Same unit as the box
    #[serde(default)]
    pub wall_thickness: f64,
}

impl BoxFile {
    /// Request in the box's own unit.
    pub fn to_request(&self) -> UnitInBoxRequest {
        let unit = self.box_external.unit;
        UnitInBoxRequest {
            item: self.item.to_dims(unit),
            box_external: self.box_external.to_dims(unit),
            wall_thickness: self.wall_thickness,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContainerInput {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub unit: LengthUnit,
    #[serde(default)]
    pub max_payload_kg: Option<f64>,
}

impl ContainerInput {
    fn to_container(&self, target: LengthUnit) -> Container {
        let dims = MeasuredDims {
            length: self.length,
            width: self.width,
            height: self.height,
            unit: self.unit,
        }
        .to_dims(target);

        Container {
            length: dims.length,
            width: dims.width,
            height: dims.height,
            max_payload: self.max_payload_kg,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VehicleInput {
    #[serde(flatten)]
    pub hold: ContainerInput,
    #[serde(default)]
    pub max_layers: Option<u32>,
}

/// `cubicacion pallet`: boxes on a pallet, optionally pallets in a vehicle.
#[derive(Debug, Deserialize)]
pub struct PalletFile {
    #[serde(rename = "box")]
    pub box_dims: MeasuredDims,
    #[serde(default)]
    pub units_per_box: Option<u32>,
    #[serde(default)]
    pub box_weight_kg: Option<f64>,
    pub pallet: ContainerInput,
    /// Same unit as the pallet
    #[serde(default)]
    pub max_load_height: Option<f64>,
    #[serde(default)]
    pub vehicle: Option<VehicleInput>,
}

impl PalletFile {
    /// Pallet request in meters.
    pub fn pallet_request(&self) -> PalletLoadRequest {
        PalletLoadRequest {
            box_dims: self.box_dims.to_dims(LengthUnit::Meter),
            units_per_box: self.units_per_box,
            box_weight: self.box_weight_kg,
            container: self.pallet.to_container(LengthUnit::Meter),
            max_load_height: self
                .max_load_height
                .map(|h| self.pallet.unit.to_meters(h)),
        }
    }

    /// Vehicle request in meters, for a pallet loaded up to `pallet_height`.
    pub fn vehicle_request(&self, pallet_height: f64) -> Option<VehicleLoadRequest> {
        let vehicle = self.vehicle.as_ref()?;
        let pallet = self.pallet.to_container(LengthUnit::Meter);

        Some(VehicleLoadRequest {
            pallet: Footprint {
                length: pallet.length,
                width: pallet.width,
            },
            pallet_height,
            vehicle: vehicle.hold.to_container(LengthUnit::Meter),
            max_layers: vehicle.max_layers.unwrap_or(1),
        })
    }
}

/// `cubicacion multi`: lots by volume into identical bins.
#[derive(Debug, Deserialize)]
pub struct MultiFile {
    /// Bin volume, in `unit` cubed
    pub bin_capacity: f64,
    /// Unit of every volume in the file
    #[serde(default)]
    pub unit: LengthUnit,
    pub lots: Vec<ItemLot>,
}

impl MultiFile {
    /// Capacity and lots in cubic meters.
    pub fn to_request(&self) -> (f64, Vec<ItemLot>) {
        let to_m3 = |v: f64| self.unit.convert_volume(v, LengthUnit::Meter);
        let lots = self
            .lots
            .iter()
            .cloned()
            .map(|mut lot| {
                lot.unit_volume = to_m3(lot.unit_volume);
                lot
            })
            .collect();
        (to_m3(self.bin_capacity), lots)
    }
}

#[derive(Debug, Deserialize)]
pub struct RankLotInput {
    pub key: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: u32,
    pub dims: MeasuredDims,
    /// Real unit volume in cubic meters; the bounding box when absent
    #[serde(default)]
    pub unit_volume_m3: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct BoxTypeInput {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    pub external: MeasuredDims,
    /// Same unit as `external`
    #[serde(default)]
    pub wall_thickness: f64,
    #[serde(default)]
    pub tare_weight_kg: Option<f64>,
    #[serde(default)]
    pub max_payload_kg: Option<f64>,
    #[serde(default)]
    pub preferred: bool,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

/// `cubicacion rank`: which catalog boxes hold the lots best.
#[derive(Debug, Deserialize)]
pub struct RankFile {
    pub lots: Vec<RankLotInput>,
    pub catalog: Vec<BoxTypeInput>,
    #[serde(default)]
    pub top_n: Option<usize>,
}

impl RankFile {
    /// Lots and catalog in millimeters, volumes in cubic millimeters.
    pub fn to_request(&self) -> Result<(Vec<RankingLot>, Vec<BoxType>)> {
        let target = LengthUnit::Millimeter;

        let lots = self
            .lots
            .iter()
            .map(|input| {
                let dims = input.dims.to_dims(target);
                let unit_volume = match input.unit_volume_m3 {
                    Some(v) => LengthUnit::Meter.convert_volume(v, target),
                    None => dims.volume(),
                };
                RankingLot {
                    lot: ItemLot {
                        key: input.key.clone(),
                        code: input.code.clone(),
                        description: input.description.clone(),
                        quantity: input.quantity,
                        unit_volume,
                    },
                    dims,
                }
            })
            .collect();

        let catalog = self
            .catalog
            .iter()
            .map(|input| BoxType {
                code: input.code.clone(),
                description: input.description.clone(),
                external: input.external.to_dims(target),
                wall_thickness: input.external.unit.convert(input.wall_thickness, target),
                tare_weight: input.tare_weight_kg,
                max_payload: input.max_payload_kg,
                preferred: input.preferred,
                enabled: input.enabled,
            })
            .collect::<Vec<_>>();

        if catalog.is_empty() {
            bail!("The catalog must list at least one box type");
        }

        Ok((lots, catalog))
    }
}

/// Volume of `dims` expressed in cubic meters, for display.
pub fn volume_m3(dims: &Dims, unit: LengthUnit) -> f64 {
    unit.convert_volume(dims.volume(), LengthUnit::Meter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_box_file_converts_item_to_box_unit() {
        let yaml = r#"
item: { length: 20, width: 15, height: 25, unit: cm }
box: { length: 400, width: 300, height: 300, unit: mm }
wall_thickness: 3
"#;
        let file: BoxFile = parse(yaml, &PathBuf::from("box.yaml")).unwrap();
        let request = file.to_request();

        assert!((request.item.length - 200.0).abs() < 1e-9);
        assert!((request.item.height - 250.0).abs() < 1e-9);
        assert_eq!(request.box_external, Dims::new(400.0, 300.0, 300.0));
        assert_eq!(request.wall_thickness, 3.0);
    }

    #[test]
    fn test_pallet_file_in_meters() {
        let json = r#"{
            "box": { "length": 400, "width": 300, "height": 300, "unit": "mm" },
            "units_per_box": 12,
            "box_weight_kg": 9.5,
            "pallet": { "length": 1.2, "width": 0.8, "height": 1.8, "max_payload_kg": 1000 },
            "max_load_height": 1.6,
            "vehicle": { "length": 13.6, "width": 2.4, "height": 2.7, "max_payload_kg": 24000 }
        }"#;
        let file: PalletFile = parse(json, &PathBuf::from("pallet.json")).unwrap();

        let pallet = file.pallet_request();
        assert!((pallet.box_dims.length - 0.4).abs() < 1e-12);
        assert_eq!(pallet.max_load_height, Some(1.6));
        assert_eq!(pallet.container.max_payload, Some(1000.0));

        let vehicle = file.vehicle_request(1.6).unwrap();
        assert_eq!(vehicle.max_layers, 1);
        assert_eq!(vehicle.pallet_height, 1.6);
        assert_eq!(vehicle.vehicle.max_payload, Some(24000.0));
    }

    #[test]
    fn test_pallet_file_without_vehicle() {
        let yaml = r#"
box: { length: 0.4, width: 0.3, height: 0.3 }
pallet: { length: 120, width: 80, height: 180, unit: cm }
max_load_height: 150
"#;
        let file: PalletFile = parse(yaml, &PathBuf::from("pallet.yml")).unwrap();

        let pallet = file.pallet_request();
        assert!((pallet.container.length - 1.2).abs() < 1e-12);
        assert!((pallet.max_load_height.unwrap() - 1.5).abs() < 1e-12);
        assert!(file.vehicle_request(1.5).is_none());
    }

    #[test]
    fn test_multi_file_volumes_to_cubic_meters() {
        let yaml = r#"
bin_capacity: 36000
unit: cm
lots:
  - { key: A, quantity: 10, unit_volume: 10000 }
"#;
        let file: MultiFile = parse(yaml, &PathBuf::from("multi.yaml")).unwrap();
        let (capacity, lots) = file.to_request();

        assert!((capacity - 0.036).abs() < 1e-12);
        assert!((lots[0].unit_volume - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_rank_file_uses_bounding_box_volume() {
        let yaml = r#"
lots:
  - { key: cube, quantity: 3, dims: { length: 10, width: 10, height: 10, unit: cm } }
  - { key: bag, quantity: 1, dims: { length: 100, width: 100, height: 100, unit: mm }, unit_volume_m3: 0.0005 }
catalog:
  - { code: C1, external: { length: 400, width: 300, height: 250, unit: mm }, wall_thickness: 4, preferred: true }
  - { code: C2, external: { length: 0.6, width: 0.4, height: 0.4 }, wall_thickness: 0.005, enabled: false }
"#;
        let file: RankFile = parse(yaml, &PathBuf::from("rank.yaml")).unwrap();
        let (lots, catalog) = file.to_request().unwrap();

        assert!((lots[0].lot.unit_volume - 1_000_000.0).abs() < 1e-3);
        assert!((lots[1].lot.unit_volume - 500_000.0).abs() < 1e-3);
        assert!(catalog[0].enabled);
        assert!(!catalog[1].enabled);
        assert!((catalog[1].wall_thickness - 5.0).abs() < 1e-9);
        assert!((catalog[1].external.length - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_rank_file_needs_catalog() {
        let file = RankFile {
            lots: Vec::new(),
            catalog: Vec::new(),
            top_n: None,
        };

        assert!(file.to_request().is_err());
    }
}
