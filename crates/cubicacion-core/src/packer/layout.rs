use crate::types::{UnitInBoxLayout, VehicleLoad};
use serde::{Deserialize, Serialize};

/// A point in a 3D preview scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Minimum corner of every unit in the box cavity, layer by layer.
///
/// `x` runs along the cavity length, `y` along its width and `z` upwards.
pub fn unit_positions(layout: &UnitInBoxLayout) -> Vec<Position> {
    let unit = layout.orientation;
    let counts = layout.counts;
    let mut positions = Vec::with_capacity(layout.total_units as usize);

    for iz in 0..counts.z {
        for iy in 0..counts.y {
            for ix in 0..counts.x {
                positions.push(Position {
                    x: ix as f64 * unit.length,
                    y: iy as f64 * unit.width,
                    z: iz as f64 * unit.height,
                });
            }
        }
    }

    positions
}

/// Center of every pallet in the cargo hold, with the floor grid centered on the origin.
///
/// Uses the viewer convention: `x` along the vehicle length, `z` along its
/// width and `y` up, so a floor pallet sits at half its height.
pub fn pallet_positions(load: &VehicleLoad) -> Vec<Position> {
    let length = load.pallet_length_in_vehicle;
    let width = load.pallet_width_in_vehicle;
    let height = load.pallet_height;

    let origin_x = -(load.pallets_along_length as f64 * length) / 2.0 + length / 2.0;
    let origin_z = -(load.pallets_along_width as f64 * width) / 2.0 + width / 2.0;

    let mut positions = Vec::with_capacity(load.total_pallets as usize);
    'layers: for layer in 0..load.layers {
        for ix in 0..load.pallets_along_length {
            for iz in 0..load.pallets_along_width {
                if positions.len() as u64 >= load.total_pallets {
                    break 'layers;
                }
                positions.push(Position {
                    x: origin_x + ix as f64 * length,
                    y: layer as f64 * height + height / 2.0,
                    z: origin_z + iz as f64 * width,
                });
            }
        }
    }

    positions
}
