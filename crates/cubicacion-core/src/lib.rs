//! Volumetric loading engine: how units nest in boxes, boxes on pallets and
//! pallets in vehicles, and which catalog box types hold a mix of items best.
//!
//! Every function is pure. Callers pass all dimensions of one call in the same
//! length unit; see [`units`] for converting at the boundary.

pub mod multi;
pub mod orientation;
pub mod packer;
pub mod ranking;
pub mod types;
pub mod units;

pub use multi::VolumetricPacker;
pub use orientation::{fits_any_orientation, orientations};
pub use packer::{
    pack_boxes_on_pallet, pack_pallets_in_vehicle, pack_units_in_box, pallet_positions,
    unit_positions, Position, WEIGHT_TOLERANCE,
};
pub use ranking::BoxTypeRanker;
pub use types::*;
pub use units::{LengthUnit, MeasuredDims};
