//! Single-shape grid packers: units in a box, boxes on a pallet, pallets in a vehicle.

use crate::types::*;

mod layout;
mod pallet;
mod unit_in_box;
mod vehicle;
mod weight;

pub use layout::{pallet_positions, unit_positions, Position};
pub use pallet::pack_boxes_on_pallet;
pub use unit_in_box::pack_units_in_box;
pub use vehicle::pack_pallets_in_vehicle;
pub use weight::WEIGHT_TOLERANCE;

/// Relative slack on grid counts so that e.g. 1.2 / 0.4 counts as 3, not 2.
const FIT_TOLERANCE: f64 = 1e-9;

/// How many whole pieces of `size` line up along `space`.
pub(crate) fn fit_count(space: f64, size: f64) -> u64 {
    if space <= 0.0 || size <= 0.0 {
        return 0;
    }
    (space / size + FIT_TOLERANCE).floor() as u64
}

/// Multiplies two piece counts, rejecting loads whose count overflows a `u64`.
fn checked_count(what: &str, a: u64, b: u64) -> Result<u64> {
    a.checked_mul(b).ok_or_else(|| {
        CubicacionError::InvalidInput(format!(
            "Too many {} to count ({} x {})",
            what, a, b
        ))
    })
}

/// Grid of identical pieces on a rectangular floor.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FootprintFit {
    along_length: u64,
    along_width: u64,
    per_layer: u64,
    piece_length: f64,
    piece_width: f64,
    rotated: bool,
}

/// Tries the piece as given and turned 90° about the vertical axis.
/// Returns the orientation with more pieces per layer; on a tie the unrotated one wins.
/// `None` when not a single piece fits either way.
fn best_footprint(
    floor_length: f64,
    floor_width: f64,
    piece_length: f64,
    piece_width: f64,
) -> Result<Option<FootprintFit>> {
    let candidates = [
        (piece_length, piece_width, false),
        (piece_width, piece_length, true),
    ];

    let mut best: Option<FootprintFit> = None;
    for (length, width, rotated) in candidates {
        let along_length = fit_count(floor_length, length);
        let along_width = fit_count(floor_width, width);
        let fit = FootprintFit {
            along_length,
            along_width,
            per_layer: checked_count("pieces per layer", along_length, along_width)?,
            piece_length: length,
            piece_width: width,
            rotated,
        };

        if fit.per_layer == 0 {
            continue;
        }

        match best {
            Some(current) if fit.per_layer <= current.per_layer => {}
            _ => best = Some(fit),
        }
    }

    Ok(best)
}

fn require_positive(label: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CubicacionError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            label, value
        )));
    }
    Ok(())
}

fn require_dims(label: &str, dims: &Dims) -> Result<()> {
    if !dims.is_valid() {
        return Err(CubicacionError::InvalidInput(format!(
            "Invalid {} dimensions: length={}, width={}, height={}",
            label, dims.length, dims.width, dims.height
        )));
    }
    Ok(())
}

fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole) * 100.0
    } else {
        0.0
    }
}
