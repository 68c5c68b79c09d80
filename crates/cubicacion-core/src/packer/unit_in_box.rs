use super::*;
use crate::orientation::orientations;
use tracing::debug;

/// Finds the orientation of `request.item` that fits the most units in the box cavity.
///
/// Returns `Ok(None)` when not a single unit fits in any orientation, including
/// when the walls close the cavity completely. Equal counts keep the first
/// orientation generated.
pub fn pack_units_in_box(request: &UnitInBoxRequest) -> Result<Option<UnitInBoxLayout>> {
    if !request.item.is_finite()
        || !request.box_external.is_finite()
        || !request.wall_thickness.is_finite()
    {
        return Err(CubicacionError::InvalidInput(
            "Item and box measures must be finite numbers".to_string(),
        ));
    }

    let cavity = request.box_external.inner(request.wall_thickness);
    let cavity_volume = cavity.volume();
    if cavity_volume <= 0.0 {
        debug!(?cavity, "box cavity is closed, nothing fits");
        return Ok(None);
    }

    let mut best: Option<(Dims, Axes, u64)> = None;
    for candidate in orientations(&request.item) {
        if !candidate.is_valid() {
            continue;
        }

        let counts = Axes {
            x: fit_count(cavity.length, candidate.length),
            y: fit_count(cavity.width, candidate.width),
            z: fit_count(cavity.height, candidate.height),
        };

        if counts.x == 0 || counts.y == 0 || counts.z == 0 {
            continue;
        }

        let Some(total) = counts.total() else {
            return Err(CubicacionError::InvalidInput(format!(
                "Too many units to count ({} x {} x {})",
                counts.x, counts.y, counts.z
            )));
        };

        match best {
            Some((_, _, current)) if total <= current => {}
            _ => best = Some((candidate, counts, total)),
        }
    }

    let Some((orientation, counts, total_units)) = best else {
        debug!(item = ?request.item, ?cavity, "no orientation fits a single unit");
        return Ok(None);
    };

    let occupied = request.item.volume() * total_units as f64;

    debug!(?orientation, total_units, "units packed in box");

    Ok(Some(UnitInBoxLayout {
        orientation,
        counts,
        total_units,
        cavity,
        occupancy_pct: percentage(occupied, cavity_volume),
    }))
}
