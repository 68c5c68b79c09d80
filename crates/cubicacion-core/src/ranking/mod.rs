//! Picks the catalog box types that hold a mix of items in the fewest, fullest boxes.

use crate::multi::VolumetricPacker;
use crate::orientation::fits_any_orientation;
use crate::types::*;
use std::cmp::Ordering;
use tracing::debug;

#[cfg(test)]
mod tests;

/// Weight of each box used; dominates every other term.
const BIN_COUNT_WEIGHT: f64 = 1_000_000.0;
/// Weight of one point of global occupancy.
const OCCUPANCY_WEIGHT: f64 = 1_000.0;
/// Score bonus for box types flagged as preferred.
const PREFERRED_BONUS: f64 = 100.0;
/// Bin count charged to candidates that could not be packed.
const UNPACKED_BIN_COUNT: f64 = 999_999.0;

/// Evaluates every enabled box type of a catalog against a set of item lots.
pub struct BoxTypeRanker {
    lots: Vec<RankingLot>,
    catalog: Vec<BoxType>,
}

impl BoxTypeRanker {
    /// Keeps the lots worth packing and checks the catalog for non-finite measures.
    pub fn new(lots: Vec<RankingLot>, catalog: Vec<BoxType>) -> Result<Self> {
        for box_type in catalog.iter().filter(|b| b.enabled) {
            if !box_type.external.is_finite() || !box_type.wall_thickness.is_finite() {
                return Err(CubicacionError::InvalidInput(format!(
                    "Box type '{}' has non-finite measures",
                    box_type.code
                )));
            }
        }

        let lots = lots.into_iter().filter(RankingLot::is_usable).collect();

        Ok(Self { lots, catalog })
    }

    /// One evaluation per enabled box type, feasible or not, in catalog order.
    /// Empty when no lot is worth packing.
    pub fn evaluate_all(&self) -> Result<Vec<BoxTypeEvaluation>> {
        if self.lots.is_empty() {
            return Ok(Vec::new());
        }

        self.catalog
            .iter()
            .filter(|b| b.enabled)
            .map(|b| self.evaluate(b))
            .collect()
    }

    /// The `top_n` feasible box types, best score first.
    /// Candidates with equal scores keep their catalog order.
    pub fn rank(&self, top_n: usize) -> Result<Vec<BoxTypeEvaluation>> {
        let (mut feasible, rejected): (Vec<_>, Vec<_>) = self
            .evaluate_all()?
            .into_iter()
            .partition(|e| e.feasible && e.packing.is_some());

        for evaluation in &rejected {
            debug!(
                code = %evaluation.box_type.code,
                reasons = ?evaluation.reasons,
                "box type rejected"
            );
        }

        feasible.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
        feasible.truncate(top_n);

        Ok(feasible)
    }

    fn evaluate(&self, box_type: &BoxType) -> Result<BoxTypeEvaluation> {
        let cavity = box_type.external.inner(box_type.wall_thickness);
        let capacity = cavity.volume();

        let mut reasons = Vec::new();
        if cavity.length <= 0.0 || cavity.width <= 0.0 || cavity.height <= 0.0 {
            reasons.push(Infeasibility::InvalidCavity);
        }
        if capacity <= 0.0 {
            reasons.push(Infeasibility::InvalidCapacity);
        }

        for ranking_lot in &self.lots {
            if !fits_any_orientation(&ranking_lot.dims, &cavity) {
                reasons.push(Infeasibility::ItemDoesNotFit {
                    key: ranking_lot.lot.key.clone(),
                });
            } else if ranking_lot.lot.unit_volume > capacity {
                reasons.push(Infeasibility::UnitVolumeExceedsCapacity {
                    key: ranking_lot.lot.key.clone(),
                });
            }
        }

        let feasible = reasons.is_empty();
        let packing = if feasible {
            let lots = self.lots.iter().map(|l| l.lot.clone()).collect();
            Some(VolumetricPacker::new(capacity, lots)?.pack())
        } else {
            None
        };

        let score = Self::score(packing.as_ref(), box_type.preferred);

        Ok(BoxTypeEvaluation {
            box_type: box_type.clone(),
            cavity,
            capacity,
            feasible,
            reasons,
            packing,
            score,
        })
    }

    /// Fewer boxes first, then higher occupancy, then preferred types.
    fn score(packing: Option<&MultiPackResult>, preferred: bool) -> f64 {
        let bins = packing.map_or(UNPACKED_BIN_COUNT, |p| f64::from(p.total_bins));
        let occupancy = packing.map_or(0.0, |p| p.global_occupancy_pct);
        let bonus = if preferred { PREFERRED_BONUS } else { 0.0 };

        bins * BIN_COUNT_WEIGHT - occupancy * OCCUPANCY_WEIGHT - bonus
    }
}
