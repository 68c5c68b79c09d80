use crate::types::*;
use std::cmp::Ordering;
use tracing::debug;

mod summary;

/// A lot still waiting for bins.
#[derive(Debug, Clone)]
struct Pending {
    lot: ItemLot,
    remaining: u64,
}

/// Distributes item lots over identical bins by volume, largest units first.
///
/// Only volumes are compared; shapes are never placed. Every unit ends up in
/// a bin, opening as many bins as needed.
pub struct VolumetricPacker {
    bin_capacity: f64,
    lots: Vec<ItemLot>,
}

impl VolumetricPacker {
    /// Validates the bin capacity and lots and builds a new packer.
    pub fn new(bin_capacity: f64, lots: Vec<ItemLot>) -> Result<Self> {
        if !bin_capacity.is_finite() || bin_capacity <= 0.0 {
            return Err(CubicacionError::InvalidInput(format!(
                "Bin capacity must be greater than zero, got {}",
                bin_capacity
            )));
        }

        for lot in &lots {
            if lot.unit_volume.is_nan() || lot.unit_volume.is_infinite() {
                return Err(CubicacionError::InvalidInput(format!(
                    "Item '{}' has a non-finite unit volume",
                    lot.key
                )));
            }

            if lot.quantity > 0 && lot.unit_volume > bin_capacity {
                return Err(CubicacionError::InvalidInput(format!(
                    "A unit of item '{}' ({}) is larger than the bin capacity ({})",
                    lot.key, lot.unit_volume, bin_capacity
                )));
            }
        }

        Ok(Self { bin_capacity, lots })
    }

    /// Runs the greedy first-fit-decreasing pass and returns every bin used.
    pub fn pack(&self) -> MultiPackResult {
        let mut pending = self.pending_lots();
        let mut bins: Vec<Bin> = Vec::new();

        while pending.iter().any(|p| p.remaining > 0) {
            let bin = self.fill_bin(bins.len() as u32 + 1, &mut pending);
            debug!(
                index = bin.index,
                occupancy_pct = bin.occupancy_pct,
                lots = bin.contents.len(),
                "bin closed"
            );
            bins.push(bin);
        }

        self.calculate_summary(bins)
    }

    /// Drops empty lots and orders the rest by unit volume, largest first.
    fn pending_lots(&self) -> Vec<Pending> {
        let mut pending: Vec<Pending> = self
            .lots
            .iter()
            .filter(|lot| lot.quantity > 0 && lot.unit_volume > 0.0)
            .map(|lot| Pending {
                lot: lot.clone(),
                remaining: u64::from(lot.quantity),
            })
            .collect();

        pending.sort_by(|a, b| {
            b.lot
                .unit_volume
                .partial_cmp(&a.lot.unit_volume)
                .unwrap_or(Ordering::Equal)
        });

        pending
    }

    /// Opens one bin and makes a single pass over the lots.
    fn fill_bin(&self, index: u32, pending: &mut [Pending]) -> Bin {
        let mut bin = Bin {
            index,
            capacity: self.bin_capacity,
            occupied_volume: 0.0,
            free_volume: self.bin_capacity,
            occupancy_pct: 0.0,
            contents: Vec::new(),
        };

        for p in pending.iter_mut() {
            if p.remaining == 0 {
                continue;
            }

            let unit_volume = p.lot.unit_volume;
            let max_fit = max_fit(&bin, unit_volume);
            if max_fit == 0 {
                continue;
            }

            let units = p.remaining.min(max_fit);
            let volume = units as f64 * unit_volume;

            bin.occupied_volume += volume;
            bin.free_volume = bin.capacity - bin.occupied_volume;

            match bin.contents.iter().position(|c| c.key == p.lot.key) {
                Some(idx) => {
                    let existing = &mut bin.contents[idx];
                    existing.units += units;
                    existing.occupied_volume += volume;
                }
                None => bin.contents.push(BinContent {
                    key: p.lot.key.clone(),
                    code: p.lot.code.clone(),
                    description: p.lot.description.clone(),
                    units,
                    occupied_volume: volume,
                }),
            }

            p.remaining -= units;

            if bin.free_volume <= 0.0 {
                break;
            }
        }

        bin.occupancy_pct = (bin.occupied_volume / bin.capacity) * 100.0;
        bin
    }
}

/// Whole units that still fit in the bin: `floor(free / unit)`, lowered
/// while rounding would push the occupied volume past the capacity.
fn max_fit(bin: &Bin, unit_volume: f64) -> u64 {
    let mut max_fit = (bin.free_volume / unit_volume).floor() as u64;
    while max_fit > 0 && bin.occupied_volume + max_fit as f64 * unit_volume > bin.capacity {
        max_fit -= 1;
    }
    max_fit
}
