use super::*;

impl VolumetricPacker {
    /// Aggregates bin count, volumes and global occupancy.
    pub(super) fn calculate_summary(&self, bins: Vec<Bin>) -> MultiPackResult {
        let total_bins = bins.len() as u32;
        let total_capacity = f64::from(total_bins) * self.bin_capacity;
        let total_occupied_volume: f64 = bins.iter().map(|b| b.occupied_volume).sum();
        let global_occupancy_pct = if total_capacity > 0.0 {
            (total_occupied_volume / total_capacity) * 100.0
        } else {
            0.0
        };

        MultiPackResult {
            bins,
            total_bins,
            total_occupied_volume,
            total_capacity,
            global_occupancy_pct,
        }
    }
}
