use serde::{Deserialize, Serialize};

/// Rectangular extent of an item, box, pallet or cargo hold.
///
/// All fields of one call must share a length unit; the engine never converts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dims {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dims {
    pub const fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    pub fn is_finite(&self) -> bool {
        self.length.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// True when every axis is finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.length > 0.0 && self.width > 0.0 && self.height > 0.0
    }

    /// Internal cavity left after a uniform wall on every face.
    /// Negative thickness counts as no wall; axes never go below zero.
    pub fn inner(&self, wall_thickness: f64) -> Dims {
        let wall = wall_thickness.max(0.0) * 2.0;
        Dims {
            length: (self.length - wall).max(0.0),
            width: (self.width - wall).max(0.0),
            height: (self.height - wall).max(0.0),
        }
    }

    /// Component-wise `<=` against `container`, without reorienting.
    pub fn fits_within(&self, container: &Dims) -> bool {
        self.length <= container.length
            && self.width <= container.width
            && self.height <= container.height
    }
}

/// Per-axis unit counts of a grid packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Axes {
    pub x: u64,
    pub y: u64,
    pub z: u64,
}

impl Axes {
    /// Units in the whole grid; `None` when the count does not fit in a `u64`.
    pub fn total(&self) -> Option<u64> {
        self.x.checked_mul(self.y)?.checked_mul(self.z)
    }
}

/// Horizontal extent of a pallet or load base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub length: f64,
    pub width: f64,
}

/// A pallet, generic container or vehicle cargo hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Maximum payload weight; unknown when absent
    #[serde(default)]
    pub max_payload: Option<f64>,
}

impl Container {
    pub fn dims(&self) -> Dims {
        Dims::new(self.length, self.width, self.height)
    }
}

/// Input: one item shape inside one box
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitInBoxRequest {
    pub item: Dims,
    pub box_external: Dims,
    #[serde(default)]
    pub wall_thickness: f64,
}

/// Best homogeneous grid of units found inside a box cavity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitInBoxLayout {
    /// Item dimensions as placed (one of the six axis permutations)
    pub orientation: Dims,
    pub counts: Axes,
    pub total_units: u64,
    /// Internal cavity the grid was computed against
    pub cavity: Dims,
    pub occupancy_pct: f64,
}

/// Input: boxes stacked upright on a pallet or container base
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PalletLoadRequest {
    pub box_dims: Dims,
    /// Products packed in each box; one when absent
    #[serde(default)]
    pub units_per_box: Option<u32>,
    /// Gross weight of one box; unknown when absent
    #[serde(default)]
    pub box_weight: Option<f64>,
    pub container: Container,
    /// Loading height limit, clamped to the container height
    #[serde(default)]
    pub max_load_height: Option<f64>,
}

/// Weight figures of a load. Absent values mean "unknown", never zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightSummary {
    pub per_unit: Option<f64>,
    pub max_payload: Option<f64>,
    pub total: Option<f64>,
    pub utilization_pct: Option<f64>,
    pub exceeds_max: bool,
}

/// Boxes on one pallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalletLoad {
    pub boxes_along_length: u64,
    pub boxes_along_width: u64,
    pub boxes_per_layer: u64,
    pub layers: u64,
    pub total_boxes: u64,
    pub units_per_box: u32,
    pub total_units: u64,
    /// Box footprint as placed on the pallet
    pub box_length_on_pallet: f64,
    pub box_width_on_pallet: f64,
    pub rotated: bool,
    /// Height actually available for stacking
    pub load_height: f64,
    pub box_volume: f64,
    pub container_volume: f64,
    pub occupied_volume: f64,
    pub occupancy_pct: f64,
    pub weight: WeightSummary,
}

/// Input: loaded pallets on a vehicle floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleLoadRequest {
    pub pallet: Footprint,
    /// Height of one loaded pallet
    pub pallet_height: f64,
    pub vehicle: Container,
    #[serde(default = "default_max_layers")]
    pub max_layers: u32,
}

fn default_max_layers() -> u32 {
    1
}

/// Pallets in one vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleLoad {
    pub pallets_along_length: u64,
    pub pallets_along_width: u64,
    pub pallets_per_layer: u64,
    pub layers: u64,
    pub total_pallets: u64,
    pub units_per_pallet: u64,
    pub total_units: u64,
    pub pallet_length_in_vehicle: f64,
    pub pallet_width_in_vehicle: f64,
    pub pallet_height: f64,
    pub rotated: bool,
    /// Volume of the boxes carried by one pallet
    pub pallet_volume: f64,
    pub vehicle_volume: f64,
    pub occupied_volume: f64,
    pub occupancy_pct: f64,
    pub weight: WeightSummary,
}

/// A quantity of identical units waiting to be boxed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemLot {
    pub key: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: u32,
    pub unit_volume: f64,
}

/// Units of one lot inside one bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinContent {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub units: u64,
    pub occupied_volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// 1-based bin number
    pub index: u32,
    pub capacity: f64,
    pub occupied_volume: f64,
    pub free_volume: f64,
    pub occupancy_pct: f64,
    pub contents: Vec<BinContent>,
}

/// Output: lots distributed across identical bins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPackResult {
    pub bins: Vec<Bin>,
    pub total_bins: u32,
    pub total_occupied_volume: f64,
    pub total_capacity: f64,
    pub global_occupancy_pct: f64,
}

/// A catalog box type offered for multi-item packing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxType {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    pub external: Dims,
    #[serde(default)]
    pub wall_thickness: f64,
    #[serde(default)]
    pub tare_weight: Option<f64>,
    #[serde(default)]
    pub max_payload: Option<f64>,
    #[serde(default)]
    pub preferred: bool,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Item lot carrying its real shape, for box-type ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingLot {
    #[serde(flatten)]
    pub lot: ItemLot,
    pub dims: Dims,
}

impl RankingLot {
    /// Lots that take part in the ranking: non-empty, positive volume, real shape.
    pub fn is_usable(&self) -> bool {
        self.lot.quantity > 0
            && self.lot.unit_volume.is_finite()
            && self.lot.unit_volume > 0.0
            && self.dims.is_valid()
    }
}

/// Why a box type cannot hold the requested lots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Infeasibility {
    #[error("Internal dimensions are invalid (wall too thick or zero measure)")]
    InvalidCavity,

    #[error("Internal capacity is not positive")]
    InvalidCapacity,

    #[error("Item '{key}' does not fit in any orientation")]
    ItemDoesNotFit { key: String },

    #[error("A unit of item '{key}' is larger than the box capacity")]
    UnitVolumeExceedsCapacity { key: String },
}

/// Result of checking one box type against the lots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxTypeEvaluation {
    pub box_type: BoxType,
    pub cavity: Dims,
    pub capacity: f64,
    pub feasible: bool,
    pub reasons: Vec<Infeasibility>,
    /// Present only when feasible
    pub packing: Option<MultiPackResult>,
    /// Ranking key, lower is better
    pub score: f64,
}

/// Error type for the packing engine
#[derive(Debug, thiserror::Error)]
pub enum CubicacionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CubicacionError>;
