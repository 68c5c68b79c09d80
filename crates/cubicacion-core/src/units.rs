//! Length units for converting caller data once, before it reaches the engine.

use crate::types::Dims;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[default]
    #[serde(rename = "m")]
    Meter,
}

impl LengthUnit {
    /// Meters per one of this unit.
    pub fn meters(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Meter => 1.0,
        }
    }

    pub fn to_meters(self, value: f64) -> f64 {
        value * self.meters()
    }

    /// Converts a length from this unit to `to`.
    pub fn convert(self, value: f64, to: LengthUnit) -> f64 {
        if self == to {
            return value;
        }
        value * self.meters() / to.meters()
    }

    /// Converts a volume (this unit cubed) to `to` cubed.
    pub fn convert_volume(self, value: f64, to: LengthUnit) -> f64 {
        if self == to {
            return value;
        }
        let factor = self.meters() / to.meters();
        value * factor * factor * factor
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
        }
    }
}

/// Dimensions as the caller wrote them, tagged with their unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasuredDims {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub unit: LengthUnit,
}

impl MeasuredDims {
    pub fn to_dims(&self, target: LengthUnit) -> Dims {
        Dims::new(
            self.unit.convert(self.length, target),
            self.unit.convert(self.width, target),
            self.unit.convert(self.height, target),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimeters_to_meters() {
        let dims = MeasuredDims {
            length: 400.0,
            width: 300.0,
            height: 250.0,
            unit: LengthUnit::Millimeter,
        };

        let converted = dims.to_dims(LengthUnit::Meter);

        assert!((converted.length - 0.4).abs() < 1e-12);
        assert!((converted.width - 0.3).abs() < 1e-12);
        assert!((converted.height - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_same_unit_is_untouched() {
        assert_eq!(LengthUnit::Centimeter.convert(12.3, LengthUnit::Centimeter), 12.3);
        assert_eq!(LengthUnit::Meter.to_meters(1.8), 1.8);
    }

    #[test]
    fn test_volume_conversion_is_cubic() {
        let liters_in_mm3 = LengthUnit::Centimeter.convert_volume(1000.0, LengthUnit::Millimeter);
        assert!((liters_in_mm3 - 1_000_000.0).abs() < 1e-6);

        let m3 = LengthUnit::Millimeter.convert_volume(1_000_000_000.0, LengthUnit::Meter);
        assert!((m3 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_defaults_to_meters() {
        let dims: MeasuredDims =
            serde_json::from_str(r#"{"length": 1.2, "width": 0.8, "height": 1.8}"#).unwrap();
        assert_eq!(dims.unit, LengthUnit::Meter);

        let unit: LengthUnit = serde_json::from_str(r#""mm""#).unwrap();
        assert_eq!(unit, LengthUnit::Millimeter);
    }
}
