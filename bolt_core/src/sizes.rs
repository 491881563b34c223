//! Bolt Diameters and Thread Tables
//!
//! Nominal bolt diameters with their normal-clearance hole diameter and
//! thread pitch. The pitch is what the property model uses to reduce the
//! gross area to the tensile stress area.
//!
//! Any positive diameter can be constructed. Only the tabulated quantities
//! (hole diameter, pitch) are restricted to the eight standard sizes, and
//! asking for them on any other diameter is an `UndefinedDiameter` error.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, BoltError, BoltResult};
use crate::units::{Meters, Millimeters};

/// Two diameters within this distance (mm) are the same nominal size
const DIAMETER_TOLERANCE_MM: f64 = 1.0e-6;

/// Nominal bolt diameter, stored in meters.
///
/// Serializes as a bare number of meters; deserialization applies the same
/// positivity check as [`BoltDiameter::new`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct BoltDiameter(f64);

impl BoltDiameter {
    pub const M12: BoltDiameter = BoltDiameter(12.0e-3);
    pub const M16: BoltDiameter = BoltDiameter(16.0e-3);
    pub const M20: BoltDiameter = BoltDiameter(20.0e-3);
    pub const M24: BoltDiameter = BoltDiameter(24.0e-3);
    pub const M30: BoltDiameter = BoltDiameter(30.0e-3);
    pub const M36: BoltDiameter = BoltDiameter(36.0e-3);
    pub const M42: BoltDiameter = BoltDiameter(42.0e-3);
    pub const M48: BoltDiameter = BoltDiameter(48.0e-3);

    /// Create a diameter from meters. Must be positive and finite.
    pub fn new(meters: f64) -> BoltResult<Self> {
        require_positive("diameter", meters).map(BoltDiameter)
    }

    /// Create a diameter from millimeters. Must be positive and finite.
    pub fn from_mm(mm: f64) -> BoltResult<Self> {
        require_positive("diameter", mm)?;
        Ok(BoltDiameter(Meters::from(Millimeters(mm)).0))
    }

    /// Diameter in meters
    pub fn meters(self) -> Meters {
        Meters(self.0)
    }

    /// Diameter in millimeters
    pub fn millimeters(self) -> Millimeters {
        Millimeters::from(self.meters())
    }

    /// Standard size row for this diameter, if it is tabulated
    pub fn standard_size(self) -> Option<&'static BoltSize> {
        let mm = self.millimeters().0;
        STANDARD_SIZES
            .iter()
            .find(|s| (s.nominal_mm - mm).abs() < DIAMETER_TOLERANCE_MM)
    }

    /// Whether this diameter is one of the eight tabulated sizes
    pub fn is_standard(self) -> bool {
        self.standard_size().is_some()
    }

    /// Hole diameter d0 for a normal clearance hole.
    pub fn hole_diameter(self) -> BoltResult<Meters> {
        self.standard_size()
            .map(|s| Millimeters(s.hole_mm).into())
            .ok_or_else(|| BoltError::undefined_diameter(self.0, "hole diameter"))
    }

    /// Thread pitch p.
    pub fn pitch(self) -> BoltResult<Meters> {
        self.standard_size()
            .map(|s| Millimeters(s.pitch_mm).into())
            .ok_or_else(|| BoltError::undefined_diameter(self.0, "thread pitch"))
    }
}

impl TryFrom<f64> for BoltDiameter {
    type Error = BoltError;

    fn try_from(meters: f64) -> BoltResult<Self> {
        BoltDiameter::new(meters)
    }
}

impl From<BoltDiameter> for f64 {
    fn from(d: BoltDiameter) -> f64 {
        d.0
    }
}

impl std::fmt::Display for BoltDiameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "M{}", format_mm(self.millimeters().0))
    }
}

/// "24" for whole millimeters, "22.5" otherwise
fn format_mm(mm: f64) -> String {
    if (mm - mm.round()).abs() < DIAMETER_TOLERANCE_MM {
        format!("{:.0}", mm)
    } else {
        format!("{:.1}", mm)
    }
}

/// One row of the standard size table (all values in mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoltSize {
    /// Nominal diameter d
    pub nominal_mm: f64,
    /// Hole diameter d0
    pub hole_mm: f64,
    /// Thread pitch p
    pub pitch_mm: f64,
}

impl BoltSize {
    const fn new(nominal_mm: f64, hole_mm: f64, pitch_mm: f64) -> Self {
        BoltSize {
            nominal_mm,
            hole_mm,
            pitch_mm,
        }
    }
}

/// Standard sizes, ascending by nominal diameter
pub const STANDARD_SIZES: [BoltSize; 8] = [
    BoltSize::new(12.0, 13.0, 1.75),
    BoltSize::new(16.0, 18.0, 2.00),
    BoltSize::new(20.0, 22.0, 2.50),
    BoltSize::new(24.0, 26.0, 3.00),
    BoltSize::new(30.0, 33.0, 3.50),
    BoltSize::new(36.0, 39.0, 4.00),
    BoltSize::new(42.0, 45.0, 4.50),
    BoltSize::new(48.0, 51.0, 5.00),
];

/// The standard diameters in ascending order.
pub fn standard_diameters() -> Vec<BoltDiameter> {
    vec![
        BoltDiameter::M12,
        BoltDiameter::M16,
        BoltDiameter::M20,
        BoltDiameter::M24,
        BoltDiameter::M30,
        BoltDiameter::M36,
        BoltDiameter::M42,
        BoltDiameter::M48,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_diameters_ascending() {
        let diameters = standard_diameters();
        assert_eq!(diameters.len(), STANDARD_SIZES.len());
        assert!(diameters.windows(2).all(|w| w[0] < w[1]));
        assert!(diameters.iter().all(|d| d.is_standard()));
    }

    #[test]
    fn test_hole_and_pitch_lookup() {
        let d = BoltDiameter::M24;
        assert!((d.hole_diameter().unwrap().0 - 0.026).abs() < 1e-12);
        assert!((d.pitch().unwrap().0 - 0.003).abs() < 1e-12);

        let d = BoltDiameter::M12;
        assert!((d.hole_diameter().unwrap().0 - 0.013).abs() < 1e-12);
        assert!((d.pitch().unwrap().0 - 0.00175).abs() < 1e-12);
    }

    #[test]
    fn test_from_mm_matches_constant() {
        let d = BoltDiameter::from_mm(30.0).unwrap();
        assert!(d.is_standard());
        assert!((d.hole_diameter().unwrap().0 - 0.033).abs() < 1e-12);
    }

    #[test]
    fn test_non_standard_diameter_fails_tables_only() {
        let d = BoltDiameter::from_mm(22.0).unwrap();
        assert!(!d.is_standard());
        assert_eq!(
            d.hole_diameter().unwrap_err().error_code(),
            "UNDEFINED_DIAMETER"
        );
        assert!(matches!(
            d.pitch(),
            Err(BoltError::UndefinedDiameter { .. })
        ));
    }

    #[test]
    fn test_invalid_diameter() {
        assert!(BoltDiameter::new(0.0).is_err());
        assert!(BoltDiameter::new(-0.012).is_err());
        assert!(BoltDiameter::from_mm(f64::NAN).is_err());
    }

    #[test]
    fn test_serialization_validates() {
        let json = serde_json::to_string(&BoltDiameter::M16).unwrap();
        assert_eq!(json, "0.016");
        let d: BoltDiameter = serde_json::from_str(&json).unwrap();
        assert_eq!(d, BoltDiameter::M16);
        assert!(serde_json::from_str::<BoltDiameter>("-0.016").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(BoltDiameter::M24.to_string(), "M24");
        assert_eq!(BoltDiameter::from_mm(22.5).unwrap().to_string(), "M22.5");
    }
}
