//! # Unit Types
//!
//! Type-safe wrappers for SI engineering units. Each is a plain `f64`
//! newtype, so JSON stays clean (just numbers) and there is no runtime cost.
//!
//! ## SI Base Units (Internal)
//!
//! Every computed quantity in bolt_core is stored in SI base units:
//! - Length: meters (m)
//! - Area: square meters (m²)
//! - Stress: pascals (Pa)
//! - Force: newtons (N)
//!
//! The scaled units (mm, mm², MPa, kN) exist for callers that present values.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::units::{Meters, Millimeters, Newtons, Kilonewtons};
//!
//! let d = Meters(0.024);
//! let d_mm: Millimeters = d.into();
//! assert!((d_mm.0 - 24.0).abs() < 1e-9);
//!
//! let f: Kilonewtons = Newtons(70_560.0).into();
//! assert!((f.0 - 70.56).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1.0e3)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 * 1.0e-3)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimeters(pub f64);

impl From<SquareMeters> for SquareMillimeters {
    fn from(m2: SquareMeters) -> Self {
        SquareMillimeters(m2.0 * 1.0e6)
    }
}

impl From<SquareMillimeters> for SquareMeters {
    fn from(mm2: SquareMillimeters) -> Self {
        SquareMeters(mm2.0 * 1.0e-6)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pa.0 * 1.0e-6)
    }
}

impl From<Megapascals> for Pascals {
    fn from(mpa: Megapascals) -> Self {
        Pascals(mpa.0 * 1.0e6)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 * 1.0e-3)
    }
}

impl From<Kilonewtons> for Newtons {
    fn from(kn: Kilonewtons) -> Self {
        Newtons(kn.0 * 1.0e3)
    }
}

// ============================================================================
// Cross-unit products
// ============================================================================

/// Stress acting over an area gives a force: F = f·A
impl Mul<SquareMeters> for Pascals {
    type Output = Newtons;
    fn mul(self, rhs: SquareMeters) -> Newtons {
        Newtons(self.0 * rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(SquareMillimeters);
impl_arithmetic!(Pascals);
impl_arithmetic!(Megapascals);
impl_arithmetic!(Newtons);
impl_arithmetic!(Kilonewtons);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_millimeters() {
        let mm: Millimeters = Meters(0.026).into();
        assert!((mm.0 - 26.0).abs() < 1e-9);
        let m: Meters = Millimeters(40.0).into();
        assert!((m.0 - 0.040).abs() < 1e-12);
    }

    #[test]
    fn test_area_and_stress_conversions() {
        let mm2: SquareMillimeters = SquareMeters(352.8e-6).into();
        assert!((mm2.0 - 352.8).abs() < 1e-9);
        let mpa: Megapascals = Pascals(640.0e6).into();
        assert!((mpa.0 - 640.0).abs() < 1e-9);
    }

    #[test]
    fn test_stress_times_area_is_force() {
        let f = Pascals(500.0e6) * SquareMeters(1.0e-4);
        assert!((f.0 - 50_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(0.010);
        let b = Meters(0.004);
        assert!(((a + b).0 - 0.014).abs() < 1e-12);
        assert!(((a - b).0 - 0.006).abs() < 1e-12);
        assert!(((a * 2.0).0 - 0.020).abs() < 1e-12);
        assert!(((a / 2.0).0 - 0.005).abs() < 1e-12);
    }

    #[test]
    fn test_serialization() {
        let f = Newtons(127_000.5);
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(json, "127000.5");

        let roundtrip: Newtons = serde_json::from_str(&json).unwrap();
        assert_eq!(f, roundtrip);
    }
}
