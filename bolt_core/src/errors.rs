//! # Error Types
//!
//! Structured error types for bolt_core. Every error carries the offending
//! identifier (bolt class, diameter or input field) so a consumer can report
//! exactly what was rejected instead of substituting a sentinel value.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::errors::{BoltError, BoltResult};
//!
//! fn validate_thickness(t_m: f64) -> BoltResult<()> {
//!     if t_m <= 0.0 {
//!         return Err(BoltError::invalid_input(
//!             "thickness",
//!             t_m.to_string(),
//!             "Plate thickness must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_thickness(-0.01).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bolt_core operations
pub type BoltResult<T> = Result<T, BoltError>;

/// Structured error type for bolt property and resistance operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BoltError {
    /// Bolt class is not present in the grade registry
    #[error("Unknown bolt grade: class '{class}' is not registered")]
    UnknownGrade { class: String },

    /// Diameter is not tabulated for a table-dependent quantity
    #[error("Undefined diameter: {diameter_mm} mm is not tabulated for {quantity}")]
    UndefinedDiameter { diameter_mm: f64, quantity: String },

    /// An input value is invalid (non-positive, negative, not finite)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Calculation produced a degenerate result
    #[error("Calculation failed: {calculation} - {reason}")]
    CalculationFailed { calculation: String, reason: String },
}

impl BoltError {
    /// Create an UnknownGrade error
    pub fn unknown_grade(class: impl Into<String>) -> Self {
        BoltError::UnknownGrade {
            class: class.into(),
        }
    }

    /// Create an UndefinedDiameter error from a diameter in meters
    pub fn undefined_diameter(diameter_m: f64, quantity: impl Into<String>) -> Self {
        BoltError::UndefinedDiameter {
            diameter_mm: diameter_m * 1.0e3,
            quantity: quantity.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BoltError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation: impl Into<String>, reason: impl Into<String>) -> Self {
        BoltError::CalculationFailed {
            calculation: calculation.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BoltError::UnknownGrade { .. } => "UNKNOWN_GRADE",
            BoltError::UndefinedDiameter { .. } => "UNDEFINED_DIAMETER",
            BoltError::InvalidInput { .. } => "INVALID_INPUT",
            BoltError::CalculationFailed { .. } => "CALCULATION_FAILED",
        }
    }
}

/// Require a strictly positive, finite value.
pub(crate) fn require_positive(field: &str, value: f64) -> BoltResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BoltError::invalid_input(
            field,
            value.to_string(),
            "Value must be positive and finite",
        ));
    }
    Ok(value)
}

/// Require a non-negative, finite value.
pub(crate) fn require_non_negative(field: &str, value: f64) -> BoltResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(BoltError::invalid_input(
            field,
            value.to_string(),
            "Value cannot be negative",
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = BoltError::unknown_grade("12.9");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"UnknownGrade\""));
        let roundtrip: BoltError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(BoltError::unknown_grade("x").error_code(), "UNKNOWN_GRADE");
        assert_eq!(
            BoltError::undefined_diameter(0.010, "hole diameter").error_code(),
            "UNDEFINED_DIAMETER"
        );
        assert_eq!(
            BoltError::invalid_input("FvEd", "-1", "negative").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_undefined_diameter_reports_millimeters() {
        let err = BoltError::undefined_diameter(0.010, "pitch");
        match err {
            BoltError::UndefinedDiameter { diameter_mm, quantity } => {
                assert!((diameter_mm - 10.0).abs() < 1e-9);
                assert_eq!(quantity, "pitch");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("d", 0.024).is_ok());
        assert!(require_positive("d", 0.0).is_err());
        assert!(require_positive("d", f64::NAN).is_err());
        assert!(require_non_negative("F", 0.0).is_ok());
        assert!(require_non_negative("F", -1.0).is_err());
        assert!(require_non_negative("F", f64::INFINITY).is_err());
    }
}
