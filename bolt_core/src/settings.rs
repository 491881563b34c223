//! # Design Settings
//!
//! Code-level configuration shared by all resistance checks. The defaults
//! follow EN1993-1-8 Table 2.1 (γM2 = 1.25); a different value is only ever
//! used when a caller constructs explicit settings.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::settings::DesignSettings;
//!
//! let defaults = DesignSettings::default();
//! assert_eq!(defaults.gamma_m2, 1.25);
//!
//! // Missing fields fall back to the defaults
//! let s: DesignSettings = serde_json::from_str(r#"{ "gamma_m2": 1.35 }"#).unwrap();
//! assert_eq!(s.code, "EN1993-1-8");
//! assert!(s.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::GAMMA_M2;
use crate::errors::{require_positive, BoltResult};

/// Design code label used when none is given
pub const DEFAULT_CODE: &str = "EN1993-1-8";

/// Settings applied to every resistance calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Design code label (e.g., "EN1993-1-8")
    pub code: String,

    /// Partial safety factor γM2 for bolt resistances
    pub gamma_m2: f64,
}

impl DesignSettings {
    /// Settings with a non-default partial factor
    pub fn with_gamma_m2(gamma_m2: f64) -> Self {
        DesignSettings {
            gamma_m2,
            ..DesignSettings::default()
        }
    }

    /// Validate settings (γM2 must be positive and finite).
    pub fn validate(&self) -> BoltResult<()> {
        require_positive("gamma_m2", self.gamma_m2)?;
        Ok(())
    }
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            code: DEFAULT_CODE.to_string(),
            gamma_m2: GAMMA_M2,
        }
    }
}
