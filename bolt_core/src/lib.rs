//! # bolt_core - EN1993-1-8 Bolt Calculation Engine
//!
//! `bolt_core` provides the properties, spacing rules and design resistances
//! of individual bolts per EN1993-1-8. All inputs and outputs are
//! JSON-serializable so results can be stored or handed to other tools.
//!
//! ## Design Philosophy
//!
//! - **Explicit registry**: Grade constants live in a [`GradeRegistry`] value,
//!   never in hidden global state
//! - **Immutable bolts**: A [`Bolt`] captures its grade at construction
//! - **SI internally**: Meters, pascals and newtons; scaled units are for display
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use bolt_core::prelude::*;
//!
//! let registry = GradeRegistry::standard();
//! let bolt = Bolt::new(BoltDiameter::M24, BoltClass::G8P8, &registry).unwrap();
//!
//! let u = combined_utilization(
//!     &bolt,
//!     Kilonewtons(50.0).into(),
//!     Kilonewtons(30.0).into(),
//!     ShearPlane::Threaded,
//!     HeadType::Ordinary,
//!     Detail::FactorOnly,
//! )
//! .unwrap();
//! assert!(u.passes());
//! ```
//!
//! ## Modules
//!
//! - [`grades`] - Property classes and the grade registry (Table 3.1)
//! - [`sizes`] - Standard diameters, hole diameters and thread pitches
//! - [`bolt`] - Bolt property model (areas, strengths)
//! - [`distance`] - Spacing, end and edge distances (Table 3.3)
//! - [`resistance`] - Shear, tension and combined checks (Table 3.4)
//! - [`equations`] - The underlying formulas on plain SI values
//! - [`settings`] - Partial safety factor configuration
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod bolt;
pub mod distance;
pub mod equations;
pub mod errors;
pub mod grades;
pub mod resistance;
pub mod settings;
pub mod sizes;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use bolt::Bolt;
pub use distance::Distances;
pub use errors::{BoltError, BoltResult};
pub use grades::{BoltClass, GradeProperties, GradeRegistry};
pub use settings::DesignSettings;
pub use sizes::BoltDiameter;

/// Everything needed for a typical check in one import.
pub mod prelude {
    pub use crate::bolt::Bolt;
    pub use crate::distance::Distances;
    pub use crate::errors::{BoltError, BoltResult};
    pub use crate::grades::{BoltClass, GradeProperties, GradeRegistry};
    pub use crate::resistance::{
        calculate, combined_utilization, combined_utilization_with, shear_resistance,
        shear_resistance_with, tension_resistance, tension_resistance_with, BoltCheckInput,
        BoltCheckResult, Detail, Governing, HeadType, InteractionTrace, ShearPlane, Utilization,
    };
    pub use crate::settings::DesignSettings;
    pub use crate::sizes::BoltDiameter;
    pub use crate::units::*;
}
