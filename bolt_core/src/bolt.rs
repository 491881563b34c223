//! # Bolt Property Model
//!
//! A [`Bolt`] is an immutable (diameter, class) pair. The grade constants are
//! resolved against a [`GradeRegistry`] once, at construction, so every
//! stress accessor afterwards is infallible. Geometric quantities that depend
//! on the standard size table (hole diameter, pitch, tensile stress area)
//! fail with `UndefinedDiameter` for non-tabulated diameters; gross area and
//! strengths stay available.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::bolt::Bolt;
//! use bolt_core::grades::{BoltClass, GradeRegistry};
//! use bolt_core::sizes::BoltDiameter;
//! use bolt_core::units::{SquareMillimeters, Millimeters};
//!
//! let registry = GradeRegistry::standard();
//! let bolt = Bolt::new(BoltDiameter::M24, BoltClass::G8P8, &registry).unwrap();
//!
//! let d0: Millimeters = bolt.hole_diameter().unwrap().into();
//! assert!((d0.0 - 26.0).abs() < 1e-9);
//!
//! let a_s: SquareMillimeters = bolt.tensile_stress_area().unwrap().into();
//! assert!((a_s.0 - 352.8).abs() < 0.05);
//! ```

use serde::Serialize;

use crate::equations;
use crate::errors::BoltResult;
use crate::grades::{BoltClass, GradeProperties, GradeRegistry};
use crate::sizes::BoltDiameter;
use crate::units::{Meters, Pascals, SquareMeters};

/// A bolt of a given diameter and property class.
///
/// Serializes for reports but does not deserialize: the only way to get a
/// `Bolt` is [`Bolt::new`], so its grade always came from a registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bolt {
    /// Nominal diameter
    diameter: BoltDiameter,
    /// Property class token
    class: BoltClass,
    /// Grade constants captured from the registry at construction
    grade: GradeProperties,
}

impl Bolt {
    /// Create a bolt, resolving its class against `registry`.
    ///
    /// Fails with `UnknownGrade` if the class is not registered.
    pub fn new(
        diameter: BoltDiameter,
        class: BoltClass,
        registry: &GradeRegistry,
    ) -> BoltResult<Self> {
        let grade = registry.lookup(&class)?;
        log::debug!("bolt {} Cl{} created (fub {} Pa)", diameter, class, grade.fub.0);
        Ok(Bolt {
            diameter,
            class,
            grade,
        })
    }

    /// Nominal diameter d
    pub fn diameter(&self) -> BoltDiameter {
        self.diameter
    }

    /// Property class
    pub fn class(&self) -> &BoltClass {
        &self.class
    }

    /// Grade constants this bolt was built with
    pub fn grade(&self) -> &GradeProperties {
        &self.grade
    }

    /// Nominal yield strength fyb (Table 3.1)
    pub fn fyb(&self) -> Pascals {
        self.grade.fyb
    }

    /// Nominal ultimate tensile strength fub (Table 3.1)
    pub fn fub(&self) -> Pascals {
        self.grade.fub
    }

    /// Hole diameter d0
    pub fn hole_diameter(&self) -> BoltResult<Meters> {
        self.diameter.hole_diameter()
    }

    /// Thread pitch p
    pub fn pitch(&self) -> BoltResult<Meters> {
        self.diameter.pitch()
    }

    /// Gross cross-section area A = π/4·d²
    pub fn gross_area(&self) -> SquareMeters {
        SquareMeters(equations::gross_area(self.diameter.meters().0))
    }

    /// Tensile stress area As = π/4·(d − 0.935229·p)²
    pub fn tensile_stress_area(&self) -> BoltResult<SquareMeters> {
        let p = self.pitch()?;
        Ok(SquareMeters(equations::tensile_stress_area(
            self.diameter.meters().0,
            p.0,
        )))
    }
}

impl std::fmt::Display for Bolt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Cl{}", self.diameter, self.class)
    }
}
