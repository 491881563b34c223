//! # Spacing, End and Edge Distances (EN1993-1-8 Table 3.3)
//!
//! Minimum and maximum distances for a bolt in a plate of thickness `t`.
//! These are advisory bounds; nothing here checks an actual joint layout.
//!
//! ```text
//!        e1        p1        p1
//!     |<---->|<-------->|<-------->|
//!     +------------------------------+  ---
//!     |      o          o          o |   ^ e2
//!     |                              |  ---
//!     |      o          o          o |   ^ p2
//!     +------------------------------+  ---
//!               load direction -->
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::bolt::Bolt;
//! use bolt_core::distance::Distances;
//! use bolt_core::grades::{BoltClass, GradeRegistry};
//! use bolt_core::sizes::BoltDiameter;
//! use bolt_core::units::Meters;
//!
//! let registry = GradeRegistry::standard();
//! let bolt = Bolt::new(BoltDiameter::M24, BoltClass::G5P8, &registry).unwrap();
//! let d = Distances::new(&bolt, Meters(0.040)).unwrap();
//! assert!((d.e1_min.0 - 0.0312).abs() < 1e-9);
//! assert!((d.p1i_max.0 - 0.400).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::bolt::Bolt;
use crate::equations;
use crate::errors::{require_positive, BoltResult};
use crate::units::Meters;

/// Distance bounds for one bolt and plate thickness (all in meters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distances {
    /// Plate thickness t the maxima were derived from
    pub thickness: Meters,
    /// Minimum end distance e1 = 1.2·d0
    pub e1_min: Meters,
    /// Maximum end distance e1 = 4t + 40 mm
    pub e1_max: Meters,
    /// Minimum edge distance e2 = 1.2·d0
    pub e2_min: Meters,
    /// Maximum edge distance e2 = 4t + 40 mm
    pub e2_max: Meters,
    /// Minimum distance e3 in slotted holes = 1.5·d0
    pub e3_min: Meters,
    /// Minimum distance e4 in slotted holes = 1.5·d0
    pub e4_min: Meters,
    /// Minimum spacing p1 = 2.2·d0
    pub p1_min: Meters,
    /// Maximum spacing p1 = min(14t, 200 mm)
    pub p1_max: Meters,
    /// Maximum spacing of outer lines p1,0 = min(14t, 200 mm)
    pub p10_max: Meters,
    /// Maximum spacing of inner lines p1,i = min(28t, 400 mm)
    pub p1i_max: Meters,
    /// Minimum spacing p2 = 2.4·d0
    pub p2_min: Meters,
    /// Maximum spacing p2 = min(14t, 200 mm)
    pub p2_max: Meters,
}

impl Distances {
    /// Derive all Table 3.3 bounds.
    ///
    /// Fails with `InvalidInput` for a non-positive thickness and with
    /// `UndefinedDiameter` when the bolt has no tabulated hole diameter.
    pub fn new(bolt: &Bolt, thickness: Meters) -> BoltResult<Self> {
        let t = require_positive("thickness", thickness.0)?;
        let d0 = bolt.hole_diameter()?.0;

        let edge_max = Meters(equations::edge_distance_max(t));
        let spacing_max = Meters(equations::spacing_max(t));

        Ok(Distances {
            thickness,
            e1_min: Meters(equations::edge_distance_min(d0)),
            e1_max: edge_max,
            e2_min: Meters(equations::edge_distance_min(d0)),
            e2_max: edge_max,
            e3_min: Meters(equations::slotted_distance_min(d0)),
            e4_min: Meters(equations::slotted_distance_min(d0)),
            p1_min: Meters(equations::spacing_p1_min(d0)),
            p1_max: spacing_max,
            p10_max: spacing_max,
            p1i_max: Meters(equations::spacing_inner_max(t)),
            p2_min: Meters(equations::spacing_p2_min(d0)),
            p2_max: spacing_max,
        })
    }

    /// Named values in table order, for reports.
    pub fn entries(&self) -> [(&'static str, Meters); 12] {
        [
            ("e1,min", self.e1_min),
            ("e1,max", self.e1_max),
            ("e2,min", self.e2_min),
            ("e2,max", self.e2_max),
            ("e3,min", self.e3_min),
            ("e4,min", self.e4_min),
            ("p1,min", self.p1_min),
            ("p1,max", self.p1_max),
            ("p1,0,max", self.p10_max),
            ("p1,i,max", self.p1i_max),
            ("p2,min", self.p2_min),
            ("p2,max", self.p2_max),
        ]
    }
}
