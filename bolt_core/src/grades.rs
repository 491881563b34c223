//! # Bolt Grade Registry (EN1993-1-8 Table 3.1)
//!
//! Material constants per bolt class: nominal yield strength `fyb`, ultimate
//! strength `fub` and the shear factor `αv` used when the shear plane passes
//! through the threaded portion.
//!
//! The registry is an explicit object. `GradeRegistry::standard()` seeds it
//! with the seven code grades; `add_class` registers custom grades or
//! overrides existing ones. Reads and writes go through an `RwLock`, so a
//! registry can be shared between threads behind an `Arc`.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::grades::{BoltClass, GradeRegistry};
//! use bolt_core::units::Pascals;
//!
//! let registry = GradeRegistry::standard();
//! let g = registry.lookup(&BoltClass::G8P8).unwrap();
//! assert_eq!(g.fub, Pascals(800.0e6));
//!
//! registry
//!     .add_class("S245", Pascals(230.0e6), Pascals(360.0e6), 0.5)
//!     .unwrap();
//! assert!(registry.contains(&BoltClass::from("S245")));
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, BoltError, BoltResult};
use crate::units::{Megapascals, Pascals};

/// Bolt property class token (e.g. "4.6", "8.8", or a custom label).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoltClass(Cow<'static, str>);

impl BoltClass {
    pub const G4P6: BoltClass = BoltClass(Cow::Borrowed("4.6"));
    pub const G4P8: BoltClass = BoltClass(Cow::Borrowed("4.8"));
    pub const G5P6: BoltClass = BoltClass(Cow::Borrowed("5.6"));
    pub const G5P8: BoltClass = BoltClass(Cow::Borrowed("5.8"));
    pub const G6P8: BoltClass = BoltClass(Cow::Borrowed("6.8"));
    pub const G8P8: BoltClass = BoltClass(Cow::Borrowed("8.8"));
    pub const G10P9: BoltClass = BoltClass(Cow::Borrowed("10.9"));

    /// Create a class from any token
    pub fn new(token: impl Into<String>) -> Self {
        BoltClass(Cow::Owned(token.into()))
    }

    /// The class token as written in the code table (e.g. "8.8")
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the EN1993-1-8 Table 3.1 grades
    pub fn is_standard(&self) -> bool {
        STANDARD_GRADES.iter().any(|row| row.0 == self.as_str())
    }
}

impl From<&str> for BoltClass {
    fn from(token: &str) -> Self {
        BoltClass::new(token)
    }
}

impl From<String> for BoltClass {
    fn from(token: String) -> Self {
        BoltClass(Cow::Owned(token))
    }
}

impl std::fmt::Display for BoltClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Material constants of one bolt class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeProperties {
    /// Nominal yield strength fyb
    pub fyb: Pascals,
    /// Nominal ultimate tensile strength fub
    pub fub: Pascals,
    /// αv for a shear plane through the threaded portion
    pub alpha_v_thread: f64,
}

impl GradeProperties {
    /// Validate a grade triple before it enters a registry.
    ///
    /// Rejects non-positive strengths, fub < fyb and αv outside (0, 1].
    pub fn validate(&self, class: &BoltClass) -> BoltResult<()> {
        require_positive("fyb", self.fyb.0)?;
        require_positive("fub", self.fub.0)?;
        if self.fub.0 < self.fyb.0 {
            return Err(BoltError::invalid_input(
                "fub",
                self.fub.0.to_string(),
                format!("Ultimate strength of class '{}' is below its yield strength", class),
            ));
        }
        if !(self.alpha_v_thread > 0.0 && self.alpha_v_thread <= 1.0) {
            return Err(BoltError::invalid_input(
                "alpha_v_thread",
                self.alpha_v_thread.to_string(),
                "Shear factor must be in (0, 1]",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Standard table
// ============================================================================

/// EN1993-1-8 Table 3.1: (class, fyb MPa, fub MPa, αv thread), ascending strength
const STANDARD_GRADES: [(&str, f64, f64, f64); 7] = [
    ("4.6", 240.0, 400.0, 0.6),
    ("4.8", 320.0, 400.0, 0.5),
    ("5.6", 300.0, 500.0, 0.6),
    ("5.8", 400.0, 500.0, 0.5),
    ("6.8", 480.0, 600.0, 0.5),
    ("8.8", 640.0, 800.0, 0.6),
    ("10.9", 900.0, 1000.0, 0.5),
];

static STANDARD_TABLE: Lazy<HashMap<BoltClass, GradeProperties>> = Lazy::new(|| {
    STANDARD_GRADES
        .iter()
        .map(|&(token, fyb, fub, alpha_v_thread)| {
            (
                BoltClass(Cow::Borrowed(token)),
                GradeProperties {
                    fyb: Megapascals(fyb).into(),
                    fub: Megapascals(fub).into(),
                    alpha_v_thread,
                },
            )
        })
        .collect()
});

/// The standard classes in ascending order of strength.
pub fn standard_classes() -> Vec<BoltClass> {
    STANDARD_GRADES
        .iter()
        .map(|row| BoltClass(Cow::Borrowed(row.0)))
        .collect()
}

// ============================================================================
// Registry
// ============================================================================

/// Mapping from bolt class to its material constants.
#[derive(Debug)]
pub struct GradeRegistry {
    grades: RwLock<HashMap<BoltClass, GradeProperties>>,
}

impl GradeRegistry {
    /// Registry seeded with the EN1993-1-8 Table 3.1 grades
    pub fn standard() -> Self {
        GradeRegistry {
            grades: RwLock::new((*STANDARD_TABLE).clone()),
        }
    }

    /// Registry with no grades at all
    pub fn empty() -> Self {
        GradeRegistry {
            grades: RwLock::new(HashMap::new()),
        }
    }

    /// Look up the constants of a class.
    ///
    /// Fails with `UnknownGrade` for a class that was never registered.
    pub fn lookup(&self, class: &BoltClass) -> BoltResult<GradeProperties> {
        let grades = self.grades.read().unwrap_or_else(PoisonError::into_inner);
        grades
            .get(class)
            .copied()
            .ok_or_else(|| BoltError::unknown_grade(class.as_str()))
    }

    /// Register a class, replacing any existing entry with the same token.
    pub fn add_class(
        &self,
        class: impl Into<BoltClass>,
        fyb: Pascals,
        fub: Pascals,
        alpha_v_thread: f64,
    ) -> BoltResult<()> {
        let class = class.into();
        if class.as_str().trim().is_empty() {
            return Err(BoltError::invalid_input(
                "class",
                class.as_str(),
                "Class token cannot be empty",
            ));
        }
        let props = GradeProperties {
            fyb,
            fub,
            alpha_v_thread,
        };
        props.validate(&class)?;

        let mut grades = self.grades.write().unwrap_or_else(PoisonError::into_inner);
        match grades.insert(class.clone(), props) {
            Some(previous) => log::info!(
                "bolt class {} overridden: fub {} -> {} Pa",
                class,
                previous.fub.0,
                props.fub.0
            ),
            None => log::debug!("bolt class {} registered: fub {} Pa", class, props.fub.0),
        }
        Ok(())
    }

    /// Check whether a class is registered
    pub fn contains(&self, class: &BoltClass) -> bool {
        self.grades
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(class)
    }

    /// All registered classes: standard grades first in table order, then
    /// custom grades sorted by token.
    pub fn classes(&self) -> Vec<BoltClass> {
        let grades = self.grades.read().unwrap_or_else(PoisonError::into_inner);
        let mut classes: Vec<BoltClass> = standard_classes()
            .into_iter()
            .filter(|c| grades.contains_key(c))
            .collect();
        let mut custom: Vec<BoltClass> = grades
            .keys()
            .filter(|c| !c.is_standard())
            .cloned()
            .collect();
        custom.sort();
        classes.extend(custom);
        classes
    }

    /// Number of registered classes
    pub fn len(&self) -> usize {
        self.grades.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Check if the registry has no classes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for GradeRegistry {
    fn default() -> Self {
        GradeRegistry::standard()
    }
}

impl Clone for GradeRegistry {
    fn clone(&self) -> Self {
        let grades = self.grades.read().unwrap_or_else(PoisonError::into_inner);
        GradeRegistry {
            grades: RwLock::new(grades.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_standard_lookup() {
        let registry = GradeRegistry::standard();
        let g = registry.lookup(&BoltClass::G8P8).unwrap();
        assert_eq!(g.fyb, Pascals(640.0e6));
        assert_eq!(g.fub, Pascals(800.0e6));
        assert_eq!(g.alpha_v_thread, 0.6);

        let g = registry.lookup(&BoltClass::G10P9).unwrap();
        assert_eq!(g.fyb, Pascals(900.0e6));
        assert_eq!(g.alpha_v_thread, 0.5);
    }

    #[test]
    fn test_unknown_class_is_error() {
        let registry = GradeRegistry::standard();
        let err = registry.lookup(&BoltClass::from("12.9")).unwrap_err();
        assert_eq!(err, BoltError::unknown_grade("12.9"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = GradeRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.lookup(&BoltClass::G4P6).is_err());
    }

    #[test]
    fn test_add_class_then_lookup() {
        let registry = GradeRegistry::standard();
        registry
            .add_class("S245", Pascals(230.0e6), Pascals(360.0e6), 0.5)
            .unwrap();
        let g = registry.lookup(&BoltClass::from("S245")).unwrap();
        assert_eq!(
            g,
            GradeProperties {
                fyb: Pascals(230.0e6),
                fub: Pascals(360.0e6),
                alpha_v_thread: 0.5,
            }
        );
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_add_class_overrides() {
        let registry = GradeRegistry::standard();
        registry
            .add_class(BoltClass::G8P8, Pascals(600.0e6), Pascals(780.0e6), 0.5)
            .unwrap();
        let g = registry.lookup(&BoltClass::G8P8).unwrap();
        assert_eq!(g.fub, Pascals(780.0e6));
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn test_add_class_validation() {
        let registry = GradeRegistry::standard();
        assert!(registry.add_class("", Pascals(1.0), Pascals(2.0), 0.5).is_err());
        assert!(registry
            .add_class("X", Pascals(0.0), Pascals(360.0e6), 0.5)
            .is_err());
        assert!(registry
            .add_class("X", Pascals(400.0e6), Pascals(360.0e6), 0.5)
            .is_err());
        assert!(registry
            .add_class("X", Pascals(230.0e6), Pascals(360.0e6), 0.0)
            .is_err());
        assert!(registry
            .add_class("X", Pascals(230.0e6), Pascals(360.0e6), 1.2)
            .is_err());
        assert!(!registry.contains(&BoltClass::from("X")));
    }

    #[test]
    fn test_registries_are_isolated() {
        let a = GradeRegistry::standard();
        let b = GradeRegistry::standard();
        a.add_class("S245", Pascals(230.0e6), Pascals(360.0e6), 0.5)
            .unwrap();
        assert!(!b.contains(&BoltClass::from("S245")));

        let snapshot = a.clone();
        a.add_class("S355", Pascals(340.0e6), Pascals(470.0e6), 0.5)
            .unwrap();
        assert!(snapshot.contains(&BoltClass::from("S245")));
        assert!(!snapshot.contains(&BoltClass::from("S355")));
    }

    #[test]
    fn test_classes_order() {
        let registry = GradeRegistry::standard();
        registry
            .add_class("Z1", Pascals(200.0e6), Pascals(300.0e6), 0.5)
            .unwrap();
        registry
            .add_class("A1", Pascals(200.0e6), Pascals(300.0e6), 0.5)
            .unwrap();
        let classes = registry.classes();
        assert_eq!(&classes[..7], standard_classes().as_slice());
        assert_eq!(classes[7], BoltClass::from("A1"));
        assert_eq!(classes[8], BoltClass::from("Z1"));
    }

    #[test]
    fn test_standard_classes_ascending_strength() {
        let registry = GradeRegistry::standard();
        let fub: Vec<f64> = standard_classes()
            .iter()
            .map(|c| registry.lookup(c).unwrap().fub.0)
            .collect();
        assert!(fub.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_concurrent_readers_and_writer() {
        let registry = Arc::new(GradeRegistry::standard());
        let writer = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..50 {
                    let fub = 400.0e6 + i as f64 * 1.0e6;
                    registry
                        .add_class("CUSTOM", Pascals(300.0e6), Pascals(fub), 0.5)
                        .unwrap();
                }
            })
        };
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..50 {
                        if let Ok(g) = registry.lookup(&BoltClass::from("CUSTOM")) {
                            assert_eq!(g.fyb, Pascals(300.0e6));
                            assert!(g.fub.0 >= 400.0e6);
                        }
                        assert!(registry.lookup(&BoltClass::G4P6).is_ok());
                    }
                })
            })
            .collect();
        writer.join().unwrap();
        for r in readers {
            r.join().unwrap();
        }
        let g = registry.lookup(&BoltClass::from("CUSTOM")).unwrap();
        assert_eq!(g.fub, Pascals(449.0e6));
    }

    #[test]
    fn test_class_serialization() {
        let json = serde_json::to_string(&BoltClass::G10P9).unwrap();
        assert_eq!(json, "\"10.9\"");
        let roundtrip: BoltClass = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, BoltClass::G10P9);
        assert!(roundtrip.is_standard());
    }
}
