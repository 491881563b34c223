//! # Bolt Resistances (EN1993-1-8 Table 3.4)
//!
//! Design resistances of an individual bolt and the combined shear-tension
//! interaction check.
//!
//! - Shear per shear plane: `Fv,Rd = αv · fub · As / γM2`
//! - Tension: `Ft,Rd = k2 · fub · As / γM2`
//! - Combined: `max(Fv,Ed/Fv,Rd, Ft,Ed/Ft,Rd, Fv,Ed/Fv,Rd + Ft,Ed/(1.4·Ft,Rd))`
//!
//! A utilization ≤ 1.0 means the bolt is adequate.
//!
//! Every check has a `*_with` variant taking explicit [`DesignSettings`];
//! the plain variants use the code defaults (γM2 = 1.25).
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::bolt::Bolt;
//! use bolt_core::grades::{BoltClass, GradeRegistry};
//! use bolt_core::resistance::{shear_resistance, tension_resistance, HeadType, ShearPlane};
//! use bolt_core::sizes::BoltDiameter;
//! use bolt_core::units::Kilonewtons;
//!
//! let registry = GradeRegistry::standard();
//! let bolt = Bolt::new(BoltDiameter::M24, BoltClass::G5P8, &registry).unwrap();
//!
//! let fv_rd: Kilonewtons = shear_resistance(&bolt, ShearPlane::Threaded).unwrap().into();
//! assert!((fv_rd.0 - 70.6).abs() < 0.05);
//!
//! let ft_rd: Kilonewtons = tension_resistance(&bolt, HeadType::Ordinary).unwrap().into();
//! assert!((ft_rd.0 - 127.0).abs() < 0.05);
//! ```

use serde::{Deserialize, Serialize};

use crate::bolt::Bolt;
use crate::equations::{self, en1993_ref};
use crate::errors::{require_non_negative, BoltError, BoltResult};
use crate::grades::{BoltClass, GradeProperties, GradeRegistry};
use crate::settings::DesignSettings;
use crate::sizes::{standard_diameters, BoltDiameter};
use crate::units::{Kilonewtons, Megapascals, Newtons, Pascals, SquareMeters, SquareMillimeters};

// ============================================================================
// Configuration enums
// ============================================================================

/// Where the shear plane crosses the bolt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShearPlane {
    /// Shear plane passes through the threaded portion
    #[default]
    Threaded,
    /// Shear plane passes through the unthreaded shank
    Unthreaded,
}

impl ShearPlane {
    /// Shear factor αv for this plane and grade
    pub fn alpha_v(self, grade: &GradeProperties) -> f64 {
        match self {
            ShearPlane::Threaded => grade.alpha_v_thread,
            ShearPlane::Unthreaded => equations::ALPHA_V_UNTHREADED,
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ShearPlane::Threaded => "shear plane passes through the threaded portion of the bolt",
            ShearPlane::Unthreaded => {
                "shear plane passes through the unthreaded portion of the bolt"
            }
        }
    }
}

impl std::fmt::Display for ShearPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// How the bolt head is seated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HeadType {
    /// Ordinary (non-countersunk) head
    #[default]
    Ordinary,
    /// Countersunk head
    Countersunk,
}

impl HeadType {
    /// Tension factor k2
    pub fn k2(self) -> f64 {
        match self {
            HeadType::Ordinary => equations::K2_ORDINARY,
            HeadType::Countersunk => equations::K2_COUNTERSUNK,
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            HeadType::Ordinary => "non-countersunk bolt",
            HeadType::Countersunk => "countersunk bolt",
        }
    }
}

impl std::fmt::Display for HeadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Whether `combined_utilization` also returns the term-by-term trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Detail {
    /// Only the utilization factor
    #[default]
    FactorOnly,
    /// Factor plus an [`InteractionTrace`]
    WithTrace,
}

// ============================================================================
// Single resistances
// ============================================================================

/// Shear resistance per shear plane with default settings.
pub fn shear_resistance(bolt: &Bolt, plane: ShearPlane) -> BoltResult<Newtons> {
    shear_resistance_with(bolt, plane, &DesignSettings::default())
}

/// Shear resistance per shear plane, Fv,Rd = αv·fub·As/γM2.
pub fn shear_resistance_with(
    bolt: &Bolt,
    plane: ShearPlane,
    settings: &DesignSettings,
) -> BoltResult<Newtons> {
    settings.validate()?;
    let a_s = bolt.tensile_stress_area()?;
    let fv_rd = equations::shear_resistance(
        plane.alpha_v(bolt.grade()),
        bolt.fub().0,
        a_s.0,
        settings.gamma_m2,
    );
    ensure_resistance("shear resistance", bolt, fv_rd)
}

/// Tension resistance with default settings.
pub fn tension_resistance(bolt: &Bolt, head: HeadType) -> BoltResult<Newtons> {
    tension_resistance_with(bolt, head, &DesignSettings::default())
}

/// Tension resistance, Ft,Rd = k2·fub·As/γM2.
pub fn tension_resistance_with(
    bolt: &Bolt,
    head: HeadType,
    settings: &DesignSettings,
) -> BoltResult<Newtons> {
    settings.validate()?;
    let a_s = bolt.tensile_stress_area()?;
    let ft_rd = equations::tension_resistance(head.k2(), bolt.fub().0, a_s.0, settings.gamma_m2);
    ensure_resistance("tension resistance", bolt, ft_rd)
}

/// A resistance must be strictly positive for a ratio against it to mean anything.
fn ensure_resistance(calculation: &str, bolt: &Bolt, value: f64) -> BoltResult<Newtons> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BoltError::calculation_failed(
            calculation,
            format!("resistance of bolt {} is {} N, expected a positive value", bolt, value),
        ));
    }
    Ok(Newtons(value))
}

// ============================================================================
// Combined shear and tension
// ============================================================================

/// Which term of the interaction check governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Governing {
    /// Fv,Ed / Fv,Rd
    Shear,
    /// Ft,Ed / Ft,Rd
    Tension,
    /// Fv,Ed / Fv,Rd + Ft,Ed / (1.4·Ft,Rd)
    Interaction,
}

impl Governing {
    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Governing::Shear => "Shear",
            Governing::Tension => "Tension",
            Governing::Interaction => "Shear + Tension",
        }
    }
}

/// Every intermediate value of one combined check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionTrace {
    /// Bolt the check was made for
    pub bolt: String,
    /// Shear plane position
    pub shear_plane: ShearPlane,
    /// Head type
    pub head: HeadType,
    /// Partial safety factor γM2
    pub gamma_m2: f64,
    /// Shear factor αv
    pub alpha_v: f64,
    /// Tension factor k2
    pub k2: f64,
    /// Ultimate strength fub
    pub fub: Pascals,
    /// Tensile stress area As
    pub a_s: SquareMeters,
    /// Applied shear Fv,Ed
    pub fv_ed: Newtons,
    /// Applied tension Ft,Ed
    pub ft_ed: Newtons,
    /// Shear resistance Fv,Rd
    pub fv_rd: Newtons,
    /// Tension resistance Ft,Rd
    pub ft_rd: Newtons,
    /// f1 = Fv,Ed / Fv,Rd
    pub shear_ratio: f64,
    /// f2 = Ft,Ed / Ft,Rd
    pub tension_ratio: f64,
    /// f3 = Fv,Ed / Fv,Rd + Ft,Ed / (1.4·Ft,Rd)
    pub interaction_ratio: f64,
    /// Term that produced the maximum
    pub governing: Governing,
}

impl std::fmt::Display for InteractionTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Combined shear and tension check for {} ({}):",
            self.bolt,
            en1993_ref::TABLE_3_4
        )?;
        writeln!(f, "\tγM2   = {:.3}", self.gamma_m2)?;
        writeln!(f, "\tαv    = {:.3} - {}", self.alpha_v, self.shear_plane)?;
        writeln!(f, "\tk2    = {:.3} - {}", self.k2, self.head)?;
        writeln!(f, "\tfub   = {:.1} MPa", Megapascals::from(self.fub).0)?;
        writeln!(f, "\tAs    = {:.1} mm²", SquareMillimeters::from(self.a_s).0)?;
        writeln!(f, "\tFv,Rd = {:.1} kN", Kilonewtons::from(self.fv_rd).0)?;
        writeln!(f, "\tFt,Rd = {:.1} kN", Kilonewtons::from(self.ft_rd).0)?;
        writeln!(f, "\tf1 = Fv,Ed/Fv,Rd              = {:.3}", self.shear_ratio)?;
        writeln!(f, "\tf2 = Ft,Ed/Ft,Rd              = {:.3}", self.tension_ratio)?;
        writeln!(f, "\tf3 = Fv,Ed/Fv,Rd + Ft,Ed/(1.4·Ft,Rd) = {:.3}", self.interaction_ratio)?;
        write!(f, "\tgoverning: {}", self.governing.display_name())
    }
}

/// Result of a combined check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utilization {
    /// max(f1, f2, f3)
    pub factor: f64,
    /// Present when requested with [`Detail::WithTrace`]
    pub trace: Option<InteractionTrace>,
}

impl Utilization {
    /// Check if the bolt is adequate (factor ≤ 1.0)
    pub fn passes(&self) -> bool {
        self.factor <= 1.0
    }
}

/// Combined shear-tension utilization with default settings.
pub fn combined_utilization(
    bolt: &Bolt,
    fv_ed: Newtons,
    ft_ed: Newtons,
    plane: ShearPlane,
    head: HeadType,
    detail: Detail,
) -> BoltResult<Utilization> {
    combined_utilization_with(bolt, fv_ed, ft_ed, plane, head, detail, &DesignSettings::default())
}

/// Combined shear-tension utilization.
///
/// Applied forces must be non-negative and finite.
pub fn combined_utilization_with(
    bolt: &Bolt,
    fv_ed: Newtons,
    ft_ed: Newtons,
    plane: ShearPlane,
    head: HeadType,
    detail: Detail,
    settings: &DesignSettings,
) -> BoltResult<Utilization> {
    let trace = interaction_trace(bolt, fv_ed, ft_ed, plane, head, settings)?;
    let factor = trace.shear_ratio.max(trace.tension_ratio).max(trace.interaction_ratio);
    Ok(Utilization {
        factor,
        trace: match detail {
            Detail::FactorOnly => None,
            Detail::WithTrace => Some(trace),
        },
    })
}

fn interaction_trace(
    bolt: &Bolt,
    fv_ed: Newtons,
    ft_ed: Newtons,
    plane: ShearPlane,
    head: HeadType,
    settings: &DesignSettings,
) -> BoltResult<InteractionTrace> {
    require_non_negative("fv_ed", fv_ed.0)?;
    require_non_negative("ft_ed", ft_ed.0)?;

    let fv_rd = shear_resistance_with(bolt, plane, settings)?;
    let ft_rd = tension_resistance_with(bolt, head, settings)?;
    let a_s = bolt.tensile_stress_area()?;

    let shear_ratio = fv_ed.0 / fv_rd.0;
    let tension_ratio = ft_ed.0 / ft_rd.0;
    let interaction_ratio = equations::interaction_ratio(fv_ed.0, fv_rd.0, ft_ed.0, ft_rd.0);

    let max = shear_ratio.max(tension_ratio).max(interaction_ratio);
    let governing = [
        (Governing::Shear, shear_ratio),
        (Governing::Tension, tension_ratio),
        (Governing::Interaction, interaction_ratio),
    ]
    .into_iter()
    .find(|&(_, value)| value >= max)
    .map(|(g, _)| g)
    .unwrap_or(Governing::Interaction);

    Ok(InteractionTrace {
        bolt: bolt.to_string(),
        shear_plane: plane,
        head,
        gamma_m2: settings.gamma_m2,
        alpha_v: plane.alpha_v(bolt.grade()),
        k2: head.k2(),
        fub: bolt.fub(),
        a_s,
        fv_ed,
        ft_ed,
        fv_rd,
        ft_rd,
        shear_ratio,
        tension_ratio,
        interaction_ratio,
        governing,
    })
}

// ============================================================================
// Check input/result
// ============================================================================

/// Input for a full single-bolt check.
///
/// The bolt is named by diameter and class only; [`calculate`] resolves the
/// grade against a registry, so a class that was never registered is an
/// `UnknownGrade` error rather than a set of made-up strengths.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "diameter": 0.024,
///   "class": "8.8",
///   "shear_plane": "Threaded",
///   "head": "Ordinary",
///   "fv_ed": 50000.0,
///   "ft_ed": 30000.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltCheckInput {
    /// User label for this bolt (e.g., "B-1", "Splice bolt")
    pub label: String,
    /// Nominal diameter
    pub diameter: BoltDiameter,
    /// Property class, looked up in the registry
    pub class: BoltClass,
    /// Shear plane position
    #[serde(default)]
    pub shear_plane: ShearPlane,
    /// Head type
    #[serde(default)]
    pub head: HeadType,
    /// Design shear force per bolt Fv,Ed
    pub fv_ed: Newtons,
    /// Design tensile force per bolt Ft,Ed
    pub ft_ed: Newtons,
}

impl BoltCheckInput {
    /// Resolve the bolt against `registry`.
    pub fn bolt(&self, registry: &GradeRegistry) -> BoltResult<Bolt> {
        Bolt::new(self.diameter, self.class.clone(), registry)
    }
}

/// Results of a full single-bolt check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltCheckResult {
    /// Shear resistance Fv,Rd
    pub fv_rd: Newtons,
    /// Tension resistance Ft,Rd
    pub ft_rd: Newtons,
    /// Fv,Ed / Fv,Rd
    pub shear_unity: f64,
    /// Ft,Ed / Ft,Rd
    pub tension_unity: f64,
    /// Fv,Ed / Fv,Rd + Ft,Ed / (1.4·Ft,Rd)
    pub interaction_unity: f64,
    /// max of the three unity checks
    pub utilization: f64,
    /// Governing term
    pub governing: Governing,
}

impl BoltCheckResult {
    /// Check if the bolt passes (all unity ≤ 1.0)
    pub fn passes(&self) -> bool {
        self.utilization <= 1.0
    }

    /// Get the governing (highest) unity ratio
    pub fn governing_unity(&self) -> f64 {
        self.utilization
    }

    /// Get a description of what governs the design
    pub fn governing_condition(&self) -> &'static str {
        self.governing.display_name()
    }
}

/// Run a full single-bolt check.
///
/// # Returns
///
/// * `Ok(BoltCheckResult)` - Resistances and unity checks
/// * `Err(BoltError)` - If the class is not registered, settings or forces
///   are invalid, or the bolt has no tabulated tensile stress area
pub fn calculate(
    input: &BoltCheckInput,
    registry: &GradeRegistry,
    settings: &DesignSettings,
) -> BoltResult<BoltCheckResult> {
    let bolt = input.bolt(registry)?;
    let trace = interaction_trace(
        &bolt,
        input.fv_ed,
        input.ft_ed,
        input.shear_plane,
        input.head,
        settings,
    )?;

    let utilization = trace.shear_ratio.max(trace.tension_ratio).max(trace.interaction_ratio);
    if utilization > 1.0 {
        log::warn!(
            "bolt check '{}' ({}) fails: utilization {:.3} governed by {}",
            input.label,
            bolt,
            utilization,
            trace.governing.display_name()
        );
    }

    Ok(BoltCheckResult {
        fv_rd: trace.fv_rd,
        ft_rd: trace.ft_rd,
        shear_unity: trace.shear_ratio,
        tension_unity: trace.tension_ratio,
        interaction_unity: trace.interaction_ratio,
        utilization,
        governing: trace.governing,
    })
}

// ============================================================================
// Resistance table
// ============================================================================

/// One row of the resistance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResistanceRow {
    pub diameter: BoltDiameter,
    pub class: BoltClass,
    /// Tension resistance with an ordinary head
    pub tension: Newtons,
    /// Shear resistance with the shear plane through the thread
    pub shear: Newtons,
}

/// Tension and shear resistance for every standard diameter and every
/// registered class, ordered by diameter then class.
pub fn standard_table(
    registry: &GradeRegistry,
    settings: &DesignSettings,
) -> BoltResult<Vec<ResistanceRow>> {
    let classes = registry.classes();
    let mut rows = Vec::with_capacity(classes.len() * 8);
    for diameter in standard_diameters() {
        for class in &classes {
            let bolt = Bolt::new(diameter, class.clone(), registry)?;
            rows.push(ResistanceRow {
                diameter,
                class: class.clone(),
                tension: tension_resistance_with(&bolt, HeadType::Ordinary, settings)?,
                shear: shear_resistance_with(&bolt, ShearPlane::Threaded, settings)?,
            });
        }
    }
    Ok(rows)
}
