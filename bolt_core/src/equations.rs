//! # EN1993-1-8 Bolt Equations
//!
//! Closed-form formulas used by the property model, the distance rules and
//! the resistance engine. Every function takes and returns plain `f64` in SI
//! base units (m, m², Pa, N) so each formula can be checked against the code
//! text in isolation.
//!
//! ## Notation
//!
//! - `d`   = nominal bolt diameter
//! - `d0`  = hole diameter
//! - `p`   = thread pitch
//! - `t`   = thickness of the thinner outer connected part
//! - `A`   = gross cross-section area
//! - `As`  = tensile stress area
//! - `αv`  = shear factor
//! - `k2`  = tension factor
//! - `γM2` = partial safety factor
//!
//! ## References
//!
//! - EN1993-1-8:2005 Table 3.1: Nominal values of Fyb and Fub
//! - EN1993-1-8:2005 Table 3.3: Minimum and maximum spacing, end and edge distances
//! - EN1993-1-8:2005 Table 3.4: Design resistance for individual fasteners

use std::f64::consts::PI;

/// EN1993-1-8 clause references, used in traces and reports.
pub mod en1993_ref {
    /// Nominal values of yield and ultimate strength
    pub const TABLE_3_1: &str = "EN1993-1-8 Table 3.1";
    /// Spacing, end and edge distances
    pub const TABLE_3_3: &str = "EN1993-1-8 Table 3.3";
    /// Shear, tension and combined resistance of individual fasteners
    pub const TABLE_3_4: &str = "EN1993-1-8 Table 3.4";
    /// Partial safety factors for joints
    pub const TABLE_2_1: &str = "EN1993-1-8 Table 2.1";
}

/// Empirical thread-geometry factor in As = π/4·(d − 0.935229·p)²
pub const THREAD_GEOMETRY_FACTOR: f64 = 0.935229;

/// Partial safety factor for bolt resistances (EN1993-1-8 Table 2.1)
pub const GAMMA_M2: f64 = 1.25;

/// Shear factor αv when the shear plane passes through the unthreaded shank
pub const ALPHA_V_UNTHREADED: f64 = 0.6;

/// Tension factor k2 for a bolt with an ordinary head
pub const K2_ORDINARY: f64 = 0.9;

/// Tension factor k2 for a countersunk bolt
pub const K2_COUNTERSUNK: f64 = 0.63;

/// Tension term divisor in the combined shear-tension check
pub const INTERACTION_TENSION_DIVISOR: f64 = 1.4;

// =============================================================================
// AREAS
// =============================================================================

/// Gross cross-section area of the shank
///
/// # Formula
/// A = π/4 · d²
///
/// # Example
/// ```rust
/// use bolt_core::equations::gross_area;
///
/// let a = gross_area(0.024);
/// assert!((a * 1e6 - 452.39).abs() < 0.01);
/// ```
#[inline]
pub fn gross_area(d: f64) -> f64 {
    PI / 4.0 * d.powi(2)
}

/// Tensile stress area of the threaded portion
///
/// # Formula
/// As = π/4 · (d − 0.935229·p)²
///
/// # Example
/// ```rust
/// use bolt_core::equations::tensile_stress_area;
///
/// // M24, pitch 3 mm
/// let a_s = tensile_stress_area(0.024, 0.003);
/// assert!((a_s * 1e6 - 352.8).abs() < 0.05);
/// ```
#[inline]
pub fn tensile_stress_area(d: f64, p: f64) -> f64 {
    PI / 4.0 * (d - THREAD_GEOMETRY_FACTOR * p).powi(2)
}

// =============================================================================
// TABLE 3.3 DISTANCES
// =============================================================================

/// Minimum end/edge distance e1, e2 = 1.2·d0
#[inline]
pub fn edge_distance_min(d0: f64) -> f64 {
    1.2 * d0
}

/// Maximum end/edge distance e1, e2 = 4t + 40 mm
#[inline]
pub fn edge_distance_max(t: f64) -> f64 {
    4.0 * t + 0.040
}

/// Minimum distance to slotted-hole end/edge e3, e4 = 1.5·d0
#[inline]
pub fn slotted_distance_min(d0: f64) -> f64 {
    1.5 * d0
}

/// Minimum spacing in the direction of load p1 = 2.2·d0
#[inline]
pub fn spacing_p1_min(d0: f64) -> f64 {
    2.2 * d0
}

/// Minimum spacing perpendicular to load p2 = 2.4·d0
#[inline]
pub fn spacing_p2_min(d0: f64) -> f64 {
    2.4 * d0
}

/// Maximum spacing of outer rows p1, p1,0, p2 = min(14t, 200 mm)
#[inline]
pub fn spacing_max(t: f64) -> f64 {
    (14.0 * t).min(0.200)
}

/// Maximum spacing of inner rows p1,i = min(28t, 400 mm)
#[inline]
pub fn spacing_inner_max(t: f64) -> f64 {
    (28.0 * t).min(0.400)
}

// =============================================================================
// TABLE 3.4 RESISTANCES
// =============================================================================

/// Shear resistance per shear plane
///
/// # Formula
/// Fv,Rd = αv · fub · As / γM2
///
/// # Example
/// ```rust
/// use bolt_core::equations::shear_resistance;
///
/// // M24 5.8, shear plane through the thread
/// let fv_rd = shear_resistance(0.5, 500.0e6, 352.8e-6, 1.25);
/// assert!((fv_rd / 1e3 - 70.56).abs() < 0.01);
/// ```
#[inline]
pub fn shear_resistance(alpha_v: f64, fub: f64, a_s: f64, gamma_m2: f64) -> f64 {
    alpha_v * fub * a_s / gamma_m2
}

/// Tension resistance
///
/// # Formula
/// Ft,Rd = k2 · fub · As / γM2
#[inline]
pub fn tension_resistance(k2: f64, fub: f64, a_s: f64, gamma_m2: f64) -> f64 {
    k2 * fub * a_s / gamma_m2
}

/// Combined shear and tension interaction term
///
/// # Formula
/// Fv,Ed / Fv,Rd + Ft,Ed / (1.4 · Ft,Rd)
#[inline]
pub fn interaction_ratio(fv_ed: f64, fv_rd: f64, ft_ed: f64, ft_rd: f64) -> f64 {
    fv_ed / fv_rd + ft_ed / (INTERACTION_TENSION_DIVISOR * ft_rd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gross_area() {
        // π/4 · 24² = 452.389 mm²
        assert!((gross_area(0.024) * 1e6 - 452.389).abs() < 0.001);
    }

    #[test]
    fn test_tensile_stress_area_below_gross() {
        let d = 0.016;
        assert!(tensile_stress_area(d, 0.002) < gross_area(d));
    }

    #[test]
    fn test_distance_formulas() {
        let d0 = 0.026;
        assert!((edge_distance_min(d0) - 0.0312).abs() < 1e-12);
        assert!((slotted_distance_min(d0) - 0.039).abs() < 1e-12);
        assert!((spacing_p1_min(d0) - 0.0572).abs() < 1e-12);
        assert!((spacing_p2_min(d0) - 0.0624).abs() < 1e-12);
    }

    #[test]
    fn test_maximum_spacing_caps() {
        // thin plate: 14·5 mm = 70 mm governs
        assert!((spacing_max(0.005) - 0.070).abs() < 1e-12);
        // thick plate: 200 mm cap governs
        assert!((spacing_max(0.040) - 0.200).abs() < 1e-12);
        assert!((spacing_inner_max(0.005) - 0.140).abs() < 1e-12);
        assert!((spacing_inner_max(0.040) - 0.400).abs() < 1e-12);
        assert!((edge_distance_max(0.010) - 0.080).abs() < 1e-12);
    }

    #[test]
    fn test_resistances() {
        let a_s = 352.8e-6;
        let ft_rd = tension_resistance(K2_ORDINARY, 500.0e6, a_s, GAMMA_M2);
        assert!((ft_rd / 1e3 - 127.0).abs() < 0.05);

        let ft_cs = tension_resistance(K2_COUNTERSUNK, 500.0e6, a_s, GAMMA_M2);
        assert!((ft_cs / ft_rd - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_interaction_ratio() {
        // 0.5 + 0.7 / 1.4 = 1.0
        let r = interaction_ratio(50.0, 100.0, 70.0, 100.0);
        assert!((r - 1.0).abs() < 1e-12);
    }
}
