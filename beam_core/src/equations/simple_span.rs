//! # Simply-Supported Span Formulas
//!
//! Single span of length `L`, pin at `x = 0`, roller at `x = L`, uniform
//! load `w` over the full span.
//!
//! ```text
//!      w ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓
//!    ──────────────────────────
//!    △                        △
//!   R1  ←─────────L─────────→ R2
//! ```
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Case 2a

use super::MM_PER_M;

/// Deflection at position x (mm)
///
/// # Formula
/// ```text
/// v(x) = -(w·x / 24EI) · (L³ - 2Lx² + x³) · j2 · 1000
/// ```
///
/// `EI` is used in the same base units as `w` and `L`; `j2` scales the
/// result for the secondary moment of inertia.
#[inline]
pub fn simple_span_deflection(w: f64, l: f64, ei: f64, j2: f64, x: f64) -> f64 {
    -(w * x / (24.0 * ei)) * (l.powi(3) - 2.0 * l * x * x + x.powi(3)) * j2 * MM_PER_M
}

/// Bending moment at position x
///
/// # Formula
/// - M(x) = -(w·x/2)·(L - x)
///
/// Zero at both supports, extreme `-wL²/8` at midspan.
#[inline]
pub fn simple_span_moment(w: f64, l: f64, x: f64) -> f64 {
    -(w * x / 2.0) * (l - x)
}

/// Shear force at position x
///
/// # Formula
/// - V(x) = w·(L/2 - x)
#[inline]
pub fn simple_span_shear(w: f64, l: f64, x: f64) -> f64 {
    w * (l / 2.0 - x)
}
