//! # Two-Span Continuous Beam Formulas
//!
//! Three supports, spans `L1` and `L2`, uniform load `w` over the combined
//! length. The interior support makes the beam statically indeterminate; the
//! redundant is eliminated with a closed-form moment correction so no
//! iteration is needed.
//!
//! ```text
//!      w ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓
//!    ──────────────────┬──────────────────────────
//!    △                 △                          △
//!   R1 ←──── L1 ─────→ R2 ←──────── L2 ─────────→ R3
//! ```
//!
//! Every function in this module takes the solved [`TwoSpanReactions`] so
//! the reactions are computed once per analysis, not once per sample.

use serde::{Deserialize, Serialize};

use super::MM_PER_M;

/// EI scale used by the two-span deflection (EI / 1e9)
pub const EI_SCALE: f64 = 1e9;

/// Solved support reactions for a two-span beam under uniform load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoSpanReactions {
    /// Uniform load intensity
    pub w: f64,
    /// First span length
    pub l1: f64,
    /// Second span length
    pub l2: f64,
    /// Moment correction term
    pub m1: f64,
    /// Left end reaction
    pub r1: f64,
    /// Middle support reaction
    pub r2: f64,
    /// Right end reaction
    pub r3: f64,
}

impl TwoSpanReactions {
    /// Solve reactions for load `w` on spans `l1`, `l2`
    ///
    /// # Formulas
    /// ```text
    /// M1 = w(L2³ - L1³) / 8(L1 + L2)
    /// R1 = M1/L1 + wL1/2
    /// R3 = M1/L2 + wL2/2
    /// R2 = w(L1 + L2) - R1 - R3
    /// ```
    ///
    /// R2 comes from global equilibrium, so `R1 + R2 + R3 = w(L1 + L2)`.
    pub fn solve(w: f64, l1: f64, l2: f64) -> Self {
        let m1 = w * (l2.powi(3) - l1.powi(3)) / (8.0 * (l1 + l2));
        let r1 = m1 / l1 + w * l1 / 2.0;
        let r3 = m1 / l2 + w * l2 / 2.0;
        let r2 = w * (l1 + l2) - r1 - r3;
        Self {
            w,
            l1,
            l2,
            m1,
            r1,
            r2,
            r3,
        }
    }

    /// Combined length of both spans
    #[inline]
    pub fn total_length(&self) -> f64 {
        self.l1 + self.l2
    }

    /// Sum of all three reactions
    pub fn total_reaction(&self) -> f64 {
        self.r1 + self.r2 + self.r3
    }

    /// Moment from the left span branch, valid for `x ≤ L1`
    ///
    /// - M = R1·x - w·x²/2
    #[inline]
    pub fn moment_left(&self, x: f64) -> f64 {
        self.r1 * x - self.w * x * x / 2.0
    }

    /// Moment from the right span branch, valid for `x > L1`
    ///
    /// Uses the distance from the right support, `u = L1 + L2 - x`:
    /// - M = R3·u - w·u²/2
    #[inline]
    pub fn moment_right(&self, x: f64) -> f64 {
        let u = self.total_length() - x;
        self.r3 * u - self.w * u * u / 2.0
    }
}

/// Deflection at position x (mm)
///
/// # Formulas
/// On the first span (`x < L1`):
/// ```text
/// v = (x / (24EI/1e9)) · (4R1x² - wx³ + wL1³ - 4R1L1²) · 1000 · j2
/// ```
/// On the second span (`x ≥ L1`), with `x' = x - L1`:
/// ```text
/// v = (x' / (24EI/1e9)) · (4R3x'² - wx'³ + wL2³ - 4R3L2²) · 1000 · j2
/// ```
///
/// EI is divided by 1e9 here and not in the simple-span formula; both
/// scalings must be kept as they are for numeric compatibility.
#[inline]
pub fn two_span_deflection(r: &TwoSpanReactions, ei: f64, j2: f64, x: f64) -> f64 {
    let ei_scaled = 24.0 * ei / EI_SCALE;
    let w = r.w;

    if x >= r.l1 {
        let xl = x - r.l1;
        (xl / ei_scaled)
            * (4.0 * r.r3 * xl * xl - w * xl.powi(3) + w * r.l2.powi(3) - 4.0 * r.r3 * r.l2 * r.l2)
            * MM_PER_M
            * j2
    } else {
        (x / ei_scaled)
            * (4.0 * r.r1 * x * x - w * x.powi(3) + w * r.l1.powi(3) - 4.0 * r.r1 * r.l1 * r.l1)
            * MM_PER_M
            * j2
    }
}

/// Bending moment at position x
///
/// - `x ≤ L1`: M = R1·x - w·x²/2
/// - `x > L1`: M = R3·(L1+L2-x) - w·(L1+L2-x)²/2
#[inline]
pub fn two_span_moment(r: &TwoSpanReactions, x: f64) -> f64 {
    if x <= r.l1 {
        r.moment_left(x)
    } else {
        r.moment_right(x)
    }
}

/// Shear force at position x
///
/// The middle reaction causes a step at `x = L1`; the value reported exactly
/// at `L1` is the one just left of the support.
///
/// - `x = 0`: V = R1
/// - `0 < x < L1`: V = R1 - w·x
/// - `x = L1`: V = R1 - w·L1
/// - `L1 < x < L1+L2`: V = R1 + R2 - w·x
/// - `x ≥ L1+L2`: V = R1 + R2 - w·(L1+L2)
#[inline]
pub fn two_span_shear(r: &TwoSpanReactions, x: f64) -> f64 {
    let total = r.total_length();
    if x == 0.0 {
        r.r1
    } else if x < r.l1 {
        r.r1 - r.w * x
    } else if x == r.l1 {
        r.r1 - r.w * r.l1
    } else if x < total {
        r.r1 + r.r2 - r.w * x
    } else {
        r.r1 + r.r2 - r.w * total
    }
}
