//! # Beam Response Equations
//!
//! Closed-form equations for the two supported conditions. Keeping the raw
//! formulas apart from the analyzers makes them easy to check against hand
//! calculations and keeps the sampling code free of arithmetic.
//!
//! ## Modules
//!
//! - [`simple_span`] - Single span, pinned at both ends, full uniform load
//! - [`two_span`] - Continuous beam over three supports with unequal spans
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward
//! - **Deflection**: Downward deflection is negative, output in mm
//! - **Moment**: Simple span reports sagging as negative; two-span reports
//!   `R·x - w·x²/2` directly
//! - **Shear**: Positive at the left support, decreasing with `x`
//!
//! ## Units
//!
//! Spans in m, loads in kN/m, moments in kNm, shear in kN. EI is read in
//! different base units per condition: the simple-span deflection uses it as
//! given, the two-span deflection divides it by 1e9 first.

pub mod simple_span;
pub mod two_span;

pub use simple_span::{
    simple_span_deflection,
    simple_span_moment,
    simple_span_shear,
};

pub use two_span::{
    two_span_deflection,
    two_span_moment,
    two_span_shear,
    TwoSpanReactions,
};

/// Deflection output scale: base length units to millimetres
pub const MM_PER_M: f64 = 1000.0;
