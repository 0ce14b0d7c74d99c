//! Two-Span Continuous Beam Analysis
//!
//! Three supports at `0`, `L1` and `L1 + L2` with uniform load `w` over the
//! whole length. Reactions are solved once per call with
//! [`TwoSpanReactions::solve`] and reused for every sample.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use beam_core::{Analyzer, Beam, Material, TwoSpanUnequalAnalyzer};
//!
//! let beam = Beam::new(4.0, 6.0, 1.0, Arc::new(Material::new("steel", 210_000.0)));
//! let reactions = TwoSpanUnequalAnalyzer.reactions(&beam, 5.0);
//!
//! let total: f64 = reactions.iter().map(|r| r.force).sum();
//! assert!((total - 50.0).abs() < 1e-12);
//! ```

use log::debug;

use crate::beam::Beam;
use crate::diagram::{Diagram, Quantity};
use crate::equations::{two_span_deflection, two_span_moment, two_span_shear, TwoSpanReactions};

use super::{Analyzer, ResponseCurves, SupportCondition, SupportReaction};

/// Analyzer for a continuous beam over three supports
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoSpanUnequalAnalyzer;

impl TwoSpanUnequalAnalyzer {
    /// Solve the support reactions for this beam and load
    pub fn solve(&self, beam: &Beam, load: f64) -> TwoSpanReactions {
        let reactions = TwoSpanReactions::solve(load, beam.primary_span, beam.secondary_span);
        debug!(
            "two-span reactions: L1={} L2={} w={} -> M1={:.4} R1={:.4} R2={:.4} R3={:.4}",
            reactions.l1,
            reactions.l2,
            load,
            reactions.m1,
            reactions.r1,
            reactions.r2,
            reactions.r3
        );
        reactions
    }
}

impl Analyzer for TwoSpanUnequalAnalyzer {
    fn condition(&self) -> SupportCondition {
        SupportCondition::TwoSpanUnequal
    }

    fn deflection(&self, beam: &Beam, load: f64) -> Diagram {
        deflection_curve(&self.solve(beam, load), beam)
    }

    fn bending_moment(&self, beam: &Beam, load: f64) -> Diagram {
        moment_curve(&self.solve(beam, load))
    }

    fn shear_force(&self, beam: &Beam, load: f64) -> Diagram {
        shear_curve(&self.solve(beam, load))
    }

    fn reactions(&self, beam: &Beam, load: f64) -> Vec<SupportReaction> {
        support_reactions(&self.solve(beam, load))
    }

    fn curves(&self, beam: &Beam, load: f64) -> ResponseCurves {
        let r = self.solve(beam, load);
        ResponseCurves {
            reactions: support_reactions(&r),
            deflection: deflection_curve(&r, beam),
            bending_moment: moment_curve(&r),
            shear_force: shear_curve(&r),
        }
    }
}

fn deflection_curve(r: &TwoSpanReactions, beam: &Beam) -> Diagram {
    let (ei, j2) = (beam.ei(), beam.j2);
    Diagram::sample(Quantity::Deflection, r.total_length(), |x| {
        two_span_deflection(r, ei, j2, x)
    })
}

fn moment_curve(r: &TwoSpanReactions) -> Diagram {
    Diagram::sample(Quantity::BendingMoment, r.total_length(), |x| two_span_moment(r, x))
}

fn shear_curve(r: &TwoSpanReactions) -> Diagram {
    Diagram::sample(Quantity::ShearForce, r.total_length(), |x| two_span_shear(r, x))
}

fn support_reactions(r: &TwoSpanReactions) -> Vec<SupportReaction> {
    vec![
        SupportReaction { position: 0.0, force: r.r1 },
        SupportReaction { position: r.l1, force: r.r2 },
        SupportReaction { position: r.total_length(), force: r.r3 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Material;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::sync::Arc;

    fn beam(l1: f64, l2: f64) -> Beam {
        Beam::new(l1, l2, 1.0, Arc::new(Material::new("steel", 210_000.0)))
    }

    #[test]
    fn test_samples_span_combined_length() {
        let m = TwoSpanUnequalAnalyzer.bending_moment(&beam(4.0, 6.0), 5.0);
        assert_eq!(m.len(), 101);
        assert_eq!(m.positions[0], 0.0);
        assert_eq!(m.positions[40], 4.0);
        assert_eq!(m.positions[100], 10.0);
    }

    #[test]
    fn test_moment_at_middle_support_equals_correction_term() {
        let b = beam(4.0, 6.0);
        let m = TwoSpanUnequalAnalyzer.bending_moment(&b, 5.0);
        let r = TwoSpanUnequalAnalyzer.solve(&b, 5.0);
        assert_relative_eq!(m.values[40], r.m1, epsilon = 1e-12);
        // Right support carries no moment
        assert_abs_diff_eq!(m.values[100], 0.0, epsilon = 1e-12);
        assert_eq!(m.values[0], 0.0);
    }

    #[test]
    fn test_shear_step_at_middle_support() {
        let b = beam(4.0, 6.0);
        let v = TwoSpanUnequalAnalyzer.shear_force(&b, 5.0);
        let r = TwoSpanUnequalAnalyzer.solve(&b, 5.0);

        assert_eq!(v.values[0], r.r1);
        // Value exactly at L1 is taken just left of the support
        assert_eq!(v.values[40], r.r1 - 5.0 * 4.0);
        // Just right of L1 the middle reaction has been added
        assert_relative_eq!(v.values[41], r.r1 + r.r2 - 5.0 * v.positions[41]);
        assert!(v.values[41] > v.values[40]);
        assert_relative_eq!(v.values[100], -r.r3, epsilon = 1e-9);
    }

    #[test]
    fn test_deflection_zero_at_all_supports() {
        let d = TwoSpanUnequalAnalyzer.deflection(&beam(4.0, 6.0), 5.0);
        assert_eq!(d.values[0], 0.0);
        assert_eq!(d.values[40], 0.0);
        assert_abs_diff_eq!(d.values[100], 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_reactions_positions() {
        let r = TwoSpanUnequalAnalyzer.reactions(&beam(4.0, 6.0), 5.0);
        let positions: Vec<f64> = r.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 4.0, 10.0]);
        assert_relative_eq!(r[0].force, 12.375);
        assert_relative_eq!(r[1].force, 21.041666666666668, epsilon = 1e-12);
        assert_relative_eq!(r[2].force, 16.583333333333332, epsilon = 1e-12);
    }

    #[test]
    fn test_curves_match_individual_quantities() {
        let b = beam(4.0, 6.0);
        let curves = TwoSpanUnequalAnalyzer.curves(&b, 5.0);
        assert_eq!(curves.reactions, TwoSpanUnequalAnalyzer.reactions(&b, 5.0));
        assert_eq!(curves.deflection, TwoSpanUnequalAnalyzer.deflection(&b, 5.0));
        assert_eq!(curves.bending_moment, TwoSpanUnequalAnalyzer.bending_moment(&b, 5.0));
        assert_eq!(curves.shear_force, TwoSpanUnequalAnalyzer.shear_force(&b, 5.0));
        assert_eq!(curves.reactions.len(), SupportCondition::TwoSpanUnequal.support_count());
    }

    #[test]
    fn test_equal_spans_need_no_special_case() {
        let d = TwoSpanUnequalAnalyzer.deflection(&beam(5.0, 5.0), 10.0);
        // Symmetric about the middle support
        for i in 0..=50 {
            assert_relative_eq!(d.values[i], d.values[100 - i], epsilon = 1e-6, max_relative = 1e-9);
        }
    }
}
