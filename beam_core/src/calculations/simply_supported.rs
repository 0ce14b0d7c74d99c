//! Simply-Supported Span Analysis
//!
//! Single span `L = primary_span` under uniform load `w`. The secondary span
//! is ignored.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use beam_core::{Analyzer, Beam, Material, SimplySupportedAnalyzer};
//!
//! let beam = Beam::single_span(6.0, Arc::new(Material::new("steel", 210_000.0)));
//! let moment = SimplySupportedAnalyzer.bending_moment(&beam, 10.0);
//!
//! // Midspan sample
//! assert_eq!(moment.positions[50], 3.0);
//! assert_eq!(moment.values[50], -45.0);
//! ```

use crate::beam::Beam;
use crate::diagram::{Diagram, Quantity};
use crate::equations::{simple_span_deflection, simple_span_moment, simple_span_shear};

use super::{Analyzer, SupportCondition, SupportReaction};

/// Analyzer for a single pin-roller span
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplySupportedAnalyzer;

impl Analyzer for SimplySupportedAnalyzer {
    fn condition(&self) -> SupportCondition {
        SupportCondition::SimplySupported
    }

    fn deflection(&self, beam: &Beam, load: f64) -> Diagram {
        let (l, ei, j2) = (beam.primary_span, beam.ei(), beam.j2);
        Diagram::sample(Quantity::Deflection, l, |x| {
            simple_span_deflection(load, l, ei, j2, x)
        })
    }

    fn bending_moment(&self, beam: &Beam, load: f64) -> Diagram {
        let l = beam.primary_span;
        Diagram::sample(Quantity::BendingMoment, l, |x| simple_span_moment(load, l, x))
    }

    fn shear_force(&self, beam: &Beam, load: f64) -> Diagram {
        let l = beam.primary_span;
        Diagram::sample(Quantity::ShearForce, l, |x| simple_span_shear(load, l, x))
    }

    fn reactions(&self, beam: &Beam, load: f64) -> Vec<SupportReaction> {
        // R1 = R2 = wL/2
        let l = beam.primary_span;
        let r = load * l / 2.0;
        vec![
            SupportReaction { position: 0.0, force: r },
            SupportReaction { position: l, force: r },
        ]
    }
}
