//! # Beam Description
//!
//! Geometry and material of a prismatic beam. The secondary span is only
//! read by the two-span condition; the simply-supported condition ignores it.
//!
//! ```text
//!    w ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓
//!    ─────────────────┬─────────────────────────
//!    △                △                        △
//!    ←── primary_span ─→←──── secondary_span ──→
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::calculations::SupportCondition;
use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;

/// Immutable beam description, created per analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Length of the first (or only) span (m)
    pub primary_span: f64,

    /// Length of the second span (m), two-span condition only
    #[serde(default)]
    pub secondary_span: f64,

    /// Moment-of-inertia scale factor applied to deflections
    #[serde(default = "default_j2")]
    pub j2: f64,

    /// Shared material reference
    pub material: Arc<Material>,
}

fn default_j2() -> f64 {
    1.0
}

impl Beam {
    /// Create a new beam
    pub fn new(primary_span: f64, secondary_span: f64, j2: f64, material: Arc<Material>) -> Self {
        Self {
            primary_span,
            secondary_span,
            j2,
            material,
        }
    }

    /// Create a single-span beam with `j2 = 1`
    pub fn single_span(span: f64, material: Arc<Material>) -> Self {
        Self::new(span, 0.0, 1.0, material)
    }

    /// Flexural rigidity of the beam's material
    pub fn ei(&self) -> f64 {
        self.material.ei
    }

    /// Total analyzed length for the given condition
    pub fn length_for(&self, condition: SupportCondition) -> f64 {
        match condition {
            SupportCondition::SimplySupported => self.primary_span,
            SupportCondition::TwoSpanUnequal => self.primary_span + self.secondary_span,
        }
    }

    /// Validate geometry and material for the given condition.
    ///
    /// The analyzers evaluate their formulas unguarded, so this is the only
    /// place a zero span or zero EI is caught.
    pub fn validate(&self, condition: SupportCondition) -> CalcResult<()> {
        if !self.primary_span.is_finite() || self.primary_span <= 0.0 {
            return Err(CalcError::invalid_input(
                "primary_span",
                self.primary_span.to_string(),
                "Span must be a positive finite number",
            ));
        }

        if condition == SupportCondition::TwoSpanUnequal
            && (!self.secondary_span.is_finite() || self.secondary_span <= 0.0)
        {
            return Err(CalcError::invalid_input(
                "secondary_span",
                self.secondary_span.to_string(),
                "Second span must be positive for a two-span beam",
            ));
        }

        if !self.j2.is_finite() {
            return Err(CalcError::invalid_input(
                "j2",
                self.j2.to_string(),
                "Inertia factor must be finite",
            ));
        }

        self.material.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steel() -> Arc<Material> {
        Arc::new(Material::new("steel", 210_000.0))
    }

    #[test]
    fn test_length_for_condition() {
        let beam = Beam::new(4.0, 6.0, 1.0, steel());
        assert_eq!(beam.length_for(SupportCondition::SimplySupported), 4.0);
        assert_eq!(beam.length_for(SupportCondition::TwoSpanUnequal), 10.0);
    }

    #[test]
    fn test_secondary_span_ignored_for_simple_span() {
        let beam = Beam::new(6.0, 0.0, 1.0, steel());
        assert!(beam.validate(SupportCondition::SimplySupported).is_ok());
        assert!(beam.validate(SupportCondition::TwoSpanUnequal).is_err());
    }

    #[test]
    fn test_validation_rejects_bad_geometry() {
        let beam = Beam::new(-1.0, 2.0, 1.0, steel());
        match beam.validate(SupportCondition::TwoSpanUnequal) {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "primary_span"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }

        let beam = Beam::new(3.0, 2.0, f64::INFINITY, steel());
        assert!(beam.validate(SupportCondition::SimplySupported).is_err());

        let beam = Beam::new(3.0, 2.0, 1.0, Arc::new(Material::new("void", 0.0)));
        assert!(beam.validate(SupportCondition::SimplySupported).is_err());
    }

    #[test]
    fn test_material_is_shared() {
        let mat = steel();
        let a = Beam::single_span(3.0, Arc::clone(&mat));
        let b = Beam::single_span(5.0, Arc::clone(&mat));
        assert!(Arc::ptr_eq(&a.material, &b.material));
        assert_eq!(Arc::strong_count(&mat), 3);
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"primary_span": 6.0, "material": {"name": "steel", "properties": {"EI": 210000.0}}}"#;
        let beam: Beam = serde_json::from_str(json).unwrap();
        assert_eq!(beam.secondary_span, 0.0);
        assert_eq!(beam.j2, 1.0);
        assert_eq!(beam.ei(), 210_000.0);
    }
}
