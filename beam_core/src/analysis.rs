//! # Analysis Facade
//!
//! Single entry point that hides condition selection behind a name. The
//! facade owns a registry of analyzers keyed by [`SupportCondition`], built
//! once and read-only afterwards, so one facade can serve any number of
//! concurrent callers.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use beam_core::{Analysis, Beam, Material};
//!
//! let analysis = Analysis::new();
//! let beam = Beam::new(6.0, 0.0, 1.0, Arc::new(Material::new("steel", 210_000.0)));
//!
//! let result = analysis.shear_force(&beam, 10.0, "simply-supported").unwrap();
//! assert_eq!(result.equation.values[0], 30.0);
//!
//! assert!(analysis.shear_force(&beam, 10.0, "three-span").is_err());
//! ```

use std::collections::HashMap;

use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::calculations::{
    Analyzer, SimplySupportedAnalyzer, SupportCondition, SupportReaction, TwoSpanUnequalAnalyzer,
};
use crate::diagram::{Diagram, DiagramPoint, Quantity};
use crate::errors::{CalcError, CalcResult};

static SHARED: Lazy<Analysis> = Lazy::new(Analysis::new);

/// Result of a single-quantity analysis: echoed inputs plus the curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Beam that was analyzed
    pub beam: Beam,
    /// Uniform load intensity (kN/m)
    pub load: f64,
    /// Condition the beam was analyzed under
    pub condition: SupportCondition,
    /// Sampled response curve with labels
    pub equation: Diagram,
}

/// Every response quantity for one beam, load and condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResponse {
    /// Beam that was analyzed
    pub beam: Beam,
    /// Uniform load intensity (kN/m)
    pub load: f64,
    /// Condition the beam was analyzed under
    pub condition: SupportCondition,
    /// Support reactions, left to right
    pub reactions: Vec<SupportReaction>,
    /// Deflection curve (mm)
    pub deflection: Diagram,
    /// Bending moment curve (kNm)
    pub bending_moment: Diagram,
    /// Shear force curve (kN)
    pub shear_force: Diagram,
}

impl BeamResponse {
    /// Diagram for a given quantity
    pub fn diagram(&self, quantity: Quantity) -> &Diagram {
        match quantity {
            Quantity::Deflection => &self.deflection,
            Quantity::BendingMoment => &self.bending_moment,
            Quantity::ShearForce => &self.shear_force,
        }
    }

    /// Governing (largest magnitude) value of a quantity
    pub fn governing(&self, quantity: Quantity) -> Option<DiagramPoint> {
        self.diagram(quantity).max_abs()
    }
}

/// Condition-keyed analyzer registry and dispatch.
pub struct Analysis {
    registry: HashMap<SupportCondition, Box<dyn Analyzer>>,
}

impl Default for Analysis {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut conditions: Vec<&'static str> = self.registry.keys().map(|c| c.key()).collect();
        conditions.sort_unstable();
        f.debug_struct("Analysis").field("conditions", &conditions).finish()
    }
}

impl Analysis {
    /// Create a facade with both built-in analyzers registered
    pub fn new() -> Self {
        let analyzers: [Box<dyn Analyzer>; 2] = [
            Box::new(SimplySupportedAnalyzer),
            Box::new(TwoSpanUnequalAnalyzer),
        ];
        let registry = analyzers
            .into_iter()
            .map(|analyzer| (analyzer.condition(), analyzer))
            .collect();
        Self { registry }
    }

    /// Process-wide facade, built on first use
    pub fn shared() -> &'static Analysis {
        &SHARED
    }

    /// Conditions with a registered analyzer
    pub fn conditions(&self) -> Vec<SupportCondition> {
        SupportCondition::ALL
            .iter()
            .copied()
            .filter(|c| self.registry.contains_key(c))
            .collect()
    }

    /// Deflection curve for a named condition
    pub fn deflection(&self, beam: &Beam, load: f64, condition: &str) -> CalcResult<AnalysisResult> {
        self.run(beam, load, condition, Quantity::Deflection)
    }

    /// Bending moment curve for a named condition
    pub fn bending_moment(&self, beam: &Beam, load: f64, condition: &str) -> CalcResult<AnalysisResult> {
        self.run(beam, load, condition, Quantity::BendingMoment)
    }

    /// Shear force curve for a named condition
    pub fn shear_force(&self, beam: &Beam, load: f64, condition: &str) -> CalcResult<AnalysisResult> {
        self.run(beam, load, condition, Quantity::ShearForce)
    }

    /// Support reactions for a named condition
    pub fn reactions(&self, beam: &Beam, load: f64, condition: &str) -> CalcResult<Vec<SupportReaction>> {
        let condition = condition.parse::<SupportCondition>()?;
        let analyzer = self.checked(beam, load, condition)?;
        Ok(analyzer.reactions(beam, load))
    }

    /// Every quantity plus reactions for a named condition
    pub fn analyze(&self, beam: &Beam, load: f64, condition: &str) -> CalcResult<BeamResponse> {
        let condition = condition.parse::<SupportCondition>()?;
        self.analyze_for(beam, load, condition)
    }

    /// Single quantity for an already-parsed condition
    pub fn quantity_for(
        &self,
        beam: &Beam,
        load: f64,
        condition: SupportCondition,
        quantity: Quantity,
    ) -> CalcResult<AnalysisResult> {
        let analyzer = self.checked(beam, load, condition)?;
        debug!("{} {} for {} m beam, w = {}", condition, quantity, beam.length_for(condition), load);

        let equation = match quantity {
            Quantity::Deflection => analyzer.deflection(beam, load),
            Quantity::BendingMoment => analyzer.bending_moment(beam, load),
            Quantity::ShearForce => analyzer.shear_force(beam, load),
        };

        Ok(AnalysisResult {
            beam: beam.clone(),
            load,
            condition,
            equation,
        })
    }

    /// Every quantity plus reactions for an already-parsed condition
    pub fn analyze_for(
        &self,
        beam: &Beam,
        load: f64,
        condition: SupportCondition,
    ) -> CalcResult<BeamResponse> {
        let analyzer = self.checked(beam, load, condition)?;
        debug!("{} full analysis for {} m beam, w = {}", condition, beam.length_for(condition), load);

        let curves = analyzer.curves(beam, load);
        Ok(BeamResponse {
            beam: beam.clone(),
            load,
            condition,
            reactions: curves.reactions,
            deflection: curves.deflection,
            bending_moment: curves.bending_moment,
            shear_force: curves.shear_force,
        })
    }

    fn run(&self, beam: &Beam, load: f64, condition: &str, quantity: Quantity) -> CalcResult<AnalysisResult> {
        let condition = condition.parse::<SupportCondition>().map_err(|err| {
            warn!("rejected {} request: {}", quantity, err);
            err
        })?;
        self.quantity_for(beam, load, condition, quantity)
    }

    /// Look up the analyzer and validate inputs before any computation
    fn checked(&self, beam: &Beam, load: f64, condition: SupportCondition) -> CalcResult<&dyn Analyzer> {
        let analyzer = self
            .registry
            .get(&condition)
            .ok_or_else(|| CalcError::invalid_condition(condition.key()))?;

        if !load.is_finite() {
            warn!("rejected non-finite load {}", load);
            return Err(CalcError::invalid_input(
                "load",
                load.to_string(),
                "Load must be a finite number",
            ));
        }

        beam.validate(condition).map_err(|err| {
            warn!("rejected beam for {}: {}", condition, err);
            err
        })?;

        Ok(analyzer.as_ref())
    }
}
