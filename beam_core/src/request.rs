//! # Analysis Requests
//!
//! JSON description of a single analysis, as written by a front end or by
//! hand. The material is given as a loose property map and is converted
//! into a typed [`Material`] when the request is resolved, so a missing `EI`
//! is reported up front instead of surfacing as a NaN curve.
//!
//! ```json
//! {
//!   "condition": "two-span-unequal",
//!   "beam": { "primary_span": 4.0, "secondary_span": 6.0, "j2": 1.0 },
//!   "material": { "name": "IPE200", "properties": { "EI": 210000.0 } },
//!   "load": 5.0
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::{Analysis, BeamResponse};
use crate::beam::Beam;
use crate::calculations::SupportCondition;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{Material, MaterialSpec};

/// Beam geometry section of a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSpec {
    /// First span (m)
    pub primary_span: f64,
    /// Second span (m)
    #[serde(default)]
    pub secondary_span: f64,
    /// Inertia scale factor for deflections
    #[serde(default = "default_j2")]
    pub j2: f64,
}

fn default_j2() -> f64 {
    1.0
}

/// A complete analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Condition key; omitting it is an error when the request is run
    #[serde(default)]
    pub condition: Option<String>,
    /// Beam geometry
    pub beam: BeamSpec,
    /// Beam material; `EI` is checked when the request is resolved
    pub material: MaterialSpec,
    /// Uniform load (kN/m)
    pub load: f64,
}

impl AnalysisRequest {
    /// Parse a request from JSON text
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Condition named by the request
    pub fn condition(&self) -> CalcResult<SupportCondition> {
        match self.condition.as_deref() {
            Some(raw) => raw.parse(),
            None => Err(CalcError::invalid_condition("")),
        }
    }

    /// Build the typed beam (and its material) described by the request
    pub fn build_beam(&self) -> CalcResult<Beam> {
        let material = Material::try_from(self.material.clone())?;
        Ok(Beam::new(
            self.beam.primary_span,
            self.beam.secondary_span,
            self.beam.j2,
            Arc::new(material),
        ))
    }

    /// Run a full analysis through the given facade
    pub fn run(&self, analysis: &Analysis) -> CalcResult<BeamResponse> {
        let condition = self.condition()?;
        let beam = self.build_beam()?;
        analysis.analyze_for(&beam, self.load, condition)
    }
}

/// Load a request from a JSON file
pub fn load_request(path: impl AsRef<Path>) -> CalcResult<AnalysisRequest> {
    let path = path.as_ref();
    debug!("loading request from {}", path.display());

    let json = std::fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    AnalysisRequest::from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SPAN: &str = r#"{
        "condition": "two-span-unequal",
        "beam": { "primary_span": 4.0, "secondary_span": 6.0 },
        "material": { "name": "IPE200", "properties": { "EI": 210000.0, "fy": 355.0 } },
        "load": 5.0
    }"#;

    #[test]
    fn test_parse_and_run() {
        let request = AnalysisRequest::from_json(TWO_SPAN).unwrap();
        assert_eq!(request.beam.j2, 1.0);
        assert_eq!(request.condition().unwrap(), SupportCondition::TwoSpanUnequal);

        let beam = request.build_beam().unwrap();
        assert_eq!(beam.material.property("fy"), Some(355.0));

        let response = request.run(&Analysis::new()).unwrap();
        assert_eq!(response.reactions.len(), 3);
        assert_eq!(response.reactions[0].force, 12.375);
    }

    #[test]
    fn test_missing_condition_is_invalid_condition() {
        let json = TWO_SPAN.replace("\"condition\": \"two-span-unequal\",", "");
        let request = AnalysisRequest::from_json(&json).unwrap();
        assert!(request.condition.is_none());
        let err = request.run(&Analysis::new()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONDITION");
    }

    #[test]
    fn test_missing_ei_is_missing_field() {
        let json = TWO_SPAN.replace("\"EI\": 210000.0, ", "");
        let request = AnalysisRequest::from_json(&json).unwrap();
        let err = request.run(&Analysis::new()).unwrap_err();
        assert_eq!(err, CalcError::missing_field("material.properties.EI"));
    }

    #[test]
    fn test_response_feeds_back_as_request() {
        let first = AnalysisRequest::from_json(TWO_SPAN)
            .unwrap()
            .run(&Analysis::new())
            .unwrap();
        let echoed = serde_json::to_value(&first).unwrap();
        assert_eq!(
            echoed["beam"]["material"]["properties"]["EI"],
            serde_json::json!(210000.0)
        );

        let again = serde_json::json!({
            "condition": echoed["condition"],
            "beam": echoed["beam"],
            "material": echoed["beam"]["material"],
            "load": echoed["load"],
        });
        let request: AnalysisRequest = serde_json::from_value(again).unwrap();
        assert_eq!(request.material.properties.get("fy"), Some(&355.0));

        let second = request.run(&Analysis::new()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_json() {
        let err = AnalysisRequest::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_request_missing_file() {
        let err = load_request("/nonexistent/beam-request.json").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
