//! # Condition Analyzers
//!
//! One analyzer per support condition. Each analyzer follows the pattern:
//!
//! - solve whatever the condition needs once (reactions)
//! - sample the closed-form equations over the analyzed length
//! - return plain [`Diagram`] data
//!
//! ## Available Conditions
//!
//! - [`simply_supported`] - Single span, pinned at both ends
//! - [`two_span_unequal`] - Continuous beam over three supports

pub mod simply_supported;
pub mod two_span_unequal;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::diagram::Diagram;
use crate::errors::CalcError;

pub use simply_supported::SimplySupportedAnalyzer;
pub use two_span_unequal::TwoSpanUnequalAnalyzer;

/// Support condition a beam is analyzed under.
///
/// Raw condition names are parsed into this enum at the boundary; an unknown
/// name fails there with [`CalcError::InvalidCondition`].
///
/// ```rust
/// use beam_core::calculations::SupportCondition;
///
/// let condition: SupportCondition = "two-span-unequal".parse().unwrap();
/// assert_eq!(condition, SupportCondition::TwoSpanUnequal);
/// assert!("three-span".parse::<SupportCondition>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupportCondition {
    /// Single span, pin and roller at the ends
    SimplySupported,
    /// Two unequal spans over three supports
    TwoSpanUnequal,
}

impl SupportCondition {
    /// All available conditions
    pub const ALL: [SupportCondition; 2] = [
        SupportCondition::SimplySupported,
        SupportCondition::TwoSpanUnequal,
    ];

    /// Registry key, e.g. "simply-supported"
    pub fn key(&self) -> &'static str {
        match self {
            SupportCondition::SimplySupported => "simply-supported",
            SupportCondition::TwoSpanUnequal => "two-span-unequal",
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportCondition::SimplySupported => "Simply Supported",
            SupportCondition::TwoSpanUnequal => "Two-Span Unequal",
        }
    }

    /// Number of supports
    pub fn support_count(&self) -> usize {
        match self {
            SupportCondition::SimplySupported => 2,
            SupportCondition::TwoSpanUnequal => 3,
        }
    }
}

impl std::fmt::Display for SupportCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for SupportCondition {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SupportCondition::ALL
            .iter()
            .copied()
            .find(|c| c.key() == s)
            .ok_or_else(|| CalcError::invalid_condition(s))
    }
}

/// Vertical reaction at a support, positive upward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportReaction {
    /// Support position from the left end (m)
    pub position: f64,
    /// Reaction force (kN)
    pub force: f64,
}

/// Reactions and every sampled curve from a single solve
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseCurves {
    /// Support reactions, left to right
    pub reactions: Vec<SupportReaction>,
    /// Deflection curve (mm)
    pub deflection: Diagram,
    /// Bending moment curve (kNm)
    pub bending_moment: Diagram,
    /// Shear force curve (kN)
    pub shear_force: Diagram,
}

/// Response calculations for one support condition.
///
/// Implementations are pure: the same beam and load always give the same
/// diagrams, and nothing is cached between calls.
pub trait Analyzer: Send + Sync {
    /// Condition this analyzer handles
    fn condition(&self) -> SupportCondition;

    /// Sampled deflection curve (mm)
    fn deflection(&self, beam: &Beam, load: f64) -> Diagram;

    /// Sampled bending moment curve (kNm)
    fn bending_moment(&self, beam: &Beam, load: f64) -> Diagram;

    /// Sampled shear force curve (kN)
    fn shear_force(&self, beam: &Beam, load: f64) -> Diagram;

    /// Support reactions, left to right
    fn reactions(&self, beam: &Beam, load: f64) -> Vec<SupportReaction>;

    /// Reactions and all three curves.
    ///
    /// Analyzers that solve something before sampling should override this
    /// so the solve runs once.
    fn curves(&self, beam: &Beam, load: f64) -> ResponseCurves {
        ResponseCurves {
            reactions: self.reactions(beam, load),
            deflection: self.deflection(beam, load),
            bending_moment: self.bending_moment(beam, load),
            shear_force: self.shear_force(beam, load),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_keys_round_trip() {
        for condition in SupportCondition::ALL {
            assert_eq!(condition.key().parse::<SupportCondition>().unwrap(), condition);
            assert_eq!(condition.to_string(), condition.key());
        }
    }

    #[test]
    fn test_unknown_condition_rejected() {
        for raw in ["three-span", "", "Simply-Supported", " simply-supported"] {
            let err = raw.parse::<SupportCondition>().unwrap_err();
            assert_eq!(err.error_code(), "INVALID_CONDITION");
        }
    }

    #[test]
    fn test_condition_serializes_as_key() {
        let json = serde_json::to_string(&SupportCondition::TwoSpanUnequal).unwrap();
        assert_eq!(json, "\"two-span-unequal\"");
    }

    #[test]
    fn test_support_counts() {
        assert_eq!(SupportCondition::SimplySupported.support_count(), 2);
        assert_eq!(SupportCondition::TwoSpanUnequal.support_count(), 3);
        assert_eq!(SupportCondition::TwoSpanUnequal.display_name(), "Two-Span Unequal");
    }
}
