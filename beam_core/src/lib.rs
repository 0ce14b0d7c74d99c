//! # beam_core - Beam Response Engine
//!
//! `beam_core` computes deflection, bending-moment and shear-force curves for
//! prismatic beams under a uniformly distributed load. Two support conditions
//! are available: a single simply-supported span and a continuous beam over
//! three supports with unequal spans.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Every analysis is a pure function of beam, load and condition
//! - **JSON-First**: All inputs and outputs implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No Rendering**: Curves are returned as data; plotting is left to callers
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use beam_core::{Analysis, Beam, Material};
//!
//! let steel = Arc::new(Material::new("steel", 210_000.0));
//! let beam = Beam::new(6.0, 0.0, 1.0, steel);
//!
//! let result = Analysis::shared()
//!     .bending_moment(&beam, 10.0, "simply-supported")
//!     .unwrap();
//!
//! assert_eq!(result.equation.len(), 101);
//! assert_eq!(result.equation.values[50], -45.0);
//! ```
//!
//! ## Modules
//!
//! - [`analysis`] - Condition-keyed facade and result types
//! - [`calculations`] - Per-condition analyzers
//! - [`equations`] - Closed-form response equations
//! - [`diagram`] - Sampled response curves
//! - [`beam`] / [`materials`] - Input data types
//! - [`request`] - JSON analysis requests
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod beam;
pub mod calculations;
pub mod diagram;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod request;

// Re-export commonly used types at crate root for convenience
pub use analysis::{Analysis, AnalysisResult, BeamResponse};
pub use beam::Beam;
pub use calculations::{
    Analyzer, ResponseCurves, SimplySupportedAnalyzer, SupportCondition, SupportReaction,
    TwoSpanUnequalAnalyzer,
};
pub use diagram::{Diagram, DiagramPoint, Quantity, SAMPLE_COUNT};
pub use errors::{CalcError, CalcResult};
pub use materials::{Material, MaterialSpec};
pub use request::{load_request, AnalysisRequest};
