//! # Materials
//!
//! A [`Material`] is a named bundle of section/material properties. The only
//! property the analyzers read is the flexural rigidity `EI`, which is held as
//! a typed field. Any other named properties supplied by the caller are kept
//! alongside it untouched.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use beam_core::materials::Material;
//!
//! let steel = Material::new("S355 IPE200", 210_000.0);
//! assert_eq!(steel.ei, 210_000.0);
//!
//! // From a loose property map, e.g. parsed from a request file
//! let mut props = BTreeMap::new();
//! props.insert("EI".to_string(), 4_500.0);
//! props.insert("density".to_string(), 500.0);
//! let glulam = Material::from_properties("GL24h", props).unwrap();
//! assert_eq!(glulam.property("density"), Some(500.0));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Property key for flexural rigidity in a loose property map
pub const EI_KEY: &str = "EI";

/// Wire form of a material: a name and a loose property map.
///
/// Requests and responses both use this shape, so a material echoed in a
/// response can be fed straight back into a request.
///
/// ```json
/// { "name": "IPE200", "properties": { "EI": 210000.0, "fy": 355.0 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Material name
    pub name: String,
    /// Named numeric properties; must include `EI`
    #[serde(default)]
    pub properties: BTreeMap<String, f64>,
}

/// Section/material properties shared by one or more beams.
///
/// Serializes as a [`MaterialSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "MaterialSpec", try_from = "MaterialSpec")]
pub struct Material {
    /// Identifier shown in reports
    pub name: String,

    /// Flexural rigidity EI. Units follow the condition being analyzed.
    pub ei: f64,

    /// Additional named properties not used by the analyzers
    pub extra: BTreeMap<String, f64>,
}

impl From<Material> for MaterialSpec {
    fn from(material: Material) -> Self {
        let mut properties = material.extra;
        properties.insert(EI_KEY.to_string(), material.ei);
        MaterialSpec {
            name: material.name,
            properties,
        }
    }
}

impl TryFrom<MaterialSpec> for Material {
    type Error = CalcError;

    fn try_from(spec: MaterialSpec) -> Result<Self, Self::Error> {
        Material::from_properties(spec.name, spec.properties)
    }
}

impl Material {
    /// Create a material with only a flexural rigidity
    pub fn new(name: impl Into<String>, ei: f64) -> Self {
        Self {
            name: name.into(),
            ei,
            extra: BTreeMap::new(),
        }
    }

    /// Build a material from a free-form property map.
    ///
    /// The map must contain an `EI` entry; every other entry is kept in
    /// [`Material::extra`].
    pub fn from_properties(
        name: impl Into<String>,
        mut properties: BTreeMap<String, f64>,
    ) -> CalcResult<Self> {
        let ei = properties
            .remove(EI_KEY)
            .ok_or_else(|| CalcError::missing_field(format!("material.properties.{}", EI_KEY)))?;
        Ok(Self {
            name: name.into(),
            ei,
            extra: properties,
        })
    }

    /// Add an extra named property
    pub fn with_property(mut self, key: impl Into<String>, value: f64) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Look up a property by name, including `EI`
    pub fn property(&self, key: &str) -> Option<f64> {
        if key == EI_KEY {
            Some(self.ei)
        } else {
            self.extra.get(key).copied()
        }
    }

    /// Check that EI can be divided by
    pub fn validate(&self) -> CalcResult<()> {
        if !self.ei.is_finite() || self.ei <= 0.0 {
            return Err(CalcError::invalid_input(
                "material.EI",
                self.ei.to_string(),
                "Flexural rigidity must be a positive finite number",
            ));
        }
        Ok(())
    }
}
