//! Pattern packs
//!
//! Channel-specific pattern extensions loaded from YAML. A pack entry
//! gives either a literal `phrase` (escaped and word-anchored) or a raw
//! `regex`. Compiled packs are registered into a validator; the
//! built-in registry is never modified.

use serde::{Deserialize, Serialize};
use vela_core::VelaError;

use crate::pattern::{ForbiddenPattern, PatternSeverity};

/// A loadable set of extension patterns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternPack {
    pub version: String,
    pub patterns: Vec<PatternSpec>,
}

/// One pattern entry as authored in YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSpec {
    pub name: String,
    pub description: String,

    #[serde(default = "default_severity")]
    pub severity: PatternSeverity,

    #[serde(default)]
    pub suggestions: Vec<String>,

    /// Literal phrase to anchor and escape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrase: Option<String>,

    /// Raw regex source (mutually exclusive with `phrase`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

fn default_severity() -> PatternSeverity {
    PatternSeverity::Error
}

impl PatternPack {
    /// Parse a pack from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, VelaError> {
        serde_yaml::from_str(yaml).map_err(|e| VelaError::SchemaError(e.to_string()))
    }

    /// Compile every entry into a matcher-backed pattern
    pub fn compile(&self) -> Result<Vec<ForbiddenPattern>, VelaError> {
        self.patterns.iter().map(compile_spec).collect()
    }
}

fn compile_spec(spec: &PatternSpec) -> Result<ForbiddenPattern, VelaError> {
    let mut pattern = match (&spec.phrase, &spec.regex) {
        (Some(phrase), None) => {
            ForbiddenPattern::phrase(&spec.name, phrase, &spec.description)?
        }
        (None, Some(regex)) => ForbiddenPattern::new(&spec.name, regex, &spec.description)?,
        _ => {
            return Err(VelaError::SchemaError(format!(
                "pattern '{}' must give exactly one of phrase or regex",
                spec.name
            )))
        }
    };

    pattern = pattern.with_severity(spec.severity);
    for suggestion in &spec.suggestions {
        pattern = pattern.with_suggestion(suggestion);
    }
    Ok(pattern)
}
