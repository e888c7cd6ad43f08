//! Forbidden linguistic patterns
//!
//! Each pattern is a value record: a compiled word-boundary-anchored
//! matcher plus the remediation shown to the script writer. Matching is
//! case-insensitive.

use regex::Regex;
use serde::{Deserialize, Serialize};
use vela_core::VelaError;

/// Severity of a pattern match (determines validation status)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternSeverity {
    Warning = 1,
    Error = 2,
}

/// A known-bad surface pattern with remediation suggestions
#[derive(Debug, Clone)]
pub struct ForbiddenPattern {
    /// Unique key (ex: "overly-formal-apology")
    pub name: String,

    /// What the pattern flags, shown in the result reason
    pub description: String,

    /// Replacement phrasings, in preference order
    pub suggestions: Vec<String>,

    /// Severity when matched
    pub severity: PatternSeverity,

    matcher: Regex,
}

impl ForbiddenPattern {
    /// Create a pattern from a raw regex source. The source is compiled
    /// case-insensitively; callers are expected to anchor token edges
    /// with `\b` so substrings of unrelated words never match.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        description: impl Into<String>,
    ) -> Result<Self, VelaError> {
        let matcher = Regex::new(&format!("(?i){}", pattern))
            .map_err(|e| VelaError::PatternError(format!("invalid matcher: {}", e)))?;

        Ok(Self {
            name: name.into(),
            description: description.into(),
            suggestions: Vec::new(),
            severity: PatternSeverity::Error,
            matcher,
        })
    }

    /// Create a pattern from a literal phrase, escaped and anchored on
    /// both sides with word boundaries.
    pub fn phrase(
        name: impl Into<String>,
        phrase: &str,
        description: impl Into<String>,
    ) -> Result<Self, VelaError> {
        Self::new(name, &format!(r"\b{}\b", regex::escape(phrase)), description)
    }

    /// Set severity
    pub fn with_severity(mut self, severity: PatternSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Check the expression against this pattern
    pub fn matches(&self, expression: &str) -> bool {
        self.matcher.is_match(expression)
    }

    /// The compiled matcher source
    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }
}
