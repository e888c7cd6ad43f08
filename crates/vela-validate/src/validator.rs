//! Expression validation
//!
//! Folds a candidate expression over the active pattern set (built-in
//! registry plus caller-registered patterns) and derives a status,
//! confidence score, and remediation suggestions. Pure and
//! deterministic: identical expression and pattern set always produce
//! an identical result.

use serde::{Deserialize, Serialize};

use crate::pattern::{ForbiddenPattern, PatternSeverity};
use crate::registry::{builtin_patterns, has_formal_marker, has_informal_contraction, has_negation};

/// Confidence penalty per matched error pattern
const ERROR_PENALTY: f64 = 0.30;
/// Confidence penalty per matched warning pattern
const WARNING_PENALTY: f64 = 0.10;
/// Register nudge for formal markers / informal contractions
const REGISTER_NUDGE: f64 = 0.05;

/// Validation outcome for a single expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Passed,
    Warning,
    Failed,
}

/// The result of validating one expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub status: ValidationStatus,

    /// The expression as validated
    pub expression: String,

    /// Naturalness heuristic in [0, 1]
    pub confidence_score: f64,

    /// Names of every matched pattern, in registry order
    pub matched_patterns: Vec<String>,

    /// Union of matched patterns' suggestions, first-seen order
    pub suggestions: Vec<String>,

    /// Matched pattern descriptions joined with "; "
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Whether the expression may ship (passed or warning)
    pub fn is_acceptable(&self) -> bool {
        !matches!(self.status, ValidationStatus::Failed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, ValidationStatus::Failed)
    }
}

/// Validates expressions against the built-in registry plus any
/// registered custom patterns. Stateless between calls.
#[derive(Debug, Clone, Default)]
pub struct ExpressionValidator {
    custom: Vec<ForbiddenPattern>,
}

impl ExpressionValidator {
    /// Validator over the built-in registry only
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator with additional custom patterns
    pub fn with_patterns(custom: Vec<ForbiddenPattern>) -> Self {
        Self { custom }
    }

    /// Register one more pattern. Composes with the built-in set; the
    /// built-ins themselves are never mutated.
    pub fn register(&mut self, pattern: ForbiddenPattern) {
        self.custom.push(pattern);
    }

    /// The active pattern set, built-ins first
    pub fn patterns(&self) -> impl Iterator<Item = &ForbiddenPattern> {
        builtin_patterns().iter().chain(self.custom.iter())
    }

    /// Validate a single expression. Every pattern is tested; matching
    /// never short-circuits, so overlapping patterns all contribute.
    pub fn validate(&self, expression: &str) -> ValidationResult {
        let mut matched_patterns: Vec<String> = Vec::new();
        let mut suggestions: Vec<String> = Vec::new();
        let mut descriptions: Vec<String> = Vec::new();
        let mut worst: Option<PatternSeverity> = None;
        let mut confidence = 1.0f64;

        for pattern in self.patterns() {
            if !pattern.matches(expression) {
                continue;
            }
            if matched_patterns.iter().any(|name| name == &pattern.name) {
                continue;
            }

            matched_patterns.push(pattern.name.clone());
            descriptions.push(pattern.description.clone());

            confidence -= match pattern.severity {
                PatternSeverity::Error => ERROR_PENALTY,
                PatternSeverity::Warning => WARNING_PENALTY,
            };
            worst = Some(worst.map_or(pattern.severity, |w| w.max(pattern.severity)));

            for suggestion in &pattern.suggestions {
                if !suggestions.contains(suggestion) {
                    suggestions.push(suggestion.clone());
                }
            }
        }

        // Register nudges: written-register markers cost a little unless
        // the marker is part of a negation; spoken-register contractions
        // earn a little back.
        if has_formal_marker(expression) && !has_negation(expression) {
            confidence -= REGISTER_NUDGE;
        }
        if has_informal_contraction(expression) {
            confidence += REGISTER_NUDGE;
        }

        let status = match worst {
            Some(PatternSeverity::Error) => ValidationStatus::Failed,
            Some(PatternSeverity::Warning) => ValidationStatus::Warning,
            None => ValidationStatus::Passed,
        };

        let reason = if descriptions.is_empty() {
            None
        } else {
            Some(descriptions.join("; "))
        };

        ValidationResult {
            status,
            expression: expression.to_string(),
            confidence_score: confidence.clamp(0.0, 1.0),
            matched_patterns,
            suggestions,
            reason,
        }
    }

    /// Validate many expressions in order
    pub fn validate_all<'a, I>(&self, expressions: I) -> Vec<ValidationResult>
    where
        I: IntoIterator<Item = &'a str>,
    {
        expressions.into_iter().map(|e| self.validate(e)).collect()
    }
}

/// Validate one expression against the built-in registry
pub fn validate_expression(expression: &str) -> ValidationResult {
    ExpressionValidator::new().validate(expression)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_expression_passes() {
        let result = validate_expression("Sorry to bother you, quick question");

        assert_eq!(result.status, ValidationStatus::Passed);
        assert!(result.matched_patterns.is_empty());
        assert!(result.suggestions.is_empty());
        assert!(result.reason.is_none());
    }

    #[test]
    fn test_error_pattern_fails_with_reduced_confidence() {
        let result = validate_expression("I am sorry for bothering you");

        assert_eq!(result.status, ValidationStatus::Failed);
        assert!(result.confidence_score < 1.0);
        assert!(result
            .matched_patterns
            .contains(&"overly-formal-apology".to_string()));
        assert!(result.suggestions.contains(&"Sorry to bother you".to_string()));
        assert!(result.reason.is_some());
    }

    #[test]
    fn test_confidence_arithmetic() {
        // One error (-0.30) plus a formal marker without negation (-0.05)
        let result = validate_expression("I am sorry for bothering you");
        assert!((result.confidence_score - 0.65).abs() < 1e-9);

        // One warning (-0.10), no register markers
        let result = validate_expression("The food was very delicious");
        assert!((result.confidence_score - 0.90).abs() < 1e-9);
    }

    #[test]
    fn test_contraction_nudges_up_and_clamps() {
        let clean = validate_expression("I'm heading out, want anything?");
        assert_eq!(clean.status, ValidationStatus::Passed);
        // +0.05 with nothing matched still clamps to 1.0
        assert_eq!(clean.confidence_score, 1.0);
    }

    #[test]
    fn test_warning_status() {
        let result = validate_expression("My hobby is collecting stamps");
        assert_eq!(result.status, ValidationStatus::Warning);
    }

    #[test]
    fn test_multiple_matches_accumulate() {
        // Warning (so-so) + warning (until-now): both names recorded
        let result = validate_expression("It was so-so until now");

        assert_eq!(result.status, ValidationStatus::Warning);
        assert_eq!(result.matched_patterns.len(), 2);
        let reason = result.reason.unwrap();
        assert!(reason.contains("; "));
    }

    #[test]
    fn test_empty_expression_passes() {
        let result = validate_expression("");

        assert_eq!(result.status, ValidationStatus::Passed);
        assert_eq!(result.confidence_score, 1.0);
    }

    #[test]
    fn test_determinism() {
        let validator = ExpressionValidator::new();
        let a = validator.validate("I am sorry for bothering you");
        let b = validator.validate("I am sorry for bothering you");

        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_custom_pattern_composition() {
        use crate::pattern::{ForbiddenPattern, PatternSeverity};

        let mut validator = ExpressionValidator::new();
        validator.register(
            ForbiddenPattern::phrase("long-time", "it has been a long time", "Stiff reunion line")
                .unwrap()
                .with_severity(PatternSeverity::Warning)
                .with_suggestion("Long time no see"),
        );

        let result = validator.validate("It has been a long time");
        assert_eq!(result.status, ValidationStatus::Warning);
        assert!(result.matched_patterns.contains(&"long-time".to_string()));

        // Unrelated expressions are untouched by the custom pattern
        let clean = validator.validate("See you tomorrow");
        assert_eq!(clean.status, ValidationStatus::Passed);
    }

    #[test]
    fn test_suggestions_deduplicated_in_order() {
        use crate::pattern::ForbiddenPattern;

        let mut validator = ExpressionValidator::new();
        // Shares a suggestion with the built-in apology pattern
        validator.register(
            ForbiddenPattern::phrase("sorry-for-disturb", "sorry for disturbing", "Stiff")
                .unwrap()
                .with_suggestion("Sorry to bother you")
                .with_suggestion("My bad"),
        );

        let result = validator.validate("I am sorry for disturbing you");
        let bother_count = result
            .suggestions
            .iter()
            .filter(|s| *s == "Sorry to bother you")
            .count();
        assert_eq!(bother_count, 1);
        assert!(result.suggestions.contains(&"My bad".to_string()));
    }
}
