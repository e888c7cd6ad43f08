//! Ledger records
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use vela_core::{Difficulty, ExpressionCategory, ExpressionInput, VelaError};

/// One historical usage of an expression. Append-only: once written a
/// record is never modified, only superseded by later appends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionRecord {
    pub expression: String,
    pub category: ExpressionCategory,
    pub difficulty: Difficulty,
    /// Video the expression shipped in
    pub video_id: String,
    pub used_at: NaiveDate,
}

impl ExpressionRecord {
    /// Build a record from a validated input, stamped with a usage date
    pub fn from_input(
        input: &ExpressionInput,
        video_id: &str,
        used_at: NaiveDate,
    ) -> Result<Self, VelaError> {
        validate_input(input, video_id)?;

        Ok(Self {
            expression: input.expression.clone(),
            category: input.category,
            difficulty: input.difficulty,
            video_id: video_id.to_string(),
            used_at,
        })
    }
}

/// Structural validation for a prospective record
pub(crate) fn validate_input(input: &ExpressionInput, video_id: &str) -> Result<(), VelaError> {
    if input.expression.trim().is_empty() {
        return Err(VelaError::SchemaError("expression text is empty".to_string()));
    }
    if video_id.trim().is_empty() {
        return Err(VelaError::SchemaError("video id is empty".to_string()));
    }
    Ok(())
}

/// Case- and whitespace-insensitive comparison key
pub fn normalize_key(expression: &str) -> String {
    expression.trim().to_lowercase()
}
