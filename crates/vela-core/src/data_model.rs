//! Data Model: expressions, categories, and quiz contestants
use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic bucket an expression belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpressionCategory {
    Daily,
    Travel,
    Business,
    Dining,
    Shopping,
    Emotion,
}

impl fmt::Display for ExpressionCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExpressionCategory::Daily => write!(f, "daily"),
            ExpressionCategory::Travel => write!(f, "travel"),
            ExpressionCategory::Business => write!(f, "business"),
            ExpressionCategory::Dining => write!(f, "dining"),
            ExpressionCategory::Shopping => write!(f, "shopping"),
            ExpressionCategory::Emotion => write!(f, "emotion"),
        }
    }
}

/// Learner difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A single expression proposed for use in a video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpressionInput {
    /// The expression text as it will appear on screen
    pub expression: String,
    /// Topic bucket
    pub category: ExpressionCategory,
    /// Difficulty tier
    pub difficulty: Difficulty,
}

impl ExpressionInput {
    pub fn new(
        expression: impl Into<String>,
        category: ExpressionCategory,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            expression: expression.into(),
            category,
            difficulty,
        }
    }
}

/// A candidate pair proposed by script generation: the natural phrasing
/// and the deliberately unnatural one shown against it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpressionPair {
    /// What a native speaker would actually say
    pub native: String,
    /// The textbook/literal-translation phrasing
    pub non_native: String,
    /// Short gloss shown as the on-screen meaning
    pub meaning: String,
    pub category: ExpressionCategory,
    pub difficulty: Difficulty,
}

impl ExpressionPair {
    pub fn new(
        native: impl Into<String>,
        non_native: impl Into<String>,
        meaning: impl Into<String>,
        category: ExpressionCategory,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            native: native.into(),
            non_native: non_native.into(),
            meaning: meaning.into(),
            category,
            difficulty,
        }
    }

    /// The ledger record for the shipped (native) side of the pair
    pub fn to_input(&self) -> ExpressionInput {
        ExpressionInput::new(self.native.clone(), self.category, self.difficulty)
    }
}

/// Quiz contestant in the survival variant. Exactly two characters
/// appear per video; `PlayerOne` is the fixed tie-break default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Character {
    PlayerOne,
    PlayerTwo,
}

impl Character {
    /// The other contestant
    pub fn opponent(&self) -> Character {
        match self {
            Character::PlayerOne => Character::PlayerTwo,
            Character::PlayerTwo => Character::PlayerOne,
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Character::PlayerOne => write!(f, "player_one"),
            Character::PlayerTwo => write!(f, "player_two"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&ExpressionCategory::Dining).unwrap();
        assert_eq!(json, "\"dining\"");

        let parsed: ExpressionCategory = serde_json::from_str("\"travel\"").unwrap();
        assert_eq!(parsed, ExpressionCategory::Travel);
    }

    #[test]
    fn test_unrecognized_category_rejected() {
        let parsed: Result<ExpressionCategory, _> = serde_json::from_str("\"sports\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_pair_to_input() {
        let pair = ExpressionPair::new(
            "Sorry to bother you",
            "I am sorry for bothering you",
            "apologizing for an interruption",
            ExpressionCategory::Daily,
            Difficulty::Beginner,
        );

        let input = pair.to_input();
        assert_eq!(input.expression, "Sorry to bother you");
        assert_eq!(input.category, ExpressionCategory::Daily);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Character::PlayerOne.opponent(), Character::PlayerTwo);
        assert_eq!(Character::PlayerTwo.opponent(), Character::PlayerOne);
    }
}
