//! Vela Core: Data Model, Error Model, and Run Context
//!
//! Shared foundation for the retention-timing and content-validation
//! engine behind the Vela video automation.

pub mod context;
pub mod data_model;
pub mod error;
pub mod proof;

pub use context::GenerationContext;
pub use data_model::{Character, Difficulty, ExpressionCategory, ExpressionInput, ExpressionPair};
pub use error::VelaError;
pub use proof::{RunProof, StageFingerprint};

/// Engine version
pub const VELA_VERSION: &str = "1.0.0";
