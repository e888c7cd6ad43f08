//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VelaError {
    #[error("LEDGER/{0}")]
    LedgerError(String),

    #[error("TIMING/{0}")]
    TimingError(String),

    #[error("PATTERN/{0}")]
    PatternError(String),

    #[error("SCHEMA/{0}")]
    SchemaError(String),

    #[error("SERIALIZE/{0}")]
    SerializeError(String),
}
