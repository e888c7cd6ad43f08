//! Vela Ledger: Expression History and Exclusion
//!
//! Persistent record of every expression shipped in past videos, plus
//! the channel blacklist. The ledger gates script generation: anything
//! used inside the recency window or explicitly banned is excluded
//! from new candidate sets.
//!
//! Storage is a single JSON file per channel, loaded lazily and
//! rewritten in full after every mutation. Load never fails; writes
//! propagate errors to the mutating caller.

pub mod exclusion;
pub mod record;
pub mod store;

pub use exclusion::{
    check_exclusion, excluded_expressions, filter_excluded, ExclusionCheck, ExclusionReason,
};
pub use record::{normalize_key, ExpressionRecord};
pub use store::{ExpressionLedger, LedgerData, DEFAULT_RECENT_WINDOW};
