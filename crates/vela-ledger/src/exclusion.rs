//! Exclusion filtering
//!
//! Combines the ledger's recency window and blacklist into a single
//! exclude-set for a generation request. All comparisons are case- and
//! whitespace-insensitive; blacklisting outranks recency when both
//! apply.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::record::normalize_key;
use crate::store::ExpressionLedger;

/// Why a candidate was excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    Blacklisted,
    RecentlyUsed,
}

/// Per-candidate exclusion verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExclusionCheck {
    pub expression: String,
    pub excluded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ExclusionReason>,
}

/// The normalized exclude-set: recent usage ∪ blacklist
pub async fn excluded_expressions(
    ledger: &mut ExpressionLedger,
    recent_video_count: usize,
) -> HashSet<String> {
    let mut excluded: HashSet<String> = ledger
        .recent_expressions(recent_video_count)
        .await
        .iter()
        .map(|e| normalize_key(e))
        .collect();
    for entry in ledger.blacklist().await {
        excluded.insert(normalize_key(entry));
    }
    excluded
}

/// Drop excluded candidates, preserving input order
pub async fn filter_excluded(
    ledger: &mut ExpressionLedger,
    candidates: &[String],
    recent_video_count: usize,
) -> Vec<String> {
    let excluded = excluded_expressions(ledger, recent_video_count).await;
    candidates
        .iter()
        .filter(|candidate| !excluded.contains(&normalize_key(candidate)))
        .cloned()
        .collect()
}

/// Report, per candidate, whether and why it is excluded
pub async fn check_exclusion(
    ledger: &mut ExpressionLedger,
    candidates: &[String],
    recent_video_count: usize,
) -> Vec<ExclusionCheck> {
    let recent: HashSet<String> = ledger
        .recent_expressions(recent_video_count)
        .await
        .iter()
        .map(|e| normalize_key(e))
        .collect();
    let blacklist: HashSet<String> = ledger
        .blacklist()
        .await
        .iter()
        .map(|e| normalize_key(e))
        .collect();

    candidates
        .iter()
        .map(|candidate| {
            let key = normalize_key(candidate);
            let reason = if blacklist.contains(&key) {
                Some(ExclusionReason::Blacklisted)
            } else if recent.contains(&key) {
                Some(ExclusionReason::RecentlyUsed)
            } else {
                None
            };
            ExclusionCheck {
                expression: candidate.clone(),
                excluded: reason.is_some(),
                reason,
            }
        })
        .collect()
}
