//! Expression Ledger: the persisted per-channel history
//!
//! Lazy load, eager whole-file persist after every mutation. A missing
//! or corrupt ledger file is treated as an empty ledger and never
//! surfaced to the caller; a failed write is fatal to the mutating
//! operation. One logical writer per channel at a time.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use vela_core::{ExpressionInput, VelaError};

use crate::record::{normalize_key, validate_input, ExpressionRecord};

/// Recency window used when the caller does not supply one
pub const DEFAULT_RECENT_WINDOW: usize = 10;

/// The on-disk shape of a channel ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerData {
    #[serde(default)]
    pub expressions: Vec<ExpressionRecord>,

    /// Expressions banned from future videos; original casing is kept,
    /// lookups are case- and whitespace-insensitive
    #[serde(default)]
    pub blacklist: Vec<String>,

    pub last_updated: DateTime<Utc>,
}

impl Default for LedgerData {
    fn default() -> Self {
        Self {
            expressions: Vec::new(),
            blacklist: Vec::new(),
            last_updated: Utc::now(),
        }
    }
}

/// Per-channel expression ledger backed by a single JSON file
pub struct ExpressionLedger {
    path: PathBuf,
    data: Option<LedgerData>,
}

impl ExpressionLedger {
    /// Ledger at an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            data: None,
        }
    }

    /// Ledger under the conventional per-channel location
    pub fn for_channel(root: impl AsRef<Path>, channel: &str) -> Self {
        Self::new(root.as_ref().join(channel).join("expressions.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load on first access. Load never fails: unreadable or malformed
    /// files become an empty ledger.
    async fn data(&mut self) -> &mut LedgerData {
        if self.data.is_none() {
            let loaded = match tokio::fs::read(&self.path).await {
                Ok(bytes) => match serde_json::from_slice::<LedgerData>(&bytes) {
                    Ok(data) => data,
                    Err(e) => {
                        tracing::warn!(
                            path = %self.path.display(),
                            error = %e,
                            "ledger file is corrupt, starting empty"
                        );
                        LedgerData::default()
                    }
                },
                Err(_) => LedgerData::default(),
            };
            self.data = Some(loaded);
        }
        self.data.as_mut().unwrap()
    }

    /// Whole-file rewrite of the current state
    async fn persist(&mut self) -> Result<(), VelaError> {
        let data = self.data().await;
        data.last_updated = Utc::now();
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| VelaError::SerializeError(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| VelaError::LedgerError(format!("{}: {}", parent.display(), e)))?;
        }
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| VelaError::LedgerError(format!("{}: {}", self.path.display(), e)))
    }

    /// Append one record stamped with today's date and persist
    pub async fn add_expression(
        &mut self,
        input: &ExpressionInput,
        video_id: &str,
    ) -> Result<(), VelaError> {
        self.add_expressions(std::slice::from_ref(input), video_id)
            .await
    }

    /// Append a batch for one video. Validation runs over the whole
    /// batch before anything is applied, so a bad input never commits
    /// partially.
    pub async fn add_expressions(
        &mut self,
        inputs: &[ExpressionInput],
        video_id: &str,
    ) -> Result<(), VelaError> {
        for input in inputs {
            validate_input(input, video_id)?;
        }

        let used_at = Utc::now().date_naive();
        let data = self.data().await;
        for input in inputs {
            data.expressions.push(ExpressionRecord {
                expression: input.expression.clone(),
                category: input.category,
                difficulty: input.difficulty,
                video_id: video_id.to_string(),
                used_at,
            });
        }
        self.persist().await
    }

    /// Unique expression texts used across the `video_count` most
    /// recent distinct videos. A video's recency is its latest recorded
    /// usage date; same-date ties rank by append order.
    pub async fn recent_expressions(&mut self, video_count: usize) -> Vec<String> {
        if video_count == 0 {
            return Vec::new();
        }
        let data = self.data().await;

        // (video_id, latest date, latest append index)
        let mut videos: Vec<(String, NaiveDate, usize)> = Vec::new();
        let mut slot: HashMap<&str, usize> = HashMap::new();
        for (idx, record) in data.expressions.iter().enumerate() {
            match slot.get(record.video_id.as_str()) {
                Some(&i) => {
                    if record.used_at > videos[i].1 {
                        videos[i].1 = record.used_at;
                    }
                    videos[i].2 = idx;
                }
                None => {
                    slot.insert(record.video_id.as_str(), videos.len());
                    videos.push((record.video_id.clone(), record.used_at, idx));
                }
            }
        }

        videos.sort_by(|a, b| (b.1, b.2).cmp(&(a.1, a.2)));
        let keep: HashSet<&str> = videos
            .iter()
            .take(video_count)
            .map(|(id, _, _)| id.as_str())
            .collect();

        let mut seen: HashSet<String> = HashSet::new();
        let mut recent = Vec::new();
        for record in &data.expressions {
            if keep.contains(record.video_id.as_str())
                && seen.insert(normalize_key(&record.expression))
            {
                recent.push(record.expression.clone());
            }
        }
        recent
    }

    /// Case- and whitespace-insensitive membership test against the
    /// recent-usage window
    pub async fn was_used_recently(&mut self, expression: &str, video_count: usize) -> bool {
        let key = normalize_key(expression);
        self.recent_expressions(video_count)
            .await
            .iter()
            .any(|e| normalize_key(e) == key)
    }

    pub async fn is_blacklisted(&mut self, expression: &str) -> bool {
        let key = normalize_key(expression);
        self.data()
            .await
            .blacklist
            .iter()
            .any(|entry| normalize_key(entry) == key)
    }

    /// Add to the blacklist, preserving the caller's casing. Inserting
    /// an expression already present (under normalization) is a no-op.
    pub async fn add_to_blacklist(&mut self, expression: &str) -> Result<(), VelaError> {
        let trimmed = expression.trim();
        if trimmed.is_empty() {
            return Err(VelaError::SchemaError("blacklist entry is empty".to_string()));
        }
        if self.is_blacklisted(trimmed).await {
            return Ok(());
        }
        let entry = trimmed.to_string();
        self.data().await.blacklist.push(entry);
        self.persist().await
    }

    /// Remove a blacklist entry; historical usage records are untouched
    pub async fn remove_from_blacklist(&mut self, expression: &str) -> Result<(), VelaError> {
        let key = normalize_key(expression);
        let data = self.data().await;
        let before = data.blacklist.len();
        data.blacklist.retain(|entry| normalize_key(entry) != key);
        if data.blacklist.len() == before {
            return Ok(());
        }
        self.persist().await
    }

    /// Current blacklist entries, original casing
    pub async fn blacklist(&mut self) -> &[String] {
        &self.data().await.blacklist
    }

    /// Total records ever appended
    pub async fn total_count(&mut self) -> usize {
        self.data().await.expressions.len()
    }

    /// Distinct expressions, case- and whitespace-insensitively
    pub async fn unique_count(&mut self) -> usize {
        self.data()
            .await
            .expressions
            .iter()
            .map(|record| normalize_key(&record.expression))
            .collect::<HashSet<_>>()
            .len()
    }
}
