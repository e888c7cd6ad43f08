//! Generation Context: per-job state shared across pipeline stages
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct GenerationContext {
    /// Channel identity the ledger is scoped to
    pub channel: String,
    pub trace_id: String,
    /// Seed for round-outcome determinism; None means entropy
    pub seed: Option<u64>,
    pub metadata: HashMap<String, Value>,
}

impl GenerationContext {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            trace_id: uuid::Uuid::new_v4().to_string(),
            seed: None,
            metadata: HashMap::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
