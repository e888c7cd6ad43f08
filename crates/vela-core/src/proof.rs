//! Run Proof: blake3 fingerprints of pure pipeline stages
//!
//! Every stage of a generation run is deterministic, so a re-run over
//! the same inputs must reproduce the same in/out hashes. The proof is
//! the evidence attached to a plan for debugging drift.

use serde::{Deserialize, Serialize};

/// Fingerprint of a single stage execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageFingerprint {
    /// Stage id (ex: "exclude", "validate", "timing")
    pub id: String,
    pub in_hash: String,
    pub out_hash: String,
}

/// Ordered fingerprints for one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunProof {
    pub stages: Vec<StageFingerprint>,
}

impl RunProof {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a stage by hashing its serialized input and output
    pub fn record<I, O>(&mut self, id: &str, input: &I, output: &O)
    where
        I: Serialize,
        O: Serialize,
    {
        self.stages.push(StageFingerprint {
            id: id.to_string(),
            in_hash: hash_value(input),
            out_hash: hash_value(output),
        });
    }

    pub fn stage(&self, id: &str) -> Option<&StageFingerprint> {
        self.stages.iter().find(|s| s.id == id)
    }
}

/// blake3 hash of a value's canonical JSON encoding
pub fn hash_value<T: Serialize>(value: &T) -> String {
    let bytes = serde_json::to_vec(value).unwrap_or_default();
    format!("blake3:{}", blake3::hash(&bytes))
}
