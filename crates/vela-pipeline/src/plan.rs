//! Video planning
//!
//! Runs the full per-video sequence: exclusion filter → naturalness
//! validation → round outcome assignment → timing layout → chapter
//! markers → ledger recording. Aside from ledger I/O every stage is
//! pure, and each pure stage's input/output hashes are collected into
//! the plan's proof.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use vela_core::{Character, ExpressionInput, GenerationContext, RunProof, VelaError};
use vela_ledger::{check_exclusion, ExclusionReason, ExpressionLedger};
use vela_rounds::{
    assign_expressions, decide_round_outcomes, determine_final_winner, RoundAssignment,
};
use vela_timing::{calculate_video_timing, generate_timestamps, ChapterMark, VideoTiming};
use vela_validate::{ExpressionValidator, ValidationResult};

use crate::request::PlanRequest;

static VALIDATOR: Lazy<ExpressionValidator> = Lazy::new(ExpressionValidator::new);

/// Why a candidate did not make it into the video
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RejectionReason {
    /// Dropped by the exclusion filter before validation
    Excluded { reason: ExclusionReason },
    /// Failed naturalness validation
    FailedValidation { result: ValidationResult },
}

/// A dropped candidate with its reason
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectedCandidate {
    pub expression: String,
    pub reason: RejectionReason,
}

/// The complete plan handed to the compositing layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoPlan {
    pub video_id: String,
    pub rounds: Vec<RoundAssignment>,
    pub rejected: Vec<RejectedCandidate>,
    pub final_winner: Character,
    pub timing: VideoTiming,
    pub chapters: Vec<ChapterMark>,
    pub proof: RunProof,
}

/// Plan one video and record the shipped expressions in the ledger.
///
/// Ledger write failure is fatal; a failed or excluded candidate is a
/// normal outcome reported under `rejected`.
pub async fn plan_video(
    ledger: &mut ExpressionLedger,
    request: &PlanRequest,
    ctx: &GenerationContext,
) -> Result<VideoPlan, VelaError> {
    tracing::info!(
        channel = %ctx.channel,
        trace_id = %ctx.trace_id,
        video_id = %request.video_id,
        candidates = request.candidates.len(),
        "planning video"
    );

    let mut proof = RunProof::new();
    let mut rejected = Vec::new();

    // Exclusion: recently used or blacklisted natives never reach
    // validation
    let natives: Vec<String> = request.candidates.iter().map(|p| p.native.clone()).collect();
    let checks = check_exclusion(ledger, &natives, request.recent_window).await;
    proof.record("exclude", &natives, &checks);

    let mut survivors = Vec::new();
    for (pair, check) in request.candidates.iter().zip(&checks) {
        match check.reason {
            Some(reason) => rejected.push(RejectedCandidate {
                expression: pair.native.clone(),
                reason: RejectionReason::Excluded { reason },
            }),
            None => survivors.push(pair),
        }
    }

    // Validation: the native side must be acceptable to ship
    let survivor_natives: Vec<&str> = survivors.iter().map(|p| p.native.as_str()).collect();
    let mut accepted = Vec::new();
    let mut results = Vec::new();
    for pair in survivors {
        let result = VALIDATOR.validate(&pair.native);
        if result.is_acceptable() {
            accepted.push(pair.clone());
        } else {
            rejected.push(RejectedCandidate {
                expression: pair.native.clone(),
                reason: RejectionReason::FailedValidation {
                    result: result.clone(),
                },
            });
        }
        results.push(result);
    }
    proof.record("validate", &survivor_natives, &results);
    tracing::debug!(
        accepted = accepted.len(),
        rejected = rejected.len(),
        "candidate selection complete"
    );

    // Rounds: outcomes are fixed before any rendering happens
    let seed = request.round_seed.or(ctx.seed);
    let decisions = decide_round_outcomes(accepted.len(), seed);
    let rounds = assign_expressions(&decisions, &accepted);
    let final_winner = determine_final_winner(&decisions);
    proof.record("rounds", &seed, &decisions);

    // Timing and chapters
    let timing = calculate_video_timing(
        accepted.len(),
        &request.profile,
        &request.burst,
        &request.timing,
    );
    proof.record(
        "timing",
        &(accepted.len(), &request.profile, &request.burst, &request.timing),
        &timing,
    );
    let chapters = generate_timestamps(&timing);

    // Record usage so future videos exclude these expressions
    let inputs: Vec<ExpressionInput> = accepted.iter().map(|p| p.to_input()).collect();
    if !inputs.is_empty() {
        ledger.add_expressions(&inputs, &request.video_id).await?;
    }

    tracing::info!(
        rounds = rounds.len(),
        total_seconds = timing.total_duration_seconds,
        winner = %final_winner,
        "video plan ready"
    );

    Ok(VideoPlan {
        video_id: request.video_id.clone(),
        rounds,
        rejected,
        final_winner,
        timing,
        chapters,
        proof,
    })
}
