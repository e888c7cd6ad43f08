//! Round outcomes
//!
//! Win/loss per round is decided before any script content is bound to
//! it. Seeded runs use the explicit generator in [`crate::rng`];
//! unseeded runs draw a single random initial state and then follow
//! the same deterministic path.

use serde::{Deserialize, Serialize};
use vela_core::{Character, ExpressionPair};

use crate::rng::coin_flip;

/// Pre-determined outcome of one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerDecision {
    pub round_id: usize,
    pub winner: Character,
    pub loser: Character,
}

/// A round with its expressions bound to contestants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundAssignment {
    pub round_id: usize,
    pub winner: Character,
    pub loser: Character,
    /// The natural expression, spoken by the winner
    pub winning_line: String,
    /// The unnatural expression, spoken by the loser
    pub losing_line: String,
    /// On-screen gloss for the pair
    pub meaning: String,
}

/// Decide every round's winner up front. With a seed the sequence is
/// exactly reproducible; without one a single random initial state is
/// drawn and the same generator runs from there.
pub fn decide_round_outcomes(round_count: usize, seed: Option<u64>) -> Vec<WinnerDecision> {
    let mut state = seed.unwrap_or_else(rand::random::<u64>);

    (0..round_count)
        .map(|round_id| {
            let (next, player_one_wins) = coin_flip(state);
            state = next;

            let winner = if player_one_wins {
                Character::PlayerOne
            } else {
                Character::PlayerTwo
            };
            WinnerDecision {
                round_id,
                winner,
                loser: winner.opponent(),
            }
        })
        .collect()
}

/// Bind validated expression pairs to the decided outcomes. Pure
/// relabeling: the native line always goes to the round's winner.
pub fn assign_expressions(
    decisions: &[WinnerDecision],
    pairs: &[ExpressionPair],
) -> Vec<RoundAssignment> {
    decisions
        .iter()
        .zip(pairs.iter())
        .map(|(decision, pair)| RoundAssignment {
            round_id: decision.round_id,
            winner: decision.winner,
            loser: decision.loser,
            winning_line: pair.native.clone(),
            losing_line: pair.non_native.clone(),
            meaning: pair.meaning.clone(),
        })
        .collect()
}

/// Sum per-character wins across all rounds. Ties resolve to
/// `PlayerOne`; resolution is never randomized.
pub fn determine_final_winner(decisions: &[WinnerDecision]) -> Character {
    let player_one_wins = decisions
        .iter()
        .filter(|d| d.winner == Character::PlayerOne)
        .count();
    let player_two_wins = decisions.len() - player_one_wins;

    if player_two_wins > player_one_wins {
        Character::PlayerTwo
    } else {
        Character::PlayerOne
    }
}
