//! Vela Rounds: Survival-Quiz Outcome Randomizer
//!
//! Pre-determines win/loss per round with an explicit seedable
//! generator, then binds validated expressions to the winning and
//! losing contestants. Assignment is pure relabeling; only the
//! per-round coin flips are random, and only when no seed is given.

pub mod outcome;
pub mod rng;

pub use outcome::{
    assign_expressions, decide_round_outcomes, determine_final_winner, RoundAssignment,
    WinnerDecision,
};
pub use rng::{advance, coin_flip, LCG_INCREMENT, LCG_MULTIPLIER};
