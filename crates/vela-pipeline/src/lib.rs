//! Vela Pipeline: Plan Orchestration
//!
//! Wires the engine's components into the per-video sequence the
//! surrounding automation calls:
//!
//! ```text
//! candidates → Exclusion Filter → Validator → Round Outcomes
//!                    ↓                ↓             ↓
//!                 Ledger         rejected[]     rounds[]
//!                    ↑                               ↓
//!              record usage  ←  Timing Layout → Chapter Markers
//! ```
//!
//! Script drafting, narration, imagery, and rendering live outside this
//! engine; the pipeline consumes already-resolved candidate pairs and
//! returns a [`VideoPlan`] value.
//!
//! # Example
//!
//! ```
//! use vela_core::{Difficulty, ExpressionCategory, ExpressionPair};
//! use vela_pipeline::PlanRequest;
//! use vela_timing::TimingProfile;
//!
//! let pair = ExpressionPair::new(
//!     "Sorry to bother you",
//!     "I am sorry for bothering you",
//!     "apologizing for an interruption",
//!     ExpressionCategory::Daily,
//!     Difficulty::Beginner,
//! );
//!
//! let request = PlanRequest::new("vid-001", vec![pair])
//!     .with_profile(TimingProfile::fast())
//!     .with_seed(42);
//! assert_eq!(request.round_seed, Some(42));
//! ```

pub mod plan;
pub mod request;

pub use plan::{plan_video, RejectedCandidate, RejectionReason, VideoPlan};
pub use request::PlanRequest;
