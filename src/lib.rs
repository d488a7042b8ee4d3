//! # practice-rs
//!
//! A Rust library for scoring spoken pronunciation practice: compare what a
//! speech recognizer heard against a word's example sentence and turn the
//! result into learner feedback.
//!
//! ## Features
//!
//! - **Bigram scoring**: Dice similarity over character bigrams, tolerant of
//!   case, punctuation and small recognition slips
//! - **Configurable feedback**: correct / close / incorrect tiers and an
//!   auto-reveal threshold, loadable from JSON
//! - **Incremental transcripts**: practice attempts that accept every interim
//!   result a recognizer emits
//!
//! ## Quick Start
//!
//! ```rust
//! use practice_rs::{score, BigramScorer, PronunciationScorer, ScoringPolicy, MatchTier};
//!
//! assert_eq!(score("Hello, World!", "hello world"), 100);
//!
//! let scorer = BigramScorer::new();
//! let feedback = scorer.assess(
//!     "the cat sit on the mat",
//!     "The cat sat on the mat.",
//!     &ScoringPolicy::default(),
//! );
//! assert_ne!(feedback.tier, MatchTier::Incorrect);
//! ```

pub mod error;
pub mod policy;
pub mod scorers;
pub mod session;
pub mod word;

use serde::{Deserialize, Serialize};

pub use error::PracticeError;
pub use policy::{MatchTier, ScoringPolicy};
pub use scorers::bigram::{score, BigramScorer};
pub use session::PracticeAttempt;
pub use word::WordItem;

/// Feedback for one transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// Similarity to the reference sentence, 0–100
    pub score: u8,
    pub tier: MatchTier,
    /// Whether this score is high enough to show the answer
    pub reveal: bool,
}

/// Common interface for pronunciation scorers.
///
/// Implementations must be total: every pair of strings maps to a score in
/// `0..=100` without panicking.
pub trait PronunciationScorer {
    /// Score `candidate` (what was heard) against `reference` (what was expected).
    fn score(&self, candidate: &str, reference: &str) -> u8;

    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Score and classify in one step.
    ///
    /// Default implementation calls `score()` then `ScoringPolicy::assess()`.
    fn assess(&self, candidate: &str, reference: &str, policy: &ScoringPolicy) -> Assessment {
        policy.assess(self.score(candidate, reference))
    }
}

impl<T: PronunciationScorer + ?Sized> PronunciationScorer for &T {
    fn score(&self, candidate: &str, reference: &str) -> u8 {
        (**self).score(candidate, reference)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: PronunciationScorer + ?Sized> PronunciationScorer for Box<T> {
    fn score(&self, candidate: &str, reference: &str) -> u8 {
        (**self).score(candidate, reference)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
