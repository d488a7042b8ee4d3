use crate::PronunciationScorer;

use super::bigrams::{bigrams, intersection_count};
use super::normalize::normalize;

/// Score how closely `candidate` matches `reference`, from 0 to 100.
///
/// Both strings are [normalized](super::normalize::normalize), then compared
/// by the Dice coefficient of their character bigrams:
/// `floor(2 * shared / (bigrams(candidate) + bigrams(reference)) * 100)`.
///
/// - Either side empty after normalization: 0.
/// - Both sides identical after normalization: 100.
/// - Neither side has a bigram (both single characters, not equal): 0.
///
/// The result is symmetric in its arguments. Runtime grows with input length;
/// it is meant for sentence-length text, not whole documents.
pub fn score(candidate: &str, reference: &str) -> u8 {
    let candidate = normalize(candidate);
    let reference = normalize(reference);

    if candidate.is_empty() || reference.is_empty() {
        return 0;
    }
    if candidate == reference {
        return 100;
    }

    let candidate_pairs = bigrams(&candidate);
    let reference_pairs = bigrams(&reference);

    let union = candidate_pairs.len() + reference_pairs.len();
    if union == 0 {
        return 0;
    }
    let shared = intersection_count(&candidate_pairs, &reference_pairs);

    let ratio = (2.0 * shared as f64) / union as f64 * 100.0;
    // shared <= min(len) so ratio never exceeds 100
    ratio.floor().clamp(0.0, 100.0) as u8
}

/// Character-bigram Dice scorer.
///
/// Tolerant of capitalization, punctuation and single-letter recognition
/// slips, which shift only a couple of bigrams in a sentence.
///
/// ```
/// use practice_rs::{PronunciationScorer, scorers::bigram::BigramScorer};
///
/// let scorer = BigramScorer::new();
/// assert_eq!(scorer.score("Hello, World!", "hello world"), 100);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BigramScorer;

impl BigramScorer {
    pub fn new() -> Self {
        Self
    }
}

impl PronunciationScorer for BigramScorer {
    fn score(&self, candidate: &str, reference: &str) -> u8 {
        score(candidate, reference)
    }

    fn name(&self) -> &'static str {
        "bigram-dice"
    }
}
