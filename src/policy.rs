use std::path::Path;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::PracticeError;
use crate::Assessment;

/// Default lower bound of the "correct" tier.
pub const DEFAULT_CORRECT_THRESHOLD: u8 = 90;
/// Default lower bound of the "close" tier.
pub const DEFAULT_CLOSE_THRESHOLD: u8 = 70;
/// Default score at which the answer is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: u8 = 90;

/// Feedback tier for a practice score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Correct,
    Close,
    Incorrect,
}

/// Thresholds that turn a raw score into feedback.
///
/// Scores at or above `correct_threshold` are [`MatchTier::Correct`], scores
/// at or above `close_threshold` are [`MatchTier::Close`], everything else is
/// [`MatchTier::Incorrect`]. The answer is revealed once a score reaches
/// `reveal_threshold`.
///
/// ```rust
/// use practice_rs::ScoringPolicy;
///
/// let policy = ScoringPolicy::builder()
///     .correct_threshold(85)
///     .close_threshold(60)
///     .build()?;
/// assert_eq!(policy.reveal_threshold, 90);
/// # Ok::<(), practice_rs::PracticeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "PracticeError"))]
#[serde(default, deny_unknown_fields)]
pub struct ScoringPolicy {
    #[builder(default = "DEFAULT_CORRECT_THRESHOLD")]
    pub correct_threshold: u8,
    #[builder(default = "DEFAULT_CLOSE_THRESHOLD")]
    pub close_threshold: u8,
    #[builder(default = "DEFAULT_REVEAL_THRESHOLD")]
    pub reveal_threshold: u8,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            correct_threshold: DEFAULT_CORRECT_THRESHOLD,
            close_threshold: DEFAULT_CLOSE_THRESHOLD,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
        }
    }
}

impl ScoringPolicyBuilder {
    fn validate(&self) -> Result<(), PracticeError> {
        check_thresholds(
            self.correct_threshold.unwrap_or(DEFAULT_CORRECT_THRESHOLD),
            self.close_threshold.unwrap_or(DEFAULT_CLOSE_THRESHOLD),
            self.reveal_threshold.unwrap_or(DEFAULT_REVEAL_THRESHOLD),
        )
    }
}

impl ScoringPolicy {
    pub fn builder() -> ScoringPolicyBuilder {
        ScoringPolicyBuilder::default()
    }

    /// Parse a policy from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, PracticeError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Load a policy from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, PracticeError> {
        log::info!("Loading scoring policy from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<(), PracticeError> {
        check_thresholds(
            self.correct_threshold,
            self.close_threshold,
            self.reveal_threshold,
        )
    }

    pub fn classify(&self, score: u8) -> MatchTier {
        if score >= self.correct_threshold {
            MatchTier::Correct
        } else if score >= self.close_threshold {
            MatchTier::Close
        } else {
            MatchTier::Incorrect
        }
    }

    pub fn should_reveal(&self, score: u8) -> bool {
        score >= self.reveal_threshold
    }

    /// Classify a score and decide whether it reveals the answer.
    pub fn assess(&self, score: u8) -> Assessment {
        Assessment {
            score,
            tier: self.classify(score),
            reveal: self.should_reveal(score),
        }
    }
}

fn check_thresholds(correct: u8, close: u8, reveal: u8) -> Result<(), PracticeError> {
    for (name, value) in [("correct", correct), ("close", close), ("reveal", reveal)] {
        if value > 100 {
            return Err(PracticeError::InvalidPolicy(format!(
                "{name} threshold {value} exceeds 100"
            )));
        }
    }
    if close > correct {
        return Err(PracticeError::InvalidPolicy(format!(
            "close threshold {close} is above correct threshold {correct}"
        )));
    }
    Ok(())
}

impl From<derive_builder::UninitializedFieldError> for PracticeError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        PracticeError::InvalidPolicy(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_tiers_match_practice_feedback() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.classify(100), MatchTier::Correct);
        assert_eq!(policy.classify(90), MatchTier::Correct);
        assert_eq!(policy.classify(89), MatchTier::Close);
        assert_eq!(policy.classify(70), MatchTier::Close);
        assert_eq!(policy.classify(69), MatchTier::Incorrect);
        assert_eq!(policy.classify(0), MatchTier::Incorrect);
    }

    #[test]
    fn reveal_follows_its_own_threshold() {
        let policy = ScoringPolicy::builder()
            .reveal_threshold(75)
            .build()
            .unwrap();
        assert!(!policy.should_reveal(74));
        assert!(policy.should_reveal(75));
        assert_eq!(policy.classify(75), MatchTier::Close);
    }

    #[test]
    fn assess_combines_tier_and_reveal() {
        let a = ScoringPolicy::default().assess(92);
        assert_eq!(
            a,
            Assessment {
                score: 92,
                tier: MatchTier::Correct,
                reveal: true
            }
        );
    }

    #[test]
    fn builder_defaults_equal_default() {
        let built = ScoringPolicy::builder().build().unwrap();
        assert_eq!(built, ScoringPolicy::default());
    }

    #[test]
    fn builder_rejects_inverted_thresholds() {
        let err = ScoringPolicy::builder()
            .correct_threshold(60)
            .close_threshold(80)
            .build()
            .unwrap_err();
        assert!(matches!(err, PracticeError::InvalidPolicy(_)));
    }

    #[test]
    fn builder_rejects_out_of_range() {
        let err = ScoringPolicy::builder()
            .reveal_threshold(101)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("reveal threshold 101"));
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let policy = ScoringPolicy::from_json_str(r#"{"close_threshold": 50}"#).unwrap();
        assert_eq!(policy.close_threshold, 50);
        assert_eq!(policy.correct_threshold, DEFAULT_CORRECT_THRESHOLD);
        assert_eq!(policy.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
    }

    #[test]
    fn json_is_validated() {
        let err = ScoringPolicy::from_json_str(r#"{"correct_threshold": 50}"#).unwrap_err();
        assert!(matches!(err, PracticeError::InvalidPolicy(_)));

        let err = ScoringPolicy::from_json_str(r#"{"correct": 50}"#).unwrap_err();
        assert!(matches!(err, PracticeError::Json(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"correct_threshold": 95, "reveal_threshold": 100}}"#).unwrap();

        let policy = ScoringPolicy::from_json_file(file.path()).unwrap();
        assert_eq!(policy.correct_threshold, 95);
        assert_eq!(policy.reveal_threshold, 100);
        assert!(!policy.should_reveal(99));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScoringPolicy::from_json_file(&dir.path().join("policy.json")).unwrap_err();
        assert!(matches!(err, PracticeError::Io(_)));
    }

    #[test]
    fn tier_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MatchTier::Incorrect).unwrap(),
            "\"incorrect\""
        );
    }
}
