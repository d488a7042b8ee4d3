use crate::error::PracticeError;
use crate::policy::ScoringPolicy;
use crate::word::WordItem;
use crate::{Assessment, PronunciationScorer};

/// One learner's attempt at reading a word's example sentence aloud.
///
/// Speech recognition delivers the transcript piece by piece; feed every
/// interim and final version to [`update`](Self::update). Each call is scored
/// on its own, so repeating a transcript yields the same assessment.
///
/// Once any update reaches the policy's reveal threshold the attempt stays
/// revealed, even if later transcripts drift away, until [`reset`](Self::reset).
///
/// ```rust
/// use practice_rs::{BigramScorer, PracticeAttempt, ScoringPolicy, WordItem, MatchTier};
///
/// let word = WordItem::new("w1", "tea", "té").with_example("I would like a cup of tea.");
/// let mut attempt = PracticeAttempt::new(&word, BigramScorer::new(), ScoringPolicy::default())?;
///
/// attempt.update("I would");
/// let done = attempt.update("I would like a cup of tea");
/// assert_eq!(done.tier, MatchTier::Correct);
/// assert!(attempt.is_revealed());
/// # Ok::<(), practice_rs::PracticeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PracticeAttempt<S> {
    word_id: String,
    reference: String,
    scorer: S,
    policy: ScoringPolicy,
    transcript: String,
    last: Option<Assessment>,
    best_score: u8,
    revealed: bool,
}

impl<S: PronunciationScorer> PracticeAttempt<S> {
    /// Start an attempt on `word`. Fails if the word has no example sentence.
    pub fn new(word: &WordItem, scorer: S, policy: ScoringPolicy) -> Result<Self, PracticeError> {
        let reference = word
            .example_sentence()
            .ok_or_else(|| PracticeError::MissingExample {
                id: word.id.clone(),
            })?
            .to_string();
        policy.validate()?;

        Ok(Self {
            word_id: word.id.clone(),
            reference,
            scorer,
            policy,
            transcript: String::new(),
            last: None,
            best_score: 0,
            revealed: false,
        })
    }

    /// Score the latest transcript against the reference sentence.
    pub fn update(&mut self, transcript: &str) -> Assessment {
        let score = self.scorer.score(transcript, &self.reference);
        let assessment = self.policy.assess(score);
        log::debug!(
            "[{}] {} scored {} ({:?}) for {:?}",
            self.word_id,
            self.scorer.name(),
            score,
            assessment.tier,
            transcript
        );

        self.transcript.clear();
        self.transcript.push_str(transcript);
        self.best_score = self.best_score.max(score);
        if assessment.reveal && !self.revealed {
            log::info!("[{}] answer revealed at score {}", self.word_id, score);
            self.revealed = true;
        }
        self.last = Some(assessment);
        assessment
    }

    /// Forget all transcripts and scores so the learner can try again.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.last = None;
        self.best_score = 0;
        self.revealed = false;
    }

    pub fn word_id(&self) -> &str {
        &self.word_id
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn last(&self) -> Option<Assessment> {
        self.last
    }

    pub fn best_score(&self) -> u8 {
        self.best_score
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }
}
