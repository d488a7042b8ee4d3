//! Character-bigram Dice scorer.
//!
//! Compares a speech-recognition transcript with a reference sentence by the
//! overlap of their two-character windows. The comparison ignores case and
//! punctuation, which is most of the noise a recognizer adds, while a single
//! misheard letter only moves two or three bigrams out of a sentence's worth.
//!
//! # Normalization
//!
//! Before comparison both strings are lower-cased and reduced to ASCII
//! `a`–`z`, `0`–`9` and spaces, then trimmed. Text in other scripts is
//! stripped, so this scorer is only meaningful for English practice
//! sentences.
//!
//! | Input | Normalized |
//! |---|---|
//! | `"Hello, World!"` | `"hello world"` |
//! | `"It's 5 o'clock."` | `"its 5 oclock"` |
//! | `"Café"` | `"caf"` |
//! | `"?!"` | `""` |
//!
//! # Scoring
//!
//! `floor(2 * shared / (len(bigrams_a) + len(bigrams_b)) * 100)`, where
//! `shared` counts each bigram occurrence at most once. Empty input scores 0
//! and identical input scores 100.
//!
//! # Examples
//!
//! ```rust
//! use practice_rs::scorers::bigram::score;
//!
//! assert_eq!(score("The cat sat on the mat.", "the cat sat on the mat"), 100);
//! assert!(score("the cat sat on the mat", "the cat sit on the mat") > 70);
//! assert!(score("hello", "goodbye") < 50);
//! ```

pub mod bigrams;
pub mod normalize;
pub mod scorer;

pub use normalize::normalize;
pub use scorer::{score, BigramScorer};
