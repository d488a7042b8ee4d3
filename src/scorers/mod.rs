//! Pronunciation scorers.
//!
//! This module contains implementations of [`PronunciationScorer`](crate::PronunciationScorer).
//!
//! # Available Scorers
//!
//! - `bigram` - character-bigram Dice similarity over ASCII-normalized text

pub mod bigram;
