//! Lexicon-based sentiment scoring
//!
//! The pipeline scores five text groups per page through the
//! [`SentimentScorer`] trait. [`LexiconScorer`] is the bundled
//! implementation; tests and callers may supply their own.

mod groups;
mod lexicon;
mod scorer;

pub use groups::{analyze, SentimentReport, TextGroups};
pub use lexicon::{MAX_WORD_SCORE, MIN_WORD_SCORE, NEGATORS};
pub use scorer::{tokenize, LexiconScorer};

use std::fmt;

/// Scores a piece of text
pub trait SentimentScorer {
    fn score(&self, text: &str) -> SentimentResult;
}

impl<S: SentimentScorer + ?Sized> SentimentScorer for &S {
    fn score(&self, text: &str) -> SentimentResult {
        (**self).score(text)
    }
}

/// Result of scoring one text group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentimentResult {
    /// Sum of matched word scores
    pub score: i32,

    /// `score` divided by the token count, 0.0 for empty text
    pub comparative: f64,

    /// Every token the scorer saw, in order
    pub tokens: Vec<String>,

    /// Tokens found in the lexicon, in order
    pub words: Vec<String>,

    /// Matched tokens that contributed a positive score
    pub positive: Vec<String>,

    /// Matched tokens that contributed a negative score
    pub negative: Vec<String>,

    /// `(word, score)` per match, after negation
    pub calculation: Vec<(String, i32)>,
}

impl SentimentResult {
    /// Classification of this result's score
    pub fn label(&self) -> Label {
        Label::from_score(self.score)
    }
}

impl fmt::Display for SentimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ score: {}, comparative: {:.4}, calculation: {:?}, tokens: {:?}, words: {:?}, \
             positive: {:?}, negative: {:?} }}",
            self.score,
            self.comparative,
            self.calculation,
            self.tokens,
            self.words,
            self.positive,
            self.negative
        )
    }
}

/// Three-way classification of a sentiment score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

impl Label {
    /// `> 0` is positive, `< 0` negative, `0` neutral
    pub fn from_score(score: i32) -> Self {
        match score.signum() {
            1 => Self::Positive,
            -1 => Self::Negative,
            _ => Self::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
