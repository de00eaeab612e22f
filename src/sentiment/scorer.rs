use super::lexicon::{builtin_score, NEGATORS};
use super::{SentimentResult, SentimentScorer};
use std::collections::HashMap;

/// Characters replaced by whitespace before splitting into tokens
const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '?', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '"',
    '~', '(', ')',
];

/// Splits text into lowercase word tokens
///
/// Apostrophes and hyphens stay inside tokens so that `don't` and
/// `well-known` survive as single words.
///
/// # Examples
///
/// ```
/// use page_pulse::sentiment::tokenize;
///
/// assert_eq!(tokenize("Don't panic! (Really.)"), vec!["don't", "panic", "really"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace(PUNCTUATION, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Scorer backed by the built-in word lexicon plus optional extras
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer {
    extras: HashMap<String, i32>,
}

impl LexiconScorer {
    /// Creates a scorer using only the built-in lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scorer whose extras override the built-in lexicon
    pub fn with_extras<I, K>(extras: I) -> Self
    where
        I: IntoIterator<Item = (K, i32)>,
        K: AsRef<str>,
    {
        Self {
            extras: extras
                .into_iter()
                .map(|(word, score)| (word.as_ref().to_lowercase(), score))
                .collect(),
        }
    }

    fn word_score(&self, token: &str) -> Option<i32> {
        self.extras
            .get(token)
            .copied()
            .or_else(|| builtin_score(token))
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> SentimentResult {
        let tokens = tokenize(text);
        let mut result = SentimentResult::default();

        for (index, token) in tokens.iter().enumerate() {
            let Some(mut score) = self.word_score(token) else {
                continue;
            };

            if index > 0 && NEGATORS.contains(&tokens[index - 1].as_str()) {
                score = -score;
            }

            result.score += score;
            result.words.push(token.clone());
            if score > 0 {
                result.positive.push(token.clone());
            } else if score < 0 {
                result.negative.push(token.clone());
            }
            result.calculation.push((token.clone(), score));
        }

        if !tokens.is_empty() {
            result.comparative = f64::from(result.score) / tokens.len() as f64;
        }
        result.tokens = tokens;

        result
    }
}
