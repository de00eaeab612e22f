//! Built-in word scores
//!
//! The AFINN-165 word list, bundled as `afinn-165.txt` (one `word<TAB>score`
//! per line, scores are integers in `-5..=5`). Multi-word phrases and the
//! negators are left out because the tokenizer never produces them as a
//! single scored token.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Lowest score a lexicon word may carry
pub const MIN_WORD_SCORE: i32 = -5;

/// Highest score a lexicon word may carry
pub const MAX_WORD_SCORE: i32 = 5;

/// Words that flip the sign of the scored word that follows them
pub const NEGATORS: &[&str] = &[
    "can't", "cant", "doesn't", "doesnt", "don't", "dont", "isn't", "isnt", "non", "not", "won't",
    "wont",
];

const AFINN_165: &str = include_str!("afinn-165.txt");

static WORD_SCORES: OnceLock<HashMap<&'static str, i32>> = OnceLock::new();

/// Parses one `word<TAB>score` line; blank or malformed lines yield `None`
fn parse_line(line: &str) -> Option<(&str, i32)> {
    let (word, score) = line.split_once('\t')?;
    let score = score.trim().parse().ok()?;
    Some((word, score))
}

fn word_scores() -> &'static HashMap<&'static str, i32> {
    WORD_SCORES.get_or_init(|| AFINN_165.lines().filter_map(parse_line).collect())
}

/// Looks up a lowercase token in the bundled list
pub(crate) fn builtin_score(token: &str) -> Option<i32> {
    word_scores().get(token).copied()
}
