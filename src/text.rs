use crate::constants::{MAX_TOKENS, MAX_TOKEN_LEN, STOPWORDS};

pub fn is_stop_word(w: &str) -> bool {
    STOPWORDS.contains(&w)
}

/// Result of a bounded tokenization pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tokens {
    pub terms: Vec<String>,
    /// Terms found past the cap and left out of `terms`.
    pub dropped: usize,
}

/// Lowercased ASCII alphabetic runs of at least 3 letters, stop-words removed.
fn terms(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .flat_map(|run| {
            // Runs are pure ASCII, so byte offsets are char boundaries.
            (0..run.len())
                .step_by(MAX_TOKEN_LEN)
                .map(move |i| &run[i..run.len().min(i + MAX_TOKEN_LEN)])
        })
        .filter(|w| w.len() >= 3)
        .map(|w| w.to_ascii_lowercase())
        .filter(|w| !is_stop_word(w))
}

/// Tokenize `text`, keeping at most `max_tokens` terms and counting the rest.
pub fn tokenize_bounded(text: &str, max_tokens: usize) -> Tokens {
    let mut out = Tokens::default();
    for term in terms(text) {
        if out.terms.len() < max_tokens {
            out.terms.push(term);
        } else {
            out.dropped += 1;
        }
    }
    out
}

/// Split `text` into normalized terms in order of appearance, duplicates kept.
///
/// Anything past [`MAX_TOKENS`] is dropped with a warning.
pub fn tokenize(text: &str) -> Vec<String> {
    let tokens = tokenize_bounded(text, MAX_TOKENS);
    if tokens.dropped > 0 {
        tracing::warn!(
            kept = tokens.terms.len(),
            dropped = tokens.dropped,
            "token limit reached, trailing terms ignored"
        );
    }
    tokens.terms
}
