use std::collections::HashMap;

use crate::text::tokenize;

/// Term counts for one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermFreqs {
    counts: HashMap<String, u32>,
    total_tokens: u32,
}

impl TermFreqs {
    pub fn from_terms(terms: &[String]) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::with_capacity(terms.len());
        for t in terms {
            *counts.entry(t.clone()).or_insert(0) += 1;
        }
        TermFreqs {
            counts,
            total_tokens: terms.len() as u32,
        }
    }

    /// Occurrences of `term`, 0 when absent.
    pub fn get(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.get(term) > 0
    }

    /// Document length in tokens, repeats included.
    pub fn total_tokens(&self) -> u32 {
        self.total_tokens
    }

    #[cfg(test)]
    pub fn distinct_terms(&self) -> usize {
        self.counts.len()
    }
}

/// A way: an identified description + vocabulary pair, indexed once at construction.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub description: String,
    pub vocabulary: String,
    /// Per-document match threshold; `None` or a non-positive value defers to the caller's.
    pub threshold: Option<f64>,
    tf: TermFreqs,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        vocabulary: impl Into<String>,
    ) -> Self {
        let description = description.into();
        let vocabulary = vocabulary.into();
        let tf = TermFreqs::from_terms(&tokenize(&format!("{description} {vocabulary}")));
        Document {
            id: id.into(),
            description,
            vocabulary,
            threshold: None,
            tf,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn tf(&self) -> &TermFreqs {
        &self.tf
    }

    /// The document's own threshold when positive, `global` otherwise.
    pub fn effective_threshold(&self, global: f64) -> f64 {
        match self.threshold {
            Some(t) if t > 0.0 => t,
            _ => global,
        }
    }
}
