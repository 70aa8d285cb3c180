use crate::constants::{BM25_B, BM25_K1, MAX_DOCS};
use crate::doc::Document;
use crate::error::Error;

/// BM25 tunables, passed explicitly into every scoring call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25Params {
    /// Term-frequency saturation.
    pub k1: f64,
    /// Length-normalization strength.
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Bm25Params {
            k1: BM25_K1,
            b: BM25_B,
        }
    }
}

impl Bm25Params {
    pub fn validate(&self) -> Result<(), Error> {
        if !self.k1.is_finite() || self.k1 < 0.0 {
            return Err(Error::InvalidParams(format!(
                "k1 must be a non-negative number, got {}",
                self.k1
            )));
        }
        if !self.b.is_finite() || !(0.0..=1.0).contains(&self.b) {
            return Err(Error::InvalidParams(format!(
                "b must be between 0 and 1, got {}",
                self.b
            )));
        }
        Ok(())
    }
}

/// Contribution of one query term occurrence to a document's score.
#[inline]
pub fn bm25_term(tf: f64, dl: f64, avgdl: f64, n: f64, df: f64, params: Bm25Params) -> f64 {
    if tf == 0.0 || df == 0.0 || n == 0.0 {
        return 0.0;
    }
    let Bm25Params { k1, b } = params;
    let idf = ((n - df + 0.5) / (df + 0.5) + 1.0).ln().max(0.0);
    let ntf = (tf * (k1 + 1.0)) / (tf + k1 * (1.0 - b + b * dl / avgdl));
    idf * ntf
}

/// Ordered documents plus the statistics BM25 needs from them.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<Document>,
    total_tokens: u64,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `doc`, keeping insertion order. Returns `false` once the corpus
    /// holds [`MAX_DOCS`] documents; the document is not added in that case.
    pub fn push(&mut self, doc: Document) -> bool {
        if self.docs.len() >= MAX_DOCS {
            return false;
        }
        self.total_tokens += u64::from(doc.tf().total_tokens());
        self.docs.push(doc);
        true
    }

    pub fn docs(&self) -> &[Document] {
        &self.docs
    }

    pub fn get(&self, idx: usize) -> Option<&Document> {
        self.docs.get(idx)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Mean document length in tokens; 1.0 for an empty corpus.
    pub fn avg_dl(&self) -> f64 {
        if self.docs.is_empty() {
            1.0
        } else {
            self.total_tokens as f64 / self.docs.len() as f64
        }
    }

    /// Number of documents containing `term`.
    pub fn doc_freq(&self, term: &str) -> u32 {
        self.docs.iter().filter(|d| d.tf().contains(term)).count() as u32
    }

    /// Index of the first document whose description equals `description` exactly.
    pub fn position_by_description(&self, description: &str) -> Option<usize> {
        self.docs.iter().position(|d| d.description == description)
    }
}
