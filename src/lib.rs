//! BM25 matching of free-text prompts against "ways": named profiles made of a
//! description and a vocabulary list.
//!
//! - `pair`: one way against a query, a yes/no decision against a threshold.
//!   IDF statistics come from a small built-in reference corpus.
//! - `score`: every way in a JSONL corpus against a query, ranked.

pub mod constants;
pub mod doc;
pub mod error;
pub mod index;
pub mod io_util;
pub mod search;
pub mod text;

pub use doc::{Document, TermFreqs};
pub use error::Error;
pub use index::{Bm25Params, Corpus};
pub use search::{pair_match, score_matches, Match, PairOutcome};
