//! Error types for corpus loading and matching.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Corpus file could not be opened.
    #[error("cannot open corpus file: {}", path.display())]
    CorpusOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading failed part way through the corpus.
    #[error("cannot read corpus: {0}")]
    CorpusRead(#[from] io::Error),

    /// No usable document survived loading.
    #[error("empty corpus")]
    EmptyCorpus,

    /// Nothing scored at or above its threshold.
    #[error("no matches above threshold")]
    NoMatches,

    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}
