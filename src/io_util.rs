//! Line-delimited JSON corpus loading.
//!
//! One flat object per line:
//!
//! ```text
//! {"id":"testing","description":"writing unit tests","vocabulary":"pytest jest","threshold":0.5}
//! ```
//!
//! `id` and `description` are required strings. Lines that do not provide
//! them, or are not JSON objects at all, are skipped and counted. A missing or
//! non-numeric `threshold` means [`DEFAULT_THRESHOLD`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::constants::{DEFAULT_THRESHOLD, MAX_LINE};
use crate::doc::Document;
use crate::error::Error;
use crate::index::Corpus;

#[derive(Deserialize)]
struct RawRecord {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    description: Value,
    #[serde(default)]
    vocabulary: Value,
    #[serde(default)]
    threshold: Value,
}

/// Outcome of loading a corpus.
#[derive(Debug)]
pub struct LoadReport {
    pub corpus: Corpus,
    /// Lines that were malformed, incomplete or too long.
    pub skipped_lines: usize,
    /// Valid documents refused because the corpus was full.
    pub dropped_docs: usize,
}

/// Parse one corpus line into a document.
///
/// Fields of the wrong JSON type are treated as absent.
pub fn parse_record(line: &str) -> Option<Document> {
    let raw: RawRecord = serde_json::from_str(line).ok()?;
    let id = raw.id.as_str()?;
    let description = raw.description.as_str()?;
    let vocabulary = raw.vocabulary.as_str().unwrap_or("");

    let threshold = raw.threshold.as_f64().unwrap_or(DEFAULT_THRESHOLD);
    Some(Document::new(id, description, vocabulary).with_threshold(threshold))
}

pub fn read_corpus<R: BufRead>(reader: R) -> Result<LoadReport, Error> {
    let mut corpus = Corpus::new();
    let mut skipped_lines = 0;
    let mut dropped_docs = 0;

    for (lineno, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        if bytes.len() > MAX_LINE {
            tracing::warn!(line = lineno + 1, len = bytes.len(), "corpus line too long, skipped");
            skipped_lines += 1;
            continue;
        }

        let line = String::from_utf8_lossy(&bytes);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_record(line) {
            Some(doc) => {
                if !corpus.push(doc) {
                    dropped_docs += 1;
                }
            }
            None => {
                tracing::debug!(line = lineno + 1, "skipping malformed corpus line");
                skipped_lines += 1;
            }
        }
    }

    if dropped_docs > 0 {
        tracing::warn!(
            kept = corpus.len(),
            dropped = dropped_docs,
            "document limit reached, remaining documents ignored"
        );
    }
    tracing::debug!(
        docs = corpus.len(),
        skipped = skipped_lines,
        avg_dl = corpus.avg_dl(),
        "corpus loaded"
    );

    Ok(LoadReport {
        corpus,
        skipped_lines,
        dropped_docs,
    })
}

pub fn load_corpus(path: impl AsRef<Path>) -> Result<LoadReport, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::CorpusOpen {
        path: path.to_path_buf(),
        source,
    })?;
    read_corpus(BufReader::new(file))
}
