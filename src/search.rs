use crate::constants::{BUILTIN_WAYS, SNIPPET_CHARS, SNIPPET_ELLIPSIS};
use crate::doc::Document;
use crate::error::Error;
use crate::index::{bm25_term, Bm25Params, Corpus};
use crate::text::tokenize;

/// BM25 score of `doc` against `query_terms`, using `corpus` for N, df and avgdl.
///
/// Query terms are visited in sequence, so a repeated term counts once per occurrence.
pub fn score_document(
    corpus: &Corpus,
    doc: &Document,
    query_terms: &[String],
    params: Bm25Params,
) -> f64 {
    let n = corpus.len() as f64;
    let dl = f64::from(doc.tf().total_tokens());
    let avgdl = corpus.avg_dl();

    query_terms
        .iter()
        .map(|term| {
            let tf = doc.tf().get(term);
            if tf == 0 {
                return 0.0;
            }
            let df = f64::from(corpus.doc_freq(term));
            bm25_term(f64::from(tf), dl, avgdl, n, df, params)
        })
        .sum()
}

// ── Pair mode ───────────────────────────────────────────────────────────────

/// Reference ways only, for IDF statistics.
pub fn builtin_corpus() -> Corpus {
    let mut corpus = Corpus::new();
    for &(id, desc, vocab) in BUILTIN_WAYS {
        corpus.push(Document::new(id, desc, vocab));
    }
    corpus
}

/// The reference corpus with the target added, and the target's index.
///
/// A description identical to a built-in way reuses that document.
pub fn pair_corpus(description: &str, vocabulary: &str) -> (Corpus, usize) {
    let mut corpus = builtin_corpus();
    if let Some(idx) = corpus.position_by_description(description) {
        tracing::debug!(id = %corpus.docs()[idx].id, "target matches a built-in way");
        return (corpus, idx);
    }
    corpus.push(Document::new("target", description, vocabulary));
    let idx = corpus.len() - 1;
    (corpus, idx)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairOutcome {
    pub score: f64,
    pub threshold: f64,
    pub matched: bool,
    pub corpus_size: usize,
}

pub fn pair_match(
    description: &str,
    vocabulary: &str,
    query: &str,
    threshold: f64,
    params: Bm25Params,
) -> PairOutcome {
    let (corpus, target) = pair_corpus(description, vocabulary);
    let query_terms = tokenize(query);
    tracing::debug!(tokens = ?query_terms, "query");

    let score = score_document(&corpus, &corpus.docs()[target], &query_terms, params);
    PairOutcome {
        score,
        threshold,
        matched: score >= threshold,
        corpus_size: corpus.len(),
    }
}

// ── Score mode ──────────────────────────────────────────────────────────────

/// A document's position in the corpus and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub score: f64,
}

/// Sort by score, highest first; equal scores keep their relative order.
pub fn sort_hits(hits: &mut [Hit]) {
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Score every document and return them ranked.
pub fn rank(corpus: &Corpus, query_terms: &[String], params: Bm25Params) -> Vec<Hit> {
    let mut hits: Vec<Hit> = corpus
        .docs()
        .iter()
        .enumerate()
        .map(|(index, doc)| {
            let score = score_document(corpus, doc, query_terms, params);
            tracing::trace!(id = %doc.id, score, "scored");
            Hit { index, score }
        })
        .collect();
    sort_hits(&mut hits);
    hits
}

/// A ranked document that cleared its threshold.
#[derive(Debug, Clone)]
pub struct Match<'a> {
    pub doc: &'a Document,
    pub score: f64,
}

impl Match<'_> {
    /// `id<TAB>score<TAB>snippet`
    pub fn to_line(&self) -> String {
        format!(
            "{}\t{:.4}\t{}",
            self.doc.id,
            self.score,
            snippet(&self.doc.description)
        )
    }
}

/// First [`SNIPPET_CHARS`] characters of `text`, with an ellipsis when cut.
pub fn snippet(text: &str) -> String {
    match text.char_indices().nth(SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}{SNIPPET_ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Rank `corpus` against `query` and keep documents at or above their threshold.
pub fn score_matches<'a>(
    corpus: &'a Corpus,
    query: &str,
    global_threshold: f64,
    params: Bm25Params,
) -> Result<Vec<Match<'a>>, Error> {
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }

    let query_terms = tokenize(query);
    tracing::debug!(tokens = ?query_terms, docs = corpus.len(), "query");

    let matches: Vec<Match<'a>> = rank(corpus, &query_terms, params)
        .into_iter()
        .filter_map(|hit| {
            let doc = corpus.get(hit.index)?;
            (hit.score >= doc.effective_threshold(global_threshold)).then_some(Match {
                doc,
                score: hit.score,
            })
        })
        .collect();

    if matches.is_empty() {
        return Err(Error::NoMatches);
    }
    Ok(matches)
}
