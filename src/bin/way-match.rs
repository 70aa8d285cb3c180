//! `way-match`
//!
//! Scores user prompts against way descriptions with Okapi BM25.
//!
//! Usage (pair, exit 0 on match):
//!   way-match pair --description "writing unit tests" --vocabulary "pytest jest" --query "add tests"
//!
//! Usage (score a JSONL corpus, ranked output):
//!   way-match score --corpus ways.jsonl --query "how do I write tests for this function"

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{ensure, Result};
use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use way_match::constants::{BM25_B, BM25_K1, DEFAULT_THRESHOLD};
use way_match::io_util::load_corpus;
use way_match::{pair_match, score_matches, Bm25Params, Error};

const LOG_ENV: &str = "WAY_MATCH_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "way-match",
    version,
    propagate_version = true,
    arg_required_else_help = true,
    about = "BM25 semantic matcher for the ways system"
)]
struct Cli {
    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one description+vocabulary against a query; exit 0 if it matches
    Pair {
        /// Way description text
        #[arg(long)]
        description: String,
        /// Space-separated domain keywords
        #[arg(long, default_value = "")]
        vocabulary: String,
        /// User prompt to match against
        #[arg(long)]
        query: String,
        #[command(flatten)]
        scoring: ScoringArgs,
    },
    /// Score every way in a JSONL corpus; prints id<TAB>score<TAB>description, best first
    Score {
        /// Path to JSONL corpus file
        #[arg(long)]
        corpus: PathBuf,
        /// User prompt to match against
        #[arg(long)]
        query: String,
        #[command(flatten)]
        scoring: ScoringArgs,
    },
}

#[derive(Args, Debug)]
struct ScoringArgs {
    /// Minimum score to match
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,
    /// BM25 k1 parameter
    #[arg(long, default_value_t = BM25_K1)]
    k1: f64,
    /// BM25 b parameter
    #[arg(long, default_value_t = BM25_B)]
    b: f64,
}

impl ScoringArgs {
    fn validated(&self) -> Result<(f64, Bm25Params)> {
        ensure!(
            self.threshold.is_finite() && self.threshold >= 0.0,
            "threshold must be a non-negative number, got {}",
            self.threshold
        );
        let params = Bm25Params {
            k1: self.k1,
            b: self.b,
        };
        params.validate()?;
        Ok((self.threshold, params))
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Pair {
            description,
            vocabulary,
            query,
            scoring,
        } => {
            let (threshold, params) = scoring.validated()?;
            let outcome = pair_match(&description, &vocabulary, &query, threshold, params);
            eprintln!(
                "match: score={:.4} threshold={:.4}",
                outcome.score, outcome.threshold
            );
            Ok(if outcome.matched {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Score {
            corpus,
            query,
            scoring,
        } => {
            let (threshold, params) = scoring.validated()?;
            let report = load_corpus(&corpus)?;
            if report.skipped_lines > 0 {
                tracing::debug!(skipped = report.skipped_lines, "corpus lines skipped");
            }

            let matches = match score_matches(&report.corpus, &query, threshold, params) {
                Ok(m) => m,
                Err(Error::NoMatches) => {
                    eprintln!("{}", Error::NoMatches);
                    return Ok(ExitCode::FAILURE);
                }
                Err(e) => return Err(e.into()),
            };

            let stdout = io::stdout();
            let mut out = stdout.lock();
            for m in &matches {
                writeln!(out, "{}", m.to_line())?;
            }
            out.flush()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
