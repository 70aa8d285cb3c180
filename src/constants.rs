// BM25 tuning
pub const BM25_K1: f64 = 1.2;
pub const BM25_B: f64 = 0.75;

// Matching
pub const DEFAULT_THRESHOLD: f64 = 0.4;

// Capacities
/// Maximum number of terms kept from a single tokenized text.
pub const MAX_TOKENS: usize = 4096;
/// Longest term kept; longer alphabetic runs are split into chunks of this size.
pub const MAX_TOKEN_LEN: usize = 127;
/// Maximum number of documents held by one corpus.
pub const MAX_DOCS: usize = 256;
/// Corpus lines longer than this many bytes are rejected.
pub const MAX_LINE: usize = 8192;

// Score-mode output
pub const SNIPPET_CHARS: usize = 56;
pub const SNIPPET_ELLIPSIS: &str = "...";

pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "must", "shall", "can", "this", "that",
    "these", "those", "it", "its", "what", "how", "why", "when", "where",
    "who", "let", "lets", "just", "to", "for", "of", "in", "on", "at",
    "by", "and", "or", "but", "not", "with", "from", "into", "about",
    "than", "then", "so", "if", "up", "out", "no", "yes", "all", "some",
    "any", "each", "my", "your", "our", "me", "we", "you", "i",
];

/// Reference ways used only for IDF statistics in pair mode: (id, description, vocabulary).
pub const BUILTIN_WAYS: &[(&str, &str, &str)] = &[
    (
        "testing",
        "writing unit tests, test coverage, mocking dependencies, test-driven development",
        "unittest coverage mock tdd assertion jest pytest rspec testcase",
    ),
    (
        "api",
        "designing REST APIs, HTTP endpoints, API versioning, request response structure",
        "endpoint api rest route http status pagination versioning",
    ),
    (
        "debugging",
        "debugging code issues, troubleshooting errors, investigating broken behavior, fixing bugs",
        "debug breakpoint stacktrace investigate troubleshoot regression bisect",
    ),
    (
        "security",
        "application security, authentication, secrets management, input validation, vulnerability prevention",
        "authentication secrets password credentials owasp injection xss sql sanitize vulnerability",
    ),
    (
        "design",
        "software system design architecture patterns database schema component modeling",
        "architecture pattern database schema modeling interface component modules factory observer strategy",
    ),
    (
        "config",
        "application configuration, environment variables, dotenv files, config file management",
        "dotenv environment configuration envvar config.json config.yaml",
    ),
    (
        "adr-context",
        "planning how to implement a feature, deciding an approach, understanding existing project decisions, starting work on an item, investigating why something was built a certain way",
        "plan approach debate implement build work pick understand investigate why how decision context",
    ),
];
