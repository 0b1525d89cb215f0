use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Low-information words which are never emitted as path or query tokens.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "and", "or", "but", "which", "whether", "that", "this", "is", "are", "was", "were", "to",
        "for", "of", "in", "on", "a", "an", "the", "with", "as", "at", "by", "from", "it", "be",
        "if", "so", "then", "than", "because", "while", "where", "when",
    ]
    .into_iter()
    .collect()
});

/// Hostname labels which are stripped before picking the domain root.
///
/// Note: This is a fixed heuristic, not a public suffix list.
pub static TLD_LIST: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "com", "net", "org", "io", "co", "uk", "de", "ru", "edu", "info", "gov", "app", "ai",
        "us", "au", "jp", "fr", "es", "it",
    ]
    .into_iter()
    .collect()
});

// The patterns below are literals; a failure to compile is a programming error.

pub static SCHEME_PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+://").expect("valid scheme pattern"));

pub static NUMERIC_VALUE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s]+$").expect("valid numeric pattern"));

/// Matches session ids, hashes and other opaque query values.
pub static ENCODED_VALUE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{10,}$").expect("valid encoded pattern"));

pub static LETTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]").expect("valid letter pattern"));

pub static QUERY_WORD_SEPARATOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+|,|;|/|&|\band\b|\bor\b").expect("valid separator pattern")
});

pub const DOMAIN_TOKEN_WEIGHT: u32 = 1;
pub const PATH_TOKEN_WEIGHT: u32 = 4;
pub const QUERY_TOKEN_WEIGHT_STEP: u32 = 10;

pub const MIN_PATH_SEGMENT_LEN: usize = 3;
pub const MIN_QUERY_VALUE_LEN: usize = 4;
