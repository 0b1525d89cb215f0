use crate::models::{MatchStrategy, MatcherConfig, PathWeighting, UrlTokenizerConfig};

pub const DEFAULT_URL_TOKENIZER_CONFIG: UrlTokenizerConfig = UrlTokenizerConfig {
    path_weighting: PathWeighting::Uniform,
    max_ngram_len: None,
};

pub const DEFAULT_MATCHER_CONFIG: MatcherConfig = MatcherConfig {
    strategy: MatchStrategy::DomainRoot,
    max_results: 3,
    dedupe_results: true,
};

/// Strategy settings used when weighted token scoring is enabled.
pub const DEFAULT_WEIGHTED_TOKEN_STRATEGY: MatchStrategy = MatchStrategy::WeightedToken {
    fuzzy_threshold: 0.1,
    min_fuzzy_match_len: 4,
};
