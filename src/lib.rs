mod config;
pub use config::{
    DEFAULT_MATCHER_CONFIG, DEFAULT_URL_TOKENIZER_CONFIG, DEFAULT_WEIGHTED_TOKEN_STRATEGY,
};
mod constants;
pub mod models;
pub use models::{
    CatalogEntry, Error, MatchStrategy, Matcher, MatcherConfig, NormalizedEntry, PathWeighting,
    TokenSource, UrlToken, UrlTokenizer, UrlTokenizerConfig,
};
pub mod types;
pub use types::{CatalogEntryIndex, MatchScore, SearchableText, TokenValue, TokenWeight};
pub mod utils;
pub use utils::{
    get_domain_root, read_catalog_from_gz_bytes, read_catalog_from_path,
    read_catalog_from_reader, read_catalog_from_string,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Extracts the weighted, deduplicated tokens of `raw_url` using the default
/// tokenizer configuration.
pub fn extract_url_tokens(raw_url: &str) -> Result<Vec<UrlToken>, Error> {
    UrlTokenizer::new(DEFAULT_URL_TOKENIZER_CONFIG).extract_tokens(raw_url)
}

/// Returns up to three catalog entries whose website shares the URL's domain root.
pub fn match_by_url<'a>(
    entries: &'a [CatalogEntry],
    url: &str,
) -> Result<Vec<&'a CatalogEntry>, Error> {
    match_by_url_with_custom_config(
        DEFAULT_MATCHER_CONFIG,
        DEFAULT_URL_TOKENIZER_CONFIG,
        entries,
        url,
    )
}

pub fn match_by_url_with_custom_config<'a>(
    matcher_config: MatcherConfig,
    url_tokenizer_config: UrlTokenizerConfig,
    entries: &'a [CatalogEntry],
    url: &str,
) -> Result<Vec<&'a CatalogEntry>, Error> {
    let matcher = Matcher::new(matcher_config, UrlTokenizer::new(url_tokenizer_config));

    matcher.match_entries(entries, url)
}
