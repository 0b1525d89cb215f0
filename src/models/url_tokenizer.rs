use crate::constants::{
    DOMAIN_TOKEN_WEIGHT, ENCODED_VALUE_PATTERN, LETTER_PATTERN, MIN_PATH_SEGMENT_LEN,
    MIN_QUERY_VALUE_LEN, NUMERIC_VALUE_PATTERN, PATH_TOKEN_WEIGHT, QUERY_TOKEN_WEIGHT_STEP,
    QUERY_WORD_SEPARATOR_PATTERN, STOP_WORDS,
};
use crate::types::TokenWeight;
use crate::utils::{dedup_tokens, get_domain_root, normalize_text};
use crate::{Error, TokenSource, UrlToken};
use log::debug;
use percent_encoding::percent_decode_str;
use url::Url;

/// How path tokens are weighted relative to each other.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PathWeighting {
    /// Every path token carries the same weight; depth only affects order.
    Uniform,
    /// Each segment gains one point of weight per level of depth.
    DepthScaled,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UrlTokenizerConfig {
    pub path_weighting: PathWeighting,
    /// Longest n-gram generated from a query value. `None` generates all of them.
    pub max_ngram_len: Option<usize>,
}

#[derive(Debug, Copy, Clone)]
pub struct UrlTokenizer {
    config: UrlTokenizerConfig,
}

impl UrlTokenizer {
    pub fn new(config: UrlTokenizerConfig) -> Self {
        Self { config }
    }

    /// Extracts weighted tokens from an absolute URL.
    ///
    /// The result holds the domain token first, then path tokens (deepest
    /// segment first), then query n-grams. Values are unique; the first
    /// occurrence of a value wins.
    pub fn extract_tokens(&self, raw_url: &str) -> Result<Vec<UrlToken>, Error> {
        debug!("Extracting URL tokens: {}", raw_url);

        let url = Url::parse(&raw_url.to_lowercase())
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", raw_url, e)))?;

        let domain_tokens = self.domain_tokens(raw_url);
        debug!("Domain tokens: {:?}", domain_tokens);

        let path_tokens = self.path_tokens(&url);
        debug!("Path tokens: {:?}", path_tokens);

        let query_tokens = self.query_tokens(&url);
        debug!("Query tokens: {:?}", query_tokens);

        let unique_tokens = dedup_tokens(
            domain_tokens
                .into_iter()
                .chain(path_tokens)
                .chain(query_tokens)
                .collect(),
        );
        debug!("Unique tokens: {:?}", unique_tokens);

        Ok(unique_tokens)
    }

    pub fn domain_tokens(&self, raw_url: &str) -> Vec<UrlToken> {
        let domain_root = get_domain_root(raw_url);

        if domain_root.is_empty() {
            return vec![];
        }

        vec![UrlToken::new(
            domain_root,
            TokenSource::Domain,
            DOMAIN_TOKEN_WEIGHT,
        )]
    }

    pub fn path_tokens(&self, url: &Url) -> Vec<UrlToken> {
        // The fragment is included to catch hash-routed single page apps
        let fragment = url.fragment().map(|f| format!("#{}", f)).unwrap_or_default();
        let path = format!("{}/{}", url.path(), fragment);

        let segments: Vec<String> = path
            .split('/')
            .filter(|segment| segment.len() >= MIN_PATH_SEGMENT_LEN)
            .filter(|segment| !STOP_WORDS.contains(*segment))
            .map(|segment| normalize_text(&percent_decode_str(segment).decode_utf8_lossy()))
            .filter(|segment| !segment.is_empty())
            .collect();

        segments
            .into_iter()
            .enumerate()
            .map(|(depth, segment)| {
                UrlToken::new(segment, TokenSource::Path, self.path_weight(depth))
            })
            .rev()
            .collect()
    }

    fn path_weight(&self, depth: usize) -> TokenWeight {
        match self.config.path_weighting {
            PathWeighting::Uniform => PATH_TOKEN_WEIGHT,
            PathWeighting::DepthScaled => {
                let depth = TokenWeight::try_from(depth).unwrap_or(TokenWeight::MAX);
                PATH_TOKEN_WEIGHT.saturating_add(depth)
            }
        }
    }

    pub fn query_tokens(&self, url: &Url) -> Vec<UrlToken> {
        url.query_pairs()
            .filter(|(_, value)| !value.is_empty())
            .filter_map(|(_, value)| Self::query_value_words(&value))
            .flat_map(|words| self.ngram_tokens(&words))
            .collect()
    }

    /// Splits a decoded query value into its filtered word list, or `None`
    /// when the value carries no useful text.
    pub fn query_value_words(value: &str) -> Option<Vec<String>> {
        // Anything `+` or percent encoded has already been decoded by the URL parser
        let normalized = normalize_text(value);

        if normalized.len() < MIN_QUERY_VALUE_LEN
            || NUMERIC_VALUE_PATTERN.is_match(&normalized)
            || ENCODED_VALUE_PATTERN.is_match(&normalized)
            || normalized.starts_with("http")
            || !LETTER_PATTERN.is_match(&normalized)
        {
            return None;
        }

        let words: Vec<String> = QUERY_WORD_SEPARATOR_PATTERN
            .split(&normalized)
            .map(str::trim)
            .filter(|word| !word.is_empty() && !STOP_WORDS.contains(*word))
            .map(str::to_string)
            .collect();

        Some(words)
    }

    /// Emits a space-joined and a concatenated token for every contiguous
    /// n-gram of `words`. Longer n-grams and earlier starting positions weigh
    /// more.
    pub fn ngram_tokens(&self, words: &[String]) -> Vec<UrlToken> {
        let word_count = words.len();
        let max_n = self
            .config
            .max_ngram_len
            .map_or(word_count, |cap| cap.min(word_count));

        let mut tokens = Vec::new();

        for n in 1..=max_n {
            for i in 0..=(word_count - n) {
                let slice = &words[i..i + n];
                let weight = Self::ngram_weight(n, word_count - i);

                tokens.push(UrlToken::new(slice.join(" "), TokenSource::Query, weight));
                tokens.push(UrlToken::new(slice.concat(), TokenSource::Query, weight));
            }
        }

        tokens
    }

    fn ngram_weight(ngram_len: usize, words_remaining: usize) -> TokenWeight {
        let units = TokenWeight::try_from(ngram_len + words_remaining).unwrap_or(TokenWeight::MAX);

        units.saturating_mul(QUERY_TOKEN_WEIGHT_STEP)
    }
}

impl Default for UrlTokenizer {
    fn default() -> Self {
        Self::new(crate::DEFAULT_URL_TOKENIZER_CONFIG)
    }
}
