use crate::types::{CatalogEntryIndex, MatchScore, TokenValueRef};
use crate::utils::get_domain_root;
use crate::{CatalogEntry, Error, NormalizedEntry, UrlToken, UrlTokenizer};
use log::{debug, info};
use std::collections::HashSet;

/// Comparison applied between URL tokens and catalog entries.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MatchStrategy {
    /// Exact equality of the URL's domain root against each entry's website
    /// domain root. Results keep dataset order.
    DomainRoot,
    /// Scores every entry by the weights of the tokens found in its
    /// searchable string, exactly or approximately, and ranks by score.
    WeightedToken {
        /// Maximum normalized edit distance accepted for an approximate hit.
        fuzzy_threshold: f64,
        /// Tokens shorter than this are only matched exactly.
        min_fuzzy_match_len: usize,
    },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MatcherConfig {
    pub strategy: MatchStrategy,
    pub max_results: usize,
    /// Keep each entry at most once in the results.
    pub dedupe_results: bool,
}

pub struct Matcher {
    config: MatcherConfig,
    url_tokenizer: UrlTokenizer,
}

impl Matcher {
    pub fn new(config: MatcherConfig, url_tokenizer: UrlTokenizer) -> Self {
        Self {
            config,
            url_tokenizer,
        }
    }

    /// Finds the catalog entries matching `url`.
    ///
    /// Fails only if `url` cannot be parsed; an unmatched URL yields an empty
    /// vector.
    pub fn match_entries<'a>(
        &self,
        entries: &'a [CatalogEntry],
        url: &str,
    ) -> Result<Vec<&'a CatalogEntry>, Error> {
        let url_tokens = self.url_tokenizer.extract_tokens(url)?;

        Ok(self.match_tokens(entries, &url_tokens))
    }

    pub fn match_tokens<'a>(
        &self,
        entries: &'a [CatalogEntry],
        url_tokens: &[UrlToken],
    ) -> Vec<&'a CatalogEntry> {
        let dataset = NormalizedEntry::normalize_dataset(entries);

        let matched_indices = match self.config.strategy {
            MatchStrategy::DomainRoot => self.match_domain_roots(&dataset, url_tokens),
            MatchStrategy::WeightedToken {
                fuzzy_threshold,
                min_fuzzy_match_len,
            } => self.match_weighted_tokens(
                &dataset,
                url_tokens,
                fuzzy_threshold,
                min_fuzzy_match_len,
            ),
        };

        let results: Vec<&'a CatalogEntry> = self
            .select_results(matched_indices)
            .into_iter()
            .map(|index| &entries[index])
            .collect();

        info!("Matched {} of {} catalog entries", results.len(), entries.len());

        results
    }

    fn match_domain_roots(
        &self,
        dataset: &[NormalizedEntry],
        url_tokens: &[UrlToken],
    ) -> Vec<CatalogEntryIndex> {
        let domain_tokens: Vec<&UrlToken> =
            url_tokens.iter().filter(|token| token.is_domain()).collect();

        let mut matched_indices = Vec::new();

        for (index, normalized_entry) in dataset.iter().enumerate() {
            let website = normalized_entry.entry.website.as_deref().unwrap_or_default();
            let entry_domain_root = get_domain_root(website);

            for token in &domain_tokens {
                if entry_domain_root == token.value {
                    matched_indices.push(index);
                }
            }
        }

        matched_indices
    }

    fn match_weighted_tokens(
        &self,
        dataset: &[NormalizedEntry],
        url_tokens: &[UrlToken],
        fuzzy_threshold: f64,
        min_fuzzy_match_len: usize,
    ) -> Vec<CatalogEntryIndex> {
        let mut scored: Vec<(CatalogEntryIndex, MatchScore)> = Vec::new();

        for (index, normalized_entry) in dataset.iter().enumerate() {
            let mut score: MatchScore = 0;

            for token in url_tokens {
                if token.value.is_empty() {
                    continue;
                }

                if normalized_entry.searchable.contains(token.value.as_str()) {
                    score += MatchScore::from(token.weight);
                }

                if token.value.len() >= min_fuzzy_match_len
                    && is_fuzzy_match(&normalized_entry.searchable, &token.value, fuzzy_threshold)
                {
                    score += MatchScore::from(token.weight);
                }
            }

            if score > 0 {
                debug!("Entry {} scored {}", index, score);
                scored.push((index, score));
            }
        }

        // Stable sort; equal scores keep dataset order
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored.into_iter().map(|(index, _)| index).collect()
    }

    fn select_results(&self, matched_indices: Vec<CatalogEntryIndex>) -> Vec<CatalogEntryIndex> {
        let mut seen = HashSet::new();

        matched_indices
            .into_iter()
            .filter(|index| !self.config.dedupe_results || seen.insert(*index))
            .take(self.config.max_results)
            .collect()
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(crate::DEFAULT_MATCHER_CONFIG, UrlTokenizer::default())
    }
}

/// Whether any window of `searchable` with the same word count as `token`
/// is within `fuzzy_threshold` normalized edit distance of it.
fn is_fuzzy_match(searchable: &str, token: &TokenValueRef, fuzzy_threshold: f64) -> bool {
    let searchable_words: Vec<&str> = searchable.split_whitespace().collect();
    let window_len = token.split_whitespace().count();

    if window_len == 0 || searchable_words.len() < window_len {
        return false;
    }

    let min_similarity = 1.0 - fuzzy_threshold;

    searchable_words.windows(window_len).any(|window| {
        strsim::normalized_levenshtein(&window.join(" "), token) >= min_similarity
    })
}
