use crate::models::UrlToken;
use std::collections::HashSet;

/// Drops tokens whose value was already seen, keeping the first occurrence
/// and the original order.
pub fn dedup_tokens(tokens: Vec<UrlToken>) -> Vec<UrlToken> {
    let mut seen = HashSet::with_capacity(tokens.len());

    tokens
        .into_iter()
        .filter(|token| seen.insert(token.value.clone()))
        .collect()
}
