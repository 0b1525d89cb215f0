use crate::types::{TokenValue, TokenWeight};
use std::fmt;

/// Part of the URL a token was extracted from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenSource {
    Domain,
    Path,
    Query,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSource::Domain => write!(f, "domain"),
            TokenSource::Path => write!(f, "path"),
            TokenSource::Query => write!(f, "query"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlToken {
    pub value: TokenValue,
    pub source: TokenSource,
    pub weight: TokenWeight,
}

impl UrlToken {
    pub fn new(value: impl Into<TokenValue>, source: TokenSource, weight: TokenWeight) -> Self {
        Self {
            value: value.into(),
            source,
            weight,
        }
    }

    pub fn is_domain(&self) -> bool {
        self.source == TokenSource::Domain
    }
}

impl fmt::Display for UrlToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.value, self.source, self.weight)
    }
}
