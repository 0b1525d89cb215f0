// Types listed here are either shared across multiple files and/or exposed via the library.

/// The normalized text of a URL token (lowercase, alphanumerics and spaces only).
pub type TokenValue = String;

/// Borrowed view of a `TokenValue`.
pub type TokenValueRef = str;

/// Relative importance of a token. Larger is more specific.
pub type TokenWeight = u32;

/// Accumulated weight of all tokens an entry matched under weighted scoring.
pub type MatchScore = u64;

/// Position of an entry within the caller's dataset.
pub type CatalogEntryIndex = usize;

/// A searchable string derived from a catalog entry.
pub type SearchableText = String;
