pub mod catalog_entry;
pub use catalog_entry::{CatalogEntry, NormalizedEntry};

pub mod error;
pub use error::Error;

pub mod matcher;
pub use matcher::{MatchStrategy, Matcher, MatcherConfig};

pub mod url_token;
pub use url_token::{TokenSource, UrlToken};

pub mod url_tokenizer;
pub use url_tokenizer::{PathWeighting, UrlTokenizer, UrlTokenizerConfig};
