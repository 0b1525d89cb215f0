pub mod dedup_tokens;
pub use dedup_tokens::dedup_tokens;

pub mod get_domain_root;
pub use get_domain_root::get_domain_root;

pub mod normalize_text;
pub use normalize_text::{normalize_text, strip_to_searchable};

pub mod read_catalog;
pub use read_catalog::{
    read_catalog_from_gz_bytes, read_catalog_from_path, read_catalog_from_reader,
    read_catalog_from_string,
};
