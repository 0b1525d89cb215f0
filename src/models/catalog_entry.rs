use crate::types::SearchableText;
use crate::utils::strip_to_searchable;
use serde::Deserialize;

/// One organization record of the reference dataset.
///
/// Field names follow the dataset's column headers when deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogEntry {
    #[serde(rename = "PageName")]
    pub page_name: Option<String>,
    #[serde(rename = "Website")]
    pub website: Option<String>,
    #[serde(rename = "Company")]
    pub company: Option<String>,
    #[serde(rename = "ParentCompany")]
    pub parent_company: Option<String>,
    #[serde(rename = "Category")]
    pub category: Option<String>,
    #[serde(rename = "Industry")]
    pub industry: Option<String>,
    #[serde(rename = "Type")]
    pub entry_type: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Product")]
    pub product: Option<String>,
    #[serde(rename = "ProductLine")]
    pub product_line: Option<String>,
}

impl CatalogEntry {
    pub fn new(page_name: &str, website: &str) -> Self {
        Self {
            page_name: Some(page_name.to_string()),
            website: Some(website.to_string()),
            ..Default::default()
        }
    }

    /// Textual attributes contributing to the searchable string, in order.
    fn searchable_fields(&self) -> [Option<&str>; 8] {
        [
            self.page_name.as_deref(),
            self.description.as_deref(),
            self.company.as_deref(),
            self.industry.as_deref(),
            self.product.as_deref(),
            self.product_line.as_deref(),
            self.parent_company.as_deref(),
            self.category.as_deref(),
        ]
    }
}

/// A borrowed catalog entry plus its precomputed searchable string.
#[derive(Debug, Clone)]
pub struct NormalizedEntry<'a> {
    pub entry: &'a CatalogEntry,
    pub searchable: SearchableText,
}

impl<'a> NormalizedEntry<'a> {
    pub fn new(entry: &'a CatalogEntry) -> Self {
        let joined = entry
            .searchable_fields()
            .into_iter()
            .flatten()
            .filter(|value| !value.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            entry,
            searchable: strip_to_searchable(&joined),
        }
    }

    /// Normalizes every entry, preserving order and cardinality.
    pub fn normalize_dataset(entries: &'a [CatalogEntry]) -> Vec<NormalizedEntry<'a>> {
        entries.iter().map(NormalizedEntry::new).collect()
    }
}
