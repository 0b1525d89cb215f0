use site_sniffer::{match_by_url, read_catalog_from_path, CatalogEntry, Error as LibError};
use std::{fs, path::Path};
pub mod constants;
use constants::TEST_CATALOG_FILE_PATH;

/// Loads the shared catalog fixture used by the integration tests.
pub fn load_test_catalog() -> Vec<CatalogEntry> {
    read_catalog_from_path(&TEST_CATALOG_FILE_PATH).expect("Failed to load test catalog")
}

// Helper function to get the URL under test from the text file
pub fn get_test_url(file_path: &Path) -> String {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .find_map(|line| {
            line.trim()
                .strip_prefix("URL:")
                .map(|url| url.trim().to_string())
        })
        .unwrap_or_else(|| panic!("{:?} has no URL: line", file_path))
}

// Helper function to get the expected page names, in order, from the text file
pub fn get_expected_page_names(file_path: &Path) -> Vec<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix("EXPECTED:")
                .map(|name| name.trim().to_string())
        })
        .collect()
}

/// Runs the URL of a test file against the catalog, returning the matched and
/// expected page names.
pub fn run_test_for_file(
    test_file_path: &Path,
    catalog: &[CatalogEntry],
) -> Result<(Vec<String>, Vec<String>), LibError> {
    let url = get_test_url(test_file_path);
    let expected_page_names = get_expected_page_names(test_file_path);

    eprintln!("Testing file: {:?} ({})", test_file_path, url);

    let results = match_by_url(catalog, &url)?;

    let result_page_names = results
        .iter()
        .map(|entry| entry.page_name.clone().unwrap_or_default())
        .collect();

    Ok((result_page_names, expected_page_names))
}
