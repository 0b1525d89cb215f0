use std::fs;
use test_utils::constants::TEST_FILES_DIRECTORY;
use test_utils::{load_test_catalog, run_test_for_file};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_by_url_with_files() {
        let catalog = load_test_catalog();

        let mut test_file_paths: Vec<_> = fs::read_dir(&*TEST_FILES_DIRECTORY)
            .expect("Failed to read test files directory")
            .map(|entry| entry.expect("Failed to read directory entry").path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
            .collect();
        test_file_paths.sort();

        assert!(!test_file_paths.is_empty(), "No test files found");

        for test_file_path in test_file_paths {
            let (results, expected) = run_test_for_file(&test_file_path, &catalog)
                .unwrap_or_else(|e| panic!("{:?} failed: {}", test_file_path, e));

            assert_eq!(
                results, expected,
                "{:?} - Expected: {:?}, but got: {:?}",
                test_file_path, expected, results
            );
        }
    }
}
