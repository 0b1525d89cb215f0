use crate::{CatalogEntry, Error};
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::info;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

/// Reads catalog entries from CSV with a header row.
///
/// Columns are matched by header name (`PageName`, `Website`, `Company`, ...).
/// Unknown columns are ignored and missing columns are treated as absent.
pub fn read_catalog_from_reader<R: Read>(reader: R) -> Result<Vec<CatalogEntry>, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();

    for (row, record) in reader.deserialize::<CatalogEntry>().enumerate() {
        let entry = record
            .map_err(|e| Error::ParserError(format!("Failed to read record {}: {}", row + 1, e)))?;

        entries.push(entry);
    }

    Ok(entries)
}

pub fn read_catalog_from_string(csv: &str) -> Result<Vec<CatalogEntry>, Error> {
    read_catalog_from_reader(Cursor::new(csv))
}

/// Reads a gzip-compressed CSV catalog.
pub fn read_catalog_from_gz_bytes(bytes: &[u8]) -> Result<Vec<CatalogEntry>, Error> {
    read_catalog_from_reader(GzDecoder::new(bytes))
}

/// Reads a catalog file, decompressing it when the extension is `gz`.
pub fn read_catalog_from_path(path: &Path) -> Result<Vec<CatalogEntry>, Error> {
    let file = BufReader::new(File::open(path)?);

    let entries = if path.extension().is_some_and(|ext| ext == "gz") {
        read_catalog_from_reader(GzDecoder::new(file))?
    } else {
        read_catalog_from_reader(file)?
    };

    info!("Loaded {} catalog entries from {:?}", entries.len(), path);

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const CATALOG_CSV: &str = "PageName,Website,Company,Category\n\
        Ford Motor,https://www.ford.com,Ford,Automotive\n\
        Toyota,https://www.toyota.com,,Automotive\n";

    #[test]
    fn test_reads_entries_by_header() {
        let entries = read_catalog_from_string(CATALOG_CSV).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].page_name.as_deref(), Some("Ford Motor"));
        assert_eq!(entries[0].website.as_deref(), Some("https://www.ford.com"));
        assert_eq!(entries[1].company, None);
        assert_eq!(entries[1].industry, None);
    }

    #[test]
    fn test_reads_gzip_catalog() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(CATALOG_CSV.as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();

        let entries = read_catalog_from_gz_bytes(&compressed).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].page_name.as_deref(), Some("Toyota"));
    }

    #[test]
    fn test_invalid_gzip_is_a_parser_error() {
        let result = read_catalog_from_gz_bytes(b"not gzip");

        assert!(matches!(result, Err(Error::ParserError(_))));
    }
}
