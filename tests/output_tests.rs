//! Tests for writing finished payloads (files and writers)

use std::fs;
use std::io::Cursor;

use csvbody::core::UTF8_BOM;
use csvbody::{CsvConfig, Field, Record, encode, write_csv};
use tempfile::tempdir;

fn sample_records() -> Vec<Record> {
    vec![
        Record::ordered(["Sender", "Content"]),
        Record::keyed([("sender", Field::from("Alice")), ("content", Field::from("Hello!"))]),
        Record::keyed([("sender", Field::from("Bob")), ("content", Field::from("Hi \"Alice\""))]),
    ]
}

// ============================================================================
// File writer
// ============================================================================

mod file_writer_tests {
    use super::*;

    #[test]
    fn test_write_csv_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");

        write_csv(&sample_records(), &path, &CsvConfig::new()).unwrap();

        let content = fs::read(&path).unwrap();
        assert!(content.starts_with(UTF8_BOM));
        let text = String::from_utf8(content[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(
            text,
            "\"Sender\",\"Content\"\r\n\"Alice\",\"Hello!\"\r\n\"Bob\",\"Hi \"\"Alice\"\"\"\r\n"
        );
    }

    #[test]
    fn test_write_csv_matches_encode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("excel.csv");
        let config = CsvConfig::excel().with_separator(';');

        write_csv(&sample_records(), &path, &config).unwrap();

        let expected = encode(&sample_records(), &config).unwrap();
        assert_eq!(fs::read(&path).unwrap(), expected.as_bytes());
    }

    #[test]
    fn test_write_csv_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");
        fs::write(&path, "old contents that are longer than the new payload").unwrap();

        write_csv(&[], &path, &CsvConfig::new()).unwrap();

        assert_eq!(fs::read(&path).unwrap(), UTF8_BOM);
    }

    #[test]
    fn test_write_csv_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no/such/dir/output.csv");

        let err = write_csv(&sample_records(), &path, &CsvConfig::new()).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_write_csv_encoding_error_creates_no_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");
        let config = CsvConfig::new().with_output_encoding("nope");

        let err = write_csv(&sample_records(), &path, &config).unwrap_err();
        assert!(err.is_encoding());
        assert!(!path.exists());
    }

    #[cfg(feature = "transcode")]
    #[test]
    fn test_write_csv_transcoded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin.csv");
        let config = CsvConfig::new().with_output_encoding("iso-8859-15");

        write_csv(&[Record::ordered(["€uro", "Ÿ"])], &path, &config).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"\"\xA4uro\",\"\xBE\"\r\n");
    }
}

// ============================================================================
// Writer output
// ============================================================================

mod writer_tests {
    use super::*;

    #[test]
    fn test_write_to_cursor() {
        let csv = encode(&sample_records(), &CsvConfig::new()).unwrap();
        let mut cursor = Cursor::new(Vec::new());

        csv.write_to(&mut cursor).unwrap();

        assert_eq!(cursor.into_inner(), csv.as_bytes());
    }

    #[test]
    fn test_into_bytes_for_response_body() {
        let csv = encode(&sample_records(), &CsvConfig::new()).unwrap();
        let header = csv.content_type_header();
        let body = csv.into_bytes();

        assert_eq!(header, "text/csv; charset=utf-8");
        assert!(body.ends_with(b"\r\n"));
    }
}
