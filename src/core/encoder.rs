//! CSV payload encoder.
//!
//! # Format
//! - Every field double-quoted, embedded quotes doubled
//! - Separator: [`CsvConfig::separator`] (default `,`)
//! - Line terminator: `\r\n`, including after the last line
//! - No header row; pass one as the first record if needed
//! - Leading byte-order mark, then the body in the configured charset

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::CsvConfig;
use crate::core::escape::push_escaped;
use crate::core::transcode::Charset;
use crate::error::Result;
use crate::record::Record;

/// MIME type of every payload.
pub const CONTENT_TYPE: &str = "text/csv";

/// A finished CSV payload plus the metadata a transport needs to send it.
///
/// # Example
///
/// ```rust
/// use csvbody::{CsvConfig, Record, encode};
///
/// let csv = encode(&[Record::ordered(["a", "b"])], &CsvConfig::new())?;
///
/// assert_eq!(csv.content_type_header(), "text/csv; charset=utf-8");
/// assert_eq!(csv.as_bytes(), b"\xEF\xBB\xBF\"a\",\"b\"\r\n");
/// # Ok::<(), csvbody::CsvError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCsv {
    bytes: Vec<u8>,
    charset: &'static str,
}

impl EncodedCsv {
    /// Payload bytes, byte-order mark included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the payload, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the payload has no bytes at all.
    ///
    /// A UTF-8 payload always carries its byte-order mark, so this only
    /// happens for an empty input in a charset without one.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Always `text/csv`.
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    /// Effective charset of the payload.
    pub fn charset(&self) -> &'static str {
        self.charset
    }

    /// Value for a `Content-Type` header, e.g. `text/csv; charset=utf-8`.
    pub fn content_type_header(&self) -> String {
        format!("{}; charset={}", CONTENT_TYPE, self.charset)
    }

    /// Writes the payload to `writer` and flushes it.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.bytes)?;
        writer.flush()?;
        Ok(())
    }
}

impl AsRef<[u8]> for EncodedCsv {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<EncodedCsv> for Vec<u8> {
    fn from(csv: EncodedCsv) -> Self {
        csv.bytes
    }
}

/// Encodes records into a complete CSV payload.
///
/// The output charset is resolved before any record is touched, so an
/// unsupported charset fails fast. Transcoding covers the whole payload; an
/// unmappable character fails the call with no partial output.
///
/// # Example
///
/// ```rust
/// use csvbody::{CsvConfig, Field, Record, encode};
///
/// let records = vec![
///     Record::ordered(["name", "id"]),
///     Record::keyed([("name", Field::from("john")), ("id", Field::from(1))]),
/// ];
///
/// let csv = encode(&records, &CsvConfig::new())?;
/// assert_eq!(&csv.as_bytes()[3..], b"\"name\",\"id\"\r\n\"john\",\"1\"\r\n");
/// # Ok::<(), csvbody::CsvError>(())
/// ```
pub fn encode(records: &[Record], config: &CsvConfig) -> Result<EncodedCsv> {
    let charset = Charset::for_label(&config.output_encoding)?;

    let body = encode_body(records, config);
    let bytes = charset.encode_payload(&body)?;

    tracing::debug!(
        records = records.len(),
        bytes = bytes.len(),
        charset = charset.name(),
        "encoded csv payload"
    );

    Ok(EncodedCsv {
        bytes,
        charset: charset.name(),
    })
}

/// Encodes records and writes the payload to a file.
///
/// The file is only created once encoding has succeeded.
pub fn write_csv(
    records: &[Record],
    output_path: impl AsRef<Path>,
    config: &CsvConfig,
) -> Result<()> {
    let csv = encode(records, config)?;
    fs::write(output_path, csv.as_bytes())?;
    Ok(())
}

/// Builds the body text: escaped fields joined by the separator, one
/// `\r\n`-terminated line per record.
fn encode_body(records: &[Record], config: &CsvConfig) -> String {
    let mut body = String::new();

    for record in records {
        for (i, field) in record.values().enumerate() {
            if i > 0 {
                body.push(config.separator);
            }
            push_escaped(&mut body, field, config);
        }
        body.push_str("\r\n");
    }

    body
}
