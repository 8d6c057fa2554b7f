//! # csvbody
//!
//! Spreadsheet-safe CSV payloads for HTTP responses.
//!
//! ## Overview
//!
//! csvbody turns a list of records into a complete, ready-to-send CSV body:
//! - every field double-quoted, embedded quotes doubled
//! - `\r\n` line endings
//! - a leading byte-order mark so Excel detects the encoding
//! - optional `="..."` wrapping to stop spreadsheets from casting
//!   `00123` to `123` or `1/2` to a date
//! - optional transcoding to a legacy charset such as `Shift_JIS`
//!
//! The crate never touches sockets or headers. A web handler calls
//! [`encode`], copies [`EncodedCsv::content_type_header`] into its response
//! and writes [`EncodedCsv::as_bytes`] as the body.
//!
//! ## Quick Start
//!
//! ```rust
//! use csvbody::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = vec![
//!         Record::ordered(["name", "id"]),
//!         Record::keyed([("name", Field::from("john")), ("id", Field::from(1))]),
//!     ];
//!
//!     let csv = encode(&records, &CsvConfig::excel())?;
//!
//!     assert_eq!(csv.content_type_header(), "text/csv; charset=utf-8");
//!     assert!(csv.as_bytes().ends_with(b"=\"john\",=\"1\"\r\n"));
//!     Ok(())
//! }
//! ```
//!
//! ## Transcoding
//!
//! ```rust
//! # #[cfg(feature = "transcode")]
//! # fn main() -> csvbody::Result<()> {
//! use csvbody::{CsvConfig, Record, encode};
//!
//! let config = CsvConfig::new().with_output_encoding("shift_jis");
//! let csv = encode(&[Record::ordered(["日本"])], &config)?;
//!
//! assert_eq!(csv.charset(), "Shift_JIS");
//! assert_eq!(csv.as_bytes(), b"\"\x93\xfa\x96\x7b\"\r\n");
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "transcode"))]
//! # fn main() {}
//! ```
//!
//! ## Module Structure
//!
//! - [`record`] — [`Record`] and [`Field`]
//! - [`config`] — [`CsvConfig`]
//! - [`core`] — Encoding pipeline
//!   - [`core::normalizer`] — [`normalize`](core::normalize)
//!   - [`core::escape`] — [`escape_field`](core::escape_field)
//!   - [`core::transcode`] — [`Charset`](core::Charset)
//!   - [`core::encoder`] — [`encode`], [`write_csv`], [`EncodedCsv`]
//! - `json` — Records from `serde_json` values and `Serialize` types
//!   (feature `json`)
//! - [`error`] — [`CsvError`], [`Result`]
//! - [`prelude`] — Convenient re-exports
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `json` | yes | `serde_json` bridge, `encode_serialize` |
//! | `transcode` | yes | non-UTF-8 output via `encoding_rs` |

pub mod config;
pub mod core;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use config::CsvConfig;
pub use crate::core::{EncodedCsv, encode, write_csv};
pub use error::{CsvError, Result};
pub use record::{Field, Record};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use csvbody::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::CsvConfig;
    pub use crate::core::{Charset, EncodedCsv, encode, escape_field, normalize, write_csv};
    pub use crate::error::{CsvError, Result};
    pub use crate::record::{Field, Record};

    #[cfg(feature = "json")]
    pub use crate::json::encode_serialize;
}
