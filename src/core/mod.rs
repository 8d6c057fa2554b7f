//! Core encoding logic for csvbody.
//!
//! This module contains:
//! - [`normalizer`] - Flattening records into ordered field values
//! - [`escape`] - Quoting and escaping individual fields
//! - [`transcode`] - Charset resolution and payload transcoding
//! - [`encoder`] - Joining everything into a finished payload
//!
//! # Quick Start
//!
//! ```rust
//! use csvbody::core::{CsvConfig, Record, encode};
//!
//! let csv = encode(&[Record::ordered(["a", "b"])], &CsvConfig::new())?;
//! assert_eq!(csv.content_type(), "text/csv");
//! # Ok::<(), csvbody::CsvError>(())
//! ```

pub mod encoder;
pub mod escape;
pub mod normalizer;
pub mod transcode;

// Re-export main types for convenience
pub use encoder::{CONTENT_TYPE, EncodedCsv, encode, write_csv};
pub use escape::escape_field;
pub use normalizer::normalize;
pub use transcode::{Charset, UTF8_BOM};

pub use crate::config::CsvConfig;
pub use crate::record::{Field, Record};
