//! Encoder configuration.
//!
//! [`CsvConfig`] is a plain value passed into every encode call. There is no
//! process-wide state: applications that want "set once" behavior build one
//! config at startup and share it by reference.
//!
//! # Example
//!
//! ```rust
//! use csvbody::config::CsvConfig;
//!
//! let config = CsvConfig::new()
//!     .with_separator(';')
//!     .with_prevent_cast(true)
//!     .with_output_encoding("windows-1252");
//!
//! assert_eq!(config.separator, ';');
//! ```

use serde::{Deserialize, Serialize};

/// Name of the canonical internal encoding. Payloads in this encoding are
/// never transcoded.
pub const CANONICAL_ENCODING: &str = "utf-8";

/// Configuration for CSV encoding.
///
/// Deserializes with defaults for any missing key, so a host application can
/// embed it in its own config file:
///
/// ```rust
/// use csvbody::config::CsvConfig;
///
/// let config: CsvConfig = serde_json::from_str(r#"{"prevent_cast": true}"#)?;
/// assert!(config.prevent_cast);
/// assert_eq!(config.separator, ',');
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    /// Field separator (default: `,`)
    pub separator: char,

    /// Wrap every field as `="..."` so spreadsheets keep it as text
    /// (default: false)
    pub prevent_cast: bool,

    /// Render absent fields as empty cells instead of the literal
    /// `undefined` (default: true)
    pub ignore_absent: bool,

    /// Charset label of the final payload (default: `utf-8`, no transcode)
    pub output_encoding: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            separator: ',',
            prevent_cast: false,
            ignore_absent: true,
            output_encoding: CANONICAL_ENCODING.to_string(),
        }
    }
}

impl CsvConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that keeps spreadsheets from casting cells.
    ///
    /// Numbers like `00123` and `1/2` survive opening in Excel unchanged.
    pub fn excel() -> Self {
        Self {
            prevent_cast: true,
            ..Self::default()
        }
    }

    /// Creates a semicolon-separated configuration, as expected by
    /// spreadsheets in locales that use `,` as the decimal mark.
    pub fn semicolon() -> Self {
        Self {
            separator: ';',
            ..Self::default()
        }
    }

    /// Sets the field separator.
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Enables or disables cast prevention.
    #[must_use]
    pub fn with_prevent_cast(mut self, enabled: bool) -> Self {
        self.prevent_cast = enabled;
        self
    }

    /// Sets whether absent fields render as empty cells.
    #[must_use]
    pub fn with_ignore_absent(mut self, ignore: bool) -> Self {
        self.ignore_absent = ignore;
        self
    }

    /// Sets the output charset label (e.g. `shift_jis`, `windows-1252`).
    #[must_use]
    pub fn with_output_encoding(mut self, label: impl Into<String>) -> Self {
        self.output_encoding = label.into();
        self
    }
}
