//! Field escaping.
//!
//! Every field is quoted, whether or not it contains the separator. Embedded
//! double quotes are doubled. With cast prevention the quoted value gets a
//! leading `=`, which spreadsheets evaluate as a text formula.

use crate::config::CsvConfig;
use crate::record::Field;

/// Escapes a single field according to `config`.
///
/// # Example
///
/// ```rust
/// use csvbody::config::CsvConfig;
/// use csvbody::core::escape_field;
/// use csvbody::Field;
///
/// let config = CsvConfig::new();
/// assert_eq!(escape_field(&Field::from(r#"say "hi""#), &config), r#""say ""hi""""#);
/// assert_eq!(escape_field(&Field::Absent, &config), "");
///
/// let excel = CsvConfig::excel();
/// assert_eq!(escape_field(&Field::from(1), &excel), r#"="1""#);
/// ```
pub fn escape_field(field: &Field, config: &CsvConfig) -> String {
    let mut out = String::new();
    push_escaped(&mut out, field, config);
    out
}

/// Appends the escaped form of `field` to `out`.
pub(crate) fn push_escaped(out: &mut String, field: &Field, config: &CsvConfig) {
    if config.ignore_absent && field.is_absent() {
        return;
    }

    let text = field.canonical();
    out.reserve(text.len() + 3);

    if config.prevent_cast {
        out.push('=');
    }
    out.push('"');
    let mut parts = text.split('"');
    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for part in parts {
        out.push_str("\"\"");
        out.push_str(part);
    }
    out.push('"');
}
