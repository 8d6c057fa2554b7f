//! Records from `serde_json` values and serializable types.
//!
//! This is where record shapes are discovered at runtime: a JSON array is an
//! ordered record, a JSON object is a keyed record (in insertion order), and
//! anything else is rejected with [`CsvError::InvalidRecordShape`].
//!
//! # Example
//!
//! ```rust
//! use csvbody::json::encode_serialize;
//! use csvbody::CsvConfig;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User {
//!     name: &'static str,
//!     id: u32,
//! }
//!
//! let users = [User { name: "john", id: 1 }];
//! let csv = encode_serialize(&users, &CsvConfig::new())?;
//! assert_eq!(&csv.as_bytes()[3..], b"\"john\",\"1\"\r\n");
//! # Ok::<(), csvbody::CsvError>(())
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::config::CsvConfig;
use crate::core::encoder::{EncodedCsv, encode};
use crate::error::{CsvError, Result};
use crate::record::{Field, Record};

/// Short name of a JSON value's type, for error messages.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<Value> for Field {
    type Error = CsvError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Field::Absent),
            Value::Bool(b) => Ok(Field::Bool(b)),
            Value::String(s) => Ok(Field::Text(s)),
            Value::Number(n) => Ok(if let Some(i) = n.as_i64() {
                Field::Integer(i)
            } else if let Some(u) = n.as_u64() {
                Field::Unsigned(u)
            } else {
                n.as_f64()
                    .map_or_else(|| Field::Text(n.to_string()), Field::Float)
            }),
            Value::Array(_) | Value::Object(_) => Err(CsvError::nested_field(kind_of(&value))),
        }
    }
}

impl TryFrom<Value> for Record {
    type Error = CsvError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Record::Ordered(
                items
                    .into_iter()
                    .map(Field::try_from)
                    .collect::<Result<_>>()?,
            )),
            Value::Object(map) => Ok(Record::Keyed(
                map.into_iter()
                    .map(|(k, v)| Field::try_from(v).map(|f| (k, f)))
                    .collect::<Result<_>>()?,
            )),
            other => Err(CsvError::invalid_record_shape(kind_of(&other))),
        }
    }
}

impl Record {
    /// Builds a record from any serializable value.
    ///
    /// Structs and maps become keyed records in field declaration (or map
    /// iteration) order; sequences and tuples become ordered records.
    ///
    /// ```rust
    /// use csvbody::{Field, Record};
    ///
    /// let record = Record::from_serialize(&("a", 1, None::<bool>))?;
    /// assert_eq!(record, Record::Ordered(vec!["a".into(), Field::Integer(1), Field::Absent]));
    ///
    /// assert!(Record::from_serialize(&42).is_err());
    /// # Ok::<(), csvbody::CsvError>(())
    /// ```
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Record::try_from(serde_json::to_value(value)?)
    }
}

/// Converts every row with [`Record::from_serialize`] and encodes the result.
///
/// Fails on the first row that isn't array- or object-shaped.
pub fn encode_serialize<T: Serialize>(rows: &[T], config: &CsvConfig) -> Result<EncodedCsv> {
    let records = rows
        .iter()
        .map(Record::from_serialize)
        .collect::<Result<Vec<_>>>()?;
    encode(&records, config)
}
