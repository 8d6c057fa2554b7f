//! Records and fields.
//!
//! A [`Record`] is one CSV line. It is either an ordered list of [`Field`]s
//! or a keyed list of `(name, field)` pairs; the names are dropped on output
//! and only the order of the pairs matters.
//!
//! # Examples
//!
//! ```
//! use csvbody::{Field, Record};
//!
//! let ordered = Record::ordered(["john", "doe"]);
//! let keyed = Record::keyed([("name", Field::from("john")), ("id", Field::from(1))]);
//!
//! assert_eq!(ordered.len(), 2);
//! assert_eq!(keyed.values().nth(1), Some(&Field::Integer(1)));
//! ```
//!
//! # Key order
//!
//! Keyed records enumerate in insertion order. Conversions from map types
//! keep their source's order: a [`BTreeMap`] yields sorted keys, a
//! `serde_json::Map` yields insertion order.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

/// Text rendered for an absent field when absent fields are not ignored.
pub const ABSENT_LITERAL: &str = "undefined";

/// A single scalar cell value.
///
/// `null` and `undefined` style values are both [`Field::Absent`]. Any other
/// displayable value can become a field through [`Field::display`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Field {
    /// No value.
    #[default]
    Absent,
    /// Text, emitted as-is apart from quote escaping.
    Text(String),
    /// Signed integer.
    Integer(i64),
    /// Unsigned integer too large for [`Field::Integer`] or naturally unsigned.
    Unsigned(u64),
    /// Floating point number.
    Float(f64),
    /// Boolean, rendered `true` / `false`.
    Bool(bool),
}

impl Field {
    /// Creates a text field from anything implementing [`Display`](fmt::Display).
    ///
    /// ```
    /// use csvbody::Field;
    /// use std::net::Ipv4Addr;
    ///
    /// let field = Field::display(Ipv4Addr::LOCALHOST);
    /// assert_eq!(field, Field::Text("127.0.0.1".into()));
    /// ```
    pub fn display(value: impl fmt::Display) -> Self {
        Field::Text(value.to_string())
    }

    /// Returns `true` for [`Field::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    /// Returns the canonical, locale-independent text of this field.
    ///
    /// Absent fields render as [`ABSENT_LITERAL`]. Floats use positional
    /// notation; non-finite values render `NaN`, `Infinity`, `-Infinity`.
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            Field::Absent => Cow::Borrowed(ABSENT_LITERAL),
            Field::Text(s) => Cow::Borrowed(s),
            Field::Integer(n) => Cow::Owned(n.to_string()),
            Field::Unsigned(n) => Cow::Owned(n.to_string()),
            Field::Float(v) => format_float(*v),
            Field::Bool(true) => Cow::Borrowed("true"),
            Field::Bool(false) => Cow::Borrowed("false"),
        }
    }
}

fn format_float(v: f64) -> Cow<'static, str> {
    if v.is_nan() {
        Cow::Borrowed("NaN")
    } else if v.is_infinite() {
        Cow::Borrowed(if v > 0.0 { "Infinity" } else { "-Infinity" })
    } else if v == 0.0 {
        // -0.0 included
        Cow::Borrowed("0")
    } else {
        Cow::Owned(v.to_string())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

// ============================================================================
// Field conversions
// ============================================================================

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Text(value.to_string())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Field::Text(value)
    }
}

impl From<&String> for Field {
    fn from(value: &String) -> Self {
        Field::Text(value.clone())
    }
}

impl From<char> for Field {
    fn from(value: char) -> Self {
        Field::Text(value.to_string())
    }
}

impl From<bool> for Field {
    fn from(value: bool) -> Self {
        Field::Bool(value)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Field {
            fn from(value: $t) -> Self {
                Field::Integer(i64::from(value))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Field {
            fn from(value: $t) -> Self {
                Field::Unsigned(u64::from(value))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Field {
    fn from(value: isize) -> Self {
        i64::try_from(value).map_or_else(|_| Field::display(value), Field::Integer)
    }
}

impl From<usize> for Field {
    fn from(value: usize) -> Self {
        u64::try_from(value).map_or_else(|_| Field::display(value), Field::Unsigned)
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::Float(value)
    }
}

impl From<f32> for Field {
    /// Goes through the shortest `f32` text so `0.1f32` stays `0.1`.
    fn from(value: f32) -> Self {
        Field::Float(
            value
                .to_string()
                .parse::<f64>()
                .unwrap_or_else(|_| f64::from(value)),
        )
    }
}

impl From<DateTime<Utc>> for Field {
    fn from(value: DateTime<Utc>) -> Self {
        Field::Text(value.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

impl From<NaiveDate> for Field {
    fn from(value: NaiveDate) -> Self {
        Field::Text(value.format("%Y-%m-%d").to_string())
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(value: Option<T>) -> Self {
        value.map_or(Field::Absent, Into::into)
    }
}

// ============================================================================
// Record
// ============================================================================

/// One logical CSV line.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// Fields in output order.
    Ordered(Vec<Field>),
    /// Named fields; output order is the order of the pairs.
    Keyed(Vec<(String, Field)>),
}

impl Record {
    /// Builds an ordered record from anything convertible to fields.
    pub fn ordered<I, F>(fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        Record::Ordered(fields.into_iter().map(Into::into).collect())
    }

    /// Builds a keyed record, keeping the given pair order.
    pub fn keyed<I, K, F>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, F)>,
        K: Into<String>,
        F: Into<Field>,
    {
        Record::Keyed(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Iterates over the field values in output order.
    pub fn values(&self) -> Values<'_> {
        match self {
            Record::Ordered(fields) => Values(ValuesInner::Ordered(fields.iter())),
            Record::Keyed(pairs) => Values(ValuesInner::Keyed(pairs.iter())),
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        match self {
            Record::Ordered(fields) => fields.len(),
            Record::Keyed(pairs) => pairs.len(),
        }
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` for [`Record::Keyed`].
    pub fn is_keyed(&self) -> bool {
        matches!(self, Record::Keyed(_))
    }
}

impl From<Vec<Field>> for Record {
    fn from(fields: Vec<Field>) -> Self {
        Record::Ordered(fields)
    }
}

impl From<Vec<(String, Field)>> for Record {
    fn from(pairs: Vec<(String, Field)>) -> Self {
        Record::Keyed(pairs)
    }
}

impl<V: Into<Field>> From<BTreeMap<String, V>> for Record {
    /// Keys come out in sorted order.
    fn from(map: BTreeMap<String, V>) -> Self {
        Record::keyed(map)
    }
}

/// Iterator over a record's values, returned by [`Record::values`].
#[derive(Debug, Clone)]
pub struct Values<'a>(ValuesInner<'a>);

#[derive(Debug, Clone)]
enum ValuesInner<'a> {
    Ordered(std::slice::Iter<'a, Field>),
    Keyed(std::slice::Iter<'a, (String, Field)>),
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a Field;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.0 {
            ValuesInner::Ordered(iter) => iter.next(),
            ValuesInner::Keyed(iter) => iter.next().map(|(_, v)| v),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.0 {
            ValuesInner::Ordered(iter) => iter.size_hint(),
            ValuesInner::Keyed(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Values<'_> {}
