//! Record normalization.

use std::borrow::Cow;

use crate::record::{Field, Record};

/// Flattens a record into its ordered field values.
///
/// Ordered records are borrowed as-is. Keyed records yield their values in
/// enumeration order with the names dropped.
///
/// # Example
///
/// ```rust
/// use csvbody::core::normalize;
/// use csvbody::{Field, Record};
///
/// let record = Record::keyed([("name", Field::from("john")), ("id", Field::from(1))]);
/// assert_eq!(&*normalize(&record), &[Field::from("john"), Field::Integer(1)]);
/// ```
pub fn normalize(record: &Record) -> Cow<'_, [Field]> {
    match record {
        Record::Ordered(fields) => Cow::Borrowed(fields.as_slice()),
        Record::Keyed(_) => Cow::Owned(record.values().cloned().collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_is_borrowed() {
        let record = Record::ordered(["a", "b"]);
        let fields = normalize(&record);
        assert!(matches!(fields, Cow::Borrowed(_)));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_keyed_drops_names() {
        let record = Record::keyed([("name", Field::from("john")), ("id", Field::from(1))]);
        let fields = normalize(&record);
        assert_eq!(fields.as_ref(), &[Field::from("john"), Field::Integer(1)]);
    }

    #[test]
    fn test_keyed_keeps_duplicate_names() {
        let record = Record::keyed([("k", "first"), ("k", "second")]);
        assert_eq!(normalize(&record).len(), 2);
    }
}
