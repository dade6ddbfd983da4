//! Array conversion
//!
//! Arrays are encoded as elements joined by [`ARRAY_DELIMITER`], e.g.
//! `1|2|3`. Empty segments are dropped before conversion, so a trailing
//! delimiter never yields a spurious zero element.

use std::fmt::Display;

use crate::convert::scalar::FromCell;
use crate::error::ConvResult;

/// Separates array elements and map entries inside a cell
pub const ARRAY_DELIMITER: char = '|';

/// Decode cell text into a vector of scalars.
///
/// Each non-empty segment is parsed with the non-empty literal path of
/// scalar conversion; the empty-input defaulting rule does not apply per
/// element because empty segments never reach conversion. Any segment that
/// fails to parse fails the whole array (no partial results). Ordering and
/// duplicates follow the source text.
///
/// # Example
///
/// ```rust
/// use tabrec_core::parse_array;
///
/// assert_eq!(parse_array::<i32>("1|2|3").unwrap(), vec![1, 2, 3]);
/// assert_eq!(parse_array::<i32>("1||3").unwrap(), vec![1, 3]);
/// assert_eq!(parse_array::<i32>("").unwrap(), Vec::<i32>::new());
/// ```
pub fn parse_array<T: FromCell>(text: &str) -> ConvResult<Vec<T>> {
    text.split(ARRAY_DELIMITER)
        .filter(|segment| !segment.is_empty())
        .map(T::from_literal)
        .collect()
}

/// Encode scalars as array cell text, joining with [`ARRAY_DELIMITER`].
///
/// The grammar has no escaping: elements whose rendering contains a
/// delimiter character will not round-trip.
pub fn encode_array<T: Display>(items: &[T]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(ARRAY_DELIMITER);
        }
        out.push_str(&item.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array_basic() {
        assert_eq!(parse_array::<i32>("1|2|3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_array::<f64>("1.5|2.5").unwrap(), vec![1.5, 2.5]);
        assert_eq!(parse_array::<bool>("0|1|true").unwrap(), vec![false, true, true]);
    }

    #[test]
    fn test_parse_array_single_element() {
        assert_eq!(parse_array::<i32>("7").unwrap(), vec![7]);
    }

    #[test]
    fn test_parse_array_empty_segments_dropped() {
        assert_eq!(parse_array::<i32>("1||3").unwrap(), vec![1, 3]);
        assert_eq!(parse_array::<i32>("1|2|").unwrap(), vec![1, 2]);
        assert_eq!(parse_array::<i32>("|1").unwrap(), vec![1]);
        assert_eq!(parse_array::<i32>("|||").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_parse_array_empty_text() {
        assert_eq!(parse_array::<i32>("").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_parse_array_preserves_order_and_duplicates() {
        assert_eq!(parse_array::<i32>("3|1|3|2").unwrap(), vec![3, 1, 3, 2]);
    }

    #[test]
    fn test_parse_array_bad_element_fails_whole_array() {
        let err = parse_array::<i32>("1|x|3").unwrap_err();
        assert_eq!(err.text, "x");
    }

    #[test]
    fn test_encode_array() {
        assert_eq!(encode_array(&[1, 2, 3]), "1|2|3");
        assert_eq!(encode_array::<i32>(&[]), "");
        assert_eq!(encode_array(&[true, false]), "true|false");
    }

    #[test]
    fn test_round_trip() {
        let items = vec![5i64, -3, 0, 5];
        assert_eq!(parse_array::<i64>(&encode_array(&items)).unwrap(), items);
    }
}
