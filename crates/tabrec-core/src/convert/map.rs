//! Map conversion
//!
//! Maps are encoded as `key=value` entries joined by the array delimiter,
//! e.g. `a=1|b=2`. Malformed entries are skipped, not errored: maps carry
//! optional free-form metadata and a single corrupt entry must not abort the
//! whole record. Scalar and array conversion stay strict; the asymmetry is
//! part of the contract.

use std::fmt::Display;
use std::hash::Hash;

use ahash::AHashMap;

use crate::convert::array::ARRAY_DELIMITER;
use crate::convert::scalar::FromCell;
use crate::error::ConvResult;

/// Separates the key from the value inside one map entry
pub const KEY_VALUE_DELIMITER: char = '=';

/// Decode cell text into a key/value map.
///
/// An entry is well-formed iff splitting it on `=` leaves exactly two
/// non-empty parts (so `a==1` is accepted as `a=1`, while `a`, `a=`, and
/// `a=1=2` are skipped). Well-formed entries parse key and value strictly
/// and fail with `FormatError` on bad literals. Later duplicate keys
/// overwrite earlier ones.
///
/// # Example
///
/// ```rust
/// use tabrec_core::parse_map;
///
/// let m = parse_map::<String, i32>("a=1|bad|c=3").unwrap();
/// assert_eq!(m.len(), 2);
/// assert_eq!(m["a"], 1);
/// assert_eq!(m["c"], 3);
/// ```
pub fn parse_map<K, V>(text: &str) -> ConvResult<AHashMap<K, V>>
where
    K: FromCell + Eq + Hash,
    V: FromCell,
{
    let mut map = AHashMap::new();

    for entry in text.split(ARRAY_DELIMITER).filter(|e| !e.is_empty()) {
        let mut parts = entry
            .split(KEY_VALUE_DELIMITER)
            .filter(|part| !part.is_empty());

        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => {
                map.insert(K::from_literal(key)?, V::from_literal(value)?);
            }
            _ => {
                log::debug!("skipping malformed map entry: {entry:?}");
            }
        }
    }

    Ok(map)
}

/// Encode key/value pairs as map cell text.
///
/// Entry order follows the iterator; decoding applies last-write-wins for
/// duplicate keys. No escaping, as with arrays.
pub fn encode_map<'a, K, V, I>(pairs: I) -> String
where
    K: Display + 'a,
    V: Display + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let mut out = String::new();
    for (i, (key, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            out.push(ARRAY_DELIMITER);
        }
        out.push_str(&key.to_string());
        out.push(KEY_VALUE_DELIMITER);
        out.push_str(&value.to_string());
    }
    out
}
