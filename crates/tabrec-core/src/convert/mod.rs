//! The conversion runtime
//!
//! This module contains:
//! - [`parse_scalar`] and the [`FromCell`] trait - scalar decoding
//! - [`parse_array`] / [`encode_array`] - `|`-delimited sequences
//! - [`parse_map`] / [`encode_map`] - `k=v|...` key/value maps
//!
//! All functions are pure and stateless; they may be called from any thread.

mod array;
mod map;
mod scalar;

pub use array::{encode_array, parse_array, ARRAY_DELIMITER};
pub use map::{encode_map, parse_map, KEY_VALUE_DELIMITER};
pub use scalar::{parse_scalar, FromCell};
