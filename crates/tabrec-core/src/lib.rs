//! # tabrec-core
//!
//! Conversion runtime for tabrec generated record accessors.
//!
//! Table cells arrive as raw text; generated accessor code turns each cell
//! into a native value through this crate. The encoding grammar is shared by
//! every tabrec backend, so the same source table decodes identically in
//! every target language:
//!
//! - scalars: canonical literals, empty or absent cells decode to the
//!   type's zero value
//! - arrays: elements joined with `|`, empty segments dropped
//! - maps: `key=value` entries joined with `|`, malformed entries skipped
//!
//! ## Example
//!
//! ```rust
//! use tabrec_core::FieldRecord;
//!
//! let row: FieldRecord = [
//!     ("id", "7"),
//!     ("levels", "1|2|3"),
//!     ("bonus", "atk=5|def=2"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let id: u32 = row.field("id").unwrap();
//! let levels: Vec<i32> = row.field_array("levels").unwrap();
//! let bonus = row.field_map::<String, i64>("bonus").unwrap();
//!
//! assert_eq!(id, 7);
//! assert_eq!(levels, vec![1, 2, 3]);
//! assert_eq!(bonus["atk"], 5);
//!
//! // Absent fields decode to zero values, not errors.
//! assert_eq!(row.field::<i64>("weight").unwrap(), 0);
//! ```

pub mod convert;
pub mod error;
pub mod record;
pub mod value;

// Re-exports for convenience
pub use convert::{
    encode_array, encode_map, parse_array, parse_map, parse_scalar, FromCell, ARRAY_DELIMITER,
    KEY_VALUE_DELIMITER,
};
pub use error::{ConvResult, FormatError};
pub use record::FieldRecord;
pub use value::{ScalarKind, ScalarValue};
