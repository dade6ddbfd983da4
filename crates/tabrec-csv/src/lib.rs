//! # tabrec-csv
//!
//! CSV row loading for tabrec: turns a delimited text table (header row =
//! field names) into [`tabrec_core::FieldRecord`]s for generated accessor
//! code to materialize.

mod error;
mod options;
mod reader;

pub use error::{TableError, TableResult};
pub use options::TableReadOptions;
pub use reader::TableReader;
