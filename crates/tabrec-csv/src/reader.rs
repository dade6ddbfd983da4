//! CSV row reader
//!
//! Maps a CSV table onto [`FieldRecord`]s: the first row names the fields,
//! every following row becomes one record pairing those names with raw cell
//! text. No type conversion happens here; that is the conversion runtime's
//! job, applied field by field in generated accessor code.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::Trim;
use tabrec_core::FieldRecord;

use crate::error::{TableError, TableResult};
use crate::options::TableReadOptions;

/// CSV table reader
pub struct TableReader;

impl TableReader {
    /// Read a CSV file into one field record per data row
    pub fn read_file<P: AsRef<Path>>(
        path: P,
        options: &TableReadOptions,
    ) -> TableResult<Vec<FieldRecord>> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into one field record per data row.
    ///
    /// Rows shorter than the header leave their trailing fields absent, so
    /// the runtime's zero-value defaulting applies to them. Cells beyond
    /// the header are ignored.
    pub fn read<R: Read>(reader: R, options: &TableReadOptions) -> TableResult<Vec<FieldRecord>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .trim(if options.trim { Trim::All } else { Trim::None })
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(str::to_owned)
            .collect();
        if headers.is_empty() {
            return Err(TableError::MissingHeader);
        }

        let mut records = Vec::new();
        for (row_idx, result) in csv_reader.records().enumerate() {
            let row = result?;

            if row.len() < headers.len() {
                log::debug!(
                    "row {} has {} cells for {} fields; trailing fields left absent",
                    row_idx + 1,
                    row.len(),
                    headers.len()
                );
            }

            let record: FieldRecord = headers
                .iter()
                .zip(row.iter())
                .map(|(name, cell)| (name.clone(), cell.to_owned()))
                .collect();
            records.push(record);
        }

        Ok(records)
    }
}
