//! CSV loading options

/// Options for reading a CSV table into field records
#[derive(Debug, Clone)]
pub struct TableReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Trim surrounding whitespace from headers and cells (default: false).
    ///
    /// The conversion grammar does no trimming of its own, so padded cells
    /// in hand-edited tables fail scalar conversion unless this is set.
    pub trim: bool,
}

impl Default for TableReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            trim: false,
        }
    }
}
