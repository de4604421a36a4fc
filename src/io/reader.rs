//! Streaming CSV reader for operation scripts
//!
//! Provides an iterator over operation records from a CSV file, delegating
//! format concerns to the csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as Err variants in the iterator
//! - Line numbers are included in error messages for debugging

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::OperationRecord;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming operation-script reader
///
/// Reads and deserializes CSV rows one at a time without loading the whole
/// file into memory, yielding `Result<OperationRecord, String>` per row.
///
/// # Examples
///
/// ```no_run
/// use bank_ledger::io::reader::OpReader;
/// use std::path::Path;
///
/// let reader = OpReader::new(Path::new("ops.csv")).unwrap();
/// for result in reader {
///     match result {
///         Ok(record) => println!("Applying operation: {:?}", record),
///         Err(e) => eprintln!("Error: {}", e),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct OpReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl OpReader {
    /// Create a new OpReader from a file path
    ///
    /// Opens the CSV file and prepares it for streaming iteration. The CSV
    /// reader trims whitespace from all fields and allows flexible field
    /// counts, since most columns are optional.
    ///
    /// # Errors
    ///
    /// Returns an error string if the file cannot be opened.
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for OpReader {
    type Item = Result<OperationRecord, String>;

    /// Get the next operation record from the CSV file
    ///
    /// Reads the next row, deserializes it to a CsvRecord, and converts it
    /// to an OperationRecord. Errors carry the line number (header is line
    /// 1, so the first data row is line 2).
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();

        match deserializer.next()? {
            Ok(csv_record) => {
                self.line_num += 1;
                Some(
                    convert_csv_record(csv_record)
                        .map_err(|e| format!("Line {}: {}", self.line_num + 1, e)),
                )
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(format!(
                    "Line {}: CSV parse error: {}",
                    self.line_num + 1,
                    e
                )))
            }
        }
    }
}
