//! Script processing pipeline
//!
//! Orchestrates the flow from an operation-script file to final account
//! states, delegating:
//! - CSV parsing to [`OpReader`] (iterator interface)
//! - Operation processing to [`BankEngine`] (business logic)
//! - CSV output to [`write_accounts_csv`] (format handling)
//!
//! # Error Handling
//!
//! Fatal errors (file not found, I/O errors) are returned immediately.
//! Individual operation errors are logged to stderr and processing
//! continues with the next row; the core itself never prints.
//!
//! [`OpReader`]: crate::io::OpReader
//! [`BankEngine`]: crate::core::BankEngine
//! [`write_accounts_csv`]: crate::io::write_accounts_csv

use crate::core::BankEngine;
use crate::io::csv_format::write_accounts_csv;
use crate::io::reader::OpReader;
use crate::types::Account;
use std::io::Write;
use std::path::Path;

/// Process an operation script and write the final account states
///
/// Streams operation records from the CSV file at `input_path`, applies
/// each to a fresh ledger, and writes the resulting account states to
/// `output` as CSV.
///
/// # Arguments
///
/// * `input_path` - Path to the operation-script CSV file
/// * `output` - Writer for the final account-state CSV
/// * `validate` - Whether the engine runs validator rules before each
///   operation
///
/// # Returns
///
/// * `Ok(())` if processing completed (possibly with recoverable,
///   logged-and-skipped row errors)
/// * `Err(String)` if a fatal error occurred
pub fn process_file(
    input_path: &Path,
    output: &mut dyn Write,
    validate: bool,
) -> Result<(), String> {
    let mut engine = BankEngine::new(validate);

    let reader = OpReader::new(input_path)?;

    for result in reader {
        match result {
            Ok(record) => {
                if let Err(e) = engine.process(record) {
                    eprintln!("Operation error: {}", e);
                }
            }
            Err(e) => {
                eprintln!("CSV parsing error: {}", e);
            }
        }
    }

    let accounts: Vec<Account> = engine
        .ledger()
        .accounts()
        .into_iter()
        .cloned()
        .collect();

    write_accounts_csv(&accounts, output)?;

    Ok(())
}
