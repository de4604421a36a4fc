//! Bank Ledger CLI
//!
//! Command-line interface for applying banking operation scripts.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- ops.csv > accounts.csv
//! cargo run -- --no-validate ops.csv > accounts.csv
//! ```
//!
//! The program reads operation records from the input CSV file, applies
//! them to a fresh in-memory ledger, and outputs the final account states
//! to stdout. Rows that fail are reported on stderr and skipped.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use bank_ledger::{cli, pipeline};
use std::process;

fn main() {
    let args = cli::parse_args();

    // Output goes to stdout; per-row errors go to stderr
    let mut output = std::io::stdout();
    if let Err(e) = pipeline::process_file(&args.input_file, &mut output, !args.no_validate) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
