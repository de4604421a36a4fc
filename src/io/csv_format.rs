//! CSV format handling for operation scripts and account output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV rows to domain operation records
//! - Account state output serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{Account, OpType, OperationRecord};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV row structure for deserialization
///
/// Matches the operation-script format with columns:
/// `op,account,target,holder,type,amount`. All fields except `op` are
/// optional because each operation uses a different subset of them.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub op: String,
    pub account: Option<String>,
    pub target: Option<String>,
    pub holder: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to an OperationRecord
///
/// This function:
/// - Parses the operation name into an OpType (case-insensitively)
/// - Parses the amount string into a Decimal (if present)
/// - Checks that the fields each operation requires are present
///
/// # Returns
///
/// Result containing either:
/// - Ok(OperationRecord) - Successfully converted row
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<OperationRecord, String> {
    let op = match csv_record.op.to_lowercase().as_str() {
        "open" => OpType::Open,
        "deposit" => OpType::Deposit,
        "withdraw" => OpType::Withdraw,
        "transfer" => OpType::Transfer,
        _ => return Err(format!("Invalid operation: '{}'", csv_record.op)),
    };

    let account = non_empty(csv_record.account);
    let target = non_empty(csv_record.target);
    let holder = non_empty(csv_record.holder);
    let account_type = non_empty(csv_record.account_type);

    // Parse amount if present
    let amount = match non_empty(csv_record.amount) {
        Some(amount_str) => match Decimal::from_str(&amount_str) {
            Ok(decimal) => Some(decimal),
            Err(_) => return Err(format!("Invalid amount '{}'", amount_str)),
        },
        None => None,
    };

    // Check required fields per operation
    match op {
        OpType::Open => {
            if holder.is_none() {
                return Err("open operation requires a holder name".to_string());
            }
            if account_type.is_none() {
                return Err("open operation requires an account type".to_string());
            }
        }
        OpType::Deposit | OpType::Withdraw => {
            if account.is_none() {
                return Err(format!("{} operation requires an account number", csv_record.op));
            }
            if amount.is_none() {
                return Err(format!("{} operation requires an amount", csv_record.op));
            }
        }
        OpType::Transfer => {
            if account.is_none() {
                return Err("transfer operation requires a source account number".to_string());
            }
            if target.is_none() {
                return Err("transfer operation requires a target account number".to_string());
            }
            if amount.is_none() {
                return Err("transfer operation requires an amount".to_string());
            }
        }
    }

    Ok(OperationRecord {
        op,
        account,
        target,
        holder,
        account_type,
        amount,
    })
}

/// Treat missing and empty/whitespace-only CSV fields the same way
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

/// Write account states to CSV format
///
/// Writes accounts with columns: account, holder, type, balance.
/// Accounts are sorted by account number for deterministic output and
/// balances are rendered with two decimal places.
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_accounts_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    // Write header
    writer
        .write_record(["account", "holder", "type", "balance"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    // Sort accounts by number for deterministic output
    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by(|a, b| a.number().cmp(b.number()));

    // Write each account
    for account in sorted_accounts {
        writer
            .write_record(&[
                account.number().to_string(),
                account.holder_name().to_string(),
                account.account_type().to_string(),
                format!("{:.2}", account.balance()),
            ])
            .map_err(|e| format!("Failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
