use clap::Parser;
use std::path::PathBuf;

/// Apply banking operation scripts to an in-memory ledger
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Apply banking operation scripts to an in-memory ledger", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing operation records
    #[arg(value_name = "INPUT", help = "Path to the input CSV operation script")]
    pub input_file: PathBuf,

    /// Skip validator rules and rely on the ledger's own guards only
    #[arg(
        long = "no-validate",
        help = "Skip input validation rules before applying operations"
    )]
    pub no_validate: bool,
}
