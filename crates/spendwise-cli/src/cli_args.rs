use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use spendwise_core::DEFAULT_API_URL;

pub use crate::modules::auth::args::*;
pub use crate::modules::categories::args::*;
pub use crate::modules::expenses::args::*;
pub use crate::modules::reports::args::*;

#[derive(Parser)]
#[command(name = "spendwise")]
#[command(about = "Spendwise expense tracker CLI")]
pub struct Cli {
    #[arg(long, env = "SPENDWISE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
    #[arg(
        long,
        env = "SPENDWISE_CREDENTIALS_FILE",
        help = "Keep tokens in this JSON file instead of the OS keyring"
    )]
    pub credentials_file: Option<PathBuf>,
    #[arg(long, env = "SPENDWISE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
    #[arg(long, global = true, help = "Print raw JSON instead of tables")]
    pub json: bool,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Login(LoginArgs),
    Logout,
    Status,
    #[command(alias = "expense")]
    Expenses(ExpenseArgs),
    #[command(alias = "category")]
    Categories(CategoryArgs),
    #[command(about = "Summary report with per-category totals")]
    Report(ReportArgs),
}
