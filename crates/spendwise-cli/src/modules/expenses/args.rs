use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ExpenseArgs {
    #[command(subcommand)]
    pub command: ExpenseCommand,
}

#[derive(Subcommand)]
pub enum ExpenseCommand {
    List(ExpenseListArgs),
    Get(ExpenseIdArgs),
    Create(ExpenseCreateArgs),
    Update(ExpenseUpdateArgs),
    Delete(ExpenseIdArgs),
}

#[derive(Args)]
pub struct ExpenseListArgs {
    #[arg(long, value_delimiter = ',', help = "Category ids, comma-separated")]
    pub category: Vec<i64>,
    #[arg(long)]
    pub date_from: Option<NaiveDate>,
    #[arg(long)]
    pub date_to: Option<NaiveDate>,
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct ExpenseIdArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct ExpenseCreateArgs {
    #[arg(long)]
    pub amount: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub category_id: i64,
    #[arg(long, help = "Defaults to today")]
    pub date: Option<NaiveDate>,
}

#[derive(Args)]
pub struct ExpenseUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub amount: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub category_id: Option<i64>,
    #[arg(long)]
    pub date: Option<NaiveDate>,
}
