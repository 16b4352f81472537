use chrono::NaiveDate;
use clap::Args;

#[derive(Args)]
pub struct ReportArgs {
    #[arg(long, value_delimiter = ',', help = "Category ids, comma-separated")]
    pub category: Vec<i64>,
    #[arg(long)]
    pub date_from: Option<NaiveDate>,
    #[arg(long)]
    pub date_to: Option<NaiveDate>,
    #[arg(long)]
    pub description: Option<String>,
}
