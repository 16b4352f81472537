use spendwise_core::ReportFilters;

use crate::cli_args::ReportArgs;
use crate::modules::system::{print_json, CommandContext};

pub(crate) async fn handle_report(
    args: ReportArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    if let (Some(from), Some(to)) = (args.date_from, args.date_to) {
        if from > to {
            anyhow::bail!("--date-from must not be after --date-to");
        }
    }
    let filters = ReportFilters {
        category: args.category,
        date_from: args.date_from,
        date_to: args.date_to,
        description: args.description,
    };
    let summary = ctx.client.report_summary(&filters).await?;
    print_json(&summary)
}
