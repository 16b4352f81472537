use chrono::Local;
use spendwise_core::{ExpenseFilters, ExpenseInput};

use crate::cli_args::*;
use crate::modules::system::format_table::print_expense_table;
use crate::modules::system::{print_done, print_json, CommandContext};

pub(crate) async fn handle_expense(
    args: ExpenseArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        ExpenseCommand::List(args) => {
            let filters = ExpenseFilters {
                category: args.category,
                date_from: args.date_from,
                date_to: args.date_to,
                search: args.search,
            };
            let expenses = ctx.client.list_expenses(&filters).await?;
            if ctx.json {
                print_json(&expenses)?;
            } else {
                print_expense_table(&expenses);
            }
        }
        ExpenseCommand::Get(args) => {
            let expense = ctx.client.get_expense(args.id).await?;
            print_json(&expense)?;
        }
        ExpenseCommand::Create(args) => {
            let input = ExpenseInput {
                amount: Some(args.amount),
                description: Some(args.description),
                category_id: Some(args.category_id),
                date: Some(args.date.unwrap_or_else(|| Local::now().date_naive())),
            };
            let expense = ctx.client.create_expense(&input).await?;
            print_json(&expense)?;
        }
        ExpenseCommand::Update(args) => {
            let input = ExpenseInput {
                amount: args.amount,
                description: args.description,
                category_id: args.category_id,
                date: args.date,
            };
            if input.amount.is_none()
                && input.description.is_none()
                && input.category_id.is_none()
                && input.date.is_none()
            {
                anyhow::bail!("nothing to update; pass at least one field");
            }
            let expense = ctx.client.update_expense(args.id, &input).await?;
            print_json(&expense)?;
        }
        ExpenseCommand::Delete(args) => {
            ctx.client.delete_expense(args.id).await?;
            print_done(ctx.json, "Expense deleted")?;
        }
    }
    Ok(())
}
