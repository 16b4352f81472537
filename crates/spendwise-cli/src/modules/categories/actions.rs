use spendwise_core::CategoryInput;

use crate::cli_args::*;
use crate::modules::system::format_table::print_category_table;
use crate::modules::system::{print_done, print_json, CommandContext};

pub(crate) async fn handle_category(
    args: CategoryArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        CategoryCommand::List => {
            let categories = ctx.client.list_categories().await?;
            if ctx.json {
                print_json(&categories)?;
            } else {
                print_category_table(&categories);
            }
        }
        CategoryCommand::Get(args) => {
            let category = ctx.client.get_category(args.id).await?;
            print_json(&category)?;
        }
        CategoryCommand::Create(args) => {
            let category = ctx.client.create_category(&category_input(args)).await?;
            print_json(&category)?;
        }
        CategoryCommand::Update(args) => {
            let category = ctx
                .client
                .update_category(args.id, &category_input(args.fields))
                .await?;
            print_json(&category)?;
        }
        CategoryCommand::Delete(args) => {
            ctx.client.delete_category(args.id).await?;
            print_done(ctx.json, "Category deleted")?;
        }
    }
    Ok(())
}

fn category_input(args: CategoryWriteArgs) -> CategoryInput {
    CategoryInput {
        name: args.name,
        description: args.description,
    }
}
