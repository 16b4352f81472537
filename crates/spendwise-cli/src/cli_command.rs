use spendwise_client::ClientError;

use crate::cli_args::*;
use crate::modules::auth::{handle_login, handle_logout, handle_status};
use crate::modules::categories::handle_category;
use crate::modules::expenses::handle_expense;
use crate::modules::reports::handle_report;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_command(
    command: Command,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let result = match command {
        Command::Login(args) => return handle_login(args, ctx).await,
        Command::Logout => handle_logout(ctx),
        Command::Status => handle_status(ctx),
        Command::Expenses(args) => handle_expense(args, ctx).await,
        Command::Categories(args) => handle_category(args, ctx).await,
        Command::Report(args) => handle_report(args, ctx).await,
    };
    result.map_err(with_login_hint)
}

fn with_login_hint(err: anyhow::Error) -> anyhow::Error {
    match err.downcast_ref::<ClientError>() {
        Some(client_err) if client_err.is_unauthorized() => {
            err.context("session expired or missing; run `spendwise login`")
        }
        _ => err,
    }
}
