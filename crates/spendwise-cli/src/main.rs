use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use spendwise_client::{ApiClient, ClientConfig, FileTokenStore, KeyringTokenStore, TokenStore};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::Cli;
use crate::cli_command::handle_command;
use crate::modules::system::CommandContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let store: Arc<dyn TokenStore> = match cli.credentials_file.as_deref() {
        Some(path) => {
            debug!(path = %path.display(), "using file token store");
            Arc::new(FileTokenStore::new(path))
        }
        None => Arc::new(KeyringTokenStore::default()),
    };
    let config = ClientConfig::new(&cli.api_url)
        .with_timeout(cli.timeout_secs.filter(|secs| *secs > 0).map(Duration::from_secs));
    let client = ApiClient::new(config, store)?;

    let ctx = CommandContext {
        client: &client,
        json: cli.json,
    };
    handle_command(cli.command, &ctx).await
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
