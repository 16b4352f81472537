use clap::Args;

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long, env = "SPENDWISE_USERNAME")]
    pub username: Option<String>,
    #[arg(long, env = "SPENDWISE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}
