use serde_json::json;
use spendwise_client::AuthState;
use tracing::info;

use crate::cli_args::LoginArgs;
use crate::modules::system::{print_done, print_json, prompt_line, prompt_password, CommandContext};

pub(crate) async fn handle_login(args: LoginArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let username = match args.username {
        Some(username) => username,
        None => prompt_line("Username: ")?,
    };
    if username.trim().is_empty() {
        anyhow::bail!("username is required");
    }
    let password = resolve_password(args.password, || prompt_password("Password: "))?;
    ctx.client.login(&username, &password).await?;
    info!(username = %username, api = %ctx.client.config().base_url, "session stored");
    print_done(ctx.json, &format!("Logged in as {username}"))
}

pub(crate) fn handle_logout(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    ctx.client.logout();
    print_done(ctx.json, "Logged out")
}

pub(crate) fn handle_status(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let authenticated = ctx.client.auth_state() == AuthState::Authenticated;
    let api_url = &ctx.client.config().base_url;
    if ctx.json {
        return print_json(&json!({
            "api_url": api_url,
            "authenticated": authenticated,
        }));
    }
    if authenticated {
        println!("Logged in ({api_url})");
    } else {
        println!("Not logged in ({api_url}); run `spendwise login`");
    }
    Ok(())
}

/// Flag or env value first; only an absent or empty one falls back to the
/// hidden prompt.
fn resolve_password(
    provided: Option<String>,
    prompt: impl FnOnce() -> anyhow::Result<String>,
) -> anyhow::Result<String> {
    match provided {
        Some(password) if !password.is_empty() => Ok(password),
        _ => prompt(),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_password;

    #[test]
    fn provided_password_skips_prompt() {
        let password = resolve_password(Some("s3cret".to_string()), || {
            panic!("prompt must not run")
        })
        .expect("password");
        assert_eq!(password, "s3cret");
    }

    #[test]
    fn missing_or_empty_password_uses_hidden_prompt() {
        let prompted = resolve_password(None, || Ok("typed".to_string())).expect("password");
        assert_eq!(prompted, "typed");
        let prompted =
            resolve_password(Some(String::new()), || Ok("typed".to_string())).expect("password");
        assert_eq!(prompted, "typed");
    }

    #[test]
    fn prompt_errors_propagate() {
        let err = resolve_password(None, || anyhow::bail!("password is required"))
            .expect_err("must fail");
        assert!(err.to_string().contains("password is required"));
    }
}
