use std::io::{self, Write};

use serde::Serialize;

pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn print_done(json: bool, message: &str) -> anyhow::Result<()> {
    if json {
        return print_json(&serde_json::json!({ "status": "ok" }));
    }
    println!("{message}");
    Ok(())
}

pub(crate) fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    let mut input = String::new();
    eprint!("{prompt}");
    io::stderr().flush()?;
    io::stdin().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

pub(crate) fn prompt_password(prompt: &str) -> anyhow::Result<String> {
    eprint!("{prompt}");
    io::stderr().flush()?;
    let password = rpassword::read_password()?;
    if password.trim().is_empty() {
        anyhow::bail!("password is required");
    }
    Ok(password)
}
