//! `login` subcommand: capture credentials and fetch a fresh token.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::api::ApiClient;
use crate::config::Config;

pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let mut config = Config::load_or_init(config_path)?;

    print!("Email: ");
    io::stdout().flush()?;
    let mut email = String::new();
    io::stdin()
        .lock()
        .read_line(&mut email)
        .context("Failed to read email")?;
    let email = email.trim().to_string();

    let password = rpassword::prompt_password("Password: ").context("Failed to read password")?;

    config.set_credentials(email, password);
    // Force a fresh token even if an unexpired one is cached.
    config.clear_token();

    let client = ApiClient::new()?;
    client.authenticate(&mut config).await?;

    println!("Logged in. Config saved to {}", config.path().display());
    Ok(())
}
