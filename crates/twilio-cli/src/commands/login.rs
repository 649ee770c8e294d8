//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use twilio_rest::Sid;

use crate::cli::AuthArgs;
use crate::output;
use crate::profile;
use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct LoginArgs {}

pub async fn run(auth: &AuthArgs, _args: LoginArgs) -> Result<()> {
    // A stale profile must not stand in for missing credentials.
    let settings = Settings::load_without_profile(auth)?;
    let account_sid = Sid::new(&settings.account_sid).context("Invalid account SID")?;

    eprintln!("{}", "Verifying credentials...".dimmed());

    let client = settings.client()?;
    let account = client
        .accounts()
        .get(&account_sid)
        .await
        .context("Failed to verify credentials")?;

    let path = profile::save_profile(&settings.to_profile()).context("Failed to save profile")?;

    // Print success
    output::success("Logged in successfully");
    println!();
    output::field("Account SID", &account.sid);
    if let Some(name) = &account.friendly_name {
        output::field("Friendly name", name);
    }
    if let Some(status) = &account.status {
        output::field("Status", &status.to_string());
    }
    output::field("Profile", &path.display().to_string());

    Ok(())
}
