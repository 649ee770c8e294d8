//! Whoami command implementation.

use anyhow::Result;

use crate::cli::AuthArgs;
use crate::output;
use crate::profile;
use crate::settings::Settings;

pub fn run(auth: &AuthArgs) -> Result<()> {
    let settings = Settings::load(auth)?;

    output::field("Account SID", &settings.account_sid);
    output::field("API", &settings.api_base);
    output::field("Chat API", &settings.chat_base);
    output::field("Notify API", &settings.notify_base);
    output::field("Timeout", &format!("{}s", settings.timeout.as_secs()));

    let path = profile::profile_path()?;
    if path.exists() {
        output::field("Profile", &path.display().to_string());
    }

    Ok(())
}
