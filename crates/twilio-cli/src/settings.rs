//! Effective settings: flags, then environment, then the stored profile,
//! then built-in defaults.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::debug;
use twilio_rest::config::{DEFAULT_API_BASE, DEFAULT_CHAT_BASE, DEFAULT_NOTIFY_BASE, DEFAULT_TIMEOUT};
use twilio_rest::{BaseUrl, Client, ClientConfig, Credentials};

use crate::cli::AuthArgs;
use crate::profile::{self, Profile};

pub const ENV_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";
pub const ENV_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";
pub const ENV_API_BASE: &str = "TWILIO_BASE_URL";
pub const ENV_CHAT_BASE: &str = "TWILIO_CHAT_BASE_URL";
pub const ENV_NOTIFY_BASE: &str = "TWILIO_NOTIFY_BASE_URL";
/// Request timeout in whole seconds.
pub const ENV_API_WAIT: &str = "TWILIO_API_WAIT";

/// Fully resolved client settings.
#[derive(Clone)]
pub struct Settings {
    pub account_sid: String,
    pub auth_token: String,
    pub api_base: String,
    pub chat_base: String,
    pub notify_base: String,
    pub timeout: Duration,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("chat_base", &self.chat_base)
            .field("notify_base", &self.notify_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Settings {
    /// Resolve from flags, the process environment and the stored profile.
    pub fn load(auth: &AuthArgs) -> Result<Self> {
        let profile = profile::load_profile().context("Failed to load profile")?;
        Self::resolve(auth, profile.as_ref(), env_var)
    }

    /// Resolve from flags and the process environment only.
    pub fn load_without_profile(auth: &AuthArgs) -> Result<Self> {
        Self::resolve(auth, None, env_var)
    }

    pub fn resolve(
        auth: &AuthArgs,
        profile: Option<&Profile>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let account_sid = auth
            .account_sid
            .clone()
            .or_else(|| env(ENV_ACCOUNT_SID))
            .or_else(|| profile.map(|p| p.account_sid.clone()));
        let auth_token = auth
            .auth_token
            .clone()
            .or_else(|| env(ENV_AUTH_TOKEN))
            .or_else(|| profile.map(|p| p.auth_token.clone()));

        let (Some(account_sid), Some(auth_token)) = (account_sid, auth_token) else {
            bail!(
                "No credentials. Pass --account-sid and --auth-token, set {ENV_ACCOUNT_SID} and \
                 {ENV_AUTH_TOKEN}, or run 'twilio login' first."
            );
        };

        let base = |var: &str, stored: Option<&String>, default: &str| {
            env(var)
                .or_else(|| stored.cloned())
                .unwrap_or_else(|| default.to_string())
        };

        let settings = Self {
            account_sid,
            auth_token,
            api_base: base(
                ENV_API_BASE,
                profile.and_then(|p| p.api_base.as_ref()),
                DEFAULT_API_BASE,
            ),
            chat_base: base(
                ENV_CHAT_BASE,
                profile.and_then(|p| p.chat_base.as_ref()),
                DEFAULT_CHAT_BASE,
            ),
            notify_base: base(
                ENV_NOTIFY_BASE,
                profile.and_then(|p| p.notify_base.as_ref()),
                DEFAULT_NOTIFY_BASE,
            ),
            timeout: parse_wait(env(ENV_API_WAIT).as_deref()),
        };

        debug!(
            account_sid = %settings.account_sid,
            api_base = %settings.api_base,
            timeout_secs = settings.timeout.as_secs(),
            "settings resolved"
        );
        Ok(settings)
    }

    /// Build a library client from these settings.
    pub fn client(&self) -> Result<Client> {
        let config = ClientConfig::new(Credentials::new(&self.account_sid, &self.auth_token))?
            .with_api_base(BaseUrl::new(&self.api_base).context("Invalid API base URL")?)
            .with_chat_base(BaseUrl::new(&self.chat_base).context("Invalid chat base URL")?)
            .with_notify_base(
                BaseUrl::new(&self.notify_base).context("Invalid notify base URL")?,
            )
            .with_timeout(self.timeout);

        Client::new(config).context("Failed to create client")
    }

    /// The profile to store for these settings. Hosts equal to the
    /// defaults are left out.
    pub fn to_profile(&self) -> Profile {
        let non_default = |value: &str, default: &str| {
            (value != default).then(|| value.to_string())
        };

        Profile {
            account_sid: self.account_sid.clone(),
            auth_token: self.auth_token.clone(),
            api_base: non_default(&self.api_base, DEFAULT_API_BASE),
            chat_base: non_default(&self.chat_base, DEFAULT_CHAT_BASE),
            notify_base: non_default(&self.notify_base, DEFAULT_NOTIFY_BASE),
        }
    }
}

/// Environment lookup treating empty values as unset.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Timeout in seconds; missing, zero or unparsable values mean the default.
fn parse_wait(value: Option<&str>) -> Duration {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT)
}
