//! Stored login profile.

mod storage;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use storage::{clear_profile, load_profile, profile_path, save_profile};

/// Credentials and host overrides written by `twilio login`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub account_sid: String,
    pub auth_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_base: Option<String>,
}

// Hide the token in Debug output
impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("chat_base", &self.chat_base)
            .field("notify_base", &self.notify_base)
            .finish()
    }
}
