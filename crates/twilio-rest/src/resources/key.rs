//! API keys.
//!
//! <https://www.twilio.com/docs/iam/keys/api-key-resource>

use serde::{Deserialize, Serialize};

use crate::config::Api;
use crate::service::Resource;

/// An API key. The secret is only returned once, on creation.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub sid: String,
    pub friendly_name: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub secret: Option<String>,
}

impl Resource for Key {
    const API: Api = Api::Core;
    const PATH: &'static str = "Keys";
    const LIST_KEY: &'static str = "keys";

    fn sid(&self) -> &str {
        &self.sid
    }

    fn date_created(&self) -> Option<&str> {
        self.date_created.as_deref()
    }
}

// Hide the secret in Debug output
impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key")
            .field("sid", &self.sid)
            .field("friendly_name", &self.friendly_name)
            .field("date_created", &self.date_created)
            .field("date_updated", &self.date_updated)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
