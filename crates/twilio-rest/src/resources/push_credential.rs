//! Push notification credentials for chat services.
//!
//! <https://www.twilio.com/docs/chat/rest/credential-resource>

use serde::{Deserialize, Serialize};

use crate::config::Api;
use crate::service::Resource;
use crate::types::wire_enum::wire_enum;

wire_enum! {
    /// Push provider a credential is for.
    pub enum PushCredentialType {
        Apn => "apn",
        Fcm => "fcm",
        Gcm => "gcm",
    }
}

/// APN, FCM or GCM credential. Secrets are write-only and never returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushCredential {
    pub sid: String,
    pub account_sid: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub friendly_name: Option<String>,
    #[serde(rename = "type")]
    pub credential_type: Option<PushCredentialType>,
    pub sandbox: Option<bool>,
    pub url: Option<String>,
}

impl Resource for PushCredential {
    const API: Api = Api::Chat;
    const PATH: &'static str = "Credentials";
    const LIST_KEY: &'static str = "credentials";

    fn sid(&self) -> &str {
        &self.sid
    }

    fn date_created(&self) -> Option<&str> {
        self.date_created.as_deref()
    }
}
