//! TwiML applications.
//!
//! <https://www.twilio.com/docs/usage/api/applications>

use serde::{Deserialize, Serialize};

use crate::config::Api;
use crate::service::Resource;

/// A TwiML application: a reusable set of voice and SMS callbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub sid: String,
    pub account_sid: Option<String>,
    pub api_version: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub friendly_name: Option<String>,
    pub message_status_callback: Option<String>,
    pub sms_fallback_method: Option<String>,
    pub sms_fallback_url: Option<String>,
    pub sms_method: Option<String>,
    pub sms_url: Option<String>,
    pub status_callback: Option<String>,
    pub status_callback_method: Option<String>,
    pub uri: Option<String>,
    pub voice_caller_id_lookup: Option<bool>,
    pub voice_fallback_method: Option<String>,
    pub voice_fallback_url: Option<String>,
    pub voice_method: Option<String>,
    pub voice_url: Option<String>,
}

impl Resource for Application {
    const API: Api = Api::Core;
    const PATH: &'static str = "Applications";
    const LIST_KEY: &'static str = "applications";

    fn sid(&self) -> &str {
        &self.sid
    }

    fn date_created(&self) -> Option<&str> {
        self.date_created.as_deref()
    }
}
