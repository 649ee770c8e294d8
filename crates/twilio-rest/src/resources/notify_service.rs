//! Notify services.
//!
//! <https://www.twilio.com/docs/notify/api/service-resource>

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::Api;
use crate::service::Resource;

/// A Notify service: routes notifications to push, SMS and messenger channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotifyService {
    pub sid: String,
    pub account_sid: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub friendly_name: Option<String>,
    pub apn_credential_sid: Option<String>,
    pub gcm_credential_sid: Option<String>,
    pub fcm_credential_sid: Option<String>,
    pub messaging_service_sid: Option<String>,
    pub facebook_messenger_page_id: Option<String>,
    pub alexa_skill_id: Option<String>,
    pub default_apn_notification_protocol_version: Option<String>,
    pub default_gcm_notification_protocol_version: Option<String>,
    pub default_fcm_notification_protocol_version: Option<String>,
    pub default_alexa_notification_protocol_version: Option<String>,
    pub log_enabled: Option<bool>,
    #[serde(rename = "type")]
    pub service_type: Option<String>,
    pub url: Option<String>,
    pub links: Option<HashMap<String, String>>,
}

impl Resource for NotifyService {
    const API: Api = Api::Notify;
    const PATH: &'static str = "Services";
    const LIST_KEY: &'static str = "services";

    fn sid(&self) -> &str {
        &self.sid
    }

    fn date_created(&self) -> Option<&str> {
        self.date_created.as_deref()
    }
}
