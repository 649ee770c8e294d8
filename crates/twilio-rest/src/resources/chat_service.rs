//! Programmable Chat services.
//!
//! <https://www.twilio.com/docs/chat/rest/service-resource>

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::Api;
use crate::service::Resource;
use crate::types::wire_enum::wire_enum;

wire_enum! {
    /// Events a chat service can forward to its webhooks.
    pub enum ChatWebhookEvent {
        OnMessageSend => "onMessageSend",
        OnMessageRemove => "onMessageRemove",
        OnMessageUpdate => "onMessageUpdate",
        OnMediaMessageSend => "onMediaMessageSend",
        OnChannelAdd => "onChannelAdd",
        OnChannelUpdate => "onChannelUpdate",
        OnChannelDestroy => "onChannelDestroy",
        OnMemberAdd => "onMemberAdd",
        OnMemberRemove => "onMemberRemove",
        OnUserAdded => "onUserAdded",
        OnUserUpdate => "onUserUpdate",
    }
}

/// Per-service limits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatServiceLimits {
    pub channel_members: Option<u32>,
    pub user_channels: Option<u32>,
}

/// Media message settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatServiceMedia {
    pub size_limit_mb: Option<u32>,
    pub compatibility_message: Option<String>,
}

/// A chat service: the container for channels, users and roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatService {
    pub sid: String,
    pub account_sid: Option<String>,
    pub consumption_report_interval: Option<u32>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub default_channel_creator_role_sid: Option<String>,
    pub default_channel_role_sid: Option<String>,
    pub default_service_role_sid: Option<String>,
    pub friendly_name: Option<String>,
    pub limits: Option<ChatServiceLimits>,
    pub links: Option<HashMap<String, String>>,
    pub media: Option<ChatServiceMedia>,
    pub post_webhook_url: Option<String>,
    pub pre_webhook_url: Option<String>,
    pub post_webhook_retry_count: Option<u32>,
    pub pre_webhook_retry_count: Option<u32>,
    pub reachability_enabled: Option<bool>,
    pub read_status_enabled: Option<bool>,
    pub typing_indicator_timeout: Option<u32>,
    pub url: Option<String>,
    pub webhook_filters: Option<Vec<ChatWebhookEvent>>,
    pub webhook_method: Option<String>,
}

impl Resource for ChatService {
    const API: Api = Api::Chat;
    const PATH: &'static str = "Services";
    const LIST_KEY: &'static str = "services";

    fn sid(&self) -> &str {
        &self.sid
    }

    fn date_created(&self) -> Option<&str> {
        self.date_created.as_deref()
    }
}
