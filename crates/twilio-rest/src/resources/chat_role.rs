//! Programmable Chat roles.
//!
//! <https://www.twilio.com/docs/chat/rest/role-resource>

use serde::{Deserialize, Serialize};

use crate::config::Api;
use crate::service::Resource;
use crate::types::wire_enum::wire_enum;

wire_enum! {
    /// Scope a role applies to.
    pub enum ChatRoleType {
        Channel => "channel",
        Deployment => "deployment",
    }
}

wire_enum! {
    /// Permission granted by a role.
    pub enum ChatPermission {
        // deployment roles
        CreateChannel => "createChannel",
        JoinChannel => "joinChannel",

        // channel roles
        SendMessage => "sendMessage",
        SendMediaMessage => "sendMediaMessage",
        LeaveChannel => "leaveChannel",
        DeleteOwnMessage => "deleteOwnMessage",

        // either
        DestroyChannel => "destroyChannel",
        InviteMember => "inviteMember",
        RemoveMember => "removeMember",
        EditChannelName => "editChannelName",
        EditChannelAttributes => "editChannelAttributes",
        AddMember => "addMember",
        EditOwnMessage => "editOwnMessage",
        EditAnyMessage => "editAnyMessage",
        EditOwnMessageAttributes => "editOwnMessageAttributes",
        EditAnyMessageAttributes => "editAnyMessageAttributes",
        DeleteAnyMessage => "deleteAnyMessage",
        EditOwnUserInfo => "editOwnUserInfo",
        EditAnyUserInfo => "editAnyUserInfo",
    }
}

/// A role within a chat service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRole {
    pub sid: String,
    pub account_sid: Option<String>,
    pub service_sid: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub friendly_name: Option<String>,
    #[serde(rename = "type")]
    pub role_type: Option<ChatRoleType>,
    #[serde(default)]
    pub permissions: Vec<ChatPermission>,
    pub url: Option<String>,
}

impl Resource for ChatRole {
    const API: Api = Api::Chat;
    const PATH: &'static str = "Roles";
    const LIST_KEY: &'static str = "roles";

    fn sid(&self) -> &str {
        &self.sid
    }

    fn date_created(&self) -> Option<&str> {
        self.date_created.as_deref()
    }
}
