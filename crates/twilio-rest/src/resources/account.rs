//! Accounts and subaccounts.
//!
//! <https://www.twilio.com/docs/iam/api/account>

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::Api;
use crate::service::{DeleteMode, Resource};
use crate::types::wire_enum::wire_enum;

/// Status value that closes an account for good.
pub const CLOSED_STATUS: &str = "closed";

wire_enum! {
    /// Lifecycle status of an account.
    pub enum AccountStatus {
        Active => "active",
        Suspended => "suspended",
        Closed => "closed",
    }
}

wire_enum! {
    /// Billing type of an account.
    pub enum AccountType {
        Trial => "Trial",
        Full => "Full",
    }
}

/// An account or subaccount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub sid: String,
    pub friendly_name: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<AccountType>,
    pub auth_token: Option<String>,
    pub owner_account_sid: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub status: Option<AccountStatus>,
    pub subresource_uris: Option<HashMap<String, String>>,
    pub uri: Option<String>,
}

impl Resource for Account {
    const API: Api = Api::Core;
    const PATH: &'static str = "Accounts";
    const LIST_KEY: &'static str = "accounts";
    // Accounts cannot be removed, only closed.
    const DELETE: DeleteMode = DeleteMode::Close {
        field: "Status",
        value: CLOSED_STATUS,
    };

    fn sid(&self) -> &str {
        &self.sid
    }

    fn date_created(&self) -> Option<&str> {
        self.date_created.as_deref()
    }
}
