//! Client configuration.

use std::time::Duration;

use crate::credentials::Credentials;
use crate::error::Error;
use crate::types::BaseUrl;

/// Production base URL of the 2010-04-01 REST API.
pub const DEFAULT_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Production base URL of the Programmable Chat API.
pub const DEFAULT_CHAT_BASE: &str = "https://chat.twilio.com/v2";

/// Production base URL of the Notify API.
pub const DEFAULT_NOTIFY_BASE: &str = "https://notify.twilio.com/v1";

/// Per-request deadline used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Which API host a resource lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Api {
    /// The 2010-04-01 REST API. Paths carry a `.json` suffix.
    Core,
    /// Programmable Chat.
    Chat,
    /// Notify.
    Notify,
}

impl Api {
    /// Suffix appended to the last path segment of every endpoint.
    pub fn path_suffix(self) -> &'static str {
        match self {
            Api::Core => ".json",
            Api::Chat | Api::Notify => "",
        }
    }
}

/// Explicit configuration for a [`Client`](crate::Client).
///
/// The library never reads the environment; callers (such as the CLI)
/// decide where base URLs and timeouts come from.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    credentials: Credentials,
    api_base: BaseUrl,
    chat_base: BaseUrl,
    notify_base: BaseUrl,
    timeout: Duration,
}

impl ClientConfig {
    /// Configuration pointing at the production hosts.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the default URLs are validated like any other.
    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        Ok(Self {
            credentials,
            api_base: BaseUrl::new(DEFAULT_API_BASE)?,
            chat_base: BaseUrl::new(DEFAULT_CHAT_BASE)?,
            notify_base: BaseUrl::new(DEFAULT_NOTIFY_BASE)?,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_api_base(mut self, base: BaseUrl) -> Self {
        self.api_base = base;
        self
    }

    pub fn with_chat_base(mut self, base: BaseUrl) -> Self {
        self.chat_base = base;
        self
    }

    pub fn with_notify_base(mut self, base: BaseUrl) -> Self {
        self.notify_base = base;
        self
    }

    /// Deadline applied to every request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Base URL for the given API.
    pub fn base(&self, api: Api) -> &BaseUrl {
        match api {
            Api::Core => &self.api_base,
            Api::Chat => &self.chat_base,
            Api::Notify => &self.notify_base,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
