//! Entry point tying configuration, transport and resource services together.

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Error;
use crate::http::HttpClient;
use crate::resources::{
    Account, Application, ChatRole, ChatService, Key, NotifyService, PushCredential,
};
use crate::service::{Resource, ResourceService};
use crate::types::Sid;

/// API client.
///
/// Holds the configuration and a shared HTTP connection pool. Resource
/// services are created on demand and are cheap to build.
///
/// ```no_run
/// use twilio_rest::{Client, ClientConfig, Credentials, Params};
///
/// # async fn example() -> Result<(), twilio_rest::Error> {
/// let config = ClientConfig::new(Credentials::new("AC0123", "token"))?;
/// let client = Client::new(config)?;
///
/// let app = client
///     .applications()
///     .create(&Params::new().with("FriendlyName", "support line"))
///     .await?;
/// println!("created {}", app.sid);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
    config: ClientConfig,
}

impl Client {
    /// Build a client from explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = HttpClient::new(config.credentials().clone(), config.timeout())?;
        debug!(
            account_sid = config.credentials().account_sid(),
            timeout_ms = config.timeout().as_millis() as u64,
            "client created"
        );
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying HTTP client, for endpoints without a typed service.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Accounts and subaccounts. Deleting an account closes it.
    pub fn accounts(&self) -> ResourceService<Account> {
        self.service(Vec::new())
    }

    /// TwiML applications of the authenticated account.
    ///
    /// Scoped under `Accounts/{account_sid}/Applications.json`.
    pub fn applications(&self) -> ResourceService<Application> {
        self.service(self.account_scope())
    }

    /// API keys of the authenticated account.
    ///
    /// Scoped under `Accounts/{account_sid}/Keys.json`.
    pub fn keys(&self) -> ResourceService<Key> {
        self.service(self.account_scope())
    }

    pub fn chat_services(&self) -> ResourceService<ChatService> {
        self.service(Vec::new())
    }

    /// Roles of one chat service.
    ///
    /// Scoped under `Services/{service_sid}/Roles` on the chat host.
    pub fn chat_roles(&self, service_sid: &Sid) -> ResourceService<ChatRole> {
        self.service(vec!["Services".to_string(), service_sid.to_string()])
    }

    pub fn push_credentials(&self) -> ResourceService<PushCredential> {
        self.service(Vec::new())
    }

    pub fn notify_services(&self) -> ResourceService<NotifyService> {
        self.service(Vec::new())
    }

    fn account_scope(&self) -> Vec<String> {
        vec![
            "Accounts".to_string(),
            self.config.credentials().account_sid().to_string(),
        ]
    }

    fn service<R: Resource>(&self, scope: Vec<String>) -> ResourceService<R> {
        ResourceService::new(
            self.http.clone(),
            self.config.base(R::API).clone(),
            scope,
        )
    }
}
