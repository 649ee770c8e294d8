//! API credentials.

use std::fmt;

/// Credentials for HTTP Basic authentication against the API.
///
/// The account SID is the username and the auth token the password. An API
/// key SID and secret can be used in the same positions, together with the
/// owning account SID for account-scoped URLs (see
/// [`Credentials::with_api_key`]).
///
/// # Security
///
/// The auth token is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use twilio_rest::Credentials;
///
/// let creds = Credentials::new("AC0123", "auth-token-here");
/// assert_eq!(creds.account_sid(), "AC0123");
/// ```
#[derive(Clone)]
pub struct Credentials {
    account_sid: String,
    username: String,
    auth_token: String,
}

impl Credentials {
    /// Credentials from an account SID and its auth token.
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        let account_sid = account_sid.into();
        Self {
            username: account_sid.clone(),
            account_sid,
            auth_token: auth_token.into(),
        }
    }

    /// Credentials from an API key, acting on behalf of `account_sid`.
    pub fn with_api_key(
        account_sid: impl Into<String>,
        key_sid: impl Into<String>,
        key_secret: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            username: key_sid.into(),
            auth_token: key_secret.into(),
        }
    }

    /// Returns the account the requests act on.
    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    /// Returns the Basic auth username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the Basic auth password.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication headers.
    /// Never log or display this value.
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }
}

// Intentionally hide the token in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_sid", &self.account_sid)
            .field("username", &self.username)
            .field("auth_token", &"[REDACTED]")
            .finish()
    }
}
