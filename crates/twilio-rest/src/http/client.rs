//! Authenticated HTTP client.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};
use url::Url;

use crate::credentials::Credentials;
use crate::error::{ApiError, Error, TransportError};
use crate::types::Params;

/// Longest slice of an unexpected response body kept in the error.
const MAX_ERROR_BODY: usize = 512;

/// HTTP client for API requests.
///
/// Every request carries HTTP Basic authentication and is bounded by the
/// configured timeout. Cloning is cheap: the connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    credentials: Credentials,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new client for the given credentials.
    pub fn new(credentials: Credentials, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("twilio-rest/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::from_reqwest(e, timeout))?;

        Ok(Self {
            client,
            credentials,
            timeout,
        })
    }

    /// Returns the credentials this client authenticates with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the per-request deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` with `params` as the query string and decode the body.
    #[instrument(skip_all, fields(%url))]
    pub async fn fetch<R>(&self, url: &Url, params: &Params) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        debug!("GET");
        trace!(?params, "query parameters");

        let mut request = self.client.get(url.clone());
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = self.send(request).await?;
        self.handle_response(response).await
    }

    /// POST `form` as a form-url-encoded body to `url` and decode the response.
    #[instrument(skip_all, fields(%url))]
    pub async fn submit_form<R>(&self, url: &Url, form: &Params) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        debug!(fields = form.len(), "POST");

        let request = self.client.post(url.clone()).form(form);

        let response = self.send(request).await?;
        self.handle_response(response).await
    }

    /// DELETE `url`. Only 204 No Content counts as success.
    #[instrument(skip_all, fields(%url))]
    pub async fn remove(&self, url: &Url) -> Result<(), Error> {
        debug!("DELETE");

        let response = self.send(self.client.delete(url.clone())).await?;
        let status = response.status().as_u16();
        trace!(status, "response");

        if status == 204 {
            return Ok(());
        }

        let body = self.read_body(response).await?;
        if (200..300).contains(&status) {
            Err(unexpected_status(status, &body))
        } else {
            Err(error_for_status(status, &body))
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, Error> {
        request
            .basic_auth(
                self.credentials.username(),
                Some(self.credentials.auth_token()),
            )
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(e, self.timeout).into())
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, Error> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::from_reqwest(e, self.timeout))?;
        Ok(bytes.to_vec())
    }

    /// Decode a 200/201 body, or map the failure status.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status().as_u16();
        trace!(status, "response");

        let body = self.read_body(response).await?;
        match status {
            200 | 201 => Ok(serde_json::from_slice(&body)?),
            _ => Err(error_for_status(status, &body)),
        }
    }
}

/// Map a failure status and body to an error.
///
/// 500 is reported as a server error without looking at the body. Anything
/// else must carry a structured error body; otherwise the status and a
/// slice of the raw body are returned.
fn error_for_status(status: u16, body: &[u8]) -> Error {
    if status == 500 {
        return Error::Server { status };
    }

    match serde_json::from_slice::<ApiError>(body) {
        Ok(mut error) => {
            if error.status == 0 {
                error.status = status;
            }
            Error::Api(error)
        }
        Err(_) => unexpected_status(status, body),
    }
}

fn unexpected_status(status: u16, body: &[u8]) -> Error {
    Error::UnexpectedStatus {
        status,
        body: String::from_utf8_lossy(body)
            .chars()
            .take(MAX_ERROR_BODY)
            .collect(),
    }
}
