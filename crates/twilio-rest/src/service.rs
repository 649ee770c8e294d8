//! Generic CRUD service shared by every resource kind.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::config::Api;
use crate::error::Error;
use crate::http::HttpClient;
use crate::page::{Page, PageIterator};
use crate::types::{BaseUrl, Params, Sid, parse_timestamp};

/// How a resource is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// HTTP DELETE on the item URL, expecting 204.
    Remove,
    /// POST `field=value` to the item URL. The resource is never removed,
    /// only moved into a terminal state.
    Close {
        field: &'static str,
        value: &'static str,
    },
}

/// Outcome of [`ResourceService::delete`].
#[derive(Debug, Clone, PartialEq)]
pub enum Deleted<R> {
    /// The resource is gone.
    Removed,
    /// The resource was closed; this is its final state.
    Closed(R),
}

/// A record type exposed by the API.
///
/// The associated constants describe where the collection lives and how
/// its list responses and deletions look; [`ResourceService`] does the rest.
pub trait Resource: Serialize + DeserializeOwned + Send + 'static {
    /// API host the resource lives on.
    const API: Api;
    /// Collection path segment, e.g. `Accounts`.
    const PATH: &'static str;
    /// Name of the record array in list responses.
    const LIST_KEY: &'static str;
    /// Deletion strategy.
    const DELETE: DeleteMode = DeleteMode::Remove;

    /// The record's identifier.
    fn sid(&self) -> &str;

    /// The raw creation date as sent by the API.
    fn date_created(&self) -> Option<&str>;

    /// The creation date, when present and well-formed.
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.date_created()
            .and_then(|raw| parse_timestamp(raw).ok())
    }
}

/// Create/update/delete/get/list operations for one resource kind.
///
/// Obtained from [`Client`](crate::Client) accessors such as
/// [`Client::accounts`](crate::Client::accounts).
#[derive(Debug, Clone)]
pub struct ResourceService<R> {
    http: HttpClient,
    base: BaseUrl,
    scope: Vec<String>,
    collection: Url,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceService<R> {
    /// Service for the collection at `base/scope.../R::PATH`.
    pub fn new(http: HttpClient, base: BaseUrl, scope: Vec<String>) -> Self {
        let mut segments: Vec<&str> = scope.iter().map(String::as_str).collect();
        segments.push(R::PATH);
        let collection = base.endpoint(&segments, R::API.path_suffix());

        Self {
            http,
            base,
            scope,
            collection,
            _resource: PhantomData,
        }
    }

    /// The collection URL.
    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    /// The item URL for `sid`.
    pub fn item_url(&self, sid: &Sid) -> Url {
        let mut segments: Vec<&str> = self.scope.iter().map(String::as_str).collect();
        segments.push(R::PATH);
        segments.push(sid.as_str());
        self.base.endpoint(&segments, R::API.path_suffix())
    }

    /// Create a record.
    #[instrument(skip_all, fields(resource = R::PATH))]
    pub async fn create(&self, params: &Params) -> Result<R, Error> {
        debug!("Creating record");
        self.http.submit_form(&self.collection, params).await
    }

    /// Update the record `sid`.
    #[instrument(skip(self, params), fields(resource = R::PATH, %sid))]
    pub async fn update(&self, sid: &Sid, params: &Params) -> Result<R, Error> {
        debug!("Updating record");
        self.http.submit_form(&self.item_url(sid), params).await
    }

    /// Delete the record `sid` according to [`Resource::DELETE`].
    #[instrument(skip(self), fields(resource = R::PATH, %sid))]
    pub async fn delete(&self, sid: &Sid) -> Result<Deleted<R>, Error> {
        let url = self.item_url(sid);
        match R::DELETE {
            DeleteMode::Remove => {
                debug!("Removing record");
                self.http.remove(&url).await?;
                Ok(Deleted::Removed)
            }
            DeleteMode::Close { field, value } => {
                debug!(field, value, "Closing record");
                let params = Params::new().with(field, value);
                let record = self.http.submit_form(&url, &params).await?;
                Ok(Deleted::Closed(record))
            }
        }
    }

    /// Fetch the record `sid`.
    #[instrument(skip(self), fields(resource = R::PATH, %sid))]
    pub async fn get(&self, sid: &Sid) -> Result<R, Error> {
        debug!("Getting record");
        self.http.fetch(&self.item_url(sid), &Params::new()).await
    }

    /// Fetch the first page of the collection.
    pub async fn page(&self, params: &Params) -> Result<Page<R>, Error> {
        self.page_iterator(params.clone()).next().await
    }

    /// Iterator over the collection's pages, starting at the first.
    pub fn page_iterator(&self, params: Params) -> PageIterator<R> {
        PageIterator::new(
            self.http.clone(),
            self.base.clone(),
            self.collection.clone(),
            params,
        )
    }

    /// Iterator resuming at a next-page link from an earlier page.
    ///
    /// # Panics
    ///
    /// Panics if `next_page_uri` is empty.
    pub fn page_iterator_from(&self, next_page_uri: &str) -> PageIterator<R> {
        PageIterator::resume(
            self.http.clone(),
            self.base.clone(),
            self.collection.clone(),
            next_page_uri,
        )
    }
}
