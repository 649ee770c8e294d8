//! Paginated list responses and the page iterator.
//!
//! The server owns all continuation state: every page names the next one
//! through an opaque link, and the client never computes offsets itself.
//!
//! ```no_run
//! use twilio_rest::{Client, ClientConfig, Credentials, Error, Params};
//!
//! # async fn example() -> Result<(), Error> {
//! let client = Client::new(ClientConfig::new(Credentials::new("AC0123", "token"))?)?;
//! let mut pages = client.accounts().page_iterator(Params::new().with("PageSize", 50));
//! loop {
//!     match pages.next().await {
//!         Ok(page) => {
//!             for account in page.items {
//!                 println!("{}", account.sid);
//!             }
//!         }
//!         Err(Error::NoMoreResults) => break,
//!         Err(e) => return Err(e),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::marker::PhantomData;

use futures_util::stream::Stream;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::error::Error;
use crate::http::HttpClient;
use crate::service::Resource;
use crate::types::{BaseUrl, Params};

/// Paging metadata carried by every list response.
///
/// The counters are informational only; nothing in this crate uses them to
/// decide whether another page exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageCursor {
    pub first_page_uri: Option<String>,
    pub start: Option<u64>,
    pub end: Option<u64>,
    pub num_pages: Option<u64>,
    pub total: Option<u64>,
    pub next_page_uri: Option<String>,
    pub previous_page_uri: Option<String>,
    pub page_size: Option<u64>,
    /// Paging block used by the versioned (Chat, Notify) APIs.
    pub meta: Option<PageMeta>,
}

/// The `meta` paging block of the versioned APIs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub first_page_url: Option<String>,
    pub previous_page_url: Option<String>,
    pub next_page_url: Option<String>,
    pub url: Option<String>,
    pub key: Option<String>,
}

impl PageCursor {
    /// The link to the next page, if the server supplied one.
    ///
    /// `next_page_uri` wins; `meta.next_page_url` is the fallback. Empty
    /// strings count as absent.
    pub fn next_link(&self) -> Option<&str> {
        let meta_link = self
            .meta
            .as_ref()
            .and_then(|meta| meta.next_page_url.as_deref());

        self.next_page_uri
            .as_deref()
            .filter(|link| !link.is_empty())
            .or(meta_link.filter(|link| !link.is_empty()))
    }
}

/// One page of a list endpoint.
#[derive(Debug, Clone)]
pub struct Page<R> {
    /// Records in server order.
    pub items: Vec<R>,
    pub cursor: PageCursor,
}

impl<R: Resource> Page<R> {
    /// Split a list response into its records and its cursor.
    ///
    /// The records live under `R::LIST_KEY`; a response without that field
    /// is rejected.
    pub fn from_json(mut value: Value) -> Result<Self, serde_json::Error> {
        let items = match value.get_mut(R::LIST_KEY) {
            Some(items) => serde_json::from_value(items.take())?,
            None => return Err(serde::de::Error::missing_field(R::LIST_KEY)),
        };
        let cursor = serde_json::from_value(value)?;

        Ok(Self { items, cursor })
    }
}

impl<R> Page<R> {
    /// The link to the next page, if any.
    pub fn next_page_uri(&self) -> Option<&str> {
        self.cursor.next_link()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<R> IntoIterator for Page<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// A resumable cursor over a paginated list endpoint.
///
/// Each call to [`next`](PageIterator::next):
/// 1. fetches the stored next-page link, if there is one;
/// 2. otherwise, on the very first call, fetches the collection with the
///    original parameters;
/// 3. otherwise fails with [`Error::NoMoreResults`] without any request.
///
/// State only advances after a successful fetch, so a failed call can be
/// repeated as-is. `next` takes `&mut self`: one iterator, one owner.
#[derive(Debug, Clone)]
pub struct PageIterator<R> {
    http: HttpClient,
    base: BaseUrl,
    collection: Url,
    params: Params,
    next_page: Option<String>,
    count: u32,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> PageIterator<R> {
    /// Iterator starting at the first page of `collection`.
    pub fn new(http: HttpClient, base: BaseUrl, collection: Url, params: Params) -> Self {
        Self {
            http,
            base,
            collection,
            params,
            next_page: None,
            count: 0,
            _resource: PhantomData,
        }
    }

    /// Iterator that starts at a previously obtained next-page link.
    ///
    /// The initial collection fetch is skipped. Relative links are resolved
    /// against `base`.
    ///
    /// # Panics
    ///
    /// Panics if `next_page_uri` is empty: resuming from nothing is a bug
    /// in the caller, not a runtime condition.
    pub fn resume(
        http: HttpClient,
        base: BaseUrl,
        collection: Url,
        next_page_uri: impl Into<String>,
    ) -> Self {
        let next_page_uri = next_page_uri.into();
        assert!(
            !next_page_uri.is_empty(),
            "cannot resume pagination from an empty next page URI"
        );

        Self {
            next_page: Some(next_page_uri),
            ..Self::new(http, base, collection, Params::new())
        }
    }

    /// Fetch the next page.
    #[instrument(skip(self), fields(resource = R::LIST_KEY, fetched = self.count))]
    pub async fn next(&mut self) -> Result<Page<R>, Error> {
        let body: Value = match (&self.next_page, self.count) {
            (Some(link), _) => {
                let url = self.base.resolve(link)?;
                debug!(%url, "fetching next page");
                self.http.fetch(&url, &Params::new()).await?
            }
            (None, 0) => {
                debug!(url = %self.collection, "fetching first page");
                self.http.fetch(&self.collection, &self.params).await?
            }
            (None, _) => return Err(Error::NoMoreResults),
        };

        let page = Page::<R>::from_json(body)?;

        self.next_page = page.next_page_uri().map(str::to_string);
        self.count += 1;

        Ok(page)
    }

    /// Number of pages fetched so far.
    pub fn pages_fetched(&self) -> u32 {
        self.count
    }

    /// The stored link to the next page.
    pub fn next_page_uri(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    /// True once a page without a next link has been fetched.
    pub fn is_exhausted(&self) -> bool {
        self.count > 0 && self.next_page.is_none()
    }

    /// Flatten the remaining pages into a stream of records.
    ///
    /// The stream ends cleanly at exhaustion and yields the first other
    /// error it meets, then stops.
    pub fn into_stream(mut self) -> impl Stream<Item = Result<R, Error>> {
        async_stream::try_stream! {
            loop {
                match self.next().await {
                    Ok(page) => {
                        for item in page.items {
                            yield item;
                        }
                    }
                    Err(Error::NoMoreResults) => break,
                    Err(e) => Err::<(), Error>(e)?,
                }
            }
        }
    }
}
