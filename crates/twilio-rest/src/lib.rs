//! twilio-rest - typed client for the Twilio REST API
//!
//! Covers accounts, TwiML applications, API keys, Programmable Chat services,
//! roles and push credentials, and Notify services. Every resource kind gets
//! the same operations through a [`ResourceService`]: create, update,
//! delete, get, and paginated listing via [`PageIterator`].
//!
//! # Example
//!
//! ```no_run
//! use twilio_rest::{Client, ClientConfig, Credentials, Params, Sid};
//!
//! # async fn example() -> Result<(), twilio_rest::Error> {
//! let client = Client::new(ClientConfig::new(Credentials::new("AC0123", "token"))?)?;
//!
//! let page = client.chat_services().page(&Params::new()).await?;
//! for service in &page.items {
//!     let roles = client.chat_roles(&Sid::new(&service.sid)?).page(&Params::new()).await?;
//!     println!("{}: {} roles", service.sid, roles.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod page;
pub mod resources;
pub mod service;
pub mod types;

// Re-export primary types at crate root for convenience
pub use client::Client;
pub use config::{Api, ClientConfig};
pub use credentials::Credentials;
pub use error::{ApiError, Error, InvalidInputError, TransportError};
pub use page::{Page, PageCursor, PageIterator, PageMeta};
pub use resources::*;
pub use service::{DeleteMode, Deleted, Resource, ResourceService};
pub use types::{BaseUrl, Params, Sid};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
