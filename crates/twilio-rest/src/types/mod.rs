//! Core value types.
//!
//! These types enforce their invariants at construction time, so an
//! invalid identifier or base URL never reaches the network layer.

mod base_url;
mod params;
mod sid;
mod timestamp;
pub(crate) mod wire_enum;

pub use base_url::BaseUrl;
pub use params::Params;
pub use sid::Sid;
pub use timestamp::parse_timestamp;
