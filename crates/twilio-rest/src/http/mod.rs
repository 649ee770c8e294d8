//! HTTP transport.
//!
//! This module provides the authenticated client every resource service
//! goes through.

mod client;

pub use client::HttpClient;
