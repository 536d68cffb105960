//! Minimal HTTP API client.
//!
//! Wraps `reqwest` with a base URL, default headers and timeouts, and
//! decodes bodies to JSON when the server says they are JSON.

pub mod client;
mod response;

pub use client::{ApiClient, RequestOptions, DEFAULT_TIMEOUT};
pub use response::ApiResponse;
