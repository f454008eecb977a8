//! Transport seam between the dispatcher and the network.
//!
//! # Design Decisions
//! - The dispatcher never touches reqwest directly; it goes through
//!   [`Transport`] so tests can substitute a recording fake
//! - A transport returns the response body verbatim for any HTTP status;
//!   the management service reports errors in the body, not the status line
//! - Transport errors stay on the caller's side of the seam and never reach
//!   the output field

pub mod http;

use std::future::Future;

use thiserror::Error;

use crate::dispatch::OutboundRequest;

/// Errors that can occur while sending a request.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The built URL is not parseable (malformed host string).
    #[error("invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection, DNS or protocol failure underneath the request.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Capability to send an [`OutboundRequest`] and hand back the response body.
pub trait Transport: Send + Sync + 'static {
    /// Send the request and resolve to the raw response body.
    fn send(
        &self,
        request: OutboundRequest,
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}

pub use http::HttpTransport;
