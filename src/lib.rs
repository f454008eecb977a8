//! ZMI Management Console Client Library
//!
//! A thin client for a remote ZMI management service. Each user action
//! becomes exactly one HTTP POST against a fixed `/client/*` endpoint, and
//! the raw response body is routed back to a single shared output field.
//!
//! # Architecture Overview
//!
//! ```text
//!   field values            ┌──────────────────────────────────────┐
//!   ───────────────────────▶│ dispatch::Dispatcher                 │
//!   (query / name / attr    │   validate → resolve target →        │
//!    + host string)         │   build_request (pure) → spawn send  │
//!                           └───────────────┬──────────────────────┘
//!                                           │ OutboundRequest
//!                                           ▼
//!                           ┌──────────────────────────────────────┐
//!                           │ transport::Transport (seam)          │
//!                           │   HttpTransport (reqwest) / fakes    │
//!                           └───────────────┬──────────────────────┘
//!                                           │ response body
//!                                           ▼
//!                           ┌──────────────────────────────────────┐
//!                           │ output::OutputField                  │
//!                           │   last-writer-wins status/body sink  │
//!                           └──────────────────────────────────────┘
//! ```

pub mod config;
pub mod dispatch;
pub mod output;
pub mod transport;

pub use config::ConsoleConfig;
pub use dispatch::Dispatcher;
pub use output::OutputField;
pub use transport::HttpTransport;
