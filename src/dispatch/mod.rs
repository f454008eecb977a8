//! Request dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! field value + host string
//!     → dispatcher.rs (validate, resolve target, status writes)
//!     → action.rs (build_request: pure {method, url, body})
//!     → transport seam (send)
//!     → spawned task writes response body to the output field
//! ```

pub mod action;
pub mod dispatcher;

pub use action::{build_request, Action, OutboundRequest};
pub use dispatcher::{Dispatcher, DEFAULT_PORT, EMPTY_HOST_STATUS, INSTALL_MARKER};
