//! Management actions and request construction.
//!
//! # Design Decisions
//! - One variant per management endpoint; paths are fixed wire constants
//! - `build_request` is a pure function so tests can assert on the exact
//!   request without any transport in the loop
//! - Bodies are raw strings; the service expects no content-type header

use reqwest::Method;

/// A management action exposed by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Install a client (body: query string).
    Install,
    /// Uninstall a client (body: attribute name).
    Uninstall,
    /// Print a named ZMI object (body: object name).
    PrintZmi,
    /// Print a single attribute (body: attribute name).
    PrintAttribute,
}

impl Action {
    /// Endpoint path on the management service.
    pub fn path(&self) -> &'static str {
        match self {
            Action::Install => "/client/install",
            Action::Uninstall => "/client/uninstall",
            Action::PrintZmi => "/client/printZMI",
            Action::PrintAttribute => "/client/printAttribute",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::Install => "install",
            Action::Uninstall => "uninstall",
            Action::PrintZmi => "printZMI",
            Action::PrintAttribute => "printAttribute",
        };
        f.write_str(name)
    }
}

/// A fully built outbound request, ready for a [`Transport`] to send.
///
/// [`Transport`]: crate::transport::Transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub body: String,
}

/// Build the POST request for `action` against a resolved target.
///
/// The target is the scheme://host:port prefix produced by
/// [`Dispatcher::resolve_target`]; the action supplies the path and the
/// user-entered value becomes the raw body.
///
/// [`Dispatcher::resolve_target`]: crate::dispatch::Dispatcher::resolve_target
pub fn build_request(action: Action, value: &str, target: &str) -> OutboundRequest {
    OutboundRequest {
        method: Method::POST,
        url: format!("{}{}", target, action.path()),
        body: value.to_string(),
    }
}
