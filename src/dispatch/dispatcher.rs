//! Request dispatcher.
//!
//! # Responsibilities
//! - Turn one user action into exactly one outbound POST
//! - Validate field values and the target host before sending
//! - Route the eventual response body to the shared output field
//!
//! # Design Decisions
//! - One spawned task per call; the old single global in-flight handle is
//!   replaced by per-call local state
//! - Overlapping requests are never cancelled; whichever completes last
//!   owns the output field (last-writer-wins)
//! - Transport failures are logged and leave the output field untouched

use std::sync::Arc;

use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::dispatch::action::{build_request, Action};
use crate::output::OutputField;
use crate::transport::Transport;

/// Status written when the target host field is empty.
pub const EMPTY_HOST_STATUS: &str = "IP address line is empty";

/// Marker written to the output field when an install is accepted.
pub const INSTALL_MARKER: &str = "not empty";

/// Default management service port.
pub const DEFAULT_PORT: u16 = 8000;

/// Dispatches management actions to the remote service.
///
/// All communication back to the caller goes through the shared
/// [`OutputField`]: synchronously for validation and status writes,
/// asynchronously when a response body arrives.
pub struct Dispatcher<T: Transport> {
    transport: Arc<T>,
    output: OutputField,
    port: u16,
}

impl<T: Transport> Dispatcher<T> {
    /// Create a dispatcher targeting the conventional port 8000.
    pub fn new(transport: T, output: OutputField) -> Self {
        Self::with_port(transport, output, DEFAULT_PORT)
    }

    /// Create a dispatcher targeting a non-default service port.
    pub fn with_port(transport: T, output: OutputField, port: u16) -> Self {
        Self {
            transport: Arc::new(transport),
            output,
            port,
        }
    }

    /// The output field this dispatcher writes to.
    pub fn output(&self) -> &OutputField {
        &self.output
    }

    /// Install a client. `query` is sent as the raw request body.
    ///
    /// Writes the install marker before resolving the target, matching the
    /// field-validation order of the management console. Returns `None` when
    /// validation skipped the network call.
    pub fn install(&self, query: &str, host: &str) -> Option<JoinHandle<()>> {
        if query.is_empty() {
            return None;
        }
        self.output.set(INSTALL_MARKER);
        let target = self.resolve_target(host)?;
        Some(self.dispatch(Action::Install, query, &target))
    }

    /// Uninstall a client. No synchronous status is written.
    pub fn uninstall(&self, attribute_name: &str, host: &str) -> Option<JoinHandle<()>> {
        if attribute_name.is_empty() {
            return None;
        }
        let target = self.resolve_target(host)?;
        Some(self.dispatch(Action::Uninstall, attribute_name, &target))
    }

    /// Print a named ZMI object.
    ///
    /// Writes "`{target} calling`" before validating `name`; an empty name
    /// leaves the status in place but sends nothing.
    pub fn print_zmi(&self, name: &str, host: &str) -> Option<JoinHandle<()>> {
        let target = self.resolve_target(host)?;
        self.output.set(format!("{} calling", target));
        if name.is_empty() {
            return None;
        }
        Some(self.dispatch(Action::PrintZmi, name, &target))
    }

    /// Print a single attribute. No synchronous status is written.
    pub fn print_attribute(&self, attribute: &str, host: &str) -> Option<JoinHandle<()>> {
        if attribute.is_empty() {
            return None;
        }
        let target = self.resolve_target(host)?;
        Some(self.dispatch(Action::PrintAttribute, attribute, &target))
    }

    /// Resolve the target prefix for a user-supplied host.
    ///
    /// An empty host writes [`EMPTY_HOST_STATUS`] to the output field and
    /// returns `None`; callers must treat `None` as do-not-send.
    pub fn resolve_target(&self, host: &str) -> Option<String> {
        if host.is_empty() {
            self.output.set(EMPTY_HOST_STATUS);
            return None;
        }
        Some(format!("http://{}:{}", host, self.port))
    }

    /// Spawn the send task for one request.
    fn dispatch(&self, action: Action, value: &str, target: &str) -> JoinHandle<()> {
        let request = build_request(action, value, target);
        let transport = Arc::clone(&self.transport);
        let output = self.output.clone();
        let request_id = Uuid::new_v4();

        tracing::debug!(
            %request_id,
            action = %action,
            url = %request.url,
            "dispatching request"
        );

        tokio::spawn(async move {
            match transport.send(request).await {
                Ok(body) => {
                    tracing::debug!(%request_id, bytes = body.len(), "request completed");
                    output.set(body);
                }
                Err(e) => {
                    // Failed sends produce no output update at all.
                    tracing::warn!(%request_id, error = %e, "request failed");
                }
            }
        })
    }
}

impl<T: Transport> std::fmt::Debug for Dispatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").field("port", &self.port).finish()
    }
}
