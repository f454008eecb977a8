//! Configuration management subsystem.
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Command-line flags override config values

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::ConsoleConfig;
pub use schema::ObservabilityConfig;
pub use schema::TargetConfig;
