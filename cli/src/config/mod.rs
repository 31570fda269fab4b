//! Configuration discovery and loading for the CLI

pub mod loader;

pub use loader::{CliConfigLoader, ConfigSource, ResolvedConfig};
