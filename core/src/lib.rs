//! # quiz-nav Core
//!
//! Core library for quiz-nav - the client-side navigation layer of the quiz
//! front-end.
//!
//! This library holds the route table, the history backends that track
//! navigation state, and the router that binds the two together. It never
//! depends on a concrete UI framework: views are reached through the
//! [`ViewProvider`] capability.

// Core modules
pub mod config;
pub mod error;
pub mod history;
pub mod location;
pub mod quiz;
pub mod route;
pub mod router;
pub mod table;
pub mod view;

// Re-export commonly used types
pub use config::RouterSettings;
pub use error::{RouterError, RouterResult};
pub use history::{HistoryBackend, HistoryFactory, HistoryMode, HistoryStrategy};
pub use location::{Location, MatchOptions};
pub use quiz::{quiz_router, quiz_routes};
pub use route::{RouteDefinition, RouteName, ViewKey};
pub use router::{create_router, Mounted, NavigationTarget, Router, RouterBuilder};
pub use table::{RouteTable, TableIssue};
pub use view::{ViewProvider, ViewRegistry};

/// Current version of the quiz-nav-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
