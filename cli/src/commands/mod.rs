//! CLI command implementations

pub mod check;
pub mod interactive;
pub mod navigate;
pub mod resolve;
pub mod routes;

pub use check::check_command;
pub use interactive::interactive_command;
pub use navigate::navigate_command;
pub use resolve::resolve_command;
pub use routes::routes_command;
