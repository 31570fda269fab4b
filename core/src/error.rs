//! Error types and handling for quiz-nav core

use thiserror::Error;

/// Result type alias for router operations
pub type RouterResult<T> = std::result::Result<T, RouterError>;

/// Structured error type for router operations
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("No routes configured")]
    NoRoutes,

    /// No table entry matches the requested location
    #[error("No route matches '{location}'")]
    UnresolvedRoute { location: String },

    #[error("Route '{0}' not found")]
    RouteNotFound(String),

    /// The matched route names a view the provider does not know
    #[error("View '{component}' is not registered")]
    ViewMissing { component: String },

    #[error("Invalid location '{input}': {reason}")]
    InvalidLocation { input: String, reason: String },

    /// Route table (de)serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RouterError {
    /// Whether this is the unresolved-route condition
    pub fn is_unresolved(&self) -> bool {
        matches!(self, RouterError::UnresolvedRoute { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_error_messages() {
        let error = RouterError::NoRoutes;
        assert_eq!(error.to_string(), "No routes configured");

        let error = RouterError::RouteNotFound("Settings".to_string());
        assert_eq!(error.to_string(), "Route 'Settings' not found");

        let error = RouterError::UnresolvedRoute {
            location: "/unknown".to_string(),
        };
        assert_eq!(error.to_string(), "No route matches '/unknown'");
        assert!(error.is_unresolved());

        let error = RouterError::ViewMissing {
            component: "LoginView".to_string(),
        };
        assert_eq!(error.to_string(), "View 'LoginView' is not registered");
        assert!(!error.is_unresolved());
    }
}
