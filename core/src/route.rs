//! Route definitions and utilities
//!
//! This module defines the record shape of a single route table entry
//! together with the identifiers it carries.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// Unique identifier for a route, used for programmatic navigation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteName(pub String);

impl RouteName {
    /// Create a new route name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouteName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for RouteName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for RouteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RouteName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Opaque reference to a view component, owned outside the router
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewKey(pub String);

impl ViewKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ViewKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for ViewKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for ViewKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ViewKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A single entry of the route table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    /// URL pattern this route answers to
    pub path: String,
    /// Unique name for programmatic navigation
    pub name: RouteName,
    /// View rendered when this route is active
    pub component: ViewKey,
    /// Optional description of what this route displays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Additional metadata for the route
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl RouteDefinition {
    /// Create a new route definition
    pub fn new(
        path: impl Into<String>,
        name: impl Into<RouteName>,
        component: impl Into<ViewKey>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component: component.into(),
            description: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Set the description for this route
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add metadata to this route
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Whether this route is the default (home) route
    pub fn is_home(&self) -> bool {
        self.path == "/"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_name_traits() {
        let name = RouteName::from("Login");

        assert_eq!(format!("{}", name), "Login");

        let s: &str = name.as_ref();
        assert_eq!(s, "Login");

        let s: &str = name.borrow();
        assert_eq!(s, "Login");
    }

    #[test]
    fn test_route_definition_builder() {
        let route = RouteDefinition::new("/login", "Login", "LoginView")
            .with_description("Sign-in form")
            .with_metadata("title", "Sign in");

        assert_eq!(route.path, "/login");
        assert_eq!(route.name.as_str(), "Login");
        assert_eq!(route.component.as_str(), "LoginView");
        assert_eq!(route.description.as_deref(), Some("Sign-in form"));
        assert_eq!(route.metadata.get("title").map(String::as_str), Some("Sign in"));
        assert!(!route.is_home());
        assert!(RouteDefinition::new("/", "QuestionPage", "QuestionView").is_home());
    }

    #[test]
    fn test_route_definition_json_shape() {
        let route: RouteDefinition =
            serde_json::from_str(r#"{"path": "/login", "name": "Login", "component": "LoginView"}"#)
                .unwrap();
        assert_eq!(route, RouteDefinition::new("/login", "Login", "LoginView"));

        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"path": "/login", "name": "Login", "component": "LoginView"})
        );
    }
}
