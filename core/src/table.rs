//! The route table
//!
//! An ordered, immutable sequence of [`RouteDefinition`]s. Lookups scan in
//! declaration order and the first match wins; construction never rejects
//! a table, misconfiguration is reported by [`RouteTable::check`] instead.

use crate::error::RouterResult;
use crate::location::{Location, MatchOptions};
use crate::route::{RouteDefinition, RouteName};
use std::collections::HashMap;
use std::fmt;

/// Latent misconfiguration found in a route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIssue {
    /// The table has no entries
    Empty,
    /// Two entries answer to the same path; `shadowed` is never reachable
    DuplicatePath {
        path: String,
        first: RouteName,
        shadowed: RouteName,
    },
    DuplicateName { name: RouteName },
    /// No entry has path `/`
    MissingHome,
    MultipleHomes { names: Vec<RouteName> },
    /// Path does not start with `/` and can never match
    RelativePath { name: RouteName, path: String },
}

impl fmt::Display for TableIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableIssue::Empty => write!(f, "route table is empty"),
            TableIssue::DuplicatePath {
                path,
                first,
                shadowed,
            } => write!(
                f,
                "path '{}' is declared by '{}' and '{}'; '{}' is unreachable",
                path, first, shadowed, shadowed
            ),
            TableIssue::DuplicateName { name } => {
                write!(f, "route name '{}' is declared more than once", name)
            }
            TableIssue::MissingHome => write!(f, "no route is declared for '/'"),
            TableIssue::MultipleHomes { names } => {
                let names: Vec<&str> = names.iter().map(RouteName::as_str).collect();
                write!(f, "'/' is declared by several routes: {}", names.join(", "))
            }
            TableIssue::RelativePath { name, path } => {
                write!(f, "route '{}' has relative path '{}'", name, path)
            }
        }
    }
}

/// Ordered, immutable route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
    /// Route paths in the same encoding as parsed locations
    patterns: Vec<String>,
}

impl RouteTable {
    /// Create a table from routes in declaration order
    pub fn new(routes: Vec<RouteDefinition>) -> Self {
        let patterns = routes
            .iter()
            .map(|route| {
                if route.path.starts_with('/') {
                    Location::parse(&route.path)
                        .map(|location| location.path().to_string())
                        .unwrap_or_else(|_| route.path.clone())
                } else {
                    route.path.clone()
                }
            })
            .collect();

        Self { routes, patterns }
    }

    /// Deserialize a table from its JSON declaration
    pub fn from_json(json: &str) -> RouterResult<Self> {
        let routes: Vec<RouteDefinition> = serde_json::from_str(json)?;
        Ok(Self::new(routes))
    }

    /// Serialize the table back to its JSON declaration
    pub fn to_json(&self) -> RouterResult<String> {
        Ok(serde_json::to_string_pretty(&self.routes)?)
    }

    /// Find the first route whose path matches the location
    pub fn resolve(&self, location: &Location, options: MatchOptions) -> Option<&RouteDefinition> {
        self.position(location, options).map(|index| &self.routes[index])
    }

    /// Declaration index of the first route matching the location
    pub fn position(&self, location: &Location, options: MatchOptions) -> Option<usize> {
        self.patterns
            .iter()
            .position(|pattern| options.matches(pattern, location.path()))
    }

    /// Find the first route with the given name
    pub fn find_by_name(&self, name: &str) -> Option<&RouteDefinition> {
        self.position_by_name(name).map(|index| &self.routes[index])
    }

    /// Declaration index of the first route with the given name
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.routes.iter().position(|route| route.name.as_str() == name)
    }

    /// Route at a declaration index
    pub fn get(&self, index: usize) -> Option<&RouteDefinition> {
        self.routes.get(index)
    }

    /// The default route, i.e. the first one declared for `/`
    pub fn home(&self) -> Option<&RouteDefinition> {
        self.routes.iter().find(|route| route.is_home())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteDefinition> {
        self.routes.iter()
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Report misconfiguration without failing.
    ///
    /// Issues are listed in declaration order.
    pub fn check(&self, options: MatchOptions) -> Vec<TableIssue> {
        if self.routes.is_empty() {
            return vec![TableIssue::Empty];
        }

        let mut issues = Vec::new();
        let mut seen_paths: HashMap<String, &RouteName> = HashMap::new();
        let mut seen_names: HashMap<&str, usize> = HashMap::new();

        for (route, pattern) in self.routes.iter().zip(&self.patterns) {
            if !route.path.starts_with('/') {
                issues.push(TableIssue::RelativePath {
                    name: route.name.clone(),
                    path: route.path.clone(),
                });
            }

            let key = options.normalize(pattern).into_owned();
            if let Some(first) = seen_paths.get(&key) {
                issues.push(TableIssue::DuplicatePath {
                    path: route.path.clone(),
                    first: (*first).clone(),
                    shadowed: route.name.clone(),
                });
            } else {
                seen_paths.insert(key, &route.name);
            }

            let count = seen_names.entry(route.name.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                issues.push(TableIssue::DuplicateName {
                    name: route.name.clone(),
                });
            }
        }

        let homes: Vec<RouteName> = self
            .routes
            .iter()
            .filter(|route| route.is_home())
            .map(|route| route.name.clone())
            .collect();
        match homes.len() {
            0 => issues.push(TableIssue::MissingHome),
            1 => {}
            _ => issues.push(TableIssue::MultipleHomes { names: homes }),
        }

        issues
    }
}

impl FromIterator<RouteDefinition> for RouteTable {
    fn from_iter<I: IntoIterator<Item = RouteDefinition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteDefinition;
    type IntoIter = std::slice::Iter<'a, RouteDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz_table() -> RouteTable {
        RouteTable::new(vec![
            RouteDefinition::new("/login", "Login", "LoginView"),
            RouteDefinition::new("/", "QuestionPage", "QuestionView"),
        ])
    }

    fn resolve_component(table: &RouteTable, input: &str) -> Option<String> {
        let location = Location::parse(input).unwrap();
        table
            .resolve(&location, MatchOptions::default())
            .map(|route| route.component.to_string())
    }

    #[test]
    fn test_every_declared_path_resolves_to_its_component() {
        let table = quiz_table();
        for route in &table {
            let location = Location::parse(&route.path).unwrap();
            let matched = table.resolve(&location, MatchOptions::default()).unwrap();
            assert_eq!(matched.component, route.component);
        }
    }

    #[test]
    fn test_unknown_path_is_unresolved() {
        assert_eq!(resolve_component(&quiz_table(), "/unknown"), None);
    }

    #[test]
    fn test_query_and_hash_do_not_affect_matching() {
        let table = quiz_table();
        assert_eq!(
            resolve_component(&table, "/login?next=%2F#form").as_deref(),
            Some("LoginView")
        );
        assert_eq!(resolve_component(&table, "/?page=2").as_deref(), Some("QuestionView"));
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new(vec![
            RouteDefinition::new("/login", "Login", "LoginView"),
            RouteDefinition::new("/login", "LegacyLogin", "LegacyLoginView"),
            RouteDefinition::new("/", "QuestionPage", "QuestionView"),
        ]);

        for _ in 0..3 {
            assert_eq!(resolve_component(&table, "/login").as_deref(), Some("LoginView"));
        }
    }

    #[test]
    fn test_lookup_helpers() {
        let table = quiz_table();
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.find_by_name("Login").map(|r| r.path.as_str()), Some("/login"));
        assert!(table.find_by_name("login").is_none());
        assert_eq!(table.home().map(|r| r.name.as_str()), Some("QuestionPage"));
    }

    #[test]
    fn test_json_declaration() {
        let table = RouteTable::from_json(
            r#"[
                {"path": "/login", "name": "Login", "component": "LoginView"},
                {"path": "/", "name": "QuestionPage", "component": "QuestionView"}
            ]"#,
        )
        .unwrap();
        assert_eq!(table, quiz_table());

        let again = RouteTable::from_json(&table.to_json().unwrap()).unwrap();
        assert_eq!(again, table);

        assert!(RouteTable::from_json("{\"path\": 1}").is_err());
    }

    #[test]
    fn test_check_clean_table() {
        assert!(quiz_table().check(MatchOptions::default()).is_empty());
    }

    #[test]
    fn test_check_reports_misconfiguration() {
        let table = RouteTable::new(vec![
            RouteDefinition::new("/login", "Login", "LoginView"),
            RouteDefinition::new("/Login/", "Login", "OtherView"),
            RouteDefinition::new("about", "About", "AboutView"),
        ]);

        let issues = table.check(MatchOptions::default());
        assert_eq!(
            issues,
            vec![
                TableIssue::DuplicatePath {
                    path: "/Login/".to_string(),
                    first: RouteName::from("Login"),
                    shadowed: RouteName::from("Login"),
                },
                TableIssue::DuplicateName {
                    name: RouteName::from("Login"),
                },
                TableIssue::RelativePath {
                    name: RouteName::from("About"),
                    path: "about".to_string(),
                },
                TableIssue::MissingHome,
            ]
        );

        // Under strict, case-sensitive matching the two login paths differ
        let strict = MatchOptions::default().strict(true).sensitive(true);
        assert!(!table
            .check(strict)
            .iter()
            .any(|issue| matches!(issue, TableIssue::DuplicatePath { .. })));
    }

    #[test]
    fn test_check_empty_and_multiple_homes() {
        assert_eq!(
            RouteTable::new(Vec::new()).check(MatchOptions::default()),
            vec![TableIssue::Empty]
        );

        let table = RouteTable::new(vec![
            RouteDefinition::new("/", "Home", "HomeView"),
            RouteDefinition::new("/", "QuestionPage", "QuestionView"),
        ]);
        let issues = table.check(MatchOptions::default());
        assert!(issues.contains(&TableIssue::MultipleHomes {
            names: vec![RouteName::from("Home"), RouteName::from("QuestionPage")],
        }));
        assert!(issues[0].to_string().contains("unreachable"));
    }

    #[test]
    fn test_relative_path_never_matches() {
        let table = RouteTable::new(vec![RouteDefinition::new("login", "Login", "LoginView")]);
        assert_eq!(resolve_component(&table, "/login"), None);
    }
}
