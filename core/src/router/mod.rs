//! Router implementation for managing navigation state
//!
//! This module provides the core router functionality including
//! route resolution, mounting and navigation through a history backend.

mod builder;

pub use builder::{create_router, RouterBuilder};

use crate::error::{RouterError, RouterResult};
use crate::history::HistoryBackend;
use crate::location::{Location, MatchOptions};
use crate::route::{RouteDefinition, RouteName};
use crate::table::RouteTable;
use crate::view::ViewProvider;
use std::sync::Arc;
use tracing::{debug, warn};

/// Where a navigation request points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// A route by its unique name
    Name(RouteName),
    /// A router location such as `/login?next=%2F`
    Path(String),
}

impl NavigationTarget {
    /// Classify free-form input.
    ///
    /// Input starting with `/`, `?` or `#`, or containing `://`, is a path;
    /// anything else is a route name.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.starts_with(['/', '?', '#']) || input.contains("://") {
            NavigationTarget::Path(input.to_string())
        } else {
            NavigationTarget::Name(RouteName::from(input))
        }
    }
}

impl From<&str> for NavigationTarget {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<String> for NavigationTarget {
    fn from(input: String) -> Self {
        Self::parse(&input)
    }
}

impl From<RouteName> for NavigationTarget {
    fn from(name: RouteName) -> Self {
        NavigationTarget::Name(name)
    }
}

impl From<&RouteName> for NavigationTarget {
    fn from(name: &RouteName) -> Self {
        NavigationTarget::Name(name.clone())
    }
}

impl From<&Location> for NavigationTarget {
    fn from(location: &Location) -> Self {
        NavigationTarget::Path(location.full_path())
    }
}

/// The matched route together with its view
#[derive(Debug)]
pub struct Mounted<'r, 'v, V> {
    pub route: &'r RouteDefinition,
    pub view: &'v V,
}

/// Route table bound to a history backend
#[derive(Debug)]
pub struct Router {
    /// Immutable route table, shared with whoever inspects it
    table: Arc<RouteTable>,
    /// Navigation state
    history: Box<dyn HistoryBackend>,
    options: MatchOptions,
}

impl Router {
    /// Start building a router
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    pub(crate) fn from_parts(
        table: Arc<RouteTable>,
        history: Box<dyn HistoryBackend>,
        options: MatchOptions,
    ) -> Self {
        Self {
            table,
            history,
            options,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn shared_table(&self) -> Arc<RouteTable> {
        Arc::clone(&self.table)
    }

    pub fn history(&self) -> &dyn HistoryBackend {
        self.history.as_ref()
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Current router location
    pub fn location(&self) -> &Location {
        self.history.location()
    }

    /// Resolve a router location (or absolute URL) against the table
    pub fn resolve(&self, url: &str) -> RouterResult<&RouteDefinition> {
        let location = Location::parse(url)?;
        self.resolve_location(&location)
    }

    fn resolve_location(&self, location: &Location) -> RouterResult<&RouteDefinition> {
        self.table
            .resolve(location, self.options)
            .ok_or_else(|| unresolved(location))
    }

    /// Route matching the current location
    pub fn current(&self) -> RouterResult<&RouteDefinition> {
        self.resolve_location(self.history.location())
    }

    /// Route and view matching the current location
    pub fn current_view<'v, P: ViewProvider>(
        &self,
        views: &'v P,
    ) -> RouterResult<Mounted<'_, 'v, P::View>> {
        let route = self.current()?;
        let view = views
            .resolve(&route.component)
            .ok_or_else(|| RouterError::ViewMissing {
                component: route.component.to_string(),
            })?;

        Ok(Mounted { route, view })
    }

    /// Sync the router with the browser URL it was loaded at and return
    /// what should be rendered there.
    ///
    /// The history is moved to the URL even when nothing matches it.
    pub fn mount<'v, P: ViewProvider>(
        &mut self,
        url: &str,
        views: &'v P,
    ) -> RouterResult<Mounted<'_, 'v, P::View>> {
        let location = self.history.parse_url(url)?;
        debug!(url, location = %location, mode = %self.history.mode(), "Mounting router");
        self.history.replace(location);
        self.current_view(views)
    }

    /// Navigate to a route, adding a history entry.
    ///
    /// Unknown names fail with `RouteNotFound`, unmatched paths with
    /// `UnresolvedRoute`; in both cases the history is left untouched.
    ///
    /// Returns the route the new location resolves to, the same one
    /// [`Router::current`] reports afterwards. When several routes share a
    /// path that is the first of them, even if a later one was named.
    pub fn navigate(
        &mut self,
        target: impl Into<NavigationTarget>,
    ) -> RouterResult<&RouteDefinition> {
        let (location, index) = self.locate(&target.into())?;

        if *self.history.location() == location {
            debug!(location = %location, "Already at location");
        } else {
            debug!(from = %self.history.location(), to = %location, "Navigating");
            self.history.push(location);
        }

        Ok(&self.table.routes()[index])
    }

    /// Navigate to a route, overwriting the current history entry
    pub fn replace(
        &mut self,
        target: impl Into<NavigationTarget>,
    ) -> RouterResult<&RouteDefinition> {
        let (location, index) = self.locate(&target.into())?;

        debug!(from = %self.history.location(), to = %location, "Replacing location");
        self.history.replace(location);

        Ok(&self.table.routes()[index])
    }

    /// Move through history by `delta` entries
    pub fn go(&mut self, delta: isize) -> bool {
        let moved = self.history.go(delta);
        if moved {
            debug!(delta, location = %self.history.location(), "History moved");
        }
        moved
    }

    /// Go back to the previous entry
    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go(-1)
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go(1)
    }

    /// URL a link to `target` should point at
    pub fn href(&self, target: impl Into<NavigationTarget>) -> RouterResult<String> {
        let (location, _) = self.locate(&target.into())?;
        Ok(self.history.href(&location.full_path()))
    }

    /// Location a target refers to and the index of the route it resolves to
    fn locate(&self, target: &NavigationTarget) -> RouterResult<(Location, usize)> {
        let location = match target {
            NavigationTarget::Name(name) => {
                let route = self
                    .table
                    .find_by_name(name.as_str())
                    .ok_or_else(|| RouterError::RouteNotFound(name.to_string()))?;
                Location::parse(&route.path)?
            }
            NavigationTarget::Path(path) => Location::parse(path)?,
        };

        let index = self
            .table
            .position(&location, self.options)
            .ok_or_else(|| unresolved(&location))?;
        Ok((location, index))
    }
}

fn unresolved(location: &Location) -> RouterError {
    warn!(location = %location, "No route matches location");
    RouterError::UnresolvedRoute {
        location: location.full_path(),
    }
}
