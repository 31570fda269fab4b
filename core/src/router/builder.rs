//! Route table builder
//!
//! Turns an ordered sequence of route definitions and a history strategy
//! into a [`Router`]. Building is pure and repeatable.

use super::Router;
use crate::error::{RouterError, RouterResult};
use crate::history::{HistoryFactory, HistoryStrategy, DEFAULT_CAPACITY};
use crate::location::MatchOptions;
use crate::route::RouteDefinition;
use crate::table::RouteTable;
use std::sync::Arc;
use tracing::debug;

/// Builder for [`Router`]
#[derive(Debug, Clone)]
pub struct RouterBuilder {
    routes: Vec<RouteDefinition>,
    history: HistoryStrategy,
    options: MatchOptions,
    max_history: usize,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            history: HistoryStrategy::default(),
            options: MatchOptions::default(),
            max_history: DEFAULT_CAPACITY,
        }
    }

    /// Append routes in declaration order
    pub fn routes(mut self, routes: impl IntoIterator<Item = RouteDefinition>) -> Self {
        self.routes.extend(routes);
        self
    }

    /// Append a single route
    pub fn route(mut self, route: RouteDefinition) -> Self {
        self.routes.push(route);
        self
    }

    pub fn history(mut self, strategy: HistoryStrategy) -> Self {
        self.history = strategy;
        self
    }

    pub fn options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set maximum history size
    pub fn max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    /// Build with the configured history strategy
    pub fn build(self) -> RouterResult<Router> {
        let strategy = self.history.clone();
        self.build_with(&strategy)
    }

    /// Build with an arbitrary history factory.
    ///
    /// The table is not checked for duplicate paths or names; see
    /// [`RouteTable::check`].
    pub fn build_with<F: HistoryFactory + ?Sized>(self, factory: &F) -> RouterResult<Router> {
        if self.routes.is_empty() {
            return Err(RouterError::NoRoutes);
        }

        let table = Arc::new(RouteTable::new(self.routes));
        let history = factory.create(self.max_history);
        debug!(
            routes = table.len(),
            mode = %history.mode(),
            base = history.base(),
            "Router created"
        );

        Ok(Router::from_parts(table, history, self.options))
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a router from routes in declaration order and a history strategy
pub fn create_router(
    routes: impl IntoIterator<Item = RouteDefinition>,
    strategy: HistoryStrategy,
) -> RouterResult<Router> {
    RouterBuilder::new().routes(routes).history(strategy).build()
}
