//! UI framework integration for the router
//!
//! This module bridges the core router with the iocraft component system:
//! pages are registered as renderers under their view keys and the router
//! is shared with event handlers through a [`RouterHandle`].

use iocraft::prelude::*;
use quiz_nav_core::{
    RouteDefinition, RouteName, RouteTable, Router, RouterError, RouterResult, ViewRegistry,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::warn;

/// Type alias for page render functions
pub type PageRenderer = Box<dyn Fn() -> AnyElement<'static> + Send + Sync>;

/// Page renderers keyed by the view keys used in the route table
pub type PageRegistry = ViewRegistry<PageRenderer>;

/// A shareable, UI-friendly handle to control the router
#[derive(Clone)]
pub struct RouterHandle(Arc<Mutex<Router>>);

impl RouterHandle {
    /// Create a new router handle
    pub fn new(router: Router) -> Self {
        Self(Arc::new(Mutex::new(router)))
    }

    fn lock(&self) -> MutexGuard<'_, Router> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sync the router with a start URL
    pub fn mount(&self, url: &str, pages: &PageRegistry) -> RouterResult<RouteName> {
        self.lock()
            .mount(url, pages)
            .map(|mounted| mounted.route.name.clone())
    }

    /// Navigate to a route name or path
    pub fn navigate(&self, target: &str) -> RouterResult<RouteName> {
        self.lock().navigate(target).map(|route| route.name.clone())
    }

    /// Go back to the previous route
    pub fn back(&self) -> bool {
        self.lock().back()
    }

    pub fn forward(&self) -> bool {
        self.lock().forward()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.lock().can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.lock().can_go_forward()
    }

    /// Current location and the link that points at it
    pub fn location(&self) -> (String, String) {
        let guard = self.lock();
        let location = guard.location().to_string();
        let href = guard.history().href(&location);
        (location, href)
    }

    /// Route matching the current location
    pub fn current_route(&self) -> Option<RouteDefinition> {
        self.lock().current().ok().cloned()
    }

    pub fn table(&self) -> Arc<RouteTable> {
        self.lock().shared_table()
    }

    /// Render the page for the current location
    pub fn render(&self, pages: &PageRegistry) -> AnyElement<'static> {
        match self.lock().current_view(pages) {
            Ok(mounted) => (mounted.view)(),
            Err(RouterError::UnresolvedRoute { location }) => {
                not_found_page(format!("Unknown route: {}", location))
            }
            Err(e) => {
                warn!(error = %e, "Failed to render current route");
                not_found_page(e.to_string())
            }
        }
    }
}

/// Default fallback: show route not found message
fn not_found_page(message: String) -> AnyElement<'static> {
    element! {
        View(
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            width: 100pct,
            padding: 2,
        ) {
            Text(
                content: "Route Not Found",
                weight: Weight::Bold,
                color: Color::Red
            )
            Text(content: message)
        }
    }
    .into()
}
