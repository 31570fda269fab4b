//! Interactive route browser built on iocraft

use crate::interactive::integration::{PageRegistry, RouterHandle};
use anyhow::Result;
use iocraft::prelude::*;
use std::sync::Arc;
use tracing::warn;

/// Properties for the root application component
#[derive(Default, Props)]
pub struct QuizAppProps {
    pub handle: Option<RouterHandle>,
    pub pages: Option<Arc<PageRegistry>>,
}

/// Run the interactive browser until the user quits
pub async fn run_interactive(handle: RouterHandle, pages: PageRegistry) -> Result<()> {
    let pages = Arc::new(pages);

    tokio::task::spawn_blocking(move || {
        smol::block_on(async move {
            element!(QuizApp(handle: Some(handle), pages: Some(pages)))
                .render_loop()
                .await
        })
    })
    .await??;

    Ok(())
}

/// Move a wrapping selection cursor by one step
fn step_selection(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

/// Root component: the active page, the location bar and the route list
#[component]
fn QuizApp(mut hooks: Hooks, props: &QuizAppProps) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let selected = hooks.use_state(|| 0usize);
    let revision = hooks.use_state(|| 0u64);
    let should_exit = hooks.use_state(|| false);

    let (handle, pages) = match (props.handle.clone(), props.pages.clone()) {
        (Some(handle), Some(pages)) => (handle, pages),
        _ => {
            return element! {
                View(padding: 1) {
                    Text(content: "Router not initialized", color: Color::Red)
                }
            };
        }
    };

    let routes: Vec<_> = handle.table().iter().cloned().collect();

    hooks.use_terminal_events({
        let handle = handle.clone();
        let names: Vec<_> = routes.iter().map(|route| route.name.clone()).collect();
        let mut selected = selected;
        let mut revision = revision;
        let mut should_exit = should_exit;
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                match code {
                    KeyCode::Up => selected.set(step_selection(selected.get(), names.len(), false)),
                    KeyCode::Down => selected.set(step_selection(selected.get(), names.len(), true)),
                    KeyCode::Enter => {
                        if let Some(name) = names.get(selected.get()) {
                            if let Err(e) = handle.navigate(name.as_str()) {
                                warn!(route = %name, error = %e, "Navigation failed");
                            }
                            revision.set(revision.get() + 1);
                        }
                    }
                    KeyCode::Backspace | KeyCode::Left => {
                        if handle.back() {
                            revision.set(revision.get() + 1);
                        }
                    }
                    KeyCode::Right => {
                        if handle.forward() {
                            revision.set(revision.get() + 1);
                        }
                    }
                    KeyCode::Esc | KeyCode::Char('q') => should_exit.set(true),
                    _ => {}
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let page = handle.render(&pages);
    let (location, href) = handle.location();
    let current = handle.current_route().map(|route| route.name);
    let cursor = selected.get();
    let arrows = format!(
        "{} {}",
        if handle.can_go_back() { "◀" } else { "◁" },
        if handle.can_go_forward() { "▶" } else { "▷" }
    );

    element! {
        View(
            flex_direction: FlexDirection::Column,
            height: 100pct,
            padding: 1,
        ) {
            View(flex_grow: 1.0, flex_direction: FlexDirection::Column) {
                #(page)
            }

            View(margin_top: 1) {
                Text(
                    content: format!("{} 📍 {}  ({})", arrows, location, href),
                    color: Color::Cyan,
                )
            }

            View(flex_direction: FlexDirection::Column, margin_top: 1) {
                #(routes.iter().enumerate().map(|(index, route)| {
                    let is_selected = index == cursor;
                    let is_active = current.as_ref() == Some(&route.name);
                    let prefix = if is_selected { "► " } else { "  " };
                    let marker = if is_active { " •" } else { "" };

                    element! {
                        Text(
                            key: format!("route-{}", route.name),
                            content: format!("{}{:<16} {}{}", prefix, route.name, route.path, marker),
                            color: if is_selected { Color::Yellow } else { Color::White },
                            weight: if is_active { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }).collect::<Vec<_>>())
            }

            View(margin_top: 1) {
                Text(
                    content: "↑/↓ select · Enter navigate · ←/Backspace back · → forward · q quit",
                    color: Color::Grey,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps_both_ways() {
        assert_eq!(step_selection(0, 2, true), 1);
        assert_eq!(step_selection(1, 2, true), 0);
        assert_eq!(step_selection(0, 2, false), 1);
        assert_eq!(step_selection(1, 2, false), 0);
        assert_eq!(step_selection(0, 0, true), 0);
    }
}
