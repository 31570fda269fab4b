//! Navigation simulation command

use crate::config::CliConfigLoader;
use anyhow::{anyhow, Result};
use quiz_nav_core::{Router, RouterError, ViewRegistry};
use tracing::info;

/// Mount the router at `from`, then apply each target in order.
///
/// `back` and `forward` move through history; anything else is a route
/// name or a path.
pub async fn navigate_command(
    config_loader: CliConfigLoader,
    from: Option<String>,
    targets: Vec<String>,
) -> Result<()> {
    info!(steps = targets.len(), "Simulating navigation");

    let config = config_loader.load().await?;
    let mut router = config.build_router()?;

    // Each route renders as its own view key
    let views: ViewRegistry<String> = router
        .table()
        .iter()
        .map(|route| (route.component.clone(), route.component.to_string()))
        .collect();

    let from = from.unwrap_or_else(|| "/".to_string());
    let mounted = match router.mount(&from, &views) {
        Ok(mounted) => Ok(mounted.view.clone()),
        Err(e) if e.is_unresolved() => Err(e),
        Err(e) => return Err(e.into()),
    };
    print_step(&router, &format!("mount {}", from), mounted);

    let mut failures = 0;
    for target in &targets {
        let outcome = match target.as_str() {
            "back" => history_move(router.back(), "no earlier history entry"),
            "forward" => history_move(router.forward(), "no later history entry"),
            _ => router
                .navigate(target.as_str())
                .map(|_| ())
                .map_err(|e| e.to_string()),
        };

        match outcome {
            Ok(()) => {
                let view = router
                    .current_view(&views)
                    .map(|mounted| mounted.view.clone());
                print_step(&router, target, view);
            }
            Err(e) => {
                println!("   {:<16} ✗ {}", target, e);
                failures += 1;
            }
        }
    }

    let entries: Vec<String> = router
        .history()
        .entries()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("\n🧭 History: {}", entries.join(" → "));

    if failures > 0 {
        return Err(anyhow!("{} navigation step(s) failed", failures));
    }

    Ok(())
}

fn history_move(moved: bool, reason: &str) -> Result<(), String> {
    if moved {
        Ok(())
    } else {
        Err(reason.to_string())
    }
}

fn print_step(router: &Router, step: &str, view: Result<String, RouterError>) {
    let location = router.location();
    let href = router.history().href(&location.full_path());
    match view {
        Ok(view) => println!("   {:<16} → {:<14} view {} (href {})", step, location, view, href),
        Err(e) => println!("   {:<16} → {:<14} {} (href {})", step, location, e, href),
    }
}
