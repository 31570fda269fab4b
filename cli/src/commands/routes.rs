//! Route table listing command

use crate::config::CliConfigLoader;
use anyhow::{Context, Result};
use tracing::info;

/// Show the route table in declaration order
pub async fn routes_command(config_loader: CliConfigLoader, json: bool) -> Result<()> {
    info!("Listing routes");

    let config = config_loader.load().await?;
    let router = config.build_router()?;

    if json {
        let json = router
            .table()
            .to_json()
            .context("Failed to serialize route table")?;
        println!("{}", json);
        return Ok(());
    }

    let history = router.history();
    println!(
        "📍 Routes ({} history, base {}, from {})\n",
        history.mode(),
        history.base(),
        config.source
    );

    for (index, route) in router.table().iter().enumerate() {
        let href = history.href(&route.path);
        let marker = if route.is_home() { " (default)" } else { "" };
        println!(
            "{:>3}. {:<16} {:<12} → {:<14} href {}{}",
            index + 1,
            route.name,
            route.path,
            route.component,
            href,
            marker
        );
        if let Some(description) = &route.description {
            println!("     {}", description);
        }
    }

    Ok(())
}
