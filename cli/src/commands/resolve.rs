//! URL resolution command

use crate::config::CliConfigLoader;
use anyhow::{anyhow, Result};
use tracing::info;

/// Resolve browser URLs (or router paths) against the route table
pub async fn resolve_command(config_loader: CliConfigLoader, urls: Vec<String>) -> Result<()> {
    info!(count = urls.len(), "Resolving URLs");

    let config = config_loader.load().await?;
    let router = config.build_router()?;

    let mut unresolved = 0;
    for url in &urls {
        let location = match router.history().parse_url(url) {
            Ok(location) => location,
            Err(e) => {
                println!("❌ {} → {}", url, e);
                unresolved += 1;
                continue;
            }
        };

        match router.resolve(&location.full_path()) {
            Ok(route) => println!(
                "✅ {} → {} ({}) at {}",
                url, route.name, route.component, location
            ),
            Err(e) if e.is_unresolved() => {
                println!("❌ {} → unresolved ({})", url, location);
                unresolved += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if unresolved > 0 {
        return Err(anyhow!(
            "{} of {} URL(s) did not resolve",
            unresolved,
            urls.len()
        ));
    }

    Ok(())
}
