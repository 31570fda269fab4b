//! Route table lint command

use crate::config::CliConfigLoader;
use anyhow::{anyhow, Result};
use tracing::info;

/// Report duplicate paths, duplicate names and a missing default route
pub async fn check_command(config_loader: CliConfigLoader) -> Result<()> {
    info!("Checking route table");

    let config = config_loader.load().await?;
    let table = config.table();
    let issues = table.check(config.settings.match_options());

    if issues.is_empty() {
        println!(
            "✅ {} route(s) from {}, no issues found",
            table.len(),
            config.source
        );
        return Ok(());
    }

    println!("🔍 Route table from {}\n", config.source);
    for issue in &issues {
        println!("   ⚠️  {}", issue);
    }

    Err(anyhow!("{} issue(s) found in route table", issues.len()))
}
