//! Interactive mode command

use crate::config::CliConfigLoader;
use crate::interactive::app::run_interactive;
use crate::interactive::integration::RouterHandle;
use crate::interactive::pages::quiz_pages;
use anyhow::Result;
use tracing::{debug, warn};

/// Start interactive mode
pub async fn interactive_command(config_loader: CliConfigLoader, url: Option<String>) -> Result<()> {
    let config = config_loader.load().await?;
    debug!(source = %config.source, "Using configuration");

    let router = config.build_router()?;
    debug!(mode = %router.history().mode(), routes = router.table().len(), "Router ready");

    let pages = quiz_pages();
    let handle = RouterHandle::new(router);

    // An unmatched start URL is rendered as the not-found page
    let url = url.unwrap_or_else(|| "/".to_string());
    if let Err(e) = handle.mount(&url, &pages) {
        warn!(url = %url, error = %e, "Start URL did not mount");
    }

    run_interactive(handle, pages).await
}
