//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::{debug, warn};

/// Ensure the directory holding `file` exists, creating it when missing.
pub async fn ensure_parent_dir(file: impl AsRef<Path>) -> anyhow::Result<()> {
    let file = file.as_ref();
    let Some(dir) = file.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };
    if tokio::fs::metadata(dir).await.is_ok() {
        debug!(dir = %dir.display(), "data directory present");
        return Ok(());
    }
    warn!(dir = %dir.display(), "data directory not found; creating it");
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    Ok(())
}
