//! Process startup wiring.

use anyhow::Context;

use zonebook_infra::{CatalogConfig, FsContentStore};

use crate::catalog::Catalog;

/// Load configuration from the environment, start tracing and build an empty
/// catalog over the filesystem.
pub fn bootstrap() -> anyhow::Result<Catalog<FsContentStore>> {
    let config = CatalogConfig::from_env().context("failed to load catalog configuration")?;
    zonebook_observability::init_with_filter(config.log_filter.as_deref());
    let catalog = Catalog::from_config(&config);
    tracing::info!(content_root = %catalog.store().root().display(), "catalog starting");
    Ok(catalog)
}
