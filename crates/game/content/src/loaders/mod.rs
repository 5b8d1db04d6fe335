//! Content loaders for reading catalogs from RON files.
//!
//! Deployments can override any built-in catalog by shipping a RON file
//! with the same shape as the catalog's definition list. Loaders return
//! plain definition vectors; callers wrap them in the catalog types.

mod catalogs;

pub use catalogs::{EnemyLoader, ItemLoader, RaceLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
