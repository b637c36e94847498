//! File-backed loaders for engine tunables and static floor data.
//!
//! Every loader offers `parse` for in-memory text and `load` for a path.

pub mod config;
pub mod map;
pub mod types;

pub use config::ConfigLoader;
pub use map::MapLoader;
pub use types::TypeChartLoader;

use std::path::Path;

/// Loader results carry `anyhow` context describing which file failed.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", path.display(), e))
}
