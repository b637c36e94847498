//! Map data loader.
//!
//! Loads pure terrain data from map RON files. Entity placement belongs to
//! the caller.

use std::path::Path;

use game_core::{MapDimensions, Position, TerrainGrid, TerrainKind};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Map data structure for RON files (terrain only).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    dimensions: (u32, u32),
    #[serde(default)]
    tiles: Vec<(i32, i32, TerrainKind)>, // (x, y, terrain)
}

/// Loader for terrain from RON files.
///
/// ```ron
/// (
///     dimensions: (5, 3),
///     tiles: [(2, 0, Wall), (2, 1, Wall)],
/// )
/// ```
///
/// Unlisted tiles are `Ground`.
pub struct MapLoader;

impl MapLoader {
    /// Load terrain from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing map data
    pub fn load(path: &Path) -> LoadResult<TerrainGrid> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load map {}: {}", path.display(), e))
    }

    /// Parse terrain from RON text.
    pub fn parse(content: &str) -> LoadResult<TerrainGrid> {
        let data: MapDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let dimensions = MapDimensions::new(data.dimensions.0, data.dimensions.1);
        let mut grid = TerrainGrid::new(dimensions);

        for (x, y, terrain) in data.tiles {
            grid.set(Position::new(x, y), terrain)
                .map_err(|e| anyhow::anyhow!("Invalid map tile: {}", e))?;
        }

        Ok(grid)
    }
}
