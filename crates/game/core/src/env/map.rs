//! Terrain oracle and the in-memory grid that implements it.

use super::error::OracleError;
use crate::state::Position;

/// Static map oracle exposing immutable terrain.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;

    /// Tile at `position`, or `None` outside the map.
    fn tile(&self, position: Position) -> Option<StaticTile>;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Row-major index of an in-bounds position.
    pub fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Immutable descriptor for a tile in the static layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticTile {
    terrain: TerrainKind,
}

impl StaticTile {
    pub const fn new(terrain: TerrainKind) -> Self {
        Self { terrain }
    }

    pub fn terrain(self) -> TerrainKind {
        self.terrain
    }

    pub fn is_walkable(self) -> bool {
        self.terrain.is_walkable()
    }
}

/// Canonical terrain classes for static map tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    #[default]
    Ground,
    Wall,
    Water,
    Void,
}

impl TerrainKind {
    /// Only plain ground can be walked on.
    pub fn is_walkable(self) -> bool {
        matches!(self, TerrainKind::Ground)
    }

    /// ASCII glyph used by [`TerrainGrid::from_rows`].
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(TerrainKind::Ground),
            '#' => Some(TerrainKind::Wall),
            '~' => Some(TerrainKind::Water),
            ' ' => Some(TerrainKind::Void),
            _ => None,
        }
    }
}

/// Dense row-major terrain snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainGrid {
    dimensions: MapDimensions,
    tiles: Vec<TerrainKind>,
}

impl TerrainGrid {
    /// Grid of the given size filled with `Ground`.
    pub fn new(dimensions: MapDimensions) -> Self {
        Self::filled(dimensions, TerrainKind::Ground)
    }

    pub fn filled(dimensions: MapDimensions, terrain: TerrainKind) -> Self {
        Self {
            dimensions,
            tiles: vec![terrain; dimensions.area()],
        }
    }

    /// Parses ASCII rows (`.` ground, `#` wall, `~` water, space void).
    ///
    /// Every row must have the same width.
    pub fn from_rows(rows: &[&str]) -> Result<Self, OracleError> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut tiles = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(OracleError::RaggedRow {
                    row: y,
                    expected: width,
                    actual,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let terrain = TerrainKind::from_glyph(glyph).ok_or(OracleError::UnknownGlyph {
                    glyph,
                    position: Position::new(x as i32, y as i32),
                })?;
                tiles.push(terrain);
            }
        }

        Ok(Self {
            dimensions: MapDimensions::new(width as u32, rows.len() as u32),
            tiles,
        })
    }

    pub fn set(&mut self, position: Position, terrain: TerrainKind) -> Result<(), OracleError> {
        let index = self
            .dimensions
            .index(position)
            .ok_or(OracleError::PositionOutOfBounds(position))?;
        self.tiles[index] = terrain;
        Ok(())
    }

    pub fn terrain(&self, position: Position) -> Option<TerrainKind> {
        self.dimensions.index(position).map(|index| self.tiles[index])
    }
}

impl MapOracle for TerrainGrid {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        self.terrain(position).map(StaticTile::new)
    }
}
