//! Data-driven content loaders.
//!
//! This crate reads the ally decision engine's tunables and static data from
//! RON/TOML files:
//! - AI configuration (data-driven via TOML)
//! - Type-effectiveness chart (data-driven via RON)
//! - Terrain layouts (data-driven via RON)
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, MapLoader, TypeChartLoader};
