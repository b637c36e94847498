//! Traits describing read-only world data.
//!
//! Oracles expose static terrain and the type-effectiveness table. The [`Env`]
//! aggregate bundles them so the decision engine can reach both without
//! coupling to concrete implementations.
mod error;
mod map;
mod rng;
mod types;

pub use error::OracleError;
pub use map::{MapDimensions, MapOracle, StaticTile, TerrainGrid, TerrainKind};
pub use rng::{ALLY_DECISION_CONTEXT, ally_rng, compute_seed};
pub use types::{TypeChart, TypeChartOracle};

/// Aggregates the read-only oracles consulted during a party turn.
#[derive(Debug)]
pub struct Env<'a, M, T>
where
    M: MapOracle + ?Sized,
    T: TypeChartOracle + ?Sized,
{
    map: &'a M,
    types: &'a T,
}

pub type GameEnv<'a> = Env<'a, dyn MapOracle + 'a, dyn TypeChartOracle + 'a>;

impl<M, T> Clone for Env<'_, M, T>
where
    M: MapOracle + ?Sized,
    T: TypeChartOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, T> Copy for Env<'_, M, T>
where
    M: MapOracle + ?Sized,
    T: TypeChartOracle + ?Sized,
{
}

impl<'a, M, T> Env<'a, M, T>
where
    M: MapOracle + ?Sized,
    T: TypeChartOracle + ?Sized,
{
    pub fn new(map: &'a M, types: &'a T) -> Self {
        Self { map, types }
    }

    pub fn map(&self) -> &'a M {
        self.map
    }

    pub fn types(&self) -> &'a T {
        self.types
    }
}

impl<'a, M, T> Env<'a, M, T>
where
    M: MapOracle + 'a,
    T: TypeChartOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn into_game_env(self) -> GameEnv<'a> {
        let map: &'a dyn MapOracle = self.map;
        let types: &'a dyn TypeChartOracle = self.types;
        Env::new(map, types)
    }
}
