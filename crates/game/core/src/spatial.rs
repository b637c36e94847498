//! Geometry and occupancy predicates over a terrain snapshot.
//!
//! All functions are pure. Out-of-bounds positions are never walkable, so a
//! caller can query any neighbor without checking bounds first.

use crate::env::MapOracle;
use crate::state::{Direction, Entity, EntityId, Position};

/// `max(|dx|, |dy|)`: the number of 8-connected steps between two tiles.
pub fn chebyshev_distance(a: Position, b: Position) -> u32 {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
}

/// `|dx| + |dy|`.
pub fn manhattan_distance(a: Position, b: Position) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// True when the two tiles touch, diagonals included.
pub fn is_adjacent(a: Position, b: Position) -> bool {
    chebyshev_distance(a, b) == 1
}

/// True only for in-bounds `Ground` tiles.
pub fn is_walkable<M>(map: &M, position: Position) -> bool
where
    M: MapOracle + ?Sized,
{
    map.tile(position).is_some_and(|tile| tile.is_walkable())
}

/// True if a living entity other than `excluding` stands on `position`.
pub fn is_occupied<'e, I>(position: Position, entities: I, excluding: EntityId) -> bool
where
    I: IntoIterator<Item = &'e Entity>,
{
    entities
        .into_iter()
        .any(|e| e.alive && e.id != excluding && e.position == position)
}

/// True if `mover` may step onto `position`.
pub fn can_enter<'e, M, I>(position: Position, map: &M, entities: I, mover: EntityId) -> bool
where
    M: MapOracle + ?Sized,
    I: IntoIterator<Item = &'e Entity>,
{
    is_walkable(map, position) && !is_occupied(position, entities, mover)
}

/// Diagonal steps need both orthogonal neighbors walkable; cardinals always pass.
pub fn can_cut_corner<M>(from: Position, direction: Direction, map: &M) -> bool
where
    M: MapOracle + ?Sized,
{
    if !direction.is_diagonal() {
        return true;
    }
    let (dx, dy) = direction.delta();
    is_walkable(map, from.offset(dx, 0)) && is_walkable(map, from.offset(0, dy))
}

/// Direction whose components are the signs of the displacement `to - from`.
///
/// No displacement maps to [`Direction::Down`].
pub fn quantize_direction(from: Position, to: Position) -> Direction {
    let dx = (to.x - from.x).signum();
    let dy = (to.y - from.y).signum();
    Direction::from_delta(dx, dy).unwrap_or(Direction::Down)
}
