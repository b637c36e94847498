//! Bounded breadth-first search over the 8-connected grid.
//!
//! The search only ever answers "which way is the first step?". Each frontier
//! node carries the direction taken out of the origin, so reaching the target
//! yields that root direction directly, without rebuilding the path.

use std::collections::{HashSet, VecDeque};

use game_core::spatial::{can_cut_corner, is_adjacent, is_walkable, quantize_direction};
use game_core::{AiConfig, Direction, Entity, EntityId, MapOracle, Position};

/// Bounded BFS pathfinder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pathfinder {
    max_nodes: usize,
}

impl Pathfinder {
    /// Creates a pathfinder expanding at most `max_nodes` nodes per query.
    pub fn new(max_nodes: usize) -> Self {
        Self { max_nodes }
    }

    pub fn from_config(config: &AiConfig) -> Self {
        Self::new(config.max_search_nodes)
    }

    /// First step from `start` toward `target`.
    ///
    /// # Arguments
    ///
    /// * `map` - Terrain snapshot
    /// * `entities` - Every entity that may block a tile
    /// * `mover` - The entity that moves; never blocks itself
    /// * `ignore` - Entities treated as absent for this query
    ///
    /// # Returns
    ///
    /// `None` when `start == target`, when the target is unreachable, or when
    /// the node budget runs out before reaching it. The target tile is
    /// enterable even if occupied. Ties between equally short routes go to the
    /// route whose first step comes earlier in [`Direction::ALL`].
    pub fn find_step<'e, M, I>(
        &self,
        start: Position,
        target: Position,
        map: &M,
        entities: I,
        mover: EntityId,
        ignore: &[EntityId],
    ) -> Option<Direction>
    where
        M: MapOracle + ?Sized,
        I: IntoIterator<Item = &'e Entity>,
    {
        if start == target || !is_walkable(map, target) {
            return None;
        }

        // Single-step short-circuit
        if is_adjacent(start, target) {
            let direction = quantize_direction(start, target);
            if can_cut_corner(start, direction, map) {
                return Some(direction);
            }
        }

        // Search state grows with the nodes touched, not with the map.
        let blocked: HashSet<Position> = entities
            .into_iter()
            .filter(|entity| entity.alive && entity.id != mover && !ignore.contains(&entity.id))
            .map(|entity| entity.position)
            .collect();

        let mut visited = HashSet::new();
        visited.insert(start);

        let mut frontier: VecDeque<(Position, Option<Direction>)> = VecDeque::new();
        frontier.push_back((start, None));
        let mut expanded = 0;

        while let Some((position, root)) = frontier.pop_front() {
            if expanded == self.max_nodes {
                tracing::trace!(
                    "Pathfinder: budget of {} nodes exhausted ({} -> {})",
                    self.max_nodes,
                    start,
                    target
                );
                return None;
            }
            expanded += 1;

            for direction in Direction::ALL {
                let next = position.step(direction);
                if visited.contains(&next)
                    || !is_walkable(map, next)
                    || !can_cut_corner(position, direction, map)
                {
                    continue;
                }

                let first = root.unwrap_or(direction);
                if next == target {
                    tracing::trace!(
                        "Pathfinder: {} -> {} via {:?} after {} nodes",
                        start,
                        target,
                        first,
                        expanded
                    );
                    return Some(first);
                }
                if blocked.contains(&next) {
                    continue;
                }

                visited.insert(next);
                frontier.push_back((next, Some(first)));
            }
        }

        None
    }
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::new(AiConfig::DEFAULT_MAX_SEARCH_NODES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CombatStats, MapDimensions, StaticTile, TerrainGrid, TerrainKind};

    fn blocker(id: u32, x: i32, y: i32) -> Entity {
        Entity::new(EntityId(id), Position::new(x, y), CombatStats::full(10, 1, 1, 1))
    }

    #[test]
    fn same_tile_has_no_step() {
        let grid = TerrainGrid::from_rows(&["...", "...", "..."]).unwrap();
        let here = Position::new(1, 1);
        let none: [Entity; 0] = [];
        assert_eq!(
            Pathfinder::default().find_step(here, here, &grid, &none, EntityId(1), &[]),
            None
        );
    }

    #[test]
    fn routes_around_a_blocking_entity() {
        // Corridor two tiles wide; the direct row is blocked.
        let grid = TerrainGrid::from_rows(&["#####", "#...#", "#...#", "#####"]).unwrap();
        let roster = [blocker(2, 2, 1)];
        let step = Pathfinder::default().find_step(
            Position::new(1, 1),
            Position::new(3, 1),
            &grid,
            &roster,
            EntityId(1),
            &[],
        );
        assert_eq!(step, Some(Direction::DownRight));
    }

    #[test]
    fn ignored_entities_do_not_block() {
        let grid = TerrainGrid::from_rows(&["#####", "#...#", "#####"]).unwrap();
        let roster = [blocker(2, 2, 1)];
        let finder = Pathfinder::default();
        let (start, target) = (Position::new(1, 1), Position::new(3, 1));

        assert_eq!(finder.find_step(start, target, &grid, &roster, EntityId(1), &[]), None);
        assert_eq!(
            finder.find_step(start, target, &grid, &roster, EntityId(1), &[EntityId(2)]),
            Some(Direction::Right)
        );
    }

    #[test]
    fn dead_entities_do_not_block() {
        let grid = TerrainGrid::from_rows(&["#####", "#...#", "#####"]).unwrap();
        let mut corpse = blocker(2, 2, 1);
        corpse.alive = false;
        let roster = [corpse];
        let step = Pathfinder::default().find_step(
            Position::new(1, 1),
            Position::new(3, 1),
            &grid,
            &roster,
            EntityId(1),
            &[],
        );
        assert_eq!(step, Some(Direction::Right));
    }

    #[test]
    fn budget_exhaustion_reads_as_unreachable() {
        let grid = TerrainGrid::from_rows(&["..........", ".........."]).unwrap();
        let none: [Entity; 0] = [];
        let (start, target) = (Position::new(0, 0), Position::new(9, 0));

        assert_eq!(
            Pathfinder::new(2).find_step(start, target, &grid, &none, EntityId(1), &[]),
            None
        );
        assert_eq!(
            Pathfinder::new(400).find_step(start, target, &grid, &none, EntityId(1), &[]),
            Some(Direction::Right)
        );
    }

    #[test]
    fn unwalkable_target_is_unreachable() {
        let grid = TerrainGrid::from_rows(&["..#"]).unwrap();
        let none: [Entity; 0] = [];
        let step = Pathfinder::default().find_step(
            Position::new(0, 0),
            Position::new(2, 0),
            &grid,
            &none,
            EntityId(1),
            &[],
        );
        assert_eq!(step, None);
    }

    /// Open ground far larger than any grid that could be materialized.
    struct Boundless;

    impl MapOracle for Boundless {
        fn dimensions(&self) -> MapDimensions {
            MapDimensions::new(u32::MAX / 2, u32::MAX / 2)
        }

        fn tile(&self, position: Position) -> Option<StaticTile> {
            self.contains(position).then_some(StaticTile::new(TerrainKind::Ground))
        }
    }

    #[test]
    fn search_cost_follows_the_budget_not_the_map() {
        let none: [Entity; 0] = [];
        let start = Position::new(1_000, 1_000);
        let finder = Pathfinder::default();
        let step_to = |target| finder.find_step(start, target, &Boundless, &none, EntityId(1), &[]);

        assert_eq!(step_to(Position::new(1_006, 1_000)), Some(Direction::Right));
        assert_eq!(step_to(Position::new(900_000, 1_000)), None);
    }
}
