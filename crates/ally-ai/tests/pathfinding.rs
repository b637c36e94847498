mod common;

use ally_ai::Pathfinder;
use game_core::spatial::{can_cut_corner, chebyshev_distance, is_walkable};
use game_core::{Direction, Entity, EntityId, Position};
use rand::Rng;

use common::{enemy, grid, open_floor, seeded};

const MOVER: EntityId = EntityId(1);

fn no_entities() -> std::iter::Empty<&'static Entity> {
    std::iter::empty()
}

#[test]
fn vertical_corridor_steps_straight_up() {
    let map = grid(&[
        "###########",
        "#####.#####",
        "#####.#####",
        "#####.#####",
        "#####.#####",
        "#####.#####",
        "#####.#####",
        "###########",
    ]);
    let start = Position::new(5, 5);
    let target = Position::new(5, 2);

    let step = Pathfinder::default().find_step(start, target, &map, no_entities(), MOVER, &[]);
    assert_eq!(step, Some(Direction::Up));
    assert_eq!(chebyshev_distance(start.step(Direction::Up), target), 2);
}

#[test]
fn walled_in_neighbor_is_found_without_searching() {
    let map = grid(&["#####", "##.##", "##.##", "#####"]);
    let start = Position::new(2, 2);
    let occupant = enemy(9, 2, 1);

    let step = Pathfinder::new(0).find_step(
        start,
        occupant.position,
        &map,
        [&occupant],
        MOVER,
        &[],
    );
    assert_eq!(step, Some(Direction::Up));
}

#[test]
fn adjacent_step_closes_distance_by_one() {
    let map = open_floor(9, 9);
    let pathfinder = Pathfinder::default();

    for sx in 0..9 {
        for sy in 0..9 {
            let start = Position::new(sx, sy);
            for target in [Position::new(0, 0), Position::new(8, 3), Position::new(4, 8)] {
                let distance = chebyshev_distance(start, target);
                let step = pathfinder.find_step(start, target, &map, no_entities(), MOVER, &[]);
                match step {
                    None => assert_eq!(distance, 0),
                    Some(direction) => assert_eq!(
                        chebyshev_distance(start.step(direction), target),
                        distance - 1,
                        "{start} -> {target}"
                    ),
                }
            }
        }
    }
}

#[test]
fn never_steps_onto_an_occupied_tile() {
    let map = open_floor(10, 10);
    let pathfinder = Pathfinder::default();
    let mut rng = seeded(11);

    for round in 0..50 {
        let blockers: Vec<Entity> = (0..12)
            .map(|i| enemy(100 + i, rng.gen_range(0..10), rng.gen_range(0..10)))
            .collect();
        let start = Position::new(rng.gen_range(0..10), rng.gen_range(0..10));
        let target = Position::new(rng.gen_range(0..10), rng.gen_range(0..10));

        let Some(direction) =
            pathfinder.find_step(start, target, &map, blockers.iter(), MOVER, &[])
        else {
            continue;
        };

        let next = start.step(direction);
        assert!(is_walkable(&map, next), "round {round}");
        if next != target {
            assert!(
                blockers.iter().all(|b| b.position != next),
                "round {round}: stepped onto {next}"
            );
        }
    }
}

#[test]
fn ignored_entity_is_stepped_through_only_as_target() {
    let map = grid(&["....."]);
    let start = Position::new(0, 0);
    let friend = enemy(5, 1, 0);

    let blocked = Pathfinder::default().find_step(
        start,
        Position::new(4, 0),
        &map,
        [&friend],
        MOVER,
        &[],
    );
    assert_eq!(blocked, None);

    let through = Pathfinder::default().find_step(
        start,
        Position::new(4, 0),
        &map,
        [&friend],
        MOVER,
        &[friend.id],
    );
    assert_eq!(through, Some(Direction::Right));
}

#[test]
fn diagonal_step_needs_both_orthogonals_open() {
    let map = grid(&["....", "..#.", "....", "...."]);
    let start = Position::new(1, 1);
    let target = Position::new(2, 2);

    assert!(!can_cut_corner(start, Direction::DownRight, &map));
    let step = Pathfinder::default().find_step(start, target, &map, no_entities(), MOVER, &[]);
    assert_eq!(step, Some(Direction::Down));
}

#[test]
fn diagonal_steps_are_always_corner_legal() {
    let map = grid(&[
        "..........",
        ".#..#.....",
        "....#..#..",
        "..#....#..",
        "......##..",
        ".#........",
    ]);
    let pathfinder = Pathfinder::default();
    let target = Position::new(9, 5);

    for sx in 0..10 {
        for sy in 0..6 {
            let start = Position::new(sx, sy);
            if !is_walkable(&map, start) {
                continue;
            }
            if let Some(direction) =
                pathfinder.find_step(start, target, &map, no_entities(), MOVER, &[])
            {
                assert!(can_cut_corner(start, direction, &map), "{start} {direction:?}");
            }
        }
    }
}

#[test]
fn equal_routes_prefer_the_earlier_first_step() {
    let map = open_floor(4, 3);
    let start = Position::new(0, 1);
    let target = Position::new(2, 0);

    // Right and UpRight both reach the target in two steps.
    let step = Pathfinder::default().find_step(start, target, &map, no_entities(), MOVER, &[]);
    assert_eq!(step, Some(Direction::Right));
}
