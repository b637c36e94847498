mod common;

use ally_ai::{Decision, PartyState, PartyTurn};
use game_core::{
    Direction, ElementType, Env, EntityId, Position, Skill, SkillId, SkillRange, Tactic,
    TypeChart,
};

use common::{ally, enemy, grid, open_floor, player, seeded};

#[test]
fn later_allies_see_earlier_moves() {
    let map = grid(&["........", "........"]);
    let chart = TypeChart::neutral();
    let env = Env::new(&map, &chart).into_game_env();
    let mut state = PartyState::new(
        player(0, 0, Direction::Left),
        vec![ally(1, 3, 0, 0), ally(2, 4, 0, 1)],
        vec![],
    );

    let turns = PartyTurn::default().run(&mut state, env, &mut seeded(1));

    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].moved_to, Some(Position::new(2, 0)));
    // The tile slot 0 just left is free for slot 1.
    assert_eq!(turns[1].moved_to, Some(Position::new(3, 0)));
    assert_eq!(state.allies[0].position, Position::new(2, 0));
    assert_eq!(state.allies[1].position, Position::new(3, 0));
    assert_eq!(state.allies[1].facing, Direction::Left);
    assert!(turns.iter().all(|turn| turn.move_error.is_none()));
}

#[test]
fn attack_turn_picks_skill_and_faces_target() {
    let map = open_floor(8, 8);
    let chart = TypeChart::standard();
    let env = Env::new(&map, &chart).into_game_env();

    let fighter = ally(1, 3, 3, 0)
        .with_tactic(Tactic::GoAfterFoes)
        .with_skills(vec![
            Skill::new(SkillId(1), ElementType::Normal, 40, 10, SkillRange::Adjacent),
            Skill::new(SkillId(2), ElementType::Fire, 10, 10, SkillRange::Adjacent),
        ])
        .unwrap();
    let target = enemy(9, 4, 4).with_types(&[ElementType::Grass]).unwrap();
    let mut state = PartyState::new(player(0, 0, Direction::Down), vec![fighter], vec![target]);

    let turns = PartyTurn::default().run(&mut state, env, &mut seeded(1));

    assert_eq!(turns[0].decision, Decision::attack(EntityId(9)));
    assert_eq!(turns[0].skill, Some(SkillId(2)));
    assert_eq!(turns[0].moved_to, None);
    assert_eq!(state.allies[0].position, Position::new(3, 3));
    assert_eq!(state.allies[0].facing, Direction::DownRight);
}

#[test]
fn blocking_ally_is_moved_aside() {
    let map = open_floor(6, 6);
    let chart = TypeChart::neutral();
    let env = Env::new(&map, &chart).into_game_env();
    let mut state = PartyState::new(
        player(2, 2, Direction::Down),
        vec![ally(1, 2, 3, 0)],
        vec![],
    );

    let turns = PartyTurn::default().run(&mut state, env, &mut seeded(1));

    assert_eq!(turns[0].decision, Decision::step(Direction::Left));
    assert_eq!(state.allies[0].position, Position::new(1, 3));
}

#[test]
fn seeded_turns_replay_identically() {
    let map = open_floor(10, 10);
    let chart = TypeChart::neutral();
    let env = Env::new(&map, &chart).into_game_env();
    let wanderers = (0..4u8)
        .map(|slot| {
            ally(u32::from(slot) + 1, 2 + i32::from(slot), 5, slot).with_tactic(Tactic::Scatter)
        })
        .collect();
    let initial = PartyState::new(player(0, 0, Direction::Down), wanderers, vec![]);

    let driver = PartyTurn::default();
    let mut first = initial.clone();
    let mut second = initial;
    for turn in 0..5 {
        let a = driver.run_seeded(&mut first, env, 99, turn);
        let b = driver.run_seeded(&mut second, env, 99, turn);
        assert_eq!(a, b, "turn {turn}");
    }

    let positions = |state: &PartyState| -> Vec<Position> {
        state.allies.iter().map(|ally| ally.position).collect()
    };
    assert_eq!(positions(&first), positions(&second));
}
