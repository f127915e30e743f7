#![cfg(test)]

use super::*;

use crate::common::test_utils::run_system_once;

#[test]
fn spawn_creates_player_with_full_health() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());

    run_system_once(&mut world, spawn);

    let mut q = world.query::<(&Player, &Health, &FireControl)>();
    let (_p, hp, fire) = q.iter(&world).next().expect("player spawned");
    assert_eq!(hp.hp, 3);
    assert_eq!(fire.cooldown_ticks, 0);
    assert!(!fire.firing);
}

#[test]
fn one_axis_drives_both_velocity_components() {
    let mut world = World::new();
    let mut tunables = Tunables::default();
    tunables.player_speed = 100.0;
    world.insert_resource(tunables);
    world.insert_resource(PlayerInput { move_axis: 1.0, ..default() });
    world.spawn((Player, LinearVelocity::ZERO));

    run_system_once(&mut world, apply_movement);
    let v = world.query::<&LinearVelocity>().iter(&world).next().unwrap();
    assert_eq!(v.0, Vec2::new(100.0, 100.0));

    world.resource_mut::<PlayerInput>().move_axis = -0.5;
    run_system_once(&mut world, apply_movement);
    let v = world.query::<&LinearVelocity>().iter(&world).next().unwrap();
    assert_eq!(v.0, Vec2::new(-50.0, -50.0));
}

#[test]
fn every_strike_is_worth_the_configured_score() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(Scoreboard::default());
    world.init_resource::<bevy::ecs::message::Messages<BulletStrike>>();

    for _ in 0..3 {
        world.write_message(BulletStrike { enemy: Entity::PLACEHOLDER });
    }
    run_system_once(&mut world, score_on_strikes);

    assert_eq!(world.resource::<Scoreboard>().score, 300);
}

#[test]
fn round_ends_when_health_is_gone() {
    let mut world = World::new();
    world.init_resource::<NextState<GameState>>();
    world.spawn((Player, Health { hp: 0 }));

    run_system_once(&mut world, check_round_over);

    assert!(matches!(
        *world.resource::<NextState<GameState>>(),
        NextState::Pending(GameState::GameOver)
    ));
}

#[test]
fn round_continues_with_health_left() {
    let mut world = World::new();
    world.init_resource::<NextState<GameState>>();
    world.spawn((Player, Health { hp: 1 }));

    run_system_once(&mut world, check_round_over);

    assert!(matches!(
        *world.resource::<NextState<GameState>>(),
        NextState::Unchanged
    ));
}

#[test]
fn reset_round_clears_score_and_latched_input() {
    let mut world = World::new();
    world.insert_resource(Scoreboard { score: 500 });
    world.insert_resource(PlayerInput {
        move_axis: 1.0,
        fire_held: true,
        fire_pressed: true,
    });

    run_system_once(&mut world, reset_round);

    assert_eq!(world.resource::<Scoreboard>().score, 0);
    let input = world.resource::<PlayerInput>();
    assert_eq!(input.move_axis, 0.0);
    assert!(!input.fire_held);
    assert!(!input.fire_pressed);
}
