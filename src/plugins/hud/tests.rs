#![cfg(test)]

use super::*;

use crate::common::test_utils::run_system_once;

#[test]
fn hud_lines_follow_score_and_lives() {
    let mut world = World::new();
    world.insert_resource(Scoreboard { score: 300 });
    world.init_resource::<HudText>();
    world.spawn((Player, Health { hp: 1 }));

    run_system_once(&mut world, refresh_hud);

    let hud = world.resource::<HudText>();
    assert_eq!(hud.score, "Score: 300");
    assert_eq!(hud.lives, "Lives: 1");
}

#[test]
fn displayed_lives_never_go_negative() {
    let mut world = World::new();
    world.insert_resource(Scoreboard::default());
    world.init_resource::<HudText>();
    world.spawn((Player, Health { hp: -2 }));

    run_system_once(&mut world, refresh_hud);

    assert_eq!(world.resource::<HudText>().lives, "Lives: 0");
}

#[test]
fn reset_formats_the_starting_lines() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<HudText>();

    run_system_once(&mut world, reset_hud);

    let hud = world.resource::<HudText>();
    assert_eq!(hud.score, "Score: 0");
    assert_eq!(hud.lives, "Lives: 3");
}
