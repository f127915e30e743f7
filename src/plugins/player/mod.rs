//! Player plugin.
//!
//! Pipeline:
//! - Update: sample input, write the PlayerInput resource
//! - FixedUpdate: apply velocity to the kinematic rigid body (the fire
//!   cadence itself lives with the projectiles producer)
//! - FixedPostUpdate: consume combat results (contact damage, bullet
//!   strikes) and run the round-over check after them
//!
//! API note (Bevy >= 0.18):
//! - Input resources are taken as `Option<Res<...>>` so every system here
//!   also runs headless, where no input plugin exists.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::enemies;
use crate::plugins::projectiles;
use crate::plugins::projectiles::components::Health;
use crate::plugins::projectiles::messages::BulletStrike;

#[derive(Component)]
pub struct Player;

/// Fire trigger state. `firing` doubles as the "is firing" animation flag at
/// the presentation boundary; `cooldown_ticks` is unsigned so the ready
/// counter cannot go negative by construction.
#[derive(Component, Debug, Default)]
pub struct FireControl {
    pub cooldown_ticks: u32,
    pub firing: bool,
}

/// Sampled input intent.
///
/// `fire_pressed` is edge-triggered and latched (`|=`) until the fixed-step
/// consumer takes it: several Update frames can pass between fixed ticks and
/// a press must not be lost to an overwrite.
#[derive(Resource, Default, Debug)]
pub struct PlayerInput {
    pub move_axis: f32,
    pub fire_held: bool,
    pub fire_pressed: bool,
}

/// Round score.
#[derive(Resource, Default, Debug)]
pub struct Scoreboard {
    pub score: u32,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .insert_resource(Scoreboard::default());

    app.add_systems(OnEnter(GameState::InGame), (spawn, reset_round));
    app.add_systems(OnEnter(GameState::GameOver), announce_game_over);
    app.add_systems(OnEnter(GameState::Restarting), relaunch);

    app.add_systems(Update, gather_input.run_if(in_state(GameState::InGame)));
    app.add_systems(Update, round_controls);

    app.add_systems(
        FixedUpdate,
        apply_movement.run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedPostUpdate,
        (
            score_on_strikes.after(projectiles::collision::process_bullet_collisions),
            check_round_over.after(enemies::contact::process_enemy_contacts),
        )
            .run_if(in_state(GameState::InGame)),
    );
}

/// Everything the player entity carries; shared with tests.
pub fn player_bundle(tunables: &Tunables) -> impl Bundle {
    (
        Name::new("Player"),
        Player,
        Health { hp: tunables.starting_health },
        FireControl::default(),
        Sprite {
            color: Color::srgb(0.2, 0.75, 0.9),
            custom_size: Some(Vec2::splat(26.0)),
            ..default()
        },
        Transform::from_xyz(-420.0, 0.0, 1.0),
        RigidBody::Kinematic,
        Collider::circle(13.0),
        CollisionLayers::new(Layer::Player, [Layer::Enemy]),
        LinearVelocity::ZERO,
        CollisionEventsEnabled,
        DespawnOnExit(GameState::InGame),
    )
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    commands.spawn(player_bundle(&tunables));
}

/// A fresh round starts from scratch: zero score, no latched input.
fn reset_round(mut scoreboard: ResMut<Scoreboard>, mut input: ResMut<PlayerInput>) {
    *scoreboard = Scoreboard::default();
    *input = PlayerInput::default();
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else {
        return;
    };

    let mut axis = 0.0;
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        axis += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        axis -= 1.0;
    }

    input.move_axis = axis;
    input.fire_held = keys.pressed(KeyCode::Space);
    input.fire_pressed |= keys.just_pressed(KeyCode::Space);
}

/// The one move axis drives *both* velocity components: movement runs along
/// the x = y diagonal. Kept as shipped behavior.
fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<&mut LinearVelocity, With<Player>>,
) {
    let Ok(mut vel) = q_player.single_mut() else {
        return;
    };
    vel.0 = Vec2::splat(input.move_axis) * tunables.player_speed;
}

/// Every confirmed bullet strike is worth points.
fn score_on_strikes(
    tunables: Res<Tunables>,
    mut strikes: MessageReader<BulletStrike>,
    mut scoreboard: ResMut<Scoreboard>,
) {
    for _ in strikes.read() {
        scoreboard.score += tunables.score_per_strike;
    }
}

/// Runs after contact damage in the same tick, so the round ends on the tick
/// the last life is lost.
fn check_round_over(
    q_player: Query<&Health, With<Player>>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Ok(hp) = q_player.single() else {
        return;
    };
    if hp.hp <= 0 {
        next.set(GameState::GameOver);
    }
}

fn announce_game_over(scoreboard: Res<Scoreboard>) {
    info!(
        "round over, final score {}. R restarts, Esc quits",
        scoreboard.score
    );
}

/// Restart and quit stay bound in every state.
fn round_controls(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    state: Res<State<GameState>>,
    mut next: ResMut<NextState<GameState>>,
    mut app_exit: MessageWriter<AppExit>,
) {
    let Some(keys) = keys else {
        return;
    };

    if keys.just_pressed(KeyCode::KeyR) && *state.get() != GameState::Restarting {
        next.set(GameState::Restarting);
    }
    if keys.just_pressed(KeyCode::Escape) {
        app_exit.write(AppExit::Success);
    }
}

/// Second half of the restart hop; see the `GameState` docs.
fn relaunch(mut next: ResMut<NextState<GameState>>) {
    next.set(GameState::InGame);
}

#[cfg(test)]
mod tests;
