//! Lighting plugin (Firefly) (render-only).
//!
//! The muzzle light doubles as the firing indicator: it rides the player's
//! gun and only casts while the trigger is held.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::player::{FireControl, Player};

const MUZZLE_RANGE: f32 = 160.0;

#[derive(Component)]
pub struct MuzzleLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), setup)
        .add_systems(Update, track_muzzle);
}

fn setup(mut commands: Commands, tunables: Res<Tunables>) {
    // Cold light over the spawn side so incoming enemies read against the
    // dark backdrop.
    commands.spawn((
        Name::new("LaneLight"),
        PointLight2d {
            color: Color::srgb(0.55, 0.6, 0.9),
            radius: 520.0,
            ..default()
        },
        Transform::from_translation(tunables.spawn_point.extend(10.0)),
        DespawnOnExit(GameState::InGame),
    ));

    commands.spawn((
        Name::new("MuzzleLight"),
        MuzzleLight,
        PointLight2d {
            color: Color::srgb(1.0, 0.85, 0.4),
            radius: 0.0,
            ..default()
        },
        Transform::from_xyz(-420.0, 0.0, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn track_muzzle(
    tunables: Res<Tunables>,
    q_player: Query<(&Transform, &FireControl), (With<Player>, Without<MuzzleLight>)>,
    mut q_light: Query<(&mut Transform, &mut PointLight2d), (With<MuzzleLight>, Without<Player>)>,
) {
    let Ok((tf_player, fire)) = q_player.single() else {
        return;
    };
    let Ok((mut tf_light, mut light)) = q_light.single_mut() else {
        return;
    };

    let muzzle = tunables
        .bullet
        .as_ref()
        .map(|b| b.spawn_offset)
        .unwrap_or(Vec2::ZERO);
    tf_light.translation.x = tf_player.translation.x + muzzle.x;
    tf_light.translation.y = tf_player.translation.y + muzzle.y;
    light.radius = if fire.firing { MUZZLE_RANGE } else { 0.0 };
}
