//! Score and lives readouts.
//!
//! Gameplay formats the lines; drawing them is the render host's job.
//! Keeping the formatted strings in a resource makes the boundary observable
//! from headless tests, and the strings survive into the game-over screen.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::player::{Player, Scoreboard};
use crate::plugins::projectiles::components::Health;

#[derive(Resource, Debug, Clone, Default)]
pub struct HudText {
    pub score: String,
    pub lives: String,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<HudText>();
    app.add_systems(OnEnter(GameState::InGame), reset_hud);
    app.add_systems(PostUpdate, refresh_hud);
}

fn reset_hud(tunables: Res<Tunables>, mut hud: ResMut<HudText>) {
    hud.score = "Score: 0".to_string();
    hud.lives = format!("Lives: {}", tunables.starting_health);
}

fn refresh_hud(
    scoreboard: Res<Scoreboard>,
    q_player: Query<&Health, With<Player>>,
    mut hud: ResMut<HudText>,
) {
    if scoreboard.is_changed() {
        let line = format!("Score: {}", scoreboard.score);
        if hud.score != line {
            hud.score = line;
            debug!("{}", hud.score);
        }
    }

    // Displayed lives never go below zero.
    if let Ok(hp) = q_player.single() {
        let line = format!("Lives: {}", hp.hp.max(0));
        if hud.lives != line {
            hud.lives = line;
            debug!("{}", hud.lives);
        }
    }
}

#[cfg(test)]
mod tests;
