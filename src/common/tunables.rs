//! Tunable gameplay constants.
//!
//! Optional collaborators are `Option` fields: a `None` bullet config means
//! the fire action is ignored, never an error.

use bevy::prelude::*;

/// Bullet prototype. Absent (`None` in [`Tunables::bullet`]) disables firing.
#[derive(Debug, Clone)]
pub struct BulletTunables {
    pub speed: f32,
    /// Muzzle offset from the player's position.
    pub spawn_offset: Vec2,
    pub damage: i32,
}

impl Default for BulletTunables {
    fn default() -> Self {
        Self { speed: 900.0, spawn_offset: Vec2::new(24.0, 0.0), damage: 1 }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,

    // Player
    pub player_speed: f32,
    pub starting_health: i32,
    /// Fixed ticks between shots while the fire button is held.
    pub fire_cooldown_ticks: u32,
    pub score_per_strike: u32,
    pub bullet: Option<BulletTunables>,

    // Enemies
    pub enemy_health: i32,
    /// Cruise speed; enemies travel in -X toward the player's lane.
    pub enemy_speed: f32,
    pub hit_stun_secs: f32,
    pub death_fade_secs: f32,

    // Projectiles
    pub explosion_secs: f32,
    /// Flying bullets past these half-extents are recalled to the pool.
    pub bullet_bounds: Vec2,

    // Spawning
    pub spawn_point: Vec2,
    pub spawn_interval_min_secs: f32,
    pub spawn_interval_max_secs: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 320.0,
            starting_health: 3,
            fire_cooldown_ticks: 15,
            score_per_strike: 100,
            bullet: Some(BulletTunables::default()),
            enemy_health: 3,
            enemy_speed: 180.0,
            hit_stun_secs: 0.5,
            death_fade_secs: 0.25,
            explosion_secs: 0.25,
            bullet_bounds: Vec2::new(720.0, 440.0),
            spawn_point: Vec2::new(560.0, 0.0),
            spawn_interval_min_secs: 0.75,
            spawn_interval_max_secs: 2.5,
        }
    }
}
