//! Spawn scheduler.
//!
//! A round-scoped resource holding the interval timer and its RNG. It is
//! inserted on round entry and removed on round exit, so spawning cannot
//! outlive the player: there is no per-tick "is the round over" poll.

use bevy::prelude::*;
use bevy::time::Fixed;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::time::Duration;

use crate::common::tunables::Tunables;

#[derive(Resource)]
pub struct EnemySpawner {
    pub(crate) timer: Timer,
    pub(crate) rng: Pcg32,
}

impl EnemySpawner {
    pub fn new(seed: u64, tunables: &Tunables) -> Self {
        let mut spawner = Self {
            timer: Timer::from_seconds(0.0, TimerMode::Once),
            rng: Pcg32::seed_from_u64(seed),
        };
        spawner.schedule_next(tunables);
        spawner
    }

    /// Draw the next interval uniformly from the configured bounds. The lower
    /// bound is positive, so the next spawn is strictly in the future.
    pub(crate) fn schedule_next(&mut self, tunables: &Tunables) {
        let secs = self
            .rng
            .gen_range(tunables.spawn_interval_min_secs..tunables.spawn_interval_max_secs);
        self.timer.set_duration(Duration::from_secs_f32(secs));
        self.timer.reset();
    }
}

pub fn setup_spawner(mut commands: Commands, tunables: Res<Tunables>) {
    commands.insert_resource(EnemySpawner::new(rand::random(), &tunables));
}

pub fn teardown_spawner(mut commands: Commands) {
    commands.remove_resource::<EnemySpawner>();
}

/// Advance the schedule; on expiry, spawn one enemy at the spawn point and
/// draw a fresh interval.
pub fn spawn_enemies(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut spawner: ResMut<EnemySpawner>,
    mut commands: Commands,
) {
    spawner.timer.tick(time.delta());
    if !spawner.timer.is_finished() {
        return;
    }

    commands.spawn(super::enemy_bundle(&tunables));
    debug!("enemy spawned at {}", tunables.spawn_point);
    spawner.schedule_next(&tunables);
}
