//! Flight and explosion maintenance.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::time::Fixed;

use crate::common::tunables::Tunables;

use super::components::{BulletState, PooledBullet};
use super::pool::inactive_bullet_layers;

const EXPLOSION_COLOR: Color = Color::srgb(1.0, 0.45, 0.15);

/// Hold the exploding invariants (stopped, non-colliding, explosion tint) and
/// advance the explosion delay. Single writer for the Exploding sub-state;
/// the writes are idempotent so re-applying them each tick costs nothing.
pub fn explosion_progress(
    time: Res<Time<Fixed>>,
    mut q: Query<
        (&mut BulletState, &mut LinearVelocity, &mut CollisionLayers, &mut Sprite),
        With<PooledBullet>,
    >,
) {
    for (mut state, mut vel, mut layers, mut sprite) in &mut q {
        let BulletState::Exploding { timer } = &mut *state else {
            continue;
        };

        vel.0 = Vec2::ZERO;
        *layers = inactive_bullet_layers();
        sprite.color = EXPLOSION_COLOR;

        timer.tick(time.delta());
        if timer.is_finished() {
            *state = BulletState::PendingReturn;
        }
    }
}

/// Recall bullets that left the playfield without hitting anything; misses
/// would otherwise drain the pool shot by shot.
pub fn cull_stray_bullets(
    tunables: Res<Tunables>,
    mut q: Query<(&Transform, &mut BulletState), With<PooledBullet>>,
) {
    let bounds = tunables.bullet_bounds;
    for (tf, mut state) in &mut q {
        if !matches!(*state, BulletState::Flying) {
            continue;
        }
        let p = tf.translation;
        if p.x.abs() > bounds.x || p.y.abs() > bounds.y {
            *state = BulletState::PendingReturn;
        }
    }
}
