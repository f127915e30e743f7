//! Return commit: recycle bullets back into the pool.
//!
//! This system is the owner of the *Inactive invariants*:
//! - hidden
//! - velocity = 0
//! - collides with nothing (filters empty)
//!
//! Centralizing these writes here prevents inconsistencies.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{BulletState, PooledBullet};
use super::pool::{inactive_bullet_layers, BulletPool};

fn deactivate(
    pool: &mut BulletPool,
    e: Entity,
    state: &mut BulletState,
    vis: &mut Visibility,
    vel: &mut LinearVelocity,
    layers: &mut CollisionLayers,
) {
    *state = BulletState::Inactive;
    *vis = Visibility::Hidden;
    vel.0 = Vec2::ZERO;
    *layers = inactive_bullet_layers();
    pool.free.push(e);
}

pub fn return_to_pool_commit(
    mut pool: ResMut<BulletPool>,
    mut q: Query<
        (Entity, &mut BulletState, &mut Visibility, &mut LinearVelocity, &mut CollisionLayers),
        With<PooledBullet>,
    >,
) {
    for (e, mut state, mut vis, mut vel, mut layers) in &mut q {
        if !matches!(*state, BulletState::PendingReturn) {
            continue;
        }
        deactivate(&mut pool, e, &mut state, &mut vis, &mut vel, &mut layers);
    }
}

/// Round teardown: every live bullet goes back to the pool immediately,
/// whatever its sub-state. Runs on leaving `InGame`, where the per-tick
/// commit no longer does.
pub fn recall_live_bullets(
    mut pool: ResMut<BulletPool>,
    mut q: Query<
        (Entity, &mut BulletState, &mut Visibility, &mut LinearVelocity, &mut CollisionLayers),
        With<PooledBullet>,
    >,
) {
    for (e, mut state, mut vis, mut vel, mut layers) in &mut q {
        if !state.is_live() {
            continue;
        }
        deactivate(&mut pool, e, &mut state, &mut vis, &mut vel, &mut layers);
    }
}
