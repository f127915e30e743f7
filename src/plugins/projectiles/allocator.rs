//! Spawn consumer: activate bullets from the pool.
//!
//! # Fail-fast invariants
//! The pool free list contains only valid pooled bullet entities, so a popped
//! entity must match the bullet query; a miss is a bug and crashes loudly.
//!
//! An empty pool is a capacity decision, not a failure: the request is
//! dropped.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::ecs::message::MessageReader;

use super::components::{Bullet, BulletState, PooledBullet};
use super::messages::SpawnBulletRequest;
use super::pool::{active_bullet_layers, BulletPool, BULLET_COLOR};

pub fn allocate_bullets_from_pool(
    mut pool: ResMut<BulletPool>,
    mut reader: MessageReader<SpawnBulletRequest>,
    mut q: Query<
        (
            &mut BulletState,
            &mut Bullet,
            &mut Transform,
            &mut LinearVelocity,
            &mut Visibility,
            &mut CollisionLayers,
            &mut Sprite,
        ),
        With<PooledBullet>,
    >,
) {
    for req in reader.read() {
        let Some(e) = pool.free.pop() else {
            continue;
        };

        let (mut state, mut bullet, mut tf, mut vel, mut vis, mut layers, mut sprite) = q
            .get_mut(e)
            .expect("BulletPool contained an entity missing pooled bullet components");

        *state = BulletState::Flying;
        bullet.reset_for_fire(req.damage);
        tf.translation = req.pos.extend(2.0);
        vel.0 = req.vel;
        *vis = Visibility::Visible;
        *layers = active_bullet_layers();
        sprite.color = BULLET_COLOR;
    }
}
