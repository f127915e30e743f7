//! Pre-spawned bullet pool.
//!
//! Inactive bullets stay in the world with empty collision filters, so they
//! never generate collision events and never move between archetypes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;

use super::components::{Bullet, BulletState, PooledBullet};

pub(super) const BULLET_COLOR: Color = Color::srgb(1.0, 0.85, 0.3);

#[derive(Resource, Debug)]
pub struct BulletPool {
    pub free: Vec<Entity>,
    pub capacity: usize,
}

impl BulletPool {
    pub fn new(capacity: usize) -> Self {
        Self { free: Vec::with_capacity(capacity), capacity }
    }
}

#[inline]
pub(super) fn active_bullet_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerBullet, [Layer::Enemy])
}

/// Inactive/exploding bullets collide with nothing: empty filters.
#[inline]
pub(super) fn inactive_bullet_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerBullet, [] as [Layer; 0])
}

/// Pre-spawn pooled bullets (inactive, hidden, collision-filtered to nothing).
pub fn init_bullet_pool(mut commands: Commands, mut pool: ResMut<BulletPool>) {
    pool.free.clear();
    let cap = pool.capacity;
    pool.free.reserve(cap);

    for _ in 0..cap {
        let e = commands
            .spawn((
                Name::new("Bullet(Pooled)"),
                PooledBullet,
                BulletState::Inactive,
                Bullet { damage: 1 },
                Sprite {
                    color: BULLET_COLOR,
                    custom_size: Some(Vec2::new(14.0, 6.0)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 2.0),
                Visibility::Hidden,
                RigidBody::Dynamic,
                Collider::circle(4.0),
                inactive_bullet_layers(),
                Friction::ZERO,
                LinearVelocity(Vec2::ZERO),
                CollisionEventsEnabled,
            ))
            .id();

        pool.free.push(e);
    }
}
