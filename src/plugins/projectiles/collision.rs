//! Resolve bullet collisions.
//!
//! Physics delivers `CollisionStart` messages; this system applies them to
//! gameplay truth (enemy `Health`) and to the bullet's own state machine
//! (Flying -> Exploding). Enemy-side reactions (stun, death) are consumed
//! downstream by the enemies plugin; scoring flows through `BulletStrike`.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::tunables::Tunables;

use super::components::{Bullet, BulletState, Health, PooledBullet};
use super::messages::BulletStrike;

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget { collider: ev.collider1, body: ev.body1 },
        CollisionTarget { collider: ev.collider2, body: ev.body2 },
    )
}

#[inline]
fn is_in_layer(layers: &CollisionLayers, layer: Layer) -> bool {
    layers.memberships.has_all(layer)
}

pub fn process_bullet_collisions(
    tunables: Res<Tunables>,
    mut started: MessageReader<CollisionStart>,
    // Fast "is this a pooled bullet?" check
    q_is_bullet: Query<(), With<PooledBullet>>,
    mut q_bullets: Query<(&Bullet, &mut BulletState, &mut LinearVelocity), With<PooledBullet>>,
    // Read layers from collider entities
    q_layers: Query<&CollisionLayers>,
    mut q_health: Query<&mut Health, Without<PooledBullet>>,
    mut strikes: MessageWriter<BulletStrike>,
    // Per-run dedupe
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (t1, t2) = targets(ev);

        // Exactly one side must be a bullet.
        let b1 = q_is_bullet.contains(t1.collider);
        let b2 = q_is_bullet.contains(t2.collider);
        if !(b1 ^ b2) {
            continue;
        }
        let (bullet_side, other_side) = if b1 { (t1, t2) } else { (t2, t1) };

        if !seen.insert(bullet_side.collider) {
            continue;
        }

        let Ok(other_layers) = q_layers.get(other_side.collider) else {
            continue;
        };
        if !is_in_layer(other_layers, Layer::Enemy) {
            continue;
        }

        let Ok((bullet, mut state, mut vel)) = q_bullets.get_mut(bullet_side.collider) else {
            continue;
        };
        if !matches!(*state, BulletState::Flying) {
            continue;
        }

        let enemy = other_side.gameplay_owner();
        if let Ok(mut hp) = q_health.get_mut(enemy) {
            hp.hp -= bullet.damage;
        }
        strikes.write(BulletStrike { enemy });

        vel.0 = Vec2::ZERO;
        *state = BulletState::Exploding {
            timer: Timer::from_seconds(tunables.explosion_secs, TimerMode::Once),
        };
    }
}
