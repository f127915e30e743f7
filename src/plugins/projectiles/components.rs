use bevy::prelude::*;

/// Marker: this entity belongs to the pre-spawned bullet pool.
#[derive(Component)]
pub struct PooledBullet;

/// Bullet lifecycle.
///
/// Pool recycling never adds or removes components; only this value (plus
/// visibility/velocity/layers) changes. `Exploding` carries its own delay so
/// removal of the entity cancels the pending return with it.
#[derive(Component, Debug, Clone, Default)]
pub enum BulletState {
    #[default]
    Inactive,
    Flying,
    Exploding {
        timer: Timer,
    },
    PendingReturn,
}

impl BulletState {
    #[inline]
    pub fn is_live(&self) -> bool {
        !matches!(self, BulletState::Inactive)
    }
}

#[derive(Component, Debug, Clone)]
pub struct Bullet {
    pub damage: i32,
}

impl Bullet {
    #[inline]
    pub fn reset_for_fire(&mut self, damage: i32) {
        self.damage = damage;
    }
}

/// Hit points, shared by the player (lives) and enemies.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub hp: i32,
}
