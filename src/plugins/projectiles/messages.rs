//! Buffered gameplay messages.
//!
//! Producers create *intent*; a single consumer applies it. The fire cadence
//! never touches the pool, and scoring never touches collision state.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnBulletRequest {
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: i32,
}

/// A bullet connected with an enemy. Drives scoring.
#[derive(Message, Clone, Copy, Debug)]
pub struct BulletStrike {
    pub enemy: Entity,
}
