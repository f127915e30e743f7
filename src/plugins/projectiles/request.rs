//! Producer: the player's fire cadence.
//!
//! Runs on the fixed step so the cooldown counts simulation ticks, not
//! frames. This system intentionally does **not** access `BulletPool`; it
//! only enqueues intent.
//!
//! Cadence: a press arms the trigger and zeroes the cooldown, so the first
//! shot is immediate. While the trigger is held, a positive cooldown is
//! decremented before the ready check, which makes follow-up shots land
//! every `fire_cooldown_ticks` ticks exactly.

use bevy::prelude::*;
use bevy::ecs::message::MessageWriter;

use crate::common::tunables::Tunables;
use crate::plugins::player::{FireControl, Player, PlayerInput};
use crate::plugins::sfx::{Sfx, SfxRequest};

use super::messages::SpawnBulletRequest;

pub fn request_player_bullets(
    tunables: Res<Tunables>,
    mut input: ResMut<PlayerInput>,
    mut q_player: Query<(&Transform, &mut FireControl), With<Player>>,
    mut requests: MessageWriter<SpawnBulletRequest>,
    mut sfx: MessageWriter<SfxRequest>,
) {
    // No bullet configured: the fire action is absent, not an error.
    let Some(bullet) = tunables.bullet.as_ref() else {
        return;
    };
    let Ok((tf, mut fire)) = q_player.single_mut() else {
        return;
    };

    if input.fire_pressed {
        input.fire_pressed = false;
        fire.firing = true;
        fire.cooldown_ticks = 0;
    }
    if !input.fire_held {
        fire.firing = false;
    }
    if !fire.firing {
        return;
    }

    if fire.cooldown_ticks > 0 {
        fire.cooldown_ticks -= 1;
    }
    if fire.cooldown_ticks == 0 {
        let pos = tf.translation.truncate() + bullet.spawn_offset;
        requests.write(SpawnBulletRequest {
            pos,
            vel: Vec2::X * bullet.speed,
            damage: bullet.damage,
        });
        sfx.write(SfxRequest(Sfx::Shoot));
        fire.cooldown_ticks = tunables.fire_cooldown_ticks;
    }
}
