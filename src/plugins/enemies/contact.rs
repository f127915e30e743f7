//! Enemy-player contact.
//!
//! Ramming the player destroys the enemy on the spot and costs the player one
//! life. The decrement is skipped once hp is already at zero, so simultaneous
//! contacts in the round's final tick cannot push the displayed lives
//! negative.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::plugins::player::Player;
use crate::plugins::projectiles::components::Health;
use crate::plugins::sfx::{Sfx, SfxRequest};

use super::{Enemy, EnemyLifeState, PendingDespawn};

pub fn process_enemy_contacts(
    mut started: MessageReader<CollisionStart>,
    mut commands: Commands,
    q_enemies: Query<&EnemyLifeState, (With<Enemy>, Without<PendingDespawn>)>,
    q_is_player: Query<(), With<Player>>,
    mut q_player_hp: Query<&mut Health, With<Player>>,
    mut sfx: MessageWriter<SfxRequest>,
    // Per-run dedupe: one contact per enemy however many manifolds start.
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (enemy, player) = if q_enemies.contains(ev.collider1) && q_is_player.contains(ev.collider2)
        {
            (ev.collider1, ev.collider2)
        } else if q_enemies.contains(ev.collider2) && q_is_player.contains(ev.collider1) {
            (ev.collider2, ev.collider1)
        } else {
            continue;
        };

        if !seen.insert(enemy) {
            continue;
        }

        let Ok(life) = q_enemies.get(enemy) else {
            continue;
        };
        // A fading corpse no longer rams anything.
        if !life.can_be_killed() {
            continue;
        }

        let Ok(mut hp) = q_player_hp.get_mut(player) else {
            continue;
        };
        if hp.hp <= 0 {
            continue;
        }
        hp.hp -= 1;
        debug!("health lost, {} remaining", hp.hp);

        sfx.write(SfxRequest(Sfx::EnemyDeath));
        sfx.write(SfxRequest(Sfx::PlayerHit));
        commands.entity(enemy).insert(PendingDespawn);
    }
}
