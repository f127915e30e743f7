//! One-shot sound triggers.
//!
//! Gameplay only *requests* sounds; this sink drains the requests at the
//! presentation boundary. With no audio backend configured they are logged
//! and dropped, the same skip-silently policy applied to every absent
//! collaborator.

use bevy::ecs::message::{MessageReader, Messages};
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sfx {
    Shoot,
    EnemyHit,
    EnemyDeath,
    PlayerHit,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct SfxRequest(pub Sfx);

fn update_sfx_messages(mut msgs: ResMut<Messages<SfxRequest>>) {
    msgs.update();
}

fn drain_sfx(mut reader: MessageReader<SfxRequest>) {
    for SfxRequest(sfx) in reader.read() {
        debug!("sfx: {sfx:?}");
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Messages<SfxRequest>>();
    app.add_systems(Update, drain_sfx);
    app.add_systems(PostUpdate, update_sfx_messages);
}
