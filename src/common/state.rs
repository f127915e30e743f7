//! Global state machine.
//!
//! One round = one stay in `InGame`. Everything round-scoped carries
//! `DespawnOnExit(GameState::InGame)`, so leaving the state tears the round
//! down and cancels any deferred timer still pending on those entities.
//!
//! `Restarting` exists because Bevy skips identity transitions: setting
//! `InGame` while already in `InGame` would not re-run `OnEnter`. Restart
//! hops through `Restarting` for exactly one frame instead.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
    GameOver,
    Restarting,
}
