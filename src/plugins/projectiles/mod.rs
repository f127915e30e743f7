//! Projectiles plugin: message-based producer -> consumer spawning over a
//! data-driven pool.
//!
//! # Data flow
//! ```text
//! FixedUpdate
//! ┌────────────────────────────────────────────────────────────────┐
//! │ (A) Producer: request_player_bullets                           │
//! │     - reads: PlayerInput, FireControl, Tunables                │
//! │     - writes: SpawnBulletRequest, SfxRequest(Shoot)            │
//! │                                                                │
//! │ (B) Consumer: allocate_bullets_from_pool                       │
//! │     - pops BulletPool.free, flips component values to Flying   │
//! │                                                                │
//! │ (C) cull_stray_bullets: Flying + out of bounds -> PendingReturn│
//! └────────────────────────────────────────────────────────────────┘
//! FixedPostUpdate
//! ┌────────────────────────────────────────────────────────────────┐
//! │ (D) Physics emits CollisionStart messages (Avian)              │
//! │ (E) process_bullet_collisions: Flying -> Exploding, enemy hp   │
//! │     decrement, BulletStrike                                    │
//! │ (F) explosion_progress: hold exploding invariants, tick delay, │
//! │     -> PendingReturn                                           │
//! │ (G) return_to_pool_commit: PendingReturn -> Inactive + recycle │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Producers never borrow `ResMut<BulletPool>`; they enqueue intent and the
//! allocator is the single writer that mutates the pool. Pool exhaustion
//! drops the request (capacity decision, not a fault).

pub mod allocator;
pub mod collision;
pub mod commit;
pub mod components;
pub mod lifecycle;
pub mod messages;
pub mod pool;
pub mod request;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::GameState;

pub struct ProjectilesPlugin;

/// Maintain message buffers.
///
/// Messages are double-buffered; `update()` advances buffers.
fn update_spawn_messages(mut msgs: ResMut<Messages<messages::SpawnBulletRequest>>) {
    msgs.update();
}

fn update_strike_messages(mut msgs: ResMut<Messages<messages::BulletStrike>>) {
    msgs.update();
}

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        // Pool + pre-spawn
        app.insert_resource(pool::BulletPool::new(64))
            .add_systems(Startup, pool::init_bullet_pool);

        // Message storage
        app.init_resource::<Messages<messages::SpawnBulletRequest>>();
        app.init_resource::<Messages<messages::BulletStrike>>();
        app.add_systems(PostUpdate, (update_spawn_messages, update_strike_messages));

        // Fixed-step pipeline: cadence -> allocate -> cull
        app.add_systems(
            FixedUpdate,
            (
                request::request_player_bullets,
                allocator::allocate_bullets_from_pool.after(request::request_player_bullets),
                lifecycle::cull_stray_bullets.after(allocator::allocate_bullets_from_pool),
            )
                .run_if(in_state(GameState::InGame)),
        );

        // Fixed collision pipeline
        app.add_systems(
            FixedPostUpdate,
            (
                collision::process_bullet_collisions.after(CollisionEventSystems),
                lifecycle::explosion_progress.after(collision::process_bullet_collisions),
                commit::return_to_pool_commit.after(lifecycle::explosion_progress),
            )
                .run_if(in_state(GameState::InGame)),
        );

        // Round teardown recalls every live bullet.
        app.add_systems(OnExit(GameState::InGame), commit::recall_live_bullets);
    }
}
