//! Enemies plugin: cruising attackers with a small life-cycle state machine.
//!
//! Facts live in components (`Health`, `EnemyLifeState`, `Cruise`); rules
//! mutate them in predictable places:
//! - the bullet collision resolver (projectiles plugin) decrements `Health`,
//! - this module reads those facts and transitions `EnemyLifeState`,
//! - presentation (tint, fade, sounds) is derived from the transitions.
//!
//! Bullet damage is detected by comparing `Health` against the last value
//! this module reacted to (`HitReact`), not by an extra message channel.
//!
//! Structural changes stay centralized: nothing despawns inside the fixed
//! step. Systems mark `PendingDespawn` and a PostUpdate sweep removes the
//! entity, which keeps deferred-command ordering predictable.

use avian2d::collision::narrow_phase::CollisionEventSystems;
use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy::time::Fixed;
use bevy_firefly::prelude::Occluder2d;

use crate::common::layers::Layer;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::projectiles::components::Health;
use crate::plugins::sfx::{Sfx, SfxRequest};

pub mod contact;
pub mod spawner;

const ENEMY_COLOR: Color = Color::srgb(0.9, 0.25, 0.25);

// -----------------------------------------------------------------------------
// Components
// -----------------------------------------------------------------------------

#[derive(Component)]
pub struct Enemy;

/// Enemy lifecycle state machine.
///
/// - Alive: cruising toward the player's lane.
/// - Stunned: stopped for a short window after a bullet hit.
/// - Dying: death fade is playing; collision interaction is already off.
/// - Dead: terminal marker to stop further transitions.
///
/// Hits keep decrementing `Health` while stunned, so hp can go arbitrarily
/// negative; only the transition *into* Dying fires the death effects, which
/// is what the Alive/Stunned guard enforces.
#[derive(Component, Debug, Clone)]
pub enum EnemyLifeState {
    Alive,
    Stunned { timer: Timer },
    Dying { timer: Timer },
    Dead,
}

impl EnemyLifeState {
    /// Still participating in gameplay (can be shot, can ram the player).
    #[inline]
    pub fn can_be_killed(&self) -> bool {
        matches!(self, EnemyLifeState::Alive | EnemyLifeState::Stunned { .. })
    }
}

/// Configured cruise velocity, restored when hit-stun ends.
#[derive(Component, Debug, Clone, Copy)]
pub struct Cruise(pub Vec2);

/// Last hp value this module reacted to.
#[derive(Component, Debug, Clone, Copy)]
pub struct HitReact {
    last_hp: i32,
}

impl HitReact {
    pub fn new(hp: i32) -> Self {
        Self { last_hp: hp }
    }
}

/// Marker: enemy should be removed from the world.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

/// Collision layers for an enemy that should no longer interact with
/// anything: membership stays "Enemy", filters go empty.
#[inline]
fn non_interacting_enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [] as [Layer; 0])
}

/// Everything a freshly spawned enemy carries. Shared between the spawn
/// scheduler and tests so both agree on what "an enemy" is.
pub fn enemy_bundle(tunables: &Tunables) -> impl Bundle {
    let cruise = Vec2::NEG_X * tunables.enemy_speed;
    (
        Name::new("Enemy"),
        Enemy,
        EnemyLifeState::Alive,
        HitReact::new(tunables.enemy_health),
        Cruise(cruise),
        Health { hp: tunables.enemy_health },
        Sprite {
            color: ENEMY_COLOR,
            custom_size: Some(Vec2::splat(32.0)),
            ..default()
        },
        Transform::from_translation(tunables.spawn_point.extend(1.0)),
        RigidBody::Dynamic,
        Collider::circle(16.0),
        CollisionLayers::new(Layer::Enemy, [Layer::Player, Layer::PlayerBullet]),
        LinearVelocity(cruise),
        CollisionEventsEnabled,
        Occluder2d::circle(16.0),
        DespawnOnExit(GameState::InGame),
    )
}

// -----------------------------------------------------------------------------
// Plugin wiring
// -----------------------------------------------------------------------------

/// Register enemy systems.
///
/// Fixed-step ordering follows the collision-before-consequence rule: the
/// bullet resolver runs first, then hit reaction, then the death transition,
/// then timers. Despawns happen in PostUpdate.
pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawner::setup_spawner);
    app.add_systems(OnExit(GameState::InGame), spawner::teardown_spawner);

    app.add_systems(
        FixedUpdate,
        spawner::spawn_enemies
            .run_if(in_state(GameState::InGame))
            .run_if(resource_exists::<spawner::EnemySpawner>),
    );

    app.add_systems(
        FixedPostUpdate,
        (
            contact::process_enemy_contacts.after(CollisionEventSystems),
            enemy_hit_react
                .after(crate::plugins::projectiles::collision::process_bullet_collisions),
            enemy_death_trigger.after(enemy_hit_react),
            stun_recover.after(enemy_death_trigger),
            enemy_death_progress.after(enemy_death_trigger),
        )
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        PostUpdate,
        despawn_marked.run_if(in_state(GameState::InGame)),
    );
}

// -----------------------------------------------------------------------------
// Rules: hit reaction and death lifecycle
// -----------------------------------------------------------------------------

/// React to bullet damage: stop, play the hit sound, and (while still above
/// zero hp) open a fresh stun window. Every hit restarts the window.
fn enemy_hit_react(
    tunables: Res<Tunables>,
    mut sfx: MessageWriter<SfxRequest>,
    mut q: Query<
        (&Health, &mut HitReact, &mut EnemyLifeState, &mut LinearVelocity),
        (With<Enemy>, Without<PendingDespawn>),
    >,
) {
    for (hp, mut react, mut life, mut vel) in &mut q {
        let new_hp = hp.hp;
        if new_hp >= react.last_hp {
            react.last_hp = new_hp;
            continue;
        }
        react.last_hp = new_hp;

        if !life.can_be_killed() {
            continue;
        }

        sfx.write(SfxRequest(Sfx::EnemyHit));
        vel.0 = Vec2::ZERO;

        if new_hp > 0 {
            *life = EnemyLifeState::Stunned {
                timer: Timer::from_seconds(tunables.hit_stun_secs, TimerMode::Once),
            };
        }
    }
}

/// Transition Alive/Stunned -> Dying when hp drops to zero or below.
///
/// This system does not despawn; it transitions state and enforces the dying
/// invariants (stopped, no collision interaction). The Alive/Stunned guard
/// makes the death effects fire exactly once however negative hp goes.
fn enemy_death_trigger(
    tunables: Res<Tunables>,
    mut sfx: MessageWriter<SfxRequest>,
    mut q: Query<
        (
            &Health,
            &mut EnemyLifeState,
            &mut CollisionLayers,
            &mut LinearVelocity,
            &mut Sprite,
        ),
        (With<Enemy>, Without<PendingDespawn>),
    >,
) {
    for (hp, mut life, mut layers, mut vel, mut sprite) in &mut q {
        if !life.can_be_killed() {
            continue;
        }
        if hp.hp > 0 {
            continue;
        }

        *life = EnemyLifeState::Dying {
            timer: Timer::from_seconds(tunables.death_fade_secs, TimerMode::Once),
        };
        *layers = non_interacting_enemy_layers();
        vel.0 = Vec2::ZERO;
        sprite.color = Color::srgba(0.8, 0.8, 0.8, 1.0);
        sfx.write(SfxRequest(Sfx::EnemyDeath));
        debug!("enemy killed");
    }
}

/// Tick the stun window; when it closes, resume cruising.
fn stun_recover(
    time: Res<Time<Fixed>>,
    mut q: Query<
        (&Cruise, &mut EnemyLifeState, &mut LinearVelocity),
        (With<Enemy>, Without<PendingDespawn>),
    >,
) {
    for (cruise, mut life, mut vel) in &mut q {
        let EnemyLifeState::Stunned { timer } = &mut *life else {
            continue;
        };
        timer.tick(time.delta());
        if timer.is_finished() {
            vel.0 = cruise.0;
            *life = EnemyLifeState::Alive;
            debug!("enemy back up to speed");
        }
    }
}

/// Animate the death fade and mark `PendingDespawn` once finished.
fn enemy_death_progress(
    time: Res<Time<Fixed>>,
    mut commands: Commands,
    mut q: Query<
        (Entity, &mut EnemyLifeState, &mut Sprite, &mut Transform),
        (With<Enemy>, Without<PendingDespawn>),
    >,
) {
    for (e, mut life, mut sprite, mut tf) in &mut q {
        let EnemyLifeState::Dying { timer } = &mut *life else {
            continue;
        };

        timer.tick(time.delta());

        let dur = timer.duration().as_secs_f32().max(0.0001);
        let t = (timer.elapsed_secs() / dur).clamp(0.0, 1.0);

        // Asset-free death animation: shrink and fade.
        tf.scale = Vec3::splat(1.0 - t);
        let mut c = sprite.color.to_srgba();
        c.alpha = 1.0 - t;
        sprite.color = c.into();

        if timer.is_finished() {
            *life = EnemyLifeState::Dead;
            commands.entity(e).insert(PendingDespawn);
        }
    }
}

/// Despawn enemies marked for removal. Runs in PostUpdate so structural
/// changes never interleave with the fixed physics step.
fn despawn_marked(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
