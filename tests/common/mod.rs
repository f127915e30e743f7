//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the core ECS runtime.
//! - `StatesPlugin` backs the round state machine.
//! - `AssetPlugin` + `ScenePlugin` so `SceneSpawner` exists for the physics
//!   plugins.
//! - then `blastline::game::configure_headless` installs gameplay.

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

pub fn app_headless() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    blastline::game::configure_headless(&mut app);
    app
}
