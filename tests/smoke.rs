mod common;

use blastline::plugins::enemies::spawner::EnemySpawner;
use blastline::plugins::hud::HudText;
use blastline::plugins::player::Player;
use blastline::plugins::projectiles::pool::BulletPool;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn round_setup_spawns_player_pool_and_scheduler() {
    let mut app = common::app_headless();
    app.update();
    app.update();

    let players = app
        .world_mut()
        .query::<&Player>()
        .iter(app.world())
        .count();
    assert_eq!(players, 1);

    let pool = app.world().resource::<BulletPool>();
    assert_eq!(pool.free.len(), pool.capacity);

    assert!(app.world().get_resource::<EnemySpawner>().is_some());

    let hud = app.world().resource::<HudText>();
    assert_eq!(hud.score, "Score: 0");
    assert_eq!(hud.lives, "Lives: 3");
}
