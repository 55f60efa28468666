#![allow(dead_code)]

use citizen_pac::arena::Arena;
use citizen_pac::config::GameConfig;
use citizen_pac::game::scene::{SceneSettings, SimulationScene};
use citizen_pac::game::Game;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// A 220x220 arena holds exactly four pickups, at (±60, ±60).
pub const ARENA_SIZE: f32 = 220.0;

pub fn rng() -> SmallRng {
    SmallRng::seed_from_u64(0x5EED)
}

/// Small, predictable session: four pickups, three adversaries 100 units from the origin.
pub fn test_config() -> GameConfig {
    GameConfig {
        start_speed: 2.0,
        max_speed: 10.0,
        speed_boost: true,
        pickup_radius: 10.0,
        pickup_sparsity: 5.0,
        pickup_value: 111,
        lives: 3,
        adversary_count: 3,
        dispersion_radius: 100.0,
        actor_extent: 16.0,
        arena_width: ARENA_SIZE,
        arena_height: ARENA_SIZE,
        ..GameConfig::default()
    }
}

pub fn generated_scene(config: &GameConfig) -> SimulationScene {
    let mut scene = SimulationScene::new(SceneSettings::from(config));
    let arena = Arena::new(config.arena_width, config.arena_height).unwrap();
    scene.generate(arena, &mut rng()).unwrap();
    scene
}

pub fn generated_game(config: GameConfig) -> Game<SmallRng> {
    let (width, height) = (config.arena_width, config.arena_height);
    let mut game = Game::with_rng(config, rng());
    game.generate(width, height).unwrap();
    assert!(game.fault().is_none());
    game
}

/// Teleports the player onto the pickup at `index`.
pub fn place_player_on_pickup(scene: &mut SimulationScene, index: usize) -> Vec2 {
    let target = scene.pickups()[index].position;
    scene.player_mut().unwrap().position = target;
    target
}

/// Teleports the adversary at `index` onto the player.
pub fn place_adversary_on_player(scene: &mut SimulationScene, index: usize) {
    let target = scene.player().unwrap().position;
    scene.adversaries_mut()[index].position = target;
}
