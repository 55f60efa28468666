use std::time::Instant;

use anyhow::{Context, Result};
use citizen_pac::config::GameConfig;
use citizen_pac::entity::direction::DIRECTIONS;
use citizen_pac::game::state::ControllerState;
use citizen_pac::game::Game;
use citizen_pac::input::{Bindings, InputEvent};
use citizen_pac::logging::setup_logging;
use citizen_pac::platform;
use rand::Rng;
use tracing::{debug, info, warn};

/// Ticks to run when no limit is given on the command line.
const DEFAULT_TICK_LIMIT: u64 = 60_000;

/// Chance per tick that the autopilot touches a key.
const AUTOPILOT_KEY_CHANCE: f64 = 0.02;

/// Keys the autopilot presses, in `DIRECTIONS` order.
const DIRECTION_KEYS: [char; 4] = ['w', 's', 'd', 'a'];

pub fn main() -> Result<()> {
    setup_logging();

    let tick_limit = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>().with_context(|| format!("Invalid tick limit: {arg}"))?,
        None => DEFAULT_TICK_LIMIT,
    };

    let config = GameConfig::load().context("Failed to load configuration")?;
    info!(?config, tick_limit, "Starting headless session");

    let tick_period = config.tick_period();
    let (width, height) = (config.arena_width, config.arena_height);
    let bindings = Bindings::default();
    let mut autopilot = platform::rng();

    let mut game = Game::new(config);
    game.generate(width, height)?;
    if let Some(fault) = game.fault() {
        return Err(anyhow::anyhow!("Failed to generate session: {fault}"));
    }

    let mut last_stats = game.stats();
    info!(stats = %last_stats, "Session ready");

    for _ in 0..tick_limit {
        let start = Instant::now();

        // Resume after every lost life, like a player pressing space on the overlay
        if game.state() == ControllerState::Paused {
            if let Some(overlay) = game.overlay() {
                info!(headline = %overlay.headline, prompt = %overlay.prompt, "Overlay");
            }
            feed(&mut game, &bindings, InputEvent::KeyDown(' '));
            feed(&mut game, &bindings, InputEvent::KeyUp(' '));
        }

        if autopilot.random_bool(AUTOPILOT_KEY_CHANCE) {
            let index = autopilot.random_range(0..DIRECTIONS.len());
            let key = DIRECTION_KEYS[index];
            let event = if autopilot.random_bool(0.5) {
                InputEvent::KeyDown(key)
            } else {
                InputEvent::KeyUp(key)
            };
            feed(&mut game, &bindings, event);
        }

        game.elapse(tick_period);
        game.tick();

        let stats = game.stats();
        if stats != last_stats {
            info!(%stats, "Stats changed");
            last_stats = stats;
        }

        if let Some(fault) = game.fault() {
            warn!(%fault, "Session faulted");
            break;
        }
        if game.state().is_terminal() {
            break;
        }

        if let Some(remaining) = tick_period.checked_sub(start.elapsed()) {
            platform::sleep(remaining);
        }
    }

    if let Some(overlay) = game.overlay() {
        info!(headline = %overlay.headline, prompt = %overlay.prompt, "Overlay");
    }
    info!(state = %game.state(), stats = %game.stats(), "Session finished");
    Ok(())
}

fn feed(game: &mut Game, bindings: &Bindings, event: InputEvent) {
    if let Some(command) = bindings.translate(event) {
        debug!(?event, ?command, "Autopilot input");
        game.handle_command(command);
    }
}
