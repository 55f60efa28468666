//! This module contains the session controller tying the scene to lives, score and speed.

use std::time::Duration;

use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, info, trace, warn};

use crate::arena::Arena;
use crate::config::GameConfig;
use crate::entity::{
    collision::{CollisionProbe, RadiusProbe},
    direction::Direction,
    ActorId,
};
use crate::error::{GameError, GameResult, SceneError};
use crate::events::SceneEvent;
use crate::formatter;
use crate::input::commands::GameCommand;
use crate::platform;

use self::difficulty::DifficultyModel;
use self::hud::{HudStats, Overlay};
use self::scene::{SceneEvents, SceneSettings, SimulationScene};
use self::state::{ControllerState, SessionState};

pub mod difficulty;
pub mod hud;
pub mod scene;
pub mod state;

/// The `Game` struct is the main entry point for a session.
///
/// It turns commands into scene changes, runs ticks while the session is running and
/// reacts to what the scene reports: lives, score and speed all live here. Failures while
/// building or resetting the scene stop the session and are kept in [`Game::fault`] for the
/// presentation layer to show. Generating twice is rejected and changes nothing.
pub struct Game<R: Rng = ThreadRng> {
    config: GameConfig,
    scene: SimulationScene,
    session: SessionState,
    difficulty: DifficultyModel,
    fault: Option<GameError>,
    rng: R,
}

impl Game<ThreadRng> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, platform::rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self::with_probe(config, Box::new(RadiusProbe), rng)
    }

    /// Builds a session whose scene uses a custom collision probe.
    ///
    /// The scene settings are always derived from `config`.
    pub fn with_probe(config: GameConfig, probe: Box<dyn CollisionProbe>, rng: R) -> Self {
        let scene = SimulationScene::with_probe(SceneSettings::from(&config), probe);
        let difficulty = DifficultyModel::new(config.start_speed, config.max_speed, 0, config.speed_boost);
        let session = SessionState::new(config.lives);

        Self {
            config,
            scene,
            session,
            difficulty,
            fault: None,
            rng,
        }
    }

    /// Generates the scene for an arena of the given size.
    ///
    /// A scene that already exists is left alone and the call is rejected without
    /// touching the session. Any other failure stops the session and is kept as the fault.
    pub fn generate(&mut self, width: f32, height: f32) -> Result<(), SceneError> {
        if self.scene.is_generated() {
            warn!(width, height, "Scene already generated, ignoring");
            return Err(SceneError::AlreadyGenerated);
        }

        match self.try_generate(width, height) {
            Ok(()) => {
                self.difficulty = DifficultyModel::new(
                    self.config.start_speed,
                    self.config.max_speed,
                    self.scene.total_pickups(),
                    self.config.speed_boost,
                );
                self.refresh_progress();
                debug!(
                    speed = self.difficulty.current(),
                    increment = self.difficulty.increment(),
                    "Difficulty initialized"
                );
            }
            Err(error) => self.raise_fault(error),
        }
        Ok(())
    }

    fn try_generate(&mut self, width: f32, height: f32) -> GameResult<()> {
        let arena = Arena::new(width, height)?;
        self.scene.generate(arena, &mut self.rng)
    }

    pub fn handle_command(&mut self, command: GameCommand) {
        trace!(?command, "Handling command");
        match command {
            GameCommand::Move(direction, pressed) => self.on_direction_key(direction, pressed),
            GameCommand::TogglePause => self.toggle_pause(),
            GameCommand::FocusLost => self.on_focus_lost(),
        }
    }

    /// Resumes a paused session or pauses a running one.
    ///
    /// Ignored once the session is over, after a fault, and before the scene exists.
    pub fn toggle_pause(&mut self) {
        if self.fault.is_some() || !self.scene.is_generated() {
            debug!("Pause toggle ignored");
            return;
        }
        let before = self.state();
        self.session.toggle();
        self.log_transition(before);
    }

    /// Applies a direction key press or release to the player, whether or not the session runs.
    pub fn on_direction_key(&mut self, direction: Direction, pressed: bool) {
        if let Err(error) = self.scene.set_player_direction(direction, pressed) {
            trace!(%direction, %error, "Direction ignored");
        }
    }

    /// Stops the player, since the releases of held keys will never arrive.
    pub fn on_focus_lost(&mut self) {
        if let Err(error) = self.scene.stop_player() {
            trace!(%error, "Focus loss ignored");
        }
    }

    /// Runs one tick if the session is running and handles the events it raised.
    pub fn tick(&mut self) -> SceneEvents {
        if self.state() != ControllerState::Running {
            return SceneEvents::new();
        }
        formatter::increment_tick();

        let events = match self.scene.tick(self.difficulty.current(), self.session.running) {
            Ok(events) => events,
            Err(error) => {
                self.raise_fault(error.into());
                return SceneEvents::new();
            }
        };

        for event in events.iter().copied() {
            match event {
                SceneEvent::LifeLost { adversary } => self.on_life_lost(adversary),
                SceneEvent::PickupConsumed { consumed, .. } => self.on_pickup_consumed(consumed),
                SceneEvent::GameWon => self.on_game_won(),
            }
        }
        events
    }

    /// Advances adversary retarget timers by `dt`. Returns how many retargets happened.
    pub fn elapse(&mut self, dt: Duration) -> usize {
        self.scene.elapse(dt, &mut self.rng)
    }

    fn on_life_lost(&mut self, adversary: ActorId) {
        let before = self.state();
        self.session.lives_remaining = self.session.lives_remaining.saturating_sub(1);
        self.session.running = false;
        info!(adversary, lives = self.session.lives_remaining, "Life lost");

        if let Err(error) = self.scene.reset() {
            self.raise_fault(error.into());
        }
        self.session.pickups_consumed = 0;
        self.refresh_progress();
        self.log_transition(before);
    }

    fn on_pickup_consumed(&mut self, consumed: u32) {
        self.session.pickups_consumed = consumed;
        self.refresh_progress();
        debug!(consumed, score = self.score(), speed = self.difficulty.current(), "Pickup consumed");
    }

    fn on_game_won(&mut self) {
        let before = self.state();
        self.session.finished = true;
        self.session.running = false;
        info!(score = self.score(), "All pickups consumed, session won");
        self.log_transition(before);
    }

    fn refresh_progress(&mut self) {
        self.difficulty.recompute(self.session.pickups_consumed);
    }

    fn raise_fault(&mut self, error: GameError) {
        warn!(%error, "Session stopped by fault");
        self.session.running = false;
        self.fault = Some(error);
    }

    fn log_transition(&self, before: ControllerState) {
        let after = self.state();
        if before != after {
            info!(from = %before, to = %after, "State changed");
        }
    }

    pub fn state(&self) -> ControllerState {
        self.session.state()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Pickups consumed times the configured pickup value.
    pub fn score(&self) -> u32 {
        self.session.pickups_consumed.saturating_mul(self.config.pickup_value)
    }

    pub fn speed(&self) -> f32 {
        self.difficulty.current()
    }

    pub fn stats(&self) -> HudStats {
        HudStats {
            lives: self.session.lives_remaining,
            score: self.score(),
            boost_enabled: self.difficulty.boost_enabled(),
            boost_percent: self.difficulty.boost_percent(),
            running: self.session.running,
        }
    }

    /// The overlay to draw, or `None` while running.
    pub fn overlay(&self) -> Option<Overlay> {
        Overlay::for_session(&self.session)
    }

    pub fn difficulty(&self) -> &DifficultyModel {
        &self.difficulty
    }

    pub fn scene(&self) -> &SimulationScene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SimulationScene {
        &mut self.scene
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn fault(&self) -> Option<&GameError> {
        self.fault.as_ref()
    }
}
