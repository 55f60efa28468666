//! Session configuration: compiled-in defaults overridable through the environment.

use std::time::Duration;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::ConfigError;

/// Prefix for environment overrides, e.g. `CITIZEN_PAC_LIVES=5`.
pub const ENV_PREFIX: &str = "CITIZEN_PAC_";

/// Every tunable of a game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub start_speed: f32,
    pub max_speed: f32,
    /// Ramp the speed from `start_speed` to `max_speed` as pickups are consumed
    pub speed_boost: bool,
    pub pickup_radius: f32,
    pub pickup_sparsity: f32,
    pub pickup_value: u32,
    pub lives: u8,
    pub adversary_count: usize,
    pub dispersion_radius: f32,
    pub actor_extent: f32,
    /// When false, no collisions are processed and player movement is logged instead
    pub collision_processing: bool,
    pub pickups_enabled: bool,
    pub tick_period_ms: u64,
    pub retarget_period_ms: u64,
    pub arena_width: f32,
    pub arena_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_speed: constants::GAME_SPEED_START,
            max_speed: constants::MAX_SPEED,
            speed_boost: constants::USE_SPEED_BOOST,
            pickup_radius: constants::PICKUP_RADIUS,
            pickup_sparsity: constants::PICKUP_SPARSITY,
            pickup_value: constants::PICKUP_VALUE,
            lives: constants::NUM_LIVES,
            adversary_count: constants::NUM_ADVERSARIES,
            dispersion_radius: constants::DISPERSION_RADIUS,
            actor_extent: constants::ACTOR_EXTENT,
            collision_processing: constants::COLLISION_PROCESSING,
            pickups_enabled: constants::PICKUPS_ENABLED,
            tick_period_ms: constants::TICK_PERIOD.as_millis() as u64,
            retarget_period_ms: constants::RETARGET_PERIOD.as_millis() as u64,
            arena_width: constants::ARENA_WIDTH,
            arena_height: constants::ARENA_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Defaults layered under `CITIZEN_PAC_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(GameConfig::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Extracts and validates the configuration.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: GameConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
            }
        }

        positive("start_speed", self.start_speed)?;
        positive("pickup_radius", self.pickup_radius)?;
        positive("pickup_sparsity", self.pickup_sparsity)?;
        positive("actor_extent", self.actor_extent)?;

        if !(self.max_speed.is_finite() && self.max_speed >= self.start_speed) {
            return Err(ConfigError::Invalid(format!(
                "max_speed ({}) must be at least start_speed ({})",
                self.max_speed, self.start_speed
            )));
        }
        if !(self.dispersion_radius.is_finite() && self.dispersion_radius >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "dispersion_radius must be non-negative, got {}",
                self.dispersion_radius
            )));
        }
        if self.lives == 0 {
            return Err(ConfigError::Invalid("lives must be at least 1".into()));
        }
        if self.tick_period_ms == 0 || self.retarget_period_ms == 0 {
            return Err(ConfigError::Invalid("timer periods must be non-zero".into()));
        }

        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn retarget_period(&self) -> Duration {
        Duration::from_millis(self.retarget_period_ms)
    }
}
