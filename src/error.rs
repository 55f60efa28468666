//! Centralized error types for the simulation.
//!
//! Pure helpers (arena bounds, pickup layout) report invalid input through their own
//! error enums; [`GameError`] collects them for the orchestration layer.

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Arena error: {0}")]
    Arena(#[from] ArenaError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

/// Errors raised while loading or validating configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] figment::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors related to arena bounds.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ArenaError {
    #[error("Arena dimensions must be finite and at least 1.0, got {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
}

/// Errors raised by the pickup grid layout.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Arena dimensions must be positive, got {width}x{height}")]
    NonPositiveDimensions { width: f32, height: f32 },

    #[error("Pickup radius and sparsity must be positive, got radius {radius} and sparsity {sparsity}")]
    InvalidCell { radius: f32, sparsity: f32 },

    #[error("Arena {axis} of {size} must exceed twice the cell pitch ({pitch})")]
    ArenaTooSmall { axis: &'static str, size: f32, pitch: f32 },

    #[error("A {nx}x{ny} pickup grid exceeds the limit of {max} cells")]
    TooManyCells { nx: usize, ny: usize, max: usize },
}

/// Errors related to the actor collection of a scene.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("There can only be one player per scene")]
    DuplicatePlayer,

    #[error("Scene has no player; it must be generated first")]
    MissingPlayer,

    #[error("Scene has already been generated")]
    AlreadyGenerated,

    #[error("Adversary not found: {0}")]
    AdversaryIndex(usize),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
