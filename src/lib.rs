//! Simulation core for a toroidal pickup-and-avoid arcade game.

pub mod arena;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod input;
pub mod logging;
pub mod platform;
