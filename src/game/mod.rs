//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! A driver owns the tick schedule and calls into [`GameEngine`] explicitly.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{GameEngine, TickResult};
pub use state::{CollisionType, GameState, Position, Snake};
