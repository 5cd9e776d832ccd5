//! Grid Snake - a single-player snake game for the terminal
//!
//! This library provides:
//! - Core game logic with no I/O (game module)
//! - A primitive drawing contract plus its ratatui implementation (render module)
//! - Keyboard mapping (input module)
//! - The periodic tick source and the interactive driver (timer, modes modules)

pub mod game;
pub mod input;
pub mod logging;
pub mod modes;
pub mod render;
pub mod timer;
