//! Flappy - terminal Flappy Bird
//!
//! The simulation lives in [`core`] and has no terminal dependencies. The
//! binary wraps it in a crossterm/ratatui shell; [`simulator`] drives it
//! headless.

pub mod build_info;
pub mod core;
pub mod error;
pub mod input;
pub mod simulator;
pub mod ui;

pub use crate::core::{FlappyEngine, GameConfig, Snapshot};
