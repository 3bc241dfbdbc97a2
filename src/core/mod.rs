//! Core game state and logic.

pub mod clock;
pub mod config;
pub mod constants;
pub mod engine;
pub mod geometry;
pub mod snapshot;

pub use clock::FrameClock;
pub use config::GameConfig;
pub use engine::{FlappyEngine, TickOutcome};
pub use geometry::Rect;
pub use snapshot::{BirdSprite, Snapshot};
