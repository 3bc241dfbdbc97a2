//! Terminal rendering.

pub mod flappy_scene;
pub mod game_common;
pub mod sprites;

pub use flappy_scene::render_flappy;
pub use sprites::SpriteSheet;
