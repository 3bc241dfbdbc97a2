//! Game configuration.
//!
//! All values are fixed at load time and never change while the engine runs.
//! Sprite dimensions live here rather than being read from image assets so
//! wall geometry can be computed (and tested) without any artwork.

use super::constants::*;
use serde::{Deserialize, Serialize};

/// Immutable game parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Half-height of the passable gap between the wall segments.
    pub gap: i32,
    /// X position a wall pair spawns (and respawns) at.
    pub wall_start_x: i32,
    /// Wall movement per tick (leftward).
    pub wall_scroll_speed: i32,
    /// A wall pair recycles once `wall_x` drops below this.
    pub wall_recycle_x: i32,
    /// Inclusive range the gap offset is drawn from.
    pub gap_offset_min: i32,
    pub gap_offset_max: i32,
    /// Y the lower segment is anchored at before gap/offset are applied.
    pub lower_wall_base_y: i32,
    /// Hitbox shrink applied to wall width and to the gap edges.
    pub wall_hitbox_inset: i32,
    pub wall_width: i32,
    pub wall_height: i32,

    pub bird_x: i32,
    pub bird_width: i32,
    pub bird_height: i32,
    pub bird_start_y: f64,
    pub bird_revive_y: f64,
    /// Sprite shown while the bird is alive and not jumping. Cosmetic only;
    /// an index outside the sheet falls back to the glide sprite.
    pub bird_sprite: usize,

    /// Number of ticks an impulse keeps pushing the bird upward.
    pub jump_ticks: u32,
    pub jump_speed: i32,
    pub gravity_base: f64,
    pub gravity_growth: f64,

    /// Exclusive vertical band; leaving it triggers a revival.
    pub bounds_top: i32,
    pub bounds_bottom: i32,
}

impl GameConfig {
    /// Load the configuration. Currently always the built-in constants.
    pub fn load() -> Self {
        Self {
            gap: GAP,
            wall_start_x: WALL_START_X,
            wall_scroll_speed: WALL_SCROLL_SPEED,
            wall_recycle_x: WALL_RECYCLE_X,
            gap_offset_min: GAP_OFFSET_MIN,
            gap_offset_max: GAP_OFFSET_MAX,
            lower_wall_base_y: LOWER_WALL_BASE_Y,
            wall_hitbox_inset: WALL_HITBOX_INSET,
            wall_width: WALL_SPRITE_WIDTH,
            wall_height: WALL_SPRITE_HEIGHT,

            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            bird_start_y: BIRD_START_Y,
            bird_revive_y: BIRD_REVIVE_Y,
            bird_sprite: BIRD_SPRITE,

            jump_ticks: JUMP_TICKS,
            jump_speed: JUMP_SPEED,
            gravity_base: GRAVITY_BASE,
            gravity_growth: GRAVITY_GROWTH,

            bounds_top: BOUNDS_TOP,
            bounds_bottom: BOUNDS_BOTTOM,
        }
    }

    /// Replace the wall sprite dimensions, e.g. with the size of loaded artwork.
    pub fn with_wall_size(mut self, width: i32, height: i32) -> Self {
        self.wall_width = width;
        self.wall_height = height;
        self
    }

    /// Width of a wall hitbox: the sprite width minus the inset.
    pub fn wall_hitbox_width(&self) -> i32 {
        self.wall_width - self.wall_hitbox_inset
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::load()
    }
}
