// World dimensions (the playfield the walls and bird live in)
pub const WORLD_WIDTH: i32 = 400;
pub const WORLD_HEIGHT: i32 = 708;

// Walls
pub const GAP: i32 = 130;
pub const WALL_START_X: i32 = 400;
pub const WALL_SCROLL_SPEED: i32 = 2;
pub const WALL_RECYCLE_X: i32 = -80;
pub const GAP_OFFSET_MIN: i32 = -110;
pub const GAP_OFFSET_MAX: i32 = 110;
pub const LOWER_WALL_BASE_Y: i32 = 360;
pub const WALL_HITBOX_INSET: i32 = 10;

// Wall sprite dimensions in world units
pub const WALL_SPRITE_WIDTH: i32 = 80;
pub const WALL_SPRITE_HEIGHT: i32 = 500;

// Bird
pub const BIRD_X: i32 = 65;
pub const BIRD_WIDTH: i32 = 50;
pub const BIRD_HEIGHT: i32 = 50;
pub const BIRD_START_Y: f64 = 350.0;
pub const BIRD_REVIVE_Y: f64 = 50.0;
pub const BIRD_SPRITE: usize = 0;

// Kinematics
pub const JUMP_TICKS: u32 = 17;
pub const JUMP_SPEED: i32 = 10;
pub const GRAVITY_BASE: f64 = 5.0;
pub const GRAVITY_GROWTH: f64 = 0.2;

// Vertical band the bird must stay inside (exclusive on both ends)
pub const BOUNDS_TOP: i32 = 0;
pub const BOUNDS_BOTTOM: i32 = 720;

// Real-time frame rate
pub const TICKS_PER_SECOND: u64 = 60;
pub const FRAME_MICROS: u64 = 1_000_000 / TICKS_PER_SECOND; // 16_666µs
pub const MAX_FRAME_CATCHUP_MS: u64 = 100;
