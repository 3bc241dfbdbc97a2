//! The simulation engine: one bird, one wall pair, one tick at a time.
//!
//! The engine is cadence-agnostic. Callers decide how often to tick it and
//! pass in whether the player asked for an impulse since the last tick.

use super::config::GameConfig;
use super::geometry::Rect;
use super::snapshot::{BirdSprite, Snapshot};
use rand::Rng;

/// What happened during a single tick. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The wall pair scrolled past the recycle line and respawned.
    pub recycled: bool,
    /// The bird hit a wall this tick (it was alive before).
    pub collided: bool,
    /// The bird left the vertical band and the run was reset.
    pub revived: bool,
}

/// Complete mutable game state.
#[derive(Debug, Clone)]
pub struct FlappyEngine {
    pub config: GameConfig,

    // Bird
    /// Vertical position of the bird's top edge (real-valued).
    pub bird_y: f64,
    /// Ticks of upward impulse left.
    pub jump_remaining: u32,
    /// Current upward speed; decays by one per jumping tick.
    pub jump_speed: i32,
    /// Current fall speed; grows every tick the bird is not jumping.
    pub gravity: f64,

    // Walls
    pub wall_x: i32,
    /// Vertical shift of the gap centre, in `[gap_offset_min, gap_offset_max]`.
    pub gap_offset: i32,

    // Run
    /// Walls passed since the last revival.
    pub counter: u32,
    pub dead: bool,
    /// Total ticks advanced since construction.
    pub ticks: u64,
    /// Number of revivals since construction.
    pub revivals: u32,
}

impl FlappyEngine {
    /// Build an engine from `config` and draw the first gap offset.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let mut engine = Self {
            bird_y: config.bird_start_y,
            jump_remaining: config.jump_ticks,
            jump_speed: config.jump_speed,
            gravity: config.gravity_base,
            wall_x: config.wall_start_x,
            gap_offset: 0,
            counter: 0,
            dead: false,
            ticks: 0,
            revivals: 0,
            config,
        };
        engine.randomize_gap(rng);
        engine
    }

    /// Advance the simulation by one tick.
    ///
    /// Walls keep scrolling while the bird is dead, and the bird keeps moving
    /// too. Only leaving the vertical band brings it back to life.
    pub fn tick<R: Rng>(&mut self, impulse_requested: bool, rng: &mut R) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        self.ticks += 1;

        if impulse_requested && !self.dead {
            self.start_jump();
        }

        outcome.recycled = self.advance_walls(rng);

        self.advance_bird();

        let bird = self.bird_rect();
        if bird.intersects(&self.upper_wall_rect()) || bird.intersects(&self.lower_wall_rect()) {
            outcome.collided = !self.dead;
            self.dead = true;
        }

        if !self.in_bounds() {
            self.revive(rng);
            outcome.revived = true;
        }

        outcome
    }

    /// Grant a fresh impulse. Retriggers mid-arc; there is no cooldown.
    fn start_jump(&mut self) {
        self.jump_remaining = self.config.jump_ticks;
        self.gravity = self.config.gravity_base;
        self.jump_speed = self.config.jump_speed;
    }

    /// Scroll the wall pair left, recycling it past the threshold.
    /// Returns true on recycle.
    fn advance_walls<R: Rng>(&mut self, rng: &mut R) -> bool {
        self.wall_x -= self.config.wall_scroll_speed;
        if self.wall_x < self.config.wall_recycle_x {
            self.wall_x = self.config.wall_start_x;
            self.counter += 1;
            self.randomize_gap(rng);
            return true;
        }
        false
    }

    fn advance_bird(&mut self) {
        if self.jump_remaining > 0 {
            self.jump_speed -= 1;
            self.bird_y -= f64::from(self.jump_speed);
            self.jump_remaining -= 1;
        } else {
            self.bird_y += self.gravity;
            self.gravity += self.config.gravity_growth;
        }
    }

    /// True while the bird's top edge is strictly inside the bounds band.
    pub fn in_bounds(&self) -> bool {
        let y = self.bird_rect().y;
        self.config.bounds_top < y && y < self.config.bounds_bottom
    }

    /// Reset the run: bird back near the top, score cleared, fresh wall.
    /// Jump state is left as is.
    fn revive<R: Rng>(&mut self, rng: &mut R) {
        self.bird_y = self.config.bird_revive_y;
        self.dead = false;
        self.counter = 0;
        self.wall_x = self.config.wall_start_x;
        self.randomize_gap(rng);
        self.gravity = self.config.gravity_base;
        self.revivals += 1;
    }

    fn randomize_gap<R: Rng>(&mut self, rng: &mut R) {
        self.gap_offset = rng.gen_range(self.config.gap_offset_min..=self.config.gap_offset_max);
    }

    /// True while an impulse is still pushing the bird up.
    pub fn is_jumping(&self) -> bool {
        self.jump_remaining > 0
    }

    /// Bird hitbox. The real-valued position is truncated toward zero.
    pub fn bird_rect(&self) -> Rect {
        Rect::new(
            self.config.bird_x,
            self.bird_y as i32,
            self.config.bird_width,
            self.config.bird_height,
        )
    }

    /// Hitbox of the segment hanging from the top of the screen.
    pub fn upper_wall_rect(&self) -> Rect {
        let c = &self.config;
        Rect::new(
            self.wall_x,
            -c.gap - self.gap_offset - c.wall_hitbox_inset,
            c.wall_hitbox_width(),
            c.wall_height,
        )
    }

    /// Hitbox of the segment rising from the bottom of the screen.
    pub fn lower_wall_rect(&self) -> Rect {
        let c = &self.config;
        Rect::new(
            self.wall_x,
            c.gap - self.gap_offset + c.wall_hitbox_inset + c.lower_wall_base_y,
            c.wall_hitbox_width(),
            c.wall_height,
        )
    }

    pub fn sprite(&self) -> BirdSprite {
        if self.dead {
            BirdSprite::Dead
        } else if self.is_jumping() {
            BirdSprite::Flap
        } else {
            BirdSprite::from_index(self.config.bird_sprite).unwrap_or(BirdSprite::Glide)
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            bird: self.bird_rect(),
            bird_y: self.bird_y,
            sprite: self.sprite(),
            upper_wall: self.upper_wall_rect(),
            lower_wall: self.lower_wall_rect(),
            wall_x: self.wall_x,
            gap_offset: self.gap_offset,
            counter: self.counter,
            dead: self.dead,
        }
    }
}
