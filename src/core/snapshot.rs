//! Read-only per-frame view of the engine for renderers.

use super::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Which bird sprite to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BirdSprite {
    /// Falling or drifting with no impulse active.
    Glide,
    /// An impulse is still pushing the bird upward.
    Flap,
    Dead,
}

impl BirdSprite {
    /// Index into a three-frame sprite sheet (glide, flap, dead).
    pub fn index(self) -> usize {
        match self {
            Self::Glide => 0,
            Self::Flap => 1,
            Self::Dead => 2,
        }
    }

    /// Inverse of [`BirdSprite::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Glide),
            1 => Some(Self::Flap),
            2 => Some(Self::Dead),
            _ => None,
        }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub bird: Rect,
    pub bird_y: f64,
    pub sprite: BirdSprite,
    pub upper_wall: Rect,
    pub lower_wall: Rect,
    pub wall_x: i32,
    pub gap_offset: i32,
    pub counter: u32,
    pub dead: bool,
}

impl Snapshot {
    /// Vertical centre of the passable gap.
    pub fn gap_center_y(&self) -> i32 {
        (self.upper_wall.bottom() + self.lower_wall.top()) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_indices_are_distinct() {
        assert_eq!(BirdSprite::Glide.index(), 0);
        assert_eq!(BirdSprite::Flap.index(), 1);
        assert_eq!(BirdSprite::Dead.index(), 2);
    }

    #[test]
    fn test_from_index_inverts_index() {
        for sprite in [BirdSprite::Glide, BirdSprite::Flap, BirdSprite::Dead] {
            assert_eq!(BirdSprite::from_index(sprite.index()), Some(sprite));
        }
        assert_eq!(BirdSprite::from_index(3), None);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = Snapshot {
            bird: Rect::new(65, 350, 50, 50),
            bird_y: 350.0,
            sprite: BirdSprite::Flap,
            upper_wall: Rect::new(400, -140, 70, 500),
            lower_wall: Rect::new(400, 500, 70, 500),
            wall_x: 400,
            gap_offset: 0,
            counter: 3,
            dead: false,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"sprite\":\"Flap\""));
        assert!(json.contains("\"counter\":3"));
        assert_eq!(snapshot.gap_center_y(), 430);
    }
}
