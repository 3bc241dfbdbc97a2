//! Bird and wall sprites for the terminal renderer.
//!
//! Sprites are embedded glyph art. They are still loaded and validated at
//! startup, and a broken sprite aborts the game before the terminal is taken
//! over.

use crate::core::constants::{WALL_SPRITE_HEIGHT, WALL_SPRITE_WIDTH};
use crate::core::snapshot::BirdSprite;
use crate::error::{Result, ShellError};

const GLIDE_ART: &str = "  _ \n(o)>";
const FLAP_ART: &str = "\\ / \n(o)>";
const DEAD_ART: &str = "  _ \n(x)<";

/// A rectangular block of glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub name: &'static str,
    pub lines: Vec<&'static str>,
    pub width: usize,
    pub height: usize,
}

impl Sprite {
    /// Parse glyph art. Every line must have the same (non-zero) width.
    pub fn parse(name: &'static str, art: &'static str) -> Result<Self> {
        let lines: Vec<&'static str> = art.lines().collect();
        if lines.is_empty() {
            return Err(ShellError::asset(name, "sprite art is empty"));
        }

        let width = lines[0].chars().count();
        if width == 0 {
            return Err(ShellError::asset(name, "first line is blank"));
        }
        if let Some((row, line)) = lines
            .iter()
            .enumerate()
            .find(|(_, line)| line.chars().count() != width)
        {
            return Err(ShellError::asset(
                name,
                format!(
                    "line {} is {} glyphs wide, expected {}",
                    row + 1,
                    line.chars().count(),
                    width
                ),
            ));
        }

        Ok(Self {
            name,
            height: lines.len(),
            lines,
            width,
        })
    }
}

/// Everything the renderer draws with.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    /// Indexed by [`BirdSprite::index`]: glide, flap, dead.
    pub bird: [Sprite; 3],
    pub wall_body: char,
    pub wall_cap: char,
    /// World-space size of the wall artwork, fed to the engine's hitboxes.
    pub wall_size: (i32, i32),
}

impl SpriteSheet {
    pub fn load() -> Result<Self> {
        Ok(Self {
            bird: [
                Sprite::parse("glide", GLIDE_ART)?,
                Sprite::parse("flap", FLAP_ART)?,
                Sprite::parse("dead", DEAD_ART)?,
            ],
            wall_body: '█',
            wall_cap: '▓',
            wall_size: (WALL_SPRITE_WIDTH, WALL_SPRITE_HEIGHT),
        })
    }

    pub fn bird(&self, sprite: BirdSprite) -> &Sprite {
        &self.bird[sprite.index()]
    }
}
