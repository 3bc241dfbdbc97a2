//! Scripted stand-ins for a player.

use crate::core::snapshot::{BirdSprite, Snapshot};
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AutopilotPolicy {
    /// Never flaps.
    Idle,
    /// Flaps on any tick with probability `flap_chance`.
    Random { flap_chance: f64 },
    /// Flaps while the bird sits below the centre of the gap and is not
    /// already rising.
    GapSeeker,
}

impl AutopilotPolicy {
    /// Parse a policy name as given on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "idle" => Some(Self::Idle),
            "random" => Some(Self::Random { flap_chance: 0.05 }),
            "gap" | "seeker" => Some(Self::GapSeeker),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Random { .. } => "random",
            Self::GapSeeker => "gap",
        }
    }

    /// Decide whether to request an impulse on the next tick.
    pub fn wants_flap<R: Rng>(&self, snapshot: &Snapshot, rng: &mut R) -> bool {
        match *self {
            Self::Idle => false,
            Self::Random { flap_chance } => rng.gen_bool(flap_chance.clamp(0.0, 1.0)),
            Self::GapSeeker => {
                let bird_center = snapshot.bird.top() + snapshot.bird.h / 2;
                snapshot.sprite == BirdSprite::Glide && bird_center > snapshot.gap_center_y()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Rect;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn snapshot(bird_y: i32, sprite: BirdSprite) -> Snapshot {
        Snapshot {
            bird: Rect::new(65, bird_y, 50, 50),
            bird_y: bird_y as f64,
            sprite,
            upper_wall: Rect::new(300, -140, 70, 500),
            lower_wall: Rect::new(300, 500, 70, 500),
            wall_x: 300,
            gap_offset: 0,
            counter: 0,
            dead: false,
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(AutopilotPolicy::from_name("idle"), Some(AutopilotPolicy::Idle));
        assert_eq!(AutopilotPolicy::from_name("gap"), Some(AutopilotPolicy::GapSeeker));
        assert!(matches!(
            AutopilotPolicy::from_name("random"),
            Some(AutopilotPolicy::Random { .. })
        ));
        assert_eq!(AutopilotPolicy::from_name("nope"), None);
    }

    #[test]
    fn test_idle_never_flaps() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let snap = snapshot(600, BirdSprite::Glide);
        assert!(!AutopilotPolicy::Idle.wants_flap(&snap, &mut rng));
    }

    #[test]
    fn test_gap_seeker() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let policy = AutopilotPolicy::GapSeeker;
        // Gap centre is 430.
        assert!(policy.wants_flap(&snapshot(450, BirdSprite::Glide), &mut rng));
        assert!(!policy.wants_flap(&snapshot(300, BirdSprite::Glide), &mut rng));
        assert!(!policy.wants_flap(&snapshot(450, BirdSprite::Flap), &mut rng));
    }

    #[test]
    fn test_random_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let snap = snapshot(300, BirdSprite::Glide);
        let always = AutopilotPolicy::Random { flap_chance: 1.0 };
        let never = AutopilotPolicy::Random { flap_chance: 0.0 };
        for _ in 0..20 {
            assert!(always.wants_flap(&snap, &mut rng));
            assert!(!never.wants_flap(&snap, &mut rng));
        }
    }
}
