//! Derived roll-timing values computed from a finished stat block.
//!
//! These sit outside the allocation algorithm: they only read the final
//! adaptability and attunement.
//!
//! Formulas:
//! - Agility = floor(ADP × 0.75 + ATN × 0.25) + 85
//! - I-frames = step function of agility (5..=16)

use crate::stats::StatBlock;

/// Agility granted by adaptability and attunement.
pub fn calculate_agility(adaptability: u32, attunement: u32) -> u32 {
    (adaptability * 75 + attunement * 25) / 100 + 85
}

/// Invincibility frames of a roll at the given agility.
pub fn i_frames(agility: u32) -> u32 {
    // (minimum agility, frames), checked from the top
    const STEPS: [(u32, u32); 12] = [
        (116, 16),
        (113, 15),
        (111, 14),
        (109, 13),
        (108, 12),
        (106, 11),
        (105, 10),
        (103, 9),
        (102, 8),
        (101, 7),
        (100, 6),
        (99, 5),
    ];

    STEPS
        .iter()
        .find(|(threshold, _)| agility >= *threshold)
        .map_or(5, |(_, frames)| *frames)
}

/// Agility and i-frames of a stat block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollProfile {
    pub agility: u32,
    pub i_frames: u32,
}

impl RollProfile {
    /// Rolls with at least this many i-frames are considered good.
    pub const GOOD_ROLL_I_FRAMES: u32 = 10;

    pub fn from_stats(stats: &StatBlock) -> Self {
        let agility = calculate_agility(stats.adaptability, stats.attunement);
        Self {
            agility,
            i_frames: i_frames(agility),
        }
    }

    pub fn is_good_roll(&self) -> bool {
        self.i_frames >= Self::GOOD_ROLL_I_FRAMES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deprived_agility_and_frames() {
        assert_eq!(calculate_agility(6, 6), 91);
        assert_eq!(i_frames(91), 5);
    }

    #[test]
    fn agility_floors_fractional_part() {
        // 7 × 0.75 + 6 × 0.25 = 6.75
        assert_eq!(calculate_agility(7, 6), 91);
        // 20 × 0.75 + 10 × 0.25 = 17.5
        assert_eq!(calculate_agility(20, 10), 102);
    }

    #[test]
    fn frame_steps_at_thresholds() {
        assert_eq!(i_frames(98), 5);
        assert_eq!(i_frames(99), 5);
        assert_eq!(i_frames(100), 6);
        assert_eq!(i_frames(104), 9);
        assert_eq!(i_frames(105), 10);
        assert_eq!(i_frames(107), 11);
        assert_eq!(i_frames(110), 13);
        assert_eq!(i_frames(116), 16);
        assert_eq!(i_frames(200), 16);
    }

    #[test]
    fn roll_profile_flags_good_rolls() {
        let mut stats = StatBlock::uniform(6);
        assert!(!RollProfile::from_stats(&stats).is_good_roll());

        stats.adaptability = 30;
        stats.attunement = 10;
        let roll = RollProfile::from_stats(&stats);
        assert_eq!(roll.agility, 110);
        assert_eq!(roll.i_frames, 13);
        assert!(roll.is_good_roll());
    }
}
