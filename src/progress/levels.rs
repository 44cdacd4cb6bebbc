//! XP and Level system
//!
//! Defines level thresholds, titles, and the progress-to-next-level math.

use serde::Serialize;

use crate::language::{Language, Localized};

/// Level definition
#[derive(Debug, Clone)]
pub struct Level {
    pub level: u32,
    pub xp_required: u32,
    pub title: Localized,
}

impl Level {
    pub fn title(&self, lang: Language) -> &'static str {
        self.title.get(lang)
    }
}

/// All level definitions (sorted by level, strictly increasing XP, first entry at 0 XP)
pub static LEVELS: &[Level] = &[
    Level {
        level: 1,
        xp_required: 0,
        title: Localized {
            en: "Little Seed",
            ru: "Семечко",
            uz: "Urug'cha",
        },
    },
    Level {
        level: 2,
        xp_required: 50,
        title: Localized {
            en: "Sprout",
            ru: "Росток",
            uz: "Nihol",
        },
    },
    Level {
        level: 3,
        xp_required: 120,
        title: Localized {
            en: "Sprout",
            ru: "Росток",
            uz: "Nihol",
        },
    },
    Level {
        level: 4,
        xp_required: 200,
        title: Localized {
            en: "Little Explorer",
            ru: "Юный исследователь",
            uz: "Kichik kashfiyotchi",
        },
    },
    Level {
        level: 5,
        xp_required: 300,
        title: Localized {
            en: "Little Explorer",
            ru: "Юный исследователь",
            uz: "Kichik kashfiyotchi",
        },
    },
    Level {
        level: 6,
        xp_required: 450,
        title: Localized {
            en: "Bright Star",
            ru: "Яркая звёздочка",
            uz: "Yorqin yulduzcha",
        },
    },
    Level {
        level: 7,
        xp_required: 650,
        title: Localized {
            en: "Bright Star",
            ru: "Яркая звёздочка",
            uz: "Yorqin yulduzcha",
        },
    },
    Level {
        level: 8,
        xp_required: 900,
        title: Localized {
            en: "Super Learner",
            ru: "Супер-ученик",
            uz: "Super o'quvchi",
        },
    },
    Level {
        level: 9,
        xp_required: 1200,
        title: Localized {
            en: "Super Learner",
            ru: "Супер-ученик",
            uz: "Super o'quvchi",
        },
    },
    Level {
        level: 10,
        xp_required: 1600,
        title: Localized {
            en: "Little Genius",
            ru: "Маленький гений",
            uz: "Kichik daho",
        },
    },
];

impl Level {
    /// Find the level reached with the given XP
    pub fn for_xp(xp: u32) -> &'static Level {
        LEVELS
            .iter()
            .rev()
            .find(|l| xp >= l.xp_required)
            .unwrap_or(&LEVELS[0])
    }

    /// Look up a level definition by number
    pub fn get(level: u32) -> Option<&'static Level> {
        LEVELS.iter().find(|l| l.level == level)
    }

    /// Get XP needed for next level (None if max level)
    pub fn xp_for_next(current_level: u32) -> Option<u32> {
        Self::get(current_level + 1).map(|l| l.xp_required)
    }

    pub fn max_level() -> u32 {
        LEVELS.last().map(|l| l.level).unwrap_or(1)
    }
}

/// Where the player stands inside their current level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelProgress {
    pub level: u32,
    /// XP earned since the current level's threshold
    pub points_into_level: u32,
    /// Width of the current level in XP (0 at max level)
    pub points_needed_for_level: u32,
    /// 0.0 - 100.0
    pub percentage: f32,
}

impl LevelProgress {
    pub fn new(experience: u32) -> Self {
        let current = Level::for_xp(experience);
        let points_into_level = experience - current.xp_required;

        match Level::xp_for_next(current.level) {
            Some(next) => {
                let width = next - current.xp_required;
                let percentage = if width == 0 {
                    100.0
                } else {
                    (points_into_level as f32 / width as f32 * 100.0).min(100.0)
                };
                Self {
                    level: current.level,
                    points_into_level,
                    points_needed_for_level: width,
                    percentage,
                }
            }
            // Max level: next threshold unreachable
            None => Self {
                level: current.level,
                points_into_level,
                points_needed_for_level: 0,
                percentage: 100.0,
            },
        }
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= Level::max_level()
    }

    /// XP still missing before the next level (0 at max level)
    pub fn remaining(&self) -> u32 {
        self.points_needed_for_level
            .saturating_sub(self.points_into_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_table_is_well_formed() {
        assert_eq!(LEVELS[0].xp_required, 0);
        assert_eq!(LEVELS[0].level, 1);
        for pair in LEVELS.windows(2) {
            assert!(pair[0].xp_required < pair[1].xp_required);
            assert_eq!(pair[0].level + 1, pair[1].level);
        }
    }

    #[test]
    fn test_level_for_xp() {
        assert_eq!(Level::for_xp(0).level, 1);
        assert_eq!(Level::for_xp(49).level, 1);
        assert_eq!(Level::for_xp(50).level, 2);
        assert_eq!(Level::for_xp(119).level, 2);
        assert_eq!(Level::for_xp(120).level, 3);
        assert_eq!(Level::for_xp(1600).level, 10);
        assert_eq!(Level::for_xp(100_000).level, 10); // Beyond max
    }

    #[test]
    fn test_xp_for_next() {
        assert_eq!(Level::xp_for_next(1), Some(50));
        assert_eq!(Level::xp_for_next(9), Some(1600));
        assert_eq!(Level::xp_for_next(Level::max_level()), None);
    }

    #[test]
    fn test_level_progress_mid_level() {
        let progress = LevelProgress::new(85); // Between level 2 (50) and level 3 (120)
        assert_eq!(progress.level, 2);
        assert_eq!(progress.points_into_level, 35);
        assert_eq!(progress.points_needed_for_level, 70);
        assert!((progress.percentage - 50.0).abs() < 0.01);
        assert_eq!(progress.remaining(), 35);
    }

    #[test]
    fn test_level_progress_at_max_level() {
        let progress = LevelProgress::new(5000);
        assert_eq!(progress.level, 10);
        assert!(progress.is_max_level());
        assert_eq!(progress.points_needed_for_level, 0);
        assert_eq!(progress.percentage, 100.0);
        assert_eq!(progress.remaining(), 0);
    }

    #[test]
    fn test_titles_are_localized() {
        let level = Level::for_xp(0);
        assert_eq!(level.title(Language::En), "Little Seed");
        assert_eq!(level.title(Language::Ru), "Семечко");
    }
}
