//! Badge definitions and metadata
//!
//! All badges are defined here with their display names and XP rewards.
//! Unlock rules live in `checker.rs`.

use crate::language::{Language, Localized};

/// Unique identifier for each badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeId {
    // Games
    FirstGame,
    TenGames,
    TwentyFiveGames,
    PerfectScore,
    FivePerfect,

    // Stories
    StoryLover,
    Bookworm,

    // Streaks
    Streak3,
    Streak7,
    Streak14,
    Streak30,
}

impl BadgeId {
    /// Get the string ID used in persisted progress
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstGame => "first_game",
            Self::TenGames => "ten_games",
            Self::TwentyFiveGames => "twenty_five_games",
            Self::PerfectScore => "perfect_score",
            Self::FivePerfect => "five_perfect",
            Self::StoryLover => "story_lover",
            Self::Bookworm => "bookworm",
            Self::Streak3 => "streak_3",
            Self::Streak7 => "streak_7",
            Self::Streak14 => "streak_14",
            Self::Streak30 => "streak_30",
        }
    }

    /// Parse from a persisted string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_game" => Some(Self::FirstGame),
            "ten_games" => Some(Self::TenGames),
            "twenty_five_games" => Some(Self::TwentyFiveGames),
            "perfect_score" => Some(Self::PerfectScore),
            "five_perfect" => Some(Self::FivePerfect),
            "story_lover" => Some(Self::StoryLover),
            "bookworm" => Some(Self::Bookworm),
            "streak_3" => Some(Self::Streak3),
            "streak_7" => Some(Self::Streak7),
            "streak_14" => Some(Self::Streak14),
            "streak_30" => Some(Self::Streak30),
            _ => None,
        }
    }

    pub fn all() -> &'static [BadgeId] {
        &[
            Self::FirstGame,
            Self::TenGames,
            Self::TwentyFiveGames,
            Self::PerfectScore,
            Self::FivePerfect,
            Self::StoryLover,
            Self::Bookworm,
            Self::Streak3,
            Self::Streak7,
            Self::Streak14,
            Self::Streak30,
        ]
    }
}

/// Badge category for grouping in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeCategory {
    Games,
    Stories,
    Streaks,
}

impl BadgeCategory {
    pub fn label(&self, lang: Language) -> &'static str {
        let text = match self {
            Self::Games => Localized {
                en: "Games",
                ru: "Игры",
                uz: "O'yinlar",
            },
            Self::Stories => Localized {
                en: "Stories",
                ru: "Сказки",
                uz: "Ertaklar",
            },
            Self::Streaks => Localized {
                en: "Streaks",
                ru: "Серии",
                uz: "Ketma-ketlik",
            },
        };
        text.get(lang)
    }

    pub fn all() -> &'static [BadgeCategory] {
        &[Self::Games, Self::Stories, Self::Streaks]
    }
}

/// Badge definition with all metadata
#[derive(Debug, Clone)]
pub struct Badge {
    pub id: BadgeId,
    pub name: Localized,
    pub description: Localized,
    pub icon: &'static str,
    pub category: BadgeCategory,
    pub xp_reward: u32,
}

impl Badge {
    pub fn display_name(&self, lang: Language) -> &'static str {
        self.name.get(lang)
    }
}

/// All badge definitions
pub static BADGES: &[Badge] = &[
    // === GAMES ===
    Badge {
        id: BadgeId::FirstGame,
        name: Localized {
            en: "First Game",
            ru: "Первая игра",
            uz: "Birinchi o'yin",
        },
        description: Localized {
            en: "Finish your very first game",
            ru: "Закончи свою первую игру",
            uz: "Birinchi o'yiningni tugat",
        },
        icon: "🎈",
        category: BadgeCategory::Games,
        xp_reward: 0,
    },
    Badge {
        id: BadgeId::TenGames,
        name: Localized {
            en: "Game Explorer",
            ru: "Исследователь игр",
            uz: "O'yin kashfiyotchisi",
        },
        description: Localized {
            en: "Finish 10 games",
            ru: "Закончи 10 игр",
            uz: "10 ta o'yinni tugat",
        },
        icon: "🧩",
        category: BadgeCategory::Games,
        xp_reward: 25,
    },
    Badge {
        id: BadgeId::TwentyFiveGames,
        name: Localized {
            en: "Game Champion",
            ru: "Чемпион игр",
            uz: "O'yin chempioni",
        },
        description: Localized {
            en: "Finish 25 games",
            ru: "Закончи 25 игр",
            uz: "25 ta o'yinni tugat",
        },
        icon: "🏆",
        category: BadgeCategory::Games,
        xp_reward: 50,
    },
    Badge {
        id: BadgeId::PerfectScore,
        name: Localized {
            en: "Perfect Score",
            ru: "Без ошибок",
            uz: "Mukammal natija",
        },
        description: Localized {
            en: "Finish a game without a single mistake",
            ru: "Пройди игру без единой ошибки",
            uz: "O'yinni birorta xatosiz tugat",
        },
        icon: "⭐",
        category: BadgeCategory::Games,
        xp_reward: 20,
    },
    Badge {
        id: BadgeId::FivePerfect,
        name: Localized {
            en: "Sharp Eye",
            ru: "Зоркий глаз",
            uz: "O'tkir ko'z",
        },
        description: Localized {
            en: "Get a perfect score 5 times",
            ru: "Получи идеальный результат 5 раз",
            uz: "5 marta mukammal natija ol",
        },
        icon: "🦉",
        category: BadgeCategory::Games,
        xp_reward: 40,
    },
    // === STORIES ===
    Badge {
        id: BadgeId::StoryLover,
        name: Localized {
            en: "Story Lover",
            ru: "Любитель сказок",
            uz: "Ertak ishqibozi",
        },
        description: Localized {
            en: "Read 5 different stories",
            ru: "Прочитай 5 разных сказок",
            uz: "5 xil ertak o'qi",
        },
        icon: "📖",
        category: BadgeCategory::Stories,
        xp_reward: 25,
    },
    Badge {
        id: BadgeId::Bookworm,
        name: Localized {
            en: "Bookworm",
            ru: "Книжный червячок",
            uz: "Kitobxon",
        },
        description: Localized {
            en: "Read 20 different stories",
            ru: "Прочитай 20 разных сказок",
            uz: "20 xil ertak o'qi",
        },
        icon: "🐛",
        category: BadgeCategory::Stories,
        xp_reward: 60,
    },
    // === STREAKS ===
    Badge {
        id: BadgeId::Streak3,
        name: Localized {
            en: "Three in a Row",
            ru: "Три дня подряд",
            uz: "Uch kun ketma-ket",
        },
        description: Localized {
            en: "Visit 3 days in a row",
            ru: "Заходи 3 дня подряд",
            uz: "3 kun ketma-ket kir",
        },
        icon: "🔥",
        category: BadgeCategory::Streaks,
        xp_reward: 15,
    },
    Badge {
        id: BadgeId::Streak7,
        name: Localized {
            en: "Week of Fun",
            ru: "Неделя веселья",
            uz: "Quvnoq hafta",
        },
        description: Localized {
            en: "Visit 7 days in a row",
            ru: "Заходи 7 дней подряд",
            uz: "7 kun ketma-ket kir",
        },
        icon: "🌈",
        category: BadgeCategory::Streaks,
        xp_reward: 40,
    },
    Badge {
        id: BadgeId::Streak14,
        name: Localized {
            en: "Two Happy Weeks",
            ru: "Две счастливые недели",
            uz: "Ikki baxtli hafta",
        },
        description: Localized {
            en: "Visit 14 days in a row",
            ru: "Заходи 14 дней подряд",
            uz: "14 kun ketma-ket kir",
        },
        icon: "🌟",
        category: BadgeCategory::Streaks,
        xp_reward: 75,
    },
    Badge {
        id: BadgeId::Streak30,
        name: Localized {
            en: "Month Hero",
            ru: "Герой месяца",
            uz: "Oy qahramoni",
        },
        description: Localized {
            en: "Visit 30 days in a row",
            ru: "Заходи 30 дней подряд",
            uz: "30 kun ketma-ket kir",
        },
        icon: "👑",
        category: BadgeCategory::Streaks,
        xp_reward: 150,
    },
];

impl Badge {
    /// Get a badge definition by ID
    pub fn get(id: BadgeId) -> Option<&'static Badge> {
        BADGES.iter().find(|b| b.id == id)
    }

    /// Get a badge definition by its string ID
    pub fn find(id: &str) -> Option<&'static Badge> {
        BadgeId::from_str(id).and_then(Self::get)
    }

    pub fn total_count() -> usize {
        BADGES.len()
    }

    pub fn in_category(category: BadgeCategory) -> impl Iterator<Item = &'static Badge> {
        BADGES.iter().filter(move |b| b.category == category)
    }
}
