//! Text rendering of notifications and progress

use kinderxp::config::Config;
use kinderxp::{GamificationEvent, Language};

/// One line describing an event
pub fn describe(event: &GamificationEvent, lang: Language) -> String {
    match event {
        GamificationEvent::XpAwarded { amount, reason } => format!("+{} XP ({})", amount, reason),
        GamificationEvent::LevelUp(up) => format!(
            "🎉 Level up! {} → {} \"{}\"",
            up.old_level,
            up.new_level,
            up.title(lang)
        ),
        GamificationEvent::BadgeUnlocked(badge) if badge.xp_reward == 0 => format!(
            "{} Badge unlocked: {}",
            badge.icon,
            badge.display_name(lang)
        ),
        GamificationEvent::BadgeUnlocked(badge) => format!(
            "{} Badge unlocked: {} (+{} XP)",
            badge.icon,
            badge.display_name(lang),
            badge.xp_reward
        ),
        GamificationEvent::DailyRewardGranted { streak_day, amount } => {
            format!("🎁 Daily reward (day {}): +{} XP", streak_day, amount)
        }
        GamificationEvent::StreakExtended { days } => format!("🔥 {}-day streak", days),
    }
}

/// Print events with their auto-dismiss time
pub fn print_events(events: &[GamificationEvent], config: &Config) {
    let lang = config.display.language;
    for event in events {
        if event.is_celebration() {
            let shown_for = config.notifications.display_for(event.kind());
            println!("  {}  [{}s]", describe(event, lang), shown_for.as_secs());
        } else {
            println!("    {}", describe(event, lang));
        }
    }
}

/// Fixed-width text progress bar for a 0-100 percentage
pub fn progress_bar(percentage: f32, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f32).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled.min(width)),
        "-".repeat(width - filled.min(width))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinderxp::progress::{Badge, LevelUp};

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0, 10), "[----------]");
        assert_eq!(progress_bar(50.0, 10), "[#####-----]");
        assert_eq!(progress_bar(100.0, 4), "[####]");
        assert_eq!(progress_bar(250.0, 4), "[####]");
    }

    #[test]
    fn test_describe_level_up() {
        let event = GamificationEvent::LevelUp(LevelUp {
            old_level: 1,
            new_level: 2,
        });
        assert_eq!(describe(&event, Language::En), "🎉 Level up! 1 → 2 \"Sprout\"");
    }

    #[test]
    fn test_describe_badge_localized() {
        let badge = Badge::find("perfect_score").unwrap();
        let text = describe(&GamificationEvent::BadgeUnlocked(badge), Language::En);
        assert!(text.contains("+20 XP"));

        let badge = Badge::find("first_game").unwrap();
        let text = describe(&GamificationEvent::BadgeUnlocked(badge), Language::Ru);
        assert!(text.contains("Первая игра"));
        assert!(!text.contains("XP"));
    }
}
