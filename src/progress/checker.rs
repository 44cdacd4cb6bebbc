//! Badge unlock rules
//!
//! Each check returns the badges whose threshold is met and which are not
//! yet unlocked. Awarding stays with the caller.

use super::badges::BadgeId;

fn check_milestones(count: u32, milestones: &[(u32, BadgeId)], unlocked: &[String]) -> Vec<BadgeId> {
    milestones
        .iter()
        .filter(|(threshold, id)| count >= *threshold && !unlocked.iter().any(|u| u == id.as_str()))
        .map(|(_, id)| *id)
        .collect()
}

/// Game badges from the lifetime game counters
pub fn check_game_badges(
    games_completed: u32,
    perfect_score_count: u32,
    unlocked: &[String],
) -> Vec<BadgeId> {
    let mut newly_unlocked = check_milestones(
        games_completed,
        &[
            (1, BadgeId::FirstGame),
            (10, BadgeId::TenGames),
            (25, BadgeId::TwentyFiveGames),
        ],
        unlocked,
    );

    newly_unlocked.extend(check_milestones(
        perfect_score_count,
        &[(1, BadgeId::PerfectScore), (5, BadgeId::FivePerfect)],
        unlocked,
    ));

    newly_unlocked
}

/// Story badges from the number of distinct stories read
pub fn check_story_badges(stories_read: u32, unlocked: &[String]) -> Vec<BadgeId> {
    check_milestones(
        stories_read,
        &[(5, BadgeId::StoryLover), (20, BadgeId::Bookworm)],
        unlocked,
    )
}

/// Streak badges from the current login streak
pub fn check_streak_badges(login_streak: u32, unlocked: &[String]) -> Vec<BadgeId> {
    check_milestones(
        login_streak,
        &[
            (3, BadgeId::Streak3),
            (7, BadgeId::Streak7),
            (14, BadgeId::Streak14),
            (30, BadgeId::Streak30),
        ],
        unlocked,
    )
}
