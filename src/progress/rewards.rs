//! XP rewards for activities and the daily reward schedule

/// XP rewards for reported activities
pub struct XpRewards;

impl XpRewards {
    /// Base XP for finishing any game
    pub const GAME_BASE: u32 = 10;

    /// Extra XP scaled by the score percentage
    pub const GAME_BONUS_RANGE: u32 = 20;

    /// XP for reading a story
    pub const STORY_READ: u32 = 5;

    /// XP for finishing a game with `score` out of `max_score`.
    pub fn for_game(score: u32, max_score: u32) -> u32 {
        if max_score == 0 {
            return Self::GAME_BASE;
        }
        // Integer floor(score / max_score * range), score capped at max_score
        let score = score.min(max_score) as u64;
        let bonus = score * Self::GAME_BONUS_RANGE as u64 / max_score as u64;
        Self::GAME_BASE + bonus as u32
    }
}

/// Score as a fraction in `[0, 1]`; a zero `max_score` counts as 0%.
pub fn score_fraction(score: u32, max_score: u32) -> f64 {
    if max_score == 0 {
        return 0.0;
    }
    (score as f64 / max_score as f64).min(1.0)
}

/// Daily reward XP for streak days 1..=7; later days repeat day 7
pub static DAILY_REWARDS: [u32; 7] = [10, 15, 20, 25, 30, 40, 50];

/// Daily reward lookups
pub struct DailyRewardSchedule;

impl DailyRewardSchedule {
    /// Map a login streak onto a schedule day (1..=7)
    pub fn day_for_streak(login_streak: u32) -> u32 {
        login_streak.clamp(1, DAILY_REWARDS.len() as u32)
    }

    /// XP granted when claiming with the given login streak
    pub fn reward_for_streak(login_streak: u32) -> u32 {
        let day = Self::day_for_streak(login_streak);
        DAILY_REWARDS[(day - 1) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_reward() {
        assert_eq!(XpRewards::for_game(80, 100), 10 + 16);
        assert_eq!(XpRewards::for_game(100, 100), 30);
        assert_eq!(XpRewards::for_game(0, 100), 10);
        // 1/3 of 20 = 6.66 -> 6
        assert_eq!(XpRewards::for_game(1, 3), 16);
    }

    #[test]
    fn test_game_reward_zero_max_score() {
        assert_eq!(score_fraction(5, 0), 0.0);
        assert_eq!(XpRewards::for_game(5, 0), XpRewards::GAME_BASE);
    }

    #[test]
    fn test_score_above_max_is_capped() {
        assert_eq!(XpRewards::for_game(150, 100), 30);
    }

    #[test]
    fn test_daily_schedule() {
        assert_eq!(DailyRewardSchedule::reward_for_streak(1), 10);
        assert_eq!(DailyRewardSchedule::reward_for_streak(7), 50);
        // Day 7 caps further days
        assert_eq!(DailyRewardSchedule::reward_for_streak(30), 50);
        // Streak 0 claims the first day
        assert_eq!(DailyRewardSchedule::day_for_streak(0), 1);
    }

    #[test]
    fn test_schedule_is_non_decreasing() {
        for pair in DAILY_REWARDS.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }
}
