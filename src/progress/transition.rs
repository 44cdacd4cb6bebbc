//! Pure state transitions
//!
//! `PlayerProgress::apply` never touches storage or the clock. It returns the
//! next state together with the events the change produced, so the engine and
//! the tests can inspect both.

use super::badges::{Badge, BadgeId};
use super::checker::{check_game_badges, check_story_badges, check_streak_badges};
use super::clock::Moment;
use super::events::{BadgeAward, DailyRewardClaim, GamificationEvent, LevelUp};
use super::levels::Level;
use super::model::{ActivityKind, PlayerProgress};
use super::rewards::{score_fraction, DailyRewardSchedule, XpRewards};
use super::streaks::{day_string, StreakChange};

/// Something reported into the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    AddExperience { amount: u32, reason: &'a str },
    AwardBadge { badge_id: &'a str },
    RecordVisit,
    ClaimDailyReward,
    GameCompleted { game_id: &'a str, score: u32, max_score: u32 },
    StoryRead { story_id: &'a str },
    Reset,
}

/// What the caller gets back besides the new state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Badge(BadgeAward),
    DailyReward(DailyRewardClaim),
}

/// New state plus the events produced on the way
#[derive(Debug, Clone)]
pub struct Transition {
    pub progress: PlayerProgress,
    pub events: Vec<GamificationEvent>,
    pub outcome: Outcome,
}

impl PlayerProgress {
    /// Compute the state after `action` happens at `moment`.
    pub fn apply(&self, action: Action<'_>, moment: Moment) -> Transition {
        let mut step = Step {
            progress: self.clone(),
            events: Vec::new(),
            moment,
        };

        let outcome = match action {
            Action::AddExperience { amount, reason } => {
                step.add_experience(amount, reason);
                Outcome::Applied
            }
            Action::AwardBadge { badge_id } => Outcome::Badge(step.award_badge_by_id(badge_id)),
            Action::RecordVisit => {
                step.record_visit();
                Outcome::Applied
            }
            Action::ClaimDailyReward => Outcome::DailyReward(step.claim_daily_reward()),
            Action::GameCompleted {
                game_id,
                score,
                max_score,
            } => {
                step.game_completed(game_id, score, max_score);
                Outcome::Applied
            }
            Action::StoryRead { story_id } => {
                step.story_read(story_id);
                Outcome::Applied
            }
            Action::Reset => {
                step.progress = PlayerProgress::default();
                Outcome::Applied
            }
        };

        Transition {
            progress: step.progress,
            events: step.events,
            outcome,
        }
    }
}

struct Step {
    progress: PlayerProgress,
    events: Vec<GamificationEvent>,
    moment: Moment,
}

impl Step {
    fn log(&mut self, kind: ActivityKind, payload: String) {
        self.progress.log_activity(kind, payload, self.moment.now);
    }

    fn add_experience(&mut self, amount: u32, reason: &str) {
        if amount == 0 {
            return;
        }

        let old_level = self.progress.level;
        self.progress.experience = self.progress.experience.saturating_add(amount);
        self.progress.level = Level::for_xp(self.progress.experience).level;

        self.log(ActivityKind::Experience, format!("+{} XP: {}", amount, reason));
        self.events.push(GamificationEvent::XpAwarded {
            amount,
            reason: reason.to_string(),
        });

        if self.progress.level > old_level {
            let new_level = self.progress.level;
            self.log(ActivityKind::LevelUp, format!("level {}", new_level));
            self.events.push(GamificationEvent::LevelUp(LevelUp {
                old_level,
                new_level,
            }));
        }
    }

    fn award_badge_by_id(&mut self, badge_id: &str) -> BadgeAward {
        match Badge::find(badge_id) {
            Some(badge) => self.award_badge(badge),
            None => BadgeAward::NotFound,
        }
    }

    fn award_badge(&mut self, badge: &'static Badge) -> BadgeAward {
        let id = badge.id.as_str();
        if self.progress.has_badge(id) {
            return BadgeAward::AlreadyHeld;
        }

        self.progress.unlocked_badges.push(id.to_string());
        self.log(ActivityKind::BadgeUnlocked, id.to_string());
        self.events.push(GamificationEvent::BadgeUnlocked(badge));
        self.add_experience(badge.xp_reward, &format!("badge {}", id));

        BadgeAward::Awarded
    }

    fn award_all(&mut self, ids: Vec<BadgeId>) {
        for id in ids {
            if let Some(badge) = Badge::get(id) {
                self.award_badge(badge);
            }
        }
    }

    fn record_visit(&mut self) {
        let today = self.moment.today;
        let change = StreakChange::evaluate(
            self.progress.last_active_date,
            today,
            self.progress.login_streak,
        );
        if !change.is_new_day() {
            return;
        }

        let streak = change.new_streak(self.progress.login_streak);
        self.progress.login_streak = streak;
        self.progress.best_streak = self.progress.best_streak.max(streak);
        self.progress.last_active_date = Some(today);
        self.progress.daily_reward_claimed_today = false;

        self.log(
            ActivityKind::Visit,
            format!("{} (streak {})", day_string(today), streak),
        );
        self.events
            .push(GamificationEvent::StreakExtended { days: streak });

        let newly = check_streak_badges(streak, &self.progress.unlocked_badges);
        self.award_all(newly);
    }

    fn claim_daily_reward(&mut self) -> DailyRewardClaim {
        if self.progress.daily_reward_claimed_today {
            return DailyRewardClaim::already_claimed();
        }

        let streak_day = DailyRewardSchedule::day_for_streak(self.progress.login_streak);
        let amount = DailyRewardSchedule::reward_for_streak(self.progress.login_streak);

        self.add_experience(amount, &format!("daily reward (day {})", streak_day));
        self.progress.daily_reward_claimed_today = true;
        self.events
            .push(GamificationEvent::DailyRewardGranted { streak_day, amount });

        DailyRewardClaim::granted(amount)
    }

    fn game_completed(&mut self, game_id: &str, score: u32, max_score: u32) {
        self.progress.games_completed = self.progress.games_completed.saturating_add(1);

        let percent = (score_fraction(score, max_score) * 100.0).round() as u32;
        let xp = XpRewards::for_game(score, max_score);
        self.add_experience(
            xp,
            &format!("game {} {}/{} ({}%)", game_id, score, max_score, percent),
        );

        if max_score > 0 && score == max_score {
            self.progress.perfect_score_count = self.progress.perfect_score_count.saturating_add(1);
        }

        let newly = check_game_badges(
            self.progress.games_completed,
            self.progress.perfect_score_count,
            &self.progress.unlocked_badges,
        );
        self.award_all(newly);
    }

    fn story_read(&mut self, story_id: &str) {
        if !self.progress.has_read(story_id) {
            self.progress.read_stories.push(story_id.to_string());
            self.progress.stories_read = self.progress.stories_read.saturating_add(1);
        }

        self.add_experience(XpRewards::STORY_READ, &format!("story {}", story_id));

        let newly = check_story_badges(self.progress.stories_read, &self.progress.unlocked_badges);
        self.award_all(newly);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn moment(day: u32) -> Moment {
        let today = NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
        Moment {
            now: today.and_hms_opt(9, 30, 0).unwrap().and_utc(),
            today,
        }
    }

    fn count_level_ups(events: &[GamificationEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, GamificationEvent::LevelUp(_)))
            .count()
    }

    #[test]
    fn test_apply_does_not_touch_original() {
        let progress = PlayerProgress::default();
        let next = progress.apply(
            Action::AddExperience {
                amount: 10,
                reason: "test",
            },
            moment(1),
        );
        assert_eq!(progress.experience, 0);
        assert_eq!(next.progress.experience, 10);
    }

    #[test]
    fn test_level_up_event_once_for_multi_level_jump() {
        let next = PlayerProgress::default().apply(
            Action::AddExperience {
                amount: 250,
                reason: "big",
            },
            moment(1),
        );
        assert_eq!(next.progress.level, 4);
        assert_eq!(count_level_ups(&next.events), 1);
        match &next.events[1] {
            GamificationEvent::LevelUp(up) => {
                assert_eq!(up.old_level, 1);
                assert_eq!(up.new_level, 4);
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(next.progress.activity_log[0].kind, ActivityKind::LevelUp);
    }

    #[test]
    fn test_zero_experience_is_a_no_op() {
        let progress = PlayerProgress::default();
        let next = progress.apply(
            Action::AddExperience {
                amount: 0,
                reason: "nothing",
            },
            moment(1),
        );
        assert_eq!(next.progress, progress);
        assert!(next.events.is_empty());
    }

    #[test]
    fn test_badge_unknown_and_duplicate() {
        let progress = PlayerProgress::default();
        let unknown = progress.apply(Action::AwardBadge { badge_id: "dragon" }, moment(1));
        assert_eq!(unknown.outcome, Outcome::Badge(BadgeAward::NotFound));
        assert_eq!(unknown.progress, progress);

        let first = progress.apply(Action::AwardBadge { badge_id: "streak_3" }, moment(1));
        assert_eq!(first.outcome, Outcome::Badge(BadgeAward::Awarded));
        assert_eq!(first.progress.experience, 15);

        let second = first
            .progress
            .apply(Action::AwardBadge { badge_id: "streak_3" }, moment(1));
        assert_eq!(second.outcome, Outcome::Badge(BadgeAward::AlreadyHeld));
        assert_eq!(second.progress, first.progress);
        assert!(second.events.is_empty());
    }

    #[test]
    fn test_badge_event_precedes_its_xp() {
        let next = PlayerProgress::default().apply(Action::AwardBadge { badge_id: "perfect_score" }, moment(1));
        assert!(matches!(next.events[0], GamificationEvent::BadgeUnlocked(b) if b.id.as_str() == "perfect_score"));
        assert!(matches!(next.events[1], GamificationEvent::XpAwarded { amount: 20, .. }));
        assert_eq!(next.progress.experience, 20);
    }

    #[test]
    fn test_zero_reward_badge_grants_no_xp() {
        let next = PlayerProgress::default().apply(Action::AwardBadge { badge_id: "first_game" }, moment(1));
        assert_eq!(next.outcome, Outcome::Badge(BadgeAward::Awarded));
        assert_eq!(next.events.len(), 1);
        assert!(matches!(next.events[0], GamificationEvent::BadgeUnlocked(_)));
        assert_eq!(next.progress.experience, 0);
    }

    #[test]
    fn test_visit_resets_daily_claim_on_new_day() {
        let mut progress = PlayerProgress::default();
        progress = progress.apply(Action::RecordVisit, moment(1)).progress;
        progress = progress.apply(Action::ClaimDailyReward, moment(1)).progress;
        assert!(progress.daily_reward_claimed_today);

        let same_day = progress.apply(Action::RecordVisit, moment(1));
        assert!(same_day.progress.daily_reward_claimed_today);
        assert!(same_day.events.is_empty());

        let next_day = progress.apply(Action::RecordVisit, moment(2));
        assert!(!next_day.progress.daily_reward_claimed_today);
        assert_eq!(next_day.progress.login_streak, 2);
    }

    #[test]
    fn test_daily_reward_uses_streak_day() {
        let progress = PlayerProgress {
            login_streak: 3,
            ..Default::default()
        };
        let next = progress.apply(Action::ClaimDailyReward, moment(3));
        assert_eq!(next.outcome, Outcome::DailyReward(DailyRewardClaim::granted(20)));
        assert_eq!(next.progress.experience, 20);
        assert!(next.events.iter().any(|e| matches!(
            e,
            GamificationEvent::DailyRewardGranted {
                streak_day: 3,
                amount: 20
            }
        )));
    }

    #[test]
    fn test_repeated_story_counts_once() {
        let mut progress = PlayerProgress::default();
        for _ in 0..3 {
            progress = progress
                .apply(Action::StoryRead { story_id: "kolobok" }, moment(1))
                .progress;
        }
        assert_eq!(progress.stories_read, 1);
        assert_eq!(progress.experience, 3 * XpRewards::STORY_READ);
    }

    #[test]
    fn test_reset_returns_defaults() {
        let progress = PlayerProgress {
            experience: 900,
            level: 8,
            games_completed: 12,
            ..Default::default()
        };
        let next = progress.apply(Action::Reset, moment(1));
        assert_eq!(next.progress, PlayerProgress::default());
    }
}
