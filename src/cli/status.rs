//! Status, badge list and activity log commands

use anyhow::{Context, Result};
use serde::Serialize;

use kinderxp::config::Config;
use kinderxp::progress::{Badge, BadgeCategory, Level, NotificationKind};
use kinderxp::{GamificationEngine, GamificationEvent, LevelProgress, PlayerProgress};

use super::present::{describe, print_events, progress_bar};

#[derive(Serialize)]
struct Notice {
    kind: NotificationKind,
    message: String,
    display_secs: u64,
}

#[derive(Serialize)]
struct StatusReport<'a> {
    progress: &'a PlayerProgress,
    next_level: LevelProgress,
    events: Vec<Notice>,
}

fn notices(events: &[GamificationEvent], config: &Config) -> Vec<Notice> {
    events
        .iter()
        .map(|event| Notice {
            kind: event.kind(),
            message: describe(event, config.display.language),
            display_secs: config.notifications.display_for(event.kind()).as_secs(),
        })
        .collect()
}

/// Snapshot for `status --json`; drains the pending events into it
fn status_report<'a>(engine: &'a mut GamificationEngine, config: &Config) -> StatusReport<'a> {
    let events = notices(&engine.take_events(), config);
    let engine: &'a GamificationEngine = engine;
    StatusReport {
        progress: engine.progress(),
        next_level: engine.progress_to_next_level(),
        events,
    }
}

/// Show level, XP, streak and counters
pub fn status_command(engine: &mut GamificationEngine, config: &Config, json: bool) -> Result<()> {
    if json {
        let report = status_report(engine, config);
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize progress")?;
        println!("{}", out);
        return Ok(());
    }

    let events = engine.take_events();
    print_events(&events, config);

    let lang = config.display.language;
    let progress = engine.progress();
    let next = engine.progress_to_next_level();
    let title = Level::get(progress.level)
        .map(|l| l.title(lang))
        .unwrap_or_default();

    println!("Profile: {}", config.storage.profile);
    println!("Level {} \"{}\"", progress.level, title);
    if next.is_max_level() {
        println!("  {} XP  {} max level", progress.experience, progress_bar(100.0, 20));
    } else {
        println!(
            "  {} XP  {} {}/{} ({:.0}%)",
            progress.experience,
            progress_bar(next.percentage, 20),
            next.points_into_level,
            next.points_needed_for_level,
            next.percentage
        );
    }
    println!(
        "Streak: {} day(s) (best {})",
        progress.login_streak, progress.best_streak
    );
    println!(
        "Daily reward: {}",
        if progress.daily_reward_claimed_today {
            "claimed"
        } else {
            "ready"
        }
    );
    println!(
        "Games: {} (perfect {})  Stories: {}",
        progress.games_completed, progress.perfect_score_count, progress.stories_read
    );
    println!(
        "Badges: {}/{}",
        engine.unlocked_badges().len(),
        Badge::total_count()
    );

    Ok(())
}

/// List the badge catalog grouped by category
pub fn badges_command(engine: &mut GamificationEngine, config: &Config) {
    print_events(&engine.take_events(), config);

    let lang = config.display.language;
    for category in BadgeCategory::all() {
        println!("{}:", category.label(lang));
        for badge in Badge::in_category(*category) {
            let mark = if engine.progress().has_badge(badge.id.as_str()) {
                "x"
            } else {
                " "
            };
            println!(
                "  [{}] {} {} - {} (+{} XP)  id: {}",
                mark,
                badge.icon,
                badge.display_name(lang),
                badge.description.get(lang),
                badge.xp_reward,
                badge.id.as_str()
            );
        }
    }
}

/// Show the activity log, newest first
pub fn log_command(engine: &mut GamificationEngine, config: &Config) {
    print_events(&engine.take_events(), config);

    let log = engine.activity_log();
    if log.is_empty() {
        println!("No activity yet.");
        return;
    }

    for entry in log {
        println!(
            "  {}  {:<14} {}",
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.kind.as_str(),
            entry.payload
        );
    }
}
