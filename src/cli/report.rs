//! Commands that report activities into the engine

use anyhow::{bail, Result};

use kinderxp::config::Config;
use kinderxp::GamificationEngine;

use super::present::print_events;

fn flush_events(engine: &mut GamificationEngine, config: &Config) {
    let events = engine.take_events();
    if !events.is_empty() {
        print_events(&events, config);
    }
}

/// Register today's visit and show the streak
pub fn visit_command(engine: &mut GamificationEngine, config: &Config) {
    engine.record_visit();
    flush_events(engine, config);

    let progress = engine.progress();
    println!(
        "Streak: {} day(s) (best {})",
        progress.login_streak, progress.best_streak
    );
}

pub fn claim_command(engine: &mut GamificationEngine, config: &Config) {
    let claim = engine.claim_daily_reward();
    flush_events(engine, config);

    if !claim.granted {
        println!("Today's reward was already claimed. Come back tomorrow!");
    }
}

pub fn game_command(
    engine: &mut GamificationEngine,
    config: &Config,
    game_id: &str,
    score: u32,
    max_score: u32,
) {
    engine.track_game_completion(game_id, score, max_score);
    flush_events(engine, config);
}

pub fn story_command(engine: &mut GamificationEngine, config: &Config, story_id: &str) {
    engine.track_story_read(story_id);
    flush_events(engine, config);
}

pub fn xp_command(engine: &mut GamificationEngine, config: &Config, amount: u32, reason: &str) {
    engine.add_experience(amount, reason);
    flush_events(engine, config);
}

pub fn badge_command(engine: &mut GamificationEngine, config: &Config, badge_id: &str) {
    let awarded = engine.award_badge(badge_id);
    flush_events(engine, config);

    if !awarded {
        if engine.progress().has_badge(badge_id) {
            println!("Badge '{}' is already unlocked.", badge_id);
        } else {
            println!("Unknown badge '{}'. See `kinderxp badges`.", badge_id);
        }
    }
}

pub fn reset_command(engine: &mut GamificationEngine, yes: bool) -> Result<()> {
    if !yes {
        bail!("Refusing to reset progress without --yes");
    }
    engine.reset();
    println!("Progress reset.");
    Ok(())
}
