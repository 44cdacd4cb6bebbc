use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use kinderxp::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "kinderxp")]
#[command(about = "Play corner progress - XP, levels, badges, streaks and daily rewards")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.kinderxp/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Profile whose progress to use (overrides the config file)
    #[arg(short, long, global = true)]
    profile: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show level, XP, streak and counters
    Status {
        /// Print the raw progress record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register today's visit (also happens on every other command)
    Visit,

    /// Claim today's daily reward
    Claim,

    /// Report a finished mini-game
    Game {
        /// Game identifier (e.g. "memory", "puzzle")
        game_id: String,

        #[arg(long)]
        score: u32,

        #[arg(long)]
        max: u32,
    },

    /// Report a story that was read
    Story {
        /// Story identifier
        story_id: String,
    },

    /// Grant XP directly
    Xp {
        amount: u32,

        /// Label shown in the activity log
        #[arg(long, default_value = "manual")]
        reason: String,
    },

    /// Award a badge by id
    Badge {
        badge_id: String,
    },

    /// List all badges and which ones are unlocked
    Badges,

    /// Show the recent activity log
    Log,

    /// Delete all progress for the profile
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Write a default ~/.kinderxp/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(Commands::Init { force }) = cli.command {
        let path = cli.config.unwrap_or_else(Config::global_config_path);
        return cli::init::init_command(&path, force);
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(profile) = cli.profile {
        config.storage.profile = profile;
    }

    let mut engine = cli::open_engine(&config);

    match cli.command {
        Some(Commands::Status { json }) => {
            cli::status::status_command(&mut engine, &config, json)?;
        }
        Some(Commands::Visit) => {
            cli::report::visit_command(&mut engine, &config);
        }
        Some(Commands::Claim) => {
            cli::report::claim_command(&mut engine, &config);
        }
        Some(Commands::Game {
            game_id,
            score,
            max,
        }) => {
            cli::report::game_command(&mut engine, &config, &game_id, score, max);
        }
        Some(Commands::Story { story_id }) => {
            cli::report::story_command(&mut engine, &config, &story_id);
        }
        Some(Commands::Xp { amount, reason }) => {
            cli::report::xp_command(&mut engine, &config, amount, &reason);
        }
        Some(Commands::Badge { badge_id }) => {
            cli::report::badge_command(&mut engine, &config, &badge_id);
        }
        Some(Commands::Badges) => {
            cli::status::badges_command(&mut engine, &config);
        }
        Some(Commands::Log) => {
            cli::status::log_command(&mut engine, &config);
        }
        Some(Commands::Reset { yes }) => {
            cli::report::reset_command(&mut engine, yes)?;
        }
        // Handled before loading the config
        Some(Commands::Init { .. }) => {}
        None => {
            // Default: show status
            cli::status::status_command(&mut engine, &config, false)?;
        }
    }

    Ok(())
}
