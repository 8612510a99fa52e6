//! Autoplay CLI - plays Neon Nexus games headlessly and prints the protocol log.
//!
//! Commentary comes from Gemini when `NEXUS_GEMINI_API_KEY` (or `API_KEY`) is
//! set, otherwise from the offline commentator.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use nexus_grid::commentary::generator_from_env;
use nexus_grid::telemetry::init_tracing;
use nexus_grid::{
    CannedCommentator, CommentaryDispatcher, CommentaryGenerator, GameConfig, GameEvent,
    GameSession, OvershootPolicy, TurnPhase,
};
use time::macros::format_description;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "nexus-autoplay")]
#[command(about = "Play Neon Nexus games to completion without a board")]
struct Args {
    /// Number of games to play in this session
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Die seed (for reproducible games)
    #[arg(long)]
    seed: Option<u64>,

    /// Delay between rolling and resolving, in milliseconds
    #[arg(long, default_value = "0")]
    delay_ms: u64,

    /// Stop a game after this many rolls
    #[arg(long, default_value = "10000")]
    max_rolls: u32,

    /// Pass the turn and log the roll when it overshoots the final square
    #[arg(long)]
    forfeit_overshoot: bool,

    /// Use the offline commentator even if an API key is set
    #[arg(long)]
    offline: bool,

    /// Print the final game state as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_tracing(if args.verbose { "debug" } else { "warn" });

    let mut config = GameConfig::new();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.forfeit_overshoot {
        config = config.with_overshoot(OvershootPolicy::ForfeitTurn);
    }

    let generator: Arc<dyn CommentaryGenerator> = if args.offline {
        Arc::new(CannedCommentator)
    } else {
        generator_from_env()
    };
    let dispatcher = CommentaryDispatcher::current(generator)?;

    let mut session = GameSession::new(config)?.with_commentary(dispatcher);
    let delay = Duration::from_millis(args.delay_ms);

    for game in 1..=args.games {
        if game > 1 {
            session.reset();
        }
        println!("=== Game {game} ===");
        print_event(session.state().history().back());
        println!("    \"{}\"", session.state().commentary());

        let mut rolls = 0;
        while session.phase() != TurnPhase::Finished && rolls < args.max_rolls {
            rolls += 1;
            let Some(result) = session.request_roll_after(delay).await else {
                continue;
            };
            match &result.event {
                Some(event) => {
                    session.flush_commentary().await;
                    print_event(Some(event));
                    println!("    \"{}\"", session.state().commentary());
                }
                None => println!(
                    "           rolled {}, overshoot; holding at {}",
                    result.steps, result.position
                ),
            }
        }

        match session.state().winner() {
            Some(winner) => info!(game, rolls, winner = %winner.name, "autoplay.finished"),
            None => warn!(game, rolls, "autoplay.roll_limit"),
        }

        if args.json {
            println!("{}", session.snapshot_json()?);
        }
    }

    session.flush_commentary().await;
    Ok(())
}

fn print_event(event: Option<&GameEvent>) {
    let Some(event) = event else {
        return;
    };
    let clock = format_description!("[hour]:[minute]:[second]");
    let stamp = event
        .timestamp
        .format(&clock)
        .unwrap_or_else(|_| "--:--:--".to_string());
    println!("[{stamp}] {}", event.message);
}
