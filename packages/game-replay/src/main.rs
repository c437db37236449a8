//! Game replay CLI - drive one game through the session service and print
//! what each viewer sees.

mod replay;

use std::collections::BTreeMap;

use chess_backend::domain::PlayerId;
use chess_backend::{session_options_from_env, SessionOptions, SessionService};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use replay::{MoveSource, Replay};
use tracing::info;

#[derive(Parser)]
#[command(name = "game-replay")]
#[command(about = "Replay a chess game through the session service")]
struct Args {
    /// Identity seated as White (the creator)
    #[arg(long, default_value = "white")]
    white: String,

    /// Identity seated as Black
    #[arg(long, default_value = "black")]
    black: String,

    /// Space-separated coordinate moves, e.g. "e2e4 e7e5 g1f3"
    #[arg(long, conflicts_with = "random")]
    moves: Option<String>,

    /// Play this many random legal plies instead of a fixed line
    #[arg(long)]
    random: Option<u32>,

    /// Seed for --random (for reproducible games)
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Do not record captures and history
    #[arg(long)]
    no_history: bool,

    /// Extra viewer to project for (repeatable); White and Black are always shown
    #[arg(long)]
    viewer: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    chess_backend::init_tracing_with(filter);

    let mut options: SessionOptions = session_options_from_env()?;
    if args.no_history {
        options.include_capture_history = false;
    }
    let service = SessionService::with_options(options);

    let white = PlayerId::from(args.white);
    let black = PlayerId::from(args.black);
    let source = match (args.moves, args.random) {
        (Some(line), _) => MoveSource::Line(replay::parse_line(&line)?),
        (None, Some(plies)) => {
            let rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            MoveSource::Random { plies, rng }
        }
        (None, None) => MoveSource::Line(Vec::new()),
    };

    let mut replay = Replay::start(&service, white.clone(), black.clone())?;
    let stopped = replay.run(source)?;
    if let Some(stop) = &stopped {
        info!(ply = stop.ply, error = %stop.error, "Replay stopped early");
    }

    let mut views = BTreeMap::new();
    for viewer in [white, black]
        .into_iter()
        .chain(args.viewer.into_iter().map(PlayerId::from))
    {
        let view = service.player_view(replay.join_code(), &viewer)?;
        views.insert(viewer.to_string(), view);
    }

    let report = replay::Report {
        join_code: replay.join_code().to_string(),
        stopped,
        views,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
