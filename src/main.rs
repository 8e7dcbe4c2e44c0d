use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use negachess_core::{Board, divide, perft};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "hce")]
use negachess_engine::{Hce, INF, SearchBounds, Searcher};

/// Fixed-depth negamax search and perft on chess positions.
#[derive(Debug, Parser)]
#[command(name = "negachess", version)]
struct Cli {
    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct PositionArgs {
    /// Starting position; the initial position when omitted.
    #[arg(long, env = "NEGACHESS_FEN")]
    fen: Option<String>,

    /// Moves to play from the starting position, in UCI notation.
    #[arg(long, num_args = 1.., value_name = "MOVE")]
    moves: Vec<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Count leaf positions at a depth.
    Perft {
        depth: u32,
        #[command(flatten)]
        position: PositionArgs,
    },
    /// Perft split by root move.
    Divide {
        depth: u32,
        #[command(flatten)]
        position: PositionArgs,
    },
    /// Search to a fixed depth and report the best move.
    #[cfg(feature = "hce")]
    Search {
        depth: u32,
        #[command(flatten)]
        position: PositionArgs,
        /// Lower bound of the root window.
        #[arg(long, default_value_t = -INF, allow_hyphen_values = true)]
        alpha: i32,
        /// Upper bound of the root window.
        #[arg(long, default_value_t = INF, allow_hyphen_values = true)]
        beta: i32,
    },
}

/// Build the position from `--fen`, then replay `--moves`, skipping any that do not apply.
fn load_position(args: &PositionArgs) -> Result<Board> {
    let mut board = match &args.fen {
        Some(fen) => fen
            .parse::<Board>()
            .with_context(|| format!("cannot parse FEN \"{fen}\""))?,
        None => Board::starting_position(),
    };
    for text in &args.moves {
        if let Err(err) = board.play_uci_moves([text.as_str()]) {
            warn!(%err, fen = %board, "skipping move");
        }
    }
    Ok(board)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Perft { depth, position } => {
            let board = load_position(&position)?;
            let start = Instant::now();
            let nodes = perft(&board, depth);
            info!(depth, elapsed_ms = start.elapsed().as_millis() as u64, "perft done");
            println!("{nodes}");
        }
        Command::Divide { depth, position } => {
            let board = load_position(&position)?;
            let split = divide(&board, depth);
            let total: u64 = split.iter().map(|(_, nodes)| nodes).sum();
            for (mv, nodes) in &split {
                println!("{mv}: {nodes}");
            }
            println!();
            println!("moves: {}", split.len());
            println!("nodes: {total}");
        }
        #[cfg(feature = "hce")]
        Command::Search { depth, position, alpha, beta } => {
            let bounds = SearchBounds::new(alpha, beta).context("invalid search window")?;
            let mut board = load_position(&position)?;
            info!(fen = %board, depth, alpha, beta, "searching");

            let start = Instant::now();
            let result = Searcher::new(bounds).search(&mut board, &Hce, depth);
            let elapsed = start.elapsed();

            println!("score cp {}", result.score);
            match result.best_move {
                Some(mv) => println!("bestmove {mv}"),
                None => println!("bestmove (none)"),
            }
            println!("nodes {}", result.nodes);
            println!("time {} ms", elapsed.as_millis());
        }
    }

    Ok(())
}
