mod game;
mod ui;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use num_format::{Locale, ToFormattedString};

use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::engine::{Engine, EngineOptions};
use othello_core::eval;

#[derive(Parser, Debug)]
#[command(name = "othello", about = "Othello engine with a perfect endgame solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    Black,
    White,
}

impl From<ColorArg> for Disc {
    fn from(color: ColorArg) -> Disc {
        match color {
            ColorArg::Black => Disc::Black,
            ColorArg::White => Disc::White,
        }
    }
}

impl std::fmt::Display for ColorArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ColorArg::Black => "black",
            ColorArg::White => "white",
        })
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play an interactive game against the engine.
    Play {
        /// Engine thinking time per move, in seconds.
        #[arg(long, default_value_t = 3.0)]
        time: f64,

        /// Color the engine plays.
        #[arg(long, value_enum, default_value_t = ColorArg::White)]
        engine_color: ColorArg,

        /// Transposition table size in megabytes.
        #[arg(long, default_value_t = 16)]
        hash_size: usize,
    },
    /// Solve a position exactly and print the perfect-play outcome.
    Solve {
        /// 64 characters, row-major from A1: 'X' black, 'O' white, '-' empty.
        board: String,

        /// Side to move.
        #[arg(long, value_enum, default_value_t = ColorArg::Black)]
        side: ColorArg,

        /// Transposition table size in megabytes.
        #[arg(long, default_value_t = 64)]
        hash_size: usize,
    },
    /// Print the static evaluation of a position.
    Eval {
        /// 64 characters, row-major from A1: 'X' black, 'O' white, '-' empty.
        board: String,

        /// Perspective of the evaluation.
        #[arg(long, value_enum, default_value_t = ColorArg::Black)]
        side: ColorArg,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            time,
            engine_color,
            hash_size,
        } => game::play(engine_color.into(), time, hash_size),
        Command::Solve {
            board,
            side,
            hash_size,
        } => solve(&board, side.into(), hash_size),
        Command::Eval { board, side } => eval_position(&board, side.into()),
    }
}

/// Solves a position to the end of the game and reports the result.
fn solve(board_string: &str, side: Disc, hash_size: usize) -> Result<()> {
    let board =
        Board::from_string(board_string, side).context("could not parse board string")?;

    let empties = board.empty_count();
    if empties > 24 {
        bail!("position has {empties} empty squares; solving is practical up to about 24");
    }

    // Raising the threshold to the position's empty count forces an exact
    // solve from the root.
    let options = EngineOptions {
        tt_mb_size: hash_size,
        endgame_threshold: empties,
        ..Default::default()
    };
    let mut engine = Engine::with_options(options);
    let result = engine.best_move(&board, f64::INFINITY);

    ui::render(&board);
    match result.best_move {
        Some(mv) => {
            println!("best move: {mv}");
            println!(
                "outcome for {}: {}",
                ui::color_name(side),
                describe_exact(result.score)
            );
        }
        None => println!("no legal move; {} must pass", ui::color_name(side)),
    }
    println!(
        "nodes: {}",
        engine.nodes_searched().to_formatted_string(&Locale::en)
    );
    Ok(())
}

/// Renders an exact score as a game outcome with its disc margin.
fn describe_exact(score: f64) -> String {
    if score > 0.0 {
        format!("win by {}", score - 10_000.0)
    } else if score < 0.0 {
        format!("loss by {}", -score - 10_000.0)
    } else {
        "draw".to_string()
    }
}

/// Prints the heuristic evaluation and win probability of a position.
fn eval_position(board_string: &str, side: Disc) -> Result<()> {
    let board =
        Board::from_string(board_string, side).context("could not parse board string")?;

    let score = eval::evaluate(&board, side);
    ui::render(&board);
    println!("evaluation for {}: {score:+.1}", ui::color_name(side));
    println!(
        "estimated win probability: {:.1}%",
        ui::win_probability(score) * 100.0
    );
    Ok(())
}
