//! Interactive human-versus-engine game loop.

use anyhow::Result;
use num_format::{Locale, ToFormattedString};

use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::engine::{Engine, EngineOptions};

use crate::ui;

/// Runs a game on the standard starting position until neither side can
/// move.
///
/// # Arguments
///
/// * `engine_color` - Color the engine plays; the human plays the other.
/// * `time` - Engine thinking budget per move, in seconds.
/// * `hash_size` - Transposition table size in megabytes.
pub fn play(engine_color: Disc, time: f64, hash_size: usize) -> Result<()> {
    let options = EngineOptions {
        tt_mb_size: hash_size,
        ..Default::default()
    };
    let mut engine = Engine::with_options(options);
    let mut board = Board::initial();

    println!(
        "You play {}; the engine plays {}.",
        ui::color_name(engine_color.opposite()),
        ui::color_name(engine_color)
    );

    loop {
        println!();
        ui::render(&board);

        if board.is_game_over() {
            announce_result(&board, engine_color);
            return Ok(());
        }

        if !board.has_legal_moves() {
            println!("{} has no move and passes.", ui::color_name(board.to_move));
            board = board.pass_turn();
            continue;
        }

        if board.to_move == engine_color {
            let result = engine.best_move(&board, time);
            let mv = result.best_move.expect("side to move has legal moves");
            println!(
                "engine plays {mv}  (score {:+.0}, depth {}, {} nodes, ~{:.0}% win)",
                result.score,
                result.depth,
                engine.nodes_searched().to_formatted_string(&Locale::en),
                ui::win_probability(result.score) * 100.0
            );
            board = board.make_move(mv);
        } else {
            let mv = ui::prompt_move(&board)?;
            board = board.make_move(mv);
        }
    }
}

/// Prints the final count and who won.
fn announce_result(board: &Board, engine_color: Disc) {
    println!(
        "Game over: black {} - white {}.",
        board.black.count(),
        board.white.count()
    );
    match board.winner() {
        Some(color) if color == engine_color => println!("The engine wins."),
        Some(_) => println!("You win!"),
        None => println!("It's a draw."),
    }
}
