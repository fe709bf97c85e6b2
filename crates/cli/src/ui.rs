//! Terminal rendering and move input.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::square::Square;

/// Prints the board with file/rank labels and legal-move hints for the side
/// to move.
pub fn render(board: &Board) {
    let legal = board.legal_moves();

    println!("  A B C D E F G H");
    for rank in 0..8 {
        print!("{} ", rank + 1);
        for file in 0..8 {
            let sq = Square::from_index_unchecked(rank * 8 + file);
            match board.piece_at(sq) {
                Disc::Black => print!("{} ", "●".cyan()),
                Disc::White => print!("{} ", "○".yellow()),
                Disc::Empty if legal.contains(sq) => print!("{} ", "·".green()),
                Disc::Empty => print!(". "),
            }
        }
        println!();
    }
    println!(
        "  {}: {}  {}: {}",
        "black".cyan(),
        board.black.count(),
        "white".yellow(),
        board.white.count()
    );
}

/// Human-readable color name.
pub fn color_name(color: Disc) -> &'static str {
    match color {
        Disc::Black => "black",
        Disc::White => "white",
        Disc::Empty => "empty",
    }
}

/// Prompts until the user enters a legal move in algebraic notation.
///
/// `quit` aborts the game.
pub fn prompt_move(board: &Board) -> Result<Square> {
    let legal: Vec<String> = board.legal_moves().iter().map(|sq| sq.to_string()).collect();
    println!("legal moves: {}", legal.join(" "));

    loop {
        print!("{} to move> ", color_name(board.to_move));
        io::stdout().flush().context("could not flush stdout")?;

        let mut line = String::new();
        let read = io::stdin()
            .read_line(&mut line)
            .context("could not read input")?;
        if read == 0 {
            bail!("input closed");
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") {
            bail!("game aborted");
        }

        match input.parse::<Square>() {
            Ok(sq) if board.is_legal_move(sq) => return Ok(sq),
            Ok(sq) => println!("{} is not a legal move here", sq),
            Err(_) => println!("enter a move like D3 (or 'quit')"),
        }
    }
}

/// Maps a heuristic score to a pseudo win probability with a logistic curve.
pub fn win_probability(score: f64) -> f64 {
    let scaled = (score / 40.0).clamp(-60.0, 60.0);
    1.0 / (1.0 + (-scaled).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_probability_shape() {
        assert_eq!(win_probability(0.0), 0.5);
        assert!(win_probability(100.0) > 0.5);
        assert!(win_probability(-100.0) < 0.5);
        // Saturates without overflowing for terminal-sized scores.
        assert!(win_probability(10_064.0) > 0.999);
        assert!(win_probability(-10_064.0) < 0.001);
    }
}
