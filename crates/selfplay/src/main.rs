//! Plays a random legal game against itself and prints each position.
//!
//! Usage: `selfplay [max-plies]`. Games with no draw-by-repetition rule
//! can shuffle forever, so the ply cap defaults to 300.

use chess_model::PieceKind;
use chess_rules::{all_moves, Game};
use rand::seq::SliceRandom;

const DEFAULT_MAX_PLIES: u32 = 300;

fn main() {
    let max_plies = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_MAX_PLIES);

    let mut rng = rand::thread_rng();
    let mut game = Game::new();

    println!("{}\n", game.board());

    for ply in 1..=max_plies {
        if game.status().is_terminal() {
            break;
        }

        let moves = all_moves(game.board(), game.board().side_to_move());
        let Some(chosen) = moves.choose(&mut rng) else {
            eprintln!("no legal moves in a non-terminal position");
            std::process::exit(1);
        };

        game.click(chosen.from);
        game.click(chosen.to);

        if game.promotion_pending() {
            // Random players take the strongest piece.
            if let Err(err) = game.promote(PieceKind::Queen) {
                eprintln!("promotion failed: {}", err);
                std::process::exit(1);
            }
        }

        println!("ply {}: {}", ply, chosen);
        println!("{}\n", game.board());
    }

    println!("result: {}", game.status());
}
