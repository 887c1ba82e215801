use std::env;
use std::process::ExitCode;

use chess_rules::board::{Move, Position};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut position = Position::new();
    for arg in args.iter().skip(1) {
        let requested: Move = match arg.parse() {
            Ok(mv) => mv,
            Err(e) => {
                eprintln!("{arg}: {e}");
                return ExitCode::FAILURE;
            }
        };
        let legal = position.legal_move_list();
        let Some(&mv) = legal.iter().find(|m| {
            m.from == requested.from
                && m.to == requested.to
                && (m.promotion.is_none() || m.promotion_piece() == requested.promotion_piece())
        }) else {
            eprintln!("{arg}: not a legal move");
            return ExitCode::FAILURE;
        };
        position.apply(mv);
    }

    let side = position.side_to_move();
    let legal_moves = position.legal_move_list();
    println!("side_to_move: {}", side.to_string().to_lowercase());
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", position.is_checkmate(side));
    println!("stalemate: {}", position.is_stalemate(side));
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
