//! Line-oriented text protocol over a single game.
//!
//! Commands (coordinates are `row col` pairs in 0-7, row 0 = rank 8):
//!
//! ```text
//! state                               board, turn, history depth, castling, status
//! reset                               back to the starting position
//! undo                                take back the last move
//! legal <row> <col>                   legal destinations of the piece there
//! move <row> <col> <row> <col> [q|r|b|n]
//! fen                                 current position as FEN
//! perft <depth>                       leaf count of the legal move tree, depth <= 5
//! quit
//! ```
//!
//! Every input is validated here before it reaches the rules core.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{GameStatus, Piece, Square, SquareError};
use crate::session::Game;

/// Deepest `perft` the protocol will run.
pub const MAX_PERFT_DEPTH: usize = 5;

/// A parsed protocol command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    State,
    Reset,
    Undo,
    Legal(Square),
    Move {
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    },
    Fen,
    Perft(usize),
    Quit,
}

/// Error type for malformed protocol input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// First word is not a known command
    Unknown { command: String },
    /// Too few or too many arguments
    WrongArity {
        command: &'static str,
        expected: &'static str,
    },
    /// Argument is not a non-negative integer
    InvalidNumber { found: String },
    /// Requested perft depth is above `MAX_PERFT_DEPTH`
    DepthTooLarge { depth: usize, max: usize },
    /// Coordinate outside the board
    OutOfBounds(SquareError),
    /// Promotion letter other than q, r, b or n
    InvalidPromotion { found: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown { command } => write!(f, "unknown command '{command}'"),
            CommandError::WrongArity { command, expected } => {
                write!(f, "usage: {command} {expected}")
            }
            CommandError::InvalidNumber { found } => write!(f, "invalid number '{found}'"),
            CommandError::DepthTooLarge { depth, max } => {
                write!(f, "perft depth {depth} exceeds maximum {max}")
            }
            CommandError::OutOfBounds(e) => write!(f, "out of bounds: {e}"),
            CommandError::InvalidPromotion { found } => {
                write!(f, "invalid promotion piece '{found}'")
            }
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::OutOfBounds(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SquareError> for CommandError {
    fn from(e: SquareError) -> Self {
        CommandError::OutOfBounds(e)
    }
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Result<Command, CommandError>> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let (&name, args) = parts.split_first()?;

    let cmd = match name {
        "state" => Ok(Command::State),
        "reset" => Ok(Command::Reset),
        "undo" => Ok(Command::Undo),
        "fen" => Ok(Command::Fen),
        "quit" => Ok(Command::Quit),
        "legal" => arity("legal", "<row> <col>", args, &[2])
            .and_then(|()| parse_square(args[0], args[1]))
            .map(Command::Legal),
        "move" => parse_move_args(args),
        "perft" => arity("perft", "<depth>", args, &[1])
            .and_then(|()| parse_depth(args[0]))
            .map(Command::Perft),
        other => Err(CommandError::Unknown {
            command: other.to_string(),
        }),
    };
    Some(cmd)
}

fn arity(
    command: &'static str,
    expected: &'static str,
    args: &[&str],
    allowed: &[usize],
) -> Result<(), CommandError> {
    if allowed.contains(&args.len()) {
        Ok(())
    } else {
        Err(CommandError::WrongArity { command, expected })
    }
}

fn parse_move_args(args: &[&str]) -> Result<Command, CommandError> {
    arity("move", "<row> <col> <row> <col> [q|r|b|n]", args, &[4, 5])?;
    Ok(Command::Move {
        from: parse_square(args[0], args[1])?,
        to: parse_square(args[2], args[3])?,
        promotion: args.get(4).map(|p| parse_promotion(p)).transpose()?,
    })
}

fn parse_number(s: &str) -> Result<usize, CommandError> {
    s.parse().map_err(|_| CommandError::InvalidNumber {
        found: s.to_string(),
    })
}

fn parse_depth(s: &str) -> Result<usize, CommandError> {
    let depth = parse_number(s)?;
    if depth > MAX_PERFT_DEPTH {
        return Err(CommandError::DepthTooLarge {
            depth,
            max: MAX_PERFT_DEPTH,
        });
    }
    Ok(depth)
}

fn parse_square(row: &str, col: &str) -> Result<Square, CommandError> {
    Ok(Square::try_from((parse_number(row)?, parse_number(col)?))?)
}

fn parse_promotion(s: &str) -> Result<Piece, CommandError> {
    let mut chars = s.chars();
    match (chars.next().and_then(Piece::from_char), chars.next()) {
        (Some(piece), None) if piece.is_promotion_choice() => Ok(piece),
        _ => Err(CommandError::InvalidPromotion {
            found: s.to_string(),
        }),
    }
}

fn format_status(status: GameStatus) -> String {
    match status.winner() {
        Some(winner) => format!("{} {}", status.as_str(), winner.to_char()),
        None => status.as_str().to_string(),
    }
}

/// Run a command against `game` and render the reply.
///
/// `Quit` renders nothing; the caller decides whether to stop.
pub fn execute(game: &mut Game, cmd: Command) -> String {
    match cmd {
        Command::State => {
            let state = game.state();
            format!(
                "{}\nturn: {}\nhistory: {}\ncastling: {}\nstatus: {}",
                state.board,
                state.turn.to_char(),
                state.history_len,
                game.position().castling_rights(),
                format_status(state.status)
            )
        }
        Command::Reset => {
            game.reset();
            "ok".to_string()
        }
        Command::Undo => match game.undo() {
            Ok(()) => "ok".to_string(),
            Err(e) => format!("error: {e}"),
        },
        Command::Legal(sq) => {
            let moves: Vec<String> = game
                .legal_moves(sq)
                .iter()
                .map(|to| format!("{},{}", to.0, to.1))
                .collect();
            format!("moves: {}", moves.join(" ")).trim_end().to_string()
        }
        Command::Move {
            from,
            to,
            promotion,
        } => match game.play_move(from, to, promotion) {
            Ok(outcome) => format!(
                "ok: {}\nstatus: {}",
                outcome.message(),
                format_status(outcome.status)
            ),
            Err(e) => format!("error: {e}"),
        },
        Command::Fen => game.position().to_fen(),
        Command::Perft(depth) => {
            let mut position = game.position().clone();
            format!("nodes: {}", position.perft(depth))
        }
        Command::Quit => String::new(),
    }
}

/// Serve the protocol until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut game = Game::new();

    for line in input.lines() {
        let line = line?;
        let Some(parsed) = parse_command(&line) else {
            continue;
        };

        let reply = match parsed {
            Ok(Command::Quit) => break,
            Ok(cmd) => execute(&mut game, cmd),
            Err(e) => format!("error: {e}"),
        };
        writeln!(output, "{reply}")?;
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("state"), Some(Ok(Command::State)));
        assert_eq!(parse_command("  undo  "), Some(Ok(Command::Undo)));
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("perft 3"), Some(Ok(Command::Perft(3))));
    }

    #[test]
    fn test_parse_move_with_promotion() {
        assert_eq!(
            parse_command("move 1 0 0 0 N"),
            Some(Ok(Command::Move {
                from: Square(1, 0),
                to: Square(0, 0),
                promotion: Some(Piece::Knight),
            }))
        );
        assert_eq!(
            parse_command("move 1 0 0 0 k"),
            Some(Err(CommandError::InvalidPromotion {
                found: "k".to_string()
            }))
        );
        assert_eq!(
            parse_command("move 1 0 0 0 qq"),
            Some(Err(CommandError::InvalidPromotion {
                found: "qq".to_string()
            }))
        );
    }

    #[test]
    fn test_parse_rejects_bad_coordinates() {
        assert_eq!(
            parse_command("legal 8 0"),
            Some(Err(CommandError::OutOfBounds(SquareError::RowOutOfBounds {
                row: 8
            })))
        );
        assert_eq!(
            parse_command("legal -1 0"),
            Some(Err(CommandError::InvalidNumber {
                found: "-1".to_string()
            }))
        );
        assert!(matches!(
            parse_command("legal 6"),
            Some(Err(CommandError::WrongArity {
                command: "legal",
                ..
            }))
        ));
    }

    #[test]
    fn test_parse_caps_perft_depth() {
        assert_eq!(
            parse_command("perft 5"),
            Some(Ok(Command::Perft(MAX_PERFT_DEPTH)))
        );
        assert_eq!(
            parse_command("perft 40"),
            Some(Err(CommandError::DepthTooLarge { depth: 40, max: 5 }))
        );
        assert_eq!(
            parse_command("perft 6").unwrap().unwrap_err().to_string(),
            "perft depth 6 exceeds maximum 5"
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_command("castle").unwrap().unwrap_err();
        assert_eq!(err.to_string(), "unknown command 'castle'");
    }

    #[test]
    fn test_execute_move_and_legal() {
        let mut game = Game::new();
        assert_eq!(execute(&mut game, Command::Legal(Square(6, 4))), "moves: 4,4 5,4");
        assert_eq!(execute(&mut game, Command::Legal(Square(1, 4))), "moves:");
        let reply = execute(
            &mut game,
            Command::Move {
                from: Square(6, 4),
                to: Square(4, 4),
                promotion: None,
            },
        );
        assert_eq!(reply, "ok: move made\nstatus: in_progress");
        assert_eq!(
            execute(&mut game, Command::Fen),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }

    #[test]
    fn test_run_loop_stops_at_quit() {
        let input = "move 6 4 4 4\nundo\nundo\nquit\nstate\n";
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "ok: move made",
                "status: in_progress",
                "ok",
                "error: no move to undo"
            ]
        );
    }
}
