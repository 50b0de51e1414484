use std::io::{self, BufRead, Write};
use std::time::Duration;

use super::{HostError, render_board};
use crate::board::uci;
use crate::{Board, MoveSelector, RulesEngine};

/// Time the host grants the selector per move.
const MOVE_BUDGET: Duration = Duration::from_secs(1);

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// Runs an interactive terminal session against the move selector.
///
/// Reads commands from stdin until `q` or end of input.
pub fn run_interactive_terminal(selector: MoveSelector) {
    let mut board = Board::new();

    clear_screen();
    draw_interface(&board);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            log::error!("failed to flush stdout: {e}");
            break;
        }

        let input = match lines.next() {
            Some(Ok(input)) => input,
            Some(Err(e)) => {
                log::error!("failed to read input: {e}");
                break;
            }
            None => break,
        };

        match execute(&selector, &mut board, &input) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Redraw(message)) => {
                clear_screen();
                draw_interface(&board);
                if let Some(message) = message {
                    println!("\n{message}");
                }
            }
            Ok(Flow::Quit) => break,
            Err(e) => println!("❌ {e}"),
        }
    }
}

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Redraw(Option<String>),
    Quit,
}

fn execute(selector: &MoveSelector, board: &mut Board, input: &str) -> Result<Flow, HostError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some(&command) = parts.first() else {
        return Ok(Flow::Continue);
    };

    match command {
        "load" => {
            let fen = match parts.get(1) {
                None => return Err(HostError::Usage("load <fen> | load startpos")),
                Some(&"startpos") => START_FEN,
                // FEN fields are space separated, so take the rest of the line.
                Some(_) => input.trim_start()["load".len()..].trim(),
            };
            *board = Board::from_fen(fen)?;
            Ok(Flow::Redraw(Some("✅ Position loaded from FEN".to_string())))
        }
        "m" => {
            let Some(uci_move) = parts.get(1) else {
                return Err(HostError::Usage("m <uci move>"));
            };
            board.play_uci(uci_move)?;
            Ok(Flow::Redraw(game_over_message(board)))
        }
        "go" => {
            let message = play_selected(selector, board)?;
            Ok(Flow::Redraw(Some(message)))
        }
        "auto" => {
            let plies: usize = match parts.get(1) {
                None => 1,
                Some(n) => n.parse().map_err(|_| HostError::Usage("auto <plies>"))?,
            };
            let mut transcript = Vec::new();
            for _ in 0..plies {
                if game_over_message(board).is_some() {
                    break;
                }
                transcript.push(play_selected(selector, board)?);
            }
            if let Some(over) = game_over_message(board) {
                transcript.push(over);
            }
            Ok(Flow::Redraw(Some(transcript.join("\n"))))
        }
        "r" => {
            *board = Board::new();
            Ok(Flow::Redraw(Some("🔄 Reset to initial state".to_string())))
        }
        "p" => Ok(Flow::Redraw(None)),
        "q" => Ok(Flow::Quit),
        _ => Err(HostError::Usage(HELP)),
    }
}

/// Ask the selector for a move and commit it.
fn play_selected(selector: &MoveSelector, board: &mut Board) -> Result<String, HostError> {
    let decision = selector.decide(board, MOVE_BUDGET)?;
    board.play(&decision.mv)?;
    Ok(format!(
        "🤖 {} ({}, {:?})",
        uci(&decision.mv),
        decision.tier,
        decision.elapsed
    ))
}

fn game_over_message(board: &Board) -> Option<String> {
    if !board.legal_moves(false).is_empty() {
        None
    } else if board.is_checkmate() {
        Some("🏁 Checkmate".to_string())
    } else {
        Some("🏁 Stalemate".to_string())
    }
}

const HELP: &str = "load <fen> | m <uci> | go | auto <n> | r (reset) | p (refresh) | q (quit)";

/// Draws the complete interface: help text and board.
fn draw_interface(board: &Board) {
    println!("♟️  Tactician");
    println!();
    println!("Commands: {HELP}");
    println!();
    if let Err(e) = render_board(&mut io::stdout(), board) {
        log::error!("failed to draw board: {e}");
    }
}
