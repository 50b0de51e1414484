use std::io::Write;

use shakmaty::{Color, File, Rank, Role, Square};

use super::HostError;
use crate::Board;

/// Render the board to any writer. Extracted for testability.
pub fn render_board(w: &mut impl Write, board: &Board) -> Result<(), HostError> {
    for rank in Rank::ALL.iter().rev() {
        write!(w, " {} ", rank.char())?;
        for file in File::ALL {
            let square = Square::from_coords(file, *rank);
            write!(w, "{}", symbol(board, square))?;
        }
        writeln!(w)?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    let side = match board.turn() {
        Color::White => "White",
        Color::Black => "Black",
    };
    writeln!(w, "{side} to move | {}", board.fen())?;
    w.flush()?;
    Ok(())
}

/// Map the piece on a square to a three-column cell.
fn symbol(board: &Board, square: Square) -> &'static str {
    let Some(piece) = board.piece_at(square) else {
        return " · ";
    };
    match (piece.role, piece.color) {
        (Role::Pawn, Color::White) => " P ",
        (Role::Knight, Color::White) => " N ",
        (Role::Bishop, Color::White) => " B ",
        (Role::Rook, Color::White) => " R ",
        (Role::Queen, Color::White) => " Q ",
        (Role::King, Color::White) => " K ",
        (Role::Pawn, Color::Black) => " p ",
        (Role::Knight, Color::Black) => " n ",
        (Role::Bishop, Color::Black) => " b ",
        (Role::Rook, Color::Black) => " r ",
        (Role::Queen, Color::Black) => " q ",
        (Role::King, Color::Black) => " k ",
    }
}
