use shakmaty::Move;

use crate::RulesEngine;
use crate::value::{capture_value, piece_value};

/// Capture of a piece worth strictly more than the capturing piece.
///
/// Pure material comparison with no lookahead. Among winning captures the
/// cheapest victim is taken first (engine order on ties).
pub fn find<R: RulesEngine>(engine: &R) -> Option<Move> {
    let mut wins = engine.legal_moves(true);
    wins.retain(|mv| capture_value(mv) > piece_value(mv.role()));
    wins.sort_by_key(capture_value);

    let found = wins.into_iter().next();
    if let Some(mv) = &found {
        log::debug!("can capture a better piece: {mv:?}");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;
    use shakmaty::{Role, Square};

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).expect("test FEN should be valid")
    }

    #[test]
    fn test_prefers_cheapest_winning_capture() {
        // dxe5 wins a knight, Nxb5 wins a rook; the knight is cheaper.
        let board = board("6k1/6pp/p4p2/1r2n3/3P4/2N5/5PPP/6K1 w - - 0 1");

        let mv = find(&board).expect("winning capture exists");

        assert_eq!(mv.from(), Some(Square::D4));
        assert_eq!(mv.to(), Square::E5);
        assert_eq!(mv.role(), Role::Pawn);
    }

    #[test]
    fn test_knight_takes_queen() {
        let board = board("7N/5qk1/8/8/8/8/8/K7 w - - 0 1");

        let mv = find(&board).expect("winning capture exists");

        assert_eq!(mv.from(), Some(Square::H8));
        assert_eq!(mv.capture(), Some(Role::Queen));
    }

    #[test]
    fn test_ignores_captures_of_cheaper_pieces() {
        // Rook takes a pawn-defended knight: losing on paper.
        let board = board("6k1/5ppp/3p4/4n3/8/8/5PPP/4R1K1 w - - 0 1");

        assert_eq!(find(&board), None);
    }

    #[test]
    fn test_king_captures_never_count() {
        // Kxd2 takes a rook but the king is never traded.
        let board = board("7k/8/8/8/8/8/3r4/4K3 w - - 0 1");

        assert_eq!(find(&board), None);
    }
}
