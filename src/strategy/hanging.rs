use std::cmp::Reverse;

use shakmaty::Move;

use crate::RulesEngine;
use crate::speculate::Speculation;
use crate::value::capture_value;

/// Capture of the most valuable piece the opponent cannot recapture.
///
/// Captures are tried from the most valuable victim down (engine order on
/// ties). A capture counts as free when, after playing it, no opponent
/// capture lands on the destination square. Whether the recapture itself
/// would lose material is not considered.
pub fn find<R: RulesEngine>(engine: &mut R) -> Option<Move> {
    let mut captures = engine.legal_moves(true);
    captures.sort_by_key(|mv| Reverse(capture_value(mv)));

    let found = captures.into_iter().find(|mv| {
        let target = mv.to();
        let after = Speculation::apply(&mut *engine, mv);
        !after
            .legal_moves(true)
            .iter()
            .any(|reply| reply.to() == target)
    });
    if let Some(mv) = &found {
        log::debug!("found a hanging piece to capture: {mv:?}");
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
    fn test_takes_undefended_knight() {
        let mut board = board("6k1/5ppp/8/4n3/8/8/5PPP/4R1K1 w - - 0 1");

        let mv = find(&mut board).expect("knight is hanging");

        assert_eq!(mv.from(), Some(Square::E1));
        assert_eq!(mv.to(), Square::E5);
        assert_eq!(mv.capture(), Some(Role::Knight));
    }

    #[test]
    fn test_skips_defended_rook_for_hanging_knight() {
        // Rxe6 is met by fxe6; Bxh5 cannot be answered.
        let mut board = board("6k1/5ppp/4r3/7n/8/8/5PPP/3BR1K1 w - - 0 1");

        let mv = find(&mut board).expect("knight is hanging");

        assert_eq!(mv.from(), Some(Square::D1));
        assert_eq!(mv.to(), Square::H5);
    }

    #[test]
    fn test_every_capture_recapturable() {
        let mut board = board("6k1/5p1p/4r1p1/7n/8/8/5PPP/3BR1K1 w - - 0 1");
        let before = board.fen();

        assert_eq!(find(&mut board), None);
        assert_eq!(board.fen(), before);
    }

    #[test]
    fn test_no_captures() {
        let mut board = Board::new();

        assert_eq!(find(&mut board), None);
    }
}
