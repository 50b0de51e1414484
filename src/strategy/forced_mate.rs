//! Bounded AND/OR search for a forced checkmate.
//!
//! The mover picks one move at each of its turns (OR); every opponent
//! reply must lose (AND). Opponent nodes with more than `branching_limit`
//! replies are not considered forced, which caps the tree at roughly
//! `branching_limit ^ depth` opponent branches.

use shakmaty::Move;

use crate::RulesEngine;
use crate::speculate::Speculation;

/// Number of the mover's own moves explored.
pub const DEFAULT_DEPTH: u32 = 3;

/// Most opponent replies a node may have and still count as forced.
pub const DEFAULT_BRANCHING_LIMIT: usize = 3;

/// First move, in enumeration order, that forces mate within `max_depth`
/// of the mover's moves.
pub fn find<R: RulesEngine>(engine: &mut R, max_depth: u32, branching_limit: usize) -> Option<Move> {
    let remaining = max_depth.checked_sub(1)?;

    for mv in engine.legal_moves(false) {
        let mut after = Speculation::apply(&mut *engine, &mv);
        if is_forced_mate(&mut *after, remaining, branching_limit) {
            drop(after);
            log::debug!("found a forced checkmate starting with {mv:?}");
            return Some(mv);
        }
    }
    None
}

/// Whether the side that just moved can force mate from here.
///
/// Evaluated on the position *after* the mover's candidate move, so the
/// side to move is the defender.
pub fn is_forced_mate<R: RulesEngine>(
    engine: &mut R,
    remaining_depth: u32,
    branching_limit: usize,
) -> bool {
    if engine.is_checkmate() {
        return true;
    }
    if remaining_depth == 0 {
        return false;
    }

    let replies = engine.legal_moves(false);
    // No replies without mate is stalemate, a draw.
    if replies.is_empty() || replies.len() > branching_limit {
        return false;
    }

    replies.iter().all(|reply| {
        let mut after_reply = Speculation::apply(&mut *engine, reply);
        after_reply.legal_moves(false).iter().any(|mv| {
            let mut after_mv = Speculation::apply(&mut *after_reply, mv);
            is_forced_mate(&mut *after_mv, remaining_depth - 1, branching_limit)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;
    use shakmaty::Square;
    use test_case::test_case;

    const BACK_RANK: &str = "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1";
    const ROOK_LADDER: &str = "7k/8/8/8/8/2K5/1R6/R7 w - - 0 1";
    const QUEEN_CORNER: &str = "k7/8/1K6/2Q5/8/8/8/8 w - - 0 1";

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).expect("test FEN should be valid")
    }

    fn find_move(board: &Board, from: Square, to: Square) -> Move {
        board
            .legal_moves(false)
            .into_iter()
            .find(|mv| mv.from() == Some(from) && mv.to() == to)
            .expect("move should be legal")
    }

    #[test]
    fn test_mate_in_one() {
        let mut board = board(BACK_RANK);

        let mv = find(&mut board, DEFAULT_DEPTH, DEFAULT_BRANCHING_LIMIT).expect("mate exists");

        assert_eq!(mv.from(), Some(Square::A1));
        assert_eq!(mv.to(), Square::A8);
    }

    #[test]
    fn test_mate_in_two_needs_second_move() {
        let mut board = board(ROOK_LADDER);

        assert_eq!(find(&mut board, 1, DEFAULT_BRANCHING_LIMIT), None);
        let mv = find(&mut board, 2, DEFAULT_BRANCHING_LIMIT).expect("mate in two exists");

        board.apply(&mv);
        assert!(is_forced_mate(&mut board, 1, DEFAULT_BRANCHING_LIMIT));
        board.undo(&mv);
    }

    #[test]
    fn test_no_mate_from_start_position() {
        let mut board = Board::new();

        assert_eq!(find(&mut board, DEFAULT_DEPTH, DEFAULT_BRANCHING_LIMIT), None);
    }

    #[test]
    fn test_zero_depth_finds_nothing() {
        let mut board = board(BACK_RANK);

        assert_eq!(find(&mut board, 0, DEFAULT_BRANCHING_LIMIT), None);
    }

    #[test]
    fn test_branching_limit_blocks_proof() {
        let mut board = board(ROOK_LADDER);

        // The defender always has at least one reply, so nothing past
        // mate-in-one can be proven.
        assert_eq!(find(&mut board, DEFAULT_DEPTH, 0), None);
    }

    #[test_case(Square::C7, 2, false; "stalemate is not mate")]
    #[test_case(Square::C8, 0, true; "checkmate at horizon")]
    #[test_case(Square::C4, 0, false; "quiet move at horizon")]
    fn test_is_forced_mate_after_queen_move(to: Square, depth: u32, expected: bool) {
        let mut board = board(QUEEN_CORNER);
        let mv = find_move(&board, Square::C5, to);

        board.apply(&mv);
        assert_eq!(
            is_forced_mate(&mut board, depth, DEFAULT_BRANCHING_LIMIT),
            expected
        );
        board.undo(&mv);
    }

    #[test]
    fn test_search_is_deterministic_and_leaves_board_untouched() {
        let mut board = board(ROOK_LADDER);
        let before = board.fen();

        let first = find(&mut board, DEFAULT_DEPTH, DEFAULT_BRANCHING_LIMIT);
        let second = find(&mut board, DEFAULT_DEPTH, DEFAULT_BRANCHING_LIMIT);

        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(board.fen(), before);
        assert_eq!(board.pending(), 0);
    }
}
