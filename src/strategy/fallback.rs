use shakmaty::Move;

use crate::RulesEngine;
use crate::speculate::Speculation;

/// First legal move that does not stalemate the opponent.
///
/// If every move stalemates, the first legal move is returned anyway.
/// `None` only when there are no legal moves at all.
pub fn find<R: RulesEngine>(engine: &mut R) -> Option<Move> {
    let mut moves = engine.legal_moves(false).into_iter();
    let first = moves.next()?;
    if !is_self_stalemate(engine, &first) {
        log::debug!("resorting to first safe move: {first:?}");
        return Some(first);
    }

    let mv = moves
        .find(|mv| !is_self_stalemate(&mut *engine, mv))
        .unwrap_or(first);
    log::debug!("resorting to fallback move: {mv:?}");
    Some(mv)
}

/// Whether playing `mv` leaves the opponent with no legal move while not
/// checkmated.
pub fn is_self_stalemate<R: RulesEngine>(engine: &mut R, mv: &Move) -> bool {
    let after = Speculation::apply(engine, mv);
    after.legal_moves(false).is_empty() && !after.is_checkmate()
}
