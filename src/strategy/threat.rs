//! Responding to threats against our own pieces.
//!
//! Threatened pieces are handled from the most valuable down; the first
//! piece with any acceptable response decides the move. For one piece the
//! responses are tried in this order:
//!
//! 1. If a null-move probe shows the opponent really can take it, move it
//!    somewhere the opponent cannot capture it afterwards.
//! 2. Capture a piece worth at least as much as it.
//! 3. Move it to a square the opponent does not currently attack.
//! 4. Capture anything, accepting a losing trade.
//!
//! Steps 1 and 3 skip moves that would stalemate the opponent. When the
//! side to move is in check the probe is not possible and step 1 is skipped.

use std::cmp::Reverse;

use shakmaty::{Move, Square};

use crate::speculate::{SkippedTurn, Speculation};
use crate::strategy::is_self_stalemate;
use crate::value::{capture_value, piece_value};
use crate::{PieceRef, RulesEngine};

/// Response for the most valuable threatened piece that has one.
pub fn find<R: RulesEngine>(engine: &mut R) -> Option<Move> {
    for piece in threatened_pieces(&*engine) {
        log::trace!("{:?} on {} is attacked", piece.role, piece.square);
        if let Some(mv) = respond(engine, piece) {
            return Some(mv);
        }
    }
    None
}

/// Friendly pieces on attacked squares, most valuable first.
pub fn threatened_pieces<R: RulesEngine>(engine: &R) -> Vec<PieceRef> {
    let mut pieces: Vec<PieceRef> = engine
        .friendly_pieces()
        .into_iter()
        .filter(|piece| engine.is_square_attacked_by_opponent(piece.square))
        .collect();
    pieces.sort_by_key(|piece| Reverse(piece_value(piece.role)));
    pieces
}

fn respond<R: RulesEngine>(engine: &mut R, piece: PieceRef) -> Option<Move> {
    if danger_confirmed(engine, piece.square)
        && let Some(mv) = safe_escape(engine, piece.square)
    {
        log::debug!("{:?} is in trouble so moving it: {mv:?}", piece.role);
        return Some(mv);
    }

    let value = piece_value(piece.role);
    let mut captures = engine.legal_moves(true);
    captures.retain(|mv| mv.from() == Some(piece.square));
    captures.sort_by_key(|mv| Reverse(capture_value(mv)));
    // Sorted by victim, so everything worth at least `value` comes first.
    let (good, bad): (Vec<Move>, Vec<Move>) = captures
        .into_iter()
        .partition(|mv| capture_value(mv) >= value);

    if let Some(mv) = good.into_iter().next() {
        log::debug!("{:?} answers the threat by capturing: {mv:?}", piece.role);
        return Some(mv);
    }
    if let Some(mv) = escape_to_unattacked(engine, piece.square) {
        log::debug!("{:?} escapes to an unattacked square: {mv:?}", piece.role);
        return Some(mv);
    }
    let mv = bad.into_iter().next()?;
    log::debug!("{:?} trades down rather than waiting: {mv:?}", piece.role);
    Some(mv)
}

/// Pass the turn and see whether the opponent could take on `square`.
///
/// `false` when passing is not possible.
fn danger_confirmed<R: RulesEngine>(engine: &mut R, square: Square) -> bool {
    SkippedTurn::try_new(engine).is_some_and(|passed| {
        passed
            .legal_moves(true)
            .iter()
            .any(|mv| mv.to() == square)
    })
}

/// First move of the piece on `from` after which no opponent capture lands
/// on its new square.
fn safe_escape<R: RulesEngine>(engine: &mut R, from: Square) -> Option<Move> {
    // Castling never shows up here: a threatened king is in check and a
    // castling move starts on the king's square, not the rook's.
    moves_from(&*engine, from).into_iter().find(|mv| {
        let target = mv.to();
        let safe = {
            let after = Speculation::apply(&mut *engine, mv);
            !after
                .legal_moves(true)
                .iter()
                .any(|reply| reply.to() == target)
        };
        safe && !is_self_stalemate(&mut *engine, mv)
    })
}

/// First move of the piece on `from` to a square not attacked right now.
fn escape_to_unattacked<R: RulesEngine>(engine: &mut R, from: Square) -> Option<Move> {
    moves_from(&*engine, from).into_iter().find(|mv| {
        !engine.is_square_attacked_by_opponent(mv.to()) && !is_self_stalemate(&mut *engine, mv)
    })
}

fn moves_from<R: RulesEngine>(engine: &R, from: Square) -> Vec<Move> {
    engine
        .legal_moves(false)
        .into_iter()
        .filter(|mv| mv.from() == Some(from))
        .collect()
}
