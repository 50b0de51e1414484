use shakmaty::{Color, Move, MoveList, Role, Square};

pub mod board;
pub mod host;
pub mod selector;
pub mod speculate;
pub mod strategy;
pub mod value;

pub use board::{Board, BoardError};
pub use selector::{MoveSelector, SelectError, SelectorConfig};
pub use strategy::{Decision, Tier};

/// One friendly piece at a point in time.
///
/// Not a stable identity: after any move is applied the square may be
/// stale, so capture a fresh set of refs instead of carrying one across
/// a speculative move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceRef {
    pub square: Square,
    pub role: Role,
    pub color: Color,
}

/// Trait for the rules engine the move selector runs on.
///
/// Abstracts over the concrete board implementation ([`Board`] wraps
/// shakmaty) so the strategies can be driven by any engine, including
/// recording doubles in tests. Every `apply` must be matched by an `undo`
/// of the same move in LIFO order; use [`speculate`] rather than calling
/// the pair by hand.
pub trait RulesEngine {
    /// All legal moves for the side to move, optionally only captures.
    ///
    /// Order is engine-defined but stable for a fixed position.
    fn legal_moves(&self, captures_only: bool) -> MoveList;

    /// Play `mv` for the side to move.
    fn apply(&mut self, mv: &Move);

    /// Take back `mv`, which must be the most recent pending application.
    fn undo(&mut self, mv: &Move);

    /// Pass the turn without moving.
    ///
    /// Returns `false` and leaves the position untouched when passing is
    /// not possible (the side to move is in check).
    fn try_skip_turn(&mut self) -> bool;

    /// Take back a successful [`RulesEngine::try_skip_turn`].
    fn undo_skip_turn(&mut self);

    /// Whether any opponent piece attacks `square`.
    fn is_square_attacked_by_opponent(&self, square: Square) -> bool;

    /// Whether the side to move is checkmated.
    fn is_checkmate(&self) -> bool;

    /// Every piece belonging to the side to move.
    fn friendly_pieces(&self) -> Vec<PieceRef>;
}
