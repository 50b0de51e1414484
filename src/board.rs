use shakmaty::{
    CastlingMode, Chess, Color, EnPassantMode, Move, MoveList, Piece, Position, Square, fen::Fen,
    uci::UciMove,
};
use thiserror::Error;

use crate::{PieceRef, RulesEngine};

/// Errors from loading positions and committing real moves.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    #[error("invalid position: {0}")]
    InvalidPosition(String),
    #[error("illegal move: {0}")]
    IllegalMove(String),
    #[error("cannot commit a move with {depth} speculative move(s) pending")]
    Speculating { depth: usize },
}

/// Rules engine backed by shakmaty.
///
/// Speculative moves are taken back by restoring a snapshot, so `undo`
/// is exact for every move kind (castling, en passant, promotion) and for
/// null moves.
#[derive(Clone, Default)]
pub struct Board {
    /// The position the next move is played from.
    position: Chess,

    /// Snapshots taken before each pending speculative move, innermost last.
    history: Vec<Chess>,
}

impl Board {
    #[inline]
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    /// Creates a board from an existing chess position.
    pub fn from_position(position: Chess) -> Self {
        Self {
            position,
            history: Vec::new(),
        }
    }

    /// Parses a FEN string into a board.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let fen = fen
            .parse::<Fen>()
            .map_err(|e| BoardError::InvalidFen(e.to_string()))?;
        let position: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| BoardError::InvalidPosition(e.to_string()))?;
        Ok(Self::from_position(position))
    }

    /// FEN of the current position, including any pending speculation.
    pub fn fen(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }

    /// Side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    /// Get the piece at a given square, if any
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square)
    }

    /// Number of speculative moves not yet taken back.
    #[inline]
    pub fn pending(&self) -> usize {
        self.history.len()
    }

    /// Commit a real move.
    ///
    /// Unlike [`RulesEngine::apply`] the move is checked for legality and
    /// cannot be undone.
    pub fn play(&mut self, mv: &Move) -> Result<(), BoardError> {
        if !self.history.is_empty() {
            return Err(BoardError::Speculating {
                depth: self.history.len(),
            });
        }
        if !self.position.legal_moves().contains(mv) {
            return Err(BoardError::IllegalMove(format!("{mv:?}")));
        }
        self.position.play_unchecked(mv.clone());
        Ok(())
    }

    /// Parse a UCI move (`e2e4`, `e7e8q`, `e1g1`) and commit it.
    pub fn play_uci(&mut self, uci: &str) -> Result<Move, BoardError> {
        let mv = uci
            .parse::<UciMove>()
            .map_err(|e| BoardError::IllegalMove(format!("{uci}: {e}")))?
            .to_move(&self.position)
            .map_err(|e| BoardError::IllegalMove(format!("{uci}: {e}")))?;
        self.play(&mv)?;
        Ok(mv)
    }
}

/// Render a move in UCI notation.
pub fn uci(mv: &Move) -> String {
    mv.to_uci(CastlingMode::Standard).to_string()
}

impl RulesEngine for Board {
    fn legal_moves(&self, captures_only: bool) -> MoveList {
        let mut moves = self.position.legal_moves();
        if captures_only {
            moves.retain(|mv| mv.is_capture());
        }
        moves
    }

    fn apply(&mut self, mv: &Move) {
        self.history.push(self.position.clone());
        self.position.play_unchecked(mv.clone());
    }

    fn undo(&mut self, _mv: &Move) {
        self.position = self
            .history
            .pop()
            .expect("undo without a matching speculative move");
    }

    fn try_skip_turn(&mut self) -> bool {
        if self.position.is_check() {
            return false;
        }
        match self.position.clone().swap_turn() {
            Ok(swapped) => {
                let before = std::mem::replace(&mut self.position, swapped);
                self.history.push(before);
                true
            }
            Err(err) => {
                log::trace!("null move rejected: {err}");
                false
            }
        }
    }

    fn undo_skip_turn(&mut self) {
        self.position = self
            .history
            .pop()
            .expect("undo_skip_turn without a matching skipped turn");
    }

    fn is_square_attacked_by_opponent(&self, square: Square) -> bool {
        let board = self.position.board();
        !board
            .attacks_to(square, self.position.turn().other(), board.occupied())
            .is_empty()
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn friendly_pieces(&self) -> Vec<PieceRef> {
        let color = self.position.turn();
        let board = self.position.board();
        board
            .by_color(color)
            .into_iter()
            .filter_map(|square| {
                board.role_at(square).map(|role| PieceRef {
                    square,
                    role,
                    color,
                })
            })
            .collect()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fen = Fen::from_position(&self.position, EnPassantMode::Always);
        f.debug_struct("Board")
            .field("position", &fen)
            .field("pending", &self.history.len())
            .finish()
    }
}
