//! Terminal host around the move selector: loads positions, plays moves and
//! asks the selector for replies. Not part of the selection core.

mod render;
mod terminal;

pub use render::render_board;
pub use terminal::run_interactive_terminal;

use thiserror::Error;

use crate::{BoardError, SelectError};

/// Errors surfaced to the terminal user.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to use terminal: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("no move to select: {0}")]
    Select(#[from] SelectError),
    #[error("usage: {0}")]
    Usage(&'static str),
}
