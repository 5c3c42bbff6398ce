//! Errors reported by board operations.
//!
//! Every variant signals a recoverable misuse of the API by the caller.
//! Operations never leave a half-applied board behind: a failed `set`,
//! `unset` or construction returns the error without touching any state.

use crate::board::Pos;

/// Error type for board mutation and construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// `set` targeted a cell that already holds a stone.
    #[error("cell {0:?} is already occupied")]
    OccupiedCell(Pos),

    /// `unset` targeted a cell with no stone to remove.
    #[error("cell {0:?} is empty")]
    EmptyCell(Pos),

    /// A raw cell index fell outside the 15x15 grid.
    #[error("cell index {0} is out of range")]
    OutOfRange(usize),

    /// A move in a construction sequence targeted an occupied cell.
    #[error("move #{index} targets occupied cell {pos:?}")]
    InvalidMove { index: usize, pos: Pos },

    /// A textual board layout could not be parsed.
    #[error("invalid board layout: {0}")]
    InvalidLayout(&'static str),
}
