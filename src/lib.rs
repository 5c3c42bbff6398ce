//! Renju board engine
//!
//! Board state and tactical classification for Renju, the tournament
//! variant of five-in-a-row:
//! - Standard 15x15 board
//! - Exactly 5-in-a-row wins for Black, 5 or more for White
//! - Black forbidden moves: double-three, double-four and overline,
//!   except when the move also completes a five
//!
//! # Architecture
//!
//! - [`board`]: board state, bitboards, zobrist hashing and the textual
//!   board format
//! - [`pattern`]: per-cell shape classification (threes, fours, fives)
//! - [`rules`]: the forbidden-move classifier built on top of patterns
//!
//! # Quick Start
//!
//! ```
//! use renju::{forbidden_kind, Board, ForbiddenKind, Pos, Stone};
//!
//! // Black open pairs crossing at h8
//! let board = Board::from_each_color_moves(
//!     &[Pos::new(7, 5), Pos::new(7, 6), Pos::new(5, 7), Pos::new(6, 7)],
//!     &[],
//!     Stone::Black,
//! ).unwrap();
//!
//! // playing h8 would create two open threes at once
//! assert_eq!(forbidden_kind(&board, Pos::new(7, 7)), Some(ForbiddenKind::DoubleThree));
//! ```
//!
//! The board is a plain `Copy` value: `set`/`unset`/`pass` come in a
//! copy-producing form for search branching and a `_mut` form for linear
//! replay. Position identity is an incrementally maintained zobrist hash.

pub mod board;
pub mod error;
pub mod pattern;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Direction, Pos, Stone, BOARD_SIZE};
pub use error::BoardError;
pub use pattern::{Pattern, PatternUnit};
pub use rules::{forbidden_kind, is_forbidden, ForbiddenKind};
