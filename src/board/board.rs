//! Board structure with turn tracking and incremental hashing

use super::bitboard::Bitboard;
use super::zobrist::ZOBRIST;
use super::{Pos, Stone};
use crate::error::BoardError;

/// Game board: per-color occupancy, color to move, stone count and
/// an incrementally maintained zobrist hash.
///
/// The board is a plain value. `set`/`unset`/`pass` exist in a
/// copy-producing form (returns a new board, receiver untouched) and an
/// in-place `_mut` form over the same mutation logic. The copy-producing
/// form is the branching primitive for parallel search: each branch owns
/// an independent board and no locking is needed. The `_mut` form is for
/// linear replay such as game-record loading.
///
/// Equality is hash-key equality. Two boards with the same stones and the
/// same color to move always compare equal; distinct positions colliding
/// on a 64-bit hash is accepted as a trade-off for O(1) comparison.
#[derive(Debug, Clone, Copy)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
    player: Stone,
    stones: u32,
    hash: u64,
}

impl Board {
    /// Empty board, Black to move
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            player: Stone::Black,
            stones: 0,
            hash: ZOBRIST.side_key(),
        }
    }

    /// Build from an interleaved move list, Black moving first.
    pub fn from_moves(moves: &[Pos]) -> Result<Self, BoardError> {
        let mut board = Self::new();

        for (index, &pos) in moves.iter().enumerate() {
            board
                .set_mut(pos)
                .map_err(|_| BoardError::InvalidMove { index, pos })?;
        }

        log::debug!("built board from {} interleaved moves", moves.len());
        Ok(board)
    }

    /// Build from two per-color move lists plus an explicit color to move.
    ///
    /// The result is identical (grid and hash) to placing the same stones
    /// one at a time.
    pub fn from_each_color_moves(
        blacks: &[Pos],
        whites: &[Pos],
        player: Stone,
    ) -> Result<Self, BoardError> {
        debug_assert!(player != Stone::Empty);

        let mut board = Self::new();

        for (index, &pos) in blacks.iter().chain(whites).enumerate() {
            let color = if index < blacks.len() {
                Stone::Black
            } else {
                Stone::White
            };

            if !board.is_empty_at(pos) {
                return Err(BoardError::InvalidMove { index, pos });
            }

            board.field_mut(color).set(pos);
            board.stones += 1;
            board.hash ^= ZOBRIST.stone_key(pos, color);
        }

        if player == Stone::White {
            // Board::new() seeded the hash for Black to move
            board.hash ^= ZOBRIST.side_key();
            board.player = Stone::White;
        }

        log::debug!(
            "built board from {} black / {} white moves, {:?} to move",
            blacks.len(),
            whites.len(),
            player
        );
        Ok(board)
    }

    /// Color to move
    #[inline]
    pub fn player(&self) -> Stone {
        self.player
    }

    /// Whether Black is to move
    #[inline]
    pub fn player_is_black(&self) -> bool {
        self.player == Stone::Black
    }

    /// Total stones on board
    #[inline]
    pub fn stones(&self) -> u32 {
        self.stones
    }

    /// Current content hash
    #[inline]
    pub fn hash_key(&self) -> u64 {
        self.hash
    }

    /// Get stone at position
    #[inline]
    pub fn stone_at(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    pub(crate) fn black_field(&self) -> &Bitboard {
        &self.black
    }

    pub(crate) fn white_field(&self) -> &Bitboard {
        &self.white
    }

    #[inline]
    fn field_mut(&mut self, color: Stone) -> &mut Bitboard {
        match color {
            Stone::White => &mut self.white,
            _ => &mut self.black,
        }
    }

    /// Copy with `stone` forced at `pos`, nothing else touched.
    ///
    /// Hypothetical-placement primitive for pattern scanning; bypasses turn,
    /// counter and hash bookkeeping on purpose.
    pub(crate) fn with_stone(&self, pos: Pos, stone: Stone) -> Self {
        let mut copy = *self;
        copy.black.clear(pos);
        copy.white.clear(pos);
        match stone {
            Stone::Black => copy.black.set(pos),
            Stone::White => copy.white.set(pos),
            Stone::Empty => {}
        }
        copy
    }

    /// Place the stone of the color to move, returning the new board.
    pub fn set(&self, pos: Pos) -> Result<Self, BoardError> {
        let mut next = *self;
        next.set_mut(pos)?;
        Ok(next)
    }

    /// Place the stone of the color to move, in place.
    ///
    /// Flips the turn, increments the stone count and XOR-updates the hash.
    pub fn set_mut(&mut self, pos: Pos) -> Result<(), BoardError> {
        if !self.is_empty_at(pos) {
            return Err(BoardError::OccupiedCell(pos));
        }

        let color = self.player;
        self.field_mut(color).set(pos);
        self.stones += 1;
        self.hash ^= ZOBRIST.stone_key(pos, color) ^ ZOBRIST.side_key();
        self.player = color.opponent();
        Ok(())
    }

    /// Remove the stone at `pos`, returning the new board.
    pub fn unset(&self, pos: Pos) -> Result<Self, BoardError> {
        let mut next = *self;
        next.unset_mut(pos)?;
        Ok(next)
    }

    /// Remove the stone at `pos`, in place. Exact inverse of `set_mut`:
    /// reverts turn, stone count and hash.
    pub fn unset_mut(&mut self, pos: Pos) -> Result<(), BoardError> {
        let color = self.stone_at(pos);
        if color == Stone::Empty {
            return Err(BoardError::EmptyCell(pos));
        }

        self.field_mut(color).clear(pos);
        self.stones -= 1;
        self.hash ^= ZOBRIST.stone_key(pos, color);
        if color != self.player {
            // removing the last move hands the turn back to its author
            self.hash ^= ZOBRIST.side_key();
            self.player = color;
        }
        Ok(())
    }

    /// Flip the turn without placing a stone, returning the new board.
    /// Used to probe the position as the other color (null move).
    pub fn pass(&self) -> Self {
        let mut next = *self;
        next.pass_mut();
        next
    }

    /// Flip the turn without placing a stone, in place
    pub fn pass_mut(&mut self) {
        self.hash ^= ZOBRIST.side_key();
        self.player = self.player.opponent();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Board {}
