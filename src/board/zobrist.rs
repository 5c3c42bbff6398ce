//! Zobrist hashing for position identification
//!
//! Each (cell, color) pair gets a fixed random u64 key, plus one key toggled
//! when Black is to move. The board hash is the XOR of the keys of all
//! occupied cells, so placing or removing a stone is an O(1) hash update and
//! the result is independent of move order.

use std::sync::LazyLock;

use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use super::{Board, Pos, Stone, TOTAL_CELLS};

/// Fixed seed so hashes are reproducible across runs and builds.
const ZOBRIST_SEED: u64 = 0x52E5_4A75_1234_9CE7;

/// Shared key table, generated once on first use.
pub static ZOBRIST: LazyLock<ZobristTable> = LazyLock::new(ZobristTable::new);

/// Zobrist key table for position hashing.
pub struct ZobristTable {
    black: [u64; TOTAL_CELLS],
    white: [u64; TOTAL_CELLS],
    black_to_move: u64,
}

impl ZobristTable {
    fn new() -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(ZOBRIST_SEED);

        let mut black = [0u64; TOTAL_CELLS];
        let mut white = [0u64; TOTAL_CELLS];
        for i in 0..TOTAL_CELLS {
            black[i] = rng.next_u64();
            white[i] = rng.next_u64();
        }

        Self {
            black,
            white,
            black_to_move: rng.next_u64(),
        }
    }

    /// Key for one stone at one cell
    #[inline]
    pub fn stone_key(&self, pos: Pos, stone: Stone) -> u64 {
        match stone {
            Stone::Black => self.black[pos.to_index()],
            Stone::White => self.white[pos.to_index()],
            Stone::Empty => 0,
        }
    }

    /// Key toggled while Black is to move
    #[inline]
    pub fn side_key(&self) -> u64 {
        self.black_to_move
    }

    /// Compute the full hash for a board from scratch.
    ///
    /// Incremental updates in `set_mut`/`unset_mut` must always agree with
    /// this; it exists for bulk construction and as the test oracle.
    #[must_use]
    pub fn hash(&self, board: &Board) -> u64 {
        let mut h = 0u64;

        for pos in board.black_field().iter_ones() {
            h ^= self.black[pos.to_index()];
        }

        for pos in board.white_field().iter_ones() {
            h ^= self.white[pos.to_index()];
        }

        if board.player_is_black() {
            h ^= self.black_to_move;
        }

        h
    }
}
