//! Board representation for Renju

pub mod bitboard;
pub mod board;
pub mod io;
pub mod zobrist;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (15x15, the standard Renju board)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_black(self) -> bool {
        self == Stone::Black
    }
}

impl std::str::FromStr for Stone {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Stone::Black),
            "white" | "w" => Ok(Stone::White),
            _ => Err(crate::error::BoardError::InvalidLayout("unknown color")),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < TOTAL_CELLS);
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    /// Fallible conversion from a raw cell index, for indices coming from
    /// outside the crate.
    pub fn try_from_index(idx: usize) -> Result<Self, crate::error::BoardError> {
        if idx < TOTAL_CELLS {
            Ok(Self::from_index(idx))
        } else {
            Err(crate::error::BoardError::OutOfRange(idx))
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Offset by (delta row, delta col), returning None past the board edge
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        Self::is_valid(row, col).then(|| Self::new(row as u8, col as u8))
    }
}

impl TryFrom<usize> for Pos {
    type Error = crate::error::BoardError;

    fn try_from(idx: usize) -> Result<Self, Self::Error> {
        Self::try_from_index(idx)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// Line axis through a cell.
///
/// `Ascending` runs bottom-left to top-right (+row, +col); `Descending`
/// is the anti-diagonal (-row, +col).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    Ascending,
    Descending,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Ascending,
        Direction::Descending,
    ];

    /// Unit step (delta row, delta col) for the positive orientation
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Ascending => (1, 1),
            Direction::Descending => (-1, 1),
        }
    }
}
