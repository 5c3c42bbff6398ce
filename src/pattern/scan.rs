//! Line scanning: contiguous runs and end openness
//!
//! The scanner is the only code that reads raw grid cells for shape
//! classification. For one cell, color and direction it walks outward both
//! ways and reports the contiguous run length through the cell plus the
//! state of each end. The cell itself is treated as occupied by the color
//! even if it is empty on the board, which is how "what would happen if I
//! played here" queries work without mutating the board.

use crate::board::{Board, Direction, Pos, Stone};

/// State of one end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndState {
    /// In-bounds empty cell
    Open,
    /// Opponent stone
    Blocked,
    /// Board edge; a distinct value, not an error
    Edge,
}

impl EndState {
    #[inline]
    pub fn is_open(self) -> bool {
        self == EndState::Open
    }
}

/// Contiguous same-color run through one cell in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunClassification {
    /// Number of contiguous stones including the origin cell
    pub length: u8,
    /// End state in the positive orientation of the axis
    pub forward: EndState,
    /// End state in the negative orientation
    pub backward: EndState,
}

/// Scan the run of `color` through `pos` along `direction`.
///
/// `pos` is hypothetically treated as `color` regardless of its actual
/// content; the walk never reads the origin cell.
pub fn scan_run(board: &Board, pos: Pos, color: Stone, direction: Direction) -> RunClassification {
    debug_assert!(color != Stone::Empty);
    let (dr, dc) = direction.delta();

    let (fwd_len, forward) = walk(board, pos, color, dr, dc);
    let (bwd_len, backward) = walk(board, pos, color, -dr, -dc);

    RunClassification {
        length: 1 + fwd_len + bwd_len,
        forward,
        backward,
    }
}

/// Walk outward from `pos` (exclusive), counting contiguous `color` stones
fn walk(board: &Board, pos: Pos, color: Stone, dr: i32, dc: i32) -> (u8, EndState) {
    let mut length = 0u8;
    let mut cursor = pos;

    loop {
        match cursor.offset(dr, dc) {
            None => return (length, EndState::Edge),
            Some(next) => match board.stone_at(next) {
                s if s == color => {
                    length += 1;
                    cursor = next;
                }
                Stone::Empty => return (length, EndState::Open),
                _ => return (length, EndState::Blocked),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_isolated_cell() {
        let board = Board::new();
        let run = scan_run(&board, Pos::new(7, 7), Stone::Black, Direction::Horizontal);

        assert_eq!(run.length, 1);
        assert_eq!(run.forward, EndState::Open);
        assert_eq!(run.backward, EndState::Open);
    }

    #[test]
    fn test_scan_counts_through_cell() {
        // B B [pos] B with open ends
        let board = Board::from_each_color_moves(
            &[Pos::new(7, 5), Pos::new(7, 6), Pos::new(7, 8)],
            &[],
            Stone::White,
        )
        .unwrap();

        let run = scan_run(&board, Pos::new(7, 7), Stone::Black, Direction::Horizontal);
        assert_eq!(run.length, 4);
        assert!(run.forward.is_open());
        assert!(run.backward.is_open());
    }

    #[test]
    fn test_scan_stops_at_gap() {
        // B . [pos]: the gap ends the run even with a stone beyond it
        let board =
            Board::from_each_color_moves(&[Pos::new(7, 5)], &[], Stone::White).unwrap();

        let run = scan_run(&board, Pos::new(7, 7), Stone::Black, Direction::Horizontal);
        assert_eq!(run.length, 1);
        assert_eq!(run.backward, EndState::Open);
    }

    #[test]
    fn test_scan_blocked_by_opponent() {
        // W B [pos]
        let board = Board::from_each_color_moves(
            &[Pos::new(7, 6)],
            &[Pos::new(7, 5)],
            Stone::Black,
        )
        .unwrap();

        let run = scan_run(&board, Pos::new(7, 7), Stone::Black, Direction::Horizontal);
        assert_eq!(run.length, 2);
        assert_eq!(run.backward, EndState::Blocked);
        assert_eq!(run.forward, EndState::Open);
    }

    #[test]
    fn test_scan_edge_is_not_error() {
        // Corner cell: both diagonal arms leave the board immediately
        let board = Board::new();
        let run = scan_run(&board, Pos::new(0, 0), Stone::Black, Direction::Ascending);

        assert_eq!(run.length, 1);
        assert_eq!(run.backward, EndState::Edge);
        assert_eq!(run.forward, EndState::Open);
    }

    #[test]
    fn test_scan_run_to_edge() {
        // Stones in the corner row: B B [pos] at cols 0..=2 of row 0
        let board = Board::from_each_color_moves(
            &[Pos::new(0, 0), Pos::new(0, 1)],
            &[],
            Stone::White,
        )
        .unwrap();

        let run = scan_run(&board, Pos::new(0, 2), Stone::Black, Direction::Horizontal);
        assert_eq!(run.length, 3);
        assert_eq!(run.backward, EndState::Edge);
    }

    #[test]
    fn test_scan_hypothetical_ignores_actual_content() {
        // The origin cell holds a White stone, but scanning for Black
        // pretends it is Black.
        let board = Board::from_each_color_moves(
            &[Pos::new(7, 6)],
            &[Pos::new(7, 7)],
            Stone::Black,
        )
        .unwrap();

        let run = scan_run(&board, Pos::new(7, 7), Stone::Black, Direction::Horizontal);
        assert_eq!(run.length, 2);
    }

    #[test]
    fn test_scan_vertical_and_diagonals() {
        let board = Board::from_each_color_moves(
            &[
                Pos::new(6, 7), // below pos, vertical
                Pos::new(8, 8), // ascending
                Pos::new(6, 8), // descending
            ],
            &[],
            Stone::White,
        )
        .unwrap();
        let pos = Pos::new(7, 7);

        assert_eq!(scan_run(&board, pos, Stone::Black, Direction::Vertical).length, 2);
        assert_eq!(scan_run(&board, pos, Stone::Black, Direction::Ascending).length, 2);
        assert_eq!(scan_run(&board, pos, Stone::Black, Direction::Descending).length, 2);
        assert_eq!(scan_run(&board, pos, Stone::Black, Direction::Horizontal).length, 1);
    }
}
