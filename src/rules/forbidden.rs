//! Forbidden-move classification for Black
//!
//! Black may not play a move that creates two or more open threes
//! (double-three), two or more fours (double-four), or a row of six or
//! more (overline). White has no restrictions. A move that completes a
//! five is always legal for Black even if it simultaneously forms one of
//! the forbidden shapes: the win takes precedence.
//!
//! Classification is a pure per-cell query over [`PatternUnit`] counts.
//! Nested shapes are not re-validated: each open three counts toward a
//! double-three regardless of whether its own completion point would in
//! turn be forbidden.

use crate::board::{Board, Pos, Stone};
use crate::pattern::PatternUnit;

/// Why a Black placement at a cell is illegal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForbiddenKind {
    /// Two or more open threes in one move
    DoubleThree,
    /// Two or more fours, open or closed, in one move
    DoubleFour,
    /// A contiguous row of six or more
    Overline,
}

impl std::fmt::Display for ForbiddenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ForbiddenKind::DoubleThree => "double-three",
            ForbiddenKind::DoubleFour => "double-four",
            ForbiddenKind::Overline => "overline",
        };
        f.write_str(name)
    }
}

/// Classify an already-computed Black unit.
///
/// Precedence: a five legalizes everything, then overline, double-four,
/// double-three. Overline outranks the doubles because the shape exists
/// on the board the instant the stone lands, while a double only
/// threatens.
pub fn classify_unit(unit: &PatternUnit) -> Option<ForbiddenKind> {
    if unit.has_five() {
        return None;
    }
    if unit.has_overline() {
        return Some(ForbiddenKind::Overline);
    }
    if unit.count_total_fours() >= 2 {
        return Some(ForbiddenKind::DoubleFour);
    }
    if unit.count_open_threes() >= 2 {
        return Some(ForbiddenKind::DoubleThree);
    }
    None
}

/// Classify a Black placement at `pos`. `None` means the move is legal.
///
/// The query is hypothetical and does not require `pos` to be empty or
/// Black to be on move.
#[must_use]
pub fn forbidden_kind(board: &Board, pos: Pos) -> Option<ForbiddenKind> {
    let unit = PatternUnit::scan(board, pos, Stone::Black);
    classify_unit(&unit)
}

/// Classify a placement of `color` at `pos`. Always `None` for White.
#[must_use]
pub fn forbidden_kind_for(board: &Board, pos: Pos, color: Stone) -> Option<ForbiddenKind> {
    if color != Stone::Black {
        return None;
    }
    forbidden_kind(board, pos)
}

/// Whether a Black placement at `pos` is forbidden
#[inline]
#[must_use]
pub fn is_forbidden(board: &Board, pos: Pos) -> bool {
    forbidden_kind(board, pos).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(blacks: &[(u8, u8)], whites: &[(u8, u8)]) -> Board {
        let blacks: Vec<Pos> = blacks.iter().map(|&(r, c)| Pos::new(r, c)).collect();
        let whites: Vec<Pos> = whites.iter().map(|&(r, c)| Pos::new(r, c)).collect();
        Board::from_each_color_moves(&blacks, &whites, Stone::Black).unwrap()
    }

    #[test]
    fn test_empty_board_nothing_forbidden() {
        let b = Board::new();
        assert_eq!(forbidden_kind(&b, Pos::new(7, 7)), None);
    }

    #[test]
    fn test_double_three() {
        // Open pair horizontally and vertically meeting at h8
        let b = board(&[(7, 5), (7, 6), (5, 7), (6, 7)], &[]);
        assert_eq!(
            forbidden_kind(&b, Pos::new(7, 7)),
            Some(ForbiddenKind::DoubleThree)
        );
        assert!(is_forbidden(&b, Pos::new(7, 7)));
    }

    #[test]
    fn test_single_open_three_is_legal() {
        let b = board(&[(7, 5), (7, 6)], &[]);
        assert_eq!(forbidden_kind(&b, Pos::new(7, 7)), None);
    }

    #[test]
    fn test_blocked_three_does_not_make_double_three() {
        // The horizontal three is blocked by White, so only one open three
        let b = board(&[(7, 5), (7, 6), (5, 7), (6, 7)], &[(7, 4)]);
        assert_eq!(forbidden_kind(&b, Pos::new(7, 7)), None);
    }

    #[test]
    fn test_double_four_crossing_lines() {
        // Closed four horizontally (blocked left) and vertically (blocked top)
        let b = board(
            &[(7, 4), (7, 5), (7, 6), (4, 7), (5, 7), (6, 7)],
            &[(7, 3), (3, 7)],
        );
        assert_eq!(
            forbidden_kind(&b, Pos::new(7, 7)),
            Some(ForbiddenKind::DoubleFour)
        );
    }

    #[test]
    fn test_double_four_single_line() {
        // B B B . [pos] . B B B : two four threats on one line
        let b = board(&[(7, 0), (7, 1), (7, 2), (7, 6), (7, 7), (7, 8)], &[]);
        assert_eq!(
            forbidden_kind(&b, Pos::new(7, 4)),
            Some(ForbiddenKind::DoubleFour)
        );
    }

    #[test]
    fn test_two_open_fours_is_double_four_not_double_three() {
        // Open threes horizontally and vertically; playing the crossing
        // point turns both into open fours, so double-four wins precedence.
        let b = board(&[(7, 4), (7, 5), (7, 6), (4, 7), (5, 7), (6, 7)], &[]);
        assert_eq!(
            forbidden_kind(&b, Pos::new(7, 7)),
            Some(ForbiddenKind::DoubleFour)
        );
    }

    #[test]
    fn test_overline() {
        // B B [pos] B B B makes six in a row
        let b = board(&[(7, 5), (7, 6), (7, 8), (7, 9), (7, 10)], &[]);
        assert_eq!(
            forbidden_kind(&b, Pos::new(7, 7)),
            Some(ForbiddenKind::Overline)
        );
    }

    #[test]
    fn test_five_overrides_double_three() {
        // Completing a five while also forming crossing threes stays legal
        let b = board(
            &[(7, 3), (7, 4), (7, 5), (7, 6), (5, 7), (6, 7), (5, 5), (6, 6)],
            &[],
        );
        assert_eq!(forbidden_kind(&b, Pos::new(7, 7)), None);
    }

    #[test]
    fn test_five_overrides_overline_in_other_direction() {
        // Vertical five completion, horizontal would-be overline
        let b = board(
            &[
                (3, 7),
                (4, 7),
                (5, 7),
                (6, 7),
                (7, 5),
                (7, 6),
                (7, 8),
                (7, 9),
                (7, 10),
            ],
            &[],
        );
        assert_eq!(forbidden_kind(&b, Pos::new(7, 7)), None);
    }

    #[test]
    fn test_white_never_forbidden() {
        // Shape that would be an overline for Black
        let b = board(&[], &[(7, 5), (7, 6), (7, 8), (7, 9), (7, 10)]);
        assert_eq!(forbidden_kind_for(&b, Pos::new(7, 7), Stone::White), None);
    }

    #[test]
    fn test_open_three_plus_closed_four_is_legal() {
        // One four and one open three is neither double
        let b = board(&[(7, 4), (7, 5), (7, 6), (5, 7), (6, 7)], &[(7, 3)]);
        assert_eq!(forbidden_kind(&b, Pos::new(7, 7)), None);
    }

    #[test]
    fn test_mixed_open_and_closed_four_is_double_four() {
        // Open four horizontally plus closed four vertically
        let b = board(
            &[(7, 4), (7, 5), (7, 6), (4, 7), (5, 7), (6, 7)],
            &[(3, 7)],
        );
        assert_eq!(
            forbidden_kind(&b, Pos::new(7, 7)),
            Some(ForbiddenKind::DoubleFour)
        );
    }
}
