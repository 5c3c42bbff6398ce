//! Tactical shape classification
//!
//! A [`PatternUnit`] aggregates the four directional scans for one color at
//! one cell into counts of each tactical shape: threes, fours and fives.
//! All counts describe the hypothetical placement of that color at the cell,
//! so querying an empty cell answers "what would this move create".
//!
//! Shape definitions (the core tactical rules of the game):
//! - five: a contiguous run of exactly 5 for Black, 5 or more for White.
//!   Black runs of 6+ are overlines, tracked separately for the forbidden
//!   rule, and never count as fives.
//! - open four: a contiguous run of 4 whose both ends complete a five.
//! - closed four: any other shape one stone away from a five; a direction
//!   can hold two of them (split shapes such as `OO_OO_OO`).
//! - open three: a shape that one more stone turns into an open four.
//! - close three: not an open three, but one more stone on exactly one
//!   side turns it into a four.
//!
//! One-gap broken shapes (`_OO_O_`) classify the same as solid ones; every
//! rule above is evaluated by simulated placement, not by template matching.

pub mod scan;

pub use scan::{EndState, RunClassification};

use crate::board::{Board, Direction, Pos, Stone};
use crate::rules::forbidden::{self, ForbiddenKind};

use scan::scan_run;

/// Shape counts for one color at one cell, summed over the 4 directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternUnit {
    open_threes: u8,
    close_threes: u8,
    open_fours: u8,
    closed_fours: u8,
    fives: u8,
    overlines: u8,
}

impl PatternUnit {
    /// Classify the hypothetical placement of `color` at `pos`.
    ///
    /// The cell is treated as occupied by `color` for the scan even when it
    /// is empty or holds the opponent on the actual board.
    #[must_use]
    pub fn scan(board: &Board, pos: Pos, color: Stone) -> Self {
        debug_assert!(color != Stone::Empty);

        let placed = board.with_stone(pos, color);
        let mut unit = Self::default();

        for direction in Direction::ALL {
            classify_direction(&placed, pos, color, direction, &mut unit);
        }

        unit
    }

    #[inline]
    pub fn count_open_threes(&self) -> u32 {
        self.open_threes as u32
    }

    #[inline]
    pub fn count_close_threes(&self) -> u32 {
        self.close_threes as u32
    }

    #[inline]
    pub fn count_open_fours(&self) -> u32 {
        self.open_fours as u32
    }

    #[inline]
    pub fn count_closed_fours(&self) -> u32 {
        self.closed_fours as u32
    }

    /// Open fours plus closed fours
    #[inline]
    pub fn count_total_fours(&self) -> u32 {
        self.count_open_fours() + self.count_closed_fours()
    }

    #[inline]
    pub fn count_fives(&self) -> u32 {
        self.fives as u32
    }

    /// Directions forming a 6+ run; Black only, drives the overline rule
    #[inline]
    pub fn count_overlines(&self) -> u32 {
        self.overlines as u32
    }

    #[inline]
    pub fn has_five(&self) -> bool {
        self.fives > 0
    }

    #[inline]
    pub fn has_overline(&self) -> bool {
        self.overlines > 0
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Per-cell query result: both color units plus the forbidden verdict
/// for a Black placement at the cell.
///
/// A snapshot of the board it was computed from; never stored.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub black: PatternUnit,
    pub white: PatternUnit,
    forbidden: Option<ForbiddenKind>,
}

impl Pattern {
    /// Classify both colors at `pos` on the current board.
    #[must_use]
    pub fn at(board: &Board, pos: Pos) -> Self {
        let black = PatternUnit::scan(board, pos, Stone::Black);
        let white = PatternUnit::scan(board, pos, Stone::White);
        let forbidden = board
            .is_empty_at(pos)
            .then(|| forbidden::classify_unit(&black))
            .flatten();

        Self {
            black,
            white,
            forbidden,
        }
    }

    /// Unit for one color
    #[inline]
    pub fn unit(&self, color: Stone) -> &PatternUnit {
        match color {
            Stone::White => &self.white,
            _ => &self.black,
        }
    }

    /// Forbidden verdict for a Black placement at the cell
    #[inline]
    pub fn forbidden_kind(&self) -> Option<ForbiddenKind> {
        self.forbidden
    }

    #[inline]
    pub fn is_forbidden(&self) -> bool {
        self.forbidden.is_some()
    }
}

/// Whether a run of `length` is a five for `color`.
/// Black requires exactly 5; 6+ is an overline, not a win.
#[inline]
fn is_five(color: Stone, length: u8) -> bool {
    match color {
        Stone::Black => length == 5,
        _ => length >= 5,
    }
}

/// Classify one direction of a hypothetical placement.
///
/// `placed` must already contain `color` at `pos`. A direction that forms a
/// five or an overline contributes nothing else; otherwise it contributes
/// fours, then threes, by simulated placement of the completing stone.
fn classify_direction(
    placed: &Board,
    pos: Pos,
    color: Stone,
    direction: Direction,
    unit: &mut PatternUnit,
) {
    let run = scan_run(placed, pos, color, direction);

    if is_five(color, run.length) {
        unit.fives += 1;
        return;
    }

    if color == Stone::Black && run.length >= 6 {
        unit.overlines += 1;
        return;
    }

    let completions = count_five_completions(placed, pos, color, direction);
    if completions > 0 {
        if run.length == 4 && completions >= 2 {
            // a straight four: both ends win
            unit.open_fours += 1;
        } else {
            unit.closed_fours += completions.min(2);
        }
        return;
    }

    // Three detection: does one more stone turn this shape into a four?
    let mut open_extension = false;
    let mut extends_forward = false;
    let mut extends_backward = false;

    let (dr, dc) = direction.delta();
    for step in -4i32..=4 {
        if step == 0 {
            continue;
        }
        let Some(cell) = pos.offset(dr * step, dc * step) else {
            continue;
        };
        if !placed.is_empty_at(cell) {
            continue;
        }

        let extended = placed.with_stone(cell, color);
        let ext_run = scan_run(&extended, pos, color, direction);
        if color == Stone::Black && ext_run.length >= 6 {
            // extension into an overline is not a four path for Black
            continue;
        }

        let ext_completions = count_five_completions(&extended, pos, color, direction);
        if ext_completions == 0 {
            continue;
        }

        if ext_run.length == 4 && ext_completions >= 2 {
            open_extension = true;
            break;
        }
        if step > 0 {
            extends_forward = true;
        } else {
            extends_backward = true;
        }
    }

    if open_extension {
        unit.open_threes += 1;
    } else if extends_forward != extends_backward {
        unit.close_threes += 1;
    }
}

/// Count the empty cells within 4 steps along `direction` whose placement
/// makes the run through `pos` a five.
///
/// For Black a cell producing a 6+ run is not a completion: the move would
/// be an overline, so the shape is no closer to a win through it.
fn count_five_completions(placed: &Board, pos: Pos, color: Stone, direction: Direction) -> u8 {
    let (dr, dc) = direction.delta();
    let mut completions = 0u8;

    for step in -4i32..=4 {
        if step == 0 {
            continue;
        }
        let Some(cell) = pos.offset(dr * step, dc * step) else {
            continue;
        };
        if !placed.is_empty_at(cell) {
            continue;
        }

        let filled = placed.with_stone(cell, color);
        let run = scan_run(&filled, pos, color, direction);
        if is_five(color, run.length) {
            completions += 1;
        }
    }

    completions
}
