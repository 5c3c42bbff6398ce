//! Textual board and coordinate formats
//!
//! The board renders as a 15-line grid with a column header (`A`..`O`) on
//! top and bottom and row numbers on both sides, row 15 first. Stones are
//! `X` (Black) and `O` (White); empty cells show `.` unless a Black move
//! there would be forbidden, in which case the cell shows the mark of the
//! forbidden kind: `3` double-three, `4` double-four, `6` overline.
//!
//! `FromStr` accepts the same format back, ignoring surrounding text.
//! Forbidden marks parse as empty cells; the color to move is inferred
//! from the stone counts (more Black stones means White moves next).
//!
//! Coordinates render algebraically: column letter `a`..`o` plus row
//! number `1`..`15`, so the center cell is `h8`.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::{Board, Pos, Stone, BOARD_SIZE};
use crate::error::BoardError;
use crate::pattern::{Pattern, PatternUnit};
use crate::rules::ForbiddenKind;

const SYMBOL_BLACK: char = 'X';
const SYMBOL_WHITE: char = 'O';
const SYMBOL_EMPTY: char = '.';
const SYMBOL_DOUBLE_THREE: char = '3';
const SYMBOL_DOUBLE_FOUR: char = '4';
const SYMBOL_OVERLINE: char = '6';

fn forbidden_mark(kind: ForbiddenKind) -> char {
    match kind {
        ForbiddenKind::DoubleThree => SYMBOL_DOUBLE_THREE,
        ForbiddenKind::DoubleFour => SYMBOL_DOUBLE_FOUR,
        ForbiddenKind::Overline => SYMBOL_OVERLINE,
    }
}

/// Stone content of a cell symbol, `None` for the non-stone symbols
fn match_symbol(c: char) -> Option<Stone> {
    match c {
        SYMBOL_BLACK => Some(Stone::Black),
        SYMBOL_WHITE => Some(Stone::White),
        SYMBOL_EMPTY | SYMBOL_DOUBLE_THREE | SYMBOL_DOUBLE_FOUR | SYMBOL_OVERLINE => {
            Some(Stone::Empty)
        }
        _ => None,
    }
}

fn column_header() -> String {
    let letters: String = ('A'..)
        .take(BOARD_SIZE)
        .flat_map(|c| [c, ' '])
        .collect();
    format!("   {}", letters.trim_end())
}

/// Render the grid with one character per cell chosen by `symbol`,
/// framed by column headers and row numbers.
fn render_grid<F>(symbol: F) -> String
where
    F: Fn(Pos) -> char,
{
    let header = column_header();
    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');

    for row in (0..BOARD_SIZE).rev() {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| symbol(Pos::new(row as u8, col as u8)).to_string())
            .collect();
        out.push_str(&format!("{:>2} {} {}\n", row + 1, cells.join(" "), row + 1));
    }

    out.push_str(&header);
    out
}

impl Board {
    /// Multi-line dump of the board plus every shape counter grid for
    /// both colors. Debugging aid for pattern classification.
    pub fn to_detailed_string(&self) -> String {
        fn counter_grid(board: &Board, color: Stone, count: fn(&PatternUnit) -> u32) -> String {
            render_grid(|pos| match board.stone_at(pos) {
                Stone::Empty => {
                    let n = count(&PatternUnit::scan(board, pos, color));
                    if n > 0 {
                        char::from_digit(n, 10).unwrap_or('+')
                    } else {
                        SYMBOL_EMPTY
                    }
                }
                stone => stone_symbol(stone),
            })
        }

        let counters: [(&str, fn(&PatternUnit) -> u32); 5] = [
            ("open_three", PatternUnit::count_open_threes),
            ("close_three", PatternUnit::count_close_threes),
            ("open_four", PatternUnit::count_open_fours),
            ("closed_four", PatternUnit::count_closed_fours),
            ("five", PatternUnit::count_fives),
        ];

        let mut out = format!("{self}\n");
        for color in [Stone::Black, Stone::White] {
            out.push_str(if color == Stone::Black { "black\n" } else { "white\n" });
            for (label, count) in counters {
                out.push_str(label);
                out.push('\n');
                out.push_str(&counter_grid(self, color, count));
                out.push('\n');
            }
        }
        out
    }
}

fn stone_symbol(stone: Stone) -> char {
    match stone {
        Stone::Black => SYMBOL_BLACK,
        Stone::White => SYMBOL_WHITE,
        Stone::Empty => SYMBOL_EMPTY,
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rendered = render_grid(|pos| match self.stone_at(pos) {
            Stone::Empty => Pattern::at(self, pos)
                .forbidden_kind()
                .map(forbidden_mark)
                .unwrap_or(SYMBOL_EMPTY),
            stone => stone_symbol(stone),
        });
        f.write_str(&rendered)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse a rendered board. Lines that do not start with a row number
    /// are skipped, which also skips the column headers.
    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<Stone>> = Vec::with_capacity(BOARD_SIZE);

        for line in source.lines() {
            let line = line.trim_start();
            if !line.starts_with(|c: char| c.is_ascii_digit()) {
                continue;
            }

            let cells: Vec<Stone> = line
                .trim_start_matches(|c: char| c.is_ascii_digit())
                .chars()
                .filter_map(match_symbol)
                .take(BOARD_SIZE)
                .collect();

            if cells.len() != BOARD_SIZE {
                return Err(BoardError::InvalidLayout("short row"));
            }
            rows.push(cells);
        }

        if rows.len() != BOARD_SIZE {
            return Err(BoardError::InvalidLayout("expected 15 rows"));
        }

        // Rendered top-to-bottom as rows 15..1
        rows.reverse();

        let mut blacks = Vec::new();
        let mut whites = Vec::new();
        for (row, cells) in rows.iter().enumerate() {
            for (col, &stone) in cells.iter().enumerate() {
                let pos = Pos::new(row as u8, col as u8);
                match stone {
                    Stone::Black => blacks.push(pos),
                    Stone::White => whites.push(pos),
                    Stone::Empty => {}
                }
            }
        }

        // Black moves first, so a surplus Black stone puts White on move
        let player = if blacks.len() > whites.len() {
            Stone::White
        } else {
            Stone::Black
        };

        Board::from_each_color_moves(&blacks, &whites, player)
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Pos {
    type Err = BoardError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut chars = source.chars();
        let col = chars
            .next()
            .filter(char::is_ascii_lowercase)
            .map(|c| c as u8 - b'a')
            .ok_or(BoardError::InvalidLayout("expected column letter"))?;
        let row = chars
            .as_str()
            .parse::<u8>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or(BoardError::InvalidLayout("expected row number"))?;

        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Ok(Pos::new(row, col))
        } else {
            Err(BoardError::InvalidLayout("coordinate out of range"))
        }
    }
}
