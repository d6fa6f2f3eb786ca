//! The 9×9 board and its text parser.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, Position};

/// An error that can occur when parsing a board from text.
///
/// Parsing fails rather than returning a partial board; a caller must not
/// hand a partially parsed board to the game engine. None of these errors
/// are fatal to the process, so the caller can surface the message and retry
/// with a different puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The input did not contain exactly 9 non-empty lines.
    #[display("expected 9 puzzle lines, found {found}")]
    WrongLineCount {
        /// Number of non-empty lines found.
        found: usize,
    },
    /// A line was not exactly 9 characters long.
    #[display("line {line} must be exactly 9 characters, found {found}")]
    WrongLineLength {
        /// Zero-based index of the offending line.
        line: usize,
        /// Number of characters found on that line.
        found: usize,
    },
    /// A character was not an ASCII digit.
    #[display("invalid character {found:?} at line {line}, column {column}")]
    InvalidCharacter {
        /// Zero-based index of the offending line.
        line: usize,
        /// Zero-based column of the offending character.
        column: usize,
        /// The offending character.
        found: char,
    },
}

/// A 9×9 board of optionally filled cells.
///
/// The same type represents both the immutable puzzle (the given cells) and
/// the working board the player fills in. Cells hold `Option<Digit>`, with
/// `None` standing for the `'0'` (empty) cells of the text format.
///
/// # Text format
///
/// Exactly 9 lines of exactly 9 ASCII digits each; `'0'` denotes an empty
/// cell. Trailing whitespace on a line is trimmed and blank lines are
/// ignored, but no whitespace is tolerated inside a line.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Board, Digit, Position};
///
/// let board = Board::from_lines([
///     "123456789",
///     "456789123",
///     "789123456",
///     "234567891",
///     "567891234",
///     "891234567",
///     "345678912",
///     "678912345",
///     "912345678",
/// ])
/// .unwrap();
/// assert_eq!(board.get(Position::new(8, 8)), Some(Digit::D8));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Digit>; 9]; 9],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Parses a board from a sequence of text lines.
    ///
    /// Validation is performed in a fixed order, each rule producing a
    /// distinct error:
    ///
    /// 1. exactly 9 non-empty lines after trimming trailing whitespace,
    /// 2. every line exactly 9 characters,
    /// 3. every character an ASCII digit `'0'`-`'9'`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseBoardError`] encountered in the order above.
    pub fn from_lines<I>(lines: I) -> Result<Self, ParseBoardError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim_end().to_owned())
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() != 9 {
            return Err(ParseBoardError::WrongLineCount { found: lines.len() });
        }

        // All lengths are checked before any character, so a short line is
        // always reported ahead of a stray character on an earlier line.
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != 9 {
                return Err(ParseBoardError::WrongLineLength { line: y, found });
            }
        }

        let mut board = Self::new();
        for (y, line) in lines.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                if !c.is_ascii_digit() {
                    return Err(ParseBoardError::InvalidCharacter {
                        line: y,
                        column: x,
                        found: c,
                    });
                }
                board.cells[y][x] = Digit::try_from_value(c as u8 - b'0');
            }
        }
        Ok(board)
    }

    /// Returns the digit at the given position, or `None` if the cell is
    /// empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[usize::from(pos.y())][usize::from(pos.x())]
    }

    /// Sets or clears the cell at the given position.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[usize::from(pos.y())][usize::from(pos.x())] = digit;
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(s.lines())
    }
}

impl Display for Board {
    /// Renders the board in the same 9-line text format the parser accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "0")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SOLVED: [&str; 9] = [
        "123456789",
        "456789123",
        "789123456",
        "234567891",
        "567891234",
        "891234567",
        "345678912",
        "678912345",
        "912345678",
    ];

    #[test]
    fn test_parse_maps_digits_and_zeros() {
        let board = Board::from_lines(["103456789"].into_iter().chain(SOLVED[1..].iter().copied()))
            .unwrap();
        assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D1));
        assert_eq!(board.get(Position::new(1, 0)), None);
        assert_eq!(board.get(Position::new(2, 0)), Some(Digit::D3));
        assert_eq!(board.get(Position::new(0, 8)), Some(Digit::D9));
    }

    #[test]
    fn test_parse_rejects_too_few_lines() {
        let result = Board::from_lines(&SOLVED[..8]);
        assert_eq!(result, Err(ParseBoardError::WrongLineCount { found: 8 }));
    }

    #[test]
    fn test_parse_rejects_too_many_lines() {
        let lines: Vec<_> = SOLVED.iter().chain(&["123456789"]).collect();
        let result = Board::from_lines(lines);
        assert_eq!(result, Err(ParseBoardError::WrongLineCount { found: 10 }));
    }

    #[test]
    fn test_parse_rejects_short_line() {
        let mut lines = SOLVED;
        lines[4] = "12345678";
        let result = Board::from_lines(lines);
        assert_eq!(
            result,
            Err(ParseBoardError::WrongLineLength { line: 4, found: 8 })
        );
    }

    #[test]
    fn test_parse_rejects_letter_at_exact_location() {
        let mut lines = SOLVED;
        lines[2] = "789x23456";
        let result = Board::from_lines(lines);
        assert_eq!(
            result,
            Err(ParseBoardError::InvalidCharacter {
                line: 2,
                column: 3,
                found: 'x',
            })
        );
    }

    #[test]
    fn test_parse_rejects_inner_whitespace_as_invalid_character() {
        let mut lines = SOLVED;
        lines[0] = "123 56789";
        let result = Board::from_lines(lines);
        assert_eq!(
            result,
            Err(ParseBoardError::InvalidCharacter {
                line: 0,
                column: 3,
                found: ' ',
            })
        );
    }

    #[test]
    fn test_length_errors_reported_before_character_errors() {
        let mut lines = SOLVED;
        lines[0] = "1234x6789";
        lines[1] = "45678912";
        let result = Board::from_lines(lines);
        assert_eq!(
            result,
            Err(ParseBoardError::WrongLineLength { line: 1, found: 8 })
        );
    }

    #[test]
    fn test_parse_tolerates_trailing_whitespace_and_blank_lines() {
        let text = format!("\n{}  \n{}\n\n", SOLVED[0], SOLVED[1..].join("\n"));
        let board: Board = text.parse().unwrap();
        assert_eq!(board, Board::from_lines(SOLVED).unwrap());
    }

    #[test]
    fn test_display_round_trip() {
        let board = Board::from_lines(SOLVED).unwrap();
        assert_eq!(board.to_string(), SOLVED.join("\n"));
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        let pos = Position::new(3, 5);
        assert_eq!(board.get(pos), None);
        board.set(pos, Some(Digit::D7));
        assert_eq!(board.get(pos), Some(Digit::D7));
        board.set(pos, None);
        assert_eq!(board.get(pos), None);
    }

    proptest! {
        #[test]
        fn test_parse_display_round_trip(values in prop::collection::vec(0u8..=9, 81)) {
            let lines: Vec<String> = values
                .chunks(9)
                .map(|row| row.iter().map(|v| char::from(b'0' + v)).collect())
                .collect();
            let board = Board::from_lines(&lines).unwrap();
            prop_assert_eq!(board.to_string(), lines.join("\n"));
            for (value, pos) in values.iter().zip(Position::ALL) {
                prop_assert_eq!(board.get(pos), Digit::try_from_value(*value));
            }
        }
    }
}
