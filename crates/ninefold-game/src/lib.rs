//! Game session management for the Ninefold number-place engine.
//!
//! This crate owns a puzzle's given cells, a working board the player fills
//! in, an optional cell selection, and the win status. It exposes discrete
//! command methods (select a cell, enter a value, reset) instead of the
//! event-handler style of a UI toolkit; a presentation layer observes the
//! result of each command through [`Game::snapshot`].
//!
//! # Example
//!
//! ```
//! use ninefold_core::Board;
//! use ninefold_game::{Game, GameStatus};
//!
//! let puzzle: Board = "\
//! 023456789
//! 456789123
//! 789123456
//! 234567891
//! 567891234
//! 891234567
//! 345678912
//! 678912345
//! 912345678"
//!     .parse()
//!     .unwrap();
//! let mut game = Game::new(puzzle);
//!
//! game.select_cell(0, 0).unwrap();
//! game.enter_value(1).unwrap();
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

mod game;

pub use self::game::{Game, Snapshot};

/// The progress of a game session.
///
/// A session only transitions to [`Won`](GameStatus::Won) through the win
/// check run after a value entry, and only reverts through
/// [`Game::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// The puzzle has unsolved or incorrect cells.
    #[default]
    InProgress,
    /// Every row, column, and box holds the digits 1-9 exactly once.
    Won,
}

/// An error raised on malformed input from the integration layer.
///
/// These indicate programming errors in the caller, not data errors;
/// rejected-but-valid commands (selecting a given cell, moving after the
/// game is won) are silent no-ops instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// A cell coordinate was outside the 9×9 board.
    #[display("cell ({row}, {col}) is outside the 9x9 board")]
    OutOfRange {
        /// The requested row.
        row: u8,
        /// The requested column.
        col: u8,
    },
    /// An entered value was outside the range 0-9.
    #[display("value {value} is outside the range 0-9")]
    ValueOutOfRange {
        /// The requested value.
        value: u8,
    },
}
