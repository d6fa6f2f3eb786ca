use ninefold_core::{Board, Digit, DigitSet, House, Position};

use crate::{GameError, GameStatus};

/// A number-place game session.
///
/// Owns the immutable puzzle (the given cells), a mutable working board the
/// player fills in, the current cell selection, and the win status. Given
/// cells can never be selected, so they are never overwritten by a move.
///
/// All operations run to completion synchronously; a concurrent host is
/// responsible for serializing calls into the engine.
///
/// # Example
///
/// ```
/// use ninefold_core::{Board, Digit, Position};
/// use ninefold_game::Game;
///
/// let puzzle: Board = "\
/// 103450789
/// 450789023
/// 089103456
/// 234067801
/// 507891230
/// 890230567
/// 045678012
/// 678902305
/// 912045670"
///     .parse()
///     .unwrap();
/// let mut game = Game::new(puzzle);
///
/// // Row 0, column 1 is empty in the puzzle, so it can be edited.
/// game.select_cell(0, 1).unwrap();
/// game.enter_value(2).unwrap();
/// assert_eq!(game.working().get(Position::new(1, 0)), Some(Digit::D2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    puzzle: Board,
    working: Board,
    selection: Option<Position>,
    status: GameStatus,
}

/// A point-in-time view of the game state for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The working board, givens and player entries combined.
    pub working: Board,
    /// The currently selected cell, if any.
    pub selection: Option<Position>,
    /// The win status.
    pub status: GameStatus,
}

impl Game {
    /// Creates a new game session from a parsed puzzle.
    ///
    /// The working board starts as a copy of the puzzle, the selection is
    /// unset, and the status is [`GameStatus::InProgress`]. The puzzle is
    /// assumed to be well-formed; that is the parser's contract.
    #[must_use]
    pub fn new(puzzle: Board) -> Self {
        Self {
            puzzle,
            working: puzzle,
            selection: None,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the given cells of the puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &Board {
        &self.puzzle
    }

    /// Returns the working board, givens and player entries combined.
    #[must_use]
    pub fn working(&self) -> &Board {
        &self.working
    }

    /// Returns the currently selected cell, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    /// Returns the win status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns a snapshot of the state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            working: self.working,
            selection: self.selection,
            status: self.status,
        }
    }

    /// Restores the session to its initial state.
    ///
    /// Re-derives the working board from the puzzle, clears the selection,
    /// and sets the status back to [`GameStatus::InProgress`]. Idempotent;
    /// the puzzle itself is untouched.
    pub fn reset(&mut self) {
        self.working = self.puzzle;
        self.selection = None;
        self.status = GameStatus::InProgress;
    }

    /// Selects the cell at `(row, col)` for the next value entry.
    ///
    /// Selecting the already-selected cell deselects it. Selecting a given
    /// cell is rejected silently and leaves the selection unset. Once the
    /// game is won, the call is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if `row` or `col` is not in 0-8.
    pub fn select_cell(&mut self, row: u8, col: u8) -> Result<(), GameError> {
        if row >= 9 || col >= 9 {
            return Err(GameError::OutOfRange { row, col });
        }
        if self.status.is_won() {
            return Ok(());
        }

        let pos = Position::new(col, row);
        if self.selection == Some(pos) {
            self.selection = None;
        } else if self.puzzle.get(pos).is_some() {
            // Given cells cannot be edited.
            self.selection = None;
        } else {
            self.selection = Some(pos);
        }
        Ok(())
    }

    /// Enters a value into the selected cell; `0` clears the cell.
    ///
    /// The selection is consumed by the entry, so each move requires
    /// re-selecting a cell. After the write the win condition is
    /// re-evaluated and the status updated. Without a selection, or once the
    /// game is won, the call is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ValueOutOfRange`] if `value` is not in 0-9.
    pub fn enter_value(&mut self, value: u8) -> Result<(), GameError> {
        if value > 9 {
            return Err(GameError::ValueOutOfRange { value });
        }
        if self.status.is_won() {
            return Ok(());
        }
        let Some(pos) = self.selection.take() else {
            return Ok(());
        };

        // The selection invariant guarantees `pos` is not a given cell.
        self.working.set(pos, Digit::try_from_value(value));
        if self.check_win() {
            self.status = GameStatus::Won;
        }
        Ok(())
    }

    /// Returns whether the working board is solved.
    ///
    /// Each of the 27 houses must hold the digits 1-9 exactly once: no
    /// duplicates, no empty cells. Deterministic and idempotent; the check
    /// never mutates state.
    #[must_use]
    pub fn check_win(&self) -> bool {
        House::ALL
            .into_iter()
            .all(|house| self.house_satisfied(house))
    }

    fn house_satisfied(&self, house: House) -> bool {
        let mut seen = DigitSet::EMPTY;
        for pos in house.positions() {
            let Some(digit) = self.working.get(pos) else {
                return false;
            };
            if seen.contains(digit) {
                return false;
            }
            seen.insert(digit);
        }
        seen == DigitSet::FULL
    }
}
