//! Board position coordinates.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Both coordinates are validated at construction time.
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 81 positions, in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Returns the position of cell `cell` (0-8, row-major within the box)
    /// of box `index` (0-8, left to right, top to bottom).
    ///
    /// # Panics
    ///
    /// Panics if `index` or `cell` is not in the range 0-8.
    #[must_use]
    pub const fn from_box(index: u8, cell: u8) -> Self {
        assert!(index < 9 && cell < 9);
        Self {
            x: (index % 3) * 3 + cell % 3,
            y: (index / 3) * 3 + cell / 3,
        }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
