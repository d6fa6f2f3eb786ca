//! Core data structures for the Ninefold number-place engine.
//!
//! This crate provides the fundamental types shared by the game engine and
//! any front end:
//!
//! - [`digit`]: Type-safe representation of puzzle digits 1-9
//! - [`digit_set`]: A 9-bit set of digits for O(1) membership checks
//! - [`position`]: Board position (x, y) coordinates
//! - [`house`]: The 27 cell groups (rows, columns, boxes) a solved board
//!   must satisfy
//! - [`board`]: The 9×9 board itself, including the text parser
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Board, Digit, Position};
//!
//! let board: Board = "\
//! 103450789
//! 450789023
//! 089103456
//! 234067801
//! 507891230
//! 890230567
//! 045678012
//! 678902305
//! 912045670"
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D1));
//! assert_eq!(board.get(Position::new(1, 0)), None); // '0' means empty
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod house;
pub mod position;

pub use self::{
    board::{Board, ParseBoardError},
    digit::Digit,
    digit_set::DigitSet,
    house::House,
    position::Position,
};
