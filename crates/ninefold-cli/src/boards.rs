//! The built-in board catalog.
//!
//! Names map to puzzle text that is resolved before the engine is invoked;
//! the engine itself has no notion of named boards. The `debug` board is one
//! move away from completion, which makes the win path easy to exercise by
//! hand.

const EASY: &str = include_str!("../boards/easy.txt");
const HARD: &str = include_str!("../boards/hard.txt");
const DEBUG: &str = include_str!("../boards/debug.txt");

const NAMED: &[(&str, &str)] = &[("easy", EASY), ("hard", HARD), ("debug", DEBUG)];

/// Returns the names of all built-in boards.
pub fn names() -> impl Iterator<Item = &'static str> {
    NAMED.iter().map(|(name, _)| *name)
}

/// Returns the puzzle text for a named board.
pub fn lookup(name: &str) -> Option<&'static str> {
    NAMED
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, text)| *text)
}
