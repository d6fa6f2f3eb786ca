//! The interactive command loop.
//!
//! Translates text commands into engine calls and re-renders the board from
//! a fresh [`Snapshot`] after every command, keeping state mutation strictly
//! separate from presentation.

use std::{
    fmt::Write as _,
    io::{self, BufRead as _, Write as _},
};

use ninefold_core::Position;
use ninefold_game::{Game, Snapshot};

const HELP: &str = "\
commands:
  select ROW COL  select the cell at ROW, COL (both 0-8)
  put DIGIT       enter DIGIT (1-9) into the selected cell
  erase           clear the selected cell
  reset           restore the board to its initial state
  show            print the board
  quit            leave the game";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Select { row: u8, col: u8 },
    Put { value: u8 },
    Erase,
    Reset,
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let command = match (words.next(), words.next(), words.next()) {
        (Some("select"), Some(row), Some(col)) => Command::Select {
            row: parse_number("ROW", row)?,
            col: parse_number("COL", col)?,
        },
        (Some("put"), Some(value), None) => Command::Put {
            value: parse_number("DIGIT", value)?,
        },
        (Some("erase"), None, None) => Command::Erase,
        (Some("reset"), None, None) => Command::Reset,
        (Some("show"), None, None) => Command::Show,
        (Some("help"), None, None) => Command::Help,
        (Some("quit" | "exit"), None, None) => Command::Quit,
        (Some(word), ..) => return Err(format!("unrecognized command {word:?}; try `help`")),
        (None, ..) => return Err(String::from("empty command; try `help`")),
    };
    if words.next().is_some() {
        return Err(String::from("trailing input after command; try `help`"));
    }
    Ok(command)
}

fn parse_number(what: &str, word: &str) -> Result<u8, String> {
    word.parse()
        .map_err(|_| format!("{what} must be a small number, got {word:?}"))
}

/// Runs the command loop until the player quits or input ends.
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run(mut game: Game) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    render(&game.snapshot(), &mut stdout)?;
    writeln!(stdout, "{HELP}")?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(stdout, "{message}")?;
                continue;
            }
        };
        log::debug!("command: {command:?}");

        let result = match command {
            Command::Select { row, col } => game.select_cell(row, col),
            Command::Put { value } => game.enter_value(value),
            Command::Erase => game.enter_value(0),
            Command::Reset => {
                game.reset();
                Ok(())
            }
            Command::Show => Ok(()),
            Command::Help => {
                writeln!(stdout, "{HELP}")?;
                continue;
            }
            Command::Quit => return Ok(()),
        };
        if let Err(err) = result {
            writeln!(stdout, "error: {err}")?;
            continue;
        }
        render(&game.snapshot(), &mut stdout)?;
    }
}

fn render(snapshot: &Snapshot, out: &mut impl io::Write) -> io::Result<()> {
    for y in 0u8..9 {
        if y > 0 && y % 3 == 0 {
            writeln!(out, "------+-------+------")?;
        }
        let mut line = String::new();
        for x in 0u8..9 {
            if x > 0 && x % 3 == 0 {
                line.push_str("| ");
            }
            match snapshot.working.get(Position::new(x, y)) {
                Some(digit) => {
                    let _ = write!(line, "{digit} ");
                }
                None => line.push_str(". "),
            }
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    if let Some(pos) = snapshot.selection {
        writeln!(out, "selected: row {}, col {}", pos.y(), pos.x())?;
    }
    if snapshot.status.is_won() {
        writeln!(out, "You win!")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use ninefold_core::Board;
    use ninefold_game::GameStatus;

    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(
            parse_command("select 0 8"),
            Ok(Command::Select { row: 0, col: 8 })
        );
        assert_eq!(parse_command("put 5"), Ok(Command::Put { value: 5 }));
        assert_eq!(parse_command("  erase  "), Ok(Command::Erase));
        assert_eq!(parse_command("reset"), Ok(Command::Reset));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_command_rejects_malformed_input() {
        assert!(parse_command("").is_err());
        assert!(parse_command("jump 1 2").is_err());
        assert!(parse_command("select 1").is_err());
        assert!(parse_command("select one two").is_err());
        assert!(parse_command("put 5 6").is_err());
        assert!(parse_command("select 1 2 3").is_err());
    }

    #[test]
    fn test_render_marks_empty_cells_and_win() {
        let board: Board = "\
023456789
456789123
789123456
234567891
567891234
891234567
345678912
678912345
912345678"
            .parse()
            .unwrap();
        let mut game = Game::new(board);

        let mut out = Vec::new();
        render(&game.snapshot(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(". 2 3 | 4 5 6 | 7 8 9"));
        assert!(!text.contains("You win!"));

        game.select_cell(0, 0).unwrap();
        game.enter_value(1).unwrap();
        assert_eq!(game.status(), GameStatus::Won);

        let mut out = Vec::new();
        render(&game.snapshot(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("You win!"));
    }
}
