//! Interactive fallback for the input path.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub const PATH_PROMPT: &str = "Please enter path to .csv file: ";

/// Asks for the export's path on `output` and reads one line from `input`.
///
/// Surrounding whitespace is dropped, as are the quotes a file manager adds
/// when a path is dragged into the terminal.
///
/// # Errors
///
/// Fails when reading or writing fails, or when the line is blank.
pub fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<PathBuf> {
    output.write_all(PATH_PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim();
    let unquoted = trimmed
        .strip_prefix(['"', '\''])
        .and_then(|rest| rest.strip_suffix(['"', '\'']))
        .unwrap_or(trimmed);
    if unquoted.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "no path entered",
        ));
    }
    Ok(PathBuf::from(unquoted))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(typed: &str) -> (io::Result<PathBuf>, String) {
        let mut shown = Vec::new();
        let result = prompt_for_path(&mut typed.as_bytes(), &mut shown);
        (result, String::from_utf8(shown).unwrap())
    }

    #[test]
    fn shows_prompt_and_reads_path() {
        let (path, shown) = ask("  data/player.csv \n");
        assert_eq!(path.unwrap(), PathBuf::from("data/player.csv"));
        assert_eq!(shown, PATH_PROMPT);
    }

    #[test]
    fn strips_drag_and_drop_quotes() {
        let (path, _) = ask("'/home/me/My Player.csv'\n");
        assert_eq!(path.unwrap(), PathBuf::from("/home/me/My Player.csv"));
    }

    #[test]
    fn blank_line_is_rejected() {
        let (path, _) = ask("\n");
        assert_eq!(path.unwrap_err().kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn end_of_input_is_rejected() {
        let (path, _) = ask("");
        assert!(path.is_err());
    }
}
