//! The line-oriented command language standing in for clicks and typing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add(String),
    Open(usize),
    Draft(String),
    Save,
    Cancel,
    /// Open, replace the draft, and save in one go.
    Edit(usize, String),
    Delete(usize),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs a row number")]
    MissingRow(&'static str),

    #[error("`{0}` is not a row number")]
    BadRow(String),

    #[error("`{0}` needs text")]
    MissingText(&'static str),
}

pub const HELP: &str = "\
commands:
  list                 redraw the list (also: empty line)
  add <text>           add a todo
  open <n>             open the edit dialog for row n
  draft <text>         replace the text in the open dialog
  save | cancel        close the open dialog, saving or discarding
  edit <n> <text>      open, draft and save in one step
  delete <n>           delete row n
  refresh              reload the list from the server
  help | quit";

impl Command {
    /// Parse one input line. Row numbers are 1-based as displayed.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };
        match word {
            "" | "list" | "ls" => Ok(Command::List),
            // Text is sent verbatim, so `add` with nothing after it posts an
            // empty todo.
            "add" => Ok(Command::Add(rest.to_string())),
            "open" => Ok(Command::Open(row("open", rest)?)),
            "draft" => Ok(Command::Draft(rest.to_string())),
            "save" => Ok(Command::Save),
            "cancel" => Ok(Command::Cancel),
            "edit" => {
                let (n, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let n = row("edit", n)?;
                if text.trim().is_empty() {
                    return Err(ParseError::MissingText("edit"));
                }
                Ok(Command::Edit(n, text.trim_start().to_string()))
            }
            "delete" | "rm" => Ok(Command::Delete(row("delete", rest)?)),
            "refresh" => Ok(Command::Refresh),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

fn row(command: &'static str, arg: &str) -> Result<usize, ParseError> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Err(ParseError::MissingRow(command));
    }
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::BadRow(arg.to_string())),
    }
}
