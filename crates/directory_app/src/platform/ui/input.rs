use directory_core::{Msg, SortKey};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  job <title> | job all    filter by primary profession
  search [text]            free-text search (no text clears it)
  sort name|job|skills     sort by column; repeat to flip direction
  clear                    reset filter, search and sort
  view <row>               open the detail view of a displayed row
  close                    close the detail view
  jobs                     list job titles
  reload                   load candidates and jobs again
  help                     show this help
  quit                     exit";

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Msg(Msg),
    /// 1-based row of the displayed table.
    View(usize),
    Jobs,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),
    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("cannot sort by `{0}`; use name, job or skills")]
    UnknownSortKey(String),
    #[error("`{0}` is not a row number")]
    InvalidRow(String),
}

/// Parses one input line. Blank lines parse as [`Msg::NoOp`].
pub fn parse(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "" => Command::Msg(Msg::NoOp),
        "job" => match rest {
            "" => {
                return Err(InputError::MissingArgument {
                    command: "job",
                    expected: "a job title or `all`",
                })
            }
            "all" => Command::Msg(Msg::ProfessionSelected(String::new())),
            title => Command::Msg(Msg::ProfessionSelected(title.to_string())),
        },
        "search" => Command::Msg(Msg::SearchChanged(rest.to_string())),
        "sort" => Command::Msg(Msg::SortRequested(parse_sort_key(rest)?)),
        "clear" => Command::Msg(Msg::ClearClicked),
        "view" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument {
                    command: "view",
                    expected: "a row number",
                });
            }
            match rest.parse::<usize>() {
                Ok(row) if row > 0 => Command::View(row),
                _ => return Err(InputError::InvalidRow(rest.to_string())),
            }
        }
        "close" => Command::Msg(Msg::DetailClosed),
        "reload" => Command::Msg(Msg::Activated),
        "jobs" => Command::Jobs,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };

    Ok(command)
}

fn parse_sort_key(raw: &str) -> Result<SortKey, InputError> {
    match raw.to_ascii_lowercase().as_str() {
        "" => Err(InputError::MissingArgument {
            command: "sort",
            expected: "name, job or skills",
        }),
        "name" => Ok(SortKey::FullName),
        "job" | "profession" => Ok(SortKey::PrimaryProfession),
        "skills" => Ok(SortKey::Skills),
        _ => Err(InputError::UnknownSortKey(raw.to_string())),
    }
}
