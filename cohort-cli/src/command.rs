//! Line commands for driving the table and the enrollment form.

use thiserror::Error;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Sort(String),
    Next,
    Prev,
    Check(String),
    Uncheck(String),
    All,
    Clear,
    Reload,
    Enroll {
        course: String,
        term: String,
        start: String,
        end: String,
    },
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

pub const HELP: &str = "\
commands:
  show                               redraw the table
  sort <key>                         sort by a column key
  next | prev                        change page
  check <id> | uncheck <id>          toggle one row
  all | none                         toggle every row on the page
  reload                             replace rows with the original set
  enroll <course> <term> <start> <end>
                                     submit the enrollment form
                                     (course: frontend-bootcamp | backend-bootcamp,
                                      dates: YYYY-MM-DD)
  help | quit";

impl Command {
    /// Parse one input line. Blank lines parse as `None` (no command).
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (name, args.as_slice()) {
            ("show", []) => Command::Show,
            ("sort", [key]) => Command::Sort(key.to_string()),
            ("sort", _) => return Err(ParseError::Usage("sort <key>")),
            ("next", []) => Command::Next,
            ("prev", []) => Command::Prev,
            ("check", [id]) => Command::Check(id.to_string()),
            ("check", _) => return Err(ParseError::Usage("check <id>")),
            ("uncheck", [id]) => Command::Uncheck(id.to_string()),
            ("uncheck", _) => return Err(ParseError::Usage("uncheck <id>")),
            ("all", []) => Command::All,
            ("none", []) => Command::Clear,
            ("reload", []) => Command::Reload,
            ("enroll", [course, term, start, end]) => Command::Enroll {
                course: course.to_string(),
                term: term.to_string(),
                start: start.to_string(),
                end: end.to_string(),
            },
            ("enroll", _) => return Err(ParseError::Usage("enroll <course> <term> <start> <end>")),
            ("help", _) => Command::Help,
            ("quit" | "exit", _) => Command::Quit,
            _ => return Err(ParseError::Unknown(line.trim().to_string())),
        };
        Ok(Some(command))
    }
}
