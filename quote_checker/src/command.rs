//! Line commands understood by the interactive form.
//!
//! A plain line is typed into the symbol field and submitted, like typing and
//! pressing the button. `:check TEXT` only types (validation without a
//! lookup), `:q` leaves.

/// Quit command.
pub const QUIT: &str = ":q";
/// Prefix of the type-only command.
pub const CHECK: &str = ":check";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type the text, then submit.
    Lookup(String),
    /// Type the text without submitting.
    Check(String),
    /// End the session.
    Quit,
}

impl Command {
    /// Parses a raw input line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line == QUIT {
            return Command::Quit;
        }
        match line.strip_prefix(CHECK) {
            Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
                Command::Check(String::from(rest.trim()))
            }
            _ => Command::Lookup(String::from(line)),
        }
    }
}
