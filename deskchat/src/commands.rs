//! Command language of the interactive shell.
//!
//! One command per line. The first whitespace-delimited word selects the
//! command and is matched ASCII-case-insensitively; arguments keep their
//! case. `send` takes the rest of the line after the recipient as the
//! message body, with inner whitespace preserved.

/// Summary printed by the `help` command.
pub const HELP: &str = "\
Commands:
  register <username> <password>  create an account
  login <username> <password>     start a session
  logout                          end the session
  send <username> <message>       deliver a message (requires login)
  inbox                           show received messages (alias: messages)
  users [prefix]                  list usernames matching a prefix
  help                            show this summary
  quit                            leave the shell (alias: exit)";

const USAGE_REGISTER: &str = "register <username> <password>";
const USAGE_LOGIN: &str = "login <username> <password>";
const USAGE_LOGOUT: &str = "logout";
const USAGE_SEND: &str = "send <username> <message>";
const USAGE_INBOX: &str = "inbox";
const USAGE_USERS: &str = "users [prefix]";
const USAGE_HELP: &str = "help";
const USAGE_QUIT: &str = "quit";

/// Errors produced while turning an input line into a [`Command`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line held no command word.
    #[error("empty command line")]
    Empty,

    /// The command word is not part of the command language.
    #[error("unknown command \"{0}\", try \"help\"")]
    Unknown(String),

    /// Arguments were missing, surplus, or empty.
    #[error("usage: {0}")]
    Usage(&'static str),
}

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new account.
    Register {
        /// Account name, taken verbatim.
        username: String,
        /// Password, taken verbatim.
        password: String,
    },
    /// Start a session as an existing user.
    Login {
        /// Account name.
        username: String,
        /// Password to check.
        password: String,
    },
    /// End the current session.
    Logout,
    /// Deliver a message from the logged-in user.
    Send {
        /// Recipient username.
        to: String,
        /// Message body, inner whitespace preserved.
        body: String,
    },
    /// Show the logged-in user's received messages.
    Inbox,
    /// List usernames matching a prefix (empty prefix lists everyone).
    Users {
        /// Prefix to match; may be empty.
        prefix: String,
    },
    /// Print the command summary.
    Help,
    /// Leave the shell.
    Quit,
}

impl Command {
    /// Parses one input line into a command.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Empty`] for a blank line,
    /// [`ParseError::Unknown`] for an unrecognized command word, and
    /// [`ParseError::Usage`] when arguments are missing or surplus.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None if line.is_empty() => return Err(ParseError::Empty),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "register" => {
                let (username, password) = credential_args(rest, USAGE_REGISTER)?;
                Ok(Self::Register { username, password })
            }
            "login" => {
                let (username, password) = credential_args(rest, USAGE_LOGIN)?;
                Ok(Self::Login { username, password })
            }
            "logout" => no_args(rest, Self::Logout, USAGE_LOGOUT),
            "send" => {
                let Some((to, body)) = rest.split_once(char::is_whitespace) else {
                    return Err(ParseError::Usage(USAGE_SEND));
                };
                let body = body.trim();
                if body.is_empty() {
                    return Err(ParseError::Usage(USAGE_SEND));
                }
                Ok(Self::Send {
                    to: to.to_string(),
                    body: body.to_string(),
                })
            }
            "inbox" | "messages" => no_args(rest, Self::Inbox, USAGE_INBOX),
            "users" => {
                let mut tokens = rest.split_whitespace();
                let prefix = tokens.next().unwrap_or("").to_string();
                if tokens.next().is_some() {
                    return Err(ParseError::Usage(USAGE_USERS));
                }
                Ok(Self::Users { prefix })
            }
            "help" => no_args(rest, Self::Help, USAGE_HELP),
            "quit" | "exit" => no_args(rest, Self::Quit, USAGE_QUIT),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Requires exactly two whitespace-delimited tokens.
fn credential_args(rest: &str, usage: &'static str) -> Result<(String, String), ParseError> {
    let mut tokens = rest.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(first), Some(second), None) => Ok((first.to_string(), second.to_string())),
        _ => Err(ParseError::Usage(usage)),
    }
}

/// Accepts a command only when no arguments follow it.
fn no_args(rest: &str, command: Command, usage: &'static str) -> Result<Command, ParseError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(ParseError::Usage(usage))
    }
}
