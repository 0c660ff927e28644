//! Session state and command execution for the interactive shell.
//!
//! A [`Session`] owns the [`Directory`] plus the one piece of state the
//! core deliberately does not track: which user is currently logged in.
//! `execute` turns parsed commands into directory calls and returns the
//! feedback lines the shell prints.

use deskchat_core::clock::{Clock, SystemClock};
use deskchat_core::directory::Directory;

use crate::commands::{Command, HELP};

/// Shell-side state: the owned directory and the logged-in user.
#[derive(Debug)]
pub struct Session<C: Clock = SystemClock> {
    directory: Directory<C>,
    current_user: Option<String>,
    suggestion_limit: usize,
    /// Set once `quit` executes; the REPL checks it after each command.
    pub should_quit: bool,
}

impl Session {
    /// Creates a session over a fresh system-clock directory.
    #[must_use]
    pub fn new(suggestion_limit: usize) -> Self {
        Self::with_directory(Directory::new(), suggestion_limit)
    }
}

impl<C: Clock> Session<C> {
    /// Creates a session over a caller-provided directory.
    #[must_use]
    pub fn with_directory(directory: Directory<C>, suggestion_limit: usize) -> Self {
        Self {
            directory,
            current_user: None,
            suggestion_limit,
            should_quit: false,
        }
    }

    /// Executes one command against the directory, returning the lines to
    /// print in order.
    ///
    /// `login` replaces any previously logged-in user on success. `send`
    /// and `inbox` require a logged-in user; the directory itself does not
    /// enforce that, so the gate lives here.
    pub fn execute(&mut self, command: Command) -> Vec<String> {
        match command {
            Command::Register { username, password } => {
                if self.directory.register(&username, &password) {
                    vec!["Registration successful!".to_string()]
                } else {
                    vec!["Username already exists.".to_string()]
                }
            }
            Command::Login { username, password } => {
                if self.directory.login(&username, &password) {
                    let welcome = format!("Welcome {username}!");
                    tracing::info!(username = %username, "session user set");
                    self.current_user = Some(username);
                    vec![welcome]
                } else {
                    vec!["Invalid username or password.".to_string()]
                }
            }
            Command::Logout => match self.current_user.take() {
                Some(username) => {
                    tracing::info!(username = %username, "session user cleared");
                    vec!["Logged out.".to_string()]
                }
                None => vec!["Not logged in.".to_string()],
            },
            Command::Send { to, body } => {
                let Some(from) = self.current_user.clone() else {
                    return vec!["Log in first.".to_string()];
                };
                if self.directory.send(&from, &to, &body) {
                    vec!["Your message has been sent.".to_string()]
                } else {
                    vec!["Failed to send message. Check recipient.".to_string()]
                }
            }
            Command::Inbox => {
                let Some(user) = self.current_user.as_deref() else {
                    return vec!["Log in first.".to_string()];
                };
                let mut lines = vec![format!("Messages for {user}:")];
                lines.extend(self.directory.receive(user));
                lines
            }
            Command::Users { prefix } => self.list_users(&prefix),
            Command::Help => HELP.lines().map(String::from).collect(),
            Command::Quit => {
                self.should_quit = true;
                Vec::new()
            }
        }
    }

    /// The prompt for the next input line: `alice> ` when logged in,
    /// otherwise the configured idle prompt.
    #[must_use]
    pub fn prompt(&self, idle_prompt: &str) -> String {
        self.current_user
            .as_deref()
            .map_or_else(|| idle_prompt.to_string(), |user| format!("{user}> "))
    }

    /// The logged-in username, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// Read access to the owned directory.
    #[must_use]
    pub fn directory(&self) -> &Directory<C> {
        &self.directory
    }

    /// Renders a `users` query: sorted for stable display, truncated to
    /// the suggestion limit (0 means unlimited) with a trailer naming the
    /// hidden count.
    fn list_users(&self, prefix: &str) -> Vec<String> {
        let mut names = self.directory.autocomplete(prefix);
        if names.is_empty() {
            return vec!["No matching users.".to_string()];
        }
        names.sort_unstable();

        let shown = if self.suggestion_limit == 0 {
            names.len()
        } else {
            self.suggestion_limit.min(names.len())
        };
        let hidden = names.len() - shown;
        names.truncate(shown);
        if hidden > 0 {
            names.push(format!("({hidden} more not shown)"));
        }
        names
    }
}
