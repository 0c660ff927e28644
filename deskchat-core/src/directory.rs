//! Directory of registered users: credentials, inboxes, and autocomplete.
//!
//! The [`Directory`] owns the user map and keeps the username [`Trie`] in
//! lockstep with it: a username enters both structures within the same
//! `register` call, or neither. Operations report failure through `bool`
//! results and the [`NO_MESSAGES`] sentinel rather than error types, since
//! every failure here is a user-correctable input, not a fault.

use std::collections::HashMap;

use crate::clock::{Clock, SystemClock};
use crate::message::{Message, NO_MESSAGES, TIMESTAMP_FORMAT};
use crate::trie::Trie;

/// Credentials and inbox for one registered user.
#[derive(Debug)]
struct UserRecord {
    /// Stored verbatim; this demo keeps credentials in plaintext.
    password: String,
    /// Append-only, in delivery order.
    inbox: Vec<Message>,
}

/// In-memory registry of users, credentials, and per-user inboxes.
///
/// A plain owned value with no interior mutability: mutation takes
/// `&mut self`, reads take `&self`, and whoever hosts the user session
/// owns the instance. The clock is injectable so tests can pin message
/// timestamps; production code uses [`Directory::new`] and gets the
/// system clock.
#[derive(Debug)]
pub struct Directory<C: Clock = SystemClock> {
    users: HashMap<String, UserRecord>,
    names: Trie,
    clock: C,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    /// Creates an empty directory timestamping with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Directory<C> {
    /// Creates an empty directory with a caller-provided clock.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            users: HashMap::new(),
            names: Trie::new(),
            clock,
        }
    }

    /// Registers a new user with an empty inbox.
    ///
    /// Returns `false` and changes nothing if the username is empty or
    /// already taken. On success the username also enters the prefix
    /// index, so index and user set never drift apart.
    pub fn register(&mut self, username: &str, password: &str) -> bool {
        if username.is_empty() {
            tracing::debug!("registration rejected: empty username");
            return false;
        }
        if self.users.contains_key(username) {
            tracing::debug!(username = %username, "registration rejected: username taken");
            return false;
        }

        self.users.insert(
            username.to_string(),
            UserRecord {
                password: password.to_string(),
                inbox: Vec::new(),
            },
        );
        self.names.insert(username);
        tracing::info!(username = %username, "user registered");
        true
    }

    /// Checks a username/password pair by exact string equality.
    ///
    /// Case-sensitive, no normalization. A `false` result is an
    /// authentication outcome, not an error.
    #[must_use]
    pub fn login(&self, username: &str, password: &str) -> bool {
        let accepted = self
            .users
            .get(username)
            .is_some_and(|record| record.password == password);
        tracing::debug!(username = %username, accepted, "login checked");
        accepted
    }

    /// Appends a message to `to`'s inbox, timestamped with the current
    /// clock reading.
    ///
    /// Returns `false` and changes nothing if `to` is not registered. The
    /// sender name is recorded as given and deliberately not validated
    /// against the user set; whether senders must be logged in is the
    /// caller's policy.
    pub fn send(&mut self, from: &str, to: &str, body: &str) -> bool {
        let Some(record) = self.users.get_mut(to) else {
            tracing::debug!(to = %to, "message dropped: unknown recipient");
            return false;
        };

        let timestamp = self.clock.now().format(TIMESTAMP_FORMAT).to_string();
        record.inbox.push(Message::new(from, timestamp, body));
        tracing::debug!(from = %from, to = %to, "message delivered");
        true
    }

    /// Returns display lines for every message in `username`'s inbox, in
    /// delivery order.
    ///
    /// An empty or nonexistent inbox yields a single [`NO_MESSAGES`]
    /// entry, never an empty vector, so callers can render the result
    /// unconditionally.
    #[must_use]
    pub fn receive(&self, username: &str) -> Vec<String> {
        let lines: Vec<String> = self
            .users
            .get(username)
            .map(|record| record.inbox.iter().map(ToString::to_string).collect())
            .unwrap_or_default();
        if lines.is_empty() {
            return vec![NO_MESSAGES.to_string()];
        }
        lines
    }

    /// Returns every registered username extending `prefix`.
    ///
    /// The empty prefix lists all users. Order is unspecified; display
    /// layers sort as needed.
    #[must_use]
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        self.names.search(prefix)
    }

    /// Returns `true` if `username` is registered.
    #[must_use]
    pub fn is_registered(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Returns the number of registered users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}
