//! Message record stored in a recipient's inbox.

use std::fmt;

/// Sentinel line returned when an inbox poll finds nothing to show.
pub const NO_MESSAGES: &str = "No new messages.";

/// `strftime`-style layout for message timestamps, e.g. `2024-05-17 09:30:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One delivered message, timestamped at send time.
///
/// The sender name is recorded as given and is not required to belong to
/// a registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Sender name as supplied to `send`.
    pub from: String,
    /// Local send time, already rendered with [`TIMESTAMP_FORMAT`].
    pub timestamp: String,
    /// Message body, stored verbatim.
    pub body: String,
}

impl Message {
    /// Builds a message record from its parts.
    #[must_use]
    pub fn new(
        from: impl Into<String>,
        timestamp: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            timestamp: timestamp.into(),
            body: body.into(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "From: {} | Time: {} | Message: {}",
            self.from, self.timestamp, self.body
        )
    }
}
