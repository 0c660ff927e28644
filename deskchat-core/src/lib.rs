//! In-memory messaging core for `DeskChat`: user directory, per-user
//! inboxes, and trie-backed username autocomplete.

pub mod clock;
pub mod directory;
pub mod message;
pub mod trie;
