//! End-to-end tests for the interactive shell session.
//!
//! Scripts whole conversations through the command parser and the session
//! executor, checking the printed feedback and the session-state
//! transitions between commands.

use chrono::NaiveDate;
use deskchat::commands::{Command, ParseError};
use deskchat::session::Session;
use deskchat_core::clock::FixedClock;
use deskchat_core::directory::Directory;
use deskchat_core::message::NO_MESSAGES;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A session whose directory clock is pinned to 2024-05-17 09:30:00.
fn pinned_session(suggestion_limit: usize) -> Session<FixedClock> {
    let instant = NaiveDate::from_ymd_opt(2024, 5, 17)
        .expect("valid date")
        .and_hms_opt(9, 30, 0)
        .expect("valid time");
    Session::with_directory(
        Directory::with_clock(FixedClock::new(instant)),
        suggestion_limit,
    )
}

/// Parses and executes one input line, returning the printed lines.
fn run(session: &mut Session<FixedClock>, line: &str) -> Vec<String> {
    let command = Command::parse(line).expect("script line should parse");
    session.execute(command)
}

// ===========================================================================
// Capstone: a full two-user conversation
// ===========================================================================

/// Registers two users, exchanges messages, and reads them back — asserting
/// the exact feedback at every step.
#[test]
fn full_messaging_session_transcript() {
    let mut session = pinned_session(10);

    assert_eq!(
        run(&mut session, "register alice pw1"),
        vec!["Registration successful!"]
    );
    assert_eq!(
        run(&mut session, "register bob pw2"),
        vec!["Registration successful!"]
    );
    assert_eq!(
        run(&mut session, "register alice other"),
        vec!["Username already exists."]
    );

    assert_eq!(run(&mut session, "login alice pw1"), vec!["Welcome alice!"]);
    assert_eq!(session.prompt("> "), "alice> ");

    assert_eq!(
        run(&mut session, "send bob see you at noon"),
        vec!["Your message has been sent."]
    );
    assert_eq!(
        run(&mut session, "send bob bring the charger"),
        vec!["Your message has been sent."]
    );
    assert_eq!(
        run(&mut session, "send carol anyone there?"),
        vec!["Failed to send message. Check recipient."]
    );

    assert_eq!(run(&mut session, "logout"), vec!["Logged out."]);
    assert_eq!(run(&mut session, "login bob pw2"), vec!["Welcome bob!"]);

    assert_eq!(
        run(&mut session, "inbox"),
        vec![
            "Messages for bob:".to_string(),
            "From: alice | Time: 2024-05-17 09:30:00 | Message: see you at noon".to_string(),
            "From: alice | Time: 2024-05-17 09:30:00 | Message: bring the charger".to_string(),
        ]
    );

    assert_eq!(
        run(&mut session, "users"),
        vec!["alice".to_string(), "bob".to_string()]
    );

    assert!(run(&mut session, "quit").is_empty());
    assert!(session.should_quit);
}

// ===========================================================================
// Session gating
// ===========================================================================

/// Without a login, send and inbox are refused before the directory is
/// ever consulted.
#[test]
fn send_and_inbox_require_a_login() {
    let mut session = pinned_session(10);
    run(&mut session, "register bob pw");

    assert_eq!(run(&mut session, "send bob hello"), vec!["Log in first."]);
    assert_eq!(run(&mut session, "inbox"), vec!["Log in first."]);
    assert_eq!(
        session.directory().receive("bob"),
        vec![NO_MESSAGES.to_string()],
        "refused send must not deliver"
    );
}

/// Logging in as somebody else switches the sender identity used by
/// subsequent sends.
#[test]
fn relogin_switches_the_sender() {
    let mut session = pinned_session(10);
    run(&mut session, "register alice pw");
    run(&mut session, "register bob pw");

    run(&mut session, "login alice pw");
    run(&mut session, "send bob from alice");

    run(&mut session, "login bob pw");
    run(&mut session, "send alice from bob");

    run(&mut session, "login alice pw");
    let inbox = run(&mut session, "inbox");
    assert_eq!(inbox.len(), 2);
    assert!(inbox[1].starts_with("From: bob |"));
}

/// A failed login leaves the previous session user in place.
#[test]
fn failed_login_keeps_current_user() {
    let mut session = pinned_session(10);
    run(&mut session, "register alice pw");
    run(&mut session, "login alice pw");

    assert_eq!(
        run(&mut session, "login alice wrong"),
        vec!["Invalid username or password."]
    );
    assert_eq!(session.current_user(), Some("alice"));
}

// ===========================================================================
// Users listing through the shell
// ===========================================================================

/// The users listing is sorted, truncated to the suggestion limit, and
/// reports how many names were hidden.
#[test]
fn users_listing_sorted_and_truncated() {
    let mut session = pinned_session(2);
    for name in ["dave", "alice", "carol", "bob"] {
        run(&mut session, &format!("register {name} pw"));
    }

    assert_eq!(
        run(&mut session, "users"),
        vec![
            "alice".to_string(),
            "bob".to_string(),
            "(2 more not shown)".to_string(),
        ]
    );
    assert_eq!(
        run(&mut session, "users c"),
        vec!["carol".to_string()],
        "a narrowed query under the limit shows everything"
    );
    assert_eq!(run(&mut session, "users z"), vec!["No matching users."]);
}

// ===========================================================================
// Parse errors
// ===========================================================================

/// Malformed lines fail at the parser and never reach the session.
#[test]
fn malformed_lines_do_not_touch_the_session() {
    let mut session = pinned_session(10);
    run(&mut session, "register alice pw");

    assert_eq!(
        Command::parse("send alice"),
        Err(ParseError::Usage("send <username> <message>"))
    );
    assert_eq!(
        Command::parse("sned alice hi"),
        Err(ParseError::Unknown("sned".to_string()))
    );

    assert_eq!(session.current_user(), None);
    assert_eq!(session.directory().user_count(), 1);
    assert!(!session.should_quit);
}

/// The exit alias behaves exactly like quit.
#[test]
fn exit_alias_ends_the_session() {
    let mut session = pinned_session(10);
    assert!(run(&mut session, "exit").is_empty());
    assert!(session.should_quit);
}
