//! Integration tests for username autocomplete.
//!
//! Verifies the prefix-query contract through the directory:
//! 1. A shared prefix narrows correctly as it grows.
//! 2. The empty prefix enumerates every registered user exactly once.
//! 3. Only registered names ever appear, regardless of insertion order.

use std::collections::HashSet;

use deskchat_core::directory::Directory;

/// Collects an autocomplete result into a set for order-independent
/// comparison.
fn complete(directory: &Directory, prefix: &str) -> HashSet<String> {
    directory.autocomplete(prefix).into_iter().collect()
}

/// The canonical narrowing scenario: "al" matches both alice and alan,
/// "ali" only alice, and "z" nothing.
#[test]
fn shared_prefix_narrows_as_it_grows() {
    let mut directory = Directory::new();
    directory.register("alice", "pw");
    directory.register("alan", "pw");

    assert_eq!(
        complete(&directory, "al"),
        ["alice".to_string(), "alan".to_string()].into()
    );
    assert_eq!(complete(&directory, "ali"), ["alice".to_string()].into());
    assert!(directory.autocomplete("z").is_empty());
}

/// The empty prefix lists each registered user exactly once.
#[test]
fn empty_prefix_lists_each_user_once() {
    let mut directory = Directory::new();
    let names = ["alice", "alan", "bob", "carol", "carl", "dave"];
    for name in names {
        directory.register(name, "pw");
    }

    let all = directory.autocomplete("");
    assert_eq!(all.len(), names.len(), "no duplicates, no omissions");

    let set: HashSet<String> = all.into_iter().collect();
    for name in names {
        assert!(set.contains(name), "{name} missing");
    }
}

/// A name that is itself a prefix of another appears in its own results.
#[test]
fn full_username_matches_its_own_prefix_query() {
    let mut directory = Directory::new();
    directory.register("al", "pw");
    directory.register("alice", "pw");

    let matches = complete(&directory, "al");
    assert!(matches.contains("al"));
    assert!(matches.contains("alice"));
    assert_eq!(matches.len(), 2);
}

/// Membership in the results depends only on the registered set, not on
/// the order the names arrived in.
#[test]
fn registration_order_does_not_affect_membership() {
    let names = ["carol", "alice", "alan", "carl"];

    let mut forward = Directory::new();
    for name in names {
        forward.register(name, "pw");
    }
    let mut backward = Directory::new();
    for name in names.iter().rev() {
        backward.register(name, "pw");
    }

    for prefix in ["", "a", "al", "c", "car", "x"] {
        assert_eq!(
            complete(&forward, prefix),
            complete(&backward, prefix),
            "prefix {prefix:?} should be order-insensitive"
        );
    }
}

/// Names rejected at registration (duplicates) never show up twice.
#[test]
fn rejected_duplicate_never_doubles_a_result() {
    let mut directory = Directory::new();
    directory.register("alice", "pw1");
    directory.register("alice", "pw2");

    assert_eq!(directory.autocomplete("alice"), vec!["alice".to_string()]);
    assert_eq!(directory.autocomplete("").len(), 1);
}

/// Queries longer than any registered name return nothing rather than
/// erring.
#[test]
fn overlong_prefix_matches_nothing() {
    let mut directory = Directory::new();
    directory.register("alice", "pw");

    assert!(directory.autocomplete("alice-and-more").is_empty());
}

/// A pathologically long username still registers and resolves; the
/// traversal is iterative, so name length cannot exhaust the call stack.
#[test]
fn very_long_username_resolves() {
    let mut directory = Directory::new();
    let long = "a".repeat(10_000);
    assert!(directory.register(&long, "pw"));

    let matches = directory.autocomplete("aaa");
    assert_eq!(matches, vec![long]);
}
