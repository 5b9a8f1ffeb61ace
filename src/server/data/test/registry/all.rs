use super::*;

/// Tests that duplicates are preserved.
///
/// Expected: both copies returned in load order
#[test]
fn keeps_duplicates() {
    let registry = ServerRegistry::parse("minecraft\nvalheim\nminecraft\n");

    assert_eq!(registry.all(), &["minecraft", "valheim", "minecraft"]);
}

/// Tests that repeated calls return the same sequence.
///
/// Expected: identical slices on every call
#[test]
fn returns_same_sequence_each_call() {
    let registry = ServerRegistry::from_lines(fixture::servers::servers());

    assert_eq!(registry.all(), registry.all());
    assert_eq!(registry.all(), fixture::servers::servers().as_slice());
}

/// Tests that a lone line terminator is a single blank identifier.
///
/// Expected: one empty identifier, none for empty contents
#[test]
fn lone_newline_is_one_blank_identifier() {
    assert_eq!(ServerRegistry::parse("\n").all(), &[""]);
    assert_eq!(ServerRegistry::parse("\r\n").all(), &[""]);
    assert!(ServerRegistry::parse("").all().is_empty());
}
