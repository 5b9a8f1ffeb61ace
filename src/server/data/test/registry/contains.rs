use super::*;

/// Tests membership of known servers.
///
/// Expected: true for every loaded identifier
#[test]
fn contains_known_servers() {
    let registry = ServerRegistry::from_lines(fixture::servers::servers());

    for server in fixture::servers::DEFAULT_SERVERS {
        assert!(registry.contains(server));
    }
    assert!(!registry.contains(fixture::servers::UNKNOWN_SERVER));
}

/// Tests that membership uses exact string equality.
///
/// Verifies that case differences and surrounding whitespace are not normalized.
///
/// Expected: false for every near match
#[test]
fn requires_exact_match() {
    let registry = ServerRegistry::from_lines(["minecraft"]);

    assert!(!registry.contains("Minecraft"));
    assert!(!registry.contains(" minecraft"));
    assert!(!registry.contains("minecraft "));
    assert!(!registry.contains("mine"));
}

/// Tests membership of a blank identifier.
///
/// Expected: the empty string is known only when a blank line was loaded
#[test]
fn matches_blank_identifier_only_when_loaded() {
    let with_blank = ServerRegistry::parse("minecraft\n\nvalheim\n");
    let without_blank = ServerRegistry::parse("minecraft\nvalheim\n");

    assert!(with_blank.contains(""));
    assert!(!without_blank.contains(""));
}

/// Tests membership against an empty registry.
///
/// Expected: false for any identifier
#[test]
fn empty_registry_contains_nothing() {
    let registry = ServerRegistry::default();

    assert!(!registry.contains("minecraft"));
    assert!(!registry.contains(""));
}

/// Tests that only one carriage return is removed per line.
///
/// Expected: a line ending in two carriage returns keeps one of them
#[test]
fn strips_single_carriage_return_per_line() {
    let registry = ServerRegistry::parse("minecraft\r\r\nvalheim\r");

    assert_eq!(registry.all(), &["minecraft\r", "valheim"]);
    assert!(registry.contains("valheim"));
    assert!(!registry.contains("valheim\r"));
}
