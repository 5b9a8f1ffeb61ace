use super::*;

/// Tests loading a server list file.
///
/// Verifies that every line of the file becomes one identifier in file order.
///
/// Expected: Ok(ServerRegistry) with the written servers
#[tokio::test]
async fn loads_servers_in_file_order() -> Result<(), RegistryError> {
    let test = TestBuilder::new()
        .with_servers(&fixture::servers::DEFAULT_SERVERS)
        .build()
        .unwrap();

    let registry = ServerRegistry::load(test.path()).await?;

    assert_eq!(registry.all(), test.servers.as_slice());
    assert_eq!(registry.len(), 3);

    Ok(())
}

/// Tests that lines are kept verbatim.
///
/// Verifies that surrounding whitespace, whitespace-only lines and blank lines
/// between servers survive loading unchanged.
///
/// Expected: Ok(ServerRegistry) including blank and whitespace identifiers
#[tokio::test]
async fn keeps_lines_verbatim() -> Result<(), RegistryError> {
    let test = TestBuilder::new()
        .with_server(" minecraft ")
        .with_server("")
        .with_server("   ")
        .with_server("Valheim")
        .build()
        .unwrap();

    let registry = ServerRegistry::load(test.path()).await?;

    assert_eq!(registry.all(), &[" minecraft ", "", "   ", "Valheim"]);

    Ok(())
}

/// Tests that a final line without terminator is still loaded.
///
/// Expected: Ok(ServerRegistry) containing the last line
#[tokio::test]
async fn loads_last_line_without_newline() -> Result<(), RegistryError> {
    let test = TestBuilder::new()
        .with_servers(&["minecraft", "valheim"])
        .without_trailing_newline()
        .build()
        .unwrap();

    let registry = ServerRegistry::load(test.path()).await?;

    assert_eq!(registry.all(), &["minecraft", "valheim"]);

    Ok(())
}

/// Tests loading a file with CRLF line endings.
///
/// Expected: Ok(ServerRegistry) without carriage returns in identifiers
#[tokio::test]
async fn strips_crlf_line_endings() -> Result<(), RegistryError> {
    let test = TestBuilder::new()
        .with_servers(&["minecraft", "valheim"])
        .with_crlf()
        .build()
        .unwrap();

    let registry = ServerRegistry::load(test.path()).await?;

    assert_eq!(registry.all(), &["minecraft", "valheim"]);
    assert!(!registry.contains("minecraft\r"));

    Ok(())
}

/// Tests loading a CRLF file whose last line has no terminator.
///
/// Verifies that the carriage return before end of file is removed like every
/// other line's.
///
/// Expected: Ok(ServerRegistry) without a carriage return on the last identifier
#[tokio::test]
async fn strips_carriage_return_at_end_of_file() -> Result<(), RegistryError> {
    let test = TestBuilder::new()
        .with_servers(&["minecraft", "valheim"])
        .with_crlf()
        .without_trailing_newline()
        .build()
        .unwrap();

    let registry = ServerRegistry::load(test.path()).await?;

    assert_eq!(registry.all(), &["minecraft", "valheim"]);
    assert!(registry.contains("valheim"));

    Ok(())
}

/// Tests loading an empty file.
///
/// Expected: Ok(ServerRegistry) with no identifiers
#[tokio::test]
async fn loads_empty_file() -> Result<(), RegistryError> {
    let test = TestBuilder::new().build().unwrap();

    let registry = ServerRegistry::load(test.path()).await?;

    assert!(registry.is_empty());

    Ok(())
}

/// Tests loading a file that does not exist.
///
/// Expected: Err(RegistryError::Read) carrying the requested path
#[tokio::test]
async fn fails_when_file_missing() {
    let test = TestBuilder::new().build().unwrap();
    let missing = test.path().with_extension("missing");

    let result = ServerRegistry::load(&missing).await;

    match result {
        Err(RegistryError::Read { path, source }) => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        Ok(_) => panic!("expected missing file to fail"),
    }
}
