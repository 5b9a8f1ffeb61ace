use std::path::Path;

use tempfile::NamedTempFile;

/// Test context owning a temporary server list file.
///
/// Holds the file handle so the file stays on disk for the lifetime of the test, along
/// with the lines that were written so tests can compare loaded results against them.
pub struct TestContext {
    /// Temporary file removed on drop.
    file: NamedTempFile,

    /// Lines written to the file, in file order and without terminators.
    pub servers: Vec<String>,
}

impl TestContext {
    /// Creates a new test context from an already written file.
    ///
    /// # Arguments
    /// - `file` - Temporary file containing the server list
    /// - `servers` - Lines that were written to the file
    ///
    /// # Returns
    /// - New `TestContext` instance owning the file
    pub fn new(file: NamedTempFile, servers: Vec<String>) -> Self {
        Self { file, servers }
    }

    /// Path of the server list file on disk.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
