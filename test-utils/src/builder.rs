use std::io::Write;

use tempfile::NamedTempFile;

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts backed by a server list file.
///
/// Provides a fluent interface for configuring the lines of a temporary server list
/// file. Use the builder pattern to add lines, then call `build()` to write the file
/// and create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_server("minecraft")
///     .with_server("valheim")
///     .with_crlf()
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Lines written to the file, in order.
    ///
    /// Each entry is written verbatim followed by the configured line ending (the
    /// final entry only gets one when `trailing_newline` is set).
    lines: Vec<String>,

    /// Line terminator placed between lines.
    line_ending: &'static str,

    /// Whether the final line is followed by a line terminator.
    trailing_newline: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no lines configured.
    ///
    /// Defaults to `\n` line endings with a trailing newline after the final line,
    /// which is how most editors save text files.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with an empty line list
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            line_ending: "\n",
            trailing_newline: true,
        }
    }

    /// Adds a server identifier line to the file.
    ///
    /// # Arguments
    /// - `server` - Line content, written verbatim
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_server(mut self, server: &str) -> Self {
        self.lines.push(server.to_string());
        self
    }

    /// Adds each of the provided server identifiers in order.
    pub fn with_servers(mut self, servers: &[&str]) -> Self {
        self.lines.extend(servers.iter().map(|s| s.to_string()));
        self
    }

    /// Uses Windows-style `\r\n` line endings.
    pub fn with_crlf(mut self) -> Self {
        self.line_ending = "\r\n";
        self
    }

    /// Omits the line terminator after the final line.
    pub fn without_trailing_newline(mut self) -> Self {
        self.trailing_newline = false;
        self
    }

    /// Writes the configured lines to a new temporary file.
    ///
    /// The file is deleted when the returned `TestContext` is dropped, so keep the
    /// context alive for as long as the file path is used.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the written file
    /// - `Err(TestError::Io)` - Failed to create or write the temporary file
    pub fn build(self) -> Result<TestContext, TestError> {
        let mut contents = self.lines.join(self.line_ending);
        if self.trailing_newline && !self.lines.is_empty() {
            contents.push_str(self.line_ending);
        }

        let mut file = NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;

        Ok(TestContext::new(file, self.lines))
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
