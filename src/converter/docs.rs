use std::io::Write;
use std::process::{Command, Stdio};

use crate::common::indent_lines;
use crate::error::ConvertError;

/// Converts markdown documentation strings into reStructuredText.
pub trait DocConverter {
    fn convert(&self, markdown: &str) -> Result<String, ConvertError>;
}

impl<F> DocConverter for F
where
    F: Fn(&str) -> Result<String, ConvertError>,
{
    fn convert(&self, markdown: &str) -> Result<String, ConvertError> {
        self(markdown)
    }
}

/// [`DocConverter`] backed by the `pandoc` executable.
#[derive(Debug, Clone)]
pub struct Pandoc {
    program: String,
}

impl Default for Pandoc {
    fn default() -> Self {
        Self::new()
    }
}

impl Pandoc {
    /// Use `pandoc` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("pandoc")
    }

    /// Use a specific pandoc executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl DocConverter for Pandoc {
    fn convert(&self, markdown: &str) -> Result<String, ConvertError> {
        tracing::debug!(program = %self.program, bytes = markdown.len(), "running pandoc");

        let mut child = Command::new(&self.program)
            .args(["--from", "markdown", "--to", "rst"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ConvertError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // pandoc reads all of stdin before writing. A write error (EPIPE when
        // pandoc exits early) is only reported if pandoc itself succeeded.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(markdown.as_bytes()),
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(ConvertError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        written?;
        Ok(String::from_utf8(output.stdout)?)
    }
}

/// Convert `text` to reST and indent every resulting line by `indent` spaces.
///
/// The converter output is used as-is: a trailing newline produces a final
/// line holding only the indentation. No newline is appended.
pub fn normalize_doc<C>(converter: &C, text: &str, indent: usize) -> Result<String, ConvertError>
where
    C: DocConverter + ?Sized,
{
    let rest = converter.convert(text)?;
    Ok(indent_lines(&rest, indent))
}
