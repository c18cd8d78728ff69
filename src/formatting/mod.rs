//! The reformat / import-resolution pass.
//!
//! After assembly the document only imports `"errors"` and the extra
//! imports. `goimports` adds the imports the signatures need, drops unused
//! ones and prints the file canonically. It is an external program, so it
//! sits behind the [`Reformatter`] trait and tests can swap it out.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

use crate::core::{Error, Result};

pub trait Reformatter {
    /// Returns the reformatted document. Errors keep `source` for diagnosis.
    fn reformat(&self, source: &str) -> Result<String>;
}

/// Leaves the document as assembled.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Reformatter for Passthrough {
    fn reformat(&self, source: &str) -> Result<String> {
        Ok(source.to_string())
    }
}

/// Runs `goimports`, feeding the document on stdin.
#[derive(Debug, Clone)]
pub struct GoImports {
    program: PathBuf,
}

impl GoImports {
    pub const PROGRAM: &'static str = "goimports";

    /// Finds `goimports` on `PATH`.
    pub fn locate() -> Result<Self> {
        which::which(Self::PROGRAM)
            .map(Self::with_program)
            .map_err(|e| Error::reformat(format!("{} not found: {}", Self::PROGRAM, e), ""))
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Reformatter for GoImports {
    fn reformat(&self, source: &str) -> Result<String> {
        let fail = |message: String| Error::reformat(message, source);
        debug!(program = %self.program.display(), "running reformatter");

        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| fail(format!("failed to run {}: {}", self.program.display(), e)))?;

        // goimports reads all of stdin before writing anything.
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(source.as_bytes()) {
                drop(stdin);
                // The child is reaped even when it stopped reading early.
                let _ = child.kill();
                let _ = child.wait();
                return Err(fail(format!(
                    "failed to write to {}: {}",
                    self.program.display(),
                    e
                )));
            }
        }
        let output = child
            .wait_with_output()
            .map_err(|e| fail(format!("{} did not finish: {}", self.program.display(), e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(fail(format!("{}: {}", output.status, stderr.trim())));
        }
        String::from_utf8(output.stdout)
            .map_err(|e| fail(format!("{} produced invalid UTF-8: {}", self.program.display(), e)))
    }
}
