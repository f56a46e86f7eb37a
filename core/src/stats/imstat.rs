use crate::error::{IdsprepError, Result};
use std::path::Path;
use std::process::Command;

/// Default statistics program name
pub const DEFAULT_PROGRAM: &str = "imstat";

/// The two lines one statistics invocation returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImstatOutput {
    /// Column header line
    pub header: String,
    /// Data line for the single file the command was run on
    pub data: String,
}

/// External per-file statistics command
///
/// The command is always invoked with a single file/region reference.
/// Passing many paths in one call is unreliable once the combined argument
/// text grows past roughly 999 characters, so batching happens caller-side
/// (see [`crate::stats::batch`]).
#[derive(Debug, Clone)]
pub struct ImstatCommand {
    program: String,
}

impl Default for ImstatCommand {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl ImstatCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Runs the command on one reference, relative to `working_dir`
    ///
    /// The command resolves paths against its working directory, while the
    /// frames live one level down in night directories, hence the relative
    /// `NIGHT/name` references.
    ///
    /// # Errors
    ///
    /// Fails when the command cannot be spawned, exits non-zero, or prints
    /// anything other than a header line followed by a data line.
    pub fn run(&self, working_dir: &Path, image_ref: &str) -> Result<ImstatOutput> {
        let output = Command::new(&self.program)
            .arg(image_ref)
            .current_dir(working_dir)
            .output()
            .map_err(|e| IdsprepError::StatsCommandFailed {
                program: self.program.clone(),
                image_ref: image_ref.to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(IdsprepError::StatsCommandFailed {
                program: self.program.clone(),
                image_ref: image_ref.to_string(),
                message: format!(
                    "{}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut lines = stdout.lines().map(str::trim_end);
        let (Some(header), Some(data)) = (lines.next(), lines.next()) else {
            return Err(IdsprepError::StatsOutputMalformed {
                program: self.program.clone(),
                image_ref: image_ref.to_string(),
                message: "expected a header line and a data line".to_string(),
            });
        };

        Ok(ImstatOutput {
            header: header.to_string(),
            data: data.to_string(),
        })
    }
}
