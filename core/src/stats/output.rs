use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Name of the shared results directory under the working root
pub const RESULTS_DIR_NAME: &str = "Results";

/// Shared results directory, created lazily on first need
///
/// Nights that yield nothing must not leave an empty `Results/` behind.
#[derive(Debug)]
pub struct ResultsDir {
    path: PathBuf,
    created: bool,
}

impl ResultsDir {
    pub fn new(root: &Path) -> Self {
        Self {
            path: root.join(RESULTS_DIR_NAME),
            created: false,
        }
    }

    /// Returns the directory path, creating the directory the first time
    pub fn ensure(&mut self) -> Result<&Path> {
        if !self.created {
            fs::create_dir_all(&self.path)?;
            self.created = true;
        }
        Ok(&self.path)
    }
}

/// Writes lines to a file, one per line, overwriting any previous run
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let mut file = fs::File::create(path)?;
    for line in lines {
        writeln!(file, "{}", line.as_ref())?;
    }
    Ok(())
}
