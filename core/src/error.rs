use std::path::PathBuf;
use thiserror::Error;

/// Result type for idsprep operations
pub type Result<T> = std::result::Result<T, IdsprepError>;

/// Error types for idsprep operations
#[derive(Error, Debug)]
pub enum IdsprepError {
    /// Unrecognised detector filter supplied on the command line
    #[error("invalid detector filter: {0} (expected EEV10, REDPLUS2 or BOTH)")]
    InvalidDetector(String),

    /// Unrecognised observation type filter supplied on the command line
    #[error("invalid observation type filter: {0} (expected ARC, BIAS, DARK, FLASH, FLAT, SKY, TARGET or ALL)")]
    InvalidObstype(String),

    /// Date argument that is not a valid YYYYMMDD calendar date
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Source-side night directory absent in single-date or range mode
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// FITS reading error
    #[error("FITS error in {}: {}", .path.display(), .message)]
    Fits { path: PathBuf, message: String },

    /// Statistics command exited unsuccessfully
    #[error("{} failed on {}: {}", .program, .image_ref, .message)]
    StatsCommandFailed {
        program: String,
        image_ref: String,
        message: String,
    },

    /// Statistics command produced something other than header + data line
    #[error("unexpected output from {} on {}: {}", .program, .image_ref, .message)]
    StatsOutputMalformed {
        program: String,
        image_ref: String,
        message: String,
    },

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
