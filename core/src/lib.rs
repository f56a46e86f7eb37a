pub mod cli;
pub mod error;
pub mod header;
pub mod scan;
pub mod selection;
pub mod stats;
pub mod types;

pub use error::{IdsprepError, Result};
pub use header::FrameHeader;
pub use types::*;
