//! Frame selection and copying for the fetch tool
//!
//! Resolves which night directories to process, applies the header filter
//! to each `.fit` file, and copies matches into per-night working
//! directories. Source files are never modified, moved or renamed.

mod copy;

pub use copy::{copy_frames, CopyOutcome};

use crate::error::{IdsprepError, Result};
use crate::header::FrameHeader;
use crate::scan;
use crate::types::{DateFilter, ObsDate, SelectionCriteria};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Outcome of one night in a fetch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightOutcome {
    pub night: ObsDate,
    pub matched: usize,
    pub copied: usize,
    pub already_present: usize,
}

/// Outcome of a whole fetch run, for the end-of-run report
#[derive(Debug, Clone, Default)]
pub struct FetchSummary {
    pub nights: Vec<NightOutcome>,
}

/// Resolves the night directories a fetch run will read from
///
/// Explicit nights (single date or range) must exist on the source side;
/// an absent directory is an error that terminates the invocation. In
/// `ALL` mode only date-named subdirectories that already exist are
/// returned, so the missing-directory path is unreachable there.
pub fn resolve_night_dirs(
    source_root: &Path,
    dates: &DateFilter,
) -> Result<Vec<(ObsDate, PathBuf)>> {
    match dates.explicit_nights() {
        Some(nights) => {
            let mut dirs = Vec::with_capacity(nights.len());
            for night in nights {
                let dir = source_root.join(night.dir_name());
                if !dir.is_dir() {
                    return Err(IdsprepError::DirectoryNotFound(dir));
                }
                dirs.push((night, dir));
            }
            Ok(dirs)
        }
        None => scan::date_directories(source_root),
    }
}

/// Selects the frames in one night directory that match the criteria
///
/// Skips, without error: files whose `INSTRUME` is absent or not the
/// expected instrument, and files missing `OBSTYPE` or `DETECTOR`.
pub fn select_frames(dir: &Path, criteria: &SelectionCriteria) -> Result<Vec<PathBuf>> {
    let mut matches = Vec::new();
    for file in scan::fit_files(dir)? {
        let header = FrameHeader::from_file(&file)?;
        if !header.is_in_scope() {
            debug!("{}: not an instrument frame, skipping", file.display());
            continue;
        }
        let (Some(obstype), Some(detector)) = (&header.obstype, &header.detector) else {
            debug!("{}: missing OBSTYPE or DETECTOR, skipping", file.display());
            continue;
        };
        if criteria.matches(obstype, detector) {
            matches.push(file);
        }
    }
    Ok(matches)
}

/// Runs a whole fetch: resolve nights, select, copy
///
/// A night with zero matching frames is reported and skipped, not an
/// error. Re-running with identical inputs is idempotent: already-copied
/// files are skipped.
pub fn run(
    source_root: &Path,
    dest_root: &Path,
    criteria: &SelectionCriteria,
) -> Result<FetchSummary> {
    let mut summary = FetchSummary::default();
    for (night, source_dir) in resolve_night_dirs(source_root, &criteria.dates)? {
        info!("{}", night);
        let matches = select_frames(&source_dir, criteria)?;
        if matches.is_empty() {
            info!("No matching images in {}, skipping this night", source_dir.display());
            summary.nights.push(NightOutcome {
                night,
                matched: 0,
                copied: 0,
                already_present: 0,
            });
            continue;
        }
        let dest_dir = dest_root.join(night.dir_name());
        let outcome = copy_frames(&matches, &dest_dir)?;
        summary.nights.push(NightOutcome {
            night,
            matched: matches.len(),
            copied: outcome.copied,
            already_present: outcome.already_present,
        });
    }
    Ok(summary)
}
