//! Per-night statistics over bias and science frames
//!
//! For every date-named directory under the working root: classify frames
//! by `OBSTYPE`, write an index list per non-empty subset, run the external
//! statistics command once per frame, merge and strip the outputs, and
//! write the table into the shared `Results/` directory.

pub mod batch;
pub mod classify;
pub mod imstat;
pub mod output;

pub use batch::{merge_batched, strip_directory_prefix};
pub use classify::{classify_night, NightSubsets, SubsetKind, SCIENCE_REGION};
pub use imstat::{ImstatCommand, ImstatOutput};
pub use output::{write_lines, ResultsDir, RESULTS_DIR_NAME};

use crate::error::Result;
use crate::scan;
use log::info;
use std::path::Path;

/// Runs the statistics pass over every night directory under `root`
///
/// Index and results files from a previous run are overwritten. A failed
/// statistics invocation aborts the whole run; there is no per-call retry
/// or timeout.
pub fn run(root: &Path, command: &ImstatCommand) -> Result<()> {
    let mut results = ResultsDir::new(root);

    for (night, night_dir) in scan::date_directories(root)? {
        let subsets = classify_night(&night_dir)?;
        if subsets.is_empty() {
            info!("No bias or science images found in {}", night_dir.display());
            continue;
        }

        for kind in [SubsetKind::Bias, SubsetKind::Science] {
            let members = subsets.members(kind);
            if members.is_empty() {
                continue;
            }
            info!("Found {} {} images", members.len(), kind.label());

            let index_path = night_dir.join(kind.index_file_name(night));
            info!("Writing names of {} images to {}", kind.label(), index_path.display());
            write_lines(&index_path, members)?;

            let night_name = night.dir_name();
            let image_refs: Vec<String> = members
                .iter()
                .map(|name| format!("{}/{}", night_name, name))
                .collect();
            let merged = merge_batched(
                image_refs.iter().map(String::as_str),
                |image_ref| command.run(root, image_ref),
            )?;
            let table = strip_directory_prefix(merged);

            let results_path = results.ensure()?.join(kind.results_file_name(night));
            info!(
                "Writing {} results for {} to {}",
                kind.label(),
                night,
                results_path.display()
            );
            write_lines(&results_path, &table)?;
        }
    }
    Ok(())
}
