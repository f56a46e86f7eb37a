use crate::error::Result;
use crate::header::FrameHeader;
use crate::scan;
use crate::types::ObsDate;
use log::{debug, info};
use std::path::Path;

/// Crop region appended to science frame references
///
/// Bias frames are measured over the whole image; science frames only over
/// this fixed pixel sub-region.
pub const SCIENCE_REGION: &str = "[145:165,2033:2053]";

/// Data lives in the first image extension of every frame
pub const PRIMARY_EXTENSION: &str = "[1]";

/// The two statistics subsets a frame can be routed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubsetKind {
    /// Full-frame statistics over bias frames
    Bias,
    /// Cropped-region statistics over science frames
    Science,
}

impl SubsetKind {
    /// Short name used in index and results file names
    pub fn label(&self) -> &'static str {
        match self {
            SubsetKind::Bias => "bias",
            SubsetKind::Science => "science",
        }
    }

    /// `OBSTYPE` value routed into this subset
    pub fn obstype(&self) -> &'static str {
        match self {
            SubsetKind::Bias => "BIAS",
            SubsetKind::Science => "TARGET",
        }
    }

    /// Tags a file name with this subset's extension and region qualifier
    pub fn tag(&self, file_name: &str) -> String {
        match self {
            SubsetKind::Bias => format!("{}{}", file_name, PRIMARY_EXTENSION),
            SubsetKind::Science => {
                format!("{}{}{}", file_name, PRIMARY_EXTENSION, SCIENCE_REGION)
            }
        }
    }

    /// Index list file name written into the night directory
    pub fn index_file_name(&self, night: ObsDate) -> String {
        format!("{}index{}.lst", self.label(), night.dir_name())
    }

    /// Results table file name written into the results directory
    pub fn results_file_name(&self, night: ObsDate) -> String {
        format!("{}{}.lst", self.label(), night.dir_name())
    }
}

/// Tagged file references for one night, one list per subset
///
/// Built fresh per directory scan, in discovery order; persisted only as
/// the index list files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NightSubsets {
    pub bias: Vec<String>,
    pub science: Vec<String>,
}

impl NightSubsets {
    pub fn is_empty(&self) -> bool {
        self.bias.is_empty() && self.science.is_empty()
    }

    pub fn members(&self, kind: SubsetKind) -> &[String] {
        match kind {
            SubsetKind::Bias => &self.bias,
            SubsetKind::Science => &self.science,
        }
    }
}

/// Classifies a night directory's frames into the two subsets
///
/// Routes on exact `OBSTYPE` match; frames with no `OBSTYPE` (glance or
/// acquisition-camera exposures) are skipped, frames with any other value
/// are ignored.
pub fn classify_night(dir: &Path) -> Result<NightSubsets> {
    let files = scan::fit_files(dir)?;
    if !files.is_empty() {
        info!("Found {} total images in {}", files.len(), dir.display());
    }

    let mut subsets = NightSubsets::default();
    for file in files {
        let header = FrameHeader::from_file(&file)?;
        let Some(obstype) = header.obstype.as_deref() else {
            debug!("{}: no OBSTYPE, skipping", file.display());
            continue;
        };
        let Some(name) = file.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if obstype == SubsetKind::Bias.obstype() {
            subsets.bias.push(SubsetKind::Bias.tag(name));
        } else if obstype == SubsetKind::Science.obstype() {
            subsets.science.push(SubsetKind::Science.tag(name));
        }
    }
    Ok(subsets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitrs::{Fits, Hdu};
    use tempfile::TempDir;

    fn write_frame(dir: &Path, name: &str, obstype: Option<&str>) {
        let mut hdu = Hdu::new(&[2, 2], vec![0f32; 4]);
        hdu.insert("INSTRUME", "IDS");
        if let Some(obstype) = obstype {
            hdu.insert("OBSTYPE", obstype);
        }
        Fits::create(dir.join(name).to_str().unwrap(), hdu).unwrap();
    }

    #[test]
    fn test_tagging() {
        assert_eq!(SubsetKind::Bias.tag("r001.fit"), "r001.fit[1]");
        assert_eq!(
            SubsetKind::Science.tag("r002.fit"),
            "r002.fit[1][145:165,2033:2053]"
        );
    }

    #[test]
    fn test_file_names() {
        let night: ObsDate = "20230615".parse().unwrap();
        assert_eq!(SubsetKind::Bias.index_file_name(night), "biasindex20230615.lst");
        assert_eq!(
            SubsetKind::Science.index_file_name(night),
            "scienceindex20230615.lst"
        );
        assert_eq!(SubsetKind::Bias.results_file_name(night), "bias20230615.lst");
        assert_eq!(SubsetKind::Science.results_file_name(night), "science20230615.lst");
    }

    #[test]
    fn test_classification_routing() {
        let night = TempDir::new().unwrap();
        write_frame(night.path(), "r001.fit", Some("BIAS"));
        write_frame(night.path(), "r002.fit", Some("TARGET"));
        write_frame(night.path(), "r003.fit", Some("BIAS"));
        write_frame(night.path(), "r004.fit", Some("FLAT")); // neither subset
        write_frame(night.path(), "r005.fit", None); // no OBSTYPE

        let subsets = classify_night(night.path()).unwrap();
        assert_eq!(subsets.bias, vec!["r001.fit[1]", "r003.fit[1]"]);
        assert_eq!(
            subsets.science,
            vec!["r002.fit[1][145:165,2033:2053]"]
        );
    }

    #[test]
    fn test_empty_directory() {
        let night = TempDir::new().unwrap();
        let subsets = classify_night(night.path()).unwrap();
        assert!(subsets.is_empty());
    }
}
