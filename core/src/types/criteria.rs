use crate::error::Result;
use crate::types::{DateFilter, DetectorFilter, ObsTypeFilter};

/// Immutable filter triple for one fetch invocation
///
/// Built once from the command-line arguments, before any directory work
/// begins, then passed into the selection functions. The match predicate is
/// pure: it only looks at the header values it is handed.
///
/// # Example
///
/// ```
/// use idsprep_core::SelectionCriteria;
///
/// let criteria = SelectionCriteria::parse("EEV10", "BIAS", "20230615").unwrap();
/// assert!(criteria.matches("BIAS", "EEV10"));
/// assert!(!criteria.matches("TARGET", "EEV10"));
/// assert!(!criteria.matches("BIAS", "REDPLUS2"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionCriteria {
    pub detector: DetectorFilter,
    pub obstype: ObsTypeFilter,
    pub dates: DateFilter,
}

impl SelectionCriteria {
    /// Parses the three positional command-line arguments
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unknown detector or observation
    /// type value, or a malformed date.
    pub fn parse(detector: &str, obstype: &str, date: &str) -> Result<Self> {
        Ok(Self {
            detector: detector.parse()?,
            obstype: obstype.parse()?,
            dates: date.parse()?,
        })
    }

    /// Tests a frame's `OBSTYPE` and `DETECTOR` header values
    pub fn matches(&self, obstype: &str, detector: &str) -> bool {
        self.obstype.matches(obstype) && self.detector.matches(detector)
    }
}
