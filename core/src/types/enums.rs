use crate::error::IdsprepError;
use std::fmt;
use std::str::FromStr;

/// Detector head that produced a frame
///
/// The instrument carries one of two cameras; the `DETECTOR` header keyword
/// records which one took the exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detector {
    Eev10,
    RedPlus2,
}

impl Detector {
    /// Returns the header keyword value for this detector
    pub fn keyword(&self) -> &'static str {
        match self {
            Detector::Eev10 => "EEV10",
            Detector::RedPlus2 => "REDPLUS2",
        }
    }

    /// Parses a header value into a known detector
    ///
    /// Returns `None` for anything other than the two known values.
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "EEV10" => Some(Detector::Eev10),
            "REDPLUS2" => Some(Detector::RedPlus2),
            _ => None,
        }
    }
}

impl fmt::Display for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Observation type category recorded in the `OBSTYPE` header keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObsType {
    Arc,
    Bias,
    Dark,
    Flash,
    Flat,
    Sky,
    Target,
}

impl ObsType {
    /// Returns the header keyword value for this observation type
    pub fn keyword(&self) -> &'static str {
        match self {
            ObsType::Arc => "ARC",
            ObsType::Bias => "BIAS",
            ObsType::Dark => "DARK",
            ObsType::Flash => "FLASH",
            ObsType::Flat => "FLAT",
            ObsType::Sky => "SKY",
            ObsType::Target => "TARGET",
        }
    }

    /// Parses a header value into a known observation type
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "ARC" => Some(ObsType::Arc),
            "BIAS" => Some(ObsType::Bias),
            "DARK" => Some(ObsType::Dark),
            "FLASH" => Some(ObsType::Flash),
            "FLAT" => Some(ObsType::Flat),
            "SKY" => Some(ObsType::Sky),
            "TARGET" => Some(ObsType::Target),
            _ => None,
        }
    }
}

impl fmt::Display for ObsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Detector filter supplied once per fetch invocation
///
/// # Example
///
/// ```
/// use idsprep_core::DetectorFilter;
///
/// let filter: DetectorFilter = "BOTH".parse().unwrap();
/// assert!(filter.matches("EEV10"));
/// assert!(filter.matches("REDPLUS2"));
/// assert!(!filter.matches("TEK5"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorFilter {
    /// Accept frames from either known detector
    Both,
    /// Accept frames from exactly one detector
    One(Detector),
}

impl DetectorFilter {
    /// Tests a frame's `DETECTOR` header value against this filter
    ///
    /// `Both` only accepts the two known detector values; an unrecognised
    /// detector never matches.
    pub fn matches(&self, detector: &str) -> bool {
        match self {
            DetectorFilter::Both => Detector::from_keyword(detector).is_some(),
            DetectorFilter::One(d) => d.keyword() == detector,
        }
    }
}

impl FromStr for DetectorFilter {
    type Err = IdsprepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "BOTH" {
            return Ok(DetectorFilter::Both);
        }
        Detector::from_keyword(s)
            .map(DetectorFilter::One)
            .ok_or_else(|| IdsprepError::InvalidDetector(s.to_string()))
    }
}

impl fmt::Display for DetectorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectorFilter::Both => f.write_str("BOTH"),
            DetectorFilter::One(d) => d.fmt(f),
        }
    }
}

/// Observation type filter supplied once per fetch invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObsTypeFilter {
    /// Accept every observation type
    All,
    /// Accept exactly one observation type
    One(ObsType),
}

impl ObsTypeFilter {
    /// Tests a frame's `OBSTYPE` header value against this filter
    pub fn matches(&self, obstype: &str) -> bool {
        match self {
            ObsTypeFilter::All => true,
            ObsTypeFilter::One(t) => t.keyword() == obstype,
        }
    }
}

impl FromStr for ObsTypeFilter {
    type Err = IdsprepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "ALL" {
            return Ok(ObsTypeFilter::All);
        }
        ObsType::from_keyword(s)
            .map(ObsTypeFilter::One)
            .ok_or_else(|| IdsprepError::InvalidObstype(s.to_string()))
    }
}

impl fmt::Display for ObsTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObsTypeFilter::All => f.write_str("ALL"),
            ObsTypeFilter::One(t) => t.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_detector_keyword_roundtrip() {
        assert_eq!(Detector::from_keyword("EEV10"), Some(Detector::Eev10));
        assert_eq!(Detector::from_keyword("REDPLUS2"), Some(Detector::RedPlus2));
        assert_eq!(Detector::from_keyword("eev10"), None);
        assert_eq!(Detector::from_keyword(""), None);
    }

    #[rstest]
    #[case("ARC", Some(ObsType::Arc))]
    #[case("BIAS", Some(ObsType::Bias))]
    #[case("DARK", Some(ObsType::Dark))]
    #[case("FLASH", Some(ObsType::Flash))]
    #[case("FLAT", Some(ObsType::Flat))]
    #[case("SKY", Some(ObsType::Sky))]
    #[case("TARGET", Some(ObsType::Target))]
    #[case("GLANCE", None)]
    fn test_obstype_from_keyword(#[case] value: &str, #[case] expected: Option<ObsType>) {
        assert_eq!(ObsType::from_keyword(value), expected);
    }

    #[test]
    fn test_detector_filter_both_only_accepts_known_values() {
        let filter = DetectorFilter::Both;
        assert!(filter.matches("EEV10"));
        assert!(filter.matches("REDPLUS2"));
        assert!(!filter.matches("TEK5"));
        assert!(!filter.matches(""));
    }

    #[test]
    fn test_detector_filter_one() {
        let filter = DetectorFilter::One(Detector::Eev10);
        assert!(filter.matches("EEV10"));
        assert!(!filter.matches("REDPLUS2"));
    }

    #[test]
    fn test_obstype_filter_all_accepts_anything() {
        assert!(ObsTypeFilter::All.matches("BIAS"));
        assert!(ObsTypeFilter::All.matches("TARGET"));
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("BOTH".parse::<DetectorFilter>().unwrap(), DetectorFilter::Both);
        assert_eq!(
            "REDPLUS2".parse::<DetectorFilter>().unwrap(),
            DetectorFilter::One(Detector::RedPlus2)
        );
        assert!("both".parse::<DetectorFilter>().is_err());

        assert_eq!("ALL".parse::<ObsTypeFilter>().unwrap(), ObsTypeFilter::All);
        assert_eq!(
            "SKY".parse::<ObsTypeFilter>().unwrap(),
            ObsTypeFilter::One(ObsType::Sky)
        );
        assert!("FLAME".parse::<ObsTypeFilter>().is_err());
    }
}
