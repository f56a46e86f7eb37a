use crate::error::IdsprepError;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// One observing night, named by its 8-digit calendar date
///
/// Night directories on both the observation store and the local working
/// root are named `YYYYMMDD`; this is the only integration point between
/// the fetch and statistics tools. Parsing enforces real calendar bounds,
/// so `20231301` or `2023010` are rejected.
///
/// # Example
///
/// ```
/// use idsprep_core::ObsDate;
///
/// let night: ObsDate = "20230615".parse().unwrap();
/// assert_eq!(night.dir_name(), "20230615");
/// assert!("20231301".parse::<ObsDate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObsDate(NaiveDate);

impl ObsDate {
    /// Returns the `YYYYMMDD` directory name for this night
    pub fn dir_name(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// Returns the inclusive list of nights between `start` and `stop`
    pub fn range(start: ObsDate, stop: ObsDate) -> Vec<ObsDate> {
        let mut nights = Vec::new();
        let mut current = start.0;
        while current <= stop.0 {
            nights.push(ObsDate(current));
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }
        nights
    }
}

impl FromStr for ObsDate {
    type Err = IdsprepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdsprepError::InvalidDate(s.to_string()));
        }
        let year: i32 = s[0..4].parse().map_err(|_| IdsprepError::InvalidDate(s.to_string()))?;
        let month: u32 = s[4..6].parse().map_err(|_| IdsprepError::InvalidDate(s.to_string()))?;
        let day: u32 = s[6..8].parse().map_err(|_| IdsprepError::InvalidDate(s.to_string()))?;
        NaiveDate::from_ymd_opt(year, month, day)
            .map(ObsDate)
            .ok_or_else(|| IdsprepError::InvalidDate(s.to_string()))
    }
}

impl fmt::Display for ObsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y%m%d"))
    }
}

/// Night selection supplied once per fetch invocation
///
/// `Range` covers the inclusive `YYYYMMDD:YYYYMMDD` form used when catching
/// up on several nights at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    /// Every date-named subdirectory already present under the source root
    All,
    /// A single night
    Single(ObsDate),
    /// An inclusive range of nights
    Range(ObsDate, ObsDate),
}

impl DateFilter {
    /// Returns the explicitly requested nights, or `None` for `All`
    pub fn explicit_nights(&self) -> Option<Vec<ObsDate>> {
        match self {
            DateFilter::All => None,
            DateFilter::Single(d) => Some(vec![*d]),
            DateFilter::Range(start, stop) => Some(ObsDate::range(*start, *stop)),
        }
    }
}

impl FromStr for DateFilter {
    type Err = IdsprepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "ALL" {
            return Ok(DateFilter::All);
        }
        if let Some((start, stop)) = s.split_once(':') {
            let start: ObsDate = start.parse()?;
            let stop: ObsDate = stop.parse()?;
            if start > stop {
                return Err(IdsprepError::InvalidDate(s.to_string()));
            }
            return Ok(DateFilter::Range(start, stop));
        }
        s.parse().map(DateFilter::Single)
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFilter::All => f.write_str("ALL"),
            DateFilter::Single(d) => d.fmt(f),
            DateFilter::Range(start, stop) => write!(f, "{}:{}", start, stop),
        }
    }
}
