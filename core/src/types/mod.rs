//! Core type definitions for observation-night processing
//!
//! - [`Detector`] / [`ObsType`]: header-derived frame attributes
//! - [`DetectorFilter`] / [`ObsTypeFilter`]: per-invocation filters
//! - [`ObsDate`] / [`DateFilter`]: validated YYYYMMDD night dates
//! - [`SelectionCriteria`]: the immutable filter triple for a fetch run

mod criteria;
mod date;
mod enums;

pub use criteria::SelectionCriteria;
pub use date::{DateFilter, ObsDate};
pub use enums::{Detector, DetectorFilter, ObsType, ObsTypeFilter};
