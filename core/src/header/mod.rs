pub mod keywords;

use crate::error::{IdsprepError, Result};
use fitrs::Fits;
use keywords::{get_string_value, DETECTOR, INSTRUME, INSTRUMENT_ID, OBSTYPE};
use std::path::Path;

/// Header attributes read from a frame's primary HDU
///
/// Every field is optional: telescope frames routinely miss keywords (an
/// acquisition-camera exposure has no `OBSTYPE`, a glance frame may carry a
/// different `INSTRUME`). Absence is a first-class skip condition for the
/// callers, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHeader {
    /// `INSTRUME` keyword value
    pub instrument: Option<String>,

    /// `OBSTYPE` keyword value
    pub obstype: Option<String>,

    /// `DETECTOR` keyword value
    pub detector: Option<String>,
}

impl FrameHeader {
    /// Reads the header attributes from a FITS file's primary HDU
    ///
    /// # Errors
    ///
    /// Returns a FITS error if the file cannot be opened or has no primary
    /// HDU; absent keywords are reported as `None`, not as errors.
    pub fn from_file(path: &Path) -> Result<Self> {
        let fits = Fits::open(path).map_err(|e| IdsprepError::Fits {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let hdu = fits.get(0).ok_or_else(|| IdsprepError::Fits {
            path: path.to_path_buf(),
            message: "no primary HDU".to_string(),
        })?;

        Ok(Self {
            instrument: get_string_value(&hdu, INSTRUME),
            obstype: get_string_value(&hdu, OBSTYPE),
            detector: get_string_value(&hdu, DETECTOR),
        })
    }

    /// Whether this frame was taken by the instrument these tools serve
    pub fn is_in_scope(&self) -> bool {
        self.instrument.as_deref() == Some(INSTRUMENT_ID)
    }
}
