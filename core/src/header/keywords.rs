use fitrs::{Hdu, HeaderValue};

// Primary HDU keywords consumed by the tools
pub const INSTRUME: &str = "INSTRUME";
pub const OBSTYPE: &str = "OBSTYPE";
pub const DETECTOR: &str = "DETECTOR";

/// Instrument sentinel: frames from anything else are out of scope
pub const INSTRUMENT_ID: &str = "IDS";

/// Helper to get a string value from a FITS header keyword
///
/// Returns `None` if the keyword is absent or not a character string.
pub fn get_string_value(hdu: &Hdu, key: &str) -> Option<String> {
    match hdu.value(key) {
        Some(HeaderValue::CharacterString(s)) => Some(s.trim().to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_names() {
        // FITS keywords are at most eight characters
        for key in [INSTRUME, OBSTYPE, DETECTOR] {
            assert!(key.len() <= 8);
            assert!(key.bytes().all(|b| b.is_ascii_uppercase()));
        }
    }
}
