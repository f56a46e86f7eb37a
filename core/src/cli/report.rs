use crate::selection::FetchSummary;
use std::fmt;

/// Text report for a fetch run
pub struct FetchReport<'a> {
    summary: &'a FetchSummary,
}

impl<'a> FetchReport<'a> {
    /// Creates a new fetch report
    pub fn new(summary: &'a FetchSummary) -> Self {
        Self { summary }
    }
}

impl<'a> fmt::Display for FetchReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fetch Summary")?;
        writeln!(f, "=============")?;
        writeln!(f)?;

        let mut copied = 0;
        let mut already_present = 0;
        for night in &self.summary.nights {
            writeln!(
                f,
                "{}: {} matched, {} copied, {} already present",
                night.night, night.matched, night.copied, night.already_present
            )?;
            copied += night.copied;
            already_present += night.already_present;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{} nights, {} copied, {} already present",
            self.summary.nights.len(),
            copied,
            already_present
        )?;

        Ok(())
    }
}
