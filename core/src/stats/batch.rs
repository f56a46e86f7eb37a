//! Batched invocation of a single-file statistics command
//!
//! The external command is invoked once per file reference, never with the
//! whole list at once, because its combined argument text is unreliable
//! past roughly 999 characters. Each invocation repeats the column header,
//! so the merge keeps the header from the first call only.

use crate::error::Result;
use crate::stats::imstat::ImstatOutput;

/// Merges per-file invocation outputs into one table
///
/// Invariant: for `n` input references the merged sequence holds `1 + n`
/// lines, header first, data lines in invocation order. An empty input
/// yields an empty sequence. Any single failed invocation aborts the
/// remaining batch.
pub fn merge_batched<'a, I, F>(image_refs: I, mut invoke: F) -> Result<Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
    F: FnMut(&str) -> Result<ImstatOutput>,
{
    let mut merged = Vec::new();
    for (i, image_ref) in image_refs.into_iter().enumerate() {
        let output = invoke(image_ref)?;
        if i == 0 {
            merged.push(output.header);
        }
        merged.push(output.data);
    }
    Ok(merged)
}

/// Strips the night-directory prefix from a merged table
///
/// The data lines name files as `YYYYMMDD/rxxxxxxx.fit...`; the final
/// table should report bare file names matching the index lists, so every
/// line but the header keeps only the suffix after its last `/`.
pub fn strip_directory_prefix(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line
            } else {
                line.rsplit('/').next().unwrap_or_default().to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IdsprepError;

    fn fake_output(data: &str) -> ImstatOutput {
        ImstatOutput {
            header: "HDR".to_string(),
            data: data.to_string(),
        }
    }

    #[test]
    fn test_merge_keeps_header_once() {
        let refs = ["a", "b", "c"];
        let merged = merge_batched(refs.into_iter(), |r| Ok(fake_output(&format!("data-{}", r))))
            .unwrap();
        assert_eq!(merged, vec!["HDR", "data-a", "data-b", "data-c"]);
        assert_eq!(merged.len(), 1 + refs.len());
    }

    #[test]
    fn test_merge_empty_input() {
        let merged =
            merge_batched(std::iter::empty::<&str>(), |_| Ok(fake_output("unused"))).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn test_merge_invokes_once_per_reference() {
        let mut calls = Vec::new();
        merge_batched(["x", "y"].into_iter(), |r| {
            calls.push(r.to_string());
            Ok(fake_output(r))
        })
        .unwrap();
        assert_eq!(calls, vec!["x", "y"]);
    }

    #[test]
    fn test_merge_aborts_on_first_failure() {
        let mut calls = 0;
        let result = merge_batched(["a", "b", "c"].into_iter(), |r| {
            calls += 1;
            if r == "b" {
                Err(IdsprepError::StatsOutputMalformed {
                    program: "imstat".to_string(),
                    image_ref: r.to_string(),
                    message: "broken".to_string(),
                })
            } else {
                Ok(fake_output(r))
            }
        });
        assert!(result.is_err());
        assert_eq!(calls, 2, "remaining batch must not run");
    }

    #[test]
    fn test_strip_leaves_header_untouched() {
        let merged = vec![
            "NAME  MEAN  STDDEV".to_string(),
            "20230101/r0000001.fit  100.0  5.2".to_string(),
            "20230101/r0000002.fit[1]  99.8  5.1".to_string(),
        ];
        let table = strip_directory_prefix(merged);
        assert_eq!(
            table,
            vec![
                "NAME  MEAN  STDDEV",
                "r0000001.fit  100.0  5.2",
                "r0000002.fit[1]  99.8  5.1",
            ]
        );
    }

    #[test]
    fn test_strip_without_separator_keeps_line() {
        let table = strip_directory_prefix(vec![
            "HDR".to_string(),
            "r0000001.fit  1.0".to_string(),
        ]);
        assert_eq!(table[1], "r0000001.fit  1.0");
    }
}
