//! Directory discovery shared by the fetch and statistics tools

use crate::error::Result;
use crate::types::ObsDate;
use std::path::{Path, PathBuf};

/// Finds night directories under a root
///
/// Retains only immediate subdirectories whose name parses as a valid
/// 8-digit calendar date; everything else (a `Results/` directory, editor
/// droppings) is silently excluded. Sorted by date so log output is
/// reproducible across runs.
pub fn date_directories(root: &Path) -> Result<Vec<(ObsDate, PathBuf)>> {
    let mut nights = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Ok(night) = name.parse::<ObsDate>() {
            nights.push((night, entry.path()));
        }
    }
    nights.sort_by_key(|(night, _)| *night);
    Ok(nights)
}

/// Lists the `.fit` files directly inside a night directory
///
/// Sorted by file name for reproducible processing order.
pub fn fit_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("fit") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_date_directories_filters_invalid_names() {
        let root = TempDir::new().unwrap();
        for name in ["20230101", "Results", "2023010", "20231301", "pyraf"] {
            fs::create_dir(root.path().join(name)).unwrap();
        }
        // a date-named plain file must not count
        File::create(root.path().join("20230202")).unwrap();

        let nights = date_directories(root.path()).unwrap();
        let names: Vec<String> = nights.iter().map(|(night, _)| night.dir_name()).collect();
        assert_eq!(names, vec!["20230101"]);
    }

    #[test]
    fn test_date_directories_sorted() {
        let root = TempDir::new().unwrap();
        for name in ["20230301", "20230101", "20230201"] {
            fs::create_dir(root.path().join(name)).unwrap();
        }

        let nights = date_directories(root.path()).unwrap();
        let names: Vec<String> = nights.iter().map(|(night, _)| night.dir_name()).collect();
        assert_eq!(names, vec!["20230101", "20230201", "20230301"]);
    }

    #[test]
    fn test_fit_files_only() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("r0000002.fit")).unwrap();
        File::create(dir.path().join("r0000001.fit")).unwrap();
        File::create(dir.path().join("biasindex20230101.lst")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        fs::create_dir(dir.path().join("nested.fit")).unwrap();

        let files = fit_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["r0000001.fit", "r0000002.fit"]);
    }
}
