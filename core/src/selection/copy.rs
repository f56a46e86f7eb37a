use crate::error::Result;
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// What happened to one night's worth of copies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOutcome {
    /// Files newly copied into the destination directory
    pub copied: usize,

    /// Files skipped because the destination already had them
    pub already_present: usize,
}

/// Copies frames into a night directory, never overwriting
///
/// The destination directory is created if absent (`AlreadyExists` is a
/// logged no-op). A frame whose name already exists at the destination is
/// reported and skipped, so re-running with the same inputs performs zero
/// additional byte copies.
pub fn copy_frames(files: &[PathBuf], dest_dir: &Path) -> Result<CopyOutcome> {
    ensure_dir(dest_dir)?;

    let mut outcome = CopyOutcome::default();
    for file in files {
        let Some(name) = file.file_name() else {
            continue;
        };
        let dest = dest_dir.join(name);
        if dest.exists() {
            info!("{} already present, skipping", dest.display());
            outcome.already_present += 1;
            continue;
        }
        info!("Copying {} to {}", file.display(), dest.display());
        fs::copy(file, &dest)?;
        outcome.copied += 1;
    }
    Ok(outcome)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    match fs::create_dir(dir) {
        Ok(()) => {
            info!("Creating dir {}", dir.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("{} already exists", dir.display());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(path: &Path, content: &[u8]) {
        File::create(path).unwrap().write_all(content).unwrap();
    }

    #[test]
    fn test_copies_into_fresh_directory() {
        let src = TempDir::new().unwrap();
        let dest_root = TempDir::new().unwrap();
        let a = src.path().join("r0000001.fit");
        let b = src.path().join("r0000002.fit");
        write_file(&a, b"one");
        write_file(&b, b"two");

        let dest = dest_root.path().join("20230615");
        let outcome = copy_frames(&[a, b], &dest).unwrap();

        assert_eq!(outcome.copied, 2);
        assert_eq!(outcome.already_present, 0);
        assert_eq!(fs::read(dest.join("r0000001.fit")).unwrap(), b"one");
        assert_eq!(fs::read(dest.join("r0000002.fit")).unwrap(), b"two");
    }

    #[test]
    fn test_second_run_copies_nothing() {
        let src = TempDir::new().unwrap();
        let dest_root = TempDir::new().unwrap();
        let a = src.path().join("r0000001.fit");
        write_file(&a, b"payload");

        let dest = dest_root.path().join("20230615");
        let first = copy_frames(std::slice::from_ref(&a), &dest).unwrap();
        assert_eq!(first.copied, 1);

        // mutate the source after the first run; an overwrite would show up
        write_file(&a, b"changed");
        let second = copy_frames(std::slice::from_ref(&a), &dest).unwrap();

        assert_eq!(second.copied, 0);
        assert_eq!(second.already_present, 1);
        assert_eq!(fs::read(dest.join("r0000001.fit")).unwrap(), b"payload");
    }

    #[test]
    fn test_existing_destination_directory_is_fine() {
        let src = TempDir::new().unwrap();
        let dest_root = TempDir::new().unwrap();
        let a = src.path().join("r0000001.fit");
        write_file(&a, b"one");

        let dest = dest_root.path().join("20230615");
        fs::create_dir(&dest).unwrap();
        let outcome = copy_frames(std::slice::from_ref(&a), &dest).unwrap();
        assert_eq!(outcome.copied, 1);
    }
}
