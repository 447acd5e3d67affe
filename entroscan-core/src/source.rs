//! File discovery: enumerating the regular files under a scan root.

use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

use crate::errors::ScanError;

/// Supplies the sequence of files a scan run should classify.
pub trait FileSource {
    /// Returns the file identifiers reachable from this source.
    ///
    /// Directories the process lacks permission to list are skipped, not
    /// fatal; only a root that cannot be read at all is an error, reported
    /// before any file is processed.
    fn files(&self) -> Result<Vec<PathBuf>, ScanError>;
}

/// Recursive directory walk over the local filesystem. Yields regular
/// files only; symlinks are not followed.
#[derive(Debug, Clone)]
pub struct WalkSource {
    root: PathBuf,
}

impl WalkSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSource for WalkSource {
    fn files(&self) -> Result<Vec<PathBuf>, ScanError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root).follow_links(false) {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() {
                        files.push(entry.into_path());
                    }
                }
                Err(e) => {
                    // An error on the root itself means the scan cannot
                    // start; anything deeper is skipped, not fatal.
                    if e.depth() == 0 || e.path() == Some(self.root.as_path()) {
                        return Err(root_unreadable(&self.root, e));
                    }
                    warn!("Skipping unreadable entry: {e}");
                }
            }
        }

        Ok(files)
    }
}

fn root_unreadable(root: &Path, e: walkdir::Error) -> ScanError {
    let message = e.to_string();
    let io = e
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, message));
    ScanError::RootUnreadable(root.to_path_buf(), io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_unreadable_root_is_fatal() {
        let source = WalkSource::new("/no/such/scan/root");
        assert!(matches!(
            source.files(),
            Err(ScanError::RootUnreadable(_, _))
        ));
    }

    #[test]
    fn test_walk_finds_nested_regular_files() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("top.bin"))
            .unwrap()
            .write_all(b"x")
            .unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("sub").join("nested.bin"))
            .unwrap()
            .write_all(b"y")
            .unwrap();

        let mut found = WalkSource::new(dir.path()).files().unwrap();
        found.sort();
        assert_eq!(
            found,
            vec![
                dir.path().join("sub").join("nested.bin"),
                dir.path().join("top.bin"),
            ]
        );
    }

    #[test]
    fn test_directories_themselves_are_not_yielded() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("only_dirs")).unwrap();
        let found = WalkSource::new(dir.path()).files().unwrap();
        assert!(found.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_unlistable_subdirectory_is_skipped_not_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        File::create(dir.path().join("top.bin"))
            .unwrap()
            .write_all(b"x")
            .unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // The sibling file is still found whether or not the process can
        // list the locked directory (a privileged runner can).
        let found = WalkSource::new(dir.path()).files();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(found.unwrap(), vec![dir.path().join("top.bin")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_not_followed() {
        let dir = tempdir().unwrap();
        let target = tempdir().unwrap();
        File::create(target.path().join("outside.bin"))
            .unwrap()
            .write_all(b"z")
            .unwrap();
        std::os::unix::fs::symlink(target.path(), dir.path().join("link")).unwrap();

        let found = WalkSource::new(dir.path()).files().unwrap();
        assert!(found.is_empty());
    }
}
