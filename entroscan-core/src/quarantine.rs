//! Quarantine: copying a flagged file to a holding folder for review.
//!
//! The original is never removed or modified. An existing same-named file
//! in the holding folder is never overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::errors::QuarantineError;

/// Copies a flagged file into a holding location.
pub trait Quarantine {
    /// Returns the destination path of the copy on success.
    fn quarantine(&self, source: &Path) -> Result<PathBuf, QuarantineError>;
}

/// Filesystem quarantine that copies into a fixed destination folder,
/// creating it on first use.
#[derive(Debug, Clone)]
pub struct CopyQuarantine {
    dest_dir: PathBuf,
}

impl CopyQuarantine {
    pub fn new(dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            dest_dir: dest_dir.into(),
        }
    }

    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }
}

impl Quarantine for CopyQuarantine {
    fn quarantine(&self, source: &Path) -> Result<PathBuf, QuarantineError> {
        // create_dir_all is idempotent, so concurrent or repeated creation
        // attempts cannot fail each other.
        fs::create_dir_all(&self.dest_dir)
            .map_err(|e| QuarantineError::CreateDir(self.dest_dir.clone(), e))?;

        let file_name = source
            .file_name()
            .ok_or_else(|| QuarantineError::NoFileName(source.to_path_buf()))?;
        let dest = self.dest_dir.join(file_name);

        if dest.exists() {
            return Err(QuarantineError::AlreadyExists(dest));
        }

        debug!("Copying {} to {}", source.display(), dest.display());
        fs::copy(source, &dest).map_err(|e| QuarantineError::Copy {
            src: source.to_path_buf(),
            dest: dest.clone(),
            source: e,
        })?;

        info!("Quarantined {} to {}", source.display(), dest.display());
        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_quarantine_creates_destination_and_copies() {
        let src_dir = tempdir().unwrap();
        let dest_root = tempdir().unwrap();
        let source = src_dir.path().join("sample.bin");
        File::create(&source).unwrap().write_all(b"payload").unwrap();

        let dest_dir = dest_root.path().join("holding");
        let quarantine = CopyQuarantine::new(&dest_dir);
        let copied = quarantine.quarantine(&source).unwrap();

        assert_eq!(copied, dest_dir.join("sample.bin"));
        assert_eq!(fs::read(&copied).unwrap(), b"payload");
        // The original stays in place, untouched.
        assert_eq!(fs::read(&source).unwrap(), b"payload");
    }

    #[test]
    fn test_quarantine_refuses_to_overwrite() {
        let src_dir = tempdir().unwrap();
        let dest_dir = tempdir().unwrap();
        let source = src_dir.path().join("sample.bin");
        File::create(&source).unwrap().write_all(b"new").unwrap();
        File::create(dest_dir.path().join("sample.bin"))
            .unwrap()
            .write_all(b"old")
            .unwrap();

        let quarantine = CopyQuarantine::new(dest_dir.path());
        assert!(matches!(
            quarantine.quarantine(&source),
            Err(QuarantineError::AlreadyExists(_))
        ));
        // The existing file keeps its content.
        assert_eq!(fs::read(dest_dir.path().join("sample.bin")).unwrap(), b"old");
    }

    #[test]
    fn test_quarantine_missing_source_reports_copy_failure() {
        let dest_dir = tempdir().unwrap();
        let quarantine = CopyQuarantine::new(dest_dir.path());
        assert!(matches!(
            quarantine.quarantine(Path::new("/no/such/source.bin")),
            Err(QuarantineError::Copy { .. })
        ));
    }
}
