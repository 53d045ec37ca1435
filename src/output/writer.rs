//! Atomic Table Writer

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

use crate::{PeriodTableError, Result};

/// Writes documents to disk atomically
pub struct TableWriter;

impl TableWriter {
    /// Replace the contents of `path` with `contents`
    ///
    /// A symlinked destination is written through to its target. The new file
    /// keeps the permissions of the file it replaces, or gets the usual
    /// umask-filtered mode when it is created. The temp file is removed on
    /// every error path; the destination is only touched by the final rename.
    pub fn write(path: &Path, contents: &str) -> Result<()> {
        if path.file_name().is_none() {
            return Err(PeriodTableError::InvalidDestination(format!(
                "'{}' does not name a file",
                path.display()
            )));
        }

        let target = Self::resolve_destination(path);
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = Self::staging_file(dir)?;
        debug!(
            temp = %file.path().display(),
            target = %target.display(),
            "staging table document"
        );

        if let Ok(metadata) = fs::metadata(&target) {
            file.as_file().set_permissions(metadata.permissions())?;
        }

        file.write_all(contents.as_bytes())?;
        file.flush()?;
        file.persist(&target).map_err(|e| e.error)?;

        info!(path = %path.display(), bytes = contents.len(), "wrote period tables");
        Ok(())
    }

    /// Follow symlinks so the rename replaces the real file, not the link
    fn resolve_destination(path: &Path) -> PathBuf {
        if let Ok(resolved) = fs::canonicalize(path) {
            return resolved;
        }
        // Dangling link: create the file it points at
        match fs::read_link(path) {
            Ok(link) => match path.parent() {
                Some(parent) => parent.join(link),
                None => link,
            },
            Err(_) => path.to_path_buf(),
        }
    }

    #[cfg(unix)]
    fn staging_file(dir: &Path) -> Result<NamedTempFile> {
        use std::os::unix::fs::PermissionsExt;

        // 0o666 is narrowed by the process umask, like a plain create
        let file = Builder::new()
            .permissions(fs::Permissions::from_mode(0o666))
            .tempfile_in(dir)?;
        Ok(file)
    }

    #[cfg(not(unix))]
    fn staging_file(dir: &Path) -> Result<NamedTempFile> {
        Ok(Builder::new().tempfile_in(dir)?)
    }
}
