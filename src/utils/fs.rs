//! File system utility functions
//!
//! Provides safe file operations with proper error handling. Rewrites go
//! through a temporary sibling file and a rename, so a failure mid-write
//! never leaves a half-written original behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Read file contents as string
    #[instrument(skip(self))]
    pub fn read_file_to_string<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<String> {
        let path = path.as_ref();
        debug!("Reading file: {}", path.display());
        fs::read_to_string(path)
    }

    /// Replace a file's contents atomically
    ///
    /// Writes to a `.tmp` sibling in the same directory, then renames over
    /// the target. The rename stays on one filesystem, so it either fully
    /// succeeds or leaves the original untouched.
    #[instrument(skip(self, contents))]
    pub fn write_file_atomic<P: AsRef<Path> + std::fmt::Debug, C: AsRef<[u8]>>(
        &self,
        path: P,
        contents: C,
    ) -> io::Result<()> {
        let path = path.as_ref();
        let tmp_path = Self::tmp_sibling(path);

        debug!(
            "Writing file: {} (via {})",
            path.display(),
            tmp_path.display()
        );

        fs::write(&tmp_path, contents)?;
        match fs::rename(&tmp_path, path) {
            Ok(()) => {
                debug!("File written successfully");
                Ok(())
            }
            Err(e) => {
                // Don't leave the temp file behind on a failed rename
                let _ = fs::remove_file(&tmp_path);
                Err(e)
            }
        }
    }

    /// Check if a path exists and is a file
    pub fn is_file<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().is_file()
    }

    /// Temporary sibling path used during atomic writes
    fn tmp_sibling(path: &Path) -> PathBuf {
        let mut name = path.file_name().map_or_else(
            || std::ffi::OsString::from("file"),
            std::ffi::OsStr::to_os_string,
        );
        name.push(".tmp");
        path.with_file_name(name)
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}
