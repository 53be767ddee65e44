//! Manifest version patching
//!
//! Rewrites the `<version>...</version>` element of the NuGet packaging
//! manifest with the version supplied by CI. Every other byte of the
//! manifest round-trips unchanged, including line terminators.

use crate::{
    config::Config,
    error::{Result, ToolError},
    utils::fs::FileSystemUtils,
};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Opening tag of the version element
pub const OPENING_TAG: &str = "<version>";
/// Closing tag of the version element
pub const CLOSING_TAG: &str = "</version>";

/// Signals a line that opens a version element but never closes it
#[derive(Debug, Error)]
#[error("line contains `<version>` but no matching `</version>`")]
pub struct MissingClosingTag;

/// Rewrite a single manifest line, embedding `version` into its version
/// element
///
/// Lines without `<version>` pass through untouched (`Ok(None)`). For a
/// matching line the output keeps everything up to and including the
/// opening tag, then the new version, then everything from the first
/// occurrence of `</version>` onward. A matching line with no closing tag
/// is malformed input, not a slicing exercise.
pub fn patch_version_line(
    line: &str,
    version: &str,
) -> std::result::Result<Option<String>, MissingClosingTag> {
    let Some(open_idx) = line.find(OPENING_TAG) else {
        return Ok(None);
    };
    let head_end = open_idx + OPENING_TAG.len();
    let Some(close_idx) = line.find(CLOSING_TAG) else {
        return Err(MissingClosingTag);
    };

    Ok(Some(format!(
        "{}{}{}",
        &line[..head_end],
        version,
        &line[close_idx..]
    )))
}

/// Summary of a manifest patch run
#[derive(Debug)]
pub struct PatchSummary {
    /// Number of lines whose version element was rewritten
    pub lines_patched: usize,
}

/// Patches the packaging manifest in place (via atomic rewrite)
pub struct ManifestPatcher {
    config: Config,
    fs_utils: FileSystemUtils,
}

impl ManifestPatcher {
    /// Create a new manifest patcher
    pub fn new(config: Config) -> Self {
        Self {
            fs_utils: FileSystemUtils::new(),
            config,
        }
    }

    /// Patch the configured manifest file
    #[instrument(skip(self))]
    pub fn patch(&self) -> Result<PatchSummary> {
        let path = &self.config.manifest.path;
        let version = self.config.manifest.version.as_deref().ok_or_else(|| {
            ToolError::config(format!(
                "No version resolved; set {} or pass --set",
                self.config.manifest.version_env_var
            ))
        })?;

        debug!("Patching manifest: {}", path.display());

        let content = self
            .fs_utils
            .read_file_to_string(path)
            .map_err(|e| ToolError::file_system("read", path, e))?;

        let (patched, summary) = Self::patch_content(&content, version, path)?;

        self.fs_utils
            .write_file_atomic(path, patched)
            .map_err(|e| ToolError::file_system("write", path, e))?;

        info!(
            "Embedded version {} into {} ({} line(s) patched)",
            version,
            path.display(),
            summary.lines_patched
        );

        Ok(summary)
    }

    /// Apply the per-line transform to the whole manifest
    ///
    /// The transform is applied uniformly to every line; real manifests
    /// carry exactly one version element, but if several lines matched
    /// they would all receive the same version.
    fn patch_content(
        content: &str,
        version: &str,
        path: &Path,
    ) -> Result<(String, PatchSummary)> {
        let mut patched = String::with_capacity(content.len());
        let mut lines_patched = 0;

        for (line_no, line) in content.split_inclusive('\n').enumerate() {
            match patch_version_line(line, version) {
                Ok(Some(new_line)) => {
                    debug!("Patched line {}: {}", line_no + 1, new_line.trim_end());
                    patched.push_str(&new_line);
                    lines_patched += 1;
                }
                Ok(None) => patched.push_str(line),
                Err(e) => {
                    return Err(ToolError::malformed_manifest(
                        e.to_string(),
                        path,
                        line_no + 1,
                    ));
                }
            }
        }

        if lines_patched == 0 {
            return Err(ToolError::malformed_manifest(
                "no <version> element found",
                path,
                0,
            ));
        }

        Ok((patched, PatchSummary { lines_patched }))
    }
}
