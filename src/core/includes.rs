//! Local include prefixing
//!
//! Discovers headers in the per-project subdirectories and rewrites local
//! `#include "..."` directives to carry the owning project directory, so a
//! header resolves the same way no matter where it is included from.
//! Includes already namespaced with the solution prefix are left alone.

use crate::{
    config::Config,
    error::{Result, ToolError},
    utils::fs::FileSystemUtils,
};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Literal prefix of an include directive with a quoted target
pub const INCLUDE_PREFIX: &str = "#include \"";

/// Decide whether a line is a local include that needs prefixing
///
/// A local include starts with `#include "` and its quoted target does not
/// already begin with the reserved namespace prefix.
pub fn is_local_include(line: &str, namespace_prefix: &str) -> bool {
    line.strip_prefix(INCLUDE_PREFIX)
        .is_some_and(|target| !target.starts_with(namespace_prefix))
}

/// Insert the owning project directory into a local include line
///
/// Everything after the opening `#include "` is preserved verbatim,
/// including the closing quote and line terminator.
pub fn prefix_include_line(line: &str, project_dir: &str) -> String {
    let target = &line[INCLUDE_PREFIX.len()..];
    format!("{INCLUDE_PREFIX}{project_dir}/{target}")
}

/// Apply the include transform to a whole header, returning the rewritten
/// content and the number of lines changed
pub fn prefix_includes(content: &str, project_dir: &str, namespace_prefix: &str) -> (String, usize) {
    let mut prefixed = String::with_capacity(content.len());
    let mut changed = 0;

    for line in content.split_inclusive('\n') {
        if is_local_include(line, namespace_prefix) {
            prefixed.push_str(&prefix_include_line(line, project_dir));
            changed += 1;
        } else {
            prefixed.push_str(line);
        }
    }

    (prefixed, changed)
}

/// A header file that could not be processed
#[derive(Debug)]
pub struct FileFailure {
    /// Path of the failing header
    pub path: PathBuf,
    /// What went wrong
    pub error: ToolError,
}

/// Summary of an include-prefixing run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of header files discovered
    pub discovered: usize,
    /// Files that contained local includes and were rewritten
    pub rewritten: usize,
    /// Files that needed no changes
    pub unchanged: usize,
    /// Files that failed to process
    pub failures: Vec<FileFailure>,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Processed {} header(s): {} rewritten, {} unchanged, {} failed",
            self.discovered,
            self.rewritten,
            self.unchanged,
            self.failures.len()
        )
    }
}

/// Rewrites local includes across the discovered header set
pub struct IncludePrefixer {
    config: Config,
    fs_utils: FileSystemUtils,
}

impl IncludePrefixer {
    /// Create a new include prefixer
    pub fn new(config: Config) -> Self {
        Self {
            fs_utils: FileSystemUtils::new(),
            config,
        }
    }

    /// Discover header files matching `<root>/<project-prefix>*/*.h`
    ///
    /// The pattern matches exactly one directory level below the root.
    /// Results are sorted so processing order and failure reports are
    /// reproducible between runs.
    #[instrument(skip(self))]
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.config.header_pattern();
        debug!("Searching for headers matching: {}", pattern);

        let paths = glob::glob(&pattern).map_err(|e| {
            ToolError::config(format!("Invalid header search pattern {pattern}: {e}"))
        })?;

        let mut files = Vec::new();
        for path_result in paths {
            match path_result {
                Ok(path) if path.is_file() => files.push(path),
                Ok(path) => debug!("Skipping non-file match: {}", path.display()),
                Err(e) => warn!("Error reading path for pattern {}: {}", pattern, e),
            }
        }

        files.sort();
        Ok(files)
    }

    /// Process every discovered header independently
    ///
    /// A failing file is reported and skipped; the remaining files are
    /// still processed. The caller decides what a non-empty failure list
    /// means for the process exit code.
    #[instrument(skip(self))]
    pub fn run(&self) -> Result<RunSummary> {
        let files = self.discover()?;
        info!(
            "Found {} header file(s) under {}",
            files.len(),
            self.config.headers.root.display()
        );

        let mut summary = RunSummary {
            discovered: files.len(),
            ..RunSummary::default()
        };

        for (index, path) in files.iter().enumerate() {
            info!("[{}/{}] {}", index + 1, files.len(), path.display());

            match self.process_file(path) {
                Ok(true) => summary.rewritten += 1,
                Ok(false) => summary.unchanged += 1,
                Err(error) => {
                    warn!("Failed to process {}: {}", path.display(), error);
                    summary.failures.push(FileFailure {
                        path: path.clone(),
                        error,
                    });
                }
            }
        }

        Ok(summary)
    }

    /// Rewrite a single header, returning whether anything changed
    ///
    /// Headers with no local includes are not rewritten at all.
    #[instrument(skip(self))]
    pub fn process_file(&self, path: &Path) -> Result<bool> {
        let project_dir = self.owning_subdirectory(path)?;

        let content = self
            .fs_utils
            .read_file_to_string(path)
            .map_err(|e| ToolError::file_system("read", path, e))?;

        let (prefixed, changed) = prefix_includes(
            &content,
            &project_dir,
            &self.config.headers.namespace_prefix,
        );

        if changed == 0 {
            debug!("No local includes in {}", path.display());
            return Ok(false);
        }

        self.fs_utils
            .write_file_atomic(path, prefixed)
            .map_err(|e| ToolError::file_system("write", path, e))?;

        debug!("Rewrote {} include(s) in {}", changed, path.display());
        Ok(true)
    }

    /// First path segment below the tree root, the header's owning project
    fn owning_subdirectory(&self, path: &Path) -> Result<String> {
        let relative = path.strip_prefix(&self.config.headers.root).unwrap_or(path);

        relative
            .parent()
            .and_then(|parent| {
                parent.components().find_map(|component| match component {
                    Component::Normal(name) => name.to_str().map(str::to_string),
                    _ => None,
                })
            })
            .ok_or_else(|| {
                ToolError::config(format!(
                    "Header is not inside a project subdirectory: {}",
                    path.display()
                ))
            })
    }
}
