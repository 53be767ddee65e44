//! Configuration management for the build tools
//!
//! Centralizes configuration options and provides validation. The entry
//! point resolves all external input (flags, environment) here, so the
//! transforms themselves stay side-effect free.

use crate::{cli::Args, error::ToolError, utils::env::EnvUtils};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Working directory for operations
    pub work_dir: PathBuf,
    /// Manifest patching configuration
    pub manifest: ManifestConfig,
    /// Header prefixing configuration
    pub headers: HeaderConfig,
}

/// Manifest patching configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Path to the packaging manifest
    pub path: PathBuf,
    /// Environment variable supplying the version string in CI
    pub version_env_var: String,
    /// Resolved version to embed, populated at startup
    pub version: Option<String>,
}

/// Header prefixing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Root of the source tree to scan
    pub root: PathBuf,
    /// Naming convention for project subdirectories (glob prefix)
    pub project_prefix: String,
    /// Header file extension to match
    pub header_extension: String,
    /// Include targets already starting with this token are left alone
    pub namespace_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            work_dir: PathBuf::from("."),
            manifest: ManifestConfig::default(),
            headers: HeaderConfig::default(),
        }
    }
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("native-algorithms.nuspec"),
            version_env_var: "APPVEYOR_BUILD_VERSION".to_string(),
            version: None,
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            project_prefix: "Spectre.".to_string(),
            header_extension: "h".to_string(),
            namespace_prefix: "Spectre.".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    ///
    /// For `patch-version` the version string is resolved right here, from
    /// the `--set` flag or the CI environment variable, so a missing value
    /// fails before the manifest is ever opened.
    pub fn from_args(args: &Args) -> Result<Self, ToolError> {
        let mut config = Self {
            debug: args.debug,
            ..Self::default()
        };

        match &args.command {
            crate::cli::Command::PatchVersion { manifest, set } => {
                config.manifest.path = manifest.clone();
                config.manifest.version = Some(Self::resolve_version(
                    set.as_deref(),
                    &config.manifest.version_env_var,
                )?);
            }
            crate::cli::Command::PrefixIncludes { root } => {
                config.headers.root = root.clone();
            }
        }

        config.validate(&args.command)?;
        Ok(config)
    }

    /// Resolve the version to embed from the flag or the environment
    fn resolve_version(set: Option<&str>, env_var: &str) -> Result<String, ToolError> {
        if let Some(version) = set {
            if version.is_empty() {
                return Err(ToolError::config("--set was given an empty version"));
            }
            return Ok(version.to_string());
        }
        EnvUtils::require_var(env_var)
    }

    /// Validate configuration against the selected command
    pub fn validate(&self, command: &crate::cli::Command) -> Result<(), ToolError> {
        match command {
            crate::cli::Command::PatchVersion { .. } => {
                if !self.manifest.path.is_file() {
                    return Err(ToolError::config(format!(
                        "Manifest file not found: {}",
                        self.manifest.path.display()
                    )));
                }
            }
            crate::cli::Command::PrefixIncludes { .. } => {
                if !self.headers.root.is_dir() {
                    return Err(ToolError::config(format!(
                        "Source tree root not found: {}",
                        self.headers.root.display()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Glob pattern matching headers one level below the tree root
    pub fn header_pattern(&self) -> String {
        format!(
            "{}/{}*/*.{}",
            self.headers.root.display(),
            self.headers.project_prefix,
            self.headers.header_extension
        )
    }
}
