//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::{includes::IncludePrefixer, manifest::ManifestPatcher},
    error::ToolError,
};
use anyhow::Context;
use tracing::{info, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::PatchVersion { .. } => execute_patch_version_command(config),
        Command::PrefixIncludes { .. } => execute_prefix_includes_command(config),
    }
}

/// Execute the patch-version command
#[instrument(skip(config))]
fn execute_patch_version_command(config: &Config) -> anyhow::Result<()> {
    info!(
        "Patching version element in {}",
        config.manifest.path.display()
    );

    let patcher = ManifestPatcher::new(config.clone());
    let summary = patcher
        .patch()
        .context("Failed to patch manifest version")?;

    info!(
        "Manifest patched successfully ({} line(s) updated)",
        summary.lines_patched
    );
    Ok(())
}

/// Execute the prefix-includes command
#[instrument(skip(config))]
fn execute_prefix_includes_command(config: &Config) -> anyhow::Result<()> {
    info!(
        "Prefixing local includes under {}",
        config.headers.root.display()
    );

    let prefixer = IncludePrefixer::new(config.clone());
    let summary = prefixer.run().context("Failed to process header files")?;

    info!("{}", summary);

    if !summary.failures.is_empty() {
        for failure in &summary.failures {
            info!("  failed: {} ({})", failure.path.display(), failure.error);
        }
        return Err(
            ToolError::partial_failure(summary.failures.len(), summary.discovered).into(),
        );
    }

    Ok(())
}
