//! # Spectre Build Tools
//!
//! Build-support tools for the Spectre native-algorithms packaging
//! pipeline. One binary bundles two independent batch utilities: a
//! manifest version patcher driven by the CI build version, and a header
//! include prefixer that namespaces local includes with their owning
//! project directory.
//!
//! ## Example
//!
//! ```no_run
//! use spectre_build_tools::{config::Config, core::ManifestPatcher};
//!
//! let mut config = Config::default();
//! config.manifest.version = Some("1.2.3".to_string());
//!
//! let summary = ManifestPatcher::new(config).patch()?;
//! println!("Patched {} line(s)", summary.lines_patched);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
