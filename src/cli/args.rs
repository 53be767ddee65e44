//! Command-line argument parsing and validation

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Spectre Build Tools - build-support scripts for the native-algorithms tree
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "build-tools")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Patch the manifest version element with the CI build version
    PatchVersion {
        /// Path to the packaging manifest
        #[arg(short = 'm', long, default_value = "native-algorithms.nuspec")]
        manifest: PathBuf,

        /// Explicit version to embed (overrides APPVEYOR_BUILD_VERSION)
        #[arg(short = 's', long = "set", value_name = "VERSION")]
        set: Option<String>,
    },

    /// Prefix local includes with their owning project directory
    PrefixIncludes {
        /// Root of the source tree to scan
        #[arg(short = 'r', long, default_value = ".")]
        root: PathBuf,
    },
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
