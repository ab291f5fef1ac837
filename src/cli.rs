//! CLI argument parsing for the upload plugin.
//!
//! The CLI is intentionally thin: the CI system hands the plugin one JSON
//! payload and everything else is resolved from it, so the only knob is
//! where that payload comes from.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "drone-chef",
    version,
    about = "Upload Chef cookbooks, roles, environments and data bags from a CI workspace"
)]
pub struct Args {
    /// Path to the build payload JSON (defaults to stdin)
    #[arg(long, value_name = "PATH")]
    pub payload: Option<PathBuf>,
}
