//! CLI argument definitions.
use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Configure AWS CLI profiles and Claude settings for Claude Code with Bedrock",
    long_about = None,
    after_help = "Run without arguments after installation. Re-run at any time to reconfigure."
)]
pub struct SetupArgs {
    /// Install prefix containing bin/ and libexec/ (overrides CCWB_PREFIX).
    #[arg(long = "prefix")]
    pub prefix_override: Option<PathBuf>,
}
