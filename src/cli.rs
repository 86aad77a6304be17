use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "s7doctor", version, about = "Diagnostic harness for S7Tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe the socat profile store, seeding a default profile if missing
    Profiles {
        /// S7Tools build output directory (skips discovery)
        #[arg(short, long)]
        build_output: Option<PathBuf>,

        /// Directory scanned for build outputs when no override is given
        #[arg(long)]
        search_root: Option<PathBuf>,

        /// Report a missing profiles file without creating one
        #[arg(long)]
        no_seed: bool,
    },
    /// Run the stty blocklist smoke-test, or check a single command
    Stty {
        /// A command string to check instead of the fixture suite
        command: Option<String>,
    },
}
