pub mod merge;
pub mod schema;

pub use schema::*;

use crate::cli::{Cli, Commands};
use anyhow::Context;
use std::path::Path;

/// Environment variable that pins the S7Tools application directory.
pub const BUILD_OUTPUT_ENV: &str = "S7TOOLS_BUILD_OUTPUT";

/// Load configuration by merging global, environment, and CLI sources.
/// Precedence: CLI > environment > global config > defaults.
///
/// A missing config file is handled gracefully (defaults apply).
pub fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    // Layer 1: Global config (~/.config/s7doctor/s7doctor.toml or platform equivalent)
    let global = load_global_config();

    // Layer 2: Environment (S7TOOLS_BUILD_OUTPUT)
    let env = env_partial();

    // Layer 3: CLI args (converted to PartialConfig)
    let cli_partial = cli_to_partial(cli);

    // Merge: CLI > env > global > defaults
    let config = cli_partial.with_fallback(env).with_fallback(global).finalize();

    Ok(config)
}

/// Load global config from the platform-specific config directory.
/// Returns empty PartialConfig if file not found.
fn load_global_config() -> PartialConfig {
    let path = global_config_path();
    match path {
        Some(p) => load_toml_file(&p).unwrap_or_default(),
        None => {
            tracing::debug!("Could not determine global config directory");
            PartialConfig::default()
        }
    }
}

/// Load and parse a TOML config file into a PartialConfig.
/// Returns None on file-not-found; parse errors are logged, not propagated.
fn load_toml_file(path: &Path) -> Option<PartialConfig> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            match toml::from_str::<ConfigFile>(&contents)
                .context(format!("Failed to parse {}", path.display()))
            {
                Ok(config_file) => {
                    tracing::info!("Loaded config from {}", path.display());
                    Some(config_file.to_partial())
                }
                Err(e) => {
                    tracing::warn!("Config parse error: {:#}", e);
                    None
                }
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            None
        }
        Err(e) => {
            tracing::warn!("Failed to read config at {}: {}", path.display(), e);
            None
        }
    }
}

/// Resolve the platform-specific global config path.
/// Linux: ~/.config/s7doctor/s7doctor.toml
/// macOS: ~/Library/Application Support/s7doctor/s7doctor.toml
fn global_config_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("", "", "s7doctor")
        .map(|dirs| dirs.config_dir().join("s7doctor.toml"))
}

/// Read the build-output override from the environment.
fn env_partial() -> PartialConfig {
    PartialConfig {
        build_output: std::env::var_os(BUILD_OUTPUT_ENV).map(std::path::PathBuf::from),
        ..Default::default()
    }
}

/// Convert CLI arguments to a PartialConfig for merging.
fn cli_to_partial(cli: &Cli) -> PartialConfig {
    match &cli.command {
        Commands::Profiles {
            build_output,
            search_root,
            no_seed,
        } => PartialConfig {
            build_output: build_output.clone(),
            search_root: search_root.clone(),
            // Only the explicit flag overrides lower layers.
            seed_missing: no_seed.then_some(false),
            ..Default::default()
        },
        Commands::Stty { .. } => PartialConfig::default(),
    }
}
