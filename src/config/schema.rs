use serde::Deserialize;
use std::path::PathBuf;

/// The TOML file structure for s7doctor.toml.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub general: Option<GeneralConfig>,
    pub safety: Option<SafetyConfig>,
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    /// Fixed S7Tools application directory; skips build-output discovery.
    pub build_output: Option<String>,
    /// Root of the build tree scanned for `Debug/net*` and `Release/net*`.
    pub search_root: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SafetyConfig {
    /// If specified, fully replaces the default stty blocklist.
    pub blocked_patterns: Option<Vec<BlocklistEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlocklistEntry {
    pub pattern: String,
    pub reason: String,
}

impl ConfigFile {
    /// Flatten the sectioned file into a PartialConfig for merging.
    pub fn to_partial(&self) -> PartialConfig {
        PartialConfig {
            build_output: self
                .general
                .as_ref()
                .and_then(|g| g.build_output.as_ref())
                .map(PathBuf::from),
            search_root: self
                .general
                .as_ref()
                .and_then(|g| g.search_root.as_ref())
                .map(PathBuf::from),
            blocked_patterns: self
                .safety
                .as_ref()
                .and_then(|s| s.blocked_patterns.as_ref())
                .map(|entries| {
                    entries
                        .iter()
                        .map(|e| (e.pattern.clone(), e.reason.clone()))
                        .collect()
                }),
            seed_missing: None,
        }
    }
}

/// Fully-resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Explicit application directory, if any layer supplied one.
    pub build_output: Option<PathBuf>,
    pub search_root: PathBuf,
    pub blocked_patterns: Vec<(String, String)>,
    /// Whether the prober writes a default profile when the file is missing.
    pub seed_missing: bool,
}

/// Partial config used during merge. All fields are Option so that
/// missing fields don't override lower-priority values.
#[derive(Debug, Clone, Default)]
pub struct PartialConfig {
    pub build_output: Option<PathBuf>,
    pub search_root: Option<PathBuf>,
    pub blocked_patterns: Option<Vec<(String, String)>>,
    pub seed_missing: Option<bool>,
}
