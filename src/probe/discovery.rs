//! Build-output directory discovery.
//!
//! The S7Tools build drops its output under `<search_root>/{Debug,Release}/net*`
//! (one directory per target framework). When no explicit override is given,
//! the prober inspects whichever candidate was touched most recently.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::config::AppConfig;
use crate::error::ProbeError;

const BUILD_CONFIGURATIONS: [&str; 2] = ["Debug", "Release"];

/// Resolve the S7Tools application directory.
/// An explicit override (CLI, environment, or config file) wins; otherwise
/// the newest matching build-output directory under the search root is used.
pub fn resolve_app_dir(config: &AppConfig) -> Result<PathBuf, ProbeError> {
    if let Some(dir) = &config.build_output {
        tracing::debug!(dir = %dir.display(), "Using explicit build output directory");
        return Ok(dir.clone());
    }
    newest_build_output(&config.search_root)
}

/// Scan `<search_root>/{Debug,Release}` for directories named `net*` and
/// return the most recently modified one.
pub fn newest_build_output(search_root: &Path) -> Result<PathBuf, ProbeError> {
    let mut candidates: Vec<(SystemTime, PathBuf)> = Vec::new();

    for configuration in BUILD_CONFIGURATIONS {
        let dir = search_root.join(configuration);
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue, // missing configuration dir is normal
        };
        for entry in entries.flatten() {
            if !entry.file_name().to_string_lossy().starts_with("net") {
                continue;
            }
            let Ok(metadata) = entry.metadata() else {
                continue;
            };
            if !metadata.is_dir() {
                continue;
            }
            let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            candidates.push((modified, entry.path()));
        }
    }

    tracing::debug!(count = candidates.len(), root = %search_root.display(), "Build output candidates");

    candidates
        .into_iter()
        .max_by_key(|(modified, _)| *modified)
        .map(|(_, path)| path)
        .ok_or_else(|| ProbeError::BuildOutputNotFound {
            searched: search_root.to_path_buf(),
        })
}
