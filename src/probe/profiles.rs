//! The socat profile store: serde types matching S7Tools' profiles.json
//! (camelCase keys, RFC 3339 timestamps) plus load and seed operations.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProbeError;

/// Directory under the application root holding the profile store.
pub const PROFILES_SUBDIR: &str = "resources/SocatProfiles";
/// File name of the store itself.
pub const PROFILES_FILE: &str = "profiles.json";

/// A named saved configuration for the serial-to-TCP proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub is_default: bool,
    pub is_read_only: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub configuration: SocatConfiguration,
}

/// The socat invocation parameters stored inside a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocatConfiguration {
    pub tcp_port: u16,
    pub tcp_host: String,
    pub verbose: bool,
    pub hex_dump: bool,
    pub block_size: u32,
    pub allow_fork: bool,
    pub reuse_address: bool,
    pub raw_mode: bool,
    pub no_echo: bool,
}

/// Path of the profile store for a given application directory.
pub fn profiles_file_path(app_dir: &Path) -> PathBuf {
    app_dir.join(PROFILES_SUBDIR).join(PROFILES_FILE)
}

/// The read-only default profile S7Tools ships with.
pub fn default_profile() -> Profile {
    let now = Utc::now();
    Profile {
        id: 1,
        name: "Default".to_string(),
        description: "Default socat configuration for S7Tools".to_string(),
        is_default: true,
        is_read_only: true,
        created_at: now,
        modified_at: now,
        configuration: SocatConfiguration {
            tcp_port: 1238,
            tcp_host: "localhost".to_string(),
            verbose: true,
            hex_dump: true,
            block_size: 4,
            allow_fork: true,
            reuse_address: true,
            raw_mode: true,
            no_echo: true,
        },
    }
}

/// Load and parse the profile store.
pub fn load_profiles(path: &Path) -> Result<Vec<Profile>, ProbeError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ProbeError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| ProbeError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Create the store with a single default profile. Creates the directory
/// chain as needed; the file is written pretty-printed so the application's
/// own serializer can still read it.
pub fn seed_default(path: &Path) -> Result<Profile, ProbeError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ProbeError::io(parent, e))?;
    }

    let profile = default_profile();
    let json = serde_json::to_string_pretty(&[profile.clone()]).map_err(|e| ProbeError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    std::fs::write(path, json).map_err(|e| ProbeError::io(path, e))?;

    tracing::info!(path = %path.display(), "Seeded default profile store");
    Ok(profile)
}
