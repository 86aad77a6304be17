pub mod discovery;
pub mod profiles;

use std::fmt;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::error::ProbeError;
use profiles::{Profile, PROFILES_SUBDIR};

/// What the probe found (or did) once the store location was known.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// The store existed and parsed; carries its contents.
    Summarized(Vec<Profile>),
    /// The store was missing and a default profile was written.
    Seeded(Box<Profile>),
    /// The store was missing and seeding was disabled.
    SeedSkipped,
    /// Discovery, I/O, or parsing failed. Reported, never propagated.
    Failed(ProbeError),
}

/// Paths the probe examined, for the diagnostic transcript.
#[derive(Debug)]
pub struct ProbePaths {
    pub profiles_dir: PathBuf,
    pub profiles_file: PathBuf,
    pub dir_exists: bool,
    pub file_exists: bool,
}

/// Full result of one probe run. Rendered to stdout by the CLI.
#[derive(Debug)]
pub struct ProbeReport {
    /// None when discovery itself failed.
    pub paths: Option<ProbePaths>,
    pub outcome: ProbeOutcome,
}

/// Run the profile-store probe: resolve the application directory, inspect
/// the store, and seed it when missing (unless disabled). Every failure mode
/// lands in the report rather than an Err — the probe is diagnostic.
pub fn run(config: &AppConfig) -> ProbeReport {
    let app_dir = match discovery::resolve_app_dir(config) {
        Ok(dir) => dir,
        Err(e) => {
            return ProbeReport {
                paths: None,
                outcome: ProbeOutcome::Failed(e),
            };
        }
    };

    let profiles_dir = app_dir.join(PROFILES_SUBDIR);
    let profiles_file = profiles::profiles_file_path(&app_dir);
    let paths = ProbePaths {
        dir_exists: profiles_dir.is_dir(),
        file_exists: profiles_file.is_file(),
        profiles_dir,
        profiles_file: profiles_file.clone(),
    };

    let outcome = if paths.file_exists {
        match profiles::load_profiles(&profiles_file) {
            Ok(list) => ProbeOutcome::Summarized(list),
            Err(e) => ProbeOutcome::Failed(e),
        }
    } else if config.seed_missing {
        match profiles::seed_default(&profiles_file) {
            Ok(profile) => ProbeOutcome::Seeded(Box::new(profile)),
            Err(e) => ProbeOutcome::Failed(e),
        }
    } else {
        ProbeOutcome::SeedSkipped
    };

    ProbeReport {
        paths: Some(paths),
        outcome,
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(paths) = &self.paths {
            writeln!(f, "Looking for socat profiles in: {}", paths.profiles_dir.display())?;
            writeln!(f, "Profiles file should be at: {}", paths.profiles_file.display())?;
            writeln!(f, "Directory exists: {}", paths.dir_exists)?;
            writeln!(f, "Profiles file exists: {}", paths.file_exists)?;
        }
        match &self.outcome {
            ProbeOutcome::Summarized(list) => {
                writeln!(f, "Profiles file contains {} profile(s)", list.len())?;
                for profile in list {
                    writeln!(f, "  - {} (ID: {})", profile.name, profile.id)?;
                }
                Ok(())
            }
            ProbeOutcome::Seeded(profile) => writeln!(
                f,
                "No profiles.json found; created one with the default profile (ID: {})",
                profile.id
            ),
            ProbeOutcome::SeedSkipped => {
                writeln!(f, "No profiles.json file found (seeding skipped)")
            }
            ProbeOutcome::Failed(e) => writeln!(f, "Probe failed: {e}"),
        }
    }
}
