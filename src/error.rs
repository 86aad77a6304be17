use std::path::PathBuf;

/// Errors raised while probing the profile store. All of these are reported
/// as diagnostic text by the CLI, never as process failure.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error(
        "Could not find an S7Tools build output directory under {searched:?}. \
         Set the S7TOOLS_BUILD_OUTPUT environment variable or pass --build-output."
    )]
    BuildOutputNotFound { searched: PathBuf },

    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl ProbeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProbeError::Io {
            path: path.into(),
            source,
        }
    }
}
