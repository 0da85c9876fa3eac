use std::path::PathBuf;

/// Flywrap error types.
///
/// Discovery never errors (it degrades to the provisioning fallback), so
/// everything here belongs to the final dispatch stage.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Working-directory override could not be applied before launch.
    #[error("chdir error: {path}: {source}")]
    Workdir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resolved flake8 binary does not exist or is not executable.
    #[error("failed to launch {path}: {source}")]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or relaying the child's output stream failed.
    #[error("relay error: {source}")]
    Relay {
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the child process failed.
    #[error("flake8 did not terminate cleanly: {source}")]
    Wait {
        #[source]
        source: std::io::Error,
    },
}

/// Result type using flywrap Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
