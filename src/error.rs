use std::path::PathBuf;

/// Errors that abort a cleaning run.
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("'{}' is not a valid directory", path.display())]
    InvalidRoot { path: PathBuf },

    #[error("carriage return (\\r) detected in file: {} (line {line})", path.display())]
    InvalidLineEnding { path: PathBuf, line: usize },

    #[error("invalid UTF-8 content in file: {}", path.display())]
    InvalidEncoding { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to write report: {0}")]
    Report(#[source] std::io::Error),
}
