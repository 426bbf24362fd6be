use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all ivyscan operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ScanError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No resolve report was available to post-process.
    #[error("No resolution report was available at {}", path.display())]
    #[diagnostic(help("Make sure dependency resolution ran before this step"))]
    MissingReport { path: PathBuf },

    /// The resolve report exists but could not be understood.
    #[error("Invalid resolve report: {message}")]
    Report { message: String },

    /// Invalid or malformed `ivyscan.toml`.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check your ivyscan.toml for syntax errors"))]
    Config { message: String },

    /// The manifest destination could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `RegisterUsage` document could not be read back.
    #[error("Invalid usage manifest: {message}")]
    Usage { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ScanResult<T> = miette::Result<T>;
