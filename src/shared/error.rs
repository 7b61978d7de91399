use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a failed audit from
/// a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no license conflicts, or conflicts are not configured to fail the run
    Success = 0,
    /// At least one dependency only carries licenses conflicting with the project license
    LicenseConflictsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration, archive I/O, output write, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::LicenseConflictsDetected => write!(f, "License Conflicts Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for license auditing.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing hints next to each variant.
#[derive(Debug, Error)]
pub enum HonkerError {
    #[error("Dependency description not found: {path}\n\n💡 Hint: {suggestion}")]
    DependencyFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse dependency description: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file follows the honker-deps.toml format")]
    DependencyFileParseError { path: PathBuf, details: String },

    #[error("Failed to load metadata of artifact {coordinates} from {path}\nDetails: {details}")]
    ArtifactLoadError {
        coordinates: String,
        path: PathBuf,
        details: String,
    },

    #[error("Unknown license: \"{license}\"\n\n💡 Hint: Use one of the known license names or URLs, e.g. \"Apache License 2.0\" or \"MIT License\"")]
    UnknownLicense { license: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for configuration and builder inputs
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },
}
