//! Error types for column cutting.

use std::path::PathBuf;
use thiserror::Error;

/// Exit status for failures caused by the command line or the specification string.
pub const EXIT_USAGE: i32 = 2;

/// Exit status for failures caused by file contents or the file system.
pub const EXIT_FAILURE: i32 = 1;

/// Errors that can occur while resolving a specification or cutting a source.
#[derive(Debug, Error)]
pub enum CutError {
    // === Specification Errors ===
    /// No specification was given, or it has no tokens.
    #[error("no column specification provided")]
    MissingSpecification,

    /// A numeric column is below the mode's minimum or past the last field.
    ///
    /// `position` is the number as written by the user.
    #[error("invalid column specification {position}")]
    InvalidColumn { position: String },

    /// A named column does not appear in the first line.
    #[error("cannot find '{name}' in header")]
    ColumnNotFound { name: String },

    // === I/O Errors ===
    /// Input file could not be opened.
    #[error("cannot open '{}' for reading", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from a source failed midway.
    #[error("failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing projected output failed.
    #[error("failed to write output: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },
}

impl CutError {
    /// Process exit status for this error.
    ///
    /// Specification format problems exit with 2; problems that depend on
    /// input content or the file system exit with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingSpecification | Self::InvalidColumn { .. } => EXIT_USAGE,
            Self::ColumnNotFound { .. }
            | Self::Open { .. }
            | Self::Read { .. }
            | Self::Write { .. } => EXIT_FAILURE,
        }
    }

    /// Returns true when usage text should follow the diagnostic.
    pub fn wants_usage(&self) -> bool {
        matches!(self, Self::MissingSpecification)
    }

    /// Returns true when output was cut short because the reader went away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            Self::Write { source } if source.kind() == std::io::ErrorKind::BrokenPipe
        )
    }
}

/// Result type for column cutting operations.
pub type Result<T> = std::result::Result<T, CutError>;
