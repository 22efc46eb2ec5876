//! Error types for the triage pipeline.
//!
//! Every stage reports failure as a [`TriageError`]; its `Display` text is the message shown
//! to the investigator. Only the binary turns it into console output and an exit code.

use thiserror;

use crate::tools::ToolError;

/// Result of a pipeline stage.
pub type Outcome<T> = Result<T, TriageError>;

/// Broad failure categories, used to tell a missing partition apart from a tool failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed invocation, detected before any tool runs.
    UsageError,
    /// An external tool could not be started or exited non-zero.
    ToolInvocationError,
    /// The partition table was read but holds no row with the target label.
    ResolutionMiss,
}

/// Represents errors that can occur while triaging an image.
#[derive(thiserror::Error, Debug)]
pub enum TriageError {
    /// Malformed command line.
    #[error("{0}")]
    Usage(String),
    /// The partition-table reader rejected the image.
    /// Contains the tool's own diagnostics verbatim.
    #[error("Error validating image: {0}")]
    InvalidImage(String),
    /// The partition table could not be captured after a successful validation.
    #[error("Failed to list partitions: {0}")]
    PartitionListing(#[source] ToolError),
    /// No row of the partition table carries the target label.
    #[error("Failed to find '{0}'.")]
    PartitionNotFound(String),
    /// The file-listing tool failed.
    #[error("Failed to list files: {0}")]
    FileListing(#[source] ToolError),
}

impl TriageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriageError::Usage(_) => ErrorKind::UsageError,
            TriageError::InvalidImage(_)
            | TriageError::PartitionListing(_)
            | TriageError::FileListing(_) => ErrorKind::ToolInvocationError,
            TriageError::PartitionNotFound(_) => ErrorKind::ResolutionMiss,
        }
    }
}
