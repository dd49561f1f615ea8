// ============================================================================
// medinfo-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for medinfo-core
//
// This module defines the error type returned by every fallible operation in
// the library. Each extraction either yields a record or exactly one of
// these errors; there is no partial success.
//
// KEY COMPONENTS:
// - CoreError: The main error enum
// - ExecutionError: Why the mediainfo process did not produce a report
// - ReportError: Why a report could not be read
// - CoreResult: Type alias for Result<T, CoreError>
// - Helper functions for building command errors

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::io;
use std::process::ExitStatus;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Reason the mediainfo process failed to deliver a report.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The process could not be spawned or its output could not be read.
    #[error(transparent)]
    Spawn(#[from] io::Error),

    /// The process ran but exited unsuccessfully.
    #[error("exited with {status}: {stderr}")]
    Exit { status: ExitStatus, stderr: String },
}

/// Reason a report could not be turned into tracks.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("report is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error(transparent)]
    Xml(#[from] quick_xml::DeError),
}

/// Errors returned by medinfo-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The configured mediainfo binary could not be found. Nothing was run.
    #[error("{0} is not installed or not on PATH")]
    ToolNotInstalled(String),

    /// The inspection process could not run or exited abnormally.
    #[error("Failed to execute {tool}: {source}")]
    ExecutionFailed {
        tool: String,
        #[source]
        source: ExecutionError,
    },

    /// The report could not be deserialized.
    #[error("Malformed mediainfo report: {0}")]
    MalformedReport(#[from] ReportError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type used throughout medinfo-core.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Builds the error for a command that could not be started.
pub fn command_start_error(tool: impl Into<String>, error: io::Error) -> CoreError {
    CoreError::ExecutionFailed {
        tool: tool.into(),
        source: ExecutionError::Spawn(error),
    }
}

/// Builds the error for a command that exited with a failure status.
pub fn command_failed_error(
    tool: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::ExecutionFailed {
        tool: tool.into(),
        source: ExecutionError::Exit {
            status,
            stderr: stderr.into(),
        },
    }
}
