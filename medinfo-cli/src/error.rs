// ============================================================================
// medinfo-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result types and exit status for the CLI
//
// Commands return CliResult so core errors pass through unchanged; main.rs is
// the only place that turns them into text on stderr and an exit code.

// ---- Internal crate imports ----
use medinfo_core::CoreResult;

// ---- Standard library imports ----
use std::process::ExitCode;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Outcome of a command that ran without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// The command succeeded (tool found, file is media, record printed).
    Success,
    /// The command ran but the answer was negative.
    Negative,
}

impl From<ExitOutcome> for ExitCode {
    fn from(outcome: ExitOutcome) -> Self {
        match outcome {
            ExitOutcome::Success => ExitCode::SUCCESS,
            ExitOutcome::Negative => ExitCode::from(1),
        }
    }
}

impl From<bool> for ExitOutcome {
    fn from(positive: bool) -> Self {
        if positive {
            ExitOutcome::Success
        } else {
            ExitOutcome::Negative
        }
    }
}
