// ============================================================================
// medinfo-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the mediainfo CLI
//
// This module encapsulates every interaction with the mediainfo binary. The
// extractor only talks to the MediaInfoExecutor trait, so tests and embedders
// can supply their own implementation instead of spawning a process.
//
// KEY COMPONENTS:
// - MediaInfoExecutor: Trait for probing the tool and fetching a report
// - CommandExecutor: Implementation backed by std::process::Command

// ---- Internal crate imports ----
use crate::error::CoreResult;

// ---- Standard library imports ----
use std::path::Path;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Process-backed executor for the mediainfo binary
pub mod mediainfo_executor;

pub use mediainfo_executor::CommandExecutor;

// ============================================================================
// EXECUTOR TRAIT
// ============================================================================

/// Abstraction over running mediainfo.
///
/// # Examples
///
/// ```rust
/// use medinfo_core::external::MediaInfoExecutor;
/// use medinfo_core::CoreResult;
/// use std::path::Path;
///
/// struct CannedReport;
///
/// impl MediaInfoExecutor for CannedReport {
///     fn tool_name(&self) -> String {
///         "mediainfo".to_string()
///     }
///
///     fn is_available(&self) -> bool {
///         true
///     }
///
///     fn run_report(&self, _path: &Path) -> CoreResult<Vec<u8>> {
///         Ok(b"<MediaInfo><media/></MediaInfo>".to_vec())
///     }
/// }
///
/// let report = CannedReport.run_report(Path::new("clip.mkv")).unwrap();
/// assert!(!report.is_empty());
/// ```
pub trait MediaInfoExecutor {
    /// Name used in error messages.
    fn tool_name(&self) -> String;

    /// Returns false only when the binary cannot be found.
    fn is_available(&self) -> bool;

    /// Runs the full structured report for `path` and returns its stdout.
    fn run_report(&self, path: &Path) -> CoreResult<Vec<u8>>;
}

impl<E: MediaInfoExecutor + ?Sized> MediaInfoExecutor for &E {
    fn tool_name(&self) -> String {
        (**self).tool_name()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn run_report(&self, path: &Path) -> CoreResult<Vec<u8>> {
        (**self).run_report(path)
    }
}
