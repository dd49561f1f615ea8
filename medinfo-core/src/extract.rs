// ============================================================================
// medinfo-core/src/extract.rs
// ============================================================================
//
// EXTRACTION: Tool Check, Report Execution and Mapping
//
// This module ties the pieces together. One call to Extractor::extract checks
// that mediainfo is installed, runs one report process, parses its output and
// maps it into a MediaRecord. Every call is independent; the only shared data
// is the read-only executor configuration.
//
// No timeout is applied: a hung mediainfo process blocks the caller.

// ---- Internal crate imports ----
use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::external::{CommandExecutor, MediaInfoExecutor};
use crate::record::MediaRecord;

// ---- Standard library imports ----
use std::path::Path;

/// Extracts [`MediaRecord`]s through a [`MediaInfoExecutor`].
#[derive(Debug, Clone, Default)]
pub struct Extractor<E = CommandExecutor> {
    executor: E,
}

impl Extractor<CommandExecutor> {
    /// Creates an extractor that runs the binary named in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CommandExecutor::new(config.clone()))
    }
}

impl<E: MediaInfoExecutor> Extractor<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn is_available(&self) -> bool {
        self.executor.is_available()
    }

    /// Extracts the metadata record for `path`.
    ///
    /// # Errors
    ///
    /// * [`CoreError::ToolNotInstalled`] if mediainfo cannot be found. No
    ///   report is run in that case.
    /// * [`CoreError::ExecutionFailed`] if the report process fails.
    /// * [`CoreError::MalformedReport`] if its output cannot be parsed.
    pub fn extract(&self, path: impl AsRef<Path>) -> CoreResult<MediaRecord> {
        let path = path.as_ref();

        if !self.executor.is_available() {
            return Err(CoreError::ToolNotInstalled(self.executor.tool_name()));
        }

        let raw = self.executor.run_report(path)?;
        let record = MediaRecord::from_report_bytes(&raw)?;

        log::debug!(
            "Extracted metadata for {} (media: {})",
            path.display(),
            record.is_media()
        );
        Ok(record)
    }
}

/// Checks whether the binary named in `config` is installed.
pub fn is_available(config: &Config) -> bool {
    CommandExecutor::new(config.clone()).is_available()
}

/// Extracts the metadata record for `path` using the binary named in `config`.
///
/// # Examples
///
/// ```rust,no_run
/// use medinfo_core::{Config, extract};
///
/// let record = extract(&Config::from_env(), "movie.mkv").unwrap();
/// if record.is_media() {
///     println!("{}", record.to_json_pretty().unwrap());
/// }
/// ```
pub fn extract(config: &Config, path: impl AsRef<Path>) -> CoreResult<MediaRecord> {
    Extractor::from_config(config).extract(path)
}
