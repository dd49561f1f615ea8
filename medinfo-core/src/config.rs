// ============================================================================
// medinfo-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Core Configuration Structures and Constants
//
// This module defines where the mediainfo binary lives and the fixed
// arguments used to talk to it. A Config value is built by the consumer
// (like medinfo-cli) and handed to the executor at construction time, so
// separate callers can point at separate binaries.
//
// KEY COMPONENTS:
// - Config: Location of the mediainfo binary
// - Constants: Default binary name, report arguments, no-input exit code

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::ffi::OsString;
use std::path::{Path, PathBuf};

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Binary name used when no override is configured. Resolved through `PATH`.
pub const DEFAULT_MEDIAINFO_BIN: &str = "mediainfo";

/// Environment variable that overrides the binary location.
pub const MEDIAINFO_BIN_ENV: &str = "MEDINFO_MEDIAINFO_BIN";

/// Asks mediainfo for the XML report instead of its human-readable text.
pub const REPORT_OUTPUT_ARG: &str = "--Output=XML";

/// Asks mediainfo for the full report, which lists every field variant.
pub const FULL_REPORT_ARG: &str = "-f";

/// Exit code mediainfo uses when it is run without an input file.
pub const NO_INPUT_EXIT_CODE: i32 = 255;

// ============================================================================
// CONFIGURATION STRUCTURE
// ============================================================================

/// Configuration for locating the mediainfo binary.
///
/// # Examples
///
/// ```rust
/// use medinfo_core::Config;
///
/// let config = Config::with_binary("/opt/mediainfo/bin/mediainfo");
/// assert!(config.validate().is_ok());
/// assert_eq!(Config::default().mediainfo_bin.to_str(), Some("mediainfo"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path or bare name of the mediainfo executable.
    pub mediainfo_bin: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mediainfo_bin: PathBuf::from(DEFAULT_MEDIAINFO_BIN),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration pointing at a specific binary.
    pub fn with_binary(path: impl Into<PathBuf>) -> Self {
        Self {
            mediainfo_bin: path.into(),
        }
    }

    /// Creates a configuration from the `MEDINFO_MEDIAINFO_BIN` environment
    /// variable, falling back to the default binary name.
    pub fn from_env() -> Self {
        Self::from_override(std::env::var_os(MEDIAINFO_BIN_ENV))
    }

    /// Applies an optional override value. Empty values are ignored.
    pub fn from_override(value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => Self::with_binary(path),
            _ => Self::default(),
        }
    }

    /// Binary name used in logs and error messages.
    pub fn tool_name(&self) -> String {
        self.mediainfo_bin.display().to_string()
    }

    pub fn binary(&self) -> &Path {
        &self.mediainfo_bin
    }

    /// Validates configuration parameters.
    pub fn validate(&self) -> CoreResult<()> {
        if self.mediainfo_bin.as_os_str().is_empty() {
            return Err(CoreError::Config(
                "mediainfo binary path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
