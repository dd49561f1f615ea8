//! MediaInfo process execution
//!
//! This module runs the configured mediainfo binary, both to check that it is
//! installed and to produce the XML report for a file.

use super::MediaInfoExecutor;
use crate::config::{Config, FULL_REPORT_ARG, NO_INPUT_EXIT_CODE, REPORT_OUTPUT_ARG};
use crate::error::{CoreResult, command_failed_error, command_start_error};
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Executor that spawns the mediainfo binary named in a [`Config`].
#[derive(Debug, Clone, Default)]
pub struct CommandExecutor {
    config: Config,
}

impl CommandExecutor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Builds `<tool> --Output=XML -f <path>`.
    pub fn report_command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(self.config.binary());
        cmd.arg(REPORT_OUTPUT_ARG).arg(FULL_REPORT_ARG).arg(path);
        cmd
    }
}

impl MediaInfoExecutor for CommandExecutor {
    fn tool_name(&self) -> String {
        self.config.tool_name()
    }

    fn is_available(&self) -> bool {
        let result = Command::new(self.config.binary())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        // Exit 255 (no input given) is the usual answer, but any exit status
        // shows the binary is there.
        match result {
            Ok(status) if status.code() == Some(NO_INPUT_EXIT_CODE) => {
                log::debug!("Found mediainfo binary: {}", self.tool_name());
                true
            }
            Ok(status) => {
                log::debug!(
                    "Found mediainfo binary: {} (exited with {})",
                    self.tool_name(),
                    status
                );
                true
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("mediainfo binary '{}' not found", self.tool_name());
                false
            }
            Err(e) => {
                // Anything other than "not found" counts as installed.
                log::debug!(
                    "mediainfo availability check for '{}' failed to start: {}",
                    self.tool_name(),
                    e
                );
                true
            }
        }
    }

    fn run_report(&self, path: &Path) -> CoreResult<Vec<u8>> {
        log::debug!("Running mediainfo report on: {}", path.display());

        let output = self
            .report_command(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| command_start_error(self.tool_name(), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(command_failed_error(
                self.tool_name(),
                output.status,
                stderr.trim_end(),
            ));
        }

        log::trace!("mediainfo produced {} bytes of report", output.stdout.len());
        Ok(output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_command_arguments() {
        let executor = CommandExecutor::new(Config::with_binary("/opt/mi/mediainfo"));
        let cmd = executor.report_command(Path::new("/media/clip.mkv"));

        assert_eq!(cmd.get_program(), "/opt/mi/mediainfo");
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, ["--Output=XML", "-f", "/media/clip.mkv"]);
    }

    #[test]
    fn test_missing_binary_is_unavailable() {
        let executor = CommandExecutor::new(Config::with_binary(
            "medinfo-test-binary-that-does-not-exist",
        ));
        assert!(!executor.is_available());
    }
}
