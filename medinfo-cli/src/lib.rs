// medinfo-cli/src/lib.rs
//
// Library portion of the medinfo CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, FileArgs, InfoArgs, SectionArg};
pub use commands::{check::run_check, info::run_info, is_media::run_is_media};
pub use error::{CliResult, ExitOutcome};
