// medinfo-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand, ValueEnum};
use medinfo_core::{Config, MediaRecord};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "medinfo: Normalized media metadata via mediainfo",
    long_about = "Runs mediainfo against a media file and prints its general, video, audio \
                  and menu properties as a fixed JSON record."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the mediainfo binary if it is not in the system PATH
    /// [default: $MEDINFO_MEDIAINFO_BIN, then mediainfo]
    #[arg(long = "mediainfo-bin", global = true, value_name = "PATH")]
    pub mediainfo_bin: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the core configuration. The flag wins over the environment.
    pub fn core_config(&self) -> Config {
        match &self.mediainfo_bin {
            Some(path) => Config::with_binary(path),
            None => Config::from_env(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prints the metadata record of a file as JSON
    Info(InfoArgs),
    /// Checks whether the mediainfo binary is installed
    Check,
    /// Reports whether a file has both audio and video durations
    IsMedia(FileArgs),
}

#[derive(Parser, Debug)]
pub struct FileArgs {
    /// Media file to inspect
    #[arg(required = true, value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Media file to inspect
    #[arg(required = true, value_name = "FILE")]
    pub file: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print only one section of the record
    #[arg(long, value_enum, value_name = "SECTION")]
    pub section: Option<SectionArg>,
}

/// Record section selectable with `--section`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionArg {
    General,
    Video,
    Audio,
    Menu,
}

impl SectionArg {
    /// Returns the selected section as a JSON value, `null` when absent.
    pub fn select(self, record: &MediaRecord) -> serde_json::Result<serde_json::Value> {
        match self {
            SectionArg::General => serde_json::to_value(&record.general),
            SectionArg::Video => serde_json::to_value(&record.video),
            SectionArg::Audio => serde_json::to_value(&record.audio),
            SectionArg::Menu => serde_json::to_value(&record.menu),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_flag_sets_binary() {
        let cli = Cli::try_parse_from(["medinfo", "--mediainfo-bin", "/opt/mi", "check"]).unwrap();
        assert_eq!(cli.core_config().binary(), Path::new("/opt/mi"));
    }

    #[test]
    fn test_flag_accepted_after_subcommand() {
        let cli =
            Cli::try_parse_from(["medinfo", "is-media", "clip.mkv", "--mediainfo-bin", "/opt/mi"])
                .unwrap();
        assert_eq!(cli.mediainfo_bin.as_deref(), Some(Path::new("/opt/mi")));
        assert!(matches!(cli.command, Commands::IsMedia(_)));
    }
}
