// medinfo-cli/src/main.rs
//
// Entry point for the medinfo command-line tool.
//
// Responsibilities include:
// - Parsing user-provided arguments.
// - Setting up logging.
// - Building the core configuration from flags and environment.
// - Dispatching to the selected command.
// - Printing errors and mapping results to process exit codes.

use clap::Parser;
use medinfo_cli::output::print_error;
use medinfo_cli::{Cli, Commands, run_check, run_info, run_is_media};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    medinfo_cli::logging::init(cli.verbose);

    let config = cli.core_config();
    let result = match &cli.command {
        Commands::Info(args) => run_info(&config, args),
        Commands::Check => run_check(&config),
        Commands::IsMedia(args) => run_is_media(&config, args),
    };

    match result {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
