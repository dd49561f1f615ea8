// ============================================================================
// medinfo-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the CLI
//
// The core library only emits through the `log` facade. The CLI installs
// env_logger as the backend, writing to stderr so stdout stays clean JSON.
//
// USAGE:
// - RUST_LOG=warn (default): Only problems
// - RUST_LOG=debug or --verbose: Commands run and mapping decisions
// - RUST_LOG=trace: Availability check details and report sizes

use log::LevelFilter;

/// Picks the default level from the `--verbose` flag.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initializes env_logger. `RUST_LOG` takes precedence over `--verbose`.
pub fn init(verbose: bool) {
    let default_filter = default_level(verbose).to_string().to_lowercase();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();

    log::debug!("Logger initialized (verbose: {})", verbose);
}
