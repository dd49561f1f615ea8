use crate::error::{CliResult, ExitOutcome};
use crate::output::{print_failure, print_info, print_success};
use medinfo_core::Config;

/// Executes the `check` command.
pub fn run_check(config: &Config) -> CliResult<ExitOutcome> {
    config.validate()?;
    print_info("mediainfo binary", config.tool_name());

    let available = medinfo_core::is_available(config);
    if available {
        print_success("mediainfo is installed");
    } else {
        print_failure("mediainfo was not found; install it or pass --mediainfo-bin");
    }
    Ok(available.into())
}
