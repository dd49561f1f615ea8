use crate::cli::InfoArgs;
use crate::error::{CliResult, ExitOutcome};
use medinfo_core::{Config, Extractor};

/// Executes the `info` command: extracts the record and prints it as JSON.
pub fn run_info(config: &Config, args: &InfoArgs) -> CliResult<ExitOutcome> {
    config.validate()?;
    let record = Extractor::from_config(config).extract(&args.file)?;

    let json = match args.section {
        Some(section) => {
            let value = section.select(&record)?;
            if args.pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            }
        }
        None if args.pretty => record.to_json_pretty()?,
        None => record.to_json()?,
    };

    println!("{}", json);
    Ok(ExitOutcome::Success)
}
