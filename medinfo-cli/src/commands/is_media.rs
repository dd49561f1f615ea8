use crate::cli::FileArgs;
use crate::error::{CliResult, ExitOutcome};
use medinfo_core::{Config, Extractor};

/// Executes the `is-media` command. Prints `true` or `false` and exits
/// non-zero for files that are not audio+video media.
pub fn run_is_media(config: &Config, args: &FileArgs) -> CliResult<ExitOutcome> {
    config.validate()?;
    let is_media = Extractor::from_config(config).extract(&args.file)?.is_media();

    log::debug!("{} is media: {}", args.file.display(), is_media);
    println!("{}", is_media);
    Ok(is_media.into())
}
