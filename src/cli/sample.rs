//! Sample dataset command implementation

use std::path::Path;

use colored::Colorize;

use super::context::resolve_org;
use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::source::{JsonFileSource, SampleSource};

/// Run the sample command.
///
/// Prints a bare JSON array of folders (no metadata envelope), so the output
/// can be fed back in with `--data`.
pub fn run(opts: &GlobalOptions, size: Option<usize>, output: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default(opts.config_ref())?;

    let (org_id, _) = resolve_org(opts.org, config.org_id);
    let size = size.unwrap_or(config.sample.size);
    let seed = opts.seed.unwrap_or(config.sample.seed);

    let sample = SampleSource::seeded(size, org_id, seed);

    match output {
        Some(path) => {
            let file = JsonFileSource::new(path);
            file.save(sample.folders())?;
            println!(
                "{} Wrote {} folders to {}",
                "✓".green(),
                sample.folders().len(),
                file.path().display().to_string().cyan()
            );
        }
        None => println!("{}", serde_json::to_string_pretty(sample.folders())?),
    }

    Ok(())
}
