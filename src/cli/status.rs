//! Status command implementation

use colored::Colorize;

use crate::cli::context::{DataOrigin, OrgOrigin};
use crate::cli::{CommandContext, GlobalOptions};
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration and data source status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "orgfolders Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created, using defaults)".dimmed()
        );
    }
    println!();

    let ctx = CommandContext::new(opts)?;

    match ctx.org_origin {
        OrgOrigin::Default => {
            println!("{} Using built-in organization {}", "○".dimmed(), ctx.org_id);
            println!("  → Run 'orgfolders org set <ID>' to set one");
        }
        origin => println!("{} Organization: {} ({})", "✓".green(), ctx.org_id, origin),
    }

    match ctx.service.get_all(ctx.org_id) {
        Ok(folders) => println!(
            "{} Data source: {} ({} folders in org)",
            "✓".green(),
            ctx.data_origin,
            folders.len()
        ),
        Err(err) => {
            println!("{} Data source: {}", "✗".red(), ctx.data_origin);
            println!("  → {}", err);
            if let DataOrigin::File(_) = ctx.data_origin {
                println!("  → Run 'orgfolders sample --output <PATH>' to create one");
            }
        }
    }

    println!(
        "{} Page size: {}",
        "○".dimmed(),
        ctx.default_page_size()
    );
    println!();

    Ok(())
}
