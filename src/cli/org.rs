//! Organization command implementations

use colored::Colorize;
use serde::Serialize;
use uuid::Uuid;

use crate::cli::context::OrgOrigin;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::output::json;

/// Run the org set command
pub fn set(opts: &GlobalOptions, org_id: Uuid) -> Result<()> {
    let mut config = Config::load_or_default(opts.config_ref())?;
    config.org_id = Some(org_id);
    config.save_at(opts.config_ref())?;

    log::debug!("Saved default org {}", org_id);
    println!("{} Default organization set to {}", "✓".green(), org_id);
    Ok(())
}

#[derive(Debug, Serialize)]
struct OrgInfo {
    org_id: Uuid,
    source: String,
    folders: usize,
}

/// Run the org get command
pub fn get(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let folders = ctx.service.get_all(ctx.org_id)?.len();

    let info = OrgInfo {
        org_id: ctx.org_id,
        source: ctx.org_origin.to_string(),
        folders,
    };

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&info)?),
        _ => {
            println!("Organization: {}", info.org_id.to_string().bold());
            println!("Source: {}", info.source.dimmed());
            println!("Folders: {}", info.folders);
            if ctx.org_origin == OrgOrigin::Default {
                println!("  → Run 'orgfolders org set <ID>' to choose another");
            }
        }
    }

    Ok(())
}
