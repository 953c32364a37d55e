//! Folder listing command implementations

use std::io::{self, Write};

use colored::Colorize;
use log::debug;
use uuid::Uuid;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat, PaginationArgs};
use crate::error::Result;
use crate::folders::{FolderService, PageRequest};
use crate::models::{FolderDisplay, PageDisplay};
use crate::output::{Formattable, json};
use crate::source::FolderSource;

/// Run the list command
pub fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let folders = ctx.service.get_all(ctx.org_id)?;

    let display: Vec<FolderDisplay> = folders.into_iter().map(FolderDisplay::from).collect();
    display.print(ctx.format)
}

/// Run the page command
pub fn page(opts: &GlobalOptions, pagination: &PaginationArgs, token: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let request = PageRequest::new(ctx.org_id)
        .page_size(pagination.page_size_or(ctx.default_page_size()))
        .token(token.unwrap_or_default());

    let page = ctx.service.get_page(&request)?;
    PageDisplay::from(page).print(ctx.format)
}

/// Run the iterate command
pub fn iterate(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let page_size = pagination.page_size_or(ctx.default_page_size());

    let stdout = io::stdout();
    write_all_pages(
        &ctx.service,
        ctx.org_id,
        page_size,
        ctx.format,
        &mut stdout.lock(),
    )
}

/// Write every page in order.
///
/// Table and pretty output are written as each page arrives, so pages read
/// before a failure are still shown. JSON is emitted once, as a single
/// document, only when every page succeeds.
fn write_all_pages<S: FolderSource, W: Write>(
    service: &FolderService<S>,
    org_id: Uuid,
    page_size: usize,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let pages = service
        .pages(org_id, page_size)
        .map(|page| page.map(PageDisplay::from));

    if format == OutputFormat::Json {
        let pages = pages.collect::<Result<Vec<_>>>()?;
        writeln!(out, "{}", json::format_json(&pages)?)?;
        return Ok(());
    }

    let mut count = 0;
    let mut total = 0;
    for page in pages {
        let page = page?;
        count += 1;
        total += page.folders.len();

        let header = format!("Page {} ({} folders)", count, page.folders.len());
        writeln!(out, "{}\n{}\n", header.bold(), page.folders.format(format)?)?;
    }

    debug!("Iterated {} pages for org {}", count, org_id);
    writeln!(out, "{} folders in {} pages", total, count)?;
    Ok(())
}
