//! Pagination argument types for CLI commands

use clap::Args;

/// Shared pagination arguments for paged commands.
///
/// Flatten this into any command that pages:
/// ```ignore
/// Page {
///     #[command(flatten)]
///     pagination: PaginationArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Folders per page (defaults to the configured page size)
    #[arg(long, short = 's', value_parser = parse_page_size)]
    pub page_size: Option<usize>,
}

impl PaginationArgs {
    /// Requested page size, or `fallback` when none was given.
    pub fn page_size_or(&self, fallback: usize) -> usize {
        self.page_size.unwrap_or(fallback)
    }
}

fn parse_page_size(value: &str) -> Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("`{}` is not a positive integer", value))?;
    if size == 0 {
        return Err("page size must be at least 1".to_string());
    }
    Ok(size)
}
