//! Output formatting for CLI results

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::{FolderDisplay, PageDisplay};

pub mod json;
pub mod pretty;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl Formattable for Vec<FolderDisplay> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(pretty::format_folders(self)),
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

impl Formattable for PageDisplay {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(format!(
                "{}\n\n{}",
                pretty::format_folders(&self.folders),
                pretty::format_next_token(&self.next_token)
            )),
            OutputFormat::Table => Ok(format!(
                "{}\n{}",
                table::format_table(&self.folders),
                table::format_next_token(&self.next_token)
            )),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}
