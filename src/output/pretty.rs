//! Human-oriented folder listing

use colored::Colorize;

use crate::models::FolderDisplay;

/// One line per folder: name, ID, and a marker for deleted folders.
pub fn format_folders(folders: &[FolderDisplay]) -> String {
    if folders.is_empty() {
        return "No folders found.".dimmed().to_string();
    }

    folders
        .iter()
        .map(|f| {
            let marker = if f.deleted {
                format!(" {}", "(deleted)".red())
            } else {
                String::new()
            };
            format!("  {} {}{}", f.name.bold(), f.id.dimmed(), marker)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_next_token(next_token: &str) -> String {
    if next_token.is_empty() {
        "No more pages.".dimmed().to_string()
    } else {
        format!("Next token: {}", next_token.cyan())
    }
}
