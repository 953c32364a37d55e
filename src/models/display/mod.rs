//! Display model implementations for table and JSON output
//!
//! Display models transform folder records into CLI-friendly formats
//! with appropriate column names and serialization.

mod common;
mod folder;

pub use folder::{FolderDisplay, PageDisplay};
