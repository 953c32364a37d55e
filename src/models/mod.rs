//! Domain and display models
//!
//! `folder` holds the record type produced by data sources; `display`
//! converts records into CLI-friendly formats.

pub mod display;
mod folder;

pub use display::{FolderDisplay, PageDisplay};
pub use folder::{DEFAULT_ORG_ID, Folder};
