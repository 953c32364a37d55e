//! Folder data sources
//!
//! A data source owns the folder records and exposes a single capability:
//! list every folder for every organization, unfiltered. Filtering and
//! pagination live in [`crate::folders`] and never depend on a concrete
//! source, so the sample generator can be swapped for a persistent store
//! without touching them.

use crate::error::Result;
use crate::models::Folder;

#[cfg(test)]
pub mod fixtures;
pub mod json;
#[cfg(test)]
pub mod mock;
pub mod sample;

pub use json::JsonFileSource;
#[cfg(test)]
pub use mock::MockFolderSource;
pub use sample::{DEFAULT_SAMPLE_SEED, DEFAULT_SAMPLE_SIZE, SampleSource};

/// Capability to list all folder records.
pub trait FolderSource: Send + Sync {
    /// Return the complete, unfiltered record list.
    fn list_folders(&self) -> Result<Vec<Folder>>;
}

impl<T: FolderSource + ?Sized> FolderSource for &T {
    fn list_folders(&self) -> Result<Vec<Folder>> {
        (**self).list_folders()
    }
}

impl<T: FolderSource + ?Sized> FolderSource for Box<T> {
    fn list_folders(&self) -> Result<Vec<Folder>> {
        (**self).list_folders()
    }
}
