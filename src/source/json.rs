//! JSON file data source

use std::path::{Path, PathBuf};

use log::debug;

use super::FolderSource;
use crate::error::{Result, SourceError};
use crate::models::Folder;

/// Data source backed by a JSON array of folders on disk.
///
/// The file is re-read on every call, so each top-level request sees a
/// fresh snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `folders` to the backing file as pretty-printed JSON.
    pub fn save(&self, folders: &[Folder]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(folders)?;
        std::fs::write(&self.path, contents)?;

        debug!("Wrote {} folders to {}", folders.len(), self.path.display());
        Ok(())
    }
}

impl FolderSource for JsonFileSource {
    fn list_folders(&self) -> Result<Vec<Folder>> {
        if !self.path.exists() {
            return Err(SourceError::NotFound(self.path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let folders: Vec<Folder> =
            serde_json::from_str(&contents).map_err(|e| SourceError::Parse(e.to_string()))?;

        debug!(
            "Loaded {} folders from {}",
            folders.len(),
            self.path.display()
        );
        Ok(folders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::DEFAULT_ORG_ID;
    use crate::source::SampleSource;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_list() {
        let dir = tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("nested").join("folders.json"));
        let sample = SampleSource::seeded(12, DEFAULT_ORG_ID, 3);

        source.save(sample.folders()).unwrap();

        assert_eq!(source.list_folders().unwrap(), sample.folders());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("absent.json"));

        match source.list_folders() {
            Err(Error::Source(SourceError::NotFound(path))) => {
                assert!(path.contains("absent.json"))
            }
            other => panic!("Expected SourceError::NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("folders.json");
        std::fs::write(&path, "{ not json").unwrap();

        match JsonFileSource::new(&path).list_folders() {
            Err(Error::Source(SourceError::Parse(_))) => (),
            other => panic!("Expected SourceError::Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_reads_fresh_snapshot_each_call() {
        let dir = tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("folders.json"));
        let sample = SampleSource::seeded(6, DEFAULT_ORG_ID, 8);

        source.save(&sample.folders()[..2]).unwrap();
        assert_eq!(source.list_folders().unwrap().len(), 2);

        source.save(sample.folders()).unwrap();
        assert_eq!(source.list_folders().unwrap().len(), 6);
    }
}
