//! Mock folder source for testing
//!
//! Provides a configurable [`FolderSource`] that records how often it is
//! called and can fail on demand.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::FolderSource;
use crate::error::{Result, SourceError};
use crate::models::Folder;

/// Mock data source for testing.
///
/// # Example
/// ```ignore
/// let mock = MockFolderSource::new().with_folders(folders_for_org(org, 3));
/// let service = FolderService::new(&mock);
/// service.get_all(org)?;
/// assert_eq!(mock.call_count(), 1);
/// ```
#[derive(Default)]
pub struct MockFolderSource {
    /// Folders to return from list_folders
    folders: Mutex<Vec<Folder>>,
    /// Error to return on the given call number (1-based) - consumed when hit
    error: Mutex<Option<(usize, SourceError)>>,
    /// Number of list_folders calls
    calls: AtomicUsize,
}

impl MockFolderSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure folders to return from list_folders.
    pub fn with_folders(self, folders: Vec<Folder>) -> Self {
        self.set_folders(folders);
        self
    }

    /// Configure an error to return on the next call.
    pub fn with_error(self, error: SourceError) -> Self {
        let next = self.call_count() + 1;
        self.with_error_on_call(next, error)
    }

    /// Configure an error to return on call number `call` (1-based).
    pub fn with_error_on_call(self, call: usize, error: SourceError) -> Self {
        *self.error.lock().expect("mock lock poisoned") = Some((call, error));
        self
    }

    /// Replace the snapshot between calls.
    pub fn set_folders(&self, folders: Vec<Folder>) {
        *self.folders.lock().expect("mock lock poisoned") = folders;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FolderSource for MockFolderSource {
    fn list_folders(&self) -> Result<Vec<Folder>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;

        let pending = self
            .error
            .lock()
            .expect("mock lock poisoned")
            .take_if(|(at, _)| *at == call);
        if let Some((_, err)) = pending {
            return Err(err.into());
        }

        Ok(self.folders.lock().expect("mock lock poisoned").clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::source::fixtures::test_folder;

    #[test]
    fn test_mock_returns_configured_folders() {
        let mock = MockFolderSource::new().with_folders(vec![test_folder("a"), test_folder("b")]);

        let folders = mock.list_folders().unwrap();

        assert_eq!(folders.len(), 2);
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn test_mock_error_is_consumed() {
        let mock = MockFolderSource::new()
            .with_folders(vec![test_folder("a")])
            .with_error(SourceError::NotFound("db".to_string()));

        assert!(matches!(
            mock.list_folders(),
            Err(Error::Source(SourceError::NotFound(_)))
        ));
        assert_eq!(mock.list_folders().unwrap().len(), 1);
        assert_eq!(mock.call_count(), 2);
    }

    #[test]
    fn test_mock_error_on_later_call() {
        let mock = MockFolderSource::new()
            .with_folders(vec![test_folder("a")])
            .with_error_on_call(2, SourceError::Parse("row 7".to_string()));

        assert!(mock.list_folders().is_ok());
        assert!(matches!(
            mock.list_folders(),
            Err(Error::Source(SourceError::Parse(_)))
        ));
        assert!(mock.list_folders().is_ok());
    }
}
