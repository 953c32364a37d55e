//! Folder retrieval service

use log::debug;
use uuid::Uuid;

use super::filter::filter_by_org;
use super::iter::Pages;
use super::pagination::{Page, PageRequest, paginate};
use crate::error::Result;
use crate::models::Folder;
use crate::source::FolderSource;

/// Retrieves an organization's folders from an injected data source.
///
/// The service holds no paging state. Each call lists the source afresh and
/// re-runs the filter, so repeated calls with the same request against an
/// unchanged source return identical results. Source errors are returned
/// as-is.
pub struct FolderService<S> {
    source: S,
}

impl<S: FolderSource> FolderService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// All folders owned by `org_id`, in source order.
    pub fn get_all(&self, org_id: Uuid) -> Result<Vec<Folder>> {
        let folders = filter_by_org(self.source.list_folders()?, org_id);
        debug!("Found {} folders for org {}", folders.len(), org_id);
        Ok(folders)
    }

    /// One page of the folders owned by `request.org_id`.
    pub fn get_page(&self, request: &PageRequest) -> Result<Page<Folder>> {
        let folders = self.get_all(request.org_id)?;
        let page = paginate(folders, request.page_size, &request.token)?;

        debug!(
            "Page for org {}: {} folders, more: {}",
            request.org_id,
            page.len(),
            page.has_next_page()
        );
        Ok(page)
    }

    /// Iterate every page for `org_id`, starting from the first.
    pub fn pages(&self, org_id: Uuid, page_size: usize) -> Pages<'_, S> {
        Pages::new(self, PageRequest::new(org_id).page_size(page_size))
    }
}
