//! Organization filter

use uuid::Uuid;

use crate::models::Folder;

/// Keep the folders owned by `org_id`, preserving source order.
///
/// The nil ID matches nothing. An empty result is not an error.
pub fn filter_by_org(folders: Vec<Folder>, org_id: Uuid) -> Vec<Folder> {
    folders
        .into_iter()
        .filter(|folder| folder.belongs_to(org_id))
        .collect()
}
