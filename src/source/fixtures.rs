//! Test fixtures and builders for folder records
//!
//! Import via `use crate::source::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use uuid::Uuid;

use crate::models::{DEFAULT_ORG_ID, Folder};

/// Builder for creating test Folder instances.
///
/// # Example
/// ```ignore
/// let folder = FolderBuilder::new("noble-vixen")
///     .org_id(org)
///     .deleted(true)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct FolderBuilder {
    id: Uuid,
    name: String,
    org_id: Uuid,
    deleted: bool,
}

impl FolderBuilder {
    /// Create a new builder owned by [`DEFAULT_ORG_ID`] with a random ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            org_id: DEFAULT_ORG_ID,
            deleted: false,
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Set the owning organization.
    pub fn org_id(mut self, org_id: Uuid) -> Self {
        self.org_id = org_id;
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    pub fn build(self) -> Folder {
        Folder {
            id: self.id,
            name: self.name,
            org_id: self.org_id,
            deleted: self.deleted,
        }
    }
}

/// Create a minimal test folder.
pub fn test_folder(name: &str) -> Folder {
    FolderBuilder::new(name).build()
}

/// Create `count` folders for `org_id`, named `folder-0`, `folder-1`, ...
pub fn folders_for_org(org_id: Uuid, count: usize) -> Vec<Folder> {
    (0..count)
        .map(|i| FolderBuilder::new(format!("folder-{}", i)).org_id(org_id).build())
        .collect()
}

/// Interleave folders of two organizations: `a, b, a, b, ...`.
pub fn interleaved(org_a: Uuid, count_a: usize, org_b: Uuid, count_b: usize) -> Vec<Folder> {
    let mut a = folders_for_org(org_a, count_a).into_iter();
    let mut b = folders_for_org(org_b, count_b).into_iter();
    let mut out = Vec::with_capacity(count_a + count_b);

    loop {
        match (a.next(), b.next()) {
            (None, None) => break,
            (x, y) => out.extend(x.into_iter().chain(y)),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_builder_defaults() {
        let folder = FolderBuilder::new("a").build();
        assert_eq!(folder.name, "a");
        assert_eq!(folder.org_id, DEFAULT_ORG_ID);
        assert!(!folder.deleted);
    }

    #[test]
    fn test_folder_builder_with_all_fields() {
        let id = Uuid::from_u128(1);
        let org = Uuid::from_u128(2);
        let folder = FolderBuilder::new("b").id(id).org_id(org).deleted(true).build();

        assert_eq!(folder.id, id);
        assert_eq!(folder.org_id, org);
        assert!(folder.deleted);
    }

    #[test]
    fn test_folders_for_org() {
        let org = Uuid::from_u128(3);
        let folders = folders_for_org(org, 4);
        assert_eq!(folders.len(), 4);
        assert_eq!(folders[3].name, "folder-3");
        assert!(folders.iter().all(|f| f.org_id == org));
    }

    #[test]
    fn test_interleaved_order() {
        let a = Uuid::from_u128(10);
        let b = Uuid::from_u128(20);
        let folders = interleaved(a, 3, b, 1);

        let orgs: Vec<Uuid> = folders.iter().map(|f| f.org_id).collect();
        assert_eq!(orgs, vec![a, b, a, a]);
    }
}
