//! Folder display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{truncate_string, yes_no};
use crate::folders::Page;
use crate::models::Folder;

/// Maximum folder name width in table output
const NAME_WIDTH: usize = 40;

/// Folder display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FolderDisplay {
    /// Folder ID
    #[tabled(rename = "FOLDER ID")]
    pub id: String,

    /// Folder name, cut to the table column width
    #[tabled(rename = "NAME")]
    #[serde(skip)]
    pub name_cell: String,

    /// Full folder name
    #[tabled(skip)]
    pub name: String,

    /// Owning organization
    #[tabled(rename = "ORG ID")]
    pub org_id: String,

    /// Deletion flag
    #[tabled(rename = "DELETED")]
    #[serde(skip)]
    pub deleted_label: String,

    #[tabled(skip)]
    pub deleted: bool,
}

impl From<Folder> for FolderDisplay {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id.to_string(),
            name_cell: truncate_string(&folder.name, NAME_WIDTH),
            name: folder.name,
            org_id: folder.org_id.to_string(),
            deleted_label: yes_no(folder.deleted).to_string(),
            deleted: folder.deleted,
        }
    }
}

impl From<&Folder> for FolderDisplay {
    fn from(folder: &Folder) -> Self {
        Self::from(folder.clone())
    }
}

/// A single page of folders plus its continuation token, for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct PageDisplay {
    pub folders: Vec<FolderDisplay>,

    /// Empty when there are no further pages
    pub next_token: String,
}

impl From<Page<Folder>> for PageDisplay {
    fn from(page: Page<Folder>) -> Self {
        Self {
            folders: page.items.into_iter().map(FolderDisplay::from).collect(),
            next_token: page.next_token,
        }
    }
}
