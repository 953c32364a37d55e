//! Folder model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Organization that owns the bulk of generated sample data.
pub const DEFAULT_ORG_ID: Uuid = Uuid::from_u128(0xc1556e17_b7c0_45a3_a6ae_9546248fb17a);

/// A folder record as produced by a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder ID
    pub id: Uuid,

    /// Display name or path
    pub name: String,

    /// Owning organization
    pub org_id: Uuid,

    /// Soft-delete flag
    #[serde(default)]
    pub deleted: bool,
}

impl Folder {
    /// Whether this folder belongs to the given organization.
    ///
    /// The nil ID never matches, even against a record that carries it.
    pub fn belongs_to(&self, org_id: Uuid) -> bool {
        !org_id.is_nil() && self.org_id == org_id
    }
}
