//! Seedable sample data generator

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use super::FolderSource;
use crate::error::Result;
use crate::models::Folder;

/// Number of folders generated when nothing else is configured.
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

/// Seed used when nothing else is configured. A fixed seed keeps the dataset,
/// and therefore every page token, stable across invocations.
pub const DEFAULT_SAMPLE_SEED: u64 = 42;

const ADJECTIVES: &[&str] = &[
    "noble", "creative", "sure", "steady", "quiet", "bold", "clever", "amazing", "fleet",
    "golden", "humble", "keen", "lucky", "merry", "proud", "rapid", "sacred", "tender", "vivid",
    "wise",
];

const NOUNS: &[&str] = &[
    "vixen", "scalphunter", "ghost", "falcon", "harbor", "lantern", "meadow", "nomad", "orchid",
    "pilgrim", "quarry", "raven", "sentinel", "thistle", "umbra", "voyager", "warden", "yeti",
    "zephyr", "badger",
];

/// Generate `count` folders.
///
/// Every third record (1-based) is assigned a freshly drawn organization ID;
/// the rest belong to `default_org_id`, so exactly `count - count / 3`
/// records match it. All randomness comes from `rng`.
pub fn generate_folders<R: Rng + ?Sized>(
    count: usize,
    default_org_id: Uuid,
    rng: &mut R,
) -> Vec<Folder> {
    (1..=count)
        .map(|i| {
            let org_id = if i % 3 == 0 {
                random_uuid(rng)
            } else {
                default_org_id
            };

            Folder {
                id: random_uuid(rng),
                name: random_name(rng),
                org_id,
                deleted: rng.gen_bool(0.5),
            }
        })
        .collect()
}

fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    format!("{}-{}", adjective, noun)
}

/// In-memory data source over a fixed snapshot of folders.
#[derive(Debug, Clone, Default)]
pub struct SampleSource {
    folders: Vec<Folder>,
}

impl SampleSource {
    /// Wrap an existing snapshot.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }

    /// Generate a deterministic snapshot from `seed`.
    pub fn seeded(count: usize, default_org_id: Uuid, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(generate_folders(count, default_org_id, &mut rng))
    }

    /// The underlying snapshot.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }
}

impl FolderSource for SampleSource {
    fn list_folders(&self) -> Result<Vec<Folder>> {
        Ok(self.folders.clone())
    }
}
