//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, organization resolution, and data source setup.

use std::fmt;
use std::path::PathBuf;

use log::{debug, warn};
use uuid::Uuid;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::folders::FolderService;
use crate::models::DEFAULT_ORG_ID;
use crate::source::{FolderSource, JsonFileSource, SampleSource};

/// Where the active organization ID came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgOrigin {
    /// `--org` flag or `ORGFOLDERS_ORG_ID`
    Override,
    /// `org_id` in the config file
    Config,
    /// Built-in default organization
    Default,
}

impl fmt::Display for OrgOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrgOrigin::Override => "--org override",
            OrgOrigin::Config => "config file",
            OrgOrigin::Default => "built-in default",
        };
        f.write_str(label)
    }
}

/// Where folder records are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOrigin {
    /// JSON file on disk
    File(PathBuf),
    /// Generated in memory, owned by the resolved organization
    Sample { size: usize, seed: u64 },
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataOrigin::File(path) => write!(f, "file {}", path.display()),
            DataOrigin::Sample { size, seed } => {
                write!(f, "sample ({} folders, seed {})", size, seed)
            }
        }
    }
}

/// Context for command execution containing config, service, and runtime options.
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists)
    pub config: Config,
    /// Folder service over the resolved data source
    pub service: FolderService<Box<dyn FolderSource>>,
    /// Resolved organization ID
    pub org_id: Uuid,
    /// Where `org_id` came from
    pub org_origin: OrgOrigin,
    /// Where folder records come from
    pub data_origin: DataOrigin,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Precedence for each setting is flag (or env) > config file > default.
    ///
    /// # Errors
    /// Returns error if an existing config file cannot be read or is invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref())?;

        let (org_id, org_origin) = resolve_org(opts.org, config.org_id);
        let format = resolve_format(opts.format, config.preferences.format.as_deref());
        let data_origin = resolve_data(opts, &config);

        debug!(
            "Using org {} ({}), data from {}",
            org_id, org_origin, data_origin
        );

        let source: Box<dyn FolderSource> = match &data_origin {
            DataOrigin::File(path) => Box::new(JsonFileSource::new(path.clone())),
            DataOrigin::Sample { size, seed } => {
                Box::new(SampleSource::seeded(*size, org_id, *seed))
            }
        };

        Ok(Self {
            config,
            service: FolderService::new(source),
            org_id,
            org_origin,
            data_origin,
            format,
        })
    }

    /// Page size to use when the command line did not give one.
    pub fn default_page_size(&self) -> usize {
        self.config.preferences.page_size
    }
}

pub(super) fn resolve_org(flag: Option<Uuid>, configured: Option<Uuid>) -> (Uuid, OrgOrigin) {
    match (flag, configured) {
        (Some(org), _) => (org, OrgOrigin::Override),
        (None, Some(org)) => (org, OrgOrigin::Config),
        (None, None) => (DEFAULT_ORG_ID, OrgOrigin::Default),
    }
}

fn resolve_format(flag: Option<OutputFormat>, configured: Option<&str>) -> OutputFormat {
    if let Some(format) = flag {
        return format;
    }

    match configured {
        Some(name) => OutputFormat::from_name(name).unwrap_or_else(|| {
            warn!("Ignoring unknown output format '{}' in config", name);
            OutputFormat::default()
        }),
        None => OutputFormat::default(),
    }
}

fn resolve_data(opts: &GlobalOptions, config: &Config) -> DataOrigin {
    if let Some(path) = opts.data_ref().or(config.data_file.as_deref()) {
        return DataOrigin::File(path.to_path_buf());
    }

    DataOrigin::Sample {
        size: config.sample.size,
        seed: opts.seed.unwrap_or(config.sample.seed),
    }
}
