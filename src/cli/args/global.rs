//! Global CLI options shared across all commands
//!
//! Consolidates the global flags so handlers take a single argument.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For most options, the precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file defaults are resolved later in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override
    pub format: Option<OutputFormat>,

    /// Organization ID override (bypasses config file)
    pub org: Option<Uuid>,

    /// Custom config file path (defaults to ~/.orgfolders/config.yaml)
    pub config: Option<String>,

    /// JSON data file override
    pub data: Option<PathBuf>,

    /// Sample seed override
    pub seed: Option<u64>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            org: cli.org,
            config: cli.config.clone(),
            data: cli.data.clone(),
            seed: cli.seed,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get data file override as `Option<&Path>`.
    pub fn data_ref(&self) -> Option<&Path> {
        self.data.as_deref()
    }
}
