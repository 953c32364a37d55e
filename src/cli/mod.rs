//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;
use uuid::Uuid;

pub mod args;
pub mod context;
pub mod folder;
pub mod org;
pub mod sample;
pub mod status;
pub mod token;

pub use args::{GlobalOptions, OutputFormat, PaginationArgs};
pub use context::CommandContext;

/// orgfolders - browse an organization's folders page by page
#[derive(Parser, Debug)]
#[command(name = "orgfolders")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "ORGFOLDERS_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override default organization
    #[arg(long, global = true, env = "ORGFOLDERS_ORG_ID", hide_env = true)]
    pub org: Option<Uuid>,

    /// Override config file location
    #[arg(long, global = true, env = "ORGFOLDERS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Read folders from a JSON file instead of generated sample data
    #[arg(long, global = true, env = "ORGFOLDERS_DATA", hide_env = true)]
    pub data: Option<PathBuf>,

    /// Seed for the generated sample data
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ORGFOLDERS_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every folder in the organization
    #[command(visible_alias = "ls")]
    List,

    /// Fetch a single page of folders
    Page {
        #[command(flatten)]
        pagination: PaginationArgs,

        /// Continuation token from a previous page (omit for the first page)
        #[arg(long, short = 't')]
        token: Option<String>,
    },

    /// Walk every page of folders from the first to the last
    Iterate {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Generate a sample folder dataset
    Sample {
        /// Number of folders to generate
        #[arg(long, short = 'n')]
        size: Option<usize>,

        /// Write the dataset to a JSON file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Encode or decode page tokens
    #[command(subcommand)]
    Token(TokenCommands),

    /// Manage the default organization
    #[command(subcommand)]
    Org(OrgCommands),

    /// Show configuration and data source status
    Status,

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Install completions:
  bash:   orgfolders completion bash > /etc/bash_completion.d/orgfolders
  zsh:    orgfolders completion zsh > \"${fpath[1]}/_orgfolders\"
  fish:   orgfolders completion fish > ~/.config/fish/completions/orgfolders.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Page token subcommands
#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    /// Encode an offset as a page token
    Encode {
        /// Zero-based offset into the filtered folder list
        offset: usize,
    },

    /// Decode a page token back to its offset
    Decode {
        /// Token returned by a previous page
        token: String,
    },
}

/// Organization management subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// Set default organization
    Set {
        /// Organization ID to set as default
        org_id: Uuid,
    },

    /// Show the organization commands will use
    Get,
}
