//! Command-line surface for `mapper-admin`.
//! Kept in a shared file so tests can reuse the same definitions as the
//! binary itself.

#![deny(clippy::all, clippy::pedantic)]

use std::fmt;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "mapper-admin", version, about = "Entity-mapper plugin admin console", long_about = None)]
pub struct Cli {
    /// Host platform base URL, e.g. <https://tracker.example.com>
    #[arg(long, env = "MAPPER_SITE_URL")]
    pub site: Option<String>,

    /// REST path prefix of the plugin (differs between host versions)
    #[arg(long, env = "MAPPER_REST_PREFIX", default_value = "rest/entity-mapper/1")]
    pub rest_prefix: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Entity mapping management (list/create/update/delete)
    Mappings(MappingsArgs),
    /// Plugin settings
    Settings(SettingsArgs),
    /// Audit journal access
    Audit(AuditArgs),
}

#[derive(Parser, Debug)]
pub struct MappingsArgs {
    #[command(subcommand)]
    pub action: MappingsCmd,
}

#[derive(Subcommand, Debug)]
pub enum MappingsCmd {
    /// List all mappings
    List,
    /// Get a mapping by id
    Get { id: i64 },
    /// Create a mapping
    Create {
        #[arg(long)]
        key: String,
        #[arg(long)]
        value: String,
    },
    /// Replace key and value of an existing mapping
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        key: String,
        #[arg(long)]
        value: String,
    },
    /// Delete a mapping
    Delete { id: i64 },
}

#[derive(Parser, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub action: SettingsCmd,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCmd {
    /// Show plugin settings
    Get,
    /// Enable or disable mapping management inside projects
    SetProjectMappings {
        #[arg(long, action = ArgAction::Set)]
        enabled: bool,
    },
}

#[derive(Parser, Debug)]
pub struct AuditArgs {
    #[command(subcommand)]
    pub action: AuditCmd,
}

/// The five optional journal filter controls plus the server-side limit.
/// Blank values mean "no constraint" and never reach the outgoing query.
#[derive(Parser, Debug, Clone, Default)]
pub struct AuditFilterArgs {
    /// Earliest day to include, display form `dd-mm-yy` or `dd-mm-yyyy`
    #[arg(long)]
    pub start_date: Option<String>,
    /// Latest day to include, same form as --start-date
    #[arg(long)]
    pub end_date: Option<String>,
    /// Login of the user who performed the change
    #[arg(long)]
    pub initiator: Option<String>,
    /// Event kind (CREATE, UPDATE, DELETE); passed through verbatim
    #[arg(long)]
    pub event: Option<String>,
    /// Restrict to one mapping entity
    #[arg(long)]
    pub mapping_id: Option<String>,
    /// Maximum number of records the server should return
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum AuditCmd {
    /// Fetch and render audit records
    List {
        #[command(flatten)]
        filter: AuditFilterArgs,
        #[arg(long, value_enum, default_value_t = AuditOutput::Flat)]
        output: AuditOutput,
    },
    /// Refresh the audit journal periodically
    Watch {
        #[command(flatten)]
        filter: AuditFilterArgs,
        /// Seconds between refreshes
        #[arg(long, default_value_t = 30)]
        interval: u64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AuditOutput {
    /// One log row per record
    Flat,
    /// Multi-line description blocks
    Detailed,
    /// Raw response payload
    Json,
}

impl AuditOutput {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Detailed => "detailed",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for AuditOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
