//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Governance service client
#[derive(Parser, Debug)]
#[command(name = "governance-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Service configuration file (YAML or JSON); defaults to GOVERNANCE_* variables
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Items requested per page
    #[arg(long, global = true)]
    pub page_size: Option<i64>,

    /// Only fetch the first page
    #[arg(long, global = true)]
    pub first_page: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List rules
    Rules {
        /// Free-text search over descriptions
        #[arg(long)]
        search: Option<String>,

        /// Only rules targeting this service
        #[arg(long)]
        service_name: Option<String>,
    },

    /// List control libraries
    ControlLibraries,

    /// List profiles
    Profiles,

    /// List attachments, of one profile or of the whole instance
    Attachments {
        #[arg(long)]
        profile_id: Option<String>,
    },

    /// List scopes
    Scopes {
        #[arg(long)]
        name: Option<String>,
    },

    /// List the subscopes of a scope
    Subscopes {
        #[arg(long)]
        scope_id: String,
    },

    /// List scan reports
    Reports {
        #[arg(long)]
        profile_id: Option<String>,

        #[arg(long)]
        scope_id: Option<String>,
    },

    /// List the evaluations of a report
    Evaluations {
        #[arg(long)]
        report_id: String,
    },

    /// List the resources of a report
    Resources {
        #[arg(long)]
        report_id: String,
    },
}

impl Commands {
    /// Resource name used in output records
    pub fn resource(&self) -> &'static str {
        match self {
            Self::Rules { .. } => "rules",
            Self::ControlLibraries => "control_libraries",
            Self::Profiles => "profiles",
            Self::Attachments { .. } => "attachments",
            Self::Scopes { .. } => "scopes",
            Self::Subscopes { .. } => "subscopes",
            Self::Reports { .. } => "reports",
            Self::Evaluations { .. } => "evaluations",
            Self::Resources { .. } => "resources",
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
