//! CLI module
//!
//! Command-line interface for listing governance resources.
//!
//! # Commands
//!
//! - `rules`, `control-libraries`, `profiles`, `scopes`, `reports`
//! - `attachments [--profile-id]` - instance-wide or per profile
//! - `subscopes --scope-id`
//! - `evaluations --report-id`, `resources --report-id`
//!
//! Each command drains its pager, or stops after one page with
//! `--first-page`.

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{Listing, Runner};

#[cfg(test)]
mod tests;
