//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::pagination::{PageCursor, PageParams, PageSource};
use crate::service::{
    GovernanceService, ListControlLibrariesParams, ListInstanceAttachmentsParams,
    ListProfileAttachmentsParams, ListProfilesParams, ListReportEvaluationsParams,
    ListReportResourcesParams, ListReportsParams, ListRulesParams, ListScopesParams,
    ListSubscopesParams,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

/// Items collected by one list command
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Resource name, e.g. `rules`
    pub resource: &'static str,
    /// Items in server order
    pub items: Vec<Value>,
    /// Continuation token left over when only the first page was fetched
    pub next_start: Option<String>,
    /// Collection size reported by the service
    pub total_count: Option<i64>,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let service = self.load_config()?.build_service()?;
        let listing = self.list(&service).await?;
        self.output_listing(&listing)
    }

    /// Load configuration from `--config`, or from the environment
    fn load_config(&self) -> Result<ServiceConfig> {
        match &self.cli.config {
            Some(path) => ServiceConfig::from_file(path),
            None => {
                debug!("No config file given, reading environment");
                ServiceConfig::from_env()
            }
        }
    }

    /// Execute the list command against a service
    pub async fn list(&self, service: &GovernanceService) -> Result<Listing> {
        let limit = self.cli.page_size;
        let resource = self.cli.command.resource();

        match &self.cli.command {
            Commands::Rules {
                search,
                service_name,
            } => {
                let params = ListRulesParams {
                    search: search.clone(),
                    service_name: service_name.clone(),
                    limit,
                    ..Default::default()
                };
                self.drain(resource, service.rules_pager(params)).await
            }
            Commands::ControlLibraries => {
                let params = ListControlLibrariesParams {
                    limit,
                    ..Default::default()
                };
                self.drain(resource, service.control_libraries_pager(params))
                    .await
            }
            Commands::Profiles => {
                let params = ListProfilesParams {
                    limit,
                    ..Default::default()
                };
                self.drain(resource, service.profiles_pager(params)).await
            }
            Commands::Attachments {
                profile_id: Some(profile_id),
            } => {
                let params = ListProfileAttachmentsParams {
                    limit,
                    ..ListProfileAttachmentsParams::new(profile_id.clone())
                };
                self.drain(resource, service.profile_attachments_pager(params))
                    .await
            }
            Commands::Attachments { profile_id: None } => {
                let params = ListInstanceAttachmentsParams {
                    limit,
                    ..Default::default()
                };
                self.drain(resource, service.instance_attachments_pager(params))
                    .await
            }
            Commands::Scopes { name } => {
                let params = ListScopesParams {
                    name: name.clone(),
                    limit,
                    ..Default::default()
                };
                self.drain(resource, service.scopes_pager(params)).await
            }
            Commands::Subscopes { scope_id } => {
                let params = ListSubscopesParams {
                    limit,
                    ..ListSubscopesParams::new(scope_id.clone())
                };
                self.drain(resource, service.subscopes_pager(params)).await
            }
            Commands::Reports {
                profile_id,
                scope_id,
            } => {
                let params = ListReportsParams {
                    profile_id: profile_id.clone(),
                    scope_id: scope_id.clone(),
                    limit,
                    ..Default::default()
                };
                self.drain(resource, service.reports_pager(params)).await
            }
            Commands::Evaluations { report_id } => {
                let params = ListReportEvaluationsParams {
                    limit,
                    ..ListReportEvaluationsParams::new(report_id.clone())
                };
                self.drain(resource, service.report_evaluations_pager(params))
                    .await
            }
            Commands::Resources { report_id } => {
                let params = ListReportResourcesParams {
                    limit,
                    ..ListReportResourcesParams::new(report_id.clone())
                };
                self.drain(resource, service.report_resources_pager(params))
                    .await
            }
        }
    }

    /// Collect one page or every page from a cursor
    async fn drain<S, P>(
        &self,
        resource: &'static str,
        mut pager: PageCursor<'_, S, P>,
    ) -> Result<Listing>
    where
        S: PageSource<P> + ?Sized,
        S::Item: Serialize,
        P: PageParams,
    {
        let items = if self.cli.first_page {
            pager.get_next().await?
        } else {
            pager.get_all().await?
        };

        let items = items
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        info!("Listed {} {}", items.len(), resource);

        Ok(Listing {
            resource,
            items,
            next_start: pager.next_token().map(str::to_string),
            total_count: pager.total_count(),
        })
    }

    /// Print every item, then a trailing cursor message if more pages remain
    fn output_listing(&self, listing: &Listing) -> Result<()> {
        for item in &listing.items {
            self.output_message(&json!({
                "type": "RECORD",
                "resource": listing.resource,
                "record": item,
            }))?;
        }

        if let Some(next_start) = &listing.next_start {
            self.output_message(&json!({
                "type": "CURSOR",
                "resource": listing.resource,
                "next_start": next_start,
                "total_count": listing.total_count,
            }))?;
        }
        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) -> Result<()> {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(msg)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(msg)?,
        };
        println!("{line}");
        Ok(())
    }
}
