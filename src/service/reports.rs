//! Report operations
//!
//! Reports are read-only; the service produces them when an attachment's
//! scan schedule fires.

use super::{require, GovernanceService};
use crate::error::Result;
use crate::http::RequestConfig;
use crate::models::{
    ComplianceStatus, Evaluation, EvaluationCollection, EvaluationStatus, Report,
    ReportCollection, ReportResource, ReportResourceCollection,
};
use crate::types::QueryParams;
use reqwest::Method;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListReportsParams {
    pub attachment_id: Option<String>,
    pub group_id: Option<String>,
    pub profile_id: Option<String>,
    pub scope_id: Option<String>,
    /// `scheduled` or `ondemand`
    pub report_type: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
}

impl ListReportsParams {
    fn query(&self) -> QueryParams {
        QueryParams::new()
            .opt("limit", self.limit)
            .opt("start", self.start.as_deref())
            .opt("attachment_id", self.attachment_id.as_deref())
            .opt("group_id", self.group_id.as_deref())
            .opt("profile_id", self.profile_id.as_deref())
            .opt("scope_id", self.scope_id.as_deref())
            .opt("type", self.report_type.as_deref())
            .opt("sort", self.sort.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListReportEvaluationsParams {
    pub report_id: String,
    pub assessment_id: Option<String>,
    pub component_id: Option<String>,
    pub target_id: Option<String>,
    pub target_name: Option<String>,
    pub status: Option<EvaluationStatus>,
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
}

impl ListReportEvaluationsParams {
    pub fn new(report_id: impl Into<String>) -> Self {
        Self {
            report_id: report_id.into(),
            ..Default::default()
        }
    }

    fn query(&self) -> QueryParams {
        QueryParams::new()
            .opt("limit", self.limit)
            .opt("start", self.start.as_deref())
            .opt("assessment_id", self.assessment_id.as_deref())
            .opt("component_id", self.component_id.as_deref())
            .opt("target_id", self.target_id.as_deref())
            .opt("target_name", self.target_name.as_deref())
            .opt("status", self.status)
            .opt("sort", self.sort.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListReportResourcesParams {
    pub report_id: String,
    /// Resource id filter
    pub id: Option<String>,
    pub resource_name: Option<String>,
    pub account_id: Option<String>,
    pub component_id: Option<String>,
    pub status: Option<ComplianceStatus>,
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
}

impl ListReportResourcesParams {
    pub fn new(report_id: impl Into<String>) -> Self {
        Self {
            report_id: report_id.into(),
            ..Default::default()
        }
    }

    fn query(&self) -> QueryParams {
        QueryParams::new()
            .opt("limit", self.limit)
            .opt("start", self.start.as_deref())
            .opt("id", self.id.as_deref())
            .opt("resource_name", self.resource_name.as_deref())
            .opt("account_id", self.account_id.as_deref())
            .opt("component_id", self.component_id.as_deref())
            .opt("status", self.status)
            .opt("sort", self.sort.as_deref())
    }
}

paginated! {
    ListReportsParams => Report,
    list: list_reports,
    pager: reports_pager,
    alias: ReportsPager,
}

paginated! {
    ListReportEvaluationsParams => Evaluation,
    list: list_report_evaluations,
    pager: report_evaluations_pager,
    alias: ReportEvaluationsPager,
}

paginated! {
    ListReportResourcesParams => ReportResource,
    list: list_report_resources,
    pager: report_resources_pager,
    alias: ReportResourcesPager,
}

impl GovernanceService {
    pub async fn list_reports(&self, params: &ListReportsParams) -> Result<ReportCollection> {
        let config = RequestConfig::new().with_query(params.query());
        self.http()
            .request_json(Method::GET, &self.path(&["reports"]), config)
            .await
    }

    pub async fn get_report(&self, report_id: &str) -> Result<Report> {
        require("report_id", report_id)?;
        self.http()
            .request_json(Method::GET, &self.path(&["reports", report_id]), RequestConfig::new())
            .await
    }

    pub async fn list_report_evaluations(
        &self,
        params: &ListReportEvaluationsParams,
    ) -> Result<EvaluationCollection> {
        require("report_id", &params.report_id)?;
        let path = self.path(&["reports", params.report_id.as_str(), "evaluations"]);
        let config = RequestConfig::new().with_query(params.query());
        self.http().request_json(Method::GET, &path, config).await
    }

    pub async fn list_report_resources(
        &self,
        params: &ListReportResourcesParams,
    ) -> Result<ReportResourceCollection> {
        require("report_id", &params.report_id)?;
        let path = self.path(&["reports", params.report_id.as_str(), "resources"]);
        let config = RequestConfig::new().with_query(params.query());
        self.http().request_json(Method::GET, &path, config).await
    }
}
