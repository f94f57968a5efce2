//! Scan report models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Roll-up compliance state of a report or resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    NotCompliant,
    UnableToPerform,
    UserEvaluationRequired,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ComplianceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::NotCompliant => "not_compliant",
            Self::UnableToPerform => "unable_to_perform",
            Self::UserEvaluationRequired => "user_evaluation_required",
            Self::Unknown => "unknown",
        }
    }
}

/// Outcome of a single assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    Pass,
    Failure,
    Error,
    Skipped,
    #[default]
    #[serde(other)]
    Unknown,
}

impl EvaluationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Failure => "failure",
            Self::Error => "error",
            Self::Skipped => "skipped",
            Self::Unknown => "unknown",
        }
    }
}

display_as_str!(ComplianceStatus, EvaluationStatus);

/// Profile a report was produced for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Result of one scan of an attachment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub instance_id: Option<String>,
    #[serde(default)]
    pub attachment_id: Option<String>,
    #[serde(rename = "type", default)]
    pub report_type: Option<String>,
    #[serde(default)]
    pub profile: Option<ReportProfile>,
    #[serde(default)]
    pub scan_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cos_object: Option<String>,
}

/// The assessment an evaluation ran
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(default)]
    pub assessment_id: Option<String>,
    #[serde(default)]
    pub assessment_type: Option<String>,
    #[serde(default)]
    pub assessment_method: Option<String>,
    #[serde(default)]
    pub assessment_description: Option<String>,
    #[serde(default)]
    pub parameter_count: Option<i64>,
}

/// The resource an evaluation ran against
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationTarget {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub resource_crn: Option<String>,
    #[serde(default)]
    pub resource_name: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
}

/// One assessment outcome within a report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(default)]
    pub report_id: Option<String>,
    #[serde(default)]
    pub home_account_id: Option<String>,
    #[serde(default)]
    pub control_id: Option<String>,
    #[serde(default)]
    pub component_id: Option<String>,
    #[serde(default)]
    pub component_name: Option<String>,
    #[serde(default)]
    pub assessment: Option<Assessment>,
    #[serde(default)]
    pub evaluate_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub target: Option<EvaluationTarget>,
    #[serde(default)]
    pub status: EvaluationStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Per-resource summary within a report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportResource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub report_id: Option<String>,
    #[serde(default)]
    pub resource_name: Option<String>,
    #[serde(default)]
    pub component_id: Option<String>,
    #[serde(default)]
    pub component_name: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub status: ComplianceStatus,
    #[serde(default)]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub pass_count: Option<i64>,
    #[serde(default)]
    pub failure_count: Option<i64>,
    #[serde(default)]
    pub error_count: Option<i64>,
    #[serde(default)]
    pub skipped_count: Option<i64>,
}

collection! {
    /// One page of reports
    ReportCollection { reports: Report }
}

collection! {
    /// One page of evaluations
    EvaluationCollection { evaluations: Evaluation }
}

collection! {
    /// One page of report resources
    ReportResourceCollection { resources: ReportResource }
}
