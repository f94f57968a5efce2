//! Profile attachment models
//!
//! An attachment binds a profile to one or more scopes and schedules
//! evaluation of those scopes against the profile's controls.

use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentStatus {
    #[default]
    Enabled,
    Disabled,
}

/// How often attached scopes are scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanSchedule {
    #[default]
    Daily,
    #[serde(rename = "every_7_days")]
    Every7Days,
    #[serde(rename = "every_30_days")]
    Every30Days,
}

/// Assessment parameter value bound by an attachment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<String>,
    pub parameter_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<String>,
}

/// Notification settings for scan results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentNotifications {
    #[serde(default)]
    pub enabled: bool,
    /// Failure-threshold and recipient settings, passed through as-is
    #[serde(default, skip_serializing_if = "JsonValue::is_null")]
    pub controls: JsonValue,
}

/// An attachment as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    #[serde(default)]
    pub profile_id: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub instance_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Ids of the scopes the profile is attached to
    #[serde(default)]
    pub scope: Vec<JsonValue>,
    #[serde(default)]
    pub status: AttachmentStatus,
    #[serde(default)]
    pub schedule: ScanSchedule,
    #[serde(default)]
    pub notifications: Option<AttachmentNotifications>,
    #[serde(default)]
    pub attachment_parameters: Vec<Parameter>,
    #[serde(default)]
    pub next_scan_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub updated_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

/// One attachment to create
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAttachment {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub scope: Vec<JsonValue>,
    pub status: AttachmentStatus,
    pub schedule: ScanSchedule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<AttachmentNotifications>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachment_parameters: Vec<Parameter>,
}

/// Body for attaching a profile, possibly several times at once
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentPrototype {
    pub attachments: Vec<NewAttachment>,
}

/// Response to an attachment create call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentsCreated {
    #[serde(default)]
    pub profile_id: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

collection! {
    /// One page of attachments
    AttachmentCollection { attachments: Attachment }
}
