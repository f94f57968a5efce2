//! Scope models

use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named property of a scope, e.g. the account or resource-group it covers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeProperty {
    pub name: String,
    pub value: JsonValue,
}

/// A set of resources that profiles can be attached to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scope {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub properties: Vec<ScopeProperty>,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub instance_id: Option<String>,
    #[serde(default)]
    pub attachment_count: Option<i64>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub updated_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

/// Body for creating a scope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopePrototype {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub environment: String,
    pub properties: Vec<ScopeProperty>,
}

/// Partial update of a scope; unset fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A scope nested inside another scope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscope {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub subscope_type: Option<String>,
    #[serde(default)]
    pub properties: Vec<ScopeProperty>,
}

collection! {
    /// One page of scopes
    ScopeCollection { scopes: Scope }
}

collection! {
    /// One page of subscopes
    SubscopeCollection { subscopes: Subscope }
}
