//! Rule models

use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who owns a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    #[default]
    UserDefined,
    SystemDefined,
}

impl RuleType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserDefined => "user_defined",
            Self::SystemDefined => "system_defined",
        }
    }
}

display_as_str!(RuleType);

/// Extra condition narrowing which resources a rule targets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalTargetAttribute {
    pub name: String,
    pub operator: String,
    #[serde(default)]
    pub value: String,
}

/// The resources a rule evaluates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleTarget {
    pub service_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_display_name: Option<String>,
    pub resource_kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_target_attributes: Vec<AdditionalTargetAttribute>,
}

/// A configuration rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub rule_type: RuleType,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub target: Option<RuleTarget>,
    /// Condition tree the target's configuration must satisfy
    #[serde(default)]
    pub required_config: JsonValue,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub updated_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

/// Body for creating or replacing a rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulePrototype {
    pub description: String,
    pub target: RuleTarget,
    pub required_config: JsonValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

collection! {
    /// One page of rules
    RuleCollection { rules: Rule }
}
