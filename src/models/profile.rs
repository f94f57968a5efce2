//! Profile models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a profile ships with the service or was authored by the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileType {
    Predefined,
    #[default]
    Custom,
}

impl ProfileType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Predefined => "predefined",
            Self::Custom => "custom",
        }
    }
}

display_as_str!(ProfileType);

/// A control selected into a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileControl {
    #[serde(default)]
    pub control_library_id: Option<String>,
    #[serde(default)]
    pub control_id: Option<String>,
    #[serde(default)]
    pub control_library_version: Option<String>,
    #[serde(default)]
    pub control_name: Option<String>,
    #[serde(default)]
    pub control_description: Option<String>,
    #[serde(default)]
    pub control_category: Option<String>,
}

/// Reference to a control when building a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileControlPrototype {
    pub control_library_id: String,
    pub control_id: String,
}

/// Default value for an assessment parameter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultParameter {
    #[serde(default)]
    pub assessment_type: Option<String>,
    #[serde(default)]
    pub assessment_id: Option<String>,
    pub parameter_name: String,
    #[serde(default)]
    pub parameter_default_value: Option<String>,
    #[serde(default)]
    pub parameter_display_name: Option<String>,
    #[serde(default)]
    pub parameter_type: Option<String>,
}

/// A profile: a versioned selection of controls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub profile_name: String,
    #[serde(default)]
    pub profile_description: String,
    #[serde(default)]
    pub profile_type: ProfileType,
    #[serde(default)]
    pub profile_version: Option<String>,
    #[serde(default)]
    pub version_group_label: Option<String>,
    #[serde(default)]
    pub latest: bool,
    #[serde(default)]
    pub hierarchy_enabled: bool,
    #[serde(default)]
    pub controls_count: Option<i64>,
    #[serde(default)]
    pub control_parents_count: Option<i64>,
    #[serde(default)]
    pub attachments_count: Option<i64>,
    #[serde(default)]
    pub controls: Vec<ProfileControl>,
    #[serde(default)]
    pub default_parameters: Vec<DefaultParameter>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub updated_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

/// Body for creating or replacing a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePrototype {
    pub profile_name: String,
    pub profile_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<bool>,
    pub controls: Vec<ProfileControlPrototype>,
    #[serde(default)]
    pub default_parameters: Vec<DefaultParameter>,
}

collection! {
    /// One page of profiles
    ProfileCollection { profiles: Profile }
}
