//! Control library models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a library ships with the service or was authored by the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlLibraryType {
    Predefined,
    #[default]
    Custom,
}

impl ControlLibraryType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Predefined => "predefined",
            Self::Custom => "custom",
        }
    }
}

display_as_str!(ControlLibraryType);

/// How a control is checked for one component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlSpecification {
    #[serde(default)]
    pub control_specification_id: Option<String>,
    #[serde(default)]
    pub component_id: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub control_specification_description: Option<String>,
    #[serde(default)]
    pub assessments_count: Option<i64>,
}

/// A control inside a library
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub control_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_id: Option<String>,
    #[serde(default)]
    pub control_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_parent: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub control_specifications: Vec<ControlSpecification>,
}

/// A library of controls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlLibrary {
    pub id: String,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub control_library_name: String,
    #[serde(default)]
    pub control_library_description: String,
    #[serde(default)]
    pub control_library_type: ControlLibraryType,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub controls_count: Option<i64>,
    #[serde(default)]
    pub control_parents_count: Option<i64>,
    /// Present on single-library reads, omitted from list pages
    #[serde(default)]
    pub controls: Vec<Control>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub updated_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

/// Body for creating a custom control library
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlLibraryPrototype {
    pub control_library_name: String,
    pub control_library_description: String,
    pub control_library_type: ControlLibraryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_version: Option<String>,
    pub controls: Vec<Control>,
}

collection! {
    /// One page of control libraries
    ControlLibraryCollection { control_libraries: ControlLibrary }
}
