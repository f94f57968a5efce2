//! Request and response models
//!
//! Plain serde records for every resource the service exposes. Optional
//! response fields default when absent and unknown fields are ignored, so
//! newer service versions keep deserializing.
//!
//! Every list response is a *collection*: `limit`, `total_count`, `first`,
//! `next`, and a resource array under a resource-specific key. The
//! `collection!` macro declares such a struct and its conversion into the
//! uniform [`Page`](crate::pagination::Page) the cursor consumes.

/// Declare a list-response collection and its `Page` conversion
macro_rules! collection {
    (
        $(#[$meta:meta])*
        $name:ident { $field:ident : $item:ty }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            /// Page size the server applied
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub limit: Option<i64>,
            /// Total number of resources in the collection
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub total_count: Option<i64>,
            /// Link to the first page
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub first: Option<$crate::pagination::PageLink>,
            /// Link to the next page; absent on the last page
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub next: Option<$crate::pagination::PageLink>,
            #[serde(default)]
            pub $field: Vec<$item>,
        }

        impl From<$name> for $crate::pagination::Page<$item> {
            fn from(collection: $name) -> Self {
                Self {
                    items: collection.$field,
                    next: collection.next,
                    first: collection.first,
                    total_count: collection.total_count,
                    limit: collection.limit,
                }
            }
        }
    };
}

/// Implement `Display` for a string-valued enum through its `as_str`
macro_rules! display_as_str {
    ($($name:ident),+ $(,)?) => {
        $(
            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

mod attachment;
mod control_library;
mod profile;
mod report;
mod rule;
mod scope;

pub use attachment::{
    Attachment, AttachmentCollection, AttachmentNotifications, AttachmentPrototype,
    AttachmentStatus, AttachmentsCreated, NewAttachment, Parameter, ScanSchedule,
};
pub use control_library::{
    Control, ControlLibrary, ControlLibraryCollection, ControlLibraryPrototype,
    ControlLibraryType, ControlSpecification,
};
pub use profile::{
    DefaultParameter, Profile, ProfileCollection, ProfileControl, ProfileControlPrototype,
    ProfilePrototype, ProfileType,
};
pub use report::{
    Assessment, ComplianceStatus, Evaluation, EvaluationCollection, EvaluationStatus,
    EvaluationTarget, Report, ReportCollection, ReportProfile, ReportResource,
    ReportResourceCollection,
};
pub use rule::{
    AdditionalTargetAttribute, Rule, RuleCollection, RulePrototype, RuleTarget, RuleType,
};
pub use scope::{
    Scope, ScopeCollection, ScopePatch, ScopeProperty, ScopePrototype, Subscope,
    SubscopeCollection,
};

#[cfg(test)]
mod tests;
