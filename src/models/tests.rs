//! Tests for the models module

use super::*;
use crate::pagination::Page;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_rule_collection_into_page() {
    let body = json!({
        "limit": 2,
        "total_count": 5,
        "first": {"href": "https://svc/instances/i/v3/rules?limit=2"},
        "next": {
            "href": "https://svc/instances/i/v3/rules?limit=2&start=abc",
            "start": "abc"
        },
        "rules": [
            {
                "id": "rule-1",
                "description": "Buckets must be encrypted",
                "type": "user_defined",
                "target": {"service_name": "cloud-object-storage", "resource_kind": "bucket"},
                "required_config": {"property": "encryption", "operator": "is_true"},
                "created_on": "2024-01-15T10:00:00Z"
            },
            {"id": "rule-2", "type": "system_defined"}
        ]
    });

    let collection: RuleCollection = serde_json::from_value(body).unwrap();
    let page: Page<Rule> = collection.into();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].rule_type, RuleType::UserDefined);
    assert_eq!(page.items[1].rule_type, RuleType::SystemDefined);
    assert_eq!(
        page.items[0].target.as_ref().unwrap().resource_kind,
        "bucket"
    );
    assert!(page.items[0].created_on.is_some());
    assert_eq!(page.next_token(), Some("abc"));
    assert_eq!(page.total_count, Some(5));
    assert_eq!(page.limit, Some(2));
}

#[test]
fn test_last_page_has_no_next() {
    let body = json!({"limit": 50, "total_count": 1, "profiles": [{"id": "p-1"}]});
    let collection: ProfileCollection = serde_json::from_value(body).unwrap();
    let page: Page<Profile> = collection.into();

    assert!(!page.has_more());
    assert_eq!(page.items[0].profile_type, ProfileType::Custom);
}

#[test]
fn test_missing_array_is_empty_page() {
    let collection: ScopeCollection = serde_json::from_value(json!({"limit": 10})).unwrap();
    assert!(collection.scopes.is_empty());
}

#[test]
fn test_unknown_fields_ignored() {
    let scope: Scope = serde_json::from_value(json!({
        "id": "scope-1",
        "name": "prod",
        "properties": [{"name": "scope_id", "value": "acct-1"}],
        "future_field": {"nested": true}
    }))
    .unwrap();
    assert_eq!(scope.properties[0].value, json!("acct-1"));
}

#[test]
fn test_unknown_status_falls_back() {
    let evaluation: Evaluation =
        serde_json::from_value(json!({"status": "not_applicable"})).unwrap();
    assert_eq!(evaluation.status, EvaluationStatus::Unknown);

    let resource: ReportResource =
        serde_json::from_value(json!({"status": "not_compliant"})).unwrap();
    assert_eq!(resource.status, ComplianceStatus::NotCompliant);
    assert_eq!(resource.status.to_string(), "not_compliant");
}

#[test]
fn test_scan_schedule_wire_names() {
    assert_eq!(
        serde_json::to_value(ScanSchedule::Every7Days).unwrap(),
        json!("every_7_days")
    );
    let parsed: ScanSchedule = serde_json::from_value(json!("every_30_days")).unwrap();
    assert_eq!(parsed, ScanSchedule::Every30Days);
}

#[test]
fn test_rule_prototype_skips_empty_fields() {
    let prototype = RulePrototype {
        description: "Require MFA".to_string(),
        target: RuleTarget {
            service_name: "iam-identity".to_string(),
            resource_kind: "accountsettings".to_string(),
            ..Default::default()
        },
        required_config: json!({"property": "mfa", "operator": "is_true"}),
        ..Default::default()
    };

    let value = serde_json::to_value(&prototype).unwrap();
    assert_eq!(
        value,
        json!({
            "description": "Require MFA",
            "target": {"service_name": "iam-identity", "resource_kind": "accountsettings"},
            "required_config": {"property": "mfa", "operator": "is_true"}
        })
    );
}

#[test]
fn test_attachment_prototype_serialization() {
    let prototype = AttachmentPrototype {
        attachments: vec![NewAttachment {
            name: "nightly".to_string(),
            scope: vec![json!("scope-1")],
            status: AttachmentStatus::Enabled,
            schedule: ScanSchedule::Daily,
            ..Default::default()
        }],
    };

    let value = serde_json::to_value(&prototype).unwrap();
    assert_eq!(value["attachments"][0]["status"], "enabled");
    assert_eq!(value["attachments"][0]["schedule"], "daily");
    assert!(value["attachments"][0].get("description").is_none());
}

#[test]
fn test_scope_patch_only_sends_set_fields() {
    let patch = ScopePatch {
        name: Some("renamed".to_string()),
        description: None,
    };
    assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"name": "renamed"}));
}

#[test]
fn test_enum_display() {
    assert_eq!(RuleType::SystemDefined.to_string(), "system_defined");
    assert_eq!(ControlLibraryType::Predefined.to_string(), "predefined");
    assert_eq!(ProfileType::Custom.to_string(), "custom");
    assert_eq!(EvaluationStatus::Failure.to_string(), "failure");
}
