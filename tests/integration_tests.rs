//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: config → authenticated service → pagers
//! following continuation tokens across real HTTP requests

use futures::TryStreamExt;
use governance_client::{
    Error, ListReportEvaluationsParams, ListRulesParams, ListScopesParams, ServiceConfig,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ServiceConfig {
    let yaml = format!(
        r#"
service_url: {uri}
instance_id: inst-1
auth:
  type: iam
  api_key: test-key
  token_url: {uri}/identity/token
http:
  max_retries: 0
  rate_limit: null
"#,
        uri = server.uri()
    );
    ServiceConfig::from_yaml_str(&yaml).unwrap()
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .and(body_string_contains("apikey=test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "iam-token",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Pager Integration Tests
// ============================================================================

#[tokio::test]
async fn test_rules_pager_end_to_end() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    let pages = [
        (None, Some("t2"), vec!["r-1", "r-2"]),
        (Some("t2"), Some("t3"), vec!["r-3", "r-4"]),
        (Some("t3"), None, vec!["r-5"]),
    ];
    for (start, next, ids) in pages {
        let rules: Vec<_> = ids.iter().map(|id| json!({"id": id})).collect();
        let mut body = json!({"limit": 2, "total_count": 5, "rules": rules});
        if let Some(next) = next {
            body["next"] = json!({"href": format!("{}/next", server.uri()), "start": next});
        }

        let mock = Mock::given(method("GET"))
            .and(path("/instances/inst-1/v3/rules"))
            .and(header("Authorization", "Bearer iam-token"))
            .and(query_param("limit", "2"));
        let mock = match start {
            Some(start) => mock.and(query_param("start", start)),
            None => mock.and(query_param_is_missing("start")),
        };
        mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let service = config_for(&server).build_service().unwrap();
    let mut pager = service.rules_pager(ListRulesParams {
        limit: Some(2),
        ..Default::default()
    });

    let mut page_sizes = Vec::new();
    let mut ids = Vec::new();
    while pager.has_next() {
        let page = pager.get_next().await.unwrap();
        page_sizes.push(page.len());
        ids.extend(page.into_iter().map(|rule| rule.id));
    }

    assert_eq!(page_sizes, vec![2, 2, 1]);
    assert_eq!(ids, vec!["r-1", "r-2", "r-3", "r-4", "r-5"]);
    assert_eq!(pager.total_count(), Some(5));
    assert!(matches!(
        pager.get_next().await,
        Err(Error::InvalidUsage { .. })
    ));
}

#[tokio::test]
async fn test_failed_page_can_be_retried() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/instances/inst-1/v3/scopes"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": {"start": "s2"},
            "scopes": [{"id": "scope-1", "name": "prod"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/instances/inst-1/v3/scopes"))
        .and(query_param("start", "s2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("transient"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/instances/inst-1/v3/scopes"))
        .and(query_param("start", "s2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "scopes": [{"id": "scope-2", "name": "dev"}]
        })))
        .mount(&server)
        .await;

    let service = config_for(&server).build_service().unwrap();
    let mut pager = service.scopes_pager(ListScopesParams::default());

    pager.get_next().await.unwrap();
    let err = pager.get_next().await.unwrap_err();
    assert_eq!(err.status(), Some(500));

    // The token survives the failure, so the same page is requested again
    assert_eq!(pager.next_token(), Some("s2"));
    let page = pager.get_next().await.unwrap();
    assert_eq!(page[0].id, "scope-2");
    assert!(!pager.has_next());
}

#[tokio::test]
async fn test_evaluations_stream() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/instances/inst-1/v3/reports/rep-1/evaluations"))
        .and(query_param("status", "failure"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": {"start": "e2"},
            "evaluations": [{"control_id": "c-1", "status": "failure"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/instances/inst-1/v3/reports/rep-1/evaluations"))
        .and(query_param("start", "e2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "evaluations": [{"control_id": "c-2", "status": "failure"}]
        })))
        .mount(&server)
        .await;

    let service = config_for(&server).build_service().unwrap();
    let params = ListReportEvaluationsParams {
        status: Some(governance_client::models::EvaluationStatus::Failure),
        ..ListReportEvaluationsParams::new("rep-1")
    };
    let controls: Vec<String> = service
        .report_evaluations_pager(params)
        .into_stream()
        .map_ok(|evaluation| evaluation.control_id.unwrap_or_default())
        .try_collect()
        .await
        .unwrap();

    assert_eq!(controls, vec!["c-1", "c-2"]);
}

#[tokio::test]
async fn test_get_all_discards_partial_results() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/instances/inst-1/v3/rules"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": {"start": "broken"},
            "rules": [{"id": "r-1"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/instances/inst-1/v3/rules"))
        .and(query_param("start", "broken"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid start token"))
        .mount(&server)
        .await;

    let service = config_for(&server).build_service().unwrap();
    let err = service
        .rules_pager(ListRulesParams::default())
        .get_all()
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "invalid start token");
        }
        other => panic!("unexpected error: {other}"),
    }
}
