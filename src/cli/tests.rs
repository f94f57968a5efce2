//! Tests for the CLI module

use super::*;
use crate::http::{HttpClient, HttpClientConfig};
use crate::service::GovernanceService;
use clap::Parser;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> GovernanceService {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .max_retries(0)
        .no_rate_limit()
        .build();
    GovernanceService::new(HttpClient::with_config(config).unwrap(), "inst-1")
}

fn runner(args: &[&str]) -> Runner {
    let mut argv = vec!["governance-client"];
    argv.extend_from_slice(args);
    Runner::new(Cli::try_parse_from(argv).unwrap())
}

async fn mount_two_rule_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/instances/inst-1/v3/rules"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 2,
            "next": {"start": "page-2"},
            "rules": [{"id": "r-1"}]
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/instances/inst-1/v3/rules"))
        .and(query_param("start", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 2,
            "rules": [{"id": "r-2"}]
        })))
        .mount(server)
        .await;
}

#[test]
fn test_parse_global_flags() {
    let cli = Cli::try_parse_from([
        "governance-client",
        "rules",
        "--search",
        "mfa",
        "--page-size",
        "50",
        "--format",
        "pretty",
        "-v",
    ])
    .unwrap();

    assert_eq!(cli.page_size, Some(50));
    assert_eq!(cli.format, OutputFormat::Pretty);
    assert!(cli.verbose);
    assert!(!cli.first_page);
    assert_eq!(
        cli.command,
        Commands::Rules {
            search: Some("mfa".to_string()),
            service_name: None
        }
    );
}

#[test]
fn test_report_children_require_report_id() {
    assert!(Cli::try_parse_from(["governance-client", "evaluations"]).is_err());
    let cli =
        Cli::try_parse_from(["governance-client", "resources", "--report-id", "rep-1"]).unwrap();
    assert_eq!(cli.command.resource(), "resources");
}

#[test]
fn test_control_libraries_kebab_case() {
    let cli = Cli::try_parse_from(["governance-client", "control-libraries"]).unwrap();
    assert_eq!(cli.command, Commands::ControlLibraries);
    assert_eq!(cli.format, OutputFormat::Json);
}

#[tokio::test]
async fn test_list_drains_every_page() {
    let server = MockServer::start().await;
    mount_two_rule_pages(&server).await;

    let listing = runner(&["rules"])
        .list(&service_for(&server))
        .await
        .unwrap();

    assert_eq!(listing.resource, "rules");
    let ids: Vec<&str> = listing
        .items
        .iter()
        .filter_map(|item| item["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["r-1", "r-2"]);
    assert_eq!(listing.next_start, None);
    assert_eq!(listing.total_count, Some(2));
}

#[tokio::test]
async fn test_list_first_page_keeps_token() {
    let server = MockServer::start().await;
    mount_two_rule_pages(&server).await;

    let listing = runner(&["rules", "--first-page"])
        .list(&service_for(&server))
        .await
        .unwrap();

    assert_eq!(listing.items.len(), 1);
    assert_eq!(listing.next_start.as_deref(), Some("page-2"));
}

#[tokio::test]
async fn test_attachments_route_by_profile() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/instances/inst-1/v3/profiles/p-1/attachments"))
        .and(query_param("limit", "5"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"attachments": [{"id": "a-1", "name": "nightly"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/instances/inst-1/v3/attachments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"attachments": []})))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let scoped = runner(&["attachments", "--profile-id", "p-1", "--page-size", "5"])
        .list(&service)
        .await
        .unwrap();
    assert_eq!(scoped.items[0]["name"], "nightly");

    let all = runner(&["attachments"]).list(&service).await.unwrap();
    assert!(all.items.is_empty());
}

#[tokio::test]
async fn test_list_propagates_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let err = runner(&["profiles"])
        .list(&service_for(&server))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(403));
}
