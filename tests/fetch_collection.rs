mod common;

use common::{capture_logs, errors_mentioning, respond_capturing, respond_once, unreachable_url};
use remex::{
    fetch_collection, get_categories, get_expenses, get_reminders, try_fetch_collection, Config,
    DisplayFields, DomainRecord, FailurePolicy, FetchError, RecordListView, RemoteCollection,
    ViewState,
};
use serde_json::json;
use std::sync::Arc;

const RENT: &str =
    r#"{"expenses": [{"id":1,"title":"Rent","description":"Monthly","date":"2024-01-01"}]}"#;

fn expenses_url(base: &str) -> String {
    format!("{}/api/expenses", base)
}

#[tokio::test]
async fn test_success_returns_array_and_renders_it() {
    capture_logs();
    let url = expenses_url(&respond_once("200 OK", RENT).await);
    let client = reqwest::Client::new();

    let records = fetch_collection(&client, &url, "expenses", None).await;

    assert_eq!(
        records,
        vec![DomainRecord::new(json!({
            "id": 1,
            "title": "Rent",
            "description": "Monthly",
            "date": "2024-01-01",
        }))]
    );
    assert_eq!(errors_mentioning(&url), 0);

    let base = respond_once("200 OK", RENT).await;
    let source = RemoteCollection::new(client, expenses_url(&base), "expenses");
    let mut view = RecordListView::new("Expenses", Arc::new(source), DisplayFields::reminder());
    view.mount();
    view.settle().await;

    let section = view.render();
    assert_eq!(section.nodes.len(), 1);
    assert_eq!(section.nodes[0].key, "1");
    assert_eq!(section.nodes[0].values, vec!["Rent", "Monthly", "2024-01-01"]);
}

#[tokio::test]
async fn test_empty_collection() {
    capture_logs();
    let base = respond_once("200 OK", r#"{"expenses": []}"#).await;
    let client = reqwest::Client::new();

    let source = RemoteCollection::new(client, expenses_url(&base), "expenses");
    let mut view = RecordListView::new("Expenses", Arc::new(source), DisplayFields::expense());
    view.mount();
    view.settle().await;

    assert_eq!(view.state(), &ViewState::Loaded(Vec::new()));
    assert!(view.render().nodes.is_empty());
    assert_eq!(errors_mentioning(&base), 0);
}

#[tokio::test]
async fn test_network_failure_logs_once() {
    capture_logs();
    let url = expenses_url(&unreachable_url().await);

    let records = fetch_collection(&reqwest::Client::new(), &url, "expenses", None).await;

    assert!(records.is_empty());
    assert_eq!(errors_mentioning(&url), 1);
}

#[tokio::test]
async fn test_malformed_json_logs_once() {
    capture_logs();
    let url = expenses_url(&respond_once("200 OK", "<html>not json</html>").await);

    let records = fetch_collection(&reqwest::Client::new(), &url, "expenses", None).await;

    assert!(records.is_empty());
    assert_eq!(errors_mentioning(&url), 1);
}

#[tokio::test]
async fn test_missing_field_is_empty() {
    capture_logs();
    let url = expenses_url(&respond_once("200 OK", r#"{"unexpected": []}"#).await);

    let records = fetch_collection(&reqwest::Client::new(), &url, "expenses", None).await;

    assert!(records.is_empty());
    assert_eq!(errors_mentioning(&url), 1);
}

#[tokio::test]
async fn test_error_status_is_a_failure() {
    capture_logs();
    let url = expenses_url(&respond_once("500 Internal Server Error", RENT).await);

    let records = fetch_collection(&reqwest::Client::new(), &url, "expenses", None).await;

    assert!(records.is_empty());
    assert_eq!(errors_mentioning(&url), 1);
}

#[tokio::test]
async fn test_tagged_result_distinguishes_failures() {
    let client = reqwest::Client::new();

    let url = expenses_url(&respond_once("200 OK", "{").await);
    let err = try_fetch_collection(&client, &url, "expenses", None).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));

    let url = expenses_url(&respond_once("200 OK", r#"{"unexpected": []}"#).await);
    let err = try_fetch_collection(&client, &url, "expenses", None).await.unwrap_err();
    assert!(matches!(err, FetchError::MissingField(_)));

    let url = expenses_url(&respond_once("404 Not Found", "{}").await);
    let err = try_fetch_collection(&client, &url, "expenses", None).await.unwrap_err();
    assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 404));

    let url = expenses_url(&unreachable_url().await);
    let err = try_fetch_collection(&client, &url, "expenses", None).await.unwrap_err();
    assert!(matches!(err, FetchError::Request(_)));
}

#[tokio::test]
async fn test_surface_policy_reaches_view() {
    capture_logs();
    let base = respond_once("200 OK", "not json").await;
    let source = RemoteCollection::new(reqwest::Client::new(), expenses_url(&base), "expenses");
    let mut view = RecordListView::new("Expenses", Arc::new(source), DisplayFields::expense())
        .with_policy(FailurePolicy::Surface);

    view.mount();
    view.settle().await;

    assert!(view.state().failure().unwrap().contains("not valid JSON"));
    assert!(view.render().notice.is_some());
    assert_eq!(errors_mentioning(&base), 0);
}

#[tokio::test]
async fn test_get_expenses_uses_config() {
    let base = respond_once(
        "200 OK",
        r#"{"expenses": [{"id":"e1","amount":12.5},{"id":"e2","amount":3}]}"#,
    )
    .await;
    let config = Config {
        api_base_url: base,
        ..Config::default()
    };

    let records = get_expenses(&config).await;

    let ids: Vec<String> = records.iter().map(DomainRecord::id).collect();
    assert_eq!(ids, vec!["e1", "e2"]);
    assert_eq!(records[0].field("amount"), "12.5");
}

#[tokio::test]
async fn test_render_keys_are_stable() {
    let base = respond_once(
        "200 OK",
        r#"{"reminders": [
            {"id": 9, "title": "Vet", "description": "Annual shots", "date": "2024-06-02"},
            {"id": 4, "title": "Car service", "date": "2024-06-09"},
            {"id": 7, "title": "Birthday", "description": "Sam", "date": "2024-07-15"}
        ]}"#,
    )
    .await;
    let config = Config {
        api_base_url: base,
        ..Config::default()
    };
    let source = RemoteCollection::reminders(&config).unwrap();
    let mut view = RecordListView::reminders(Arc::new(source));
    view.mount();
    view.settle().await;

    let first = view.render();
    let second = view.render();
    assert_eq!(first, second);

    let keys: Vec<&str> = first.nodes.iter().map(|n| n.key.as_str()).collect();
    assert_eq!(keys, vec!["9", "4", "7"]);
    assert_eq!(first.nodes[1].values, vec!["Car service", "", "2024-06-09"]);
}

#[tokio::test]
async fn test_token_is_sent_as_bearer() {
    let (base, request) = respond_capturing("200 OK", RENT).await;
    let config = Config {
        api_base_url: base,
        api_token: Some("s3cret".to_string()),
        ..Config::default()
    };

    let records = get_expenses(&config).await;

    assert_eq!(records.len(), 1);
    let head = request.await.unwrap().to_ascii_lowercase();
    assert!(head.contains("authorization: bearer s3cret\r\n"));
}

#[tokio::test]
async fn test_no_token_no_authorization_header() {
    let (base, request) = respond_capturing("200 OK", RENT).await;
    let config = Config {
        api_base_url: base,
        ..Config::default()
    };

    let records = get_expenses(&config).await;

    assert_eq!(records.len(), 1);
    let head = request.await.unwrap().to_ascii_lowercase();
    assert!(!head.contains("authorization:"));
}

#[tokio::test]
async fn test_get_categories() {
    let (base, request) = respond_capturing(
        "200 OK",
        r#"{"categories": [{"id":3,"name":"Food","description":"Groceries"},{"id":5,"name":"Rent"}]}"#,
    )
    .await;
    let config = Config {
        api_base_url: base,
        ..Config::default()
    };

    let records = get_categories(&config).await;

    let ids: Vec<String> = records.iter().map(DomainRecord::id).collect();
    assert_eq!(ids, vec!["3", "5"]);
    assert!(request.await.unwrap().starts_with("GET /api/categories "));

    let section = remex::view::render_section(
        "Categories",
        &DisplayFields::category(),
        &ViewState::Loaded(records),
    );
    assert_eq!(section.nodes[1].values, vec!["Rent", ""]);
}

#[tokio::test]
async fn test_unreachable_view_absorbs_and_logs_once() {
    capture_logs();
    let url = expenses_url(&unreachable_url().await);
    let source = RemoteCollection::new(reqwest::Client::new(), url.clone(), "expenses");
    let mut view = RecordListView::new("Expenses", Arc::new(source), DisplayFields::expense());

    view.mount();
    view.settle().await;

    assert_eq!(view.state(), &ViewState::Loaded(Vec::new()));
    let section = view.render();
    assert!(section.nodes.is_empty());
    assert!(section.notice.is_none());
    assert_eq!(errors_mentioning(&url), 1);
}

#[tokio::test]
async fn test_getters_on_unreachable_base_log_once() {
    capture_logs();
    let config = Config {
        api_base_url: unreachable_url().await,
        ..Config::default()
    };

    assert!(get_reminders(&config).await.is_empty());
    assert_eq!(errors_mentioning(&config.endpoint_url(&config.reminders_path)), 1);

    assert!(get_expenses(&config).await.is_empty());
    assert_eq!(errors_mentioning(&config.endpoint_url(&config.expenses_path)), 1);
}
