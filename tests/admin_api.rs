//! Admin API integration tests: CRUD, validation, and persistence.

use serde_json::{json, Value};

use mock_service::store::RuleStore;

mod common;

#[tokio::test]
async fn health_endpoint_reports_service() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::start_server(dir.path().join("mock_rules.json")).await;
    let client = common::client();

    let res = client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"status": "healthy", "service": "mock-service"}));

    server.shutdown.trigger();
}

#[tokio::test]
async fn rule_crud_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::start_server(dir.path().join("mock_rules.json")).await;
    let client = common::client();

    // Create
    let res = client
        .post(server.url("/admin/rules"))
        .json(&json!({
            "path": "/api/pay/notify",
            "method": "post",
            "description": "payment gateway callback",
            "response_body": {"code": 0},
            "status_code": 200,
            "delay": 0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "rule created");
    let id = body["rule"]["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 8);
    assert_eq!(body["rule"]["method"], "POST");

    // List
    let body: Value = client
        .get(server.url("/admin/rules"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["rules"].as_array().unwrap().len(), 1);

    // Get
    let res = client
        .get(server.url(&format!("/admin/rules/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let rule: Value = res.json().await.unwrap();
    assert_eq!(rule["path"], "/api/pay/notify");

    // Partial update: only the status code changes
    let res = client
        .put(server.url(&format!("/admin/rules/{}", id)))
        .json(&json!({"status_code": 503}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["rule"]["status_code"], 503);
    assert_eq!(body["rule"]["path"], "/api/pay/notify");
    assert_eq!(body["rule"]["response_body"], json!({"code": 0}));

    // Delete
    let res = client
        .delete(server.url(&format!("/admin/rules/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let res = client
        .get(server.url(&format!("/admin/rules/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    server.shutdown.trigger();
}

#[tokio::test]
async fn absent_ids_return_404_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::start_server(dir.path().join("mock_rules.json")).await;
    let client = common::client();

    for res in [
        client
            .get(server.url("/admin/rules/deadbeef"))
            .send()
            .await
            .unwrap(),
        client
            .put(server.url("/admin/rules/deadbeef"))
            .json(&json!({"path": "/x"}))
            .send()
            .await
            .unwrap(),
        client
            .delete(server.url("/admin/rules/deadbeef"))
            .send()
            .await
            .unwrap(),
    ] {
        assert_eq!(res.status(), 404);
        let body: Value = res.json().await.unwrap();
        assert!(body["message"].is_string());
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn invalid_field_values_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::start_server(dir.path().join("mock_rules.json")).await;
    let client = common::client();

    let res = client
        .post(server.url("/admin/rules"))
        .json(&json!({"path": "/x", "status_code": 600}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let res = client
        .post(server.url("/admin/rules"))
        .json(&json!({"path": "/x", "delay": -1.0}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    // Nothing was stored.
    let body: Value = client
        .get(server.url("/admin/rules"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(body["rules"].as_array().unwrap().is_empty());

    server.shutdown.trigger();
}

#[tokio::test]
async fn admin_page_is_served() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::start_server(dir.path().join("mock_rules.json")).await;
    let client = common::client();

    let res = client.get(server.url("/admin")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let html = res.text().await.unwrap();
    assert!(html.contains("Mock Service Admin"));

    server.shutdown.trigger();
}

#[tokio::test]
async fn mutations_persist_to_the_rules_file() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("mock_rules.json");
    let server = common::start_server(data_file.clone()).await;
    let client = common::client();

    let body: Value = client
        .post(server.url("/admin/rules"))
        .json(&json!({"path": "/api/q", "response_body": {"n": 1}}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let created = body["rule"].clone();

    // A fresh store over the same file sees the identical record.
    let reloaded = RuleStore::open(data_file).unwrap();
    let rules = reloaded.list_all();
    assert_eq!(rules.len(), 1);
    assert_eq!(serde_json::to_value(&rules[0]).unwrap(), created);

    server.shutdown.trigger();
}
