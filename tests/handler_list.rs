mod common;

use axum::http::StatusCode;
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_list_success() {
    let mxroute = MockServer::start_async().await;
    let mock = mxroute
        .mock_async(|when, then| {
            when.method(GET)
                .path("/domains/example.com/forwarders")
                .header("x-server", common::MX_SERVER)
                .header("x-username", common::MX_USERNAME)
                .header("x-api-key", common::MX_API_KEY);
            then.status(200)
                .json_body(json!({ "data": [{ "alias": "foo" }] }));
        })
        .await;

    let server = common::make_server(&mxroute.base_url());

    let response = server
        .get("/list/example.com")
        .authorization_bearer(common::TEST_TOKEN)
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!([{ "alias": "foo" }])
    );

    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_passes_upstream_status() {
    let mxroute = MockServer::start_async().await;
    mxroute
        .mock_async(|when, then| {
            when.method(GET).path("/domains/example.com/forwarders");
            then.status(203).json_body(json!({ "data": [] }));
        })
        .await;

    let server = common::make_server(&mxroute.base_url());

    let response = server
        .get("/list/example.com")
        .authorization_bearer(common::TEST_TOKEN)
        .await;

    response.assert_status(StatusCode::NON_AUTHORITATIVE_INFORMATION);
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[tokio::test]
async fn test_list_missing_data() {
    let mxroute = MockServer::start_async().await;
    mxroute
        .mock_async(|when, then| {
            when.method(GET).path("/domains/example.com/forwarders");
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;

    let server = common::make_server(&mxroute.base_url());

    let response = server
        .get("/list/example.com")
        .authorization_bearer(common::TEST_TOKEN)
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert!(json["error"].as_str().unwrap().contains("forwarder data"));
}

#[tokio::test]
async fn test_list_upstream_failure() {
    let mxroute = MockServer::start_async().await;
    mxroute
        .mock_async(|when, then| {
            when.method(GET).path("/domains/example.com/forwarders");
            then.status(404).body("not found");
        })
        .await;

    let server = common::make_server(&mxroute.base_url());

    let response = server
        .get("/list/example.com")
        .authorization_bearer(common::TEST_TOKEN)
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert!(json["error"].as_str().unwrap().contains("404"));
}
