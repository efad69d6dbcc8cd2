mod common;

use axum::http::StatusCode;
use httpmock::prelude::*;

#[tokio::test]
async fn test_delete_success() {
    let mxroute = MockServer::start_async().await;
    let mock = mxroute
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/domains/example.com/forwarders/foo")
                .header("x-api-key", common::MX_API_KEY);
            then.status(204);
        })
        .await;

    let server = common::make_server(&mxroute.base_url());

    let response = server
        .delete("/delete/foo@example.com")
        .authorization_bearer(common::TEST_TOKEN)
        .await;

    response.assert_status(StatusCode::NO_CONTENT);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_returns_message() {
    let mxroute = MockServer::start_async().await;
    mxroute
        .mock_async(|when, then| {
            when.method(DELETE).path("/domains/example.com/forwarders/foo");
            then.status(200);
        })
        .await;

    let server = common::make_server(&mxroute.base_url());

    let response = server
        .delete("/delete/foo@example.com")
        .authorization_bearer(common::TEST_TOKEN)
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Deleted.");
}

#[tokio::test]
async fn test_delete_invalid_email() {
    let mxroute = MockServer::start_async().await;
    let mock = mxroute
        .mock_async(|when, then| {
            when.any_request();
            then.status(200);
        })
        .await;

    let server = common::make_server(&mxroute.base_url());

    for email in ["invalid-email", "a@b@example.com"] {
        let response = server
            .delete(&format!("/delete/{email}"))
            .authorization_bearer(common::TEST_TOKEN)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"], "Invalid email format.");
    }

    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_delete_upstream_failure() {
    let mxroute = MockServer::start_async().await;
    mxroute
        .mock_async(|when, then| {
            when.method(DELETE).path("/domains/example.com/forwarders/foo");
            then.status(500).body("boom");
        })
        .await;

    let server = common::make_server(&mxroute.base_url());

    let response = server
        .delete("/delete/foo@example.com")
        .authorization_bearer(common::TEST_TOKEN)
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert!(json["error"].as_str().unwrap().contains("500"));
}
