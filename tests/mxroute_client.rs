mod common;

use httpmock::prelude::*;
use mxroute_alias_gateway::domain::{ForwarderProvider, NewForwarder, ProviderError};
use mxroute_alias_gateway::infrastructure::MxrouteClient;
use serde_json::json;

fn client(mxroute: &MockServer) -> MxrouteClient {
    MxrouteClient::new(&common::mxroute_config(&mxroute.base_url())).unwrap()
}

#[tokio::test]
async fn test_create_forwarder_sends_headers_and_body() {
    let mxroute = MockServer::start_async().await;
    let mock = mxroute
        .mock_async(|when, then| {
            when.method(POST)
                .path("/domains/example.com/forwarders")
                .header("x-server", common::MX_SERVER)
                .header("x-username", common::MX_USERNAME)
                .header("x-api-key", common::MX_API_KEY)
                .header("content-type", "application/json")
                .json_body(json!({
                    "alias": "com-example-0262",
                    "destinations": ["dest@example.com"]
                }));
            then.status(201).json_body(json!({ "success": true }));
        })
        .await;

    let result = client(&mxroute)
        .create_forwarder(
            "example.com",
            &NewForwarder::new("com-example-0262", "dest@example.com"),
        )
        .await;

    assert!(result.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_forwarder_is_not_retried() {
    let mxroute = MockServer::start_async().await;
    let mock = mxroute
        .mock_async(|when, then| {
            when.any_request();
            then.status(503).body("unavailable");
        })
        .await;

    let result = client(&mxroute)
        .create_forwarder("example.com", &NewForwarder::new("foo", "dest@example.com"))
        .await;

    assert!(matches!(result, Err(ProviderError::Request(_))));
    assert_eq!(mock.hits_async().await, 1);
}

#[tokio::test]
async fn test_list_forwarders_returns_data_field() {
    let mxroute = MockServer::start_async().await;
    mxroute
        .mock_async(|when, then| {
            when.method(GET).path("/domains/example.com/forwarders");
            then.status(200).json_body(json!({
                "data": [{ "alias": "foo", "destinations": ["dest@example.com"] }]
            }));
        })
        .await;

    let list = client(&mxroute).list_forwarders("example.com").await.unwrap();

    assert_eq!(list.status, 200);
    assert_eq!(
        list.forwarders,
        json!([{ "alias": "foo", "destinations": ["dest@example.com"] }])
    );
}

#[tokio::test]
async fn test_list_forwarders_invalid_json() {
    let mxroute = MockServer::start_async().await;
    mxroute
        .mock_async(|when, then| {
            when.method(GET).path("/domains/example.com/forwarders");
            then.status(200).body("<html>");
        })
        .await;

    let result = client(&mxroute).list_forwarders("example.com").await;

    assert!(matches!(result, Err(ProviderError::Request(_))));
}

#[tokio::test]
async fn test_delete_forwarder_returns_status() {
    let mxroute = MockServer::start_async().await;
    mxroute
        .mock_async(|when, then| {
            when.method(DELETE).path("/domains/example.com/forwarders/foo");
            then.status(204);
        })
        .await;

    let status = client(&mxroute)
        .delete_forwarder("example.com", "foo")
        .await
        .unwrap();

    assert_eq!(status, 204);
}

#[tokio::test]
async fn test_connection_refused() {
    let client = MxrouteClient::new(&common::mxroute_config("http://127.0.0.1:9")).unwrap();

    let result = client.list_forwarders("example.com").await;

    assert!(matches!(result, Err(ProviderError::Request(_))));
}
