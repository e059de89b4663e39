//! Integration tests for the HTTP client.
//!
//! A local `wiremock` server stands in for the dashboard backend, so these
//! tests cover the headers, request bodies and error mapping on the wire.

use catalog_ops::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use catalog_ops::{ApiBaseUrl, CatalogConfig, InvalidHttpRequestError, Session};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_config(base_url: &str) -> CatalogConfig {
    CatalogConfig::builder()
        .api_base_url(ApiBaseUrl::new(base_url).unwrap())
        .user_agent_prefix("OpsDesk/2.0")
        .build()
        .unwrap()
}

fn create_test_session(access_token: &str) -> Session {
    Session::new("test-session", Some("user-1".to_string()), access_token, None)
}

#[tokio::test]
async fn test_get_sends_bearer_token_and_accept_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(header("Authorization", "Bearer secret-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(
        &create_test_session("secret-token"),
        &create_test_config(&server.uri()),
    );
    let request = HttpRequest::builder(HttpMethod::Get, "products")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_put_sends_json_body_and_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/products/p-1"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"price": 35.5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "p-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_test_session("t"), &create_test_config(&server.uri()));
    let request = HttpRequest::builder(HttpMethod::Put, "products/p-1")
        .json(json!({"price": 35.5}))
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.body["id"], "p-1");
}

#[tokio::test]
async fn test_query_params_and_user_agent_prefix() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("platform", "shopify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_test_session("t"), &create_test_config(&server.uri()));
    assert!(client.default_headers()["User-Agent"].starts_with("OpsDesk/2.0 | "));

    let request = HttpRequest::builder(HttpMethod::Get, "products")
        .query_param("platform", "shopify")
        .build()
        .unwrap();

    assert!(client.request(request).await.is_ok());
}

#[tokio::test]
async fn test_error_response_keeps_backend_message_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/products/p-1"))
        .respond_with(
            ResponseTemplate::new(409)
                .insert_header("x-request-id", "req-42")
                .set_body_json(json!({"message": "SKU already exists"})),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_test_session("t"), &create_test_config(&server.uri()));
    let request = HttpRequest::builder(HttpMethod::Put, "products/p-1")
        .json(json!({"sku": "TSH-001"}))
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();

    match error {
        HttpError::Response(e) => {
            assert_eq!(e.code, 409);
            assert_eq!(e.message, "SKU already exists");
            assert_eq!(e.error_reference.as_deref(), Some("req-42"));
            assert_eq!(e.body["message"], "SKU already exists");
        }
        other => panic!("Expected Response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_becomes_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_test_session("t"), &create_test_config(&server.uri()));
    let request = HttpRequest::builder(HttpMethod::Get, "products")
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();

    assert_eq!(error.status(), Some(502));
    assert_eq!(error.to_string(), "Bad Gateway");
}

#[tokio::test]
async fn test_each_request_is_sent_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"error": "maintenance"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_test_session("t"), &create_test_config(&server.uri()));
    let request = HttpRequest::builder(HttpMethod::Get, "products")
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    assert_eq!(error.to_string(), "maintenance");
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_sending() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_test_session("t"), &create_test_config(&server.uri()));
    let request = HttpRequest {
        method: HttpMethod::Delete,
        path: "users/preferences/products".to_string(),
        body: Some(json!({"columns": []})),
        query: Vec::new(),
        headers: Vec::new(),
    };

    let error = client.request(request).await.unwrap_err();

    assert!(matches!(
        error,
        HttpError::InvalidRequest(InvalidHttpRequestError::UnexpectedBody {
            method: HttpMethod::Delete
        })
    ));
}
