use dnsimple_rs::{Dnsimple, RequestOptions, Verb};
use pretty_assertions::assert_eq;
use serde_json::json;


use test_helpers::mock_client;

#[test]
fn test_client_defaults_to_production_endpoint() {
    let client = Dnsimple::new();
    assert_eq!(client.api_endpoint(), "https://api.dnsimple.com/");
}

#[test]
fn test_client_appends_missing_trailing_slash() {
    let client = Dnsimple::new().with_api_endpoint("https://api.example.com/missing/slash");
    assert_eq!(client.api_endpoint(), "https://api.example.com/missing/slash/");
}

#[test]
fn test_client_keeps_existing_trailing_slash() {
    let client = Dnsimple::new().with_api_endpoint("https://api.example.com/");
    assert_eq!(client.api_endpoint(), "https://api.example.com/");
}

#[tokio::test]
async fn test_get_dispatches_a_get_request() {
    let (client, transport) = mock_client();

    client.get("test", RequestOptions::new()).await.unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, Verb::Get);
    assert_eq!(request.url, "https://api.dnsimple.com/test");
}

#[tokio::test]
async fn test_post_dispatches_a_post_request() {
    let (client, transport) = mock_client();

    client.post("test", RequestOptions::new()).await.unwrap();

    assert_eq!(transport.last_request().method, Verb::Post);
}

#[tokio::test]
async fn test_put_dispatches_a_put_request() {
    let (client, transport) = mock_client();

    client.put("test", RequestOptions::new()).await.unwrap();

    assert_eq!(transport.last_request().method, Verb::Put);
}

#[tokio::test]
async fn test_delete_dispatches_a_delete_request() {
    let (client, transport) = mock_client();

    client.delete("test", RequestOptions::new()).await.unwrap();

    assert_eq!(transport.last_request().method, Verb::Delete);
}

#[tokio::test]
async fn test_leading_slash_in_path_is_ignored() {
    let (client, transport) = mock_client();

    client.get("/test", RequestOptions::new()).await.unwrap();

    assert_eq!(transport.last_request().url, "https://api.dnsimple.com/test");
}

#[tokio::test]
async fn test_custom_endpoint_is_used_for_requests() {
    let (client, transport) = mock_client();
    let client = client.with_api_endpoint("https://api.example.com");

    client.get("test", RequestOptions::new()).await.unwrap();

    assert_eq!(transport.last_request().url, "https://api.example.com/test");
}

#[tokio::test]
async fn test_default_headers_are_always_present() {
    let (client, transport) = mock_client();

    client.get("test", RequestOptions::new()).await.unwrap();

    let request = transport.last_request();
    assert_eq!(
        request.headers.get("Accept").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(
        request.headers.get("User-Agent").map(String::as_str),
        Some(concat!("dnsimple-rs/", env!("CARGO_PKG_VERSION")))
    );
}

#[tokio::test]
async fn test_caller_headers_override_defaults() {
    let (client, transport) = mock_client();
    let options = RequestOptions::new()
        .with_header("Accept", "text/html")
        .with_header("X-Custom", "custom-value");

    client.get("test", options).await.unwrap();

    let request = transport.last_request();
    assert_eq!(
        request.headers.get("Accept").map(String::as_str),
        Some("text/html")
    );
    assert_eq!(
        request.headers.get("X-Custom").map(String::as_str),
        Some("custom-value")
    );
}

#[tokio::test]
async fn test_options_split_into_body_query_and_headers() {
    let (client, transport) = mock_client();
    let options = RequestOptions::new()
        .with_body(json!({"something": "else"}))
        .with_query("foo", "bar")
        .with_header("X-Custom", "Header");

    client.put("foo", options).await.unwrap();

    let request = transport.last_request();
    assert_eq!(request.body, Some(json!({"something": "else"})));
    assert_eq!(
        request.query,
        Some(vec![("foo".to_string(), "bar".to_string())])
    );
    assert_eq!(
        request.headers.get("X-Custom").map(String::as_str),
        Some("Header")
    );
}

#[tokio::test]
async fn test_request_returns_the_raw_response() {
    let (client, transport) = mock_client();
    transport.push_response(500, "not even json");

    let response = client
        .request(Verb::Get, "foo", RequestOptions::new())
        .await
        .unwrap();

    assert_eq!(response.code, 500);
    assert_eq!(response.body, "not even json");
}

#[tokio::test]
async fn test_request_and_execute_assemble_the_same_request() {
    let (client, transport) = mock_client();

    client
        .request(Verb::Get, "foo", RequestOptions::new())
        .await
        .unwrap();
    client.get("foo", RequestOptions::new()).await.unwrap();

    let history = transport.request_history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0], history[1]);
}

#[tokio::test]
async fn test_service_accessors_return_cached_instances() {
    let (client, _transport) = mock_client();

    let first = client.name_servers();
    let second = client.name_servers();
    assert!(std::sync::Arc::ptr_eq(&first, &second));

    let domains_first = client.domains();
    let domains_second = client.domains();
    assert!(std::sync::Arc::ptr_eq(&domains_first, &domains_second));
}
