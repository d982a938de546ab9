use dnsimple_rs::auth::{
    Authentication, Credentials, SecureCredential, API_TOKEN_HEADER, DOMAIN_TOKEN_HEADER,
};
use dnsimple_rs::{Dnsimple, DnsimpleError, RequestOptions};
use pretty_assertions::assert_eq;
use std::sync::Arc;


use test_helpers::MockTransport;

#[test]
fn test_domain_token_wins_over_every_other_mode() {
    let credentials = Credentials::new()
        .with_username("user")
        .with_password("pass")
        .with_exchange_token("exchange-token")
        .with_api_token("token")
        .with_domain_api_token("domaintoken");

    let auth = credentials.resolve().unwrap();
    assert!(matches!(auth, Authentication::DomainToken { .. }));
    assert_eq!(
        auth.header(),
        Some((DOMAIN_TOKEN_HEADER, "domaintoken".to_string()))
    );
    assert_eq!(auth.basic_auth(), None);
}

#[test]
fn test_api_token_wins_over_password_modes() {
    let credentials = Credentials::new()
        .with_username("user")
        .with_password("pass")
        .with_exchange_token("exchange-token")
        .with_api_token("token");

    let auth = credentials.resolve().unwrap();
    assert!(matches!(auth, Authentication::ApiToken { .. }));
    assert_eq!(
        auth.header(),
        Some((API_TOKEN_HEADER, "user:token".to_string()))
    );
    assert_eq!(auth.basic_auth(), None);
}

#[test]
fn test_exchange_token_wins_over_plain_basic_auth() {
    let credentials = Credentials::new()
        .with_username("user")
        .with_password("pass")
        .with_exchange_token("exchange-token");

    let auth = credentials.resolve().unwrap();
    assert!(matches!(auth, Authentication::ExchangeToken { .. }));
    assert_eq!(auth.header(), None);
    assert_eq!(
        auth.basic_auth(),
        Some(("exchange-token".to_string(), "x-2fa-basic".to_string()))
    );
}

#[test]
fn test_username_and_password_fall_back_to_basic_auth() {
    let credentials = Credentials::new().with_username("user").with_password("pass");

    let auth = credentials.resolve().unwrap();
    assert!(matches!(auth, Authentication::HttpBasic { .. }));
    assert_eq!(auth.header(), None);
    assert_eq!(
        auth.basic_auth(),
        Some(("user".to_string(), "pass".to_string()))
    );
}

#[test]
fn test_api_token_requires_the_username() {
    let credentials = Credentials::new().with_api_token("token");

    let error = credentials.resolve().unwrap_err();
    assert!(matches!(error, DnsimpleError::Authentication { .. }));
}

#[test]
fn test_username_alone_is_not_enough() {
    let credentials = Credentials::new().with_username("user");

    let error = credentials.resolve().unwrap_err();
    assert!(matches!(error, DnsimpleError::Authentication { .. }));
}

#[test]
fn test_missing_credentials_use_the_canonical_message() {
    let error = Credentials::new().resolve().unwrap_err();

    match error {
        DnsimpleError::Authentication { message } => {
            assert_eq!(
                message,
                "A password or API token is required for all API requests."
            );
        }
        other => panic!("expected an authentication error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unauthenticated_execution_fails_before_the_wire() {
    let (client, transport) = test_helpers::bare_client();

    let error = client.get("test", RequestOptions::new()).await.unwrap_err();

    assert!(matches!(error, DnsimpleError::Authentication { .. }));
    assert!(transport.request_history().is_empty());
}

#[test]
fn test_client_construction_never_validates_credentials() {
    // Building without credentials is fine; only execution checks them
    let client = Dnsimple::new();
    assert!(client.credentials().resolve().is_err());
}

#[tokio::test]
async fn test_basic_auth_reaches_the_transport() {
    let (client, transport) = test_helpers::mock_client();

    client.get("test", RequestOptions::new()).await.unwrap();

    let request = transport.last_request();
    assert_eq!(
        request.basic_auth,
        Some(("user".to_string(), "pass".to_string()))
    );
    assert!(!request.headers.contains_key(API_TOKEN_HEADER));
    assert!(!request.headers.contains_key(DOMAIN_TOKEN_HEADER));
}

#[tokio::test]
async fn test_exchange_token_reaches_the_transport_as_basic_auth() {
    let transport = Arc::new(MockTransport::new());
    let client = Dnsimple::new()
        .with_username("user")
        .with_password("pass")
        .with_exchange_token("exchange-token")
        .with_transport(transport.clone());

    client.get("test", RequestOptions::new()).await.unwrap();

    let request = transport.last_request();
    assert_eq!(
        request.basic_auth,
        Some(("exchange-token".to_string(), "x-2fa-basic".to_string()))
    );
}

#[tokio::test]
async fn test_api_token_reaches_the_transport_as_a_header() {
    let transport = Arc::new(MockTransport::new());
    let client = Dnsimple::new()
        .with_username("user")
        .with_api_token("token")
        .with_transport(transport.clone());

    client.get("test", RequestOptions::new()).await.unwrap();

    let request = transport.last_request();
    assert_eq!(
        request.headers.get(API_TOKEN_HEADER).map(String::as_str),
        Some("user:token")
    );
    assert_eq!(request.basic_auth, None);
}

#[tokio::test]
async fn test_domain_token_reaches_the_transport_as_a_header() {
    let transport = Arc::new(MockTransport::new());
    let client = Dnsimple::new()
        .with_domain_api_token("domaintoken")
        .with_transport(transport.clone());

    client.get("test", RequestOptions::new()).await.unwrap();

    let request = transport.last_request();
    assert_eq!(
        request.headers.get(DOMAIN_TOKEN_HEADER).map(String::as_str),
        Some("domaintoken")
    );
    assert_eq!(request.basic_auth, None);
}

#[test]
fn test_secure_credentials_redact_debug_output() {
    let credential = SecureCredential::new("super-secret-value");
    assert_eq!(format!("{:?}", credential), "SecureCredential([REDACTED])");
    assert_eq!(format!("{}", credential), "[REDACTED CREDENTIAL]");
    assert_eq!(credential.as_str(), "super-secret-value");
}

#[test]
fn test_credentials_debug_output_hides_secrets() {
    let credentials = Credentials::new()
        .with_username("user")
        .with_password("super-secret-value");

    let printed = format!("{:?}", credentials);
    assert!(printed.contains("user"));
    assert!(!printed.contains("super-secret-value"));
}
