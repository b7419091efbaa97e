//! Dispatcher tests against a simulated endpoint

use hookseal_jwt::{SigningSecret, TokenSigner, decode_segment};
use hookseal_webhooks::*;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn signer() -> TokenSigner {
    TokenSigner::new(SigningSecret::new("test-secret").unwrap())
}

fn deleted_payload() -> WebhookPayload {
    let record = json!({"userid": 7}).as_object().cloned().unwrap();
    PayloadBuilder::build(EventKind::Deleted, &record).unwrap()
}

#[tokio::test]
async fn test_sends_json_body_and_bearer_token() {
    let server = MockServer::start().await;
    let payload = deleted_payload();
    let token = signer().sign(&payload).unwrap();

    Mock::given(method("POST"))
        .and(path("/webhook"))
        .and(header("content-type", "application/json"))
        .and(header("authorization", token.bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = Dispatcher::with_defaults().unwrap();
    let result = dispatcher
        .send(&format!("{}/webhook", server.uri()), &payload, &token)
        .await
        .unwrap();

    assert_eq!(
        result,
        DeliveryResult::Success {
            status: 200,
            body: "ok".to_string()
        }
    );

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body, br#"{"clientId":7,"action":"deleted"}"#);
}

#[tokio::test]
async fn test_body_matches_signed_payload_segment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let payload = deleted_payload();
    let token = signer().sign(&payload).unwrap();
    Dispatcher::with_defaults()
        .unwrap()
        .send(&server.uri(), &payload, &token)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let (_, signed_payload, _) = token.segments();
    assert_eq!(requests[0].body, decode_segment(signed_payload).unwrap());
}

#[tokio::test]
async fn test_server_error_is_reported_as_success() {
    // Non-2xx answers are deliberately not distinguished from 2xx.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let payload = deleted_payload();
    let token = signer().sign(&payload).unwrap();
    let result = Dispatcher::with_defaults()
        .unwrap()
        .send(&server.uri(), &payload, &token)
        .await
        .unwrap();

    assert_eq!(
        result,
        DeliveryResult::Success {
            status: 500,
            body: "Internal Server Error".to_string()
        }
    );
    assert!(!result.is_2xx());
}

#[tokio::test]
async fn test_long_body_is_truncated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(1000)))
        .mount(&server)
        .await;

    let payload = deleted_payload();
    let token = signer().sign(&payload).unwrap();
    let result = Dispatcher::with_defaults()
        .unwrap()
        .send(&server.uri(), &payload, &token)
        .await
        .unwrap();

    match result {
        DeliveryResult::Success { body, .. } => assert_eq!(body, "x".repeat(BODY_SNIPPET_CHARS)),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let dispatcher = Dispatcher::new(
        DispatcherConfig::builder()
            .timeout(Duration::from_millis(200))
            .build(),
    )
    .unwrap();

    let payload = deleted_payload();
    let token = signer().sign(&payload).unwrap();
    let result = dispatcher.send(&server.uri(), &payload, &token).await.unwrap();

    match result {
        DeliveryResult::TransportError(message) => {
            assert!(message.contains("timed out"), "message: {}", message)
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let payload = deleted_payload();
    let token = signer().sign(&payload).unwrap();
    let result = Dispatcher::with_defaults()
        .unwrap()
        .send(&format!("http://{}/webhook", addr), &payload, &token)
        .await
        .unwrap();

    match result {
        DeliveryResult::TransportError(message) => {
            assert!(message.contains("error sending request"), "message: {}", message)
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
