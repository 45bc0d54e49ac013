use std::sync::Arc;

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use auth_cell::{AuthService, InMemorySessionStore, SessionStore, SmsService};
use shared_gateway::BookingApiClient;
use shared_models::AppError;
use shared_utils::test_utils::{MockBookingResponses, TestConfig};

const SMS_SESSION: &str = "6f1b0a52-8a7e-4a0b-9c2d-3f4e5a6b7c8d";

fn client_for(mock_server: &MockServer) -> Arc<BookingApiClient> {
    let config = TestConfig::for_mock_server(&mock_server.uri()).to_app_config();
    Arc::new(BookingApiClient::new(&config))
}

#[tokio::test]
async fn send_code_returns_the_challenge() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/proxy/send-sms"))
        .and(body_partial_json(json!({
            "parameters": { "phone_number": "998991234567" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockBookingResponses::ok(
            vec![MockBookingResponses::sms_challenge(SMS_SESSION, 123456)],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = SmsService::with_client(client_for(&mock_server));
    let challenge = service.send_code("998991234567").await.unwrap();

    assert_eq!(challenge.sms_session_id, SMS_SESSION);
    assert_eq!(challenge.sms_password, 123456);
}

#[tokio::test]
async fn send_code_rejects_invalid_phone_without_network() {
    // No mocks mounted: a request would fail loudly.
    let mock_server = MockServer::start().await;
    let service = SmsService::with_client(client_for(&mock_server));

    let result = service.send_code("99891234567").await;
    assert_matches!(result, Err(AppError::Validation(_)));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn send_code_flags_malformed_session_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/proxy/send-sms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockBookingResponses::ok(
            vec![MockBookingResponses::sms_challenge("not-a-uuid", 123456)],
        )))
        .mount(&mock_server)
        .await;

    let service = SmsService::with_client(client_for(&mock_server));
    assert_matches!(
        service.send_code("998991234567").await,
        Err(AppError::Protocol(_))
    );
}

#[tokio::test]
async fn login_persists_the_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/proxy/registration"))
        .and(body_partial_json(json!({
            "parameters": {
                "phone_number": "998991234567",
                "sms_session_id": SMS_SESSION,
                "sms_password": "123456"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockBookingResponses::ok(
            vec![MockBookingResponses::registration("token-abc")],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Arc::new(InMemorySessionStore::new());
    let service = AuthService::with_parts(client_for(&mock_server), store.clone());

    let session = service
        .login_with_sms("998991234567", "123456", SMS_SESSION)
        .await
        .unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.access_token.as_deref(), Some("token-abc"));
    assert_eq!(session.first_name.as_deref(), Some("Иван"));

    let stored = store.load().await;
    assert_eq!(stored, session);
}

#[tokio::test]
async fn rejected_login_leaves_the_store_untouched() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/proxy/registration"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(MockBookingResponses::rejected("Неверный SMS код")),
        )
        .mount(&mock_server)
        .await;

    let store = Arc::new(InMemorySessionStore::new());
    let service = AuthService::with_parts(client_for(&mock_server), store.clone());

    let result = service
        .login_with_sms("998991234567", "123456", SMS_SESSION)
        .await;

    assert_eq!(result, Err(AppError::Rejected("Неверный SMS код".to_string())));
    assert!(!store.load().await.is_authenticated());
}

#[tokio::test]
async fn invalid_code_is_caught_before_the_network() {
    let mock_server = MockServer::start().await;
    let service = AuthService::with_parts(
        client_for(&mock_server),
        Arc::new(InMemorySessionStore::new()),
    );

    let result = service
        .login_with_sms("998991234567", "12a456", SMS_SESSION)
        .await;

    assert_matches!(result, Err(AppError::Validation(_)));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn profile_maps_to_identity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/proxy/person-profile"))
        .and(header("Authorization", "Bearer token-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockBookingResponses::ok(
            vec![MockBookingResponses::person_profile("p-1", "998991234567")],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = AuthService::with_parts(
        client_for(&mock_server),
        Arc::new(InMemorySessionStore::new()),
    );

    let identity = service.profile("token-abc").await.unwrap();
    assert_eq!(identity.first_name, "Иван");
    assert_eq!(identity.phone_number, "998991234567");
}

#[tokio::test]
async fn logout_clears_the_store() {
    let mock_server = MockServer::start().await;

    let store = Arc::new(InMemorySessionStore::with_session(shared_models::Session {
        access_token: Some("token-abc".to_string()),
        phone_number: Some("998991234567".to_string()),
        ..Default::default()
    }));
    let service = AuthService::with_parts(client_for(&mock_server), store.clone());

    assert!(store.load().await.is_authenticated());
    service.logout().await;
    assert_eq!(store.load().await, shared_models::Session::default());
}
