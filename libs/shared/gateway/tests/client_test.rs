use assert_matches::assert_matches;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_gateway::{endpoints, BookingApiClient};
use shared_models::AppError;
use shared_utils::test_utils::{MockBookingResponses, TestConfig};

async fn client_for(server: &MockServer) -> BookingApiClient {
    let config = TestConfig::for_mock_server(&server.uri()).to_app_config();
    BookingApiClient::new(&config)
}

#[tokio::test]
async fn posts_enveloped_body_with_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoints::CATEGORIES))
        .and(header("api-key", "test-api-key"))
        .and(body_partial_json(json!({
            "parameters": { "parent_id": 0 },
            "offset": 0,
            "limit": 100,
            "orderBy": "ASC"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockBookingResponses::ok(vec![
            MockBookingResponses::category(1, "Стоматология", 0),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let resp = client
        .post::<Value>(endpoints::CATEGORIES, json!({ "parent_id": 0 }), None)
        .await
        .unwrap();

    assert!(resp.is_ok());
    assert_eq!(resp.data.len(), 1);
}

#[tokio::test]
async fn forwards_bearer_token_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoints::STAFF_CATEGORIE))
        .and(header("Authorization", "Bearer token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockBookingResponses::ok(vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let resp = client
        .post::<Value>(
            endpoints::STAFF_CATEGORIE,
            json!({ "business_id": 18 }),
            Some("token-123"),
        )
        .await
        .unwrap();
    assert!(resp.is_ok());
}

#[tokio::test]
async fn server_rejection_surfaces_message_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoints::SAVE_SCHEDULE))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(MockBookingResponses::rejected("Неверный SMS код")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let resp = client
        .post::<Value>(endpoints::SAVE_SCHEDULE, json!({}), None)
        .await
        .unwrap();

    assert_matches!(
        resp.into_result(),
        Err(AppError::Rejected(msg)) if msg == "Неверный SMS код"
    );
}

#[tokio::test]
async fn unauthorized_status_maps_to_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoints::BUSINESSES))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .post::<Value>(endpoints::BUSINESSES, json!({}), None)
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Auth(_));
}

#[tokio::test]
async fn concatenated_json_bodies_recover_first_object() {
    let server = MockServer::start().await;
    let doubled = format!(
        "{}{}",
        MockBookingResponses::ok(vec![MockBookingResponses::business(18, "Клиника")]),
        MockBookingResponses::rejected("duplicate trailing body"),
    );
    Mock::given(method("POST"))
        .and(path(endpoints::BUSINESSES))
        .respond_with(ResponseTemplate::new(200).set_body_string(doubled))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let resp = client
        .post::<Value>(endpoints::BUSINESSES, json!({}), None)
        .await
        .unwrap();
    assert!(resp.is_ok());
    assert_eq!(resp.data.len(), 1);
}
