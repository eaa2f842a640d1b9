//! API client integration tests

use assert_matches::assert_matches;
use mockito::Matcher;
use pretty_assertions::assert_eq;
use shopagent::egui_app::{ApiClient, Config};
use shopagent::shared::{AppConfig, ClientError, Credentials, NewUser};

use crate::common::{self, MockBackend};

#[tokio::test]
async fn test_static_data_decodes() {
    let mut backend = MockBackend::start().await;
    backend.mount_static_data().await;
    let api = backend.api();

    let users = crate::assert_ok!(api.list_demo_users().await);
    assert_eq!(users, common::demo_users());
    let products = crate::assert_ok!(api.list_products().await);
    assert_eq!(products.len(), 6);
    assert_eq!(products[0], common::product(1));
}

#[tokio::test]
async fn test_products_ignore_unknown_fields() {
    let mut backend = MockBackend::start().await;
    let body = serde_json::json!([
        { "id": 1, "name": "Lamp", "description": "Warm", "image_url": "/lamp.png", "category": "home" }
    ]);
    backend.mount_json("GET", "/api/products", 200, &body).await;

    let products = crate::assert_ok!(backend.api().list_products().await);
    assert_eq!(products[0].name, "Lamp");
}

#[tokio::test]
async fn test_demo_recommendations_with_message_only() {
    let mut backend = MockBackend::start().await;
    let body = serde_json::json!({ "message": "User has no history yet" });
    backend.mount_json("GET", "/api/recommendations/2", 200, &body).await;

    let response = crate::assert_ok!(backend.api().demo_recommendations(2).await);
    assert!(response.recommendations.is_none());
    assert_eq!(response.message.as_deref(), Some("User has no history yet"));
}

#[tokio::test]
async fn test_me_sends_bearer_token() {
    let mut backend = MockBackend::start().await;
    backend.mount_me("tok").await;
    let api = backend.api();

    let profile = crate::assert_ok!(api.me("tok").await);
    assert_eq!(profile, common::profile());

    crate::assert_err!(api.me("other").await, ClientError::Unauthorized(_));
}

#[tokio::test]
async fn test_my_recommendations_unauthorized() {
    let mut backend = MockBackend::start().await;
    backend
        .mount_detail("GET", "/api/me/recommendations", 401, "Could not validate credentials")
        .await;

    let result = backend.api().my_recommendations("expired").await;
    assert_eq!(
        result,
        Err(ClientError::Unauthorized("Could not validate credentials".to_string()))
    );
}

#[tokio::test]
async fn test_login_posts_form_and_returns_token() {
    let mut backend = MockBackend::start().await;
    let mock = backend
        .server
        .mock("POST", "/api/auth/login")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("username".into(), "grace@example.com".into()),
            Matcher::UrlEncoded("password".into(), "hunter2".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"access_token":"fresh","token_type":"bearer"}"#)
        .expect(1)
        .create_async()
        .await;

    let token = backend
        .api()
        .login(&Credentials::new("grace@example.com", "hunter2"))
        .await;
    assert_eq!(token, Ok("fresh".to_string()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_failure_surfaces_detail_verbatim() {
    let mut backend = MockBackend::start().await;
    backend
        .mount_detail("POST", "/api/auth/login", 401, "Incorrect email or password")
        .await;

    let err = backend
        .api()
        .login(&Credentials::new("grace@example.com", "wrong"))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Incorrect email or password");
    assert_matches!(err, ClientError::Backend { status: 401, .. });
}

#[tokio::test]
async fn test_register_posts_json() {
    let mut backend = MockBackend::start().await;
    let user = NewUser {
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
        password: "hunter2".to_string(),
    };
    let mock = backend
        .server
        .mock("POST", "/api/auth/register")
        .match_body(Matcher::Json(serde_json::json!({
            "name": "Grace",
            "email": "grace@example.com",
            "password": "hunter2",
        })))
        .with_status(200)
        .with_body(r#"{"id":9}"#)
        .expect(1)
        .create_async()
        .await;

    crate::assert_ok!(backend.api().register(&user).await);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_without_detail_uses_fallback_message() {
    let mut backend = MockBackend::start().await;
    let _mock = backend
        .server
        .mock("GET", "/api/products")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let err = backend.api().list_products().await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Backend {
            status: 500,
            message: "An unknown error occurred.".to_string(),
        }
    );
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mut backend = MockBackend::start().await;
    let _mock = backend
        .server
        .mock("GET", "/api/users")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    crate::assert_err!(backend.api().list_demo_users().await, ClientError::Decode(_));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let builder = AppConfig::builder()
        .server_url("http://127.0.0.1:9")
        .request_timeout_secs(2);
    let api = ApiClient::new(Config::with_builder(builder).unwrap()).unwrap();

    let err = api.list_products().await.unwrap_err();
    assert!(err.is_transport(), "unexpected error {:?}", err);
}
