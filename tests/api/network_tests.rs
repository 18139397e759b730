//! Network resolution endpoint tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use uuid::Uuid;

use crate::common::{json_body, token_for, TestApp};

#[test_case(Some("NetA"), Some("EmpB"), Some("SubC"), json!("NetA"), json!("rede") ; "rede wins")]
#[test_case(None, Some("EmpB"), Some("SubC"), json!("EmpB"), json!("empresa") ; "empresa fallback")]
#[test_case(Some(""), None, Some("SubC"), json!("SubC"), json!("sub_rede") ; "empty rede skipped")]
#[test_case(None, None, None, json!(null), json!(null) ; "no fields")]
#[tokio::test]
async fn test_network_diagnostics(
    rede: Option<&str>,
    empresa: Option<&str>,
    sub_rede: Option<&str>,
    expected_network: serde_json::Value,
    expected_source: serde_json::Value,
) {
    let app = TestApp::new();
    let token = app.user(rede, empresa, sub_rede);

    let response = app.get_auth("/api/v1/me/network", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["resolvedNetwork"], expected_network);
    assert_eq!(json["source"], expected_source);
    assert_eq!(
        json["available"]["rede"],
        json!(rede.is_some_and(|r| !r.is_empty()))
    );
}

#[tokio::test]
async fn test_diagnostics_for_unknown_profile() {
    let app = TestApp::new();
    let token = token_for(Uuid::new_v4());

    let response = app.get_auth("/api/v1/me/network", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({
            "resolvedNetwork": null,
            "source": null,
            "available": { "rede": false, "empresa": false, "sub_rede": false }
        })
    );
}

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let app = TestApp::new();

    let response = app.get("/api/v1/me/network").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["code"], 10003);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use marketing_admin::presentation::middleware::Claims;

    let app = TestApp::new();
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        iat: now,
        exp: now + 3600,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret-that-is-long-enough"),
    )
    .unwrap();

    let response = app.get_auth("/api/v1/me/network", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
