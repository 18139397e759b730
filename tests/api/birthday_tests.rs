//! Birthday message API tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{json_body, TestApp};

#[tokio::test]
async fn test_create_and_list_birthday_messages() {
    let app = TestApp::new();
    app.db.insert_store("Sul", "Loja Porto Alegre");
    let token = app.user(None, None, Some("Sul"));

    let response = app
        .post_json_auth(
            "/api/v1/birthdays",
            &json!({ "mensagem": "Feliz aniversário! Ganhe 10% hoje.", "dias_antecedencia": 1 }),
            &token,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = json_body(app.get_auth("/api/v1/birthdays", &token).await).await;
    assert_eq!(json["rede"], "Sul");
    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["dias_antecedencia"], 1);
}

#[tokio::test]
async fn test_lead_time_out_of_range_is_rejected() {
    let app = TestApp::new();
    app.db.insert_store("NetA", "Loja Centro");
    let token = app.user(Some("NetA"), None, None);

    let response = app
        .post_json_auth(
            "/api/v1/birthdays",
            &json!({ "mensagem": "Parabéns!", "dias_antecedencia": 90 }),
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], 10007);
}
