//! Promotion API tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{json_body, TestApp};

fn promotion_body(titulo: &str) -> serde_json::Value {
    json!({
        "titulo": titulo,
        "descricao": "Descontos em toda a loja",
        "data_inicio": "2026-11-01",
        "data_fim": "2026-11-30"
    })
}

#[tokio::test]
async fn test_create_promotion_in_own_network() {
    let app = TestApp::new();
    app.db.insert_store("NetA", "Loja Centro");
    let token = app.user(Some("NetA"), Some("EmpB"), None);

    let response = app
        .post_json_auth("/api/v1/promotions", &promotion_body("Black Friday"), &token)
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = json_body(response).await;
    assert_eq!(json["rede"], "NetA");
    assert_eq!(json["titulo"], "Black Friday");
    assert_eq!(app.db.lookup_calls(), 1);
}

#[tokio::test]
async fn test_client_supplied_network_is_ignored() {
    let app = TestApp::new();
    app.db.insert_store("EmpB", "Loja Norte");
    let token = app.user(None, Some("EmpB"), None);

    let mut body = promotion_body("Semana do Cliente");
    body["rede"] = json!("OutraRede");

    let response = app.post_json_auth("/api/v1/promotions", &body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let stored = app.db.promotions();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].rede, "EmpB");
}

#[tokio::test]
async fn test_create_without_network_fields_is_forbidden() {
    let app = TestApp::new();
    let token = app.user(None, None, None);

    let response = app
        .post_json_auth("/api/v1/promotions", &promotion_body("Natal"), &token)
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        json_body(response).await["message"],
        "Usuário não possui nenhum campo de rede definido (rede, empresa, sub_rede)"
    );
    assert_eq!(app.db.lookup_calls(), 0);
    assert!(app.db.promotions().is_empty());
}

#[tokio::test]
async fn test_create_with_empty_fields_counts_as_no_fields() {
    let app = TestApp::new();
    let token = app.user(Some(""), Some(""), None);

    let response = app
        .post_json_auth("/api/v1/promotions", &promotion_body("Natal"), &token)
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        json_body(response).await["message"],
        "Usuário não possui nenhum campo de rede definido (rede, empresa, sub_rede)"
    );
}

#[tokio::test]
async fn test_create_in_network_without_stores_is_not_found() {
    let app = TestApp::new();
    let token = app.user(Some("RedeFantasma"), None, None);

    let response = app
        .post_json_auth("/api/v1/promotions", &promotion_body("Natal"), &token)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await["message"],
        "A rede \"RedeFantasma\" não foi encontrada no sistema"
    );
    assert!(app.db.promotions().is_empty());
}

#[tokio::test]
async fn test_lookup_failure_counts_as_missing_network() {
    let app = TestApp::new();
    app.db.insert_store("NetA", "Loja Centro");
    app.db.fail_lookups();
    let token = app.user(Some("NetA"), None, None);

    let response = app
        .post_json_auth("/api/v1/promotions", &promotion_body("Natal"), &token)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_write_validation_can_be_disabled() {
    let app = TestApp::with_write_validation(false);
    let token = app.user(Some("NetNova"), None, None);

    let response = app
        .post_json_auth("/api/v1/promotions", &promotion_body("Inauguração"), &token)
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(app.db.lookup_calls(), 0);
}

#[tokio::test]
async fn test_store_of_other_network_is_rejected() {
    let app = TestApp::new();
    app.db.insert_store("NetA", "Loja Centro");
    let other_store = app.db.insert_store("NetB", "Loja Rival");
    let token = app.user(Some("NetA"), None, None);

    let mut body = promotion_body("Queima de estoque");
    body["loja_id"] = json!(other_store);

    let response = app.post_json_auth("/api/v1/promotions", &body, &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(app.db.promotions().is_empty());
}

#[tokio::test]
async fn test_invalid_date_range_is_rejected() {
    let app = TestApp::new();
    app.db.insert_store("NetA", "Loja Centro");
    let token = app.user(Some("NetA"), None, None);

    let mut body = promotion_body("Promoção invertida");
    body["data_inicio"] = json!("2026-12-31");
    body["data_fim"] = json!("2026-12-01");

    let response = app.post_json_auth("/api/v1/promotions", &body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], 10007);
}

#[tokio::test]
async fn test_list_promotions_only_shows_own_network() {
    let app = TestApp::new();
    app.db.insert_store("NetA", "Loja A");
    app.db.insert_store("NetB", "Loja B");
    let token_a = app.user(Some("NetA"), None, None);
    let token_b = app.user(Some("NetB"), None, None);

    app.post_json_auth("/api/v1/promotions", &promotion_body("Promo A"), &token_a)
        .await;
    app.post_json_auth("/api/v1/promotions", &promotion_body("Promo B"), &token_b)
        .await;

    let json = json_body(app.get_auth("/api/v1/promotions", &token_a).await).await;

    assert_eq!(json["rede"], "NetA");
    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["titulo"], "Promo A");
}
