mod common;

use axum::http::StatusCode;
use jsonwebtoken::{EncodingKey, Header};
use serde_json::Value;
use tower::ServiceExt;

use common::{body_json, build_request, district_input, mint_token, seed_state, spawn_app};
use covid_portal::auth::token::Claims;

/// Every protected (method, uri, body) triple, using ids that exist once a
/// state and district are seeded.
fn protected_routes(state_id: i64, district_id: i64) -> Vec<(&'static str, String, Option<Value>)> {
    vec![
        ("GET", "/states/".to_string(), None),
        ("GET", format!("/states/{state_id}/"), None),
        ("GET", format!("/states/{state_id}/stats/"), None),
        ("GET", format!("/districts/{district_id}/"), None),
        (
            "POST",
            "/districts/".to_string(),
            Some(district_input("Gate Test", state_id)),
        ),
        (
            "PUT",
            format!("/districts/{district_id}/"),
            Some(district_input("Gate Test Renamed", state_id)),
        ),
        ("DELETE", format!("/districts/{district_id}/"), None),
    ]
}

#[tokio::test]
async fn missing_token_is_rejected_on_every_protected_route() {
    let srv = spawn_app().await;

    for (method, uri, body) in protected_routes(1, 1) {
        let resp = srv
            .app
            .clone()
            .oneshot(build_request(method, &uri, None, body))
            .await
            .expect("request failed");

        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {uri} accepted a request without a token"
        );
        let body = body_json(resp).await;
        assert_eq!(body["error"]["message"], "Invalid JWT Token");
    }
}

#[tokio::test]
async fn malformed_token_is_rejected_on_every_protected_route() {
    let srv = spawn_app().await;

    for (method, uri, body) in protected_routes(1, 1) {
        let resp = srv
            .app
            .clone()
            .oneshot(build_request(method, &uri, Some("not-a-token"), body))
            .await
            .expect("request failed");

        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {uri} accepted a malformed token"
        );
    }
}

#[tokio::test]
async fn token_signed_with_wrong_secret_is_rejected() {
    let srv = spawn_app().await;

    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: "bill".to_string(),
        iat: now,
        exp: now + 3_600,
    };
    let forged = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"not-the-portal-secret"),
    )
    .expect("failed to encode");

    let resp = srv
        .app
        .clone()
        .oneshot(build_request("GET", "/states/", Some(&forged), None))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_rejected_by_the_gate() {
    let srv = spawn_app().await;

    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: "bill".to_string(),
        iat: now - 7_200,
        exp: now - 3_600,
    };
    let expired = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(common::TEST_SECRET.as_bytes()),
    )
    .expect("failed to encode");

    let resp = srv
        .app
        .clone()
        .oneshot(build_request("GET", "/states/", Some(&expired), None))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_token_is_accepted_on_every_protected_route() {
    let srv = spawn_app().await;
    let state_id = seed_state(&srv.storage, "Kerala", 35_000_000).await;
    let district_id = {
        let input = covid_portal::types::api::DistrictInput {
            district_name: "Ernakulam".to_string(),
            state_id,
            cases: 100,
            cured: 70,
            active: 20,
            deaths: 10,
        };
        srv.storage
            .insert_district(&input)
            .await
            .expect("failed to seed district")
    };

    let token = mint_token("bill");

    // Routes are ordered so the DELETE comes last; every one of them must
    // get past the gate.
    for (method, uri, body) in protected_routes(state_id, district_id) {
        let resp = srv
            .app
            .clone()
            .oneshot(build_request(method, &uri, Some(&token), body))
            .await
            .expect("request failed");

        assert_ne!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {uri} rejected a valid token"
        );
        assert_eq!(
            resp.status(),
            StatusCode::OK,
            "{method} {uri} did not succeed"
        );
    }
}
