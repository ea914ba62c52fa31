#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use serde_json::Value;

use covid_portal::db::PortalStorage;
use covid_portal::router::{PortalState, portal_router};

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_TTL_DAYS: i64 = 30;

pub struct TestApp {
    pub app: Router,
    pub storage: PortalStorage,
    db_path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_path);
    }
}

/// Build the real router against a uniquely named temp SQLite file.
pub async fn spawn_app() -> TestApp {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut db_path = std::env::temp_dir();
    db_path.push(format!(
        "covid-portal-test-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", db_path.display());
    let storage = PortalStorage::connect(&database_url)
        .await
        .expect("failed to open test database");

    let state = PortalState::new(storage.clone(), Arc::from(TEST_SECRET), TEST_TTL_DAYS);
    TestApp {
        app: portal_router(state),
        storage,
        db_path,
    }
}

pub async fn seed_user(storage: &PortalStorage, username: &str, password: &str) {
    let hash =
        covid_portal::auth::password::hash_password(password).expect("failed to hash password");
    sqlx::query("INSERT INTO user (username, password) VALUES (?, ?)")
        .bind(username)
        .bind(hash)
        .execute(storage.pool())
        .await
        .expect("failed to seed user");
}

pub async fn seed_state(storage: &PortalStorage, state_name: &str, population: i64) -> i64 {
    let result = sqlx::query("INSERT INTO state (state_name, population) VALUES (?, ?)")
        .bind(state_name)
        .bind(population)
        .execute(storage.pool())
        .await
        .expect("failed to seed state");
    result.last_insert_rowid()
}

/// A token the portal itself would accept.
pub fn mint_token(username: &str) -> String {
    covid_portal::auth::token::issue(username, TEST_SECRET.as_bytes(), TEST_TTL_DAYS)
        .expect("failed to issue token")
}

pub fn build_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request")
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not json")
}

pub fn district_input(district_name: &str, state_id: i64) -> Value {
    serde_json::json!({
        "districtName": district_name,
        "stateId": state_id,
        "cases": 100,
        "cured": 70,
        "active": 20,
        "deaths": 10,
    })
}
