use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::db::PortalStorage;
use crate::handlers;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct PortalState {
    pub storage: PortalStorage,
    pub jwt_secret: Arc<str>,
    pub token_ttl_days: i64,
}

impl PortalState {
    pub fn new(storage: PortalStorage, jwt_secret: Arc<str>, token_ttl_days: i64) -> Self {
        Self {
            storage,
            jwt_secret,
            token_ttl_days,
        }
    }
}

/// Build the portal router. Every route except `/login/` requires a bearer
/// token, enforced by the `RequireAuth` extractor on each handler.
pub fn portal_router(state: PortalState) -> Router {
    Router::new()
        .route("/login/", post(handlers::auth::login))
        .route("/states/", get(handlers::states::list_states))
        .route("/states/{state_id}/", get(handlers::states::get_state))
        .route("/states/{state_id}/stats/", get(handlers::states::state_stats))
        .route("/districts/", post(handlers::districts::add_district))
        .route(
            "/districts/{district_id}/",
            get(handlers::districts::get_district)
                .put(handlers::districts::update_district)
                .delete(handlers::districts::delete_district),
        )
        .with_state(state)
}
