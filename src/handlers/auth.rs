use axum::{Json, extract::State};
use tracing::{debug, info};

use crate::auth::{password, token};
use crate::error::PortalError;
use crate::router::PortalState;
use crate::types::api::{LoginRequest, TokenResponse};

/// POST /login/ -> verifies the credentials and issues a signed token.
pub async fn login(
    State(state): State<PortalState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, PortalError> {
    let user = state
        .storage
        .find_user(&body.username)
        .await?
        .ok_or(PortalError::InvalidUser)?;

    let matched = password::verify_password(body.password, user.password).await?;
    if !matched {
        debug!(username = %body.username, "login rejected: password mismatch");
        return Err(PortalError::InvalidPassword);
    }

    let jwt_token = token::issue(
        &body.username,
        state.jwt_secret.as_bytes(),
        state.token_ttl_days,
    )?;
    info!(username = %body.username, "login succeeded");
    Ok(Json(TokenResponse { jwt_token }))
}
