use axum::RequestPartsExt;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use headers::Authorization;
use headers::authorization::Bearer;

use crate::auth::token;
use crate::error::PortalError;
use crate::router::PortalState;

/// Gate for every protected route.
///
/// Verifies the `Authorization: Bearer <token>` header and discards the
/// claims; handlers never see the caller's identity.
#[derive(Debug, Clone, Copy)]
pub struct RequireAuth;

impl FromRequestParts<PortalState> for RequireAuth {
    type Rejection = PortalError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &PortalState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| PortalError::MissingToken)?;

        token::verify(bearer.token(), state.jwt_secret.as_bytes())
            .map_err(|_| PortalError::InvalidToken)?;

        Ok(Self)
    }
}
