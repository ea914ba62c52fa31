use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use crate::error::PortalError;
use crate::middleware::RequireAuth;
use crate::router::PortalState;
use crate::types::api::{DistrictInput, DistrictView};

/// GET /districts/{district_id}/ -> one district, 404 when the id is unknown.
pub async fn get_district(
    _: RequireAuth,
    State(state): State<PortalState>,
    Path(district_id): Path<i64>,
) -> Result<Json<DistrictView>, PortalError> {
    let row = state
        .storage
        .get_district(district_id)
        .await?
        .ok_or(PortalError::NotFound("District"))?;
    Ok(Json(row.into()))
}

/// POST /districts/ -> inserts a district, replies with the fixed
/// confirmation string rather than the created resource.
pub async fn add_district(
    _: RequireAuth,
    State(state): State<PortalState>,
    Json(input): Json<DistrictInput>,
) -> Result<&'static str, PortalError> {
    let district_id = state.storage.insert_district(&input).await?;
    info!(district_id, district_name = %input.district_name, "district added");
    Ok("District Successfully Added")
}

/// PUT /districts/{district_id}/ -> full replacement of every mutable field.
/// 404 when no row matched.
pub async fn update_district(
    _: RequireAuth,
    State(state): State<PortalState>,
    Path(district_id): Path<i64>,
    Json(input): Json<DistrictInput>,
) -> Result<&'static str, PortalError> {
    let affected = state.storage.update_district(district_id, &input).await?;
    if affected == 0 {
        return Err(PortalError::NotFound("District"));
    }
    info!(district_id, "district updated");
    Ok("District Details Updated")
}

/// DELETE /districts/{district_id}/ -> 404 when no row matched.
pub async fn delete_district(
    _: RequireAuth,
    State(state): State<PortalState>,
    Path(district_id): Path<i64>,
) -> Result<&'static str, PortalError> {
    let affected = state.storage.delete_district(district_id).await?;
    if affected == 0 {
        return Err(PortalError::NotFound("District"));
    }
    info!(district_id, "district removed");
    Ok("District Removed")
}
