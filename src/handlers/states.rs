use axum::{
    Json,
    extract::{Path, State},
};

use crate::error::PortalError;
use crate::middleware::RequireAuth;
use crate::router::PortalState;
use crate::types::api::{StateStats, StateView};

/// GET /states/ -> every state, in id order.
pub async fn list_states(
    _: RequireAuth,
    State(state): State<PortalState>,
) -> Result<Json<Vec<StateView>>, PortalError> {
    let states = state.storage.list_states().await?;
    Ok(Json(states.into_iter().map(StateView::from).collect()))
}

/// GET /states/{state_id}/ -> one state, 404 when the id is unknown.
pub async fn get_state(
    _: RequireAuth,
    State(state): State<PortalState>,
    Path(state_id): Path<i64>,
) -> Result<Json<StateView>, PortalError> {
    let row = state
        .storage
        .get_state(state_id)
        .await?
        .ok_or(PortalError::NotFound("State"))?;
    Ok(Json(row.into()))
}

/// GET /states/{state_id}/stats/ -> case counters summed over the state's
/// districts. A state with no districts reports zeros; the state itself is
/// not existence-checked.
pub async fn state_stats(
    _: RequireAuth,
    State(state): State<PortalState>,
    Path(state_id): Path<i64>,
) -> Result<Json<StateStats>, PortalError> {
    let totals = state.storage.state_totals(state_id).await?;
    Ok(Json(totals.into()))
}
