//! External request/response shapes. Wire names are camelCase; row structs
//! convert in with `From`, renaming fields and nothing else.

use serde::{Deserialize, Serialize};

use crate::db::models::{DistrictRow, DistrictTotalsRow, StateRow};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub jwt_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateView {
    pub state_id: i64,
    pub state_name: String,
    pub population: i64,
}

impl From<StateRow> for StateView {
    fn from(row: StateRow) -> Self {
        Self {
            state_id: row.state_id,
            state_name: row.state_name,
            population: row.population,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictView {
    pub district_id: i64,
    pub district_name: String,
    pub state_id: i64,
    pub cases: i64,
    pub cured: i64,
    pub active: i64,
    pub deaths: i64,
}

impl From<DistrictRow> for DistrictView {
    fn from(row: DistrictRow) -> Self {
        Self {
            district_id: row.district_id,
            district_name: row.district_name,
            state_id: row.state_id,
            cases: row.cases,
            cured: row.cured,
            active: row.active,
            deaths: row.deaths,
        }
    }
}

/// Body of both the create and the full-replacement update of a district.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictInput {
    pub district_name: String,
    pub state_id: i64,
    pub cases: i64,
    pub cured: i64,
    pub active: i64,
    pub deaths: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateStats {
    pub total_cases: i64,
    pub total_cured: i64,
    pub total_active: i64,
    pub total_deaths: i64,
}

impl From<DistrictTotalsRow> for StateStats {
    fn from(row: DistrictTotalsRow) -> Self {
        Self {
            total_cases: row.total_cases,
            total_cured: row.total_cured,
            total_active: row.total_active,
            total_deaths: row.total_deaths,
        }
    }
}
