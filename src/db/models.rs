use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct StateRow {
    pub state_id: i64,
    pub state_name: String,
    pub population: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DistrictRow {
    pub district_id: i64,
    pub district_name: String,
    pub state_id: i64,
    pub cases: i64,
    pub cured: i64,
    pub active: i64,
    pub deaths: i64,
}

/// Credential record. `password` is a bcrypt hash, never the plain text.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserRow {
    pub username: String,
    pub password: String,
}

/// Per-state SUM aggregates over `district`. Empty groups come back as
/// zeros (the queries COALESCE the NULL that SQLite's SUM yields).
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct DistrictTotalsRow {
    pub total_cases: i64,
    pub total_cured: i64,
    pub total_active: i64,
    pub total_deaths: i64,
}
