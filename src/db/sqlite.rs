use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::db::models::{DistrictRow, DistrictTotalsRow, StateRow, UserRow};
use crate::db::schema::SQLITE_INIT;
use crate::error::PortalError;
use crate::types::api::DistrictInput;

pub type SqlitePool = Pool<Sqlite>;

/// The storage handle every statement goes through. Cheap to clone; all
/// clones share one pool.
#[derive(Clone)]
pub struct PortalStorage {
    pool: SqlitePool,
}

impl PortalStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database at `database_url` and run the bundled DDL.
    pub async fn connect(database_url: &str) -> Result<Self, PortalError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), PortalError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn find_user(&self, username: &str) -> Result<Option<UserRow>, PortalError> {
        let user = sqlx::query_as::<_, UserRow>(
            "SELECT username, password FROM user WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn list_states(&self) -> Result<Vec<StateRow>, PortalError> {
        let states = sqlx::query_as::<_, StateRow>(
            "SELECT state_id, state_name, population FROM state ORDER BY state_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(states)
    }

    pub async fn get_state(&self, state_id: i64) -> Result<Option<StateRow>, PortalError> {
        let state = sqlx::query_as::<_, StateRow>(
            "SELECT state_id, state_name, population FROM state WHERE state_id = ?",
        )
        .bind(state_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(state)
    }

    pub async fn get_district(&self, district_id: i64) -> Result<Option<DistrictRow>, PortalError> {
        let district = sqlx::query_as::<_, DistrictRow>(
            r#"SELECT district_id, district_name, state_id, cases, cured, active, deaths
               FROM district WHERE district_id = ?"#,
        )
        .bind(district_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(district)
    }

    /// Insert a district and return its generated id.
    pub async fn insert_district(&self, input: &DistrictInput) -> Result<i64, PortalError> {
        let result = sqlx::query(
            r#"INSERT INTO district (district_name, state_id, cases, cured, active, deaths)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&input.district_name)
        .bind(input.state_id)
        .bind(input.cases)
        .bind(input.cured)
        .bind(input.active)
        .bind(input.deaths)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Replace every mutable field of a district. Returns the number of rows
    /// matched, zero when the id does not exist.
    pub async fn update_district(
        &self,
        district_id: i64,
        input: &DistrictInput,
    ) -> Result<u64, PortalError> {
        let result = sqlx::query(
            r#"UPDATE district SET
                district_name = ?,
                state_id = ?,
                cases = ?,
                cured = ?,
                active = ?,
                deaths = ?
              WHERE district_id = ?"#,
        )
        .bind(&input.district_name)
        .bind(input.state_id)
        .bind(input.cases)
        .bind(input.cured)
        .bind(input.active)
        .bind(input.deaths)
        .bind(district_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_district(&self, district_id: i64) -> Result<u64, PortalError> {
        let result = sqlx::query("DELETE FROM district WHERE district_id = ?")
            .bind(district_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// SUM the four case counters across a state's districts. A state with
    /// no districts yields all zeros.
    pub async fn state_totals(&self, state_id: i64) -> Result<DistrictTotalsRow, PortalError> {
        let totals = sqlx::query_as::<_, DistrictTotalsRow>(
            r#"SELECT
                COALESCE(SUM(cases), 0) AS total_cases,
                COALESCE(SUM(cured), 0) AS total_cured,
                COALESCE(SUM(active), 0) AS total_active,
                COALESCE(SUM(deaths), 0) AS total_deaths
               FROM district WHERE state_id = ?"#,
        )
        .bind(state_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(totals)
    }
}
