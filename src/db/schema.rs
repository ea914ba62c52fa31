//! SQL DDL for initializing the portal database.
//! Idempotent; deployments usually ship a pre-seeded `state`/`user` set.

/// SQLite schema with:
/// - `state` and `district` as the two public tables; `district.state_id`
///   is a soft reference to `state` (no FOREIGN KEY constraint)
/// - `user.password` holding a bcrypt hash
/// - An index on `district.state_id` for the per-state aggregation
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS state (
    state_id INTEGER PRIMARY KEY AUTOINCREMENT,
    state_name TEXT NOT NULL,
    population INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS district (
    district_id INTEGER PRIMARY KEY AUTOINCREMENT,
    district_name TEXT NOT NULL,
    state_id INTEGER NOT NULL,
    cases INTEGER NOT NULL DEFAULT 0,
    cured INTEGER NOT NULL DEFAULT 0,
    active INTEGER NOT NULL DEFAULT 0,
    deaths INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_district_state_id ON district(state_id);

CREATE TABLE IF NOT EXISTS user (
    username TEXT PRIMARY KEY,
    password TEXT NOT NULL
);
"#;
