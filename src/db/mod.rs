//! Database module: row models and schema for the portal's SQLite store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: the storage handle all statements go through

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DistrictRow, DistrictTotalsRow, StateRow, UserRow};
pub use schema::SQLITE_INIT;
pub use sqlite::{PortalStorage, SqlitePool};
