pub mod auth;
pub mod config;
pub mod error;
pub mod router;
pub mod middleware;
pub mod db;
pub mod handlers;
pub mod types;

pub use error::PortalError;
pub use router::{PortalState, portal_router};
