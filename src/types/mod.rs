pub mod api;

pub use api::{DistrictInput, DistrictView, LoginRequest, StateStats, StateView, TokenResponse};
