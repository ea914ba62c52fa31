//! Login credentials and bearer tokens.
//!
//! - `password.rs`: bcrypt verification of stored credential hashes
//! - `token.rs`: HS256 JWT issue/verify keyed by the shared secret

pub mod password;
pub mod token;

pub use token::Claims;
