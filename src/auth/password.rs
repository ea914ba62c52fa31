use bcrypt::{BcryptError, DEFAULT_COST};

use crate::error::PortalError;

/// Compare a submitted password against a stored bcrypt hash.
///
/// bcrypt is deliberately slow, so the comparison runs on the blocking pool
/// rather than stalling the request executor.
pub async fn verify_password(password: String, stored_hash: String) -> Result<bool, PortalError> {
    let matched =
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored_hash)).await??;
    Ok(matched)
}

/// Hash a password for storage in the `user` table. Used by seeding code and
/// tests; no exposed route creates users.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    bcrypt::hash(password, DEFAULT_COST)
}
