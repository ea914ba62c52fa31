use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Claims carried by a login token. `sub` is the username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Sign a token for `username`, valid for `ttl_days` from now.
pub fn issue(
    username: &str,
    secret: &[u8],
    ttl_days: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: username.to_owned(),
        iat: now.timestamp(),
        exp: (now + Duration::days(ttl_days)).timestamp(),
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
}

/// Verify signature and expiry, returning the embedded claims.
pub fn verify(token: &str, secret: &[u8]) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
