use anyhow::{Result, anyhow};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// JWT Claims structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Username
    pub uid: i32,    // User ID
    pub iat: i64,    // Issued at
    pub exp: i64,    // Expiration timestamp
}

/// Sign a new JWT token for a user, valid for `ttl_hours`.
pub fn sign(user_id: i32, username: &str, secret: &str, ttl_hours: i64) -> Result<String> {
    let now = Utc::now();
    let expires_at = now
        .checked_add_signed(Duration::hours(ttl_hours))
        .ok_or_else(|| anyhow!("token expiry out of range"))?;
    sign_with_expiry(user_id, username, secret, now, expires_at)
}

fn sign_with_expiry(
    user_id: i32,
    username: &str,
    secret: &str,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
) -> Result<String> {
    let claims = Claims {
        sub: username.to_owned(),
        uid: user_id,
        iat: issued_at.timestamp(),
        exp: expires_at.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verify and decode a JWT token.
pub fn verify(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}
