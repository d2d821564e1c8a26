//! Bearer-session authentication for the admin API.
//!
//! Login verifies the configured credential and issues a random session
//! token; every admin handler then pulls an [`AdminAuth`] extractor that
//! resolves the bearer token to a stored, unexpired session. Expiry is
//! enforced here — the hourly sweep only reclaims rows.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{extract::FromRequestParts, http::{HeaderMap, header, request::Parts}};
use chrono::{DateTime, Duration, Utc};
use kontak_core::{AdminSession, ContactStore};
use rand_core::{OsRng, RngCore};

use crate::{AppState, error::Error};

/// How long an issued session stays valid.
const SESSION_TTL_HOURS: i64 = 24;

/// Credentials accepted as valid for this server instance.
#[derive(Clone)]
pub struct AuthConfig {
  pub username:      String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
}

/// 32 bytes from the OS RNG, hex-encoded (64 characters).
pub fn generate_session_token() -> String {
  let mut bytes = [0u8; 32];
  OsRng.fill_bytes(&mut bytes);
  hex::encode(bytes)
}

/// Expiry instant for a session issued now.
pub fn session_expiry() -> DateTime<Utc> {
  Utc::now() + Duration::hours(SESSION_TTL_HOURS)
}

/// Verify a submitted password against the configured PHC hash.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
  let Ok(parsed) = PasswordHash::new(password_hash) else {
    return false;
  };
  Argon2::default()
    .verify_password(password.as_bytes(), &parsed)
    .is_ok()
}

/// Extract the token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, Error> {
  headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.strip_prefix("Bearer "))
    .ok_or(Error::Unauthorized("no session token provided"))
}

/// Present in a handler's arguments means the request carried a live
/// admin session; the session itself is attached for logging.
pub struct AdminAuth(pub AdminSession);

impl<S> FromRequestParts<AppState<S>> for AdminAuth
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    let token = bearer_token(&parts.headers)?;

    let session = state
      .store
      .get_session(token)
      .await
      .map_err(Error::store)?
      .filter(|s| s.is_valid_at(Utc::now()))
      .ok_or(Error::Unauthorized("invalid or expired session"))?;

    Ok(AdminAuth(session))
  }
}
