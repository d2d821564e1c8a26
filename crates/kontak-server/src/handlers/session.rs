//! Admin login and logout.

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::HeaderMap,
};
use chrono::{DateTime, Utc};
use kontak_core::ContactStore;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
  AppState,
  auth::{bearer_token, generate_session_token, session_expiry, verify_password},
  error::Error,
};

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub username: String,
  pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
  pub session_token: String,
  pub expires_at:    DateTime<Utc>,
}

/// `POST /api/admin/login` — verify the configured credential, issue a
/// 24-hour session, and hand the token back as the bearer credential.
pub async fn login<S>(
  State(state): State<AppState<S>>,
  body: Result<Json<LoginBody>, JsonRejection>,
) -> Result<Json<LoginResponse>, Error>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let Json(body) = body.map_err(|e| Error::BadRequest(e.body_text()))?;

  if body.username != state.auth.username
    || !verify_password(&body.password, &state.auth.password_hash)
  {
    tracing::warn!(username = %body.username, "rejected admin login");
    return Err(Error::Unauthorized("invalid credentials"));
  }

  let session = state
    .store
    .create_session(generate_session_token(), session_expiry())
    .await
    .map_err(Error::store)?;

  tracing::info!(expires_at = %session.expires_at, "admin login");
  Ok(Json(LoginResponse {
    session_token: session.session_token,
    expires_at:    session.expires_at,
  }))
}

/// `POST /api/admin/logout` — delete the presented session. Idempotent:
/// an already-gone session still answers success.
pub async fn logout<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
) -> Result<Json<serde_json::Value>, Error>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let token = bearer_token(&headers)?;
  let removed = state.store.delete_session(token).await.map_err(Error::store)?;
  tracing::debug!(removed, "admin logout");
  Ok(Json(json!({ "success": true })))
}
