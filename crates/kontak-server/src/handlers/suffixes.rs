//! Handlers for the suffix catalog.
//!
//! The public form sees only active suffixes; the admin surface manages
//! the full set. Suffix values are unique, so create and rename check
//! for a collision up front and answer 409.

use axum::{
  Json,
  extract::{
    Path, State,
    rejection::{JsonRejection, PathRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use kontak_core::{ContactStore, NewSuffix, Suffix, SuffixPatch, validate};
use serde_json::json;
use uuid::Uuid;

use crate::{AppState, auth::AdminAuth, error::Error};

/// `GET /api/suffixes` — active only, no auth.
pub async fn public_list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Suffix>>, Error>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let suffixes = state.store.active_suffixes().await.map_err(Error::store)?;
  Ok(Json(suffixes))
}

/// `GET /api/admin/suffixes` — the full catalog, inactive included.
pub async fn admin_list<S>(
  _auth: AdminAuth,
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Suffix>>, Error>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let suffixes = state.store.list_suffixes().await.map_err(Error::store)?;
  Ok(Json(suffixes))
}

async fn value_taken<S>(
  state: &AppState<S>,
  value: &str,
  exclude: Option<Uuid>,
) -> Result<bool, Error>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let suffixes = state.store.list_suffixes().await.map_err(Error::store)?;
  Ok(
    suffixes
      .iter()
      .any(|s| s.value == value && Some(s.id) != exclude),
  )
}

/// `POST /api/admin/suffixes`
pub async fn create<S>(
  _auth: AdminAuth,
  State(state): State<AppState<S>>,
  body: Result<Json<NewSuffix>, JsonRejection>,
) -> Result<impl IntoResponse, Error>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let Json(input) = body.map_err(|e| Error::BadRequest(e.body_text()))?;
  validate::validate_new_suffix(&input)?;

  if value_taken(&state, &input.value, None).await? {
    return Err(Error::Conflict("suffix value already exists"));
  }

  let suffix = state.store.create_suffix(input).await.map_err(Error::store)?;
  Ok((StatusCode::CREATED, Json(suffix)))
}

/// `PUT /api/admin/suffixes/:id` — merge the supplied fields.
pub async fn update<S>(
  _auth: AdminAuth,
  State(state): State<AppState<S>>,
  id: Result<Path<Uuid>, PathRejection>,
  body: Result<Json<SuffixPatch>, JsonRejection>,
) -> Result<Json<Suffix>, Error>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let Path(id) = id.map_err(|e| Error::BadRequest(e.body_text()))?;
  let Json(patch) = body.map_err(|e| Error::BadRequest(e.body_text()))?;

  if let Some(value) = patch.value.as_deref()
    && value_taken(&state, value, Some(id)).await?
  {
    return Err(Error::Conflict("suffix value already exists"));
  }

  let suffix = state
    .store
    .update_suffix(id, patch)
    .await
    .map_err(Error::store)?
    .ok_or(Error::NotFound("suffix not found"))?;
  Ok(Json(suffix))
}

/// `DELETE /api/admin/suffixes/:id` — 404 if no such suffix.
pub async fn delete<S>(
  _auth: AdminAuth,
  State(state): State<AppState<S>>,
  id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<serde_json::Value>, Error>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let Path(id) = id.map_err(|e| Error::BadRequest(e.body_text()))?;
  if !state.store.delete_suffix(id).await.map_err(Error::store)? {
    return Err(Error::NotFound("suffix not found"));
  }
  Ok(Json(json!({ "success": true })))
}
