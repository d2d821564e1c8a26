//! Handlers for contact registration and administration.
//!
//! | Method   | Path                       | Auth   |
//! |----------|----------------------------|--------|
//! | `POST`   | `/api/contacts`            | public |
//! | `GET`    | `/api/contacts/recent`     | public |
//! | `GET`    | `/api/admin/contacts`      | admin  |
//! | `DELETE` | `/api/admin/contacts/:id`  | admin  |
//! | `DELETE` | `/api/admin/contacts`      | admin  |

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, PathRejection, QueryRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use kontak_core::{Contact, ContactStore, NewContact, validate};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{AppState, auth::AdminAuth, error::Error};

// ─── Public registration ──────────────────────────────────────────────────────

/// `POST /api/contacts`
pub async fn register<S>(
  State(state): State<AppState<S>>,
  body: Result<Json<NewContact>, JsonRejection>,
) -> Result<impl IntoResponse, Error>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let Json(input) = body.map_err(|e| Error::BadRequest(e.body_text()))?;
  validate::validate_new_contact(&input)?;

  // Existence pre-check keeps the common duplicate a clean 409; the
  // store's unique constraint still backstops a racing insert.
  if state
    .store
    .get_contact_by_phone(&input.phone)
    .await
    .map_err(Error::store)?
    .is_some()
  {
    return Err(Error::Conflict("phone number already registered"));
  }

  let contact = state.store.create_contact(input).await.map_err(Error::store)?;

  if let Some(email) = contact.email.as_deref() {
    // Welcome mail is a documented gap; record the intent only.
    tracing::info!(%email, "would send welcome email");
  }
  tracing::info!(phone = %contact.phone, "contact registered");

  Ok((StatusCode::CREATED, Json(contact)))
}

// ─── Public recent listing ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecentParams {
  pub limit: Option<u32>,
}

/// `GET /api/contacts/recent?limit=N` — default 5.
pub async fn recent<S>(
  State(state): State<AppState<S>>,
  params: Result<Query<RecentParams>, QueryRejection>,
) -> Result<Json<Vec<Contact>>, Error>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let Query(params) = params.map_err(|e| Error::BadRequest(e.body_text()))?;
  let limit = params.limit.unwrap_or(5);
  let contacts = state.store.recent_contacts(limit).await.map_err(Error::store)?;
  Ok(Json(contacts))
}

// ─── Admin ────────────────────────────────────────────────────────────────────

/// `GET /api/admin/contacts`
pub async fn admin_list<S>(
  _auth: AdminAuth,
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Contact>>, Error>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let contacts = state.store.list_contacts().await.map_err(Error::store)?;
  Ok(Json(contacts))
}

/// `DELETE /api/admin/contacts/:id` — 404 if no such contact.
pub async fn delete_one<S>(
  _auth: AdminAuth,
  State(state): State<AppState<S>>,
  id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<serde_json::Value>, Error>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let Path(id) = id.map_err(|e| Error::BadRequest(e.body_text()))?;
  if !state.store.delete_contact(id).await.map_err(Error::store)? {
    return Err(Error::NotFound("contact not found"));
  }
  Ok(Json(json!({ "success": true })))
}

/// `DELETE /api/admin/contacts` — remove every contact.
pub async fn delete_all<S>(
  _auth: AdminAuth,
  State(state): State<AppState<S>>,
) -> Result<Json<serde_json::Value>, Error>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let removed = state.store.delete_all_contacts().await.map_err(Error::store)?;
  tracing::info!(count = removed, "deleted all contacts");
  Ok(Json(json!({ "success": true })))
}
