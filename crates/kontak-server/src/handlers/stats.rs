//! Aggregate counts for the dashboard cards.

use axum::{Json, extract::State};
use kontak_core::ContactStore;
use serde::Serialize;

use crate::{AppState, auth::AdminAuth, error::Error};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
  pub total_contacts: usize,
  pub today_contacts: usize,
  pub email_contacts: usize,
}

/// `GET /api/admin/stats`
pub async fn stats<S>(
  _auth: AdminAuth,
  State(state): State<AppState<S>>,
) -> Result<Json<Stats>, Error>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let total_contacts = state.store.list_contacts().await.map_err(Error::store)?.len();
  let today_contacts = state
    .store
    .contacts_created_today()
    .await
    .map_err(Error::store)?
    .len();
  let email_contacts = state
    .store
    .contacts_with_email()
    .await
    .map_err(Error::store)?
    .len();

  Ok(Json(Stats { total_contacts, today_contacts, email_contacts }))
}
