//! Downloadable exports of the full contact list.

use axum::{
  body::Body,
  extract::State,
  http::{StatusCode, header},
  response::Response,
};
use kontak_core::ContactStore;

use crate::{AppState, auth::AdminAuth, error::Error};

fn attachment(content_type: &'static str, filename: &str, body: String) -> Response {
  Response::builder()
    .status(StatusCode::OK)
    .header(header::CONTENT_TYPE, content_type)
    .header(
      header::CONTENT_DISPOSITION,
      format!("attachment; filename=\"{filename}\""),
    )
    .header(header::CONTENT_LENGTH, body.len())
    .body(Body::from(body))
    .unwrap()
}

/// `GET /api/admin/export/vcf`
pub async fn vcf<S>(
  _auth: AdminAuth,
  State(state): State<AppState<S>>,
) -> Result<Response, Error>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let contacts = state.store.list_contacts().await.map_err(Error::store)?;
  let body = kontak_export::vcf::serialize(&contacts);
  Ok(attachment("text/vcard", kontak_export::VCF_FILENAME, body))
}

/// `GET /api/admin/export/csv`
pub async fn csv<S>(
  _auth: AdminAuth,
  State(state): State<AppState<S>>,
) -> Result<Response, Error>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let contacts = state.store.list_contacts().await.map_err(Error::store)?;
  let body = kontak_export::csv::serialize(&contacts);
  Ok(attachment("text/csv", kontak_export::CSV_FILENAME, body))
}
