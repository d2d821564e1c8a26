//! Error types and axum `IntoResponse` implementation.
//!
//! Every failure leaves the process as a JSON object with a single
//! human-readable `message` field and one of the statuses below.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use kontak_core::ValidationError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Missing, unknown, or expired bearer session — always 401.
  #[error("{0}")]
  Unauthorized(&'static str),

  #[error("{0}")]
  NotFound(&'static str),

  /// Unique-key collision (phone or suffix value) — 409.
  #[error("{0}")]
  Conflict(&'static str),

  #[error("invalid payload: {0}")]
  Validation(#[from] ValidationError),

  #[error("{0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend failure. Unique-key violations surface as
  /// [`Error::Conflict`] — the handlers pre-check for duplicates, but a
  /// racing insert still trips the store's constraint — and anything
  /// else becomes a 500.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(e);
    match boxed.downcast_ref::<kontak_store_sqlite::Error>() {
      Some(kontak_store_sqlite::Error::DuplicatePhone(_)) => {
        Error::Conflict("phone number already registered")
      }
      Some(kontak_store_sqlite::Error::DuplicateSuffix(_)) => {
        Error::Conflict("suffix value already exists")
      }
      _ => Error::Store(boxed),
    }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match &self {
      Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
      Error::NotFound(_) => StatusCode::NOT_FOUND,
      Error::Conflict(_) => StatusCode::CONFLICT,
      Error::Validation(_) | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
      Error::Store(e) => {
        tracing::error!(error = %e, "request failed on the store");
        StatusCode::INTERNAL_SERVER_ERROR
      }
    };
    (status, Json(json!({ "message": self.to_string() }))).into_response()
  }
}
