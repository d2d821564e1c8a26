//! Error type for `kontak-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A contact with this phone number is already registered.
  #[error("phone number already registered: {0}")]
  DuplicatePhone(String),

  /// A suffix with this value already exists.
  #[error("suffix value already exists: {0}")]
  DuplicateSuffix(String),
}

impl Error {
  /// True for the unique-constraint variants, which map to HTTP 409.
  pub fn is_conflict(&self) -> bool {
    matches!(self, Error::DuplicatePhone(_) | Error::DuplicateSuffix(_))
  }

  /// Rewrite a unique-constraint failure into `dup`; anything else stays
  /// a database error.
  pub(crate) fn from_unique(err: tokio_rusqlite::Error, dup: impl FnOnce() -> Error) -> Error {
    match &err {
      tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(e, _))
        if e.code == rusqlite::ErrorCode::ConstraintViolation =>
      {
        dup()
      }
      _ => Error::Database(err),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
