//! Shape and format checks for client-submitted payloads.
//!
//! A failed check names every offending field so the caller can render
//! per-field messages; `Display` flattens them into one summary line.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{contact::NewContact, suffix::NewSuffix};

/// One offending field with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
  pub field:   &'static str,
  pub message: &'static str,
}

/// The structured result of a failed validation.
#[derive(Debug, Clone, Error)]
#[error("{}", self.summary())]
pub struct ValidationError {
  pub fields: Vec<FieldError>,
}

impl ValidationError {
  fn summary(&self) -> String {
    self
      .fields
      .iter()
      .map(|f| format!("{}: {}", f.field, f.message))
      .collect::<Vec<_>>()
      .join("; ")
  }
}

static EMAIL_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Validate a registration submission.
pub fn validate_new_contact(input: &NewContact) -> Result<(), ValidationError> {
  let mut fields = Vec::new();

  if input.full_name.chars().count() < 2 {
    fields.push(FieldError {
      field:   "fullName",
      message: "name must be at least 2 characters",
    });
  }
  if input.phone.chars().count() < 8 {
    fields.push(FieldError {
      field:   "phone",
      message: "phone number is too short",
    });
  }
  // Email is optional; an empty string counts as absent.
  if let Some(email) = input.email.as_deref()
    && !email.is_empty()
    && !EMAIL_RE.is_match(email)
  {
    fields.push(FieldError {
      field:   "email",
      message: "not a valid email address",
    });
  }
  if input.suffix.is_empty() {
    fields.push(FieldError {
      field:   "suffix",
      message: "a suffix is required",
    });
  }
  if input.country.chars().count() < 2 {
    fields.push(FieldError {
      field:   "country",
      message: "country code is required",
    });
  }

  if fields.is_empty() {
    Ok(())
  } else {
    Err(ValidationError { fields })
  }
}

/// Validate a suffix creation payload.
pub fn validate_new_suffix(input: &NewSuffix) -> Result<(), ValidationError> {
  if input.value.is_empty() {
    Err(ValidationError {
      fields: vec![FieldError {
        field:   "value",
        message: "a value is required",
      }],
    })
  } else {
    Ok(())
  }
}
