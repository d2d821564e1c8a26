//! Suffix — a short decorative tag appended to registrant display names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A suffix tag. Only active suffixes are offered to the public form;
/// the admin listing always shows all of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suffix {
  pub id:         Uuid,
  /// Unique across all suffixes.
  pub value:      String,
  pub is_active:  bool,
  pub created_at: DateTime<Utc>,
}

/// Payload for creating a suffix. `is_active` defaults to true.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSuffix {
  pub value:     String,
  #[serde(default)]
  pub is_active: Option<bool>,
}

/// Partial update: only the supplied fields are merged onto the row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuffixPatch {
  #[serde(default)]
  pub value:     Option<String>,
  #[serde(default)]
  pub is_active: Option<bool>,
}
