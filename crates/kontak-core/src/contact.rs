//! Contact — a registrant record captured by the public form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered contact. Created once on submission, never updated;
/// an admin can only delete it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  pub id:         Uuid,
  /// Display name with the chosen suffix already concatenated by the client.
  pub full_name:  String,
  /// Includes the country calling code prefix. Unique across all contacts.
  pub phone:      String,
  pub email:      Option<String>,
  /// Denormalized copy of the suffix tag chosen at registration.
  pub suffix:     String,
  /// Two-letter country code.
  pub country:    String,
  pub created_at: DateTime<Utc>,
}

/// A registration submission, pre-validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
  pub full_name: String,
  pub phone:     String,
  #[serde(default)]
  pub email:     Option<String>,
  pub suffix:    String,
  #[serde(default = "default_country")]
  pub country:   String,
}

fn default_country() -> String {
  "HT".to_string()
}
