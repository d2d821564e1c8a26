//! AdminSession — a bearer-token credential for the admin API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An issued admin session. The token is the bearer credential; the row
/// is deleted on logout and swept after expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
  pub id:            Uuid,
  /// Opaque random token, unique.
  pub session_token: String,
  pub expires_at:    DateTime<Utc>,
  pub created_at:    DateTime<Utc>,
}

impl AdminSession {
  /// A session is usable strictly before its expiry instant.
  pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
    now < self.expires_at
  }
}
