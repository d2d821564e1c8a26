//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings in UTC, so string
//! comparison in SQL agrees with chronological order. UUIDs are stored
//! as hyphenated lowercase strings.

use chrono::{DateTime, Utc};
use kontak_core::{AdminSession, Contact, Suffix};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row carriers ─────────────────────────────────────────────────────────────
//
// Raw* structs hold column values exactly as stored; decoding into domain
// types happens outside the connection callback so `rusqlite` errors and
// parse errors stay separate.

pub struct RawContact {
  pub id:         String,
  pub full_name:  String,
  pub phone:      String,
  pub email:      Option<String>,
  pub suffix:     String,
  pub country:    String,
  pub created_at: String,
}

impl RawContact {
  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:         decode_uuid(&self.id)?,
      full_name:  self.full_name,
      phone:      self.phone,
      email:      self.email,
      suffix:     self.suffix,
      country:    self.country,
      created_at: decode_dt(&self.created_at)?,
    })
  }

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawContact {
      id:         row.get(0)?,
      full_name:  row.get(1)?,
      phone:      row.get(2)?,
      email:      row.get(3)?,
      suffix:     row.get(4)?,
      country:    row.get(5)?,
      created_at: row.get(6)?,
    })
  }
}

pub struct RawSuffix {
  pub id:         String,
  pub value:      String,
  pub is_active:  bool,
  pub created_at: String,
}

impl RawSuffix {
  pub fn into_suffix(self) -> Result<Suffix> {
    Ok(Suffix {
      id:         decode_uuid(&self.id)?,
      value:      self.value,
      is_active:  self.is_active,
      created_at: decode_dt(&self.created_at)?,
    })
  }

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawSuffix {
      id:         row.get(0)?,
      value:      row.get(1)?,
      is_active:  row.get(2)?,
      created_at: row.get(3)?,
    })
  }
}

pub struct RawSession {
  pub id:            String,
  pub session_token: String,
  pub expires_at:    String,
  pub created_at:    String,
}

impl RawSession {
  pub fn into_session(self) -> Result<AdminSession> {
    Ok(AdminSession {
      id:            decode_uuid(&self.id)?,
      session_token: self.session_token,
      expires_at:    decode_dt(&self.expires_at)?,
      created_at:    decode_dt(&self.created_at)?,
    })
  }

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawSession {
      id:            row.get(0)?,
      session_token: row.get(1)?,
      expires_at:    row.get(2)?,
      created_at:    row.get(3)?,
    })
  }
}
