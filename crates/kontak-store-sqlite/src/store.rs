//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use chrono::{DateTime, Days, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use kontak_core::{
  contact::{Contact, NewContact},
  session::AdminSession,
  store::ContactStore,
  suffix::{NewSuffix, Suffix, SuffixPatch},
};

use crate::{
  Error, Result,
  encode::{RawContact, RawSession, RawSuffix, encode_dt, encode_uuid},
  schema::SCHEMA,
};

/// Suffix values inserted on first run when the table is empty.
pub const DEFAULT_SUFFIXES: [&str; 3] = ["BOOST.1🚀", "BOOST.2🔥", "BOOST.3⚡"];

const CONTACT_COLS: &str = "id, full_name, phone, email, suffix, country, created_at";
const SUFFIX_COLS: &str = "id, value, is_active, created_at";
const SESSION_COLS: &str = "id, session_token, expires_at, created_at";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Kontak store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn contacts_where(&self, sql: &'static str, params: Vec<String>) -> Result<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), |row| {
            RawContact::from_row(row)
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }
}

/// UTC instants for local midnight today and local midnight tomorrow.
fn local_day_bounds_utc() -> (DateTime<Utc>, DateTime<Utc>) {
  let today = Local::now().date_naive();
  let tomorrow = today
    .checked_add_days(Days::new(1))
    .unwrap_or(today);
  (local_midnight_utc(today), local_midnight_utc(tomorrow))
}

fn local_midnight_utc(day: NaiveDate) -> DateTime<Utc> {
  let midnight = day.and_time(NaiveTime::MIN);
  match Local.from_local_datetime(&midnight) {
    LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
    // Midnight erased by a DST jump; project through the current offset.
    LocalResult::None => (midnight - *Local::now().offset()).and_utc(),
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  // ── Contacts ──────────────────────────────────────────────────────────────

  async fn list_contacts(&self) -> Result<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, full_name, phone, email, suffix, country, created_at
           FROM contacts ORDER BY created_at DESC",
        )?;
        let rows = stmt
          .query_map([], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn get_contact(&self, id: Uuid) -> Result<Option<Contact>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {CONTACT_COLS} FROM contacts WHERE id = ?1"),
              rusqlite::params![id_str],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn get_contact_by_phone(&self, phone: &str) -> Result<Option<Contact>> {
    let phone = phone.to_owned();

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {CONTACT_COLS} FROM contacts WHERE phone = ?1"),
              rusqlite::params![phone],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn create_contact(&self, input: NewContact) -> Result<Contact> {
    // The public form submits "" for a skipped email; store it as NULL
    // so email-presence queries stay a simple IS NOT NULL.
    let contact = Contact {
      id:         Uuid::new_v4(),
      full_name:  input.full_name,
      phone:      input.phone,
      email:      input.email.filter(|e| !e.is_empty()),
      suffix:     input.suffix,
      country:    input.country,
      created_at: Utc::now(),
    };

    let id_str = encode_uuid(contact.id);
    let full_name = contact.full_name.clone();
    let phone = contact.phone.clone();
    let email = contact.email.clone();
    let suffix = contact.suffix.clone();
    let country = contact.country.clone();
    let at_str = encode_dt(contact.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (id, full_name, phone, email, suffix, country, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![id_str, full_name, phone, email, suffix, country, at_str],
        )?;
        Ok(())
      })
      .await
      .map_err(|e| Error::from_unique(e, || Error::DuplicatePhone(contact.phone.clone())))?;

    Ok(contact)
  }

  async fn delete_contact(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM contacts WHERE id = ?1", rusqlite::params![id_str])?)
      })
      .await?;

    Ok(changed > 0)
  }

  async fn delete_all_contacts(&self) -> Result<u64> {
    let changed = self
      .conn
      .call(|conn| Ok(conn.execute("DELETE FROM contacts", [])?))
      .await?;

    Ok(changed as u64)
  }

  async fn contacts_created_today(&self) -> Result<Vec<Contact>> {
    let (start, end) = local_day_bounds_utc();
    self
      .contacts_where(
        "SELECT id, full_name, phone, email, suffix, country, created_at
         FROM contacts WHERE created_at >= ?1 AND created_at < ?2",
        vec![encode_dt(start), encode_dt(end)],
      )
      .await
  }

  async fn contacts_with_email(&self) -> Result<Vec<Contact>> {
    self
      .contacts_where(
        "SELECT id, full_name, phone, email, suffix, country, created_at
         FROM contacts WHERE email IS NOT NULL",
        vec![],
      )
      .await
  }

  async fn recent_contacts(&self, limit: u32) -> Result<Vec<Contact>> {
    let limit = i64::from(limit);

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, full_name, phone, email, suffix, country, created_at
           FROM contacts ORDER BY created_at DESC LIMIT ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![limit], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  // ── Suffixes ──────────────────────────────────────────────────────────────

  async fn list_suffixes(&self) -> Result<Vec<Suffix>> {
    let raws: Vec<RawSuffix> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, value, is_active, created_at
           FROM suffixes ORDER BY created_at DESC",
        )?;
        let rows = stmt
          .query_map([], RawSuffix::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSuffix::into_suffix).collect()
  }

  async fn active_suffixes(&self) -> Result<Vec<Suffix>> {
    let raws: Vec<RawSuffix> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, value, is_active, created_at
           FROM suffixes WHERE is_active = 1 ORDER BY created_at DESC",
        )?;
        let rows = stmt
          .query_map([], RawSuffix::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSuffix::into_suffix).collect()
  }

  async fn create_suffix(&self, input: NewSuffix) -> Result<Suffix> {
    let suffix = Suffix {
      id:         Uuid::new_v4(),
      value:      input.value,
      is_active:  input.is_active.unwrap_or(true),
      created_at: Utc::now(),
    };

    let id_str = encode_uuid(suffix.id);
    let value = suffix.value.clone();
    let is_active = suffix.is_active;
    let at_str = encode_dt(suffix.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO suffixes (id, value, is_active, created_at) VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id_str, value, is_active, at_str],
        )?;
        Ok(())
      })
      .await
      .map_err(|e| Error::from_unique(e, || Error::DuplicateSuffix(suffix.value.clone())))?;

    Ok(suffix)
  }

  async fn update_suffix(&self, id: Uuid, patch: SuffixPatch) -> Result<Option<Suffix>> {
    let id_str = encode_uuid(id);
    let dup_value = patch.value.clone().unwrap_or_default();

    let raw: Option<RawSuffix> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE suffixes
           SET value = COALESCE(?2, value), is_active = COALESCE(?3, is_active)
           WHERE id = ?1",
          rusqlite::params![id_str, patch.value, patch.is_active],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(
          conn
            .query_row(
              &format!("SELECT {SUFFIX_COLS} FROM suffixes WHERE id = ?1"),
              rusqlite::params![id_str],
              RawSuffix::from_row,
            )
            .optional()?,
        )
      })
      .await
      .map_err(|e| Error::from_unique(e, || Error::DuplicateSuffix(dup_value)))?;

    raw.map(RawSuffix::into_suffix).transpose()
  }

  async fn delete_suffix(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM suffixes WHERE id = ?1", rusqlite::params![id_str])?)
      })
      .await?;

    Ok(changed > 0)
  }

  async fn seed_default_suffixes(&self) -> Result<usize> {
    let inserted = self
      .conn
      .call(|conn| {
        let existing: i64 =
          conn.query_row("SELECT COUNT(*) FROM suffixes", [], |row| row.get(0))?;
        if existing > 0 {
          return Ok(0);
        }
        for value in DEFAULT_SUFFIXES {
          conn.execute(
            "INSERT INTO suffixes (id, value, is_active, created_at) VALUES (?1, ?2, 1, ?3)",
            rusqlite::params![encode_uuid(Uuid::new_v4()), value, encode_dt(Utc::now())],
          )?;
        }
        Ok(DEFAULT_SUFFIXES.len())
      })
      .await?;

    Ok(inserted)
  }

  // ── Admin sessions ────────────────────────────────────────────────────────

  async fn create_session(
    &self,
    session_token: String,
    expires_at: DateTime<Utc>,
  ) -> Result<AdminSession> {
    let session = AdminSession {
      id: Uuid::new_v4(),
      session_token,
      expires_at,
      created_at: Utc::now(),
    };

    let id_str = encode_uuid(session.id);
    let token = session.session_token.clone();
    let expires_str = encode_dt(session.expires_at);
    let at_str = encode_dt(session.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO admin_sessions (id, session_token, expires_at, created_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id_str, token, expires_str, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(session)
  }

  async fn get_session(&self, session_token: &str) -> Result<Option<AdminSession>> {
    let token = session_token.to_owned();

    let raw: Option<RawSession> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {SESSION_COLS} FROM admin_sessions WHERE session_token = ?1"),
              rusqlite::params![token],
              RawSession::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawSession::into_session).transpose()
  }

  async fn delete_session(&self, session_token: &str) -> Result<bool> {
    let token = session_token.to_owned();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM admin_sessions WHERE session_token = ?1",
          rusqlite::params![token],
        )?)
      })
      .await?;

    Ok(changed > 0)
  }

  async fn delete_expired_sessions(&self) -> Result<u64> {
    let now_str = encode_dt(Utc::now());

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM admin_sessions WHERE expires_at < ?1",
          rusqlite::params![now_str],
        )?)
      })
      .await?;

    Ok(changed as u64)
  }
}
