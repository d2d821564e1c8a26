//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `kontak-store-sqlite`). Higher layers (`kontak-server`) depend on
//! this abstraction, not on any concrete backend.
//!
//! All methods return `Send` futures so the trait can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`). No operation
//! touches more than one entity type, so backends need no cross-entity
//! transactions.

use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
  contact::{Contact, NewContact},
  session::AdminSession,
  suffix::{NewSuffix, Suffix, SuffixPatch},
};

/// Abstraction over a Kontak storage backend.
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Contacts ──────────────────────────────────────────────────────────

  /// All contacts, newest first.
  fn list_contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// One contact by id. `None` if not found.
  fn get_contact(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// One contact by its unique phone number. `None` if not found.
  fn get_contact_by_phone<'a>(
    &'a self,
    phone: &'a str,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + 'a;

  /// Persist a new contact. The id and `created_at` are assigned by the
  /// store. Fails if the phone number is already registered.
  fn create_contact(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Delete one contact. Returns whether a matching row existed.
  fn delete_contact(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Delete every contact. Returns the number of rows removed.
  fn delete_all_contacts(
    &self,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Contacts created since local midnight today.
  fn contacts_created_today(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Contacts that supplied an email address.
  fn contacts_with_email(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// The `limit` most recently created contacts, newest first.
  fn recent_contacts(
    &self,
    limit: u32,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  // ── Suffixes ──────────────────────────────────────────────────────────

  /// All suffixes, newest first.
  fn list_suffixes(
    &self,
  ) -> impl Future<Output = Result<Vec<Suffix>, Self::Error>> + Send + '_;

  /// Only suffixes whose active flag is set — what the public form sees.
  fn active_suffixes(
    &self,
  ) -> impl Future<Output = Result<Vec<Suffix>, Self::Error>> + Send + '_;

  /// Persist a new suffix. Fails if the value already exists.
  fn create_suffix(
    &self,
    input: NewSuffix,
  ) -> impl Future<Output = Result<Suffix, Self::Error>> + Send + '_;

  /// Merge the supplied fields onto one suffix. `None` if not found.
  fn update_suffix(
    &self,
    id: Uuid,
    patch: SuffixPatch,
  ) -> impl Future<Output = Result<Option<Suffix>, Self::Error>> + Send + '_;

  /// Delete one suffix. Returns whether a matching row existed.
  fn delete_suffix(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Insert the default suffix set when the table is empty; a no-op
  /// otherwise. Returns the number of rows inserted. Called once at
  /// startup before any request is served.
  fn seed_default_suffixes(
    &self,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  // ── Admin sessions ────────────────────────────────────────────────────

  /// Persist a freshly issued session.
  fn create_session(
    &self,
    session_token: String,
    expires_at: DateTime<Utc>,
  ) -> impl Future<Output = Result<AdminSession, Self::Error>> + Send + '_;

  /// Look up a session by token. Expiry is the caller's comparison.
  fn get_session<'a>(
    &'a self,
    session_token: &'a str,
  ) -> impl Future<Output = Result<Option<AdminSession>, Self::Error>> + Send + 'a;

  /// Delete the session for a token. Returns whether a row existed.
  fn delete_session<'a>(
    &'a self,
    session_token: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Delete every session past its expiry. Returns the number removed.
  fn delete_expired_sessions(
    &self,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
