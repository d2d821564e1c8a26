//! HTTP layer for Kontak.
//!
//! Exposes an axum [`Router`] implementing the public registration API
//! and the bearer-session admin API, backed by any [`ContactStore`].

pub mod auth;
pub mod error;
pub mod handlers;
pub mod sweeper;

pub use error::Error;
pub use sweeper::SessionSweeper;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{delete, get, post, put},
};
use kontak_core::ContactStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use auth::AuthConfig;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:                String,
  pub port:                u16,
  pub db_path:             PathBuf,
  pub admin_username:      String,
  /// PHC string; generate with `server --hash-password`.
  pub admin_password_hash: String,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers. The store is
/// constructed once at startup and injected here; nothing is global.
#[derive(Clone)]
pub struct AppState<S: ContactStore> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
  pub auth:   Arc<AuthConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the Kontak API.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  Router::new()
    // Public
    .route("/api/suffixes",             get(handlers::suffixes::public_list::<S>))
    .route("/api/contacts",             post(handlers::contacts::register::<S>))
    .route("/api/contacts/recent",      get(handlers::contacts::recent::<S>))
    // Admin auth
    .route("/api/admin/login",          post(handlers::session::login::<S>))
    .route("/api/admin/logout",         post(handlers::session::logout::<S>))
    // Admin contacts
    .route(
      "/api/admin/contacts",
      get(handlers::contacts::admin_list::<S>).delete(handlers::contacts::delete_all::<S>),
    )
    .route("/api/admin/contacts/{id}",  delete(handlers::contacts::delete_one::<S>))
    .route("/api/admin/stats",          get(handlers::stats::stats::<S>))
    // Admin exports
    .route("/api/admin/export/vcf",     get(handlers::exports::vcf::<S>))
    .route("/api/admin/export/csv",     get(handlers::exports::csv::<S>))
    // Admin suffixes
    .route(
      "/api/admin/suffixes",
      get(handlers::suffixes::admin_list::<S>).post(handlers::suffixes::create::<S>),
    )
    .route(
      "/api/admin/suffixes/{id}",
      put(handlers::suffixes::update::<S>).delete(handlers::suffixes::delete::<S>),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use chrono::{Duration, Utc};
  use kontak_store_sqlite::SqliteStore;
  use rand_core::OsRng;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  const PASSWORD: &str = "secret";

  async fn make_state() -> AppState<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
      .hash_password(PASSWORD.as_bytes(), &salt)
      .unwrap()
      .to_string();

    AppState {
      store:  Arc::new(store),
      config: Arc::new(ServerConfig {
        host:                "127.0.0.1".to_string(),
        port:                3000,
        db_path:             PathBuf::from(":memory:"),
        admin_username:      "admin".to_string(),
        admin_password_hash: hash.clone(),
      }),
      auth: Arc::new(AuthConfig {
        username:      "admin".to_string(),
        password_hash: hash,
      }),
    }
  }

  async fn send(
    state: &AppState<SqliteStore>,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
  ) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
      builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let req = match body {
      Some(v) => builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(v.to_string()))
        .unwrap(),
      None => builder.body(Body::empty()).unwrap(),
    };
    router(state.clone()).oneshot(req).await.unwrap()
  }

  async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  async fn body_text(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  async fn login(state: &AppState<SqliteStore>) -> String {
    let resp = send(
      state,
      "POST",
      "/api/admin/login",
      None,
      Some(json!({ "username": "admin", "password": PASSWORD })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    body["sessionToken"].as_str().unwrap().to_string()
  }

  fn registration(phone: &str) -> Value {
    json!({
      "fullName": "Marie Joseph BOOST.1🚀",
      "phone": phone,
      "email": "marie@example.com",
      "suffix": "BOOST.1🚀",
      "country": "HT",
    })
  }

  // ── Login / sessions ─────────────────────────────────────────────────────

  #[tokio::test]
  async fn login_issues_session_and_token_grants_admin_access() {
    let state = make_state().await;
    let token = login(&state).await;
    assert_eq!(token.len(), 64);

    let resp = send(&state, "GET", "/api/admin/contacts", Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn wrong_credentials_are_rejected() {
    let state = make_state().await;
    for (user, pass) in [("admin", "wrong"), ("root", PASSWORD)] {
      let resp = send(
        &state,
        "POST",
        "/api/admin/login",
        None,
        Some(json!({ "username": user, "password": pass })),
      )
      .await;
      assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
      let body = body_json(resp).await;
      assert!(body["message"].is_string());
    }
  }

  #[tokio::test]
  async fn admin_routes_reject_missing_and_fabricated_tokens() {
    let state = make_state().await;

    let resp = send(&state, "GET", "/api/admin/contacts", None, None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = send(&state, "GET", "/api/admin/stats", Some("0f".repeat(32).as_str()), None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  }

  #[tokio::test]
  async fn expired_session_is_rejected_even_before_the_sweep() {
    let state = make_state().await;
    state
      .store
      .create_session("stale-token".to_string(), Utc::now() - Duration::seconds(1))
      .await
      .unwrap();

    let resp = send(&state, "GET", "/api/admin/contacts", Some("stale-token"), None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  }

  #[tokio::test]
  async fn logout_invalidates_the_token_and_is_idempotent() {
    let state = make_state().await;
    let token = login(&state).await;

    let resp = send(&state, "POST", "/api/admin/logout", Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["success"], json!(true));

    let resp = send(&state, "GET", "/api/admin/contacts", Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Logging out again still answers success.
    let resp = send(&state, "POST", "/api/admin/logout", Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
  }

  // ── Registration ─────────────────────────────────────────────────────────

  #[tokio::test]
  async fn register_creates_a_retrievable_contact() {
    let state = make_state().await;

    let resp = send(&state, "POST", "/api/contacts", None, Some(registration("+50912345678"))).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["phone"], "+50912345678");
    assert!(body["id"].is_string());

    let token = login(&state).await;
    let resp = send(&state, "GET", "/api/admin/contacts", Some(&token), None).await;
    let list = body_json(resp).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn duplicate_phone_answers_409_and_keeps_one_row() {
    let state = make_state().await;
    send(&state, "POST", "/api/contacts", None, Some(registration("+50912345678"))).await;

    let resp = send(&state, "POST", "/api/contacts", None, Some(registration("+50912345678"))).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("already registered"));

    let token = login(&state).await;
    let resp = send(&state, "GET", "/api/admin/contacts", Some(&token), None).await;
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn invalid_registration_answers_400_with_a_message() {
    let state = make_state().await;

    let mut bad = registration("+50912345678");
    bad["fullName"] = json!("M");
    let resp = send(&state, "POST", "/api/contacts", None, Some(bad)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("fullName"));
  }

  #[tokio::test]
  async fn malformed_json_answers_400() {
    let state = make_state().await;
    let req = Request::builder()
      .method("POST")
      .uri("/api/contacts")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from("{not json"))
      .unwrap();
    let resp = router(state.clone()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["message"].is_string());
  }

  #[tokio::test]
  async fn non_numeric_limit_answers_400_with_a_json_message() {
    let state = make_state().await;

    let resp = send(&state, "GET", "/api/contacts/recent?limit=abc", None, None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["message"].is_string());
  }

  #[tokio::test]
  async fn non_uuid_path_answers_400_with_a_json_message() {
    let state = make_state().await;
    let token = login(&state).await;

    let resp =
      send(&state, "DELETE", "/api/admin/contacts/not-a-uuid", Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["message"].is_string());

    let resp = send(
      &state,
      "PUT",
      "/api/admin/suffixes/not-a-uuid",
      Some(&token),
      Some(json!({ "isActive": false })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["message"].is_string());
  }

  #[tokio::test]
  async fn recent_defaults_to_five_newest_first() {
    let state = make_state().await;
    for i in 1..=6 {
      send(
        &state,
        "POST",
        "/api/contacts",
        None,
        Some(registration(&format!("+5091111111{i}"))),
      )
      .await;
    }

    let resp = send(&state, "GET", "/api/contacts/recent", None, None).await;
    let list = body_json(resp).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 5);
    assert_eq!(list[0]["phone"], "+50911111116");

    let resp = send(&state, "GET", "/api/contacts/recent?limit=2", None, None).await;
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 2);
  }

  // ── Admin contact management ─────────────────────────────────────────────

  #[tokio::test]
  async fn delete_contact_by_id_and_missing_id_is_404() {
    let state = make_state().await;
    let resp = send(&state, "POST", "/api/contacts", None, Some(registration("+50912345678"))).await;
    let id = body_json(resp).await["id"].as_str().unwrap().to_string();

    let token = login(&state).await;
    let resp = send(&state, "DELETE", &format!("/api/admin/contacts/{id}"), Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&state, "DELETE", &format!("/api/admin/contacts/{id}"), Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn stats_count_total_today_and_email() {
    let state = make_state().await;
    send(&state, "POST", "/api/contacts", None, Some(registration("+50911111111"))).await;
    let mut no_mail = registration("+50922222222");
    no_mail["email"] = json!("");
    send(&state, "POST", "/api/contacts", None, Some(no_mail)).await;

    let token = login(&state).await;
    let resp = send(&state, "GET", "/api/admin/stats", Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let stats = body_json(resp).await;
    assert_eq!(stats["totalContacts"], json!(2));
    assert_eq!(stats["todayContacts"], json!(2));
    assert_eq!(stats["emailContacts"], json!(1));
  }

  // ── Exports ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn exports_carry_attachment_headers_and_one_entry_per_contact() {
    let state = make_state().await;
    send(&state, "POST", "/api/contacts", None, Some(registration("+50911111111"))).await;
    send(&state, "POST", "/api/contacts", None, Some(registration("+50922222222"))).await;

    let token = login(&state).await;

    let resp = send(&state, "GET", "/api/admin/export/vcf", Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert_eq!(ct, "text/vcard");
    let cd = resp.headers().get(header::CONTENT_DISPOSITION).unwrap().to_str().unwrap();
    assert!(cd.contains("kerventz_contacts.vcf"), "got: {cd}");
    let vcf = body_text(resp).await;
    assert_eq!(vcf.matches("BEGIN:VCARD").count(), 2);

    let resp = send(&state, "GET", "/api/admin/export/csv", Some(&token), None).await;
    let cd = resp.headers().get(header::CONTENT_DISPOSITION).unwrap().to_str().unwrap();
    assert!(cd.contains("kerventz_contacts.csv"), "got: {cd}");
    let csv = body_text(resp).await;
    assert_eq!(csv.lines().count(), 3, "header plus two rows:\n{csv}");
  }

  #[tokio::test]
  async fn exports_after_delete_all_are_empty() {
    let state = make_state().await;
    send(&state, "POST", "/api/contacts", None, Some(registration("+50911111111"))).await;

    let token = login(&state).await;
    let resp = send(&state, "DELETE", "/api/admin/contacts", Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&state, "GET", "/api/admin/export/vcf", Some(&token), None).await;
    assert_eq!(body_text(resp).await, "");

    let resp = send(&state, "GET", "/api/admin/export/csv", Some(&token), None).await;
    assert_eq!(body_text(resp).await, "Name,Phone,Email,Country,Suffix,Date\n");
  }

  // ── Suffixes ─────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn public_listing_tracks_the_active_flag() {
    let state = make_state().await;
    let token = login(&state).await;

    let resp = send(
      &state,
      "POST",
      "/api/admin/suffixes",
      Some(&token),
      Some(json!({ "value": "BOOST.9" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    assert_eq!(created["isActive"], json!(true));
    let id = created["id"].as_str().unwrap().to_string();

    let resp = send(&state, "GET", "/api/suffixes", None, None).await;
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 1);

    // Deactivate: the public form loses it, the admin listing keeps it.
    let resp = send(
      &state,
      "PUT",
      &format!("/api/admin/suffixes/{id}"),
      Some(&token),
      Some(json!({ "isActive": false })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["isActive"], json!(false));

    let resp = send(&state, "GET", "/api/suffixes", None, None).await;
    assert!(body_json(resp).await.as_array().unwrap().is_empty());

    let resp = send(&state, "GET", "/api/admin/suffixes", Some(&token), None).await;
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn duplicate_suffix_value_answers_409() {
    let state = make_state().await;
    let token = login(&state).await;

    send(&state, "POST", "/api/admin/suffixes", Some(&token), Some(json!({ "value": "BOOST.9" })))
      .await;
    let resp = send(
      &state,
      "POST",
      "/api/admin/suffixes",
      Some(&token),
      Some(json!({ "value": "BOOST.9" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
  }

  #[tokio::test]
  async fn suffix_update_and_delete_answer_404_when_absent() {
    let state = make_state().await;
    let token = login(&state).await;
    let ghost = uuid::Uuid::new_v4();

    let resp = send(
      &state,
      "PUT",
      &format!("/api/admin/suffixes/{ghost}"),
      Some(&token),
      Some(json!({ "isActive": false })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&state, "DELETE", &format!("/api/admin/suffixes/{ghost}"), Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn empty_suffix_value_answers_400() {
    let state = make_state().await;
    let token = login(&state).await;

    let resp = send(
      &state,
      "POST",
      "/api/admin/suffixes",
      Some(&token),
      Some(json!({ "value": "" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }
}
