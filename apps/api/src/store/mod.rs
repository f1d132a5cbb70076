#![allow(dead_code)]

//! Session store abstraction: hosted identity (auth) plus two data tables
//! (`users`, `roadmaps`). The store is an external collaborator; this
//! module only talks to it and relays its answers.

pub mod events;
#[cfg(test)]
pub mod mock;
pub mod supabase;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use self::events::{Listener, Subscription};

/// Authenticated session as reported by the store. Observed, never
/// mutated, by the rest of the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub access_token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Row shape for a roadmap insert. Append-only: every save is a fresh row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapRecord {
    pub user_id: String,
    pub roadmap: Value,
    pub created_at: String,
}

/// Roadmap row as returned by the store. The payload stays opaque here;
/// display mapping happens in the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapRow {
    #[serde(default)]
    pub id: Option<Value>,
    pub user_id: String,
    pub roadmap: Value,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },
}

/// The session store's full surface. Held as `Arc<dyn SessionStore>` and
/// threaded explicitly through the gate, form, dashboard, and proxy, so
/// there is no hidden singleton client.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The session this client currently holds, if any.
    async fn current_session(&self) -> Result<Option<Session>, StoreError>;

    /// Registers a new account. Confirmation is pending until the emailed
    /// link is clicked, so no session is created here.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<(), StoreError>;

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, StoreError>;

    /// Emails a one-time login link. Never changes session state.
    async fn send_magic_link(&self, email: &str) -> Result<(), StoreError>;

    /// Ends the current session; observers hear about it via `SignedOut`.
    async fn sign_out(&self) -> Result<(), StoreError>;

    /// Registers a change-notification listener. Dropping the returned
    /// guard unregisters it.
    fn subscribe(&self, listener: Listener) -> Subscription;

    /// Insert-or-update on the `users` table, keyed by the payload's
    /// unique identifier. Returns the stored rows.
    async fn upsert_profile(&self, profile: &Value) -> Result<Vec<Value>, StoreError>;

    /// Plain insert into the `roadmaps` table. Returns the inserted rows.
    async fn insert_roadmap(&self, record: &RoadmapRecord) -> Result<Vec<Value>, StoreError>;

    async fn roadmaps_for_user(&self, user_id: &str) -> Result<Vec<RoadmapRow>, StoreError>;
}
