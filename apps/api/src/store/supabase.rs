//! Supabase client: the single point of entry for all store calls.
//!
//! ARCHITECTURAL RULE: no other module may talk to the Supabase REST API
//! directly. Auth goes through GoTrue (`/auth/v1`), tables through
//! PostgREST (`/rest/v1`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::events::{AuthChange, AuthEvents, Listener, Subscription};
use super::{RoadmapRecord, RoadmapRow, Session, SessionStore, StoreError};

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    full_name: &'a str,
}

#[derive(Serialize)]
struct OtpRequest<'a> {
    email: &'a str,
    create_user: bool,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    user: AuthUser,
}

#[derive(Deserialize)]
struct AuthUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// Supabase-hosted session store. The server hands it the privileged
/// service key; an interactive shell hands it the public anon key.
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    api_key: String,
    session: Mutex<Option<Session>>,
    events: Arc<AuthEvents>,
}

impl SupabaseStore {
    /// No request timeout is configured; a hung store call stays in
    /// flight and its caller stays suspended.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            session: Mutex::new(None),
            events: Arc::new(AuthEvents::default()),
        }
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn with_service_headers(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    async fn check(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            format!("store returned status {status}")
        } else {
            extract_message(&body)
        };
        Err(StoreError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn set_session(&self, session: Option<Session>) {
        *self.session.lock().expect("session slot poisoned") = session;
    }
}

#[async_trait]
impl SessionStore for SupabaseStore {
    async fn current_session(&self) -> Result<Option<Session>, StoreError> {
        Ok(self.session.lock().expect("session slot poisoned").clone())
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<(), StoreError> {
        let response = self
            .client
            .post(self.auth_url("signup"))
            .header("apikey", &self.api_key)
            .json(&SignUpRequest {
                email,
                password,
                data: SignUpMetadata { full_name },
            })
            .send()
            .await?;
        Self::check(response).await?;
        debug!("signup accepted for {email}, confirmation pending");
        Ok(())
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, StoreError> {
        let response = self
            .client
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.api_key)
            .json(&PasswordGrant { email, password })
            .send()
            .await?;
        let token: TokenResponse = Self::check(response).await?.json().await?;

        let session = Session {
            user_id: token.user.id,
            email: token.user.email.unwrap_or_else(|| email.to_string()),
            access_token: token.access_token,
            expires_at: token.expires_in.map(|secs| Utc::now() + Duration::seconds(secs)),
        };
        self.set_session(Some(session.clone()));
        self.events.emit(&AuthChange::SignedIn(session.clone()));
        Ok(session)
    }

    async fn send_magic_link(&self, email: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .post(self.auth_url("otp"))
            .header("apikey", &self.api_key)
            .json(&OtpRequest {
                email,
                create_user: true,
            })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), StoreError> {
        let token = self
            .session
            .lock()
            .expect("session slot poisoned")
            .as_ref()
            .map(|s| s.access_token.clone());
        if let Some(token) = token {
            let response = self
                .client
                .post(self.auth_url("logout"))
                .header("apikey", &self.api_key)
                .header("Authorization", format!("Bearer {token}"))
                .send()
                .await?;
            Self::check(response).await?;
        }
        self.set_session(None);
        self.events.emit(&AuthChange::SignedOut);
        Ok(())
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.events.subscribe(listener)
    }

    async fn upsert_profile(&self, profile: &Value) -> Result<Vec<Value>, StoreError> {
        let response = self
            .with_service_headers(self.client.post(self.rest_url("users")))
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(profile)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn insert_roadmap(&self, record: &RoadmapRecord) -> Result<Vec<Value>, StoreError> {
        let response = self
            .with_service_headers(self.client.post(self.rest_url("roadmaps")))
            .header("Prefer", "return=representation")
            .json(&[record])
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn roadmaps_for_user(&self, user_id: &str) -> Result<Vec<RoadmapRow>, StoreError> {
        let filter = format!("eq.{user_id}");
        let response = self
            .with_service_headers(self.client.get(self.rest_url("roadmaps")))
            .query(&[("select", "*"), ("user_id", filter.as_str())])
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}

/// Pulls the human-readable message out of a GoTrue/PostgREST error body,
/// falling back to the raw body.
fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["message", "msg", "error_description", "error"] {
            if let Some(text) = value.get(key).and_then(Value::as_str) {
                return text.to_string();
            }
        }
    }
    body.to_string()
}
