//! Call-recording store used by gate, form, dashboard, and proxy tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::events::{AuthChange, AuthEvents, Listener, Subscription};
use super::{RoadmapRecord, RoadmapRow, Session, SessionStore, StoreError};

pub struct MockStore {
    events: Arc<AuthEvents>,
    session: Mutex<Option<Session>>,
    calls: Mutex<Vec<&'static str>>,
    fail_message: Mutex<Option<String>>,
    pub roadmap_rows: Mutex<Vec<RoadmapRow>>,
    pub inserted: Mutex<Vec<RoadmapRecord>>,
}

impl MockStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            events: Arc::new(AuthEvents::default()),
            session: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            fail_message: Mutex::new(None),
            roadmap_rows: Mutex::new(Vec::new()),
            inserted: Mutex::new(Vec::new()),
        })
    }

    pub fn with_session(session: Session) -> Arc<Self> {
        let store = Self::new();
        *store.session.lock().unwrap() = Some(session);
        store
    }

    pub fn session_fixture(user_id: &str) -> Session {
        Session {
            user_id: user_id.to_string(),
            email: format!("{user_id}@example.com"),
            access_token: "token".to_string(),
            expires_at: None,
        }
    }

    /// Makes the next store call fail with this message.
    pub fn fail_next(&self, message: &str) {
        *self.fail_message.lock().unwrap() = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn hub(&self) -> Arc<AuthEvents> {
        Arc::clone(&self.events)
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }

    fn take_failure(&self) -> Option<StoreError> {
        self.fail_message.lock().unwrap().take().map(|message| StoreError::Api {
            status: 500,
            message,
        })
    }
}

#[async_trait]
impl SessionStore for MockStore {
    async fn current_session(&self) -> Result<Option<Session>, StoreError> {
        self.record("current_session");
        Ok(self.session.lock().unwrap().clone())
    }

    async fn sign_up(
        &self,
        _email: &str,
        _password: &str,
        _full_name: &str,
    ) -> Result<(), StoreError> {
        self.record("sign_up");
        match self.take_failure() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        _password: &str,
    ) -> Result<Session, StoreError> {
        self.record("sign_in_with_password");
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let session = Session {
            user_id: "user-1".to_string(),
            email: email.to_string(),
            access_token: "token".to_string(),
            expires_at: None,
        };
        *self.session.lock().unwrap() = Some(session.clone());
        self.events.emit(&AuthChange::SignedIn(session.clone()));
        Ok(session)
    }

    async fn send_magic_link(&self, _email: &str) -> Result<(), StoreError> {
        self.record("send_magic_link");
        match self.take_failure() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn sign_out(&self) -> Result<(), StoreError> {
        self.record("sign_out");
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        *self.session.lock().unwrap() = None;
        self.events.emit(&AuthChange::SignedOut);
        Ok(())
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.events.subscribe(listener)
    }

    async fn upsert_profile(&self, profile: &Value) -> Result<Vec<Value>, StoreError> {
        self.record("upsert_profile");
        match self.take_failure() {
            Some(err) => Err(err),
            None => Ok(vec![profile.clone()]),
        }
    }

    async fn insert_roadmap(&self, record: &RoadmapRecord) -> Result<Vec<Value>, StoreError> {
        self.record("insert_roadmap");
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        self.inserted.lock().unwrap().push(record.clone());
        Ok(vec![serde_json::to_value(record).expect("record serializes")])
    }

    async fn roadmaps_for_user(&self, _user_id: &str) -> Result<Vec<RoadmapRow>, StoreError> {
        self.record("roadmaps_for_user");
        match self.take_failure() {
            Some(err) => Err(err),
            None => Ok(self.roadmap_rows.lock().unwrap().clone()),
        }
    }
}
