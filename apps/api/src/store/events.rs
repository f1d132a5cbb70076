#![allow(dead_code)]

//! Change-notification stream for the session store: an explicit observer
//! registry with a register/unregister pair. Unregistration is tied to the
//! `Subscription` guard's drop, so a listener can never outlive its owner.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

use uuid::Uuid;

use super::Session;

/// A change pushed by the session store: login, sign-out, or token refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthChange {
    SignedIn(Session),
    SignedOut,
    TokenRefreshed(Session),
}

pub type Listener = Arc<dyn Fn(&AuthChange) + Send + Sync>;

/// Registry of auth-change listeners. Emission runs on a snapshot, so a
/// callback may register or drop subscriptions without deadlocking.
#[derive(Default)]
pub struct AuthEvents {
    listeners: Mutex<HashMap<Uuid, Listener>>,
}

impl AuthEvents {
    pub fn subscribe(self: &Arc<Self>, listener: Listener) -> Subscription {
        let id = Uuid::new_v4();
        self.listeners
            .lock()
            .expect("listener registry poisoned")
            .insert(id, listener);
        Subscription {
            id,
            hub: Arc::downgrade(self),
        }
    }

    pub fn emit(&self, change: &AuthChange) {
        let snapshot: Vec<Listener> = self
            .listeners
            .lock()
            .expect("listener registry poisoned")
            .values()
            .cloned()
            .collect();
        for listener in snapshot {
            listener(change);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .expect("listener registry poisoned")
            .len()
    }
}

/// Handle to a registered listener. Unregisters exactly once, on drop.
pub struct Subscription {
    id: Uuid,
    hub: Weak<AuthEvents>,
}

impl Subscription {
    /// Explicit release; equivalent to dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.listeners
                .lock()
                .expect("listener registry poisoned")
                .remove(&self.id);
        }
    }
}
