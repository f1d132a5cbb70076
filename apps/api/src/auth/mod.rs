#![allow(dead_code)]

//! Auth gate: decides between the sign-in screen and the application
//! shell, and stays synchronized with the session store's notifications.

pub mod form;

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::store::events::{AuthChange, Subscription};
use crate::store::{Session, SessionStore, StoreError};

/// Authentication state as seen by the app shell.
///
/// `Guest` is a local-only bypass: there is no session and no user id, so
/// anything expecting a real identity must treat it like signed-out.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Checking,
    Unauthenticated,
    Authenticated(Session),
    Guest,
}

/// What the gate renders for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    Loading,
    SignIn,
    App,
}

/// Owns the authentication flag for the whole shell. No child view may
/// read auth state while the gate is still `Checking`. Dropping the gate
/// releases its store subscription.
pub struct AuthGate {
    store: Arc<dyn SessionStore>,
    state: Arc<Mutex<AuthState>>,
    _subscription: Subscription,
}

impl AuthGate {
    /// Subscribes to store notifications first, then runs the one-time
    /// session check. A notification that lands during the check wins
    /// over the check's result.
    pub async fn mount(store: Arc<dyn SessionStore>) -> Self {
        let state = Arc::new(Mutex::new(AuthState::Checking));

        let subscription = store.subscribe({
            let state = Arc::clone(&state);
            Arc::new(move |change: &AuthChange| {
                let next = state_for(change);
                debug!("auth change notification: {next:?}");
                *state.lock().expect("auth state poisoned") = next;
            })
        });

        let initial = match store.current_session().await {
            Ok(Some(session)) => AuthState::Authenticated(session),
            Ok(None) => AuthState::Unauthenticated,
            Err(err) => {
                debug!("session check failed, treating as signed out: {err}");
                AuthState::Unauthenticated
            }
        };

        {
            let mut current = state.lock().expect("auth state poisoned");
            if *current == AuthState::Checking {
                *current = initial;
            }
        }

        Self {
            store,
            state,
            _subscription: subscription,
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.lock().expect("auth state poisoned").clone()
    }

    pub fn view(&self) -> GateView {
        match self.state() {
            AuthState::Checking => GateView::Loading,
            AuthState::Unauthenticated => GateView::SignIn,
            AuthState::Authenticated(_) | AuthState::Guest => GateView::App,
        }
    }

    /// Demo-mode escape hatch: flips straight to `Guest` without touching
    /// the store. A later store notification overrides it.
    pub fn continue_as_guest(&self) {
        *self.state.lock().expect("auth state poisoned") = AuthState::Guest;
    }

    /// Asks the store to end the session. The state transition arrives
    /// via the resulting `SignedOut` notification, not here.
    pub async fn sign_out(&self) -> Result<(), StoreError> {
        self.store.sign_out().await
    }
}

/// Presence of a session means authenticated; absence means not.
fn state_for(change: &AuthChange) -> AuthState {
    match change {
        AuthChange::SignedIn(session) | AuthChange::TokenRefreshed(session) => {
            AuthState::Authenticated(session.clone())
        }
        AuthChange::SignedOut => AuthState::Unauthenticated,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::store::mock::MockStore;

    #[tokio::test]
    async fn test_mount_with_existing_session_is_authenticated() {
        let store = MockStore::with_session(MockStore::session_fixture("user-1"));
        let gate = AuthGate::mount(store.clone()).await;

        assert!(matches!(gate.state(), AuthState::Authenticated(_)));
        assert_eq!(gate.view(), GateView::App);
        assert_eq!(store.calls(), vec!["current_session"]);
    }

    #[tokio::test]
    async fn test_mount_without_session_shows_sign_in() {
        let store = MockStore::new();
        let gate = AuthGate::mount(store.clone()).await;

        assert_eq!(gate.state(), AuthState::Unauthenticated);
        assert_eq!(gate.view(), GateView::SignIn);
    }

    #[tokio::test]
    async fn test_password_login_transitions_exactly_once() {
        let store = MockStore::new();
        let gate = AuthGate::mount(store.clone()).await;
        assert_eq!(gate.state(), AuthState::Unauthenticated);

        let signed_in = Arc::new(AtomicUsize::new(0));
        let hub = store.hub();
        let _probe = hub.subscribe({
            let signed_in = Arc::clone(&signed_in);
            Arc::new(move |change: &AuthChange| {
                if matches!(change, AuthChange::SignedIn(_)) {
                    signed_in.fetch_add(1, Ordering::SeqCst);
                }
            })
        });

        store
            .sign_in_with_password("alice@example.com", "secret")
            .await
            .unwrap();

        assert!(matches!(gate.state(), AuthState::Authenticated(_)));
        assert_eq!(signed_in.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_notifications_map_without_intermediate_states() {
        let session = MockStore::session_fixture("user-1");
        assert_eq!(
            state_for(&AuthChange::SignedIn(session.clone())),
            AuthState::Authenticated(session.clone())
        );
        assert_eq!(
            state_for(&AuthChange::TokenRefreshed(session.clone())),
            AuthState::Authenticated(session)
        );
        assert_eq!(state_for(&AuthChange::SignedOut), AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_guest_continue_makes_no_store_call() {
        let store = MockStore::new();
        let gate = AuthGate::mount(store.clone()).await;

        gate.continue_as_guest();

        assert_eq!(gate.state(), AuthState::Guest);
        assert_eq!(gate.view(), GateView::App);
        // Only the mount-time session check reached the store.
        assert_eq!(store.calls(), vec!["current_session"]);
    }

    #[tokio::test]
    async fn test_sign_out_reverts_to_unauthenticated() {
        let store = MockStore::with_session(MockStore::session_fixture("user-1"));
        let gate = AuthGate::mount(store.clone()).await;
        assert!(matches!(gate.state(), AuthState::Authenticated(_)));

        gate.sign_out().await.unwrap();

        assert_eq!(gate.state(), AuthState::Unauthenticated);
        assert_eq!(gate.view(), GateView::SignIn);
    }

    #[tokio::test]
    async fn test_notification_overrides_guest() {
        let store = MockStore::new();
        let gate = AuthGate::mount(store.clone()).await;
        gate.continue_as_guest();

        store.hub().emit(&AuthChange::SignedOut);

        assert_eq!(gate.state(), AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_drop_releases_subscription() {
        let store = MockStore::new();
        let gate = AuthGate::mount(store.clone()).await;
        assert_eq!(store.hub().listener_count(), 1);

        drop(gate);

        assert_eq!(store.hub().listener_count(), 0);
    }
}
