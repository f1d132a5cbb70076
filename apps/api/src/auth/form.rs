#![allow(dead_code)]

//! Credential form: the nested login/signup state shown while the gate is
//! unauthenticated. Local validation runs before any store call; store
//! failures are shown verbatim and never change authentication state.

use std::time::Duration;

use crate::store::{Session, SessionStore};

/// Which credential screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Login,
    Signup,
}

/// How the user wants to authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStrategy {
    Password,
    MagicLink,
}

/// Result of a single submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Local validation failed; the store was never called.
    Rejected,
    /// The store rejected or failed the call; its message is shown verbatim.
    Failed,
    /// Magic link sent; authentication completes out-of-band.
    MagicLinkSent,
    /// Signup accepted; email confirmation pending.
    ConfirmationPending,
    LoggedIn(Session),
    /// A submission is already in flight.
    InFlight,
}

/// Fixed delay before a successful signup flips the form back to login.
pub const SIGNUP_REVERT_DELAY: Duration = Duration::from_secs(3);

const MIN_PASSWORD_CHARS: usize = 6;

/// Form state. Holds no store reference; the session context is passed to
/// `submit` explicitly.
#[derive(Debug)]
pub struct CredentialForm {
    mode: FormMode,
    strategy: AuthStrategy,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    error: Option<String>,
    notice: Option<String>,
    submitting: bool,
}

impl CredentialForm {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Login,
            strategy: AuthStrategy::Password,
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            full_name: String::new(),
            error: None,
            notice: None,
            submitting: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn strategy(&self) -> AuthStrategy {
        self.strategy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Switching screens clears any previous error or notice.
    pub fn set_mode(&mut self, mode: FormMode) {
        self.mode = mode;
        self.clear_messages();
    }

    pub fn set_strategy(&mut self, strategy: AuthStrategy) {
        self.strategy = strategy;
        self.clear_messages();
    }

    /// Drives the current mode/strategy against the store. Re-entrant
    /// submissions are refused while one is in flight.
    pub async fn submit(&mut self, store: &dyn SessionStore) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::InFlight;
        }
        self.clear_messages();
        self.submitting = true;
        let outcome = match (self.strategy, self.mode) {
            (AuthStrategy::MagicLink, _) => self.submit_magic_link(store).await,
            (AuthStrategy::Password, FormMode::Signup) => self.submit_signup(store).await,
            (AuthStrategy::Password, FormMode::Login) => self.submit_login(store).await,
        };
        self.submitting = false;
        outcome
    }

    /// After `ConfirmationPending`, waits out the fixed delay and returns
    /// the form to the login screen.
    pub async fn revert_to_login(&mut self) {
        tokio::time::sleep(SIGNUP_REVERT_DELAY).await;
        self.mode = FormMode::Login;
        self.notice = None;
    }

    async fn submit_magic_link(&mut self, store: &dyn SessionStore) -> SubmitOutcome {
        match store.send_magic_link(&self.email).await {
            Ok(()) => {
                self.notice = Some("Check your email for a magic link to log in!".to_string());
                self.email.clear();
                SubmitOutcome::MagicLinkSent
            }
            Err(err) => {
                self.error = Some(err.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    async fn submit_signup(&mut self, store: &dyn SessionStore) -> SubmitOutcome {
        if self.password != self.confirm_password {
            self.error = Some("Passwords do not match".to_string());
            return SubmitOutcome::Rejected;
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            self.error = Some("Password must be at least 6 characters".to_string());
            return SubmitOutcome::Rejected;
        }
        match store
            .sign_up(&self.email, &self.password, &self.full_name)
            .await
        {
            Ok(()) => {
                self.notice =
                    Some("Sign up successful! Please check your email to confirm.".to_string());
                self.email.clear();
                self.password.clear();
                self.confirm_password.clear();
                self.full_name.clear();
                SubmitOutcome::ConfirmationPending
            }
            Err(err) => {
                self.error = Some(err.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    async fn submit_login(&mut self, store: &dyn SessionStore) -> SubmitOutcome {
        match store
            .sign_in_with_password(&self.email, &self.password)
            .await
        {
            Ok(session) => {
                self.notice = Some("Logged in successfully!".to_string());
                self.email.clear();
                self.password.clear();
                SubmitOutcome::LoggedIn(session)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    fn clear_messages(&mut self) {
        self.error = None;
        self.notice = None;
    }
}

impl Default for CredentialForm {
    fn default() -> Self {
        Self::new()
    }
}
