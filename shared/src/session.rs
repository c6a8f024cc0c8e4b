//! Session view state machine.
//!
//! [`SessionController`] owns the current [`View`] and the credential store.
//! The composition root creates one, calls [`SessionController::initialize`]
//! before the first render, and hands child views callbacks that end up in
//! [`SessionController::transition_to`] or [`SessionController::logout`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::{ApiError, UserResponse};
use crate::protocol::ACCESS_TOKEN_KEY;
use crate::store::{CredentialStore, StoreError};

/// The screen currently shown. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Main,
    Login,
    Signup,
    Dashboard,
}

impl View {
    pub const ALL: [View; 4] = [View::Main, View::Login, View::Signup, View::Dashboard];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Main => "main",
            View::Login => "login",
            View::Signup => "signup",
            View::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown view tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownView(pub String);

impl fmt::Display for UnknownView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view '{}'", self.0)
    }
}

impl std::error::Error for UnknownView {}

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(View::Main),
            "login" => Ok(View::Login),
            "signup" => Ok(View::Signup),
            "dashboard" => Ok(View::Dashboard),
            other => Err(UnknownView(other.to_string())),
        }
    }
}

/// Result of checking a stored token against the auth service.
#[derive(Debug, Clone, PartialEq)]
pub enum Verification {
    /// The server recognised the token
    Valid(UserResponse),
    /// The server refused the token or no longer knows the user
    Rejected,
    /// The server could not give an answer; the token is kept
    Unreachable,
}

impl Verification {
    pub fn from_result(result: Result<UserResponse, ApiError>) -> Self {
        match result {
            Ok(user) => Verification::Valid(user),
            Err(ApiError::Auth(_)) | Err(ApiError::NotFound(_)) => Verification::Rejected,
            Err(_) => Verification::Unreachable,
        }
    }
}

/// Owns the current view and the credential store.
#[derive(Debug)]
pub struct SessionController<S> {
    view: View,
    store: S,
    initialized: bool,
}

impl<S: CredentialStore> SessionController<S> {
    pub fn new(store: S) -> Self {
        Self {
            view: View::Main,
            store,
            initialized: false,
        }
    }

    /// Pick the startup view. Runs its credential check once; later calls
    /// return the current view untouched.
    ///
    /// Presence of a non-empty token is enough to land on the dashboard.
    /// Nothing is sent to the server here.
    pub fn initialize(&mut self) -> View {
        if self.initialized {
            return self.view;
        }
        self.initialized = true;
        self.view = View::Main;

        if self.store.access_token().is_some() {
            log::debug!("Stored credential found, starting on dashboard");
            self.view = View::Dashboard;
        }
        self.view
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Every view is reachable from every other view.
    pub fn transition_to(&mut self, target: View) {
        if self.view != target {
            log::debug!("View transition: {} -> {}", self.view, target);
        }
        self.view = target;
    }

    /// Drop the stored credential and return to the landing view.
    /// Safe to call with no credential stored.
    pub fn logout(&mut self) {
        log::info!("Logging out");
        self.store.remove(ACCESS_TOKEN_KEY);
        self.transition_to(View::Main);
    }

    /// Persist a freshly issued token and show the dashboard.
    ///
    /// Blank tokens are refused and leave the state untouched.
    pub fn sign_in(&mut self, token: &str) -> Result<(), StoreError> {
        if token.trim().is_empty() {
            return Err(StoreError::WriteRejected {
                key: ACCESS_TOKEN_KEY.to_string(),
                reason: "empty token".to_string(),
            });
        }
        self.store.set(ACCESS_TOKEN_KEY, token)?;
        log::info!("Signed in");
        self.transition_to(View::Dashboard);
        Ok(())
    }

    /// Take a token issued by a login that may have finished after the
    /// user left the login view.
    ///
    /// The token is only kept while the login view is still showing, so a
    /// stored credential always comes with the dashboard. Returns whether
    /// the session was opened.
    pub fn accept_login(&mut self, token: &str) -> Result<bool, StoreError> {
        if self.view != View::Login {
            log::debug!("Discarding login that finished on the {} view", self.view);
            return Ok(false);
        }
        self.sign_in(token)?;
        Ok(true)
    }

    /// Close the session of an account whose deletion was confirmed.
    ///
    /// Only acts when `deleted_token` is still the stored credential; a
    /// later session (after logout and a new login) is left alone. Returns
    /// whether a logout happened.
    pub fn apply_withdrawal(&mut self, deleted_token: &str) -> bool {
        if self.credential().as_deref() != Some(deleted_token) {
            log::debug!("Ignoring withdrawal for a replaced credential");
            return false;
        }
        self.logout();
        true
    }

    pub fn credential(&self) -> Option<String> {
        self.store.access_token()
    }

    /// Apply the answer to a verification of `checked_token`.
    ///
    /// Answers about a token that is no longer stored are ignored. Returns
    /// the profile when the token was accepted.
    pub fn apply_verification(
        &mut self,
        checked_token: &str,
        outcome: Verification,
    ) -> Option<UserResponse> {
        if self.credential().as_deref() != Some(checked_token) {
            log::debug!("Ignoring verification for a replaced credential");
            return None;
        }

        match outcome {
            Verification::Valid(user) => Some(user),
            Verification::Rejected => {
                log::warn!("Stored credential was rejected by the server");
                self.store.remove(ACCESS_TOKEN_KEY);
                if self.view == View::Dashboard {
                    self.transition_to(View::Main);
                }
                None
            }
            Verification::Unreachable => {
                log::warn!("Could not verify stored credential, keeping session");
                None
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn user() -> UserResponse {
        UserResponse {
            user_id: "gildong".to_string(),
            user_name: "Hong Gildong".to_string(),
            join_date: None,
            access_token: None,
        }
    }

    fn controller_at(view: View, store: MemoryStore) -> SessionController<MemoryStore> {
        let mut controller = SessionController::new(store);
        controller.initialize();
        controller.transition_to(view);
        controller
    }

    #[test]
    fn starts_on_main_without_credential() {
        let mut controller = SessionController::new(MemoryStore::new());
        assert_eq!(controller.initialize(), View::Main);
        assert_eq!(controller.view(), View::Main);
    }

    #[test]
    fn starts_on_dashboard_with_credential() {
        let mut controller = SessionController::new(MemoryStore::with_token("abc123"));
        assert_eq!(controller.initialize(), View::Dashboard);
    }

    #[test]
    fn empty_credential_is_absent() {
        let mut controller = SessionController::new(MemoryStore::with_token(""));
        assert_eq!(controller.initialize(), View::Main);
    }

    #[test]
    fn startup_check_runs_once() {
        let mut controller = SessionController::new(MemoryStore::new());
        assert_eq!(controller.initialize(), View::Main);

        controller
            .store_mut()
            .set(ACCESS_TOKEN_KEY, "late-token")
            .unwrap();
        assert_eq!(controller.initialize(), View::Main);

        controller.transition_to(View::Login);
        assert_eq!(controller.initialize(), View::Login);
        assert!(controller.is_initialized());
    }

    #[test]
    fn every_view_reachable_from_every_view() {
        for from in View::ALL {
            for to in View::ALL {
                let mut controller = controller_at(from, MemoryStore::new());
                assert_eq!(controller.view(), from);
                controller.transition_to(to);
                assert_eq!(controller.view(), to, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn login_accepted_while_on_login_view() {
        let mut controller = controller_at(View::Login, MemoryStore::new());
        assert_eq!(controller.accept_login("fresh-token"), Ok(true));
        assert_eq!(controller.view(), View::Dashboard);
        assert_eq!(controller.credential().as_deref(), Some("fresh-token"));
    }

    #[test]
    fn late_login_after_leaving_is_discarded() {
        for left_to in [View::Main, View::Signup] {
            let mut controller = controller_at(View::Login, MemoryStore::new());
            controller.transition_to(left_to);

            assert_eq!(controller.accept_login("late-token"), Ok(false));
            assert_eq!(controller.view(), left_to);
            assert!(controller.store().is_empty());
        }
    }

    #[test]
    fn withdrawal_logs_out_deleted_account() {
        let mut controller = SessionController::new(MemoryStore::with_token("token-a"));
        controller.initialize();

        assert!(controller.apply_withdrawal("token-a"));
        assert_eq!(controller.view(), View::Main);
        assert_eq!(controller.credential(), None);
    }

    #[test]
    fn late_withdrawal_keeps_next_session() {
        let mut controller = SessionController::new(MemoryStore::with_token("token-a"));
        controller.initialize();

        // delete requested for A, user logs out and B logs in before it resolves
        controller.logout();
        controller.transition_to(View::Login);
        controller.sign_in("token-b").unwrap();

        assert!(!controller.apply_withdrawal("token-a"));
        assert_eq!(controller.view(), View::Dashboard);
        assert_eq!(controller.credential().as_deref(), Some("token-b"));
    }

    #[test]
    fn withdrawal_after_plain_logout_is_noop() {
        let mut controller = SessionController::new(MemoryStore::with_token("token-a"));
        controller.initialize();
        controller.logout();
        controller.transition_to(View::Signup);

        assert!(!controller.apply_withdrawal("token-a"));
        assert_eq!(controller.view(), View::Signup);
    }

    #[test]
    fn logout_clears_credential_and_resets() {
        let mut controller = SessionController::new(MemoryStore::with_token("abc123"));
        assert_eq!(controller.initialize(), View::Dashboard);

        controller.logout();
        assert_eq!(controller.view(), View::Main);
        assert!(!controller.store().contains_key(ACCESS_TOKEN_KEY));
    }

    #[test]
    fn logout_twice_is_harmless() {
        let mut controller = controller_at(View::Dashboard, MemoryStore::with_token("abc123"));
        controller.logout();
        assert_eq!(controller.view(), View::Main);
        controller.logout();
        assert_eq!(controller.view(), View::Main);
        assert!(controller.store().is_empty());
    }

    #[test]
    fn sign_in_stores_token_and_opens_dashboard() {
        let mut controller = controller_at(View::Login, MemoryStore::new());
        controller.sign_in("fresh-token").unwrap();
        assert_eq!(controller.view(), View::Dashboard);
        assert_eq!(controller.credential().as_deref(), Some("fresh-token"));
    }

    #[test]
    fn sign_in_rejects_blank_token() {
        let mut controller = controller_at(View::Login, MemoryStore::new());
        assert!(controller.sign_in("   ").is_err());
        assert_eq!(controller.view(), View::Login);
        assert!(controller.store().is_empty());
    }

    #[test]
    fn rejected_verification_logs_out() {
        let mut controller = SessionController::new(MemoryStore::with_token("stale"));
        controller.initialize();

        let profile = controller.apply_verification("stale", Verification::Rejected);
        assert_eq!(profile, None);
        assert_eq!(controller.view(), View::Main);
        assert_eq!(controller.credential(), None);
    }

    #[test]
    fn rejected_verification_off_dashboard_keeps_view() {
        let mut controller = controller_at(View::Login, MemoryStore::with_token("stale"));
        controller.apply_verification("stale", Verification::Rejected);
        assert_eq!(controller.view(), View::Login);
        assert_eq!(controller.credential(), None);
    }

    #[test]
    fn verification_for_replaced_token_is_ignored() {
        let mut controller = SessionController::new(MemoryStore::with_token("old"));
        controller.initialize();
        controller.logout();
        controller.sign_in("new").unwrap();

        controller.apply_verification("old", Verification::Rejected);
        assert_eq!(controller.view(), View::Dashboard);
        assert_eq!(controller.credential().as_deref(), Some("new"));
    }

    #[test]
    fn unreachable_server_keeps_dashboard() {
        let mut controller = SessionController::new(MemoryStore::with_token("abc123"));
        controller.initialize();
        let profile = controller.apply_verification("abc123", Verification::Unreachable);
        assert_eq!(profile, None);
        assert_eq!(controller.view(), View::Dashboard);
        assert!(controller.credential().is_some());
    }

    #[test]
    fn valid_verification_returns_profile() {
        let mut controller = SessionController::new(MemoryStore::with_token("abc123"));
        controller.initialize();
        let profile = controller.apply_verification("abc123", Verification::Valid(user()));
        assert_eq!(profile, Some(user()));
        assert_eq!(controller.view(), View::Dashboard);
    }

    #[test]
    fn verification_from_api_result() {
        assert_eq!(
            Verification::from_result(Ok(user())),
            Verification::Valid(user())
        );
        assert_eq!(
            Verification::from_result(Err(ApiError::Auth("expired".into()))),
            Verification::Rejected
        );
        assert_eq!(
            Verification::from_result(Err(ApiError::NotFound("gone".into()))),
            Verification::Rejected
        );
        assert_eq!(
            Verification::from_result(Err(ApiError::Network("offline".into()))),
            Verification::Unreachable
        );
        assert_eq!(
            Verification::from_result(Err(ApiError::Server {
                status: 500,
                message: "boom".into()
            })),
            Verification::Unreachable
        );
    }

    #[test]
    fn view_tags_roundtrip() {
        for view in View::ALL {
            assert_eq!(view.as_str().parse::<View>(), Ok(view));
            assert_eq!(
                serde_json::to_string(&view).unwrap(),
                format!("\"{}\"", view.as_str())
            );
        }
        assert_eq!(
            "settings".parse::<View>(),
            Err(UnknownView("settings".to_string()))
        );
    }
}
