//! Global application state
//!
//! The session flag lives in browser localStorage so a reload keeps the
//! signed-in state. The route gate reads `is_authenticated` but never
//! writes it; all mutation happens through the methods here.

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

use crate::mock;
use crate::types::{RegistrationData, UserProfile};

const STORAGE_KEY_AUTH: &str = "agnis_authenticated";
const STORAGE_KEY_EMAIL: &str = "agnis_user_email";
const STORAGE_KEY_REMEMBER: &str = "agnis_remember_me";
const STORAGE_KEY_GUEST: &str = "agnis_guest";
const STORAGE_KEY_REGISTRATION: &str = "agnis_registration";

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the current session is signed in (or a guest session).
    pub is_authenticated: RwSignal<bool>,
    /// Profile of the signed-in user, if any.
    pub user: RwSignal<Option<UserProfile>>,
}

impl AppState {
    pub fn new() -> Self {
        let authed: bool = LocalStorage::get(STORAGE_KEY_AUTH).unwrap_or(false);
        let user = authed.then(Self::load_profile);

        Self {
            is_authenticated: RwSignal::new(authed),
            user: RwSignal::new(user),
        }
    }

    fn load_profile() -> UserProfile {
        if LocalStorage::get(STORAGE_KEY_GUEST).unwrap_or(false) {
            return UserProfile::guest();
        }
        let mut profile = mock::demo_user();
        if let Ok(email) = LocalStorage::get::<String>(STORAGE_KEY_EMAIL) {
            profile.email = email;
        }
        profile
    }

    /// Mark the session signed in after a successful credential check.
    pub fn sign_in(&self, email: &str, remember: bool) {
        let _ = LocalStorage::set(STORAGE_KEY_AUTH, true);
        let _ = LocalStorage::set(STORAGE_KEY_EMAIL, email);
        if remember {
            let _ = LocalStorage::set(STORAGE_KEY_REMEMBER, true);
        }
        LocalStorage::delete(STORAGE_KEY_GUEST);

        let mut profile = mock::demo_user();
        profile.email = email.to_string();
        self.user.set(Some(profile));
        self.is_authenticated.set(true);
        tracing::info!(email, "signed in");
    }

    /// Start a guest session; no credentials involved.
    pub fn sign_in_guest(&self) {
        let _ = LocalStorage::set(STORAGE_KEY_AUTH, true);
        let _ = LocalStorage::set(STORAGE_KEY_GUEST, true);

        self.user.set(Some(UserProfile::guest()));
        self.is_authenticated.set(true);
        tracing::info!("guest session started");
    }

    pub fn sign_out(&self) {
        LocalStorage::delete(STORAGE_KEY_AUTH);
        LocalStorage::delete(STORAGE_KEY_EMAIL);
        LocalStorage::delete(STORAGE_KEY_REMEMBER);
        LocalStorage::delete(STORAGE_KEY_GUEST);

        self.user.set(None);
        self.is_authenticated.set(false);
        tracing::info!("signed out");
    }

    /// Hand registration data to the email verification page.
    pub fn store_registration(&self, data: &RegistrationData) {
        if let Err(err) = LocalStorage::set(STORAGE_KEY_REGISTRATION, data) {
            tracing::warn!(%err, "failed to store registration data");
        }
    }

    pub fn registration(&self) -> Option<RegistrationData> {
        LocalStorage::get(STORAGE_KEY_REGISTRATION).ok()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
