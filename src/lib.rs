//! Agnis AI frontend
//!
//! Client-side rendered Leptos app. All product data is mocked in memory;
//! the only persistence is a handful of localStorage flags, so the whole
//! thing runs without a backend.

pub mod components;
pub mod mock;
pub mod pages;
pub mod routes;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;

use crate::pages::{
    ChatHistoryPage, ChatPage, EmailVerificationPage, LandingPage, LoginPage,
    ProfileSettingsPage, RegistrationPage,
};
use crate::routes::AuthGate;
use crate::state::AppState;

/// Root component: global state, the router, and the authorization gate
/// wrapping every routed page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppState::new());

    view! {
        <Router>
            <AuthGate>
                <Routes fallback=|| view! { <NotFound /> }>
                    // "/" never renders: the gate always redirects it to a home.
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/landing") view=LandingPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/registration") view=RegistrationPage />
                    <Route path=path!("/email-verification") view=EmailVerificationPage />
                    <Route path=path!("/chat") view=ChatPage />
                    <Route path=path!("/chat-history") view=ChatHistoryPage />
                    <Route path=path!("/profile-settings") view=ProfileSettingsPage />
                </Routes>
            </AuthGate>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let go_home = move |_| {
        let home = if state.is_authenticated.get_untracked() {
            routes::HOME_AUTHENTICATED
        } else {
            routes::HOME_UNAUTHENTICATED
        };
        navigate(home, Default::default());
    };

    view! {
        <div class="min-h-screen bg-background flex items-center justify-center px-6">
            <div class="text-center">
                <p class="text-7xl font-bold text-primary mb-4">"404"</p>
                <h1 class="text-2xl font-semibold text-foreground mb-2">"Page not found"</h1>
                <p class="text-muted-foreground mb-8">
                    "The page you're looking for doesn't exist or has moved."
                </p>
                <button
                    on:click=go_home
                    class="px-6 py-3 btn btn-primary rounded-lg font-semibold glow-effect"
                >
                    "Take me home"
                </button>
            </div>
        </div>
    }
}
