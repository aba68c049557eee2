//! Sign-in page
//!
//! Credentials are checked against the mock pair in [`crate::mock`]; the
//! "network" round trip is a 1.5 second timer.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::{LoadingSpinner, ParticleBackground};
use crate::mock;
use crate::state::AppState;

/// Minimal email shape check: something before and after one `@`, with a
/// dot in the domain part.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(' ')
}

/// Field-level validation for the sign-in form. Empty vec means valid.
pub fn validate_login(email: &str, password: &str) -> Vec<(&'static str, &'static str)> {
    let mut errors = Vec::new();
    if email.trim().is_empty() {
        errors.push(("email", "Email is required"));
    } else if !is_valid_email(email.trim()) {
        errors.push(("email", "Please enter a valid email address"));
    }
    if password.is_empty() {
        errors.push(("password", "Password is required"));
    } else if password.len() < 6 {
        errors.push(("password", "Password must be at least 6 characters"));
    }
    errors
}

fn error_for(errors: &[(&'static str, &'static str)], field: &str) -> Option<&'static str> {
    errors
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, message)| *message)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let is_loading = RwSignal::new(false);
    let errors = RwSignal::new(Vec::<(&'static str, &'static str)>::new());
    let credential_error = RwSignal::new(false);

    let submit = {
        let navigate = navigate.clone();
        move || {
            if is_loading.get_untracked() {
                return;
            }
            credential_error.set(false);
            let found = validate_login(&email.get_untracked(), &password.get_untracked());
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(Vec::new());
            is_loading.set(true);

            let navigate = navigate.clone();
            Timeout::new(1_500, move || {
                is_loading.set(false);
                let entered_email = email.get_untracked();
                let entered_email = entered_email.trim();
                if entered_email == mock::DEMO_EMAIL
                    && password.get_untracked() == mock::DEMO_PASSWORD
                {
                    state.sign_in(entered_email, remember_me.get_untracked());
                    navigate("/chat", Default::default());
                } else {
                    credential_error.set(true);
                }
            })
            .forget();
        }
    };
    let on_submit = submit.clone();

    let continue_as_guest = {
        let navigate = navigate.clone();
        move |_| {
            state.sign_in_guest();
            navigate("/chat", Default::default());
        }
    };

    let nav_register = navigate.clone();

    view! {
        <Title text="Sign In - Agnis AI" />

        <div class="min-h-screen bg-background relative flex items-center justify-center px-6 py-12">
            <ParticleBackground intensity=0.3 />

            <div class="relative z-10 w-full max-w-md">
                <div class="text-center mb-8">
                    <a href="/landing" class="inline-flex items-center space-x-2">
                        <div class="w-12 h-12 bg-gradient-to-br from-primary to-accent rounded-xl
                                    flex items-center justify-center text-2xl glow-effect">
                            "⚡"
                        </div>
                        <span class="text-2xl font-bold text-foreground">"Agnis AI"</span>
                    </a>
                    <h1 class="text-2xl font-semibold text-foreground mt-6">"Welcome back"</h1>
                    <p class="text-muted-foreground mt-2">"Sign in to continue your conversations"</p>
                </div>

                <form
                    class="bg-card border border-border rounded-xl p-8 space-y-6 glow-effect"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        on_submit();
                    }
                >
                    <Show when=move || credential_error.get()>
                        <div class="p-3 bg-destructive/10 border border-destructive/30 rounded-lg
                                    text-sm text-destructive">
                            "Invalid email or password. Try the demo credentials below."
                        </div>
                    </Show>

                    <div>
                        <label class="block text-sm font-medium text-foreground mb-2">"Email"</label>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            class="w-full px-4 py-3 bg-input border border-border rounded-lg
                                   text-foreground placeholder-muted-foreground
                                   focus:outline-none focus:ring-2 focus:ring-primary"
                        />
                        {move || error_for(&errors.get(), "email").map(|message| view! {
                            <p class="text-sm text-destructive mt-1">{message}</p>
                        })}
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-foreground mb-2">"Password"</label>
                        <div class="relative">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Enter your password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                                class="w-full px-4 py-3 pr-12 bg-input border border-border rounded-lg
                                       text-foreground placeholder-muted-foreground
                                       focus:outline-none focus:ring-2 focus:ring-primary"
                            />
                            <button
                                type="button"
                                on:click=move |_| show_password.update(|shown| *shown = !*shown)
                                class="absolute right-3 top-1/2 -translate-y-1/2 text-muted-foreground
                                       hover:text-foreground smooth-transition"
                                title=move || if show_password.get() { "Hide password" } else { "Show password" }
                            >
                                {move || if show_password.get() { "🙈" } else { "👁" }}
                            </button>
                        </div>
                        {move || error_for(&errors.get(), "password").map(|message| view! {
                            <p class="text-sm text-destructive mt-1">{message}</p>
                        })}
                    </div>

                    <div class="flex items-center justify-between">
                        <label class="flex items-center space-x-2 cursor-pointer">
                            <input
                                type="checkbox"
                                prop:checked=move || remember_me.get()
                                on:change=move |_| remember_me.update(|on| *on = !*on)
                                class="w-4 h-4 accent-primary"
                            />
                            <span class="text-sm text-muted-foreground">"Remember me"</span>
                        </label>
                        <span class="text-sm text-primary/60">"Forgot password?"</span>
                    </div>

                    <button
                        type="submit"
                        disabled=move || is_loading.get()
                        class="w-full py-3 btn btn-primary rounded-lg font-semibold glow-effect
                               disabled:opacity-50 disabled:cursor-not-allowed
                               flex items-center justify-center space-x-2"
                    >
                        <Show
                            when=move || is_loading.get()
                            fallback=|| view! { <span>"Sign In"</span> }
                        >
                            <LoadingSpinner size="w-5 h-5" />
                            <span>"Signing in..."</span>
                        </Show>
                    </button>

                    <button
                        type="button"
                        on:click=continue_as_guest
                        class="w-full py-3 btn btn-ghost rounded-lg font-medium"
                    >
                        "Continue as Guest"
                    </button>
                </form>

                <div class="mt-6 p-4 bg-muted/50 border border-border rounded-lg text-center">
                    <p class="text-xs text-muted-foreground">"Demo credentials"</p>
                    <p class="text-sm text-foreground font-mono mt-1">
                        {mock::DEMO_EMAIL}" / "{mock::DEMO_PASSWORD}
                    </p>
                </div>

                <p class="text-center text-sm text-muted-foreground mt-6">
                    "Don't have an account? "
                    <button
                        on:click=move |_| nav_register("/registration", Default::default())
                        class="text-primary hover:underline"
                    >
                        "Sign up"
                    </button>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plausible_emails() {
        assert!(is_valid_email("user@agnisai.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn login_validation_reports_each_field() {
        let errors = validate_login("", "");
        assert!(error_for(&errors, "email").is_some());
        assert!(error_for(&errors, "password").is_some());

        let errors = validate_login("user@agnisai.com", "short");
        assert!(error_for(&errors, "email").is_none());
        assert_eq!(
            error_for(&errors, "password"),
            Some("Password must be at least 6 characters")
        );

        assert!(validate_login("user@agnisai.com", "AgnisPro2025!").is_empty());
    }
}
