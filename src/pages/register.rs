//! Registration page
//!
//! Collects profile details and an optional AI persona, then hands off to
//! email verification. Submission is a 2 second mock round trip.

use chrono::Utc;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::{LoadingSpinner, ParticleBackground};
use crate::pages::login::is_valid_email;
use crate::state::AppState;
use crate::types::{Persona, RegistrationData};

/// Password policy: at least 8 characters with an uppercase letter, a
/// lowercase letter, and a digit.
pub fn is_strong_password(password: &str) -> bool {
    password.len() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Field-level validation for the signup form. Empty vec means valid.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Vec<(&'static str, &'static str)> {
    let mut errors = Vec::new();
    if name.trim().len() < 2 {
        errors.push(("name", "Name must be at least 2 characters"));
    }
    if email.trim().is_empty() {
        errors.push(("email", "Email is required"));
    } else if !is_valid_email(email.trim()) {
        errors.push(("email", "Please enter a valid email address"));
    }
    if !is_strong_password(password) {
        errors.push((
            "password",
            "Password needs 8+ characters with uppercase, lowercase, and a number",
        ));
    }
    if confirm != password {
        errors.push(("confirm", "Passwords do not match"));
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
pub fn RegistrationPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let persona = RwSignal::new(None::<Persona>);
    let show_password = RwSignal::new(false);
    let is_loading = RwSignal::new(false);
    let errors = RwSignal::new(Vec::<(&'static str, &'static str)>::new());

    let submit = {
        let navigate = navigate.clone();
        move || {
            if is_loading.get_untracked() {
                return;
            }
            let found = validate_registration(
                &name.get_untracked(),
                &email.get_untracked(),
                &password.get_untracked(),
                &confirm.get_untracked(),
            );
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(Vec::new());
            is_loading.set(true);

            let navigate = navigate.clone();
            Timeout::new(2_000, move || {
                let data = RegistrationData {
                    name: name.get_untracked().trim().to_string(),
                    email: email.get_untracked().trim().to_string(),
                    persona: persona.get_untracked().map(|p| p.id().to_string()),
                    registered_at: Utc::now(),
                };
                state.store_registration(&data);
                is_loading.set(false);
                navigate("/email-verification", Default::default());
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

    let nav_login = navigate.clone();

    view! {
        <Title text="Create Account - Agnis AI" />

        <div class="min-h-screen bg-background relative flex items-center justify-center px-6 py-12">
            <ParticleBackground intensity=0.3 />

            <div class="relative z-10 w-full max-w-lg">
                <div class="text-center mb-8">
                    <a href="/landing" class="inline-flex items-center space-x-2">
                        <div class="w-12 h-12 bg-gradient-to-br from-primary to-accent rounded-xl
                                    flex items-center justify-center text-2xl glow-effect">
                            "⚡"
                        </div>
                        <span class="text-2xl font-bold text-foreground">"Agnis AI"</span>
                    </a>
                    <h1 class="text-2xl font-semibold text-foreground mt-6">"Create your account"</h1>
                    <p class="text-muted-foreground mt-2">"Pick an AI personality and get started"</p>
                </div>

                <form
                    class="bg-card border border-border rounded-xl p-8 space-y-6 glow-effect"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        on_submit();
                    }
                >
                    <div>
                        <label class="block text-sm font-medium text-foreground mb-2">"Full name"</label>
                        <input
                            type="text"
                            placeholder="Your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                            class="w-full px-4 py-3 bg-input border border-border rounded-lg
                                   text-foreground placeholder-muted-foreground
                                   focus:outline-none focus:ring-2 focus:ring-primary"
                        />
                        {move || error_for(&errors.get(), "name").map(|message| view! {
                            <p class="text-sm text-destructive mt-1">{message}</p>
                        })}
                    </div>

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

                    <div class="grid sm:grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm font-medium text-foreground mb-2">"Password"</label>
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Create a password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                                class="w-full px-4 py-3 bg-input border border-border rounded-lg
                                       text-foreground placeholder-muted-foreground
                                       focus:outline-none focus:ring-2 focus:ring-primary"
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-foreground mb-2">"Confirm password"</label>
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Repeat the password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                                class="w-full px-4 py-3 bg-input border border-border rounded-lg
                                       text-foreground placeholder-muted-foreground
                                       focus:outline-none focus:ring-2 focus:ring-primary"
                            />
                        </div>
                    </div>
                    {move || error_for(&errors.get(), "password").map(|message| view! {
                        <p class="text-sm text-destructive">{message}</p>
                    })}
                    {move || error_for(&errors.get(), "confirm").map(|message| view! {
                        <p class="text-sm text-destructive">{message}</p>
                    })}
                    <label class="flex items-center space-x-2 cursor-pointer">
                        <input
                            type="checkbox"
                            prop:checked=move || show_password.get()
                            on:change=move |_| show_password.update(|shown| *shown = !*shown)
                            class="w-4 h-4 accent-primary"
                        />
                        <span class="text-sm text-muted-foreground">"Show passwords"</span>
                    </label>

                    // Persona selection, optional
                    <div>
                        <label class="block text-sm font-medium text-foreground mb-3">
                            "Choose your AI personality "
                            <span class="text-muted-foreground font-normal">"(optional)"</span>
                        </label>
                        <div class="grid sm:grid-cols-2 gap-3">
                            {Persona::ALL.map(|option| view! {
                                <button
                                    type="button"
                                    on:click=move |_| persona.update(|current| {
                                        *current = if *current == Some(option) { None } else { Some(option) };
                                    })
                                    class=move || format!(
                                        "p-4 rounded-lg border text-left smooth-transition {}",
                                        if persona.get() == Some(option) {
                                            "border-primary bg-primary/10 glow-border"
                                        } else {
                                            "border-border hover:border-primary/50"
                                        }
                                    )
                                >
                                    <div class="flex items-center space-x-2 mb-1">
                                        <span>{option.icon()}</span>
                                        <span class="font-medium text-sm text-foreground">{option.name()}</span>
                                    </div>
                                    <p class="text-xs text-muted-foreground">{option.description()}</p>
                                    <div class="flex flex-wrap gap-1 mt-2">
                                        {option.traits().map(|t| view! {
                                            <span class="px-2 py-0.5 text-xs bg-muted rounded-full text-muted-foreground">
                                                {t}
                                            </span>
                                        })}
                                    </div>
                                </button>
                            })}
                        </div>
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
                            fallback=|| view! { <span>"Create Account"</span> }
                        >
                            <LoadingSpinner size="w-5 h-5" />
                            <span>"Creating account..."</span>
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

                <p class="text-center text-sm text-muted-foreground mt-6">
                    "Already have an account? "
                    <button
                        on:click=move |_| nav_login("/login", Default::default())
                        class="text-primary hover:underline"
                    >
                        "Sign in"
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
    fn password_policy_requires_mixed_characters() {
        assert!(is_strong_password("AgnisPro2025"));
        assert!(!is_strong_password("short1A"));
        assert!(!is_strong_password("alllowercase1"));
        assert!(!is_strong_password("ALLUPPERCASE1"));
        assert!(!is_strong_password("NoDigitsHere"));
    }

    #[test]
    fn registration_validation_covers_every_field() {
        let errors = validate_registration("A", "bad", "weak", "different");
        assert!(error_for(&errors, "name").is_some());
        assert!(error_for(&errors, "email").is_some());
        assert!(error_for(&errors, "password").is_some());
        assert!(error_for(&errors, "confirm").is_some());

        let errors =
            validate_registration("Alex Johnson", "alex@example.com", "Sup3rSecret", "Sup3rSecret");
        assert!(errors.is_empty());
    }

    #[test]
    fn name_is_trimmed_before_length_check() {
        let errors = validate_registration("  a  ", "alex@example.com", "Sup3rSecret", "Sup3rSecret");
        assert_eq!(error_for(&errors, "name"), Some("Name must be at least 2 characters"));
    }
}
