//! Profile settings page
//!
//! Account details, AI persona, chat preferences, and the data controls.
//! Preferences persist in localStorage; everything else is session-local
//! mock state.

use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use serde::{Deserialize, Serialize};

use crate::components::{Header, LoadingSpinner, ParticleBackground};
use crate::pages::login::is_valid_email;
use crate::state::AppState;
use crate::types::Persona;

const STORAGE_KEY_PREFERENCES: &str = "agnis_preferences";

/// Persisted chat preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// 1 = concise, 5 = detailed.
    pub response_length: u8,
    pub auto_save: bool,
    pub smart_suggestions: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            response_length: 3,
            auto_save: true,
            smart_suggestions: true,
        }
    }
}

pub fn load_preferences() -> Preferences {
    LocalStorage::get(STORAGE_KEY_PREFERENCES).unwrap_or_default()
}

fn store_preferences(prefs: &Preferences) {
    if let Err(err) = LocalStorage::set(STORAGE_KEY_PREFERENCES, prefs) {
        tracing::warn!(%err, "failed to store preferences");
    }
}

/// Validation for the account section. Empty vec means valid.
pub fn validate_account(name: &str, email: &str) -> Vec<(&'static str, &'static str)> {
    let mut errors = Vec::new();
    if name.trim().len() < 2 {
        errors.push(("name", "Name must be at least 2 characters"));
    }
    if !is_valid_email(email.trim()) {
        errors.push(("email", "Please enter a valid email address"));
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
pub fn ProfileSettingsPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let profile = state.user.get_untracked();
    let name = RwSignal::new(profile.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let email = RwSignal::new(profile.as_ref().map(|p| p.email.clone()).unwrap_or_default());
    let is_guest = profile.as_ref().is_some_and(|p| p.is_guest);

    let persona = RwSignal::new(
        state
            .registration()
            .and_then(|data| data.persona)
            .as_deref()
            .and_then(|id| Persona::ALL.into_iter().find(|p| p.id() == id)),
    );
    let prefs = RwSignal::new(load_preferences());

    let errors = RwSignal::new(Vec::<(&'static str, &'static str)>::new());
    let is_saving = RwSignal::new(false);
    let saved = RwSignal::new(false);
    let confirm_clear = RwSignal::new(false);

    let save = move |_| {
        if is_saving.get_untracked() {
            return;
        }
        let found = validate_account(&name.get_untracked(), &email.get_untracked());
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(Vec::new());
        is_saving.set(true);

        Timeout::new(1_000, move || {
            state.user.update(|user| {
                if let Some(user) = user {
                    user.name = name.get_untracked().trim().to_string();
                    user.email = email.get_untracked().trim().to_string();
                }
            });
            store_preferences(&prefs.get_untracked());
            is_saving.set(false);
            saved.set(true);
            tracing::info!("profile settings saved");
            Timeout::new(2_000, move || saved.set(false)).forget();
        })
        .forget();
    };

    let clear_data = {
        let navigate = navigate.clone();
        move |_| {
            LocalStorage::delete(STORAGE_KEY_PREFERENCES);
            state.sign_out();
            tracing::info!("local data cleared");
            navigate("/landing", Default::default());
        }
    };

    view! {
        <Title text="Profile Settings - Agnis AI" />

        <div class="min-h-screen bg-background relative">
            <ParticleBackground intensity=0.2 />
            <Header />

            <main class="relative z-10 pt-20 max-w-3xl mx-auto px-6 pb-12 space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-foreground">"Profile Settings"</h1>
                    <p class="text-muted-foreground mt-1">"Manage your account and how Agnis responds"</p>
                </div>

                <Show when=move || is_guest>
                    <div class="p-4 bg-warning/10 border border-warning/30 rounded-xl text-sm text-warning">
                        "You're browsing as a guest. Create an account to keep your settings."
                    </div>
                </Show>

                // Account
                <section class="p-6 bg-card border border-border rounded-xl space-y-4">
                    <h2 class="font-semibold text-foreground">"Account"</h2>
                    <div class="grid sm:grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm text-muted-foreground mb-2">"Name"</label>
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                                class="w-full px-4 py-2.5 bg-input border border-border rounded-lg
                                       text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            />
                            {move || error_for(&errors.get(), "name").map(|message| view! {
                                <p class="text-sm text-destructive mt-1">{message}</p>
                            })}
                        </div>
                        <div>
                            <label class="block text-sm text-muted-foreground mb-2">"Email"</label>
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                class="w-full px-4 py-2.5 bg-input border border-border rounded-lg
                                       text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            />
                            {move || error_for(&errors.get(), "email").map(|message| view! {
                                <p class="text-sm text-destructive mt-1">{message}</p>
                            })}
                        </div>
                    </div>
                </section>

                // Persona
                <section class="p-6 bg-card border border-border rounded-xl space-y-4">
                    <h2 class="font-semibold text-foreground">"AI Personality"</h2>
                    <div class="grid sm:grid-cols-2 gap-3">
                        {Persona::ALL.map(|option| view! {
                            <button
                                type="button"
                                on:click=move |_| persona.set(Some(option))
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
                            </button>
                        })}
                    </div>
                </section>

                // Chat preferences
                <section class="p-6 bg-card border border-border rounded-xl space-y-4">
                    <h2 class="font-semibold text-foreground">"Chat Preferences"</h2>
                    <div>
                        <label class="block text-sm text-muted-foreground mb-2">"Response length"</label>
                        <div class="flex items-center gap-3">
                            <span class="text-xs text-muted-foreground">"Concise"</span>
                            <input
                                type="range"
                                min="1"
                                max="5"
                                prop:value=move || prefs.get().response_length.to_string()
                                on:input=move |ev| {
                                    if let Ok(length) = event_target_value(&ev).parse::<u8>() {
                                        prefs.update(|p| p.response_length = length.clamp(1, 5));
                                    }
                                }
                                class="flex-1 accent-primary"
                            />
                            <span class="text-xs text-muted-foreground">"Detailed"</span>
                        </div>
                    </div>
                    <label class="flex items-center justify-between cursor-pointer">
                        <span class="text-sm text-foreground">"Auto-save conversations"</span>
                        <input
                            type="checkbox"
                            prop:checked=move || prefs.get().auto_save
                            on:change=move |_| prefs.update(|p| p.auto_save = !p.auto_save)
                            class="w-4 h-4 accent-primary"
                        />
                    </label>
                    <label class="flex items-center justify-between cursor-pointer">
                        <span class="text-sm text-foreground">"Smart suggestions"</span>
                        <input
                            type="checkbox"
                            prop:checked=move || prefs.get().smart_suggestions
                            on:change=move |_| prefs.update(|p| p.smart_suggestions = !p.smart_suggestions)
                            class="w-4 h-4 accent-primary"
                        />
                    </label>
                </section>

                // Data & privacy
                <section class="p-6 bg-card border border-border rounded-xl space-y-4">
                    <h2 class="font-semibold text-foreground">"Data & Privacy"</h2>
                    <p class="text-sm text-muted-foreground">
                        "All data in this demo lives in your browser. Clearing it signs you out and
                         removes saved preferences."
                    </p>
                    <button
                        on:click=move |_| confirm_clear.set(true)
                        class="px-4 py-2 btn btn-outline rounded-lg text-sm text-destructive"
                    >
                        "Clear all data"
                    </button>
                </section>

                // Save bar
                <div class="flex items-center justify-end gap-4">
                    <Show when=move || saved.get()>
                        <span class="text-sm text-success">"✓ Saved"</span>
                    </Show>
                    <button
                        on:click=save
                        disabled=move || is_saving.get()
                        class="px-6 py-2.5 btn btn-primary rounded-lg font-semibold glow-effect
                               disabled:opacity-50 disabled:cursor-not-allowed
                               flex items-center space-x-2"
                    >
                        <Show
                            when=move || is_saving.get()
                            fallback=|| view! { <span>"Save Changes"</span> }
                        >
                            <LoadingSpinner size="w-4 h-4" />
                            <span>"Saving..."</span>
                        </Show>
                    </button>
                </div>
            </main>

            // Clear-data confirmation
            <Show when=move || confirm_clear.get()>
                <div class="fixed inset-0 z-50 flex items-center justify-center bg-background/80 backdrop-blur-sm">
                    <div class="w-full max-w-sm p-6 bg-card border border-border rounded-xl glow-effect">
                        <h2 class="font-semibold text-foreground mb-2">"Clear all data?"</h2>
                        <p class="text-sm text-muted-foreground mb-6">
                            "This signs you out and removes everything stored in this browser."
                        </p>
                        <div class="flex gap-3">
                            <button
                                on:click=move |_| confirm_clear.set(false)
                                class="flex-1 py-2 btn btn-ghost rounded-lg"
                            >
                                "Cancel"
                            </button>
                            <button
                                on:click=clear_data.clone()
                                class="flex-1 py-2 btn btn-primary rounded-lg bg-destructive"
                            >
                                "Clear Data"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let prefs = Preferences::default();
        assert_eq!(prefs.response_length, 3);
        assert!(prefs.auto_save);
        assert!(prefs.smart_suggestions);
    }

    #[test]
    fn account_validation_checks_both_fields() {
        let errors = validate_account("", "not-an-email");
        assert!(error_for(&errors, "name").is_some());
        assert!(error_for(&errors, "email").is_some());
        assert!(validate_account("Alex", "alex@example.com").is_empty());
    }
}
