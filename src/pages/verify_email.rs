//! Email verification page
//!
//! Six-digit code entry with auto-advance, paste support, a five minute
//! expiry window, and a 60 second resend cooldown. The only accepted code
//! is the mock one.

use gloo_timers::callback::{Interval, Timeout};
use leptos::html::Input;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::components::{LoadingSpinner, ParticleBackground};
use crate::mock;
use crate::state::AppState;
use crate::types::VerificationStatus;

const CODE_LENGTH: usize = 6;
const EXPIRY_MS: u32 = 5 * 60 * 1_000;
const RESEND_COOLDOWN_SECS: u32 = 60;

/// Keep only the digits of pasted text, capped at the code length.
pub fn digits_from_paste(text: &str) -> Vec<char> {
    text.chars()
        .filter(char::is_ascii_digit)
        .take(CODE_LENGTH)
        .collect()
}

#[component]
pub fn EmailVerificationPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let pending_email = state
        .registration()
        .map(|data| data.email)
        .unwrap_or_else(|| "your email".to_string());

    let digits: [RwSignal<String>; CODE_LENGTH] =
        std::array::from_fn(|_| RwSignal::new(String::new()));
    let inputs: [NodeRef<Input>; CODE_LENGTH] = std::array::from_fn(|_| NodeRef::new());

    let status = RwSignal::new(VerificationStatus::Pending);
    let is_verifying = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);
    let cooldown = RwSignal::new(RESEND_COOLDOWN_SECS);

    // Timer handles live outside the reactive graph; dropping one cancels it.
    let expiry_timer = StoredValue::new_local(None::<Timeout>);
    let cooldown_ticker = StoredValue::new_local(None::<Interval>);

    let start_expiry = move || {
        expiry_timer.set_value(Some(Timeout::new(EXPIRY_MS, move || {
            status.set(VerificationStatus::Expired);
        })));
    };
    let start_cooldown = move || {
        cooldown.set(RESEND_COOLDOWN_SECS);
        cooldown_ticker.set_value(Some(Interval::new(1_000, move || {
            cooldown.update(|secs| *secs = secs.saturating_sub(1));
        })));
    };

    start_expiry();
    start_cooldown();

    // Stop ticking once the cooldown reaches zero.
    Effect::new(move |_| {
        if cooldown.get() == 0 {
            cooldown_ticker.set_value(None);
        }
    });
    on_cleanup(move || {
        expiry_timer.set_value(None);
        cooldown_ticker.set_value(None);
    });

    let focus_input = move |index: usize| {
        if let Some(input) = inputs.get(index).and_then(|node| node.get_untracked()) {
            let _ = input.focus();
        }
    };

    let entered_code = move || {
        digits
            .iter()
            .map(|digit| digit.get_untracked())
            .collect::<String>()
    };

    let verify = move || {
        if is_verifying.get_untracked() {
            return;
        }
        let code = entered_code();
        if code.len() < CODE_LENGTH {
            error.set(Some("Please enter the full 6-digit code"));
            return;
        }
        error.set(None);
        is_verifying.set(true);

        Timeout::new(2_000, move || {
            is_verifying.set(false);
            if status.get_untracked() == VerificationStatus::Expired {
                error.set(Some("This code has expired. Request a new one."));
            } else if code == mock::VALID_CODE {
                expiry_timer.set_value(None);
                status.set(VerificationStatus::Verified);
                tracing::info!("email verified");
            } else {
                error.set(Some("Invalid verification code. Please try again."));
                for digit in digits {
                    digit.set(String::new());
                }
                focus_input(0);
            }
        })
        .forget();
    };

    let resend = move |_| {
        if cooldown.get_untracked() > 0 {
            return;
        }
        for digit in digits {
            digit.set(String::new());
        }
        error.set(None);
        status.set(VerificationStatus::Pending);
        start_expiry();
        start_cooldown();
        focus_input(0);
        tracing::info!("verification code resent");
    };

    let fill_from_paste = move |text: &str| {
        let pasted = digits_from_paste(text);
        if pasted.is_empty() {
            return;
        }
        for (slot, digit) in digits.iter().zip(pasted.iter().map(ToString::to_string)) {
            slot.set(digit);
        }
        focus_input((pasted.len()).min(CODE_LENGTH - 1));
    };

    let nav_success = navigate.clone();
    let nav_back = navigate.clone();
    let nav_change = navigate.clone();

    view! {
        <Title text="Verify Email - Agnis AI" />

        <div class="min-h-screen bg-background relative flex items-center justify-center px-6 py-12">
            <ParticleBackground intensity=0.3 />

            <div class="relative z-10 w-full max-w-md">
                <Show
                    when=move || status.get() == VerificationStatus::Verified
                    fallback=move || {
                        let nav_back = nav_back.clone();
                        let nav_change = nav_change.clone();
                        view! {
                            <div class="bg-card border border-border rounded-xl p-8 glow-effect">
                                <div class="text-center mb-8">
                                    <div class="w-16 h-16 mx-auto mb-4 bg-primary/10 rounded-full
                                                flex items-center justify-center text-3xl">
                                        "✉️"
                                    </div>
                                    <h1 class="text-2xl font-semibold text-foreground">"Check your email"</h1>
                                    <p class="text-muted-foreground mt-2">
                                        "We sent a 6-digit code to "
                                        <span class="text-foreground font-medium">{pending_email.clone()}</span>
                                    </p>
                                </div>

                                <Show when=move || status.get() == VerificationStatus::Expired>
                                    <div class="mb-4 p-3 bg-warning/10 border border-warning/30 rounded-lg
                                                text-sm text-warning text-center">
                                        "This code has expired. Request a new one below."
                                    </div>
                                </Show>

                                {move || error.get().map(|message| view! {
                                    <div class="mb-4 p-3 bg-destructive/10 border border-destructive/30 rounded-lg
                                                text-sm text-destructive text-center">
                                        {message}
                                    </div>
                                })}

                                // Code entry
                                <div class="flex justify-center gap-3 mb-6">
                                    {(0..CODE_LENGTH).map(|index| {
                                        let digit = digits[index];
                                        view! {
                                            <input
                                                type="text"
                                                inputmode="numeric"
                                                maxlength="1"
                                                node_ref=inputs[index]
                                                prop:value=move || digit.get()
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    let entered: String = value
                                                        .chars()
                                                        .rev()
                                                        .find(char::is_ascii_digit)
                                                        .map(String::from)
                                                        .unwrap_or_default();
                                                    let advanced = !entered.is_empty();
                                                    digit.set(entered);
                                                    if advanced && index + 1 < CODE_LENGTH {
                                                        focus_input(index + 1);
                                                    }
                                                }
                                                on:keydown=move |ev| {
                                                    if ev.key() == "Backspace"
                                                        && digit.get_untracked().is_empty()
                                                        && index > 0
                                                    {
                                                        focus_input(index - 1);
                                                    }
                                                }
                                                on:paste=move |ev| {
                                                    ev.prevent_default();
                                                    let text = ev
                                                        .dyn_ref::<web_sys::ClipboardEvent>()
                                                        .and_then(|clip| clip.clipboard_data())
                                                        .and_then(|data| data.get_data("text").ok())
                                                        .unwrap_or_default();
                                                    fill_from_paste(&text);
                                                }
                                                class="w-12 h-14 text-center text-xl font-semibold
                                                       bg-input border border-border rounded-lg text-foreground
                                                       focus:outline-none focus:ring-2 focus:ring-primary"
                                            />
                                        }
                                    }).collect::<Vec<_>>()}
                                </div>

                                <button
                                    on:click=move |_| verify()
                                    disabled=move || is_verifying.get()
                                    class="w-full py-3 btn btn-primary rounded-lg font-semibold glow-effect
                                           disabled:opacity-50 disabled:cursor-not-allowed
                                           flex items-center justify-center space-x-2"
                                >
                                    <Show
                                        when=move || is_verifying.get()
                                        fallback=|| view! { <span>"Verify Email"</span> }
                                    >
                                        <LoadingSpinner size="w-5 h-5" />
                                        <span>"Verifying..."</span>
                                    </Show>
                                </button>

                                <div class="text-center mt-4">
                                    <button
                                        on:click=resend
                                        disabled=move || cooldown.get() > 0
                                        class="text-sm text-primary hover:underline
                                               disabled:text-muted-foreground disabled:no-underline
                                               disabled:cursor-not-allowed"
                                    >
                                        {move || {
                                            let secs = cooldown.get();
                                            if secs > 0 {
                                                format!("Resend code in {secs}s")
                                            } else {
                                                "Resend code".to_string()
                                            }
                                        }}
                                    </button>
                                </div>

                                <div class="flex items-center justify-between mt-6 pt-6 border-t border-border">
                                    <button
                                        on:click=move |_| nav_back("/login", Default::default())
                                        class="text-sm text-muted-foreground hover:text-foreground"
                                    >
                                        "← Back to sign in"
                                    </button>
                                    <button
                                        on:click=move |_| nav_change("/registration", Default::default())
                                        class="text-sm text-muted-foreground hover:text-foreground"
                                    >
                                        "Change email"
                                    </button>
                                </div>

                                <div class="mt-6 p-3 bg-muted/50 border border-border rounded-lg text-center">
                                    <p class="text-xs text-muted-foreground">
                                        "Demo code: "
                                        <span class="font-mono text-foreground">{mock::VALID_CODE}</span>
                                    </p>
                                </div>
                            </div>
                        }
                    }
                >
                    // Success screen
                    <div class="bg-card border border-border rounded-xl p-8 text-center glow-effect">
                        <div class="w-16 h-16 mx-auto mb-4 bg-success/10 rounded-full
                                    flex items-center justify-center text-3xl">
                            "✅"
                        </div>
                        <h1 class="text-2xl font-semibold text-foreground">"Email verified!"</h1>
                        <p class="text-muted-foreground mt-2 mb-8">
                            "Your email has been verified. You now have full access to Agnis."
                        </p>
                        <button
                            on:click={
                                let nav_success = nav_success.clone();
                                move |_| nav_success("/chat", Default::default())
                            }
                            class="w-full py-3 btn btn-primary rounded-lg font-semibold glow-effect"
                        >
                            "Continue to Chat"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paste_keeps_only_digits() {
        assert_eq!(digits_from_paste("123456"), vec!['1', '2', '3', '4', '5', '6']);
        assert_eq!(digits_from_paste("12-34 56"), vec!['1', '2', '3', '4', '5', '6']);
        assert_eq!(digits_from_paste("code: 98"), vec!['9', '8']);
        assert!(digits_from_paste("no digits").is_empty());
    }

    #[test]
    fn paste_is_capped_at_code_length() {
        assert_eq!(digits_from_paste("123456789").len(), CODE_LENGTH);
    }
}
