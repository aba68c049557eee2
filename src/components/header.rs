//! Header component

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::AppState;

/// Fixed application header. Shows sign-in/get-started for visitors and the
/// navigation plus account menu once signed in.
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    let is_auth = {
        let state = state.clone();
        Signal::derive(move || state.is_authenticated.get())
    };

    let logo_click = {
        let navigate = navigate.clone();
        move |_| {
            let target = if is_auth.get_untracked() { "/chat" } else { "/landing" };
            navigate(target, Default::default());
        }
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-background/95 backdrop-blur-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                // Logo
                <button on:click=logo_click class="flex items-center cursor-pointer group">
                    <div class="w-10 h-10 bg-gradient-to-br from-primary to-accent rounded-lg
                                flex items-center justify-center glow-effect smooth-transition">
                        "⚡"
                    </div>
                    <h1 class="ml-3 text-xl font-semibold text-foreground group-hover:text-primary smooth-transition">
                        "Agnis AI"
                    </h1>
                </button>

                {move || {
                    if is_auth.get() {
                        let state = state.clone();
                        let navigate = navigate.clone();
                        let nav_chat = navigate.clone();
                        let nav_history = navigate.clone();
                        let nav_settings = navigate.clone();
                        let user_name = state.user;
                        view! {
                            <nav class="flex items-center space-x-4">
                                <button
                                    on:click=move |_| nav_chat("/chat", Default::default())
                                    class=move || format!(
                                        "btn btn-ghost {}",
                                        if pathname.get() == "/chat" {
                                            "text-primary glow-border"
                                        } else {
                                            "text-muted-foreground"
                                        }
                                    )
                                >
                                    "Chat"
                                </button>
                                <button
                                    on:click=move |_| nav_history("/chat-history", Default::default())
                                    class=move || format!(
                                        "btn btn-ghost {}",
                                        if pathname.get() == "/chat-history" {
                                            "text-primary glow-border"
                                        } else {
                                            "text-muted-foreground"
                                        }
                                    )
                                >
                                    "History"
                                </button>

                                // Account menu
                                <div class="relative">
                                    <button
                                        on:click=move |_| menu_open.update(|open| *open = !*open)
                                        class="w-10 h-10 rounded-full bg-card hover:bg-muted glow-effect
                                               flex items-center justify-center"
                                    >
                                        "👤"
                                    </button>

                                    <Show when=move || menu_open.get()>
                                        {
                                            let state = state.clone();
                                            let nav_settings = nav_settings.clone();
                                            let navigate = navigate.clone();
                                            view! {
                                                <div class="absolute right-0 top-12 w-48 bg-popover border border-border
                                                            rounded-lg shadow-glow-lg py-2 z-60">
                                                    <div class="px-4 py-2 border-b border-border">
                                                        <p class="text-sm font-medium text-foreground">
                                                            {move || user_name.get().map(|u| u.name).unwrap_or_else(|| "User".into())}
                                                        </p>
                                                        <p class="text-xs text-muted-foreground">
                                                            {move || user_name.get().map(|u| u.email).unwrap_or_default()}
                                                        </p>
                                                    </div>
                                                    <button
                                                        on:click=move |_| {
                                                            menu_open.set(false);
                                                            nav_settings("/profile-settings", Default::default());
                                                        }
                                                        class="w-full text-left px-4 py-2 text-sm hover:bg-muted"
                                                    >
                                                        "Profile Settings"
                                                    </button>
                                                    <button
                                                        on:click=move |_| {
                                                            state.sign_out();
                                                            menu_open.set(false);
                                                            navigate("/landing", Default::default());
                                                        }
                                                        class="w-full text-left px-4 py-2 text-sm hover:bg-muted text-destructive"
                                                    >
                                                        "Sign Out"
                                                    </button>
                                                </div>
                                            }
                                        }
                                    </Show>
                                </div>
                            </nav>
                        }
                        .into_any()
                    } else {
                        let nav_login = navigate.clone();
                        let nav_register = navigate.clone();
                        view! {
                            <nav class="flex items-center space-x-4">
                                <button
                                    on:click=move |_| nav_login("/login", Default::default())
                                    class=move || format!(
                                        "btn btn-ghost {}",
                                        if pathname.get() == "/login" {
                                            "text-primary"
                                        } else {
                                            "text-muted-foreground"
                                        }
                                    )
                                >
                                    "Sign In"
                                </button>
                                <button
                                    on:click=move |_| nav_register("/registration", Default::default())
                                    class="btn btn-primary glow-effect"
                                >
                                    "Get Started"
                                </button>
                            </nav>
                        }
                        .into_any()
                    }
                }}
            </div>
        </header>
    }
}
