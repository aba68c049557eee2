//! Landing page

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::{Header, ParticleBackground};
use crate::types::ChatMode;

/// Public landing page: animated hero, one feature card per chat mode, and
/// the signup call to action.
#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();
    let is_loaded = RwSignal::new(false);

    // Stage the entry animations just after mount.
    Effect::new(move |started: Option<Option<Timeout>>| {
        if started.flatten().is_some() {
            return None;
        }
        Some(Timeout::new(100, move || is_loaded.set(true)))
    });

    let nav_register = navigate.clone();
    let nav_login = navigate.clone();

    view! {
        <Title text="Agnis AI - Your Self-Adaptive AI Assistant" />

        <div class="min-h-screen bg-background relative overflow-hidden">
            <ParticleBackground intensity=0.5 />
            <Header />

            <main class="relative z-10 pt-20">
                // Hero
                <section class=move || format!(
                    "min-h-screen flex items-center justify-center px-6 transition-all duration-1000 {}",
                    if is_loaded.get() { "opacity-100" } else { "opacity-0" }
                )>
                    <div class="max-w-4xl mx-auto text-center">
                        <div class="w-24 h-24 mx-auto mb-8 rounded-2xl bg-gradient-to-br from-primary to-accent
                                    flex items-center justify-center text-5xl glow-effect animate-pulse">
                            "⚡"
                        </div>
                        <h1 class="text-5xl md:text-7xl font-bold mb-6 text-foreground">
                            "Agnis AI"
                        </h1>
                        <p class="text-xl md:text-2xl text-muted-foreground mb-4">
                            "Your Self-Adaptive AI Assistant"
                        </p>
                        <p class="text-lg text-muted-foreground mb-12 max-w-2xl mx-auto">
                            "Empowering creativity, research, and development with intelligent assistance. "
                            "Switch between specialized modes for whatever you're working on."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <button
                                on:click=move |_| nav_register("/registration", Default::default())
                                class="px-8 py-4 btn btn-primary rounded-xl text-lg font-semibold glow-effect"
                            >
                                "Get Started"
                            </button>
                            <button
                                on:click=move |_| nav_login("/login", Default::default())
                                class="px-8 py-4 btn btn-outline rounded-xl text-lg font-semibold"
                            >
                                "Sign In"
                            </button>
                        </div>
                    </div>
                </section>

                // Feature cards, one per mode
                <section class=move || format!(
                    "py-24 transition-all duration-1000 delay-300 {}",
                    if is_loaded.get() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-8" }
                )>
                    <div class="max-w-6xl mx-auto px-6">
                        <h2 class="text-3xl font-bold text-center mb-12 text-foreground">
                            "One Assistant, Three Specialties"
                        </h2>
                        <div class="grid md:grid-cols-3 gap-8">
                            {ChatMode::ALL.map(|mode| view! {
                                <div class="p-6 bg-card rounded-xl border border-border hover:border-primary/50
                                            smooth-transition glow-effect">
                                    <div class="text-4xl mb-4">{mode.icon()}</div>
                                    <h3 class="text-xl font-semibold mb-2 text-foreground">{mode.label()}</h3>
                                    <p class="text-muted-foreground">{mode.description()}</p>
                                </div>
                            })}
                        </div>
                    </div>
                </section>
            </main>

            <Footer />
        </div>
    }
}

/// Shared marketing footer.
#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="relative z-10 border-t border-border bg-card/50">
            <div class="max-w-7xl mx-auto px-6 py-8 text-center space-y-4">
                <div class="flex items-center justify-center space-x-2">
                    <div class="w-8 h-8 bg-gradient-to-br from-primary to-accent rounded-lg
                                flex items-center justify-center glow-effect">
                        "⚡"
                    </div>
                    <span class="text-lg font-semibold text-foreground">"Agnis AI"</span>
                </div>
                <p class="text-sm text-muted-foreground">"Your Self-Adaptive AI Assistant"</p>
                <p class="text-xs text-muted-foreground">
                    {format!("© {year} Agnis AI. All rights reserved.")}
                </p>
            </div>
        </footer>
    }
}
