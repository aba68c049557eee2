//! Loading indicators

use leptos::prelude::*;

/// Animated loading dots
#[component]
pub fn LoadingDots() -> impl IntoView {
    view! {
        <div class="flex items-center gap-1">
            <span class="w-2 h-2 bg-primary rounded-full dot-bounce-1"></span>
            <span class="w-2 h-2 bg-primary rounded-full dot-bounce-2"></span>
            <span class="w-2 h-2 bg-primary rounded-full dot-bounce-3"></span>
        </div>
    }
}

/// Spinner loading indicator
#[component]
pub fn LoadingSpinner(
    #[prop(default = "w-5 h-5")] size: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "{} border-2 border-primary border-t-transparent rounded-full animate-spin",
            size
        )></div>
    }
}

/// Full-screen placeholder shown while the route gate resolves.
#[component]
pub fn GateLoading() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-background flex items-center justify-center">
            <div class="flex flex-col items-center space-y-4">
                <div class="w-12 h-12 bg-gradient-to-br from-primary to-accent rounded-lg
                            flex items-center justify-center glow-effect animate-pulse">
                    <LoadingSpinner size="w-6 h-6" />
                </div>
                <p class="text-muted-foreground text-sm">"Loading Agnis AI..."</p>
            </div>
        </div>
    }
}

/// Typing indicator bubble for the assistant
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-start space-x-3 mb-6 stagger-fade-in">
            <div class="w-8 h-8 bg-gradient-to-br from-primary/20 to-accent/20 rounded-full
                        flex items-center justify-center glow-effect">
                "🤖"
            </div>
            <div class="bg-card border border-border rounded-2xl rounded-tl-sm px-4 py-3 glow-effect">
                <LoadingDots />
            </div>
        </div>
    }
}
