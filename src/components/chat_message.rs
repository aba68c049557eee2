//! Chat message bubble

use leptos::prelude::*;

use crate::types::{Message, MessageRole};

/// Render a single chat message. User messages sit on the right; assistant
/// messages carry copy and regenerate actions.
#[component]
pub fn MessageBubble(
    message: Message,
    /// Called with the message id to regenerate an assistant response.
    #[prop(optional, into)]
    on_regenerate: Option<Callback<String>>,
) -> impl IntoView {
    let is_user = message.role == MessageRole::User;
    let timestamp = message.timestamp.format("%I:%M %p").to_string();
    let content_for_copy = message.content.clone();
    let message_id = message.id.clone();

    let copy_message = move |_| {
        copy_to_clipboard(&content_for_copy);
    };

    if is_user {
        view! {
            <div class="flex items-start justify-end space-x-3 mb-6 stagger-fade-in">
                <div class="bg-gradient-to-br from-primary to-primary/80 rounded-2xl rounded-tr-sm
                            px-4 py-3 max-w-2xl text-primary-foreground glow-effect">
                    <div class="whitespace-pre-wrap text-sm leading-relaxed">
                        {message.content.clone()}
                    </div>
                    <div class="flex items-center justify-end mt-2">
                        <span class="text-xs text-primary-foreground/60">{timestamp}</span>
                    </div>
                </div>
                <div class="w-8 h-8 bg-gradient-to-br from-primary to-accent rounded-full
                            flex items-center justify-center glow-effect">
                    "👤"
                </div>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="flex items-start space-x-3 mb-6 stagger-fade-in group">
                <div class="w-8 h-8 bg-gradient-to-br from-primary/20 to-accent/20 rounded-full
                            flex items-center justify-center glow-effect">
                    "🤖"
                </div>
                <div class="flex-1 max-w-4xl">
                    <div class="bg-card border border-border rounded-2xl rounded-tl-sm px-4 py-3 glow-effect">
                        <MessageContent content=message.content.clone() />
                    </div>
                    <div class="flex items-center justify-between mt-2 opacity-0 group-hover:opacity-100 smooth-transition">
                        <div class="flex items-center space-x-2">
                            <button
                                on:click=copy_message
                                class="p-1 text-muted-foreground hover:text-foreground smooth-transition"
                                title="Copy message"
                            >
                                "⧉"
                            </button>
                            {on_regenerate.map(|callback| {
                                view! {
                                    <button
                                        on:click=move |_| callback.run(message_id.clone())
                                        class="p-1 text-muted-foreground hover:text-foreground smooth-transition"
                                        title="Regenerate response"
                                    >
                                        "↻"
                                    </button>
                                }
                            })}
                        </div>
                        <span class="text-xs text-muted-foreground">{timestamp.clone()}</span>
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}

fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}

/// Render message content, splitting out fenced code blocks.
#[component]
fn MessageContent(content: String) -> impl IntoView {
    let parts: Vec<String> = content.split("```").map(str::to_string).collect();

    if parts.len() > 1 {
        view! {
            <div class="whitespace-pre-wrap text-sm leading-relaxed text-foreground">
                {parts.into_iter().enumerate().map(|(i, part)| {
                    if i % 2 == 1 {
                        // Fenced block: first line is the language tag
                        let (lang, code) = match part.split_once('\n') {
                            Some((lang, code)) => (lang.to_string(), code.to_string()),
                            None => (String::new(), part),
                        };
                        let code_for_copy = code.clone();
                        view! {
                            <div class="my-3 bg-muted rounded-lg border border-border overflow-hidden">
                                <div class="flex items-center justify-between px-3 py-2 border-b border-border">
                                    <span class="text-xs text-muted-foreground font-mono">{lang}</span>
                                    <button
                                        on:click=move |_| copy_to_clipboard(&code_for_copy)
                                        class="text-xs text-muted-foreground hover:text-foreground smooth-transition"
                                    >
                                        "Copy"
                                    </button>
                                </div>
                                <pre class="p-3 text-xs font-mono text-foreground overflow-x-auto">
                                    <code>{code}</code>
                                </pre>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! { <span>{part}</span> }.into_any()
                    }
                }).collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="whitespace-pre-wrap text-sm leading-relaxed text-foreground">
                {content}
            </div>
        }
        .into_any()
    }
}
