//! Chat page
//!
//! Transcript, input, mode switching, and the sidebar. Replies are canned
//! and delayed to feel like a real assistant; regeneration swaps the reply
//! in place after a shorter delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::components::{ChatInput, ChatSidebar, Header, MessageBubble, ParticleBackground, TypingIndicator};
use crate::mock;
use crate::state::AppState;
use crate::types::{ChatMode, ConversationSummary, Message, MessageRole};

/// Reply latency in milliseconds: a 1.5s base plus up to a second of jitter.
fn reply_delay_ms() -> u32 {
    1_500 + (js_sys::Math::random() * 1_000.0) as u32
}

/// Rebuild a transcript from a stored conversation summary.
fn transcript_for(summary: &ConversationSummary) -> Vec<Message> {
    let mut question = Message::user(summary.preview.clone());
    question.timestamp = summary.created_at;
    let mut answer = Message::assistant(summary.snippet.clone(), summary.mode);
    answer.timestamp = summary.updated_at;
    vec![question, answer]
}

/// Find the user prompt an assistant message was answering: the closest
/// user message above it.
fn prompt_for(messages: &[Message], assistant_id: &str) -> Option<String> {
    let position = messages.iter().position(|m| m.id == assistant_id)?;
    messages[..position]
        .iter()
        .rev()
        .find(|m| m.role == MessageRole::User)
        .map(|m| m.content.clone())
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let query = use_query_map();

    let current_mode = RwSignal::new(ChatMode::Research);
    let sidebar_collapsed = RwSignal::new(false);
    let active_chat = RwSignal::new(None::<u32>);
    let messages = RwSignal::new(mock::seed_messages());
    let input = RwSignal::new(String::new());
    let is_typing = RwSignal::new(false);

    let history_items = mock::conversation_summaries();
    let history = {
        let items = history_items.clone();
        Signal::derive(move || items.clone())
    };

    let open_chat = {
        let items = history_items.clone();
        move |id: Option<u32>| {
            match id.and_then(|id| items.iter().find(|c| c.id == id)) {
                Some(summary) => {
                    current_mode.set(summary.mode);
                    messages.set(transcript_for(summary));
                    active_chat.set(Some(summary.id));
                    tracing::debug!(id = summary.id, "opened stored conversation");
                }
                None => {
                    messages.set(vec![mock::welcome_message(current_mode.get_untracked())]);
                    active_chat.set(None);
                }
            }
        }
    };

    // Deep link from the history browser: /chat?conversation=<id>
    if let Some(id) = query
        .with_untracked(|q| q.get("conversation"))
        .and_then(|raw| raw.parse::<u32>().ok())
    {
        open_chat(Some(id));
    }

    let on_chat_select = {
        let open_chat = open_chat.clone();
        Callback::new(move |id: Option<u32>| open_chat(id))
    };

    // Announce a mode switch in the transcript.
    Effect::new(move |previous: Option<ChatMode>| {
        let mode = current_mode.get();
        if previous.is_some_and(|prev| prev != mode) {
            messages.update(|all| all.push(mock::welcome_message(mode)));
        }
        mode
    });

    let send = move || {
        let prompt = input.get_untracked().trim().to_string();
        if prompt.is_empty() || is_typing.get_untracked() {
            return;
        }
        input.set(String::new());
        messages.update(|all| all.push(Message::user(prompt.clone())));
        is_typing.set(true);

        let mode = current_mode.get_untracked();
        Timeout::new(reply_delay_ms(), move || {
            messages.update(|all| all.push(Message::assistant(mock::assistant_reply(&prompt, mode), mode)));
            is_typing.set(false);
        })
        .forget();
    };

    let on_regenerate = Callback::new(move |message_id: String| {
        if is_typing.get_untracked() {
            return;
        }
        let prompt = messages
            .with_untracked(|all| prompt_for(all, &message_id))
            .unwrap_or_default();
        is_typing.set(true);

        let mode = current_mode.get_untracked();
        Timeout::new(1_000, move || {
            messages.update(|all| {
                if let Some(message) = all.iter_mut().find(|m| m.id == message_id) {
                    message.content = mock::assistant_reply(&prompt, mode);
                }
            });
            is_typing.set(false);
        })
        .forget();
    });

    // Keep the newest message in view.
    let bottom_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move |_| {
        messages.track();
        is_typing.track();
        if let Some(marker) = bottom_ref.get() {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            marker.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let greeting_name = Signal::derive(move || {
        state
            .user
            .get()
            .map(|profile| profile.name)
            .unwrap_or_else(|| "there".to_string())
    });

    view! {
        <Title text="Chat - Agnis AI" />

        <div class="min-h-screen bg-background relative">
            <ParticleBackground intensity=0.3 />
            <Header />
            <ChatSidebar
                collapsed=sidebar_collapsed
                current_mode=current_mode
                history=history
                active_chat=active_chat
                on_chat_select=on_chat_select
            />

            <main class=move || format!(
                "relative z-10 pt-16 h-screen flex flex-col smooth-transition {}",
                if sidebar_collapsed.get() { "ml-16" } else { "ml-80" }
            )>
                // Mode banner
                <div class="flex items-center justify-between px-6 py-3 border-b border-border bg-card/50 backdrop-blur-sm">
                    <div class="flex items-center space-x-3">
                        <span class="text-xl">{move || current_mode.get().icon()}</span>
                        <div>
                            <h1 class="text-sm font-semibold text-foreground">
                                {move || current_mode.get().label()}
                            </h1>
                            <p class="text-xs text-muted-foreground">
                                {move || current_mode.get().description()}
                            </p>
                        </div>
                    </div>
                    <span class="text-xs text-muted-foreground">
                        {move || format!("Hi, {}", greeting_name.get())}
                    </span>
                </div>

                // Transcript
                <div class="flex-1 overflow-y-auto px-6 py-6">
                    <For
                        each=move || messages.get()
                        key=|message| message.id.clone()
                        let:message
                    >
                        <MessageBubble message=message on_regenerate=on_regenerate />
                    </For>

                    <Show when=move || is_typing.get()>
                        <TypingIndicator />
                    </Show>

                    <div node_ref=bottom_ref></div>
                </div>

                <ChatInput
                    value=input
                    on_submit=send
                    disabled=Signal::derive(move || is_typing.get())
                />
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_conversations_rebuild_as_two_messages() {
        let summaries = mock::conversation_summaries();
        let transcript = transcript_for(&summaries[0]);
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, MessageRole::User);
        assert_eq!(transcript[1].role, MessageRole::Assistant);
        assert_eq!(transcript[1].mode, Some(summaries[0].mode));
    }

    #[test]
    fn regeneration_finds_the_preceding_prompt() {
        let messages = vec![
            Message::user("first question"),
            Message::assistant("first answer", ChatMode::Research),
            Message::user("second question"),
            Message::assistant("second answer", ChatMode::Research),
        ];
        let target = messages[3].id.clone();
        assert_eq!(prompt_for(&messages, &target), Some("second question".to_string()));

        let orphan = Message::assistant("no prompt", ChatMode::Coding);
        let all = vec![orphan.clone()];
        assert_eq!(prompt_for(&all, &orphan.id), None);
        assert_eq!(prompt_for(&all, "missing-id"), None);
    }
}
