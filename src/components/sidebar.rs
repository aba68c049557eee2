//! Chat sidebar: mode selection, new chat, and searchable history grouped
//! by day.

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::types::{ChatMode, ConversationSummary};

/// Human-readable bucket for a conversation's age, relative to `now`.
pub fn day_bucket(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - created_at).num_days();
    match days {
        i64::MIN..=0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        _ => created_at.format("%-m/%-d/%Y").to_string(),
    }
}

/// Group conversations into day buckets, preserving input order inside each
/// bucket and bucket order of first appearance.
pub fn group_by_day(
    conversations: &[ConversationSummary],
    now: DateTime<Utc>,
) -> Vec<(String, Vec<ConversationSummary>)> {
    let mut groups: Vec<(String, Vec<ConversationSummary>)> = Vec::new();
    for conv in conversations {
        let bucket = day_bucket(conv.created_at, now);
        match groups.iter_mut().find(|(name, _)| *name == bucket) {
            Some((_, members)) => members.push(conv.clone()),
            None => groups.push((bucket, vec![conv.clone()])),
        }
    }
    groups
}

/// Filter history by a case-insensitive search over title and preview.
pub fn search_history(
    conversations: &[ConversationSummary],
    query: &str,
) -> Vec<ConversationSummary> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return conversations.to_vec();
    }
    conversations
        .iter()
        .filter(|conv| {
            conv.title.to_lowercase().contains(&query)
                || conv.preview.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Collapsible sidebar for the chat page.
#[component]
pub fn ChatSidebar(
    collapsed: RwSignal<bool>,
    current_mode: RwSignal<ChatMode>,
    history: Signal<Vec<ConversationSummary>>,
    active_chat: RwSignal<Option<u32>>,
    /// Called with `Some(id)` to open a stored chat, `None` for a new one.
    on_chat_select: Callback<Option<u32>>,
) -> impl IntoView {
    let search_query = RwSignal::new(String::new());

    let filtered = Signal::derive(move || search_history(&history.get(), &search_query.get()));
    let groups = Signal::derive(move || group_by_day(&filtered.get(), Utc::now()));

    view! {
        <Show
            when=move || !collapsed.get()
            fallback=move || view! {
                // Collapsed rail
                <aside class="fixed left-0 top-16 h-[calc(100vh-4rem)] w-16 bg-card border-r border-border
                              z-40 flex flex-col items-center py-4 space-y-4">
                    <button
                        on:click=move |_| collapsed.set(false)
                        class="w-10 h-10 btn btn-ghost glow-effect"
                        title="Open sidebar"
                    >
                        "»"
                    </button>
                    <div class="w-8 h-px bg-border"></div>
                    {ChatMode::ALL.map(|mode| view! {
                        <button
                            on:click=move |_| current_mode.set(mode)
                            class=move || format!(
                                "w-10 h-10 btn btn-ghost {}",
                                if current_mode.get() == mode { "bg-primary/10 text-primary glow-border" } else { "" }
                            )
                            title=mode.label()
                        >
                            {mode.icon()}
                        </button>
                    })}
                </aside>
            }
        >
            <aside class="fixed left-0 top-16 h-[calc(100vh-4rem)] w-80 bg-card border-r border-border
                          z-40 flex flex-col smooth-transition">
                // Header
                <div class="flex items-center justify-between p-4 border-b border-border">
                    <h2 class="text-lg font-semibold text-foreground">"Agnis AI"</h2>
                    <button
                        on:click=move |_| collapsed.set(true)
                        class="w-8 h-8 btn btn-ghost"
                        title="Collapse sidebar"
                    >
                        "«"
                    </button>
                </div>

                // Mode selection
                <div class="p-4 border-b border-border space-y-2">
                    {ChatMode::ALL.map(|mode| view! {
                        <button
                            on:click=move |_| current_mode.set(mode)
                            class=move || format!(
                                "w-full flex items-center space-x-3 p-3 rounded-lg text-left {}",
                                if current_mode.get() == mode { "btn-primary glow-effect" } else { "hover:bg-muted" }
                            )
                        >
                            <span class="text-lg">{mode.icon()}</span>
                            <span class="flex-1 min-w-0">
                                <span class="block font-medium text-sm">{mode.label()}</span>
                                <span class="block text-xs text-muted-foreground">{mode.description()}</span>
                            </span>
                        </button>
                    })}
                </div>

                // New chat
                <div class="p-4 border-b border-border">
                    <button
                        on:click=move |_| on_chat_select.run(None)
                        class="w-full btn btn-outline glow-effect"
                    >
                        "+ New Chat"
                    </button>
                </div>

                // Search
                <div class="p-4 border-b border-border">
                    <input
                        type="text"
                        placeholder="Search conversations..."
                        prop:value=move || search_query.get()
                        on:input=move |ev| search_query.set(event_target_value(&ev))
                        class="w-full px-4 py-2 bg-input border border-border rounded-lg text-sm
                               text-foreground placeholder-muted-foreground
                               focus:outline-none focus:ring-2 focus:ring-primary"
                    />
                </div>

                // Grouped history
                <div class="flex-1 overflow-y-auto p-2">
                    {move || {
                        let groups = groups.get();
                        if groups.is_empty() {
                            view! {
                                <div class="p-4 text-center">
                                    <p class="text-sm text-muted-foreground">"No conversations yet"</p>
                                    <p class="text-xs text-muted-foreground mt-1">"Start a new chat to begin"</p>
                                </div>
                            }
                            .into_any()
                        } else {
                            groups.into_iter().map(|(bucket, chats)| view! {
                                <div class="mb-4">
                                    <h3 class="text-xs font-medium text-muted-foreground uppercase tracking-wider px-2 py-1 mb-2">
                                        {bucket}
                                    </h3>
                                    <div class="space-y-1">
                                        {chats.into_iter().map(|chat| {
                                            let id = chat.id;
                                            view! {
                                                <button
                                                    on:click=move |_| on_chat_select.run(Some(id))
                                                    class=move || format!(
                                                        "w-full flex items-start space-x-3 p-3 rounded-lg text-left {}",
                                                        if active_chat.get() == Some(id) {
                                                            "bg-primary/10 text-primary border-l-2 border-primary"
                                                        } else {
                                                            "hover:bg-muted"
                                                        }
                                                    )
                                                >
                                                    <span class="mt-0.5">{chat.mode.icon()}</span>
                                                    <span class="flex-1 min-w-0">
                                                        <span class="block font-medium text-sm truncate">{chat.title.clone()}</span>
                                                        <span class="block text-xs text-muted-foreground truncate mt-1">
                                                            {chat.preview.clone()}
                                                        </span>
                                                    </span>
                                                </button>
                                            }
                                        }).collect::<Vec<_>>()}
                                    </div>
                                </div>
                            }).collect::<Vec<_>>().into_any()
                        }
                    }}
                </div>
            </aside>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::mock;

    #[test]
    fn day_buckets_cover_recent_history() {
        let now = Utc::now();
        assert_eq!(day_bucket(now, now), "Today");
        assert_eq!(day_bucket(now - Duration::hours(3), now), "Today");
        assert_eq!(day_bucket(now - Duration::days(1), now), "Yesterday");
        assert_eq!(day_bucket(now - Duration::days(3), now), "3 days ago");
        assert_eq!(day_bucket(now - Duration::days(6), now), "6 days ago");
    }

    #[test]
    fn old_conversations_bucket_by_date() {
        let now = Utc::now();
        let old = now - Duration::days(30);
        assert_eq!(day_bucket(old, now), old.format("%-m/%-d/%Y").to_string());
    }

    #[test]
    fn grouping_preserves_order() {
        let now = Utc::now();
        let history = mock::conversation_summaries();
        let groups = group_by_day(&history, now);
        let flattened: Vec<u32> = groups
            .iter()
            .flat_map(|(_, members)| members.iter().map(|c| c.id))
            .collect();
        let original: Vec<u32> = history.iter().map(|c| c.id).collect();
        assert_eq!(flattened, original);
    }

    #[test]
    fn search_matches_title_and_preview() {
        let history = mock::conversation_summaries();
        let by_title = search_history(&history, "pandas");
        assert!(by_title.iter().any(|c| c.id == 1));

        let by_preview = search_history(&history, "marine ecosystems");
        assert_eq!(by_preview.len(), 1);
        assert_eq!(by_preview[0].id, 2);

        assert!(search_history(&history, "PANDAS").iter().any(|c| c.id == 1));
        assert_eq!(search_history(&history, "").len(), history.len());
        assert!(search_history(&history, "zebra").is_empty());
    }
}
