//! Conversation history browser
//!
//! Search, mode and date-range filters, ten-per-page pagination, bulk
//! actions over a checkbox selection, and a detail panel with a jump back
//! into the chat.

use std::collections::HashSet;

use chrono::NaiveDate;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::{Header, LoadingSpinner, ParticleBackground};
use crate::mock;
use crate::types::{ChatMode, ConversationSummary};

pub const PAGE_SIZE: usize = 10;

/// Active filters for the history list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryFilter {
    pub query: String,
    pub mode: Option<ChatMode>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl HistoryFilter {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.mode.is_none()
            && self.from.is_none()
            && self.to.is_none()
    }
}

/// Apply all filters. The text query matches title, preview, and tags,
/// case-insensitively; the date range is inclusive on both ends.
pub fn filter_conversations(
    items: &[ConversationSummary],
    filter: &HistoryFilter,
) -> Vec<ConversationSummary> {
    let query = filter.query.trim().to_lowercase();
    items
        .iter()
        .filter(|conv| {
            if !query.is_empty() {
                let in_text = conv.title.to_lowercase().contains(&query)
                    || conv.preview.to_lowercase().contains(&query)
                    || conv.tags.iter().any(|tag| tag.to_lowercase().contains(&query));
                if !in_text {
                    return false;
                }
            }
            if filter.mode.is_some_and(|mode| mode != conv.mode) {
                return false;
            }
            let date = conv.created_at.date_naive();
            if filter.from.is_some_and(|from| date < from) {
                return false;
            }
            if filter.to.is_some_and(|to| date > to) {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

/// Number of pages for `total` items, never zero.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Slice out one page, clamping an out-of-range page to the last one.
pub fn page_items(items: &[ConversationSummary], page: usize) -> Vec<ConversationSummary> {
    let page = page.min(page_count(items.len()) - 1);
    items
        .iter()
        .skip(page * PAGE_SIZE)
        .take(PAGE_SIZE)
        .cloned()
        .collect()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[component]
pub fn ChatHistoryPage() -> impl IntoView {
    let navigate = use_navigate();

    let is_loading = RwSignal::new(true);
    let conversations = RwSignal::new(Vec::<ConversationSummary>::new());
    let filter = RwSignal::new(HistoryFilter::default());
    let page = RwSignal::new(0usize);
    let selection = RwSignal::new(HashSet::<u32>::new());
    let preview_id = RwSignal::new(None::<u32>);
    let confirm_delete = RwSignal::new(false);

    // Simulated fetch of the stored history.
    Effect::new(move |started: Option<Option<Timeout>>| {
        if started.flatten().is_some() {
            return None;
        }
        Some(Timeout::new(800, move || {
            conversations.set(mock::conversation_summaries());
            is_loading.set(false);
        }))
    });

    let filtered = Memo::new(move |_| filter_conversations(&conversations.get(), &filter.get()));
    let total_pages = Memo::new(move |_| page_count(filtered.get().len()));
    let visible = Memo::new(move |_| page_items(&filtered.get(), page.get()));

    // Filters reset pagination.
    Effect::new(move |previous: Option<HistoryFilter>| {
        let current = filter.get();
        if previous.is_some_and(|prev| prev != current) {
            page.set(0);
        }
        current
    });

    let toggle_selected = move |id: u32| {
        selection.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });
    };

    let select_all_visible = move |_| {
        let ids: Vec<u32> = visible.get_untracked().iter().map(|c| c.id).collect();
        selection.update(|set| {
            if ids.iter().all(|id| set.contains(id)) {
                for id in &ids {
                    set.remove(id);
                }
            } else {
                set.extend(ids);
            }
        });
    };

    let delete_selected = move |_| {
        let doomed = selection.get_untracked();
        conversations.update(|all| all.retain(|conv| !doomed.contains(&conv.id)));
        if preview_id.get_untracked().is_some_and(|id| doomed.contains(&id)) {
            preview_id.set(None);
        }
        tracing::info!(count = doomed.len(), "deleted conversations");
        selection.set(HashSet::new());
        confirm_delete.set(false);
    };

    let set_favorite = move |favorite: bool| {
        let chosen = selection.get_untracked();
        conversations.update(|all| {
            for conv in all.iter_mut().filter(|c| chosen.contains(&c.id)) {
                conv.is_favorite = favorite;
            }
        });
        selection.set(HashSet::new());
    };

    let export_selected = move |_| {
        let chosen = selection.get_untracked();
        tracing::info!(count = chosen.len(), "exported conversations");
        selection.set(HashSet::new());
    };

    let toggle_favorite = move |id: u32| {
        conversations.update(|all| {
            if let Some(conv) = all.iter_mut().find(|c| c.id == id) {
                conv.is_favorite = !conv.is_favorite;
            }
        });
    };

    let preview = Signal::derive(move || {
        preview_id
            .get()
            .and_then(|id| conversations.get().iter().find(|c| c.id == id).cloned())
    });

    let continue_chat = {
        let navigate = navigate.clone();
        move |id: u32| {
            navigate(&format!("/chat?conversation={id}"), Default::default());
        }
    };

    view! {
        <Title text="Chat History - Agnis AI" />

        <div class="min-h-screen bg-background relative">
            <ParticleBackground intensity=0.2 />
            <Header />

            <main class="relative z-10 pt-20 max-w-7xl mx-auto px-6 pb-12">
                <div class="mb-6">
                    <h1 class="text-2xl font-bold text-foreground">"Chat History"</h1>
                    <p class="text-muted-foreground mt-1">
                        {move || format!("{} conversations", filtered.get().len())}
                    </p>
                </div>

                // Filter toolbar
                <div class="flex flex-wrap items-end gap-4 p-4 bg-card border border-border rounded-xl mb-6">
                    <div class="flex-1 min-w-48">
                        <label class="block text-xs text-muted-foreground mb-1">"Search"</label>
                        <input
                            type="text"
                            placeholder="Title, preview, or tag..."
                            prop:value=move || filter.get().query
                            on:input=move |ev| {
                                let query = event_target_value(&ev);
                                filter.update(|f| f.query = query);
                            }
                            class="w-full px-3 py-2 bg-input border border-border rounded-lg text-sm
                                   text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                        />
                    </div>
                    <div>
                        <label class="block text-xs text-muted-foreground mb-1">"Mode"</label>
                        <select
                            on:change=move |ev| {
                                let mode = ChatMode::from_id(&event_target_value(&ev));
                                filter.update(|f| f.mode = mode);
                            }
                            class="px-3 py-2 bg-input border border-border rounded-lg text-sm text-foreground"
                        >
                            <option value="all" selected=move || filter.get().mode.is_none()>
                                "All modes"
                            </option>
                            {ChatMode::ALL.map(|mode| view! {
                                <option
                                    value=mode.id()
                                    selected=move || filter.get().mode == Some(mode)
                                >
                                    {mode.label()}
                                </option>
                            })}
                        </select>
                    </div>
                    <div>
                        <label class="block text-xs text-muted-foreground mb-1">"From"</label>
                        <input
                            type="date"
                            on:change=move |ev| {
                                let from = parse_date(&event_target_value(&ev));
                                filter.update(|f| f.from = from);
                            }
                            class="px-3 py-2 bg-input border border-border rounded-lg text-sm text-foreground"
                        />
                    </div>
                    <div>
                        <label class="block text-xs text-muted-foreground mb-1">"To"</label>
                        <input
                            type="date"
                            on:change=move |ev| {
                                let to = parse_date(&event_target_value(&ev));
                                filter.update(|f| f.to = to);
                            }
                            class="px-3 py-2 bg-input border border-border rounded-lg text-sm text-foreground"
                        />
                    </div>
                    <Show when=move || !filter.get().is_empty()>
                        <button
                            on:click=move |_| filter.set(HistoryFilter::default())
                            class="px-3 py-2 btn btn-ghost text-sm"
                        >
                            "Clear filters"
                        </button>
                    </Show>
                </div>

                // Bulk action bar
                <Show when=move || !selection.get().is_empty()>
                    <div class="flex items-center gap-3 p-3 bg-primary/5 border border-primary/30 rounded-xl mb-4">
                        <span class="text-sm text-foreground">
                            {move || format!("{} selected", selection.get().len())}
                        </span>
                        <div class="flex-1"></div>
                        <button
                            on:click=move |_| set_favorite(true)
                            class="px-3 py-1.5 btn btn-ghost text-sm"
                        >
                            "★ Favorite"
                        </button>
                        <button
                            on:click=move |_| set_favorite(false)
                            class="px-3 py-1.5 btn btn-ghost text-sm"
                        >
                            "☆ Unfavorite"
                        </button>
                        <button
                            on:click=export_selected
                            class="px-3 py-1.5 btn btn-ghost text-sm"
                        >
                            "Export"
                        </button>
                        <button
                            on:click=move |_| confirm_delete.set(true)
                            class="px-3 py-1.5 btn btn-ghost text-sm text-destructive"
                        >
                            "Delete"
                        </button>
                    </div>
                </Show>

                <div class="grid lg:grid-cols-3 gap-6">
                    // List
                    <div class="lg:col-span-2">
                        <Show
                            when=move || !is_loading.get()
                            fallback=|| view! {
                                <div class="flex flex-col items-center justify-center py-24 space-y-4">
                                    <LoadingSpinner size="w-8 h-8" />
                                    <p class="text-sm text-muted-foreground">"Loading your conversations..."</p>
                                </div>
                            }
                        >
                            <div class="flex items-center px-4 py-2">
                                <label class="flex items-center space-x-2 cursor-pointer text-xs text-muted-foreground">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            let set = selection.get();
                                            let ids = visible.get();
                                            !ids.is_empty() && ids.iter().all(|c| set.contains(&c.id))
                                        }
                                        on:change=select_all_visible
                                        class="w-4 h-4 accent-primary"
                                    />
                                    <span>"Select page"</span>
                                </label>
                            </div>

                            {move || {
                                let items = visible.get();
                                if items.is_empty() {
                                    view! {
                                        <div class="p-12 text-center bg-card border border-border rounded-xl">
                                            <p class="text-muted-foreground">"No conversations match your filters"</p>
                                        </div>
                                    }
                                    .into_any()
                                } else {
                                    items.into_iter().map(|conv| {
                                        let id = conv.id;
                                        let date = conv.created_at.format("%b %-d, %Y").to_string();
                                        view! {
                                            <div class=move || format!(
                                                "flex items-start gap-3 p-4 mb-2 bg-card border rounded-xl cursor-pointer
                                                 smooth-transition {}",
                                                if preview_id.get() == Some(id) {
                                                    "border-primary glow-border"
                                                } else {
                                                    "border-border hover:border-primary/50"
                                                }
                                            )>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || selection.get().contains(&id)
                                                    on:change=move |_| toggle_selected(id)
                                                    on:click=move |ev| ev.stop_propagation()
                                                    class="w-4 h-4 mt-1 accent-primary"
                                                />
                                                <div
                                                    class="flex-1 min-w-0"
                                                    on:click=move |_| preview_id.set(Some(id))
                                                >
                                                    <div class="flex items-center gap-2">
                                                        <span>{conv.mode.icon()}</span>
                                                        <h3 class="font-medium text-sm text-foreground truncate">
                                                            {conv.title.clone()}
                                                        </h3>
                                                    </div>
                                                    <p class="text-xs text-muted-foreground truncate mt-1">
                                                        {conv.preview.clone()}
                                                    </p>
                                                    <div class="flex items-center gap-2 mt-2">
                                                        {conv.tags.iter().map(|tag| view! {
                                                            <span class="px-2 py-0.5 text-xs bg-muted rounded-full text-muted-foreground">
                                                                {tag.clone()}
                                                            </span>
                                                        }).collect::<Vec<_>>()}
                                                    </div>
                                                    <div class="flex items-center gap-3 mt-2 text-xs text-muted-foreground">
                                                        <span>{date}</span>
                                                        <span>{format!("{} messages", conv.message_count)}</span>
                                                    </div>
                                                </div>
                                                <button
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        toggle_favorite(id);
                                                    }
                                                    class="text-lg"
                                                    title="Toggle favorite"
                                                >
                                                    {move || {
                                                        let favorite = conversations
                                                            .get()
                                                            .iter()
                                                            .find(|c| c.id == id)
                                                            .is_some_and(|c| c.is_favorite);
                                                        if favorite { "★" } else { "☆" }
                                                    }}
                                                </button>
                                            </div>
                                        }
                                    }).collect::<Vec<_>>().into_any()
                                }
                            }}

                            // Pagination
                            <Show when=move || { total_pages.get() > 1 }>
                                <div class="flex items-center justify-center gap-4 mt-6">
                                    <button
                                        on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
                                        disabled=move || page.get() == 0
                                        class="px-3 py-1.5 btn btn-ghost text-sm disabled:opacity-50"
                                    >
                                        "← Previous"
                                    </button>
                                    <span class="text-sm text-muted-foreground">
                                        {move || format!("Page {} of {}", page.get() + 1, total_pages.get())}
                                    </span>
                                    <button
                                        on:click=move |_| page.update(|p| *p = (*p + 1).min(total_pages.get_untracked() - 1))
                                        disabled=move || page.get() + 1 >= total_pages.get()
                                        class="px-3 py-1.5 btn btn-ghost text-sm disabled:opacity-50"
                                    >
                                        "Next →"
                                    </button>
                                </div>
                            </Show>
                        </Show>
                    </div>

                    // Detail panel
                    <div class="lg:col-span-1">
                        {move || match preview.get() {
                            Some(conv) => {
                                let continue_chat = continue_chat.clone();
                                let id = conv.id;
                                view! {
                                    <div class="sticky top-20 p-6 bg-card border border-border rounded-xl glow-effect">
                                        <div class="flex items-center gap-2 mb-4">
                                            <span class="text-xl">{conv.mode.icon()}</span>
                                            <h2 class="font-semibold text-foreground">{conv.title.clone()}</h2>
                                        </div>
                                        <p class="text-sm text-muted-foreground mb-4">{conv.preview.clone()}</p>
                                        <div class="p-3 bg-muted rounded-lg mb-4">
                                            <pre class="text-xs text-foreground whitespace-pre-wrap font-mono">
                                                {conv.snippet.clone()}
                                            </pre>
                                        </div>
                                        <dl class="space-y-2 text-sm mb-6">
                                            <div class="flex justify-between">
                                                <dt class="text-muted-foreground">"Mode"</dt>
                                                <dd class="text-foreground">{conv.mode.label()}</dd>
                                            </div>
                                            <div class="flex justify-between">
                                                <dt class="text-muted-foreground">"Messages"</dt>
                                                <dd class="text-foreground">{conv.message_count}</dd>
                                            </div>
                                            <div class="flex justify-between">
                                                <dt class="text-muted-foreground">"Started"</dt>
                                                <dd class="text-foreground">
                                                    {conv.created_at.format("%b %-d, %Y").to_string()}
                                                </dd>
                                            </div>
                                            <div class="flex justify-between">
                                                <dt class="text-muted-foreground">"Updated"</dt>
                                                <dd class="text-foreground">
                                                    {conv.updated_at.format("%b %-d, %Y").to_string()}
                                                </dd>
                                            </div>
                                        </dl>
                                        <button
                                            on:click=move |_| continue_chat(id)
                                            class="w-full py-2.5 btn btn-primary rounded-lg font-medium glow-effect"
                                        >
                                            "Continue Conversation"
                                        </button>
                                    </div>
                                }
                                .into_any()
                            }
                            None => view! {
                                <div class="sticky top-20 p-12 bg-card/50 border border-dashed border-border
                                            rounded-xl text-center">
                                    <p class="text-sm text-muted-foreground">
                                        "Select a conversation to see its details"
                                    </p>
                                </div>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
            </main>

            // Delete confirmation
            <Show when=move || confirm_delete.get()>
                <div class="fixed inset-0 z-50 flex items-center justify-center bg-background/80 backdrop-blur-sm">
                    <div class="w-full max-w-sm p-6 bg-card border border-border rounded-xl glow-effect">
                        <h2 class="font-semibold text-foreground mb-2">"Delete conversations?"</h2>
                        <p class="text-sm text-muted-foreground mb-6">
                            {move || format!(
                                "This will permanently remove {} conversation(s). This cannot be undone.",
                                selection.get().len()
                            )}
                        </p>
                        <div class="flex gap-3">
                            <button
                                on:click=move |_| confirm_delete.set(false)
                                class="flex-1 py-2 btn btn-ghost rounded-lg"
                            >
                                "Cancel"
                            </button>
                            <button
                                on:click=delete_selected
                                class="flex-1 py-2 btn btn-primary rounded-lg bg-destructive"
                            >
                                "Delete"
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
    use chrono::{Duration, Utc};

    fn sample() -> Vec<ConversationSummary> {
        mock::conversation_summaries()
    }

    #[test]
    fn text_query_matches_title_preview_and_tags() {
        let items = sample();
        let find = |query: &str| {
            filter_conversations(
                &items,
                &HistoryFilter {
                    query: query.to_string(),
                    ..Default::default()
                },
            )
        };

        assert!(find("pandas").iter().any(|c| c.id == 1));
        assert!(find("marine").iter().any(|c| c.id == 2));
        // Tag-only match
        assert!(find("best-practices").iter().any(|c| c.id == 4));
        assert!(find("PANDAS").iter().any(|c| c.id == 1));
        assert!(find("zebra").is_empty());
    }

    #[test]
    fn mode_filter_keeps_only_that_mode() {
        let items = sample();
        let coding = filter_conversations(
            &items,
            &HistoryFilter {
                mode: Some(ChatMode::Coding),
                ..Default::default()
            },
        );
        assert!(!coding.is_empty());
        assert!(coding.iter().all(|c| c.mode == ChatMode::Coding));
    }

    #[test]
    fn date_range_is_inclusive() {
        let items = sample();
        let two_days_ago = (Utc::now() - Duration::days(2)).date_naive();
        let filtered = filter_conversations(
            &items,
            &HistoryFilter {
                from: Some(two_days_ago),
                to: Some(two_days_ago),
                ..Default::default()
            },
        );
        assert!(filtered.iter().any(|c| c.id == 2));
        assert!(filtered.iter().all(|c| c.created_at.date_naive() == two_days_ago));
    }

    #[test]
    fn combined_filters_intersect() {
        let items = sample();
        let filtered = filter_conversations(
            &items,
            &HistoryFilter {
                query: "research".to_string(),
                mode: Some(ChatMode::Creative),
                ..Default::default()
            },
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn pagination_clamps_and_splits() {
        let items = sample();
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);

        // Six seed items fit on one page
        assert_eq!(page_items(&items, 0).len(), items.len());
        // Out-of-range page clamps to the last
        assert_eq!(page_items(&items, 99).len(), items.len());

        let mut many = Vec::new();
        for round in 0..3 {
            for mut conv in sample() {
                conv.id += round * 100;
                many.push(conv);
            }
        }
        assert_eq!(many.len(), 18);
        assert_eq!(page_count(many.len()), 2);
        assert_eq!(page_items(&many, 0).len(), PAGE_SIZE);
        assert_eq!(page_items(&many, 1).len(), 8);
    }

    #[test]
    fn empty_filter_reports_empty() {
        assert!(HistoryFilter::default().is_empty());
        assert!(!HistoryFilter {
            query: "x".to_string(),
            ..Default::default()
        }
        .is_empty());
    }
}
