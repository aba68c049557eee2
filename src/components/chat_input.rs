//! Chat input component

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlTextAreaElement;

/// Chat input with auto-resize textarea. Enter submits, Shift+Enter inserts
/// a newline.
#[component]
pub fn ChatInput(
    /// Current input value
    value: RwSignal<String>,
    /// Called when the user submits
    on_submit: impl Fn() + Clone + 'static,
    /// Whether input is disabled (assistant "typing")
    #[prop(into)] disabled: Signal<bool>,
    /// Placeholder text
    #[prop(default = "Ask Agnis anything...")] placeholder: &'static str,
) -> impl IntoView {
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    let resize_textarea = move || {
        if let Some(textarea) = textarea_ref.get() {
            let el: &HtmlTextAreaElement = textarea.as_ref();
            let new_height = el.scroll_height().min(200);
            let _ = el.set_attribute(
                "style",
                &format!("height: {}px; max-height: 200px;", new_height),
            );
        }
    };

    let on_input = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            if let Ok(textarea) = target.dyn_into::<HtmlTextAreaElement>() {
                value.set(textarea.value());
                resize_textarea();
            }
        }
    };

    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                if !value.get().trim().is_empty() && !disabled.get_untracked() {
                    on_submit();
                }
            }
        }
    };

    let on_button_click = {
        let on_submit = on_submit.clone();
        move |_| {
            if !value.get().trim().is_empty() && !disabled.get_untracked() {
                on_submit();
            }
        }
    };

    let is_empty = Signal::derive(move || value.get().trim().is_empty());

    view! {
        <div class="flex items-end gap-3 p-4 bg-card/50 backdrop-blur-sm border-t border-border">
            <div class="flex-1 relative">
                <textarea
                    node_ref=textarea_ref
                    prop:value=move || value.get()
                    on:input=on_input
                    on:keydown=on_keydown
                    placeholder=placeholder
                    disabled=move || disabled.get()
                    rows="1"
                    class="w-full px-4 py-3 bg-input border border-border rounded-xl resize-none
                           text-foreground placeholder-muted-foreground
                           focus:outline-none focus:ring-2 focus:ring-primary focus:border-transparent
                           disabled:opacity-50 disabled:cursor-not-allowed"
                    style="max-height: 200px;"
                ></textarea>
            </div>

            <button
                on:click=on_button_click
                disabled=move || disabled.get() || is_empty.get()
                class="p-3 btn btn-primary rounded-xl glow-effect
                       disabled:bg-muted disabled:cursor-not-allowed"
            >
                "➤"
            </button>
        </div>
    }
}
