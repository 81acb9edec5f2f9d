//! Chat Page
//!
//! Conversation with the assistant, suggestions sidebar and coin cards.

use leptos::*;

use crate::api;
use crate::clipboard::copy_with_flash;
use crate::components::{CoinCard, TypingIndicator};
use crate::state::chat::ChatMessage;
use crate::state::global::GlobalState;

/// Shown when the server itself cannot be reached
const OFFLINE_REPLY: &str =
    "Sorry, I'm having trouble connecting to my knowledge base. Please try again later.";

const RECENT_PREVIEW_CHARS: usize = 40;

#[component]
pub fn ChatPage() -> impl IntoView {
    let messages = create_rw_signal(vec![ChatMessage::welcome()]);
    let (input, set_input) = create_signal(String::new());
    let (typing, set_typing) = create_signal(false);
    let (sidebar_open, set_sidebar_open) = create_signal(true);
    let copied = create_rw_signal(None::<String>);
    let input_ref = create_node_ref::<html::Input>();
    let list_ref = create_node_ref::<html::Div>();

    // Keep the newest message in view
    create_effect(move |_| {
        messages.with(|list| list.len());
        typing.get();
        if let Some(list) = list_ref.get() {
            gloo_timers::callback::Timeout::new(10, move || {
                list.set_scroll_top(list.scroll_height());
            })
            .forget();
        }
    });

    let send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() || typing.get_untracked() {
            return;
        }

        let history = messages.get_untracked();
        messages.update(|list| list.push(ChatMessage::user(text.clone())));
        set_input.set(String::new());
        set_typing.set(true);

        spawn_local(async move {
            let reply = match api::send_chat(&text, &history).await {
                Ok(reply) => reply,
                Err(e) => {
                    web_sys::console::error_1(&format!("Chat request failed: {}", e).into());
                    ChatMessage::local_ai(OFFLINE_REPLY)
                }
            };
            messages.update(|list| list.push(reply));
            set_typing.set(false);
        });
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        send();
    };

    let on_suggestion = Callback::new(move |suggestion: String| {
        set_input.set(suggestion);
        if let Some(el) = input_ref.get_untracked() {
            let _ = el.focus();
        }
    });

    view! {
        <div class="flex h-[calc(100vh-4rem)] bg-gray-950">
            {move || sidebar_open.get().then(|| view! {
                <ChatSidebar messages=messages on_suggestion=on_suggestion />
            })}

            <div class="flex-1 flex flex-col">
                <div class="flex items-center justify-between px-4 py-3 border-b border-gray-800">
                    <button
                        class="text-sm text-gray-400 hover:text-white"
                        on:click=move |_| set_sidebar_open.update(|open| *open = !*open)
                    >
                        {move || if sidebar_open.get() { "Hide sidebar" } else { "Show sidebar" }}
                    </button>
                    <span class="text-sm font-medium">"Forza AI Assistant"</span>
                </div>

                <div node_ref=list_ref class="flex-1 overflow-y-auto p-4 space-y-5">
                    <For
                        each=move || messages.get()
                        key=|message| message.id.clone()
                        children=move |message| view! { <MessageBubble message=message copied=copied /> }
                    />
                    {move || typing.get().then(|| view! { <TypingIndicator /> })}
                </div>

                <form on:submit=on_submit class="flex gap-2 p-4 border-t border-gray-800">
                    <input
                        node_ref=input_ref
                        type="text"
                        placeholder="Type your message..."
                        prop:value=move || input.get()
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                        disabled=move || typing.get()
                        class="flex-1 bg-gray-900 rounded-lg px-4 py-3 border border-gray-700
                               focus:border-violet-500 focus:outline-none disabled:opacity-50"
                    />
                    <button
                        type="submit"
                        disabled=move || typing.get() || input.get().trim().is_empty()
                        class="px-5 py-3 bg-violet-600 hover:bg-violet-700 disabled:bg-gray-700
                               rounded-lg font-medium transition-colors"
                    >
                        "Send"
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn ChatSidebar(
    messages: RwSignal<Vec<ChatMessage>>,
    on_suggestion: Callback<String>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let suggestions = create_rw_signal(Vec::<String>::new());

    spawn_local(async move {
        match api::fetch_suggestions().await {
            Ok(list) => suggestions.set(list),
            Err(e) => state.show_error(&format!("Failed to load suggestions: {}", e)),
        }
    });

    view! {
        <aside class="hidden lg:block w-64 min-w-64 overflow-y-auto p-5 border-r border-gray-800 bg-gray-900/50">
            <div class="mb-6">
                <h3 class="font-medium text-sm mb-3">"About Forza AI Chat"</h3>
                <p class="text-sm text-gray-400">
                    "Get real-time insights about cryptocurrency markets, trading strategies, and blockchain technology from our AI assistant."
                </p>
            </div>

            <div class="mb-6">
                <h3 class="font-medium text-sm mb-3">"Recent Activity"</h3>
                <div class="space-y-2">
                    {move || {
                        let list = messages.get();
                        let start = list.len().saturating_sub(3);
                        list[start..].iter().map(|message| {
                            let who = if message.is_user() { "👤 " } else { "🤖 " };
                            view! {
                                <div class="text-xs text-gray-400 truncate">
                                    {who}{preview(&message.content)}
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
            </div>

            <div>
                <h3 class="font-medium text-sm mb-3">"Suggested Questions"</h3>
                <div class="space-y-2">
                    {move || suggestions.get().into_iter().map(|suggestion| {
                        let text = suggestion.clone();
                        view! {
                            <button
                                class="w-full text-left p-2 text-xs rounded-md hover:bg-gray-800 transition-colors"
                                on:click=move |_| on_suggestion.call(text.clone())
                            >
                                {suggestion}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </aside>
    }
}

#[component]
fn MessageBubble(
    message: ChatMessage,
    copied: RwSignal<Option<String>>,
) -> impl IntoView {
    let is_user = message.is_user();
    let row_class = if is_user { "flex justify-end" } else { "flex justify-start" };
    let bubble_class = if is_user {
        "bg-violet-600 text-white rounded-2xl rounded-br-sm px-4 py-3"
    } else {
        "bg-gray-800 text-gray-100 rounded-2xl rounded-bl-sm px-4 py-3"
    };

    let id = message.id.clone();
    let content = message.content.clone();
    let is_copied = {
        let id = id.clone();
        move || copied.get().as_deref() == Some(id.as_str())
    };
    let is_copied_label = is_copied.clone();

    view! {
        <div class=row_class>
            <div class="group max-w-[80%]">
                <div class=bubble_class>
                    <p class="whitespace-pre-wrap text-sm">{message.content.clone()}</p>
                    {message.coin.clone().map(|coin| view! { <CoinCard coin=coin /> })}
                </div>
                <div class="flex items-center gap-3 mt-1 text-xs text-gray-500">
                    <span>{message.time_label()}</span>
                    <button
                        class=move || if is_copied() { "text-violet-400" } else { "hover:text-gray-300" }
                        on:click=move |_| copy_with_flash(content.clone(), id.clone(), copied)
                    >
                        {move || if is_copied_label() { "Copied" } else { "Copy" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// First few characters of a message for the activity list
fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(RECENT_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates() {
        assert_eq!(preview("short"), "short");
        let long = "a".repeat(45);
        assert_eq!(preview(&long), format!("{}...", "a".repeat(40)));
        assert_eq!(preview(&"b".repeat(40)), "b".repeat(40));
    }
}
