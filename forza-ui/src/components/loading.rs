//! Loading Component
//!
//! Spinners and the chat typing indicator.

use leptos::*;

/// Centered loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Bouncing dots shown while the assistant is answering
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2 bg-gray-800 rounded-2xl px-4 py-3 w-fit">
            <div class="flex space-x-1">
                {(0..3).map(|i| view! {
                    <span
                        class="w-2 h-2 bg-violet-400 rounded-full animate-bounce"
                        style=format!("animation-delay: {}ms", i * 150)
                    />
                }).collect_view()}
            </div>
            <span class="text-xs text-gray-400">"Typing..."</span>
        </div>
    }
}
