//! Code Explainer Page

use leptos::*;

use crate::api::{self, LanguageOption};
use crate::clipboard::copy_with_flash;
use crate::components::InlineLoading;
use crate::state::global::GlobalState;

const DEFAULT_LANGUAGE: &str = "javascript";

const REQUEST_FAILED: &str = "Sorry, there was an error analyzing your code. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Code,
    Explanation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyTarget {
    Code,
    Explanation,
}

/// Used until the server answers with its own list
fn builtin_languages() -> Vec<LanguageOption> {
    [
        ("javascript", "JavaScript"),
        ("typescript", "TypeScript"),
        ("python", "Python"),
        ("java", "Java"),
        ("csharp", "C#"),
        ("cpp", "C++"),
        ("php", "PHP"),
        ("ruby", "Ruby"),
        ("go", "Go"),
        ("rust", "Rust"),
        ("swift", "Swift"),
        ("kotlin", "Kotlin"),
        ("solidity", "Solidity"),
    ]
    .into_iter()
    .map(|(value, label)| LanguageOption {
        value: value.to_string(),
        label: label.to_string(),
    })
    .collect()
}

#[component]
pub fn CodeExplainerPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let languages = create_rw_signal(builtin_languages());
    let (language, set_language) = create_signal(DEFAULT_LANGUAGE.to_string());
    let (code, set_code) = create_signal(String::new());
    let (explanation, set_explanation) = create_signal(String::new());
    let (explaining, set_explaining) = create_signal(false);
    let (tab, set_tab) = create_signal(Tab::Code);
    let copied = create_rw_signal(None::<CopyTarget>);

    spawn_local(async move {
        match api::fetch_languages().await {
            Ok(list) if !list.is_empty() => languages.set(list),
            Ok(_) => {}
            Err(e) => web_sys::console::warn_1(&format!("Using built-in languages: {}", e).into()),
        }
    });

    let explain = move |_| {
        let source = code.get_untracked();
        if source.trim().is_empty() {
            state.show_error("Please paste some code to explain");
            return;
        }

        set_explaining.set(true);
        set_tab.set(Tab::Explanation);
        let lang = language.get_untracked();

        spawn_local(async move {
            let text = match api::explain_code(&source, &lang).await {
                Ok(text) => text,
                Err(e) => {
                    web_sys::console::error_1(&format!("Error explaining code: {}", e).into());
                    REQUEST_FAILED.to_string()
                }
            };
            set_explanation.set(text);
            set_explaining.set(false);
        });
    };

    let tab_class = move |target: Tab| {
        if tab.get() == target {
            "px-4 py-2 text-sm rounded-md bg-gray-700 text-white"
        } else {
            "px-4 py-2 text-sm rounded-md text-gray-400 hover:text-white"
        }
    };

    view! {
        <section class="container mx-auto px-4 py-16">
            <div class="max-w-3xl mx-auto text-center mb-10">
                <h2 class="text-3xl sm:text-4xl font-bold">"AI Code Explainer"</h2>
                <p class="mt-4 text-gray-400">
                    "Paste your code below and let our AI analyze it to provide a detailed explanation of its functionality, purpose, and structure."
                </p>
            </div>

            <div class="max-w-4xl mx-auto bg-gray-800 rounded-xl border border-gray-700 p-6">
                <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4 mb-6">
                    <div>
                        <h3 class="text-xl font-semibold">"Code Analysis"</h3>
                        <p class="text-sm text-gray-400">"Paste your code snippet and select a language"</p>
                    </div>
                    <select
                        class="bg-gray-900 border border-gray-700 rounded-md px-3 py-2 text-sm"
                        on:change=move |ev| set_language.set(event_target_value(&ev))
                        prop:value=move || language.get()
                    >
                        {move || languages.get().into_iter().map(|lang| view! {
                            <option value=lang.value.clone() selected=lang.value == language.get_untracked()>
                                {lang.label}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="flex gap-2 mb-4">
                    <button class=move || tab_class(Tab::Code) on:click=move |_| set_tab.set(Tab::Code)>
                        "Code"
                    </button>
                    <button
                        class=move || tab_class(Tab::Explanation)
                        on:click=move |_| set_tab.set(Tab::Explanation)
                        disabled=move || explanation.get().is_empty() && !explaining.get()
                    >
                        "Explanation"
                    </button>
                </div>

                {move || match tab.get() {
                    Tab::Code => view! {
                        <div class="relative">
                            <textarea
                                class="w-full min-h-[300px] font-mono text-sm bg-gray-900 rounded-lg p-4
                                       border border-gray-700 focus:border-violet-500 focus:outline-none"
                                placeholder="Paste your code here..."
                                prop:value=move || code.get()
                                on:input=move |ev| set_code.set(event_target_value(&ev))
                            />
                            <CopyButton
                                text=Signal::derive(move || code.get())
                                target=CopyTarget::Code
                                copied=copied
                            />
                        </div>
                    }.into_view(),
                    Tab::Explanation => view! {
                        <div class="relative min-h-[300px] bg-gray-900 rounded-lg p-4 border border-gray-700">
                            {move || if explaining.get() {
                                view! {
                                    <div class="flex flex-col items-center justify-center h-[260px] gap-3 text-gray-400">
                                        <InlineLoading />
                                        <span class="text-sm">"Analyzing your code..."</span>
                                    </div>
                                }.into_view()
                            } else {
                                view! {
                                    <p class="whitespace-pre-wrap text-sm">{explanation.get()}</p>
                                    <CopyButton
                                        text=Signal::derive(move || explanation.get())
                                        target=CopyTarget::Explanation
                                        copied=copied
                                    />
                                }.into_view()
                            }}
                        </div>
                    }.into_view(),
                }}

                <div class="flex justify-end mt-6">
                    <button
                        on:click=explain
                        disabled=move || explaining.get() || code.get().trim().is_empty()
                        class="px-6 py-3 bg-violet-600 hover:bg-violet-700 disabled:bg-gray-700
                               rounded-lg font-medium transition-colors flex items-center gap-2"
                    >
                        {move || if explaining.get() {
                            view! { <InlineLoading /> " Analyzing..." }.into_view()
                        } else {
                            "Explain Code".into_view()
                        }}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CopyButton(
    text: Signal<String>,
    target: CopyTarget,
    copied: RwSignal<Option<CopyTarget>>,
) -> impl IntoView {
    let is_copied = move || copied.get() == Some(target);

    view! {
        <button
            class="absolute top-3 right-3 text-xs px-2 py-1 rounded bg-gray-700 hover:bg-gray-600"
            disabled=move || text.get().is_empty()
            on:click=move |_| copy_with_flash(text.get_untracked(), target, copied)
        >
            {move || if is_copied() { "Copied" } else { "Copy" }}
        </button>
    }
}
