//! Header Component
//!
//! Logo, section links and the login controls.

use leptos::*;
use leptos_router::*;

use crate::state::auth;
use crate::state::global::GlobalState;

const NAV_LINKS: [(&str, &str); 5] = [
    ("/features", "Features"),
    ("/utilities", "Utilities"),
    ("/market-data", "Market Data"),
    ("/chat", "AI Assistant"),
    ("/code-explainer", "Code Explainer"),
];

/// Site header
#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        <header class="sticky top-0 z-40 bg-gray-950/80 backdrop-blur border-b border-gray-800">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-2">
                        <span class="w-8 h-8 rounded-lg bg-gradient-to-br from-violet-500 to-cyan-400 flex items-center justify-center font-bold">
                            "F"
                        </span>
                        <span class="text-xl font-bold text-white">"Forza AI"</span>
                    </A>

                    <nav class="hidden md:flex items-center space-x-1">
                        {NAV_LINKS.into_iter().map(|(href, label)| view! {
                            <NavLink href=href label=label />
                        }).collect_view()}
                    </nav>

                    <div class="hidden md:flex items-center">
                        <AuthControls />
                    </div>

                    <button
                        class="md:hidden p-2 rounded-lg text-gray-300 hover:bg-gray-800"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>

                {move || menu_open.get().then(|| view! {
                    <div class="md:hidden pb-4 space-y-1" on:click=move |_| set_menu_open.set(false)>
                        {NAV_LINKS.into_iter().map(|(href, label)| view! {
                            <NavLink href=href label=label />
                        }).collect_view()}
                        <div class="pt-3">
                            <AuthControls />
                        </div>
                    </div>
                })}
            </div>
        </header>
    }
}

#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="block px-3 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-800 transition-colors"
            active_class="text-white bg-gray-800"
        >
            {label}
        </A>
    }
}

/// Chat shortcut and log out when logged in, the email form otherwise
#[component]
fn AuthControls() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let logged_in = state.logged_in;

    move || {
        if logged_in.get() {
            view! { <LoggedInControls /> }.into_view()
        } else {
            view! { <EmailForm /> }.into_view()
        }
    }
}

#[component]
fn LoggedInControls() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let location = use_location();
    let navigate = use_navigate();

    let on_chat = location.pathname;
    let go_chat = navigate.clone();
    let log_out = move |_| {
        auth::log_out(&state);
        navigate("/", Default::default());
    };

    view! {
        <div class="flex items-center space-x-2">
            {move || (on_chat.get() != "/chat").then(|| {
                let go_chat = go_chat.clone();
                view! {
                    <button
                        on:click=move |_| go_chat("/chat", Default::default())
                        class="px-4 py-2 bg-violet-600 hover:bg-violet-700 rounded-lg text-sm font-medium transition-colors"
                    >
                        "Open AI Chat"
                    </button>
                }
            })}
            <button
                on:click=log_out
                class="px-4 py-2 border border-gray-700 hover:bg-gray-800 rounded-lg text-sm font-medium transition-colors"
            >
                "Log out"
            </button>
        </div>
    }
}

#[component]
fn EmailForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();
    let (email, set_email) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        if !auth::is_valid_email(&email.get()) {
            state.show_error("Please enter a valid email address");
            return;
        }

        auth::log_in(&state);
        set_email.set(String::new());
        navigate("/chat", Default::default());
    };

    view! {
        <form on:submit=on_submit class="flex items-center space-x-2">
            <input
                type="email"
                placeholder="Enter your email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
                class="w-48 bg-gray-900 rounded-lg px-3 py-2 text-sm border border-gray-700
                       focus:border-violet-500 focus:outline-none"
            />
            <button
                type="submit"
                class="px-4 py-2 bg-violet-600 hover:bg-violet-700 rounded-lg text-sm font-medium transition-colors"
            >
                "Get Started"
            </button>
        </form>
    }
}
