//! Login Page
//!
//! Email-only sign in. Any address containing `@` is accepted.

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::*;

use crate::components::InlineLoading;
use crate::state::auth;
use crate::state::global::GlobalState;

/// Delay before an invalid address is reported
const INVALID_DELAY_MS: u32 = 800;
/// Delay before a valid address is accepted
const ACCEPT_DELAY_MS: u32 = 1500;
/// Time the success panel stays up before redirecting
const REDIRECT_DELAY_MS: u32 = 1500;

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let query = use_query_map();
    let navigate = use_navigate();

    let redirect = move || {
        query.with_untracked(|params| auth::sanitize_redirect(params.get("redirect").map(String::as_str)))
    };

    // Already logged in: skip the form
    if state.logged_in.get_untracked() {
        let navigate = navigate.clone();
        let target = redirect();
        request_animation_frame(move || {
            navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            )
        });
    }

    let (email, set_email) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (success, set_success) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        set_error.set(None);
        set_submitting.set(true);

        if !auth::is_valid_email(&email.get_untracked()) {
            Timeout::new(INVALID_DELAY_MS, move || {
                set_error.set(Some("Please enter a valid email address".to_string()));
                set_submitting.set(false);
            })
            .forget();
            return;
        }

        let state = state.clone();
        let navigate = navigate.clone();
        let target = redirect();
        Timeout::new(ACCEPT_DELAY_MS, move || {
            set_submitting.set(false);
            set_success.set(true);
            auth::log_in(&state);
            state.show_success("Login Successful!");

            Timeout::new(REDIRECT_DELAY_MS, move || navigate(&target, Default::default())).forget();
        })
        .forget();
    };

    view! {
        <div class="min-h-[70vh] flex items-center justify-center px-4 py-16">
            <div class="w-full max-w-md">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold">"Welcome back"</h1>
                    <p class="mt-2 text-sm text-gray-400">"Enter your email to continue your crypto journey"</p>
                </div>

                <div class="bg-gray-800 rounded-xl border border-gray-700 p-6">
                    {move || if success.get() {
                        view! {
                            <div class="text-center py-8">
                                <div class="inline-flex items-center justify-center w-20 h-20 rounded-full bg-violet-600/20 mb-6 text-4xl">
                                    "✓"
                                </div>
                                <h3 class="text-2xl font-medium mb-2">"Login Successful!"</h3>
                                <p class="text-gray-400">"Redirecting you to the AI chat assistant..."</p>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            {move || error.get().map(|message| view! {
                                <div class="p-3 mb-4 text-sm rounded-lg border border-red-500/20 bg-red-500/10 text-red-400">
                                    {message}
                                </div>
                            })}

                            <form on:submit=on_submit.clone() class="space-y-5">
                                <div class="space-y-2">
                                    <label for="email" class="text-sm font-medium">"Email address"</label>
                                    <input
                                        id="email"
                                        type="email"
                                        autocomplete="email"
                                        placeholder="you@example.com"
                                        required=true
                                        prop:value=move || email.get()
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                        class="w-full bg-gray-900 rounded-lg px-3 py-2 border border-gray-700
                                               focus:border-violet-500 focus:outline-none"
                                    />
                                </div>

                                <button
                                    type="submit"
                                    disabled=move || submitting.get()
                                    class="w-full h-11 bg-violet-600 hover:bg-violet-700 disabled:bg-gray-700
                                           rounded-lg font-medium transition-colors flex items-center justify-center gap-2"
                                >
                                    {move || if submitting.get() {
                                        view! { <InlineLoading /> " Signing in..." }.into_view()
                                    } else {
                                        "Continue with Email".into_view()
                                    }}
                                </button>
                            </form>
                        }.into_view()
                    }}
                </div>
            </div>
        </div>
    }
}
