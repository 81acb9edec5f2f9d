//! Footer Component

use leptos::*;
use leptos_router::*;

const X_URL: &str = "https://x.com/forzaaisol";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-800 bg-gray-950 py-10 px-4">
            <div class="container mx-auto grid gap-8 md:grid-cols-3 text-sm">
                <div>
                    <div class="text-lg font-bold text-white mb-2">"Forza AI"</div>
                    <p class="text-gray-400">
                        "Your AI companion for crypto investing, coding and productivity."
                    </p>
                </div>

                <div>
                    <div class="font-semibold text-white mb-2">"Socials"</div>
                    <a href=X_URL target="_blank" rel="noopener noreferrer" class="text-gray-400 hover:text-white">
                        "X (Twitter)"
                    </a>
                </div>

                <div>
                    <div class="font-semibold text-white mb-2">"Resources"</div>
                    <A href="/features" class="block text-gray-400 hover:text-white">"Documentation"</A>
                </div>
            </div>

            <div class="container mx-auto mt-8 text-xs text-gray-500">
                {format!("© {} Forza AI. All rights reserved.", chrono::Utc::now().format("%Y"))}
            </div>
        </footer>
    }
}
