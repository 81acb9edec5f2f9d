//! Single-section pages
//!
//! Each one shows the full version of a home page section.

use leptos::*;
use leptos_router::*;

use crate::components::{FeaturesSection, MarketSection, UtilitiesSection};

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <div class="pt-8">
            <FeaturesSection />
        </div>
    }
}

#[component]
pub fn UtilitiesPage() -> impl IntoView {
    view! {
        <div class="pt-8">
            <UtilitiesSection />
        </div>
    }
}

#[component]
pub fn MarketDataPage() -> impl IntoView {
    view! {
        <div class="pt-8">
            <MarketSection />
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-violet-600 hover:bg-violet-700 rounded-lg font-medium transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}
