//! Home Page

use leptos::*;

use crate::components::{AssistantSection, FeaturesSection, Hero, MarketSection, UtilitiesSection};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <FeaturesSection with_cta=true />
        <UtilitiesSection with_cta=true />
        <MarketSection with_cta=true />
        <AssistantSection />
    }
}
