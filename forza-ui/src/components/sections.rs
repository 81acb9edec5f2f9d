//! Marketing Sections
//!
//! Hero, features, utilities and assistant blocks shared by the home page
//! and the standalone section pages.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Chat when logged in, the login page otherwise
fn chat_entry(state: &GlobalState) -> &'static str {
    if state.logged_in.get_untracked() {
        "/chat"
    } else {
        "/login"
    }
}

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "🧠",
        title: "AI-Powered Analysis",
        description: "Get instant token analysis with our advanced AI models trained on massive crypto datasets.",
    },
    Feature {
        icon: "💻",
        title: "Code Explanation",
        description: "Understand smart contracts and blockchain code with our AI Code Explainer.",
    },
    Feature {
        icon: "⚡",
        title: "Productivity Agent",
        description: "Your 24/7 personal assistant to help with research, content creation, and more.",
    },
    Feature {
        icon: "📈",
        title: "Real-time Market Data",
        description: "Track cryptocurrency prices, market caps, and trading volumes in real-time.",
    },
    Feature {
        icon: "🔒",
        title: "Secure Platform",
        description: "Built with security at its core to protect your data and investments.",
    },
    Feature {
        icon: "💰",
        title: "Staking Rewards",
        description: "Earn passive rewards by staking your $FORZA tokens.",
    },
];

struct Utility {
    title: &'static str,
    description: &'static str,
    points: [&'static str; 3],
    coming_soon: bool,
}

const UTILITIES: [Utility; 4] = [
    Utility {
        title: "AI Token Consultant",
        description: "Ask anything about a token and get an instant, data-driven answer.",
        points: ["Token fundamentals", "Market sentiment", "Risk assessment"],
        coming_soon: false,
    },
    Utility {
        title: "AI Productivity Agent",
        description: "An assistant that handles the busywork of your crypto journey.",
        points: ["Research summaries", "Portfolio notes", "Task automation"],
        coming_soon: false,
    },
    Utility {
        title: "AI Code Explainer",
        description: "Understand any snippet, from Solidity contracts to Rust programs.",
        points: ["13 languages", "Security notes", "Optimization tips"],
        coming_soon: false,
    },
    Utility {
        title: "Forza Staking",
        description: "Stake FORZA and share in the growth of the platform.",
        points: ["Flexible lockups", "Competitive rewards", "Governance rights"],
        coming_soon: true,
    },
];

#[component]
pub fn Hero() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();
    let learn_more = navigate.clone();
    let logged_in = state.logged_in;

    view! {
        <section class="py-24 text-center">
            <span class="inline-block px-4 py-1 mb-6 rounded-full bg-violet-500/10 text-violet-300 text-sm">
                "Now with advanced crypto insights"
            </span>
            <h1 class="text-5xl md:text-7xl font-extrabold mb-6">
                <span class="block bg-gradient-to-r from-violet-400 to-cyan-300 bg-clip-text text-transparent">
                    "Forza AI"
                </span>
                <span class="block mt-2">"Your AI-Powered Crypto Companion"</span>
            </h1>
            <p class="max-w-2xl mx-auto text-lg text-gray-400 mb-10">
                "Supercharge your journey through the blockchain universe with Forza AI. Make crypto investing, coding, and productivity easier, smarter, and faster for everyone."
            </p>
            <div class="flex justify-center gap-4">
                <button
                    on:click=move |_| navigate(chat_entry(&state), Default::default())
                    class="px-6 py-3 bg-violet-600 hover:bg-violet-700 rounded-lg font-medium transition-colors"
                >
                    {move || if logged_in.get() { "Open AI Chat" } else { "Get Started" }}
                </button>
                <button
                    on:click=move |_| learn_more("/features", Default::default())
                    class="px-6 py-3 border border-gray-700 hover:bg-gray-800 rounded-lg font-medium transition-colors"
                >
                    "Learn More"
                </button>
            </div>
        </section>
    }
}

/// Centered section heading
#[component]
pub fn SectionHeading(
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-3xl md:text-4xl font-bold mb-3">{title}</h2>
            <p class="text-gray-400 max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}

/// Link to a section's own page, shown on the home page only
#[component]
pub fn SectionCta(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mt-10">
            <A
                href=href
                class="inline-block px-6 py-3 border border-violet-500 text-violet-300 hover:bg-violet-500/10 rounded-lg font-medium transition-colors"
            >
                {label}
            </A>
        </div>
    }
}

#[component]
pub fn FeaturesSection(#[prop(default = false)] with_cta: bool) -> impl IntoView {
    view! {
        <section id="features" class="py-20">
            <SectionHeading
                title="Powerful AI Features for Crypto"
                subtitle="Forza AI combines the power of artificial intelligence with blockchain technology, creating a seamless experience for investors, developers, and creators."
            />
            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                {FEATURES.iter().map(|feature| view! {
                    <div class="bg-gray-900 border border-gray-800 rounded-xl p-6 hover:border-violet-500/50 transition-colors">
                        <div class="text-3xl mb-4">{feature.icon}</div>
                        <h3 class="text-lg font-semibold mb-2">{feature.title}</h3>
                        <p class="text-sm text-gray-400">{feature.description}</p>
                    </div>
                }).collect_view()}
            </div>
            {with_cta.then(|| view! { <SectionCta href="/features" label="Explore All Features" /> })}
        </section>
    }
}

#[component]
pub fn UtilitiesSection(#[prop(default = false)] with_cta: bool) -> impl IntoView {
    view! {
        <section id="utilities" class="py-20">
            <SectionHeading
                title="Forza Utilities"
                subtitle="AI tools built for crypto investors, builders and everyone in between."
            />
            <div class="grid gap-6 md:grid-cols-2">
                {UTILITIES.iter().map(|utility| view! {
                    <div class="relative bg-gray-900 border border-gray-800 rounded-xl p-6">
                        {utility.coming_soon.then(|| view! {
                            <span class="absolute top-4 right-4 px-2 py-1 text-xs rounded-full bg-amber-500/10 text-amber-300">
                                "Coming Soon"
                            </span>
                        })}
                        <h3 class="text-xl font-semibold mb-2">{utility.title}</h3>
                        <p class="text-sm text-gray-400 mb-4">{utility.description}</p>
                        <ul class="space-y-1 text-sm text-gray-300">
                            {utility.points.iter().map(|point| view! {
                                <li class="flex items-center gap-2">
                                    <span class="text-violet-400">"✓"</span>
                                    {*point}
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}
            </div>
            {with_cta.then(|| view! { <SectionCta href="/utilities" label="Discover More Utilities" /> })}
        </section>
    }
}

#[component]
pub fn AssistantSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    view! {
        <section id="assistant" class="py-20">
            <div class="bg-gradient-to-br from-violet-900/40 to-cyan-900/20 border border-gray-800 rounded-2xl p-10 text-center">
                <h2 class="text-3xl font-bold mb-3">"AI Assistant"</h2>
                <p class="text-gray-400 max-w-xl mx-auto mb-8">
                    "Ask about tokens, charts, DeFi or your portfolio. Try \"show me $BTC chart\" for an instant price card."
                </p>
                <button
                    on:click=move |_| navigate(chat_entry(&state), Default::default())
                    class="px-6 py-3 bg-violet-600 hover:bg-violet-700 rounded-lg font-medium transition-colors"
                >
                    "Chat with AI"
                </button>
            </div>
        </section>
    }
}
