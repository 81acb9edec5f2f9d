//! App Root Component
//!
//! Routing, page chrome and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Footer, Header, Toast};
use crate::pages::{
    ChatPage, CodeExplainerPage, FeaturesPage, HomePage, LoginPage, MarketDataPage, NotFound,
    UtilitiesPage,
};
use crate::state::auth::RequireLogin;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-950 text-white flex flex-col font-sans antialiased">
                <Header />

                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=HomePage />
                        <Route path="/features" view=FeaturesPage />
                        <Route path="/utilities" view=UtilitiesPage />
                        <Route path="/market-data" view=MarketDataPage />
                        <Route path="/login" view=LoginPage />
                        <Route path="/chat" view=ProtectedChat />
                        <Route path="/code-explainer" view=ProtectedCodeExplainer />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
                <Toast />
            </div>
        </Router>
    }
}

#[component]
fn ProtectedChat() -> impl IntoView {
    view! { <RequireLogin><ChatPage /></RequireLogin> }
}

#[component]
fn ProtectedCodeExplainer() -> impl IntoView {
    view! { <RequireLogin><CodeExplainerPage /></RequireLogin> }
}
