//! Intent Market Frontend App
//!
//! Top-level component: provides the store, the action handler, the
//! scheduler and navigation context, then renders the current page.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions::{Actions, ConsoleActions};
use crate::components::{AuthForm, MainNav};
use crate::context::{AppContext, Page};
use crate::pages::{
    DaoHubPage, DashboardPage, ExecutionPage, HomePage, IntentCreatePage, IntentsPage,
    MarketplacePage, MatchingPage,
};
use crate::schedule::{BrowserScheduler, SharedScheduler};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Home);

    // Provide context to all children
    provide_context(Store::new(AppState::seeded()));
    provide_context(AppContext::new((page, set_page)));
    provide_context::<Actions>(Arc::new(ConsoleActions));
    provide_context::<SharedScheduler>(Arc::new(BrowserScheduler));

    view! {
        <div class="app-layout">
            <MainNav />
            <main class="main-content">
                {move || match page.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Marketplace => view! { <MarketplacePage /> }.into_any(),
                    Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                    Page::Intents => view! { <IntentsPage /> }.into_any(),
                    Page::IntentCreate => view! { <IntentCreatePage /> }.into_any(),
                    Page::Matching => view! { <MatchingPage /> }.into_any(),
                    Page::Execution => view! { <ExecutionPage /> }.into_any(),
                    Page::DaoHub => view! { <DaoHubPage /> }.into_any(),
                    Page::SignIn => view! { <AuthForm /> }.into_any(),
                }}
            </main>
        </div>
    }
}
