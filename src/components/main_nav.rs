//! Main Navigation Component
//!
//! Header bar with the page tabs and the two call-to-action buttons.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

#[component]
pub fn MainNav() -> impl IntoView {
    let ctx = use_app_context();
    let current = ctx.page;

    view! {
        <header class="main-nav">
            <button class="brand" on:click=move |_| ctx.navigate(Page::Home)>
                <img src="/wizard-logo.jpg" alt="Anoma Dynamic NFT Logo" class="brand-logo" />
                <span class="brand-title">"Anoma Dynamic NFT"</span>
            </button>

            <nav class="nav-links">
                {Page::NAV.iter().map(|&page| {
                    let is_active = move || current.get() == page;
                    view! {
                        <button
                            class=move || if is_active() { "nav-link active" } else { "nav-link" }
                            on:click=move |_| ctx.navigate(page)
                        >
                            {page.title()}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <div class="nav-actions">
                <button class="btn outline" on:click=move |_| ctx.navigate(Page::IntentCreate)>
                    "Create Intent"
                </button>
                <button class="btn primary" on:click=move |_| ctx.navigate(Page::SignIn)>
                    "Sign In"
                </button>
            </div>
        </header>
    }
}
