//! Matching Page
//!
//! Header around the live matching dashboard.

use leptos::prelude::*;

use crate::components::MatchingDashboard;

#[component]
pub fn MatchingPage() -> impl IntoView {
    view! {
        <div class="page matching-page">
            <div class="page-header">
                <h1>"Matching Engine"</h1>
                <p class="stat-label">
                    "Watch the engine pair your intents with counterparties in real time"
                </p>
            </div>
            <MatchingDashboard />
        </div>
    }
}
