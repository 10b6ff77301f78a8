//! Home Page
//!
//! Landing page: hero, feature grid and the headline stats.

use leptos::prelude::*;

use crate::components::StatCard;
use crate::context::{use_app_context, Page};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="page home-page">
            <section class="hero">
                <h1>"Trade NFTs with Intents, Not Order Books"</h1>
                <p class="hero-tagline">
                    "Declare what you want to trade and let the matching engine find direct, \
                     multi-party and chain trades across collections, categories and DAOs."
                </p>
                <div class="hero-actions">
                    <button class="btn primary" on:click=move |_| ctx.navigate(Page::Marketplace)>
                        "Browse Marketplace"
                    </button>
                    <button class="btn outline" on:click=move |_| ctx.navigate(Page::IntentCreate)>
                        "Create Intent"
                    </button>
                </div>
            </section>

            <section class="stat-grid">
                <StatCard label="Total NFTs" value="24.5K" />
                <StatCard label="Active Traders" value="8.2K" />
                <StatCard label="Active Intents" value="156" />
                <StatCard label="DAOs" value="247" />
            </section>

            <section class="feature-grid">
                <div class="card feature">
                    <h3>"Intent-Based Trading"</h3>
                    <p class="stat-label">
                        "Express trades in your own words or with structured criteria; no bids, \
                         no listings, no order management."
                    </p>
                </div>
                <div class="card feature">
                    <h3>"Multi-Party Matching"</h3>
                    <p class="stat-label">
                        "The engine composes direct, multi-party and chain trades so every side \
                         gets what they asked for."
                    </p>
                </div>
                <div class="card feature">
                    <h3>"DAO Governance"</h3>
                    <p class="stat-label">
                        "Trade into governance tokens and vote on the communities you join."
                    </p>
                </div>
            </section>
        </div>
    }
}
