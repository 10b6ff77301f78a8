//! Marketplace Page
//!
//! Browsable NFT grid behind the filter/sort pipeline.

use leptos::prelude::*;

use crate::components::{CollectionFilters, NftCard, StatCard};
use crate::filter::{self, FilterState};
use crate::mock;

#[component]
pub fn MarketplacePage() -> impl IntoView {
    let (filters, set_filters) = signal(FilterState::default());
    let (tab, set_tab) = signal("all");

    let all_nfts = mock::marketplace_nfts();
    let total = all_nfts.len();
    let filtered = Memo::new(move |_| filter::apply(&all_nfts, &filters.get()));

    view! {
        <div class="page marketplace-page">
            <div class="page-header">
                <h1>"NFT Marketplace"</h1>
                <p class="stat-label">
                    "Discover, collect, and trade NFTs with intelligent intent matching"
                </p>
            </div>

            <div class="stat-grid">
                <StatCard label="Total NFTs" value="24.5K" />
                <StatCard label="Active Traders" value="8.2K" />
                <StatCard label="Active Intents" value="156" />
            </div>

            <div class="tab-bar">
                {[
                    ("all", "All NFTs"),
                    ("trending", "Trending"),
                    ("new", "New Drops"),
                    ("intents", "Intent Matches"),
                ].iter().map(|&(token, label)| view! {
                    <button
                        class=move || if tab.get() == token { "tab active" } else { "tab" }
                        on:click=move |_| set_tab.set(token)
                    >
                        {label}
                    </button>
                }).collect_view()}
            </div>

            <Show when=move || tab.get() == "all">
                <CollectionFilters filters=filters set_filters=set_filters />

                <div class="result-meta">
                    <p class="stat-label">
                        {move || format!("Showing {} of {} NFTs", filtered.get().len(), total)}
                    </p>
                    <div>
                        <span class="badge outline">"Live Matching"</span>
                        <span class="badge secondary">"Intent-Based"</span>
                    </div>
                </div>

                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=move || view! {
                        <div class="empty-state">
                            <p>"No NFTs match your current filters"</p>
                            <button
                                class="btn outline"
                                on:click=move |_| set_filters.set(FilterState::default())
                            >
                                "Clear Filters"
                            </button>
                        </div>
                    }
                >
                    <div class="card-grid">
                        <For
                            each=move || filtered.get()
                            key=|nft| nft.id.clone()
                            children=move |nft| view! { <NftCard nft=nft /> }
                        />
                    </div>
                </Show>
            </Show>

            <Show when=move || tab.get() == "trending">
                <div class="empty-state"><p>"Trending NFTs will appear here"</p></div>
            </Show>
            <Show when=move || tab.get() == "new">
                <div class="empty-state"><p>"New drops will appear here"</p></div>
            </Show>
            <Show when=move || tab.get() == "intents">
                <div class="empty-state"><p>"Intent matches will appear here"</p></div>
            </Show>
        </div>
    }
}
