//! Dashboard Page
//!
//! The user's collection plus portfolio stats; trading from here jumps
//! straight into intent creation.

use leptos::prelude::*;

use crate::components::{NftCard, StatCard};
use crate::context::{use_app_context, Page};
use crate::mock;
use crate::models::IntentStatus;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let owned = mock::owned_nfts();
    let owned_count = owned.len();
    let active_intents = Memo::new(move |_| {
        store
            .intents()
            .get()
            .into_iter()
            .filter(|intent| intent.status == IntentStatus::Active)
            .count()
    });

    let on_trade = Callback::new(move |nft_id: String| {
        web_sys::console::log_1(&format!("[DASHBOARD] Creating trade intent with NFT: {}", nft_id).into());
        ctx.navigate(Page::IntentCreate);
    });

    view! {
        <div class="page dashboard-page">
            <div class="page-header">
                <h1>"My Dashboard"</h1>
                <p class="stat-label">"Manage your NFT collection and trading intents"</p>
            </div>

            <div class="stat-grid">
                <StatCard label="Owned NFTs" value=owned_count.to_string() />
                <StatCard label="Portfolio Value" value="12.8 ETH" hint="+2.3% this week" />
                <div class="card stat-card">
                    <p class="stat-label">"Active Intents"</p>
                    <p class="stat-value">{move || active_intents.get()}</p>
                </div>
                <StatCard label="DAO Memberships" value="3" />
            </div>

            <div class="section-header">
                <h2>"My Collection"</h2>
                <div>
                    <button class="btn outline small" on:click=move |_| ctx.navigate(Page::IntentCreate)>
                        "Create Intent"
                    </button>
                    <button class="btn primary small" on:click=move |_| ctx.navigate(Page::Marketplace)>
                        "Browse Market"
                    </button>
                </div>
            </div>

            <div class="card-grid">
                {owned.into_iter().map(|nft| view! {
                    <NftCard nft=nft on_trade=on_trade />
                }).collect_view()}
            </div>
        </div>
    }
}
