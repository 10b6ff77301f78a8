//! DAO Hub Page
//!
//! Discover DAOs, see memberships and vote on proposals.

use leptos::prelude::*;

use crate::components::{DaoCard, ProposalCard, StatCard};
use crate::filter::{self, FilterState};
use crate::mock;

const DAO_CATEGORIES: &[&str] = &["Art & Culture", "Gaming", "Music", "DeFi", "Social"];

#[component]
pub fn DaoHubPage() -> impl IntoView {
    let (filters, set_filters) = signal(FilterState::default());
    let (tab, set_tab) = signal("discover");

    let all_daos = mock::daos();
    let filtered = Memo::new(move |_| filter::apply(&all_daos, &filters.get()));

    let member_daos = mock::daos()
        .into_iter()
        .filter(|dao| dao.user_holdings.is_some())
        .collect::<Vec<_>>();

    view! {
        <div class="page dao-page">
            <div class="page-header">
                <h1>"DAO Governance Hub"</h1>
                <p class="stat-label">
                    "Discover DAOs, participate in governance, and trade for voting power in \
                     communities you care about"
                </p>
            </div>

            <div class="stat-grid">
                <StatCard label="Total DAOs" value="247" />
                <StatCard label="Active Proposals" value="89" />
                <StatCard label="Your DAOs" value="3" />
                <StatCard label="Total Value" value="$12.4K" />
            </div>

            <div class="tab-bar">
                {[
                    ("discover", "Discover DAOs"),
                    ("my-daos", "My DAOs"),
                    ("proposals", "Active Proposals"),
                    ("history", "Voting History"),
                ].iter().map(|&(token, label)| view! {
                    <button
                        class=move || if tab.get() == token { "tab active" } else { "tab" }
                        on:click=move |_| set_tab.set(token)
                    >
                        {label}
                    </button>
                }).collect_view()}
            </div>

            <Show when=move || tab.get() == "discover">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search DAOs by name, category, or description..."
                    prop:value=move || filters.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_filters.update(|f| f.search = value);
                    }
                />

                <div class="filter-chips">
                    <button
                        class=move || {
                            if filters.get().category.is_none() { "badge chip active" } else { "badge chip" }
                        }
                        on:click=move |_| set_filters.update(|f| f.category = None)
                    >
                        "All Categories"
                    </button>
                    {DAO_CATEGORIES.iter().map(|&category| view! {
                        <button
                            class=move || {
                                if filters.get().category.as_deref() == Some(category) {
                                    "badge chip active"
                                } else {
                                    "badge chip"
                                }
                            }
                            on:click=move |_| {
                                set_filters.update(|f| f.category = Some(category.to_string()));
                            }
                        >
                            {category}
                        </button>
                    }).collect_view()}
                </div>

                <div class="card-grid wide">
                    <For
                        each=move || filtered.get()
                        key=|dao| dao.id.clone()
                        children=move |dao| view! { <DaoCard dao=dao /> }
                    />
                </div>
            </Show>

            <Show when=move || tab.get() == "my-daos">
                <div class="section-header">
                    <h2>"Your DAO Memberships"</h2>
                </div>
                <div class="card-grid wide">
                    {member_daos.clone().into_iter().map(|dao| view! {
                        <DaoCard dao=dao />
                    }).collect_view()}
                </div>
            </Show>

            <Show when=move || tab.get() == "proposals">
                <div class="section-header">
                    <h2>"Active Proposals"</h2>
                </div>
                <div class="card-grid wide">
                    {mock::proposals().into_iter().map(|proposal| view! {
                        <ProposalCard proposal=proposal />
                    }).collect_view()}
                </div>
            </Show>

            <Show when=move || tab.get() == "history">
                <div class="empty-state">
                    <h3>"Voting History"</h3>
                    <p>"Your past votes and proposal outcomes will appear here"</p>
                </div>
            </Show>
        </div>
    }
}
