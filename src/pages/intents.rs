//! Intents Page
//!
//! The user's trading intents, filtered through the pipeline and grouped by
//! status tabs.

use leptos::prelude::*;

use crate::components::IntentCard;
use crate::context::{use_app_context, Page};
use crate::filter::{self, FilterState};
use crate::models::{Intent, IntentStatus};
use crate::store::{use_app_store, AppStateStoreFields};

const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("all", "All Status"),
    ("active", "Active"),
    ("paused", "Paused"),
    ("completed", "Completed"),
    ("expired", "Expired"),
];

const CATEGORY_OPTIONS: &[&str] = &["Cross-Category", "Governance", "Upgrade", "Collection"];

const TABS: [(Option<IntentStatus>, &str); 4] = [
    (None, "All"),
    (Some(IntentStatus::Active), "Active"),
    (Some(IntentStatus::Paused), "Paused"),
    (Some(IntentStatus::Completed), "Completed"),
];

#[component]
pub fn IntentsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (filters, set_filters) = signal(FilterState::default());
    let (tab, set_tab) = signal::<Option<IntentStatus>>(None);

    let filtered = Memo::new(move |_| filter::apply(&store.intents().get(), &filters.get()));
    let visible = Memo::new(move |_| {
        let filtered = filtered.get();
        match tab.get() {
            None => filtered,
            Some(status) => filtered
                .into_iter()
                .filter(|intent| intent.status == status)
                .collect::<Vec<Intent>>(),
        }
    });
    let status_count = move |status: Option<IntentStatus>| {
        let intents = store.intents().get();
        match status {
            None => intents.len(),
            Some(status) => intents.iter().filter(|i| i.status == status).count(),
        }
    };

    view! {
        <div class="page intents-page">
            <div class="page-header">
                <h1>"My Trading Intents"</h1>
                <p class="stat-label">
                    "Manage your active trading intents and track matching progress"
                </p>
            </div>

            <div class="filter-row">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search intents..."
                    prop:value=move || filters.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_filters.update(|f| f.search = value);
                    }
                />
                <select
                    class="filter-select"
                    prop:value=move || filters.get().status.unwrap_or_else(|| "all".to_string())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_filters.update(|f| {
                            f.status = if value == "all" { None } else { Some(value) };
                        });
                    }
                >
                    {STATUS_OPTIONS.iter().map(|(token, label)| view! {
                        <option value=*token>{*label}</option>
                    }).collect_view()}
                </select>
                <select
                    class="filter-select"
                    prop:value=move || filters.get().category.unwrap_or_else(|| "all".to_string())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_filters.update(|f| {
                            f.category = if value == "all" { None } else { Some(value) };
                        });
                    }
                >
                    <option value="all">"All Categories"</option>
                    {CATEGORY_OPTIONS.iter().map(|category| view! {
                        <option value=*category>{*category}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="tab-bar">
                {TABS.iter().map(|&(status, label)| view! {
                    <button
                        class=move || if tab.get() == status { "tab active" } else { "tab" }
                        on:click=move |_| set_tab.set(status)
                    >
                        {move || format!("{} ({})", label, status_count(status))}
                    </button>
                }).collect_view()}
            </div>

            <Show
                when=move || !visible.get().is_empty()
                fallback=move || view! {
                    <div class="empty-state">
                        <p>"No intents match your current filters"</p>
                        <button class="btn primary" on:click=move |_| ctx.navigate(Page::IntentCreate)>
                            "Create Your First Intent"
                        </button>
                    </div>
                }
            >
                <div class="card-list">
                    <For
                        each=move || visible.get()
                        key=|intent| intent.id.clone()
                        children=move |intent| view! { <IntentCard intent=intent /> }
                    />
                </div>
            </Show>

            <div class="card quick-actions">
                <h3>"Quick Actions"</h3>
                <div>
                    <button class="btn outline small" on:click=move |_| ctx.navigate(Page::IntentCreate)>
                        "New Intent"
                    </button>
                    <button class="btn outline small" on:click=move |_| ctx.navigate(Page::IntentCreate)>
                        "Browse Templates"
                    </button>
                    <button class="btn outline small" on:click=move |_| ctx.navigate(Page::Matching)>
                        "View Matches"
                    </button>
                </div>
            </div>
        </div>
    }
}
