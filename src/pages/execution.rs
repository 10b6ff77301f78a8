//! Execution Page
//!
//! Monitor multi-party trade executions; selecting one opens the walkthrough
//! modal.

use leptos::prelude::*;

use crate::components::{StatCard, TradeExecutionModal};
use crate::filter::{self, FilterState};
use crate::models::{Execution, ExecutionStatus};
use crate::store::{use_app_store, AppStateStoreFields};

const TABS: [(ExecutionStatus, &str); 3] = [
    (ExecutionStatus::Executing, "Active"),
    (ExecutionStatus::Pending, "Pending"),
    (ExecutionStatus::Completed, "Completed"),
];

#[component]
pub fn ExecutionPage() -> impl IntoView {
    let store = use_app_store();

    let (search, set_search) = signal(String::new());
    let (tab, set_tab) = signal(ExecutionStatus::Executing);
    let (selected, set_selected) = signal::<Option<Execution>>(None);

    let filtered = Memo::new(move |_| {
        let filters = FilterState {
            search: search.get(),
            status: Some(tab.get().label().to_string()),
            ..Default::default()
        };
        filter::apply(&store.executions().get(), &filters)
    });

    let counts = Memo::new(move |_| {
        let executions = store.executions().get();
        let executing = executions
            .iter()
            .filter(|e| e.status == ExecutionStatus::Executing)
            .count();
        let pending = executions
            .iter()
            .filter(|e| e.status == ExecutionStatus::Pending)
            .count();
        (executing, pending)
    });

    view! {
        <div class="page execution-page">
            <div class="page-header">
                <h1>"Trade Execution"</h1>
                <p class="stat-label">
                    "Monitor and manage multi-party trade executions powered by Anoma protocol"
                </p>
            </div>

            <div class="stat-grid">
                <div class="card stat-card">
                    <p class="stat-label">"Active Trades"</p>
                    <p class="stat-value">{move || counts.get().0}</p>
                </div>
                <div class="card stat-card">
                    <p class="stat-label">"Pending Approval"</p>
                    <p class="stat-value">{move || counts.get().1}</p>
                </div>
                <StatCard label="Completed Today" value="12" />
                <StatCard label="Success Rate" value="98.5%" />
            </div>

            <input
                type="text"
                class="search-input"
                placeholder="Search by trade ID, participant, or asset..."
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />

            <div class="tab-bar">
                {TABS.iter().map(|&(status, label)| view! {
                    <button
                        class=move || if tab.get() == status { "tab active" } else { "tab" }
                        on:click=move |_| set_tab.set(status)
                    >
                        {label}
                    </button>
                }).collect_view()}
            </div>

            <Show
                when=move || !filtered.get().is_empty()
                fallback=move || view! {
                    <div class="empty-state">
                        <p>"No executions in this state"</p>
                    </div>
                }
            >
                <div class="card-list">
                    <For
                        each=move || filtered.get()
                        key=|exec| exec.id.clone()
                        children=move |exec| {
                            let open = exec.clone();
                            view! {
                                <div class="card execution-card">
                                    <div class="execution-header">
                                        <div>
                                            <h3 class="mono">{exec.trade_id.clone()}</h3>
                                            <p class="stat-label">{exec.kind.clone()}</p>
                                        </div>
                                        <span class=exec.status.badge_class()>{exec.status.label()}</span>
                                    </div>
                                    <div class="execution-meta">
                                        <span>{format!("{} parties", exec.parties.len())}</span>
                                        <span>
                                            {format!(
                                                "{}/{} approved",
                                                exec.approved_count(),
                                                exec.parties.len()
                                            )}
                                        </span>
                                        <span class="stat-label">
                                            {format!("Est. completion {}", exec.estimated_completion)}
                                        </span>
                                    </div>
                                    <div class="progress">
                                        <div
                                            class="progress-fill"
                                            style:width=format!("{:.0}%", exec.approval_pct())
                                        ></div>
                                    </div>
                                    <button
                                        class="btn outline small"
                                        on:click=move |_| set_selected.set(Some(open.clone()))
                                    >
                                        "View Details"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>

            <TradeExecutionModal execution=selected set_execution=set_selected />
        </div>
    }
}
