//! Intent Card Component
//!
//! One trading intent with match progress and its action buttons, all
//! dispatched through the injected handler.

use leptos::prelude::*;

use crate::actions::{use_actions, IntentAction};
use crate::models::{Intent, IntentStatus};

#[component]
pub fn IntentCard(intent: Intent) -> impl IntoView {
    let actions = use_actions();
    let (expanded, set_expanded) = signal(false);

    let id = intent.id.clone();
    let is_active = intent.status == IntentStatus::Active;
    let has_matches = intent.matches > 0;
    let progress = intent.progress.min(100);

    let toggle = {
        let actions = actions.clone();
        let id = id.clone();
        move |_| actions.intent_action(&id, IntentAction::Toggle)
    };
    let edit = {
        let actions = actions.clone();
        let id = id.clone();
        move |_| actions.intent_action(&id, IntentAction::Edit)
    };
    let delete = {
        let actions = actions.clone();
        let id = id.clone();
        move |_| actions.intent_action(&id, IntentAction::Delete)
    };
    let execute = {
        let actions = actions.clone();
        let id = id.clone();
        move |_| actions.intent_action(&id, IntentAction::Execute)
    };

    view! {
        <div class="card intent-card">
            <div class="intent-header">
                <div>
                    <h3 class="intent-title">{intent.title.clone()}</h3>
                    <p class="intent-description">{intent.description.clone()}</p>
                </div>
                <div class="intent-badges">
                    <span class=intent.status.badge_class()>{intent.status.label()}</span>
                    <span class="badge outline">{intent.category.clone()}</span>
                </div>
            </div>

            <div class="intent-progress">
                <div class="progress-meta">
                    <span class="stat-label">"Match Progress"</span>
                    <span>{format!("{} of {} matches found", intent.matches, intent.total_matches)}</span>
                </div>
                <div class="progress">
                    <div class="progress-fill" style:width=format!("{}%", progress)></div>
                </div>
            </div>

            <div class="intent-meta">
                <span>{intent.created_at.clone()}</span>
                <span>{format!("{} priority", intent.priority.label())}</span>
            </div>

            <div class="intent-actions">
                <div class="intent-actions-left">
                    <button class="btn outline small" on:click=toggle>
                        {if is_active { "Pause" } else { "Resume" }}
                    </button>
                    <button class="btn outline small" on:click=edit>"Edit"</button>
                    <button class="btn outline small danger" on:click=delete>"Delete"</button>
                </div>
                <Show when=move || has_matches>
                    <button class="btn primary small" on:click=execute.clone()>
                        "Execute Trade"
                    </button>
                </Show>
            </div>

            <Show when=move || expanded.get()>
                <div class="intent-details">
                    <h4>"Matching Criteria"</h4>
                    <div class="criteria-grid">
                        <div><span class="stat-label">"Offering: "</span>"Gaming NFTs"</div>
                        <div><span class="stat-label">"Seeking: "</span>"Art NFTs"</div>
                        <div><span class="stat-label">"Rarity: "</span>"Similar"</div>
                        <div><span class="stat-label">"Value: "</span>"Comparable"</div>
                    </div>
                </div>
            </Show>

            <button
                class="btn ghost small wide"
                on:click=move |_| set_expanded.update(|expanded| *expanded = !*expanded)
            >
                {move || if expanded.get() { "Show Less" } else { "Show Details" }}
            </button>
        </div>
    }
}
