//! Match Card Component
//!
//! One match found by the engine: participants, value estimate and the
//! trade hooks.

use leptos::prelude::*;

use crate::actions::use_actions;
use crate::models::TradeMatch;

#[component]
pub fn MatchCard(trade_match: TradeMatch) -> impl IntoView {
    let actions = use_actions();
    let (expanded, set_expanded) = signal(false);

    let id = trade_match.id.clone();
    let participant_count = trade_match.participants.len();
    let score_class = trade_match.score_class();

    let view_details = {
        let actions = actions.clone();
        let id = id.clone();
        move |_| actions.view_match(&id)
    };
    let initiate = {
        let actions = actions.clone();
        let id = id.clone();
        move |_| actions.initiate_trade(&id)
    };

    view! {
        <div class="card match-card">
            <div class="match-header">
                <div>
                    <h3 class="match-title">
                        {format!("{} Trade Match", trade_match.kind.label())}
                        <span class=trade_match.confidence.badge_class()>
                            {format!("{} Confidence", trade_match.confidence.label())}
                        </span>
                    </h3>
                    <p class="stat-label">
                        {format!(
                            "{} participant{} • {} complexity",
                            participant_count,
                            if participant_count > 1 { "s" } else { "" },
                            trade_match.complexity.label()
                        )}
                    </p>
                </div>
                <div class="match-score">
                    <span class=score_class>{format!("{}%", trade_match.score)}</span>
                    <p class="stat-label">"Match Score"</p>
                </div>
            </div>

            <div class="match-participants">
                <h4>"Trade Participants"</h4>
                {trade_match.participants.iter().map(|participant| view! {
                    <div class="participant-row">
                        <img src=participant.avatar.clone() alt=participant.name.clone() class="avatar small" />
                        <div class="participant-info">
                            <span class="participant-name">
                                {participant.name.clone()}
                                <span class="badge outline">{format!("{}% rep", participant.reputation)}</span>
                            </span>
                            <span class="stat-label">
                                {format!("Offers: {} → Wants: {}", participant.offering, participant.seeking)}
                            </span>
                        </div>
                    </div>
                }).collect_view()}
            </div>

            <div class="match-value">
                <h4>"Estimated Value"</h4>
                <div class="value-grid">
                    <div>
                        <p class="stat-label">"Your Side"</p>
                        <p>{trade_match.value.ours.clone()}</p>
                    </div>
                    <div>
                        <p class="stat-label">"Their Side"</p>
                        <p>{trade_match.value.theirs.clone()}</p>
                    </div>
                    <div>
                        <p class="stat-label">"Difference"</p>
                        <p>{format!("{}%", trade_match.value.difference)}</p>
                    </div>
                </div>
            </div>

            <Show when=move || expanded.get()>
                <div class="match-requirements">
                    <h4>"Requirements"</h4>
                    <div class="filter-chips">
                        {trade_match.requirements.iter().map(|req| view! {
                            <span class="badge secondary">{req.clone()}</span>
                        }).collect_view()}
                    </div>
                    <p class="stat-label">{format!("Timeline: {}", trade_match.timeline)}</p>
                </div>
            </Show>

            <div class="match-actions">
                <button
                    class="btn ghost small"
                    on:click=move |_| set_expanded.update(|expanded| *expanded = !*expanded)
                >
                    {move || if expanded.get() { "Hide Details" } else { "Show Details" }}
                </button>
                <div>
                    <button class="btn outline small" on:click=view_details>"View Details"</button>
                    <button class="btn primary small" on:click=initiate>"Initiate Trade"</button>
                </div>
            </div>
        </div>
    }
}
