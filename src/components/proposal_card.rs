//! Proposal Card Component
//!
//! Governance proposal with tally bars, quorum line and vote buttons.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::actions::use_actions;
use crate::models::{Proposal, ProposalStatus, VoteChoice};

/// Whole hours until `end_time`, clamped at zero.
fn hours_left(end_time: &str) -> i64 {
    let end = js_sys::Date::new(&JsValue::from_str(end_time)).get_time();
    let now = js_sys::Date::now();
    let left = ((end - now) / 3_600_000.0).floor() as i64;
    left.max(0)
}

#[component]
pub fn ProposalCard(proposal: Proposal) -> impl IntoView {
    let actions = use_actions();

    let id = proposal.id.clone();
    let tally = proposal.tally;
    let cast = tally.cast();
    let quorum_reached = proposal.quorum_reached();
    let can_vote = proposal.status == ProposalStatus::Active && proposal.user_vote.is_none();
    let hours = hours_left(&proposal.end_time);

    let vote = move |choice: VoteChoice| {
        let actions = actions.clone();
        let id = id.clone();
        move |_| actions.vote(&id, choice)
    };

    view! {
        <div class="card proposal-card">
            <div class="proposal-header">
                <div class="dao-identity">
                    <img src=proposal.dao_logo.clone() alt=proposal.dao_name.clone() class="avatar small" />
                    <div>
                        <h3 class="proposal-title">{proposal.title.clone()}</h3>
                        <p class="stat-label">{proposal.dao_name.clone()}</p>
                    </div>
                </div>
                <span class=proposal.status.badge_class()>{proposal.status.label()}</span>
            </div>

            <p class="proposal-description">{proposal.description.clone()}</p>

            <div class="proposal-proposer">
                <img src=proposal.proposer_avatar.clone() alt=proposal.proposer_name.clone() class="avatar small" />
                <span>{format!("Proposed by {}", proposal.proposer_name)}</span>
            </div>

            <div class="proposal-tally">
                <div class="progress-meta">
                    <span class="stat-label">"Votes"</span>
                    <span>{format!("{} / {} votes", cast, proposal.quorum)}</span>
                </div>
                <div class="tally-row">
                    <span>"For"</span>
                    <div class="progress">
                        <div class="progress-fill for" style:width=format!("{:.1}%", tally.for_pct())></div>
                    </div>
                    <span>{format!("{:.1}%", tally.for_pct())}</span>
                </div>
                <div class="tally-row">
                    <span>"Against"</span>
                    <div class="progress">
                        <div class="progress-fill against" style:width=format!("{:.1}%", tally.against_pct())></div>
                    </div>
                    <span>{format!("{:.1}%", tally.against_pct())}</span>
                </div>
                <div class="proposal-meta">
                    <span>{format!("Quorum: {}", if quorum_reached { "Reached" } else { "Not reached" })}</span>
                    <span>{if hours > 0 { format!("{}h left", hours) } else { "Voting ended".to_string() }}</span>
                </div>
            </div>

            {proposal.user_vote.map(|choice| view! {
                <div class="proposal-user-vote">
                    <span>{format!("You voted {}", choice.label())}</span>
                    {proposal.user_voting_power.clone().map(|power| view! {
                        <span class="stat-label">{format!(" with {}", power)}</span>
                    })}
                </div>
            })}

            <Show when=move || can_vote>
                <div class="proposal-actions">
                    <button class="btn primary small" on:click=vote(VoteChoice::For)>"Vote For"</button>
                    <button class="btn outline small danger" on:click=vote(VoteChoice::Against)>"Vote Against"</button>
                    <button class="btn outline small" on:click=vote(VoteChoice::Abstain)>"Abstain"</button>
                </div>
            </Show>
        </div>
    }
}
