//! Trade Execution Modal Component
//!
//! Multi-party trade walkthrough: approval progress, the three execution
//! steps, per-party legs and the gated execute button.

use leptos::prelude::*;

use crate::actions::use_actions;
use crate::models::{Execution, ExecutionStatus};

const STEPS: [&str; 3] = ["Party Confirmations", "Asset Validation", "Anoma Settlement"];

fn step_for(status: ExecutionStatus) -> usize {
    match status {
        ExecutionStatus::Pending => 1,
        ExecutionStatus::Executing | ExecutionStatus::Failed => 2,
        ExecutionStatus::Completed => 3,
    }
}

#[component]
pub fn TradeExecutionModal(
    execution: ReadSignal<Option<Execution>>,
    set_execution: WriteSignal<Option<Execution>>,
) -> impl IntoView {
    let actions = use_actions();

    view! {
        {move || execution.get().map(|exec| {
                let actions = actions.clone();
                let trade_id = exec.trade_id.clone();
                let approved = exec.approved_count();
                let total = exec.parties.len();
                let progress = exec.approval_pct();
                let current_step = step_for(exec.status);
                let can_execute = exec.status == ExecutionStatus::Pending && exec.fully_approved();

                let execute = move |_| actions.execute_trade(&trade_id);

                view! {
                    <div class="modal-backdrop" on:click=move |_| set_execution.set(None)></div>
                    <div class="modal execution-modal">
                        <div class="modal-header">
                            <h2>"Multi-Party Trade Execution"</h2>
                            <button class="btn ghost small" on:click=move |_| set_execution.set(None)>"×"</button>
                        </div>

                        <div class="card">
                            <h3>"Trade Overview"</h3>
                            <div class="overview-grid">
                                <div>
                                    <p class="stat-label">"Trade ID"</p>
                                    <p class="mono">{exec.trade_id.clone()}</p>
                                </div>
                                <div>
                                    <p class="stat-label">"Parties Involved"</p>
                                    <p>{format!("{} participants", total)}</p>
                                </div>
                            </div>
                            <div class="progress-meta">
                                <span class="stat-label">"Approval Progress"</span>
                                <span>{format!("{}/{} approved", approved, total)}</span>
                            </div>
                            <div class="progress">
                                <div class="progress-fill" style:width=format!("{:.0}%", progress)></div>
                            </div>
                        </div>

                        <div class="card">
                            <h3>"Execution Steps"</h3>
                            <div class="steps">
                                {STEPS.iter().enumerate().map(|(i, step)| {
                                    let done = current_step >= i + 1;
                                    view! {
                                        <div class=if done { "step done" } else { "step" }>
                                            <span class="step-number">{(i + 1).to_string()}</span>
                                            <span>{*step}</span>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </div>

                        <div class="party-list">
                            <h3>"Trade Participants"</h3>
                            {exec.parties.iter().enumerate().map(|(i, party)| view! {
                                <div class="card party-card">
                                    <div class="party-header">
                                        <div class="dao-identity">
                                            <img src=party.avatar.clone() alt=party.name.clone() class="avatar" />
                                            <div>
                                                <p class="participant-name">{party.name.clone()}</p>
                                                <p class="stat-label">{format!("Party {}", i + 1)}</p>
                                            </div>
                                        </div>
                                        <span class=party.status.badge_class()>{party.status.label()}</span>
                                    </div>
                                    <div class="legs-grid">
                                        <div>
                                            <h4 class="stat-label">"Offering"</h4>
                                            {party.offering.iter().map(|asset| view! {
                                                <div class="asset-row offering">
                                                    <img src=asset.image.clone() alt=asset.name.clone() class="asset-thumb" />
                                                    <div>
                                                        <p>{asset.name.clone()}</p>
                                                        <p class="stat-label">{asset.value.clone()}</p>
                                                    </div>
                                                </div>
                                            }).collect_view()}
                                        </div>
                                        <div>
                                            <h4 class="stat-label">"Receiving"</h4>
                                            {party.receiving.iter().map(|asset| view! {
                                                <div class="asset-row receiving">
                                                    <img src=asset.image.clone() alt=asset.name.clone() class="asset-thumb" />
                                                    <div>
                                                        <p>{asset.name.clone()}</p>
                                                        <p class="stat-label">{asset.value.clone()}</p>
                                                    </div>
                                                </div>
                                            }).collect_view()}
                                        </div>
                                    </div>
                                    {party.approved_at.clone().map(|at| view! {
                                        <p class="stat-label">{format!("Approved on {}", at)}</p>
                                    })}
                                </div>
                            }).collect_view()}
                        </div>

                        <div class="card security-note">
                            <h4>"Anoma Protocol Security"</h4>
                            <p>
                                "This multi-party trade is secured by Anoma's intent-centric \
                                 architecture. All assets are validated and the trade will only \
                                 execute when all parties have confirmed."
                            </p>
                        </div>

                        <div class="modal-footer">
                            <button class="btn outline" on:click=move |_| set_execution.set(None)>"Close"</button>
                            {match exec.status {
                                ExecutionStatus::Pending if can_execute => view! {
                                    <button class="btn primary" on:click=execute>"Execute Trade"</button>
                                }.into_any(),
                                ExecutionStatus::Executing => view! {
                                    <button class="btn primary" disabled=true>"Executing..."</button>
                                }.into_any(),
                                ExecutionStatus::Completed => view! {
                                    <button class="btn outline success" disabled=true>"Completed"</button>
                                }.into_any(),
                                _ => view! { <span></span> }.into_any(),
                            }}
                        </div>
                    </div>
                }
            })}
    }
}
