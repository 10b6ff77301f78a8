//! DAO Card Component

use leptos::prelude::*;

use crate::actions::use_actions;
use crate::models::Dao;

#[component]
pub fn DaoCard(dao: Dao) -> impl IntoView {
    let actions = use_actions();

    let id = dao.id.clone();
    let is_holder = dao.user_holdings.is_some();
    let change = dao.governance_token.change_24h;
    let change_class = if change >= 0.0 {
        "token-change up"
    } else {
        "token-change down"
    };
    let change_label = if change >= 0.0 {
        format!("+{}%", change)
    } else {
        format!("{}%", change)
    };

    let join = {
        let actions = actions.clone();
        let id = id.clone();
        move |_| actions.join_dao(&id)
    };
    let trade = {
        let actions = actions.clone();
        let id = id.clone();
        move |_| actions.trade_for_tokens(&id)
    };

    view! {
        <div class="card dao-card">
            <div class="dao-header">
                <div class="dao-identity">
                    <img src=dao.logo.clone() alt=dao.name.clone() class="avatar" />
                    <div>
                        <h3 class="dao-name">{dao.name.clone()}</h3>
                        <span class="badge secondary">{dao.category.clone()}</span>
                    </div>
                </div>
                <div class="dao-token">
                    <p class="token-symbol">{dao.governance_token.symbol.clone()}</p>
                    <p class="token-price">{dao.governance_token.price.clone()}</p>
                    <p class=change_class>{change_label}</p>
                </div>
            </div>

            <p class="dao-description">{dao.description.clone()}</p>

            <div class="dao-stats">
                <div>
                    <span class="stat-label">"Members: "</span>
                    <span>{dao.members.to_string()}</span>
                </div>
                <div>
                    <span class="stat-label">"Proposals: "</span>
                    <span>{dao.active_proposals.to_string()}</span>
                </div>
                <div>
                    <span class="stat-label">"Supply: "</span>
                    <span>{dao.total_supply.clone()}</span>
                </div>
                <div>
                    <span class="stat-label">"Market Cap: "</span>
                    <span>{dao.market_cap.clone()}</span>
                </div>
            </div>

            {dao.user_holdings.clone().map(|holdings| view! {
                <div class="dao-holdings">
                    <h4>"Your Holdings"</h4>
                    <div class="holdings-grid">
                        <div>
                            <p class="stat-label">"Tokens"</p>
                            <p>{holdings.amount}</p>
                        </div>
                        <div>
                            <p class="stat-label">"Voting Power"</p>
                            <p>{holdings.voting_power}</p>
                        </div>
                        <div>
                            <p class="stat-label">"Value"</p>
                            <p>{holdings.value}</p>
                        </div>
                    </div>
                </div>
            })}

            <div class="dao-actions">
                {if is_holder {
                    view! {
                        <button class="btn outline" on:click=trade.clone()>"Vote"</button>
                        <button class="btn outline" on:click=trade.clone()>"View DAO"</button>
                    }.into_any()
                } else {
                    view! {
                        <button class="btn primary" on:click=join>"Join DAO"</button>
                        <button class="btn outline" on:click=trade.clone()>"Trade for Tokens"</button>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
