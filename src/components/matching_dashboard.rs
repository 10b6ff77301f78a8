//! Matching Dashboard Component
//!
//! Live view over the match list: stat tiles, refresh simulation, score /
//! confidence / type filters and the analytics tab. The background poll is a
//! scheduled task cancelled on unmount.

use leptos::prelude::*;

use crate::components::MatchCard;
use crate::models::{Confidence, TradeKind, TradeMatch};
use crate::schedule::use_scheduler;
use crate::store::{use_app_store, AppStateStoreFields};

fn eth_amount(display: &str) -> f64 {
    display
        .split_whitespace()
        .next()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0.0)
}

#[component]
pub fn MatchingDashboard() -> impl IntoView {
    let store = use_app_store();
    let scheduler = use_scheduler();

    let (is_searching, set_is_searching) = signal(false);
    let (min_score, set_min_score) = signal(70u8);
    let (confidence, set_confidence) = signal::<Option<Confidence>>(None);
    let (kind, set_kind) = signal::<Option<TradeKind>>(None);
    let (sort_by, set_sort_by) = signal("score".to_string());
    let (tab, set_tab) = signal("matches");

    // Simulated real-time matching; only logs, never mutates visible state.
    let poll = scheduler.every(
        10_000,
        Box::new(|| {
            if js_sys::Math::random() > 0.7 {
                web_sys::console::log_1(&"[MATCHING] New match found!".into());
            }
        }),
    );
    on_cleanup(move || poll.cancel());

    let filtered = Memo::new(move |_| {
        let mut matches: Vec<TradeMatch> = store
            .matches()
            .get()
            .into_iter()
            .filter(|m| {
                m.score >= min_score.get()
                    && confidence.get().map_or(true, |c| m.confidence == c)
                    && kind.get().map_or(true, |k| m.kind == k)
            })
            .collect();
        match sort_by.get().as_str() {
            "value" => matches.sort_by(|a, b| {
                eth_amount(&b.value.theirs)
                    .partial_cmp(&eth_amount(&a.value.theirs))
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            "timeline" => matches.sort_by(|a, b| a.timeline.cmp(&b.timeline)),
            _ => matches.sort_by(|a, b| b.score.cmp(&a.score)),
        }
        matches
    });

    let stats = Memo::new(move |_| {
        let matches = store.matches().get();
        let total = matches.len();
        let high = matches
            .iter()
            .filter(|m| m.confidence == Confidence::High)
            .count();
        let avg = if total == 0 {
            0
        } else {
            (matches.iter().map(|m| m.score as u32).sum::<u32>() as f64 / total as f64).round()
                as u32
        };
        (total, high, avg)
    });

    let refresh = {
        let scheduler = scheduler.clone();
        move |_| {
            if is_searching.get() {
                return;
            }
            set_is_searching.set(true);
            scheduler.after(2000, Box::new(move || set_is_searching.set(false)));
        }
    };

    let clear_filters = move |_| {
        set_min_score.set(0);
        set_confidence.set(None);
        set_kind.set(None);
    };

    view! {
        <div class="matching-dashboard">
            <div class="stat-grid">
                <div class="card stat-card">
                    <p class="stat-label">"Total Matches"</p>
                    <p class="stat-value">{move || stats.get().0}</p>
                    <p class="stat-hint">"+2 in last hour"</p>
                </div>
                <div class="card stat-card">
                    <p class="stat-label">"High Confidence"</p>
                    <p class="stat-value">{move || stats.get().1}</p>
                    <p class="stat-hint">"Ready to execute"</p>
                </div>
                <div class="card stat-card">
                    <p class="stat-label">"Avg Score"</p>
                    <p class="stat-value">{move || format!("{}%", stats.get().2)}</p>
                    <p class="stat-hint">"Match quality"</p>
                </div>
                <div class="card stat-card">
                    <p class="stat-label">"Active Scanning"</p>
                    <p class="stat-value">"Live"</p>
                    <p class="stat-hint">"Real-time matching"</p>
                </div>
            </div>

            <div class="dashboard-controls">
                <div class="controls-left">
                    <button class="btn outline" on:click=refresh prop:disabled=move || is_searching.get()>
                        {move || if is_searching.get() { "Searching..." } else { "Refresh Matches" }}
                    </button>
                    <span class="badge secondary">"Live Matching Active"</span>
                </div>
                <select
                    class="filter-select"
                    prop:value=move || sort_by.get()
                    on:change=move |ev| set_sort_by.set(event_target_value(&ev))
                >
                    <option value="score">"Match Score"</option>
                    <option value="value">"Estimated Value"</option>
                    <option value="timeline">"Timeline"</option>
                </select>
            </div>

            <div class="tab-bar">
                <button
                    class=move || if tab.get() == "matches" { "tab active" } else { "tab" }
                    on:click=move |_| set_tab.set("matches")
                >
                    {move || format!("All Matches ({})", filtered.get().len())}
                </button>
                <button
                    class=move || if tab.get() == "filters" { "tab active" } else { "tab" }
                    on:click=move |_| set_tab.set("filters")
                >
                    "Filters"
                </button>
                <button
                    class=move || if tab.get() == "analytics" { "tab active" } else { "tab" }
                    on:click=move |_| set_tab.set("analytics")
                >
                    "Analytics"
                </button>
            </div>

            <Show when=move || tab.get() == "matches">
                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=move || view! {
                        <div class="empty-state">
                            <p>"No matches found with current filters"</p>
                            <button class="btn outline" on:click=clear_filters>"Clear Filters"</button>
                        </div>
                    }
                >
                    <div class="card-list">
                        <For
                            each=move || filtered.get()
                            key=|m| m.id.clone()
                            children=move |m| view! { <MatchCard trade_match=m /> }
                        />
                    </div>
                </Show>
            </Show>

            <Show when=move || tab.get() == "filters">
                <div class="card filter-panel">
                    <h3>"Matching Preferences"</h3>
                    <p class="stat-label">"Customize how matches are found and ranked for your intents"</p>

                    <label class="filter-label">
                        {move || format!("Minimum Match Score: {}%", min_score.get())}
                    </label>
                    <input
                        type="range"
                        min="0"
                        max="100"
                        step="5"
                        prop:value=move || min_score.get().to_string()
                        on:input=move |ev| {
                            if let Ok(score) = event_target_value(&ev).parse::<u8>() {
                                set_min_score.set(score.min(100));
                            }
                        }
                    />

                    <div class="filter-row">
                        <div>
                            <label class="filter-label">"Confidence Level"</label>
                            <select
                                class="filter-select"
                                on:change=move |ev| {
                                    set_confidence.set(match event_target_value(&ev).as_str() {
                                        "High" => Some(Confidence::High),
                                        "Medium" => Some(Confidence::Medium),
                                        "Low" => Some(Confidence::Low),
                                        _ => None,
                                    });
                                }
                            >
                                <option value="All">"All Confidence Levels"</option>
                                <option value="High">"High Confidence Only"</option>
                                <option value="Medium">"Medium Confidence"</option>
                                <option value="Low">"Low Confidence"</option>
                            </select>
                        </div>
                        <div>
                            <label class="filter-label">"Trade Type"</label>
                            <select
                                class="filter-select"
                                on:change=move |ev| {
                                    set_kind.set(match event_target_value(&ev).as_str() {
                                        "Direct" => Some(TradeKind::Direct),
                                        "Multi-Party" => Some(TradeKind::MultiParty),
                                        "Chain" => Some(TradeKind::Chain),
                                        _ => None,
                                    });
                                }
                            >
                                <option value="All">"All Trade Types"</option>
                                <option value="Direct">"Direct Trades Only"</option>
                                <option value="Multi-Party">"Multi-Party Trades"</option>
                                <option value="Chain">"Chain Trades"</option>
                            </select>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || tab.get() == "analytics">
                <div class="analytics-grid">
                    <div class="card">
                        <h3>"Matching Performance"</h3>
                        <div class="progress-meta"><span>"Success Rate"</span><span>"87%"</span></div>
                        <div class="progress"><div class="progress-fill" style:width="87%"></div></div>
                        <div class="progress-meta"><span>"Avg Match Time"</span><span>"4.2 hours"</span></div>
                        <div class="progress"><div class="progress-fill" style:width="65%"></div></div>
                        <div class="progress-meta"><span>"Value Accuracy"</span><span>"92%"</span></div>
                        <div class="progress"><div class="progress-fill" style:width="92%"></div></div>
                    </div>
                    <div class="card">
                        <h3>"Match Distribution"</h3>
                        <div class="progress-meta"><span>"Direct Trades"</span><span>"45%"</span></div>
                        <div class="progress-meta"><span>"Multi-Party"</span><span>"35%"</span></div>
                        <div class="progress-meta"><span>"Chain Trades"</span><span>"20%"</span></div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
