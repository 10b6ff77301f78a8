//! Intent Builder Component
//!
//! Three ways to express a trading intent: free text, a structured form and
//! canned templates. Produces a fresh `Intent` record through the `on_create`
//! callback; matching it is somebody else's problem.

use leptos::prelude::*;

use crate::mock;
use crate::models::{Category, Intent, IntentStatus, Priority, Rarity};

pub const CONDITIONS: &[&str] = &[
    "Similar Value",
    "Similar Rarity",
    "Same Collection",
    "Cross-Category",
    "Bulk Trade",
];

fn priority_from_token(token: &str) -> Priority {
    match token {
        "speed" => Priority::Speed,
        "value" => Priority::Value,
        "rarity" => Priority::Rarity,
        _ => Priority::Balanced,
    }
}

fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

#[component]
pub fn IntentBuilder(#[prop(into)] on_create: Callback<Intent>) -> impl IntoView {
    let (tab, set_tab) = signal("natural");
    let (natural_intent, set_natural_intent) = signal(String::new());
    let (selected_template, set_selected_template) = signal::<Option<&'static str>>(None);

    let (offering_category, set_offering_category) = signal(String::new());
    let (offering_rarity, set_offering_rarity) = signal(String::new());
    let (offering_qty, set_offering_qty) = signal(1u32);
    let (seeking_category, set_seeking_category) = signal(String::new());
    let (seeking_rarity, set_seeking_rarity) = signal(String::new());
    let (seeking_qty, set_seeking_qty) = signal(1u32);
    let (conditions, set_conditions) = signal(Vec::<String>::new());
    let (priority, set_priority) = signal("balanced".to_string());

    // Canned hints swap in once the text looks parseable.
    let suggestions = Memo::new(move |_| {
        if natural_intent.get().len() > 20 {
            mock::PARSE_HINTS.to_vec()
        } else {
            mock::AI_SUGGESTIONS.to_vec()
        }
    });

    let select_template = move |template_id: &'static str| {
        if let Some(template) = mock::INTENT_TEMPLATES.iter().find(|t| t.id == template_id) {
            set_selected_template.set(Some(template_id));
            set_natural_intent.set(template.template.to_string());
        }
    };

    let create = move |_| {
        let id = format!("{}", js_sys::Date::now() as u64);
        let structured = tab.get() == "structured";

        let (title, description, category) = if structured {
            let offering = offering_category.get();
            let seeking = seeking_category.get();
            let title = if offering.is_empty() || seeking.is_empty() {
                "Structured Intent".to_string()
            } else {
                format!("{} NFTs → {} NFTs", offering, seeking)
            };
            let description = format!(
                "Trade {}x {} {} for {}x {} {}",
                offering_qty.get(),
                if offering_rarity.get().is_empty() { "any".to_string() } else { offering_rarity.get() },
                if offering.is_empty() { "NFTs".to_string() } else { offering },
                seeking_qty.get(),
                if seeking_rarity.get().is_empty() { "any".to_string() } else { seeking_rarity.get() },
                if seeking.is_empty() { "NFTs".to_string() } else { seeking },
            );
            let category = if offering_category.get() != seeking_category.get() {
                "Cross-Category".to_string()
            } else {
                "Collection".to_string()
            };
            (title, description, category)
        } else {
            let title = selected_template
                .get()
                .and_then(|id| mock::INTENT_TEMPLATES.iter().find(|t| t.id == id))
                .map(|t| t.title.to_string())
                .unwrap_or_else(|| "Custom Intent".to_string());
            (title, natural_intent.get(), "Cross-Category".to_string())
        };

        on_create.run(Intent {
            id,
            title,
            description,
            status: IntentStatus::Active,
            progress: 0,
            matches: 0,
            total_matches: 0,
            created_at: now_iso(),
            priority: priority_from_token(&priority.get()),
            category,
        });
    };

    let category_select = move |value: ReadSignal<String>, set_value: WriteSignal<String>| {
        view! {
            <select
                class="filter-select"
                prop:value=move || value.get()
                on:change=move |ev| set_value.set(event_target_value(&ev))
            >
                <option value="">"Select category"</option>
                {Category::ALL.iter().map(|c| view! {
                    <option value=c.label()>{c.label()}</option>
                }).collect_view()}
            </select>
        }
    };
    let rarity_select = move |value: ReadSignal<String>, set_value: WriteSignal<String>| {
        view! {
            <select
                class="filter-select"
                prop:value=move || value.get()
                on:change=move |ev| set_value.set(event_target_value(&ev))
            >
                <option value="">"Select rarity"</option>
                {Rarity::ALL.iter().map(|r| view! {
                    <option value=r.label()>{r.label()}</option>
                }).collect_view()}
            </select>
        }
    };

    view! {
        <div class="intent-builder">
            <div class="builder-header">
                <h2>"Express Your Trading Intent"</h2>
                <p class="stat-label">
                    "Describe what you want to trade and our AI will find the perfect matches"
                </p>
            </div>

            <div class="tab-bar">
                <button
                    class=move || if tab.get() == "natural" { "tab active" } else { "tab" }
                    on:click=move |_| set_tab.set("natural")
                >
                    "Natural Language"
                </button>
                <button
                    class=move || if tab.get() == "structured" { "tab active" } else { "tab" }
                    on:click=move |_| set_tab.set("structured")
                >
                    "Structured Form"
                </button>
                <button
                    class=move || if tab.get() == "templates" { "tab active" } else { "tab" }
                    on:click=move |_| set_tab.set("templates")
                >
                    "Templates"
                </button>
            </div>

            <Show when=move || tab.get() == "natural">
                <div class="card">
                    <h3>"Describe Your Intent"</h3>
                    <textarea
                        class="intent-textarea"
                        placeholder="Example: I want to trade my gaming NFTs for art NFTs of similar rarity, or exchange my collection for tokens that give me voting power in DAOs I care about..."
                        prop:value=move || natural_intent.get()
                        on:input=move |ev| set_natural_intent.set(event_target_value(&ev))
                    ></textarea>

                    <label class="filter-label">"AI Suggestions"</label>
                    <div class="suggestion-list">
                        <For
                            each=move || suggestions.get()
                            key=|suggestion| suggestion.to_string()
                            children=move |suggestion: &'static str| view! {
                                <button
                                    class="suggestion"
                                    on:click=move |_| set_natural_intent.set(suggestion.to_string())
                                >
                                    {suggestion}
                                </button>
                            }
                        />
                    </div>
                </div>
            </Show>

            <Show when=move || tab.get() == "structured">
                <div class="builder-grid">
                    <div class="card">
                        <h3>"What You're Offering"</h3>
                        <label class="filter-label">"Category"</label>
                        {category_select(offering_category, set_offering_category)}
                        <label class="filter-label">"Rarity"</label>
                        {rarity_select(offering_rarity, set_offering_rarity)}
                        <label class="filter-label">
                            {move || format!("Quantity: {}", offering_qty.get())}
                        </label>
                        <input
                            type="range"
                            min="1"
                            max="10"
                            prop:value=move || offering_qty.get().to_string()
                            on:input=move |ev| {
                                if let Ok(qty) = event_target_value(&ev).parse::<u32>() {
                                    set_offering_qty.set(qty.clamp(1, 10));
                                }
                            }
                        />
                    </div>
                    <div class="card">
                        <h3>"What You're Seeking"</h3>
                        <label class="filter-label">"Category"</label>
                        {category_select(seeking_category, set_seeking_category)}
                        <label class="filter-label">"Rarity"</label>
                        {rarity_select(seeking_rarity, set_seeking_rarity)}
                        <label class="filter-label">
                            {move || format!("Quantity: {}", seeking_qty.get())}
                        </label>
                        <input
                            type="range"
                            min="1"
                            max="10"
                            prop:value=move || seeking_qty.get().to_string()
                            on:input=move |ev| {
                                if let Ok(qty) = event_target_value(&ev).parse::<u32>() {
                                    set_seeking_qty.set(qty.clamp(1, 10));
                                }
                            }
                        />
                    </div>
                </div>

                <div class="card">
                    <h3>"Trading Conditions"</h3>
                    <div class="condition-grid">
                        {CONDITIONS.iter().map(|&condition| {
                            let checked = move || conditions.get().iter().any(|c| c == condition);
                            view! {
                                <label class="condition">
                                    <input
                                        type="checkbox"
                                        prop:checked=checked
                                        on:change=move |_| {
                                            set_conditions.update(|list| {
                                                if let Some(pos) = list.iter().position(|c| c == condition) {
                                                    list.remove(pos);
                                                } else {
                                                    list.push(condition.to_string());
                                                }
                                            });
                                        }
                                    />
                                    {condition}
                                </label>
                            }
                        }).collect_view()}
                    </div>

                    <label class="filter-label">"Priority"</label>
                    <select
                        class="filter-select"
                        prop:value=move || priority.get()
                        on:change=move |ev| set_priority.set(event_target_value(&ev))
                    >
                        <option value="speed">"Speed (Quick matches)"</option>
                        <option value="value">"Value (Best deals)"</option>
                        <option value="balanced">"Balanced"</option>
                        <option value="rarity">"Rarity Focus"</option>
                    </select>
                </div>
            </Show>

            <Show when=move || tab.get() == "templates">
                <div class="builder-grid">
                    {mock::INTENT_TEMPLATES.iter().map(|template| {
                        let template_id = template.id;
                        let is_selected = move || selected_template.get() == Some(template_id);
                        view! {
                            <button
                                class=move || if is_selected() { "card template selected" } else { "card template" }
                                on:click=move |_| select_template(template_id)
                            >
                                <h3>{template.title}</h3>
                                <p class="stat-label">{template.description}</p>
                                <p class="template-text">{template.template}</p>
                            </button>
                        }
                    }).collect_view()}
                </div>

                <Show when=move || selected_template.get().is_some()>
                    <div class="card">
                        <h3>"Customize Template"</h3>
                        <textarea
                            class="intent-textarea"
                            prop:value=move || natural_intent.get()
                            on:input=move |ev| set_natural_intent.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                </Show>
            </Show>

            <div class="builder-footer">
                <div>
                    <p class="participant-name">"Ready to create your intent?"</p>
                    <p class="stat-label">
                        "Our matching engine will start looking for opportunities immediately"
                    </p>
                </div>
                <button class="btn primary" on:click=create>"Create Intent"</button>
            </div>
        </div>
    }
}
