//! Collection Filters Component
//!
//! Search box, sort select, the three filter selects and the active-filter
//! chips. Owns nothing: every change writes back into the page's
//! `FilterState` signal and the list recomputes reactively.

use leptos::prelude::*;

use crate::filter::{FilterState, SortKey};
use crate::models::{Category, Rarity};

/// Categories offered by the marketplace filter select.
pub const MARKET_CATEGORIES: [Category; 5] = [
    Category::Gaming,
    Category::Art,
    Category::Music,
    Category::Sports,
    Category::Utility,
];

/// Price range options: (token, label).
pub const PRICE_RANGES: &[(&str, &str)] = &[
    ("0-1", "0 - 1 ETH"),
    ("1-5", "1 - 5 ETH"),
    ("5-10", "5 - 10 ETH"),
    ("10+", "10+ ETH"),
];

fn sentinel_to_none(value: String) -> Option<String> {
    if value == "all" {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn CollectionFilters(
    filters: ReadSignal<FilterState>,
    set_filters: WriteSignal<FilterState>,
) -> impl IntoView {
    let chips = Memo::new(move |_| filters.get().active_chips());

    view! {
        <div class="collection-filters">
            <div class="filter-row">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search NFTs, collections, or creators..."
                    prop:value=move || filters.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_filters.update(|f| f.search = value);
                    }
                />
                <select
                    class="filter-select"
                    prop:value=move || filters.get().sort.token().to_string()
                    on:change=move |ev| {
                        let token = event_target_value(&ev);
                        set_filters.update(|f| f.sort = SortKey::from_token(&token));
                    }
                >
                    {SortKey::OPTIONS.iter().map(|(_, token, label)| view! {
                        <option value=*token>{*label}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="filter-row">
                <select
                    class="filter-select"
                    prop:value=move || filters.get().category.unwrap_or_else(|| "all".to_string())
                    on:change=move |ev| {
                        let value = sentinel_to_none(event_target_value(&ev));
                        set_filters.update(|f| f.category = value);
                    }
                >
                    <option value="all">"All Categories"</option>
                    {MARKET_CATEGORIES.iter().map(|category| view! {
                        <option value=category.label()>{category.label()}</option>
                    }).collect_view()}
                </select>

                <select
                    class="filter-select"
                    prop:value=move || {
                        filters.get().rarity.map(|r| r.label().to_string()).unwrap_or_else(|| "all".to_string())
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_filters.update(|f| f.rarity = value.parse::<Rarity>().ok());
                    }
                >
                    <option value="all">"All Rarities"</option>
                    {Rarity::ALL.iter().map(|rarity| view! {
                        <option value=rarity.label()>{rarity.label()}</option>
                    }).collect_view()}
                </select>

                <select
                    class="filter-select"
                    prop:value=move || filters.get().price_range.unwrap_or_else(|| "all".to_string())
                    on:change=move |ev| {
                        let value = sentinel_to_none(event_target_value(&ev));
                        set_filters.update(|f| f.price_range = value);
                    }
                >
                    <option value="all">"All Prices"</option>
                    {PRICE_RANGES.iter().map(|(token, label)| view! {
                        <option value=*token>{*label}</option>
                    }).collect_view()}
                </select>

                <Show when=move || !chips.get().is_empty()>
                    <button
                        class="btn outline small"
                        on:click=move |_| set_filters.update(|f| f.clear_all())
                    >
                        "Clear All"
                    </button>
                </Show>
            </div>

            <Show when=move || !chips.get().is_empty()>
                <div class="filter-chips">
                    <For
                        each=move || chips.get()
                        key=|chip| chip.label.clone()
                        children=move |chip| {
                            let field = chip.field;
                            view! {
                                <span class="badge chip">
                                    {chip.label.clone()}
                                    <button
                                        class="chip-remove"
                                        on:click=move |_| set_filters.update(|f| f.clear_field(field))
                                    >
                                        "×"
                                    </button>
                                </span>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
