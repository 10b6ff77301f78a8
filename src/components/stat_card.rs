//! Stat Card Component
//!
//! Small metric tile used by the page header grids.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: String,
    #[prop(optional, into)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <p class="stat-label">{label}</p>
            <p class="stat-value">{value}</p>
            {hint.map(|hint| view! { <p class="stat-hint">{hint}</p> })}
        </div>
    }
}
