//! Intent Create Page
//!
//! Wraps the builder; a freshly created intent lands in the store and the
//! page flips to a confirmation summary.

use leptos::prelude::*;

use crate::actions::use_actions;
use crate::components::IntentBuilder;
use crate::context::{use_app_context, Page};
use crate::models::Intent;
use crate::store::{store_add_intent, use_app_store};

#[component]
pub fn IntentCreatePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let actions = use_actions();

    let (created, set_created) = signal::<Option<Intent>>(None);

    let on_create = Callback::new(move |intent: Intent| {
        actions.create_intent(&intent.id);
        store_add_intent(&store, intent.clone());
        set_created.set(Some(intent));
    });

    view! {
        <div class="page intent-create-page">
            {move || match created.get() {
                Some(intent) => view! {
                    <div class="create-confirmation">
                        <div class="page-header">
                            <h1>"Intent Created!"</h1>
                            <p class="stat-label">
                                "Your trading intent is now active and our matching engine is \
                                 looking for opportunities"
                            </p>
                        </div>

                        <div class="card">
                            <h3>"Your Intent Summary"</h3>
                            <div class="summary-row">
                                <span class="stat-label">"Intent ID"</span>
                                <span class="badge outline">{intent.id.clone()}</span>
                            </div>
                            <div class="summary-row">
                                <span class="stat-label">"Title"</span>
                                <span>{intent.title.clone()}</span>
                            </div>
                            <div class="summary-row">
                                <span class="stat-label">"Status"</span>
                                <span class=intent.status.badge_class()>{intent.status.label()}</span>
                            </div>
                            <p class="summary-description">{intent.description.clone()}</p>
                        </div>

                        <div class="hero-actions">
                            <button class="btn primary" on:click=move |_| ctx.navigate(Page::Intents)>
                                "View All Intents"
                            </button>
                            <button class="btn outline" on:click=move |_| set_created.set(None)>
                                "Create Another Intent"
                            </button>
                        </div>
                    </div>
                }.into_any(),
                None => view! {
                    <IntentBuilder on_create=on_create />
                }.into_any(),
            }}
        </div>
    }
}
