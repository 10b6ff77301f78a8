//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Seeded from the
//! mock fixtures on startup; mutations never outlive the page load.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::mock;
use crate::models::{Execution, Intent, TradeMatch};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The user's trading intents
    pub intents: Vec<Intent>,
    /// Matches surfaced by the matching dashboard
    pub matches: Vec<TradeMatch>,
    /// In-flight multi-party executions
    pub executions: Vec<Execution>,
}

impl AppState {
    pub fn seeded() -> Self {
        Self {
            intents: mock::intents(),
            matches: mock::trade_matches(),
            executions: mock::executions(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add an intent to the store (newest first)
pub fn store_add_intent(store: &AppStore, intent: Intent) {
    store.intents().write().insert(0, intent);
}
