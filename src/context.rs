//! Application Context
//!
//! Shared navigation state provided via Leptos Context API. There is no
//! router: the current page is a signal and the nav swaps components.

use leptos::prelude::*;

/// Top-level pages of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Marketplace,
    Dashboard,
    Intents,
    IntentCreate,
    Matching,
    Execution,
    DaoHub,
    SignIn,
}

impl Page {
    /// Pages listed in the main nav, in order.
    pub const NAV: [Page; 7] = [
        Page::Home,
        Page::Marketplace,
        Page::Dashboard,
        Page::Intents,
        Page::Matching,
        Page::Execution,
        Page::DaoHub,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Marketplace => "Marketplace",
            Page::Dashboard => "My Collection",
            Page::Intents => "My Intents",
            Page::IntentCreate => "Create Intent",
            Page::Matching => "Matching Engine",
            Page::Execution => "Execution",
            Page::DaoHub => "DAO Hub",
            Page::SignIn => "Sign In",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently displayed page - read
    pub page: ReadSignal<Page>,
    /// Currently displayed page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Switch the visible page.
    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }
}

/// Get the app context; panics when no provider is mounted.
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
