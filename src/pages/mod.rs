//! Pages
//!
//! One component per page of the app.

mod home;
mod marketplace;
mod dashboard;
mod intents;
mod intent_create;
mod matching;
mod execution;
mod dao;

pub use home::HomePage;
pub use marketplace::MarketplacePage;
pub use dashboard::DashboardPage;
pub use intents::IntentsPage;
pub use intent_create::IntentCreatePage;
pub use matching::MatchingPage;
pub use execution::ExecutionPage;
pub use dao::DaoHubPage;
