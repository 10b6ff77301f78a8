//! UI Components
//!
//! Reusable Leptos components.

mod main_nav;
mod stat_card;
mod collection_filters;
mod nft_card;
mod intent_card;
mod intent_builder;
mod dao_card;
mod proposal_card;
mod match_card;
mod matching_dashboard;
mod trade_execution_modal;
mod auth_form;

pub use main_nav::MainNav;
pub use stat_card::StatCard;
pub use collection_filters::CollectionFilters;
pub use nft_card::NftCard;
pub use intent_card::IntentCard;
pub use intent_builder::IntentBuilder;
pub use dao_card::DaoCard;
pub use proposal_card::ProposalCard;
pub use match_card::MatchCard;
pub use matching_dashboard::MatchingDashboard;
pub use trade_execution_modal::TradeExecutionModal;
pub use auth_form::AuthForm;
