//! Frontend Models
//!
//! Typed records behind every page. All instances come from `crate::mock`;
//! nothing is persisted across page loads.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::filter::InvalidFilterValue;

/// NFT rarity tiers, ranked Common < Rare < Epic < Legendary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];

    /// Numeric rank used by the rarity sort (higher = rarer).
    pub fn rank(self) -> u8 {
        match self {
            Rarity::Common => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Rarity::Common => "badge rarity-common",
            Rarity::Rare => "badge rarity-rare",
            Rarity::Epic => "badge rarity-epic",
            Rarity::Legendary => "badge rarity-legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rarity {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Common" => Ok(Rarity::Common),
            "Rare" => Ok(Rarity::Rare),
            "Epic" => Ok(Rarity::Epic),
            "Legendary" => Ok(Rarity::Legendary),
            other => Err(InvalidFilterValue::new("rarity", other)),
        }
    }
}

/// Marketplace NFT categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Gaming,
    Art,
    Music,
    Sports,
    Utility,
    Collectibles,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Gaming,
        Category::Art,
        Category::Music,
        Category::Sports,
        Category::Utility,
        Category::Collectibles,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Gaming => "Gaming",
            Category::Art => "Art",
            Category::Music => "Music",
            Category::Sports => "Sports",
            Category::Utility => "Utility",
            Category::Collectibles => "Collectibles",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Category::Gaming => "badge category-gaming",
            Category::Art => "badge category-art",
            Category::Music => "badge category-music",
            Category::Sports => "badge category-sports",
            Category::Utility => "badge category-utility",
            Category::Collectibles => "badge category-collectibles",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gaming" => Ok(Category::Gaming),
            "Art" => Ok(Category::Art),
            "Music" => Ok(Category::Music),
            "Sports" => Ok(Category::Sports),
            "Utility" => Ok(Category::Utility),
            "Collectibles" => Ok(Category::Collectibles),
            other => Err(InvalidFilterValue::new("category", other)),
        }
    }
}

/// Marketplace / collection NFT record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nft {
    pub id: String,
    pub name: String,
    pub collection: String,
    pub image: String,
    /// Listing price in ETH as a decimal string; `None` for unlisted items.
    pub price: Option<String>,
    pub rarity: Rarity,
    pub category: Category,
    /// RFC 3339 listing timestamp; lexicographic order is chronological.
    pub listed_at: String,
    pub owned: bool,
}

/// Trading intent lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentStatus {
    Active,
    Paused,
    Completed,
    Expired,
}

impl IntentStatus {
    pub fn label(self) -> &'static str {
        match self {
            IntentStatus::Active => "active",
            IntentStatus::Paused => "paused",
            IntentStatus::Completed => "completed",
            IntentStatus::Expired => "expired",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            IntentStatus::Active => "badge status-active",
            IntentStatus::Paused => "badge status-paused",
            IntentStatus::Completed => "badge status-completed",
            IntentStatus::Expired => "badge status-expired",
        }
    }
}

/// Matching priority declared on an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Speed,
    Value,
    Balanced,
    Rarity,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Speed => "speed",
            Priority::Value => "value",
            Priority::Balanced => "balanced",
            Priority::Rarity => "rarity",
        }
    }
}

/// User-declared trade preference record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: IntentStatus,
    /// Match progress percentage (0..=100).
    pub progress: u8,
    pub matches: u32,
    pub total_matches: u32,
    pub created_at: String,
    pub priority: Priority,
    pub category: String,
}

/// Governance token stats shown on a DAO card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernanceToken {
    pub symbol: String,
    pub price: String,
    pub change_24h: f64,
}

/// The user's stake in a DAO, when they hold any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserHoldings {
    pub amount: String,
    pub voting_power: String,
    pub value: String,
}

/// Governance community record with fixed membership/token statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dao {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub category: String,
    pub members: u32,
    pub total_supply: String,
    pub market_cap: String,
    pub active_proposals: u32,
    pub governance_token: GovernanceToken,
    pub user_holdings: Option<UserHoldings>,
}

/// A single governance vote option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteChoice {
    For,
    Against,
    Abstain,
}

impl VoteChoice {
    pub fn label(self) -> &'static str {
        match self {
            VoteChoice::For => "for",
            VoteChoice::Against => "against",
            VoteChoice::Abstain => "abstain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    Active,
    Passed,
    Rejected,
    Pending,
}

impl ProposalStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProposalStatus::Active => "active",
            ProposalStatus::Passed => "passed",
            ProposalStatus::Rejected => "rejected",
            ProposalStatus::Pending => "pending",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ProposalStatus::Active => "badge status-active",
            ProposalStatus::Passed => "badge status-completed",
            ProposalStatus::Rejected => "badge status-expired",
            ProposalStatus::Pending => "badge status-paused",
        }
    }
}

/// Vote totals for a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoteTally {
    pub for_votes: u64,
    pub against_votes: u64,
    pub abstain_votes: u64,
    pub total: u64,
}

impl VoteTally {
    pub fn cast(&self) -> u64 {
        self.for_votes + self.against_votes + self.abstain_votes
    }

    pub fn for_pct(&self) -> f64 {
        let cast = self.cast();
        if cast == 0 {
            0.0
        } else {
            self.for_votes as f64 / cast as f64 * 100.0
        }
    }

    pub fn against_pct(&self) -> f64 {
        let cast = self.cast();
        if cast == 0 {
            0.0
        } else {
            self.against_votes as f64 / cast as f64 * 100.0
        }
    }
}

/// Governance proposal. The DAO fields are denormalized display copies,
/// not references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub proposer_name: String,
    pub proposer_avatar: String,
    pub dao_name: String,
    pub dao_logo: String,
    pub status: ProposalStatus,
    pub tally: VoteTally,
    pub end_time: String,
    pub quorum: u64,
    pub user_vote: Option<VoteChoice>,
    pub user_voting_power: Option<String>,
}

impl Proposal {
    pub fn quorum_reached(&self) -> bool {
        self.tally.cast() >= self.quorum
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn label(self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Confidence::High => "badge confidence-high",
            Confidence::Medium => "badge confidence-medium",
            Confidence::Low => "badge confidence-low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeKind {
    Direct,
    MultiParty,
    Chain,
}

impl TradeKind {
    pub fn label(self) -> &'static str {
        match self {
            TradeKind::Direct => "Direct",
            TradeKind::MultiParty => "Multi-Party",
            TradeKind::Chain => "Chain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    pub fn label(self) -> &'static str {
        match self {
            Complexity::Simple => "Simple",
            Complexity::Moderate => "Moderate",
            Complexity::Complex => "Complex",
        }
    }
}

/// One counterparty inside a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub offering: String,
    pub seeking: String,
    pub reputation: u8,
}

/// Value comparison between the two sides of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedValue {
    pub ours: String,
    pub theirs: String,
    pub difference: f64,
}

/// Precomputed pairing of an intent with hypothetical counterparties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeMatch {
    pub id: String,
    /// Compatibility score percentage (0..=100).
    pub score: u8,
    pub confidence: Confidence,
    pub kind: TradeKind,
    pub participants: Vec<Participant>,
    pub value: EstimatedValue,
    pub timeline: String,
    pub complexity: Complexity,
    pub requirements: Vec<String>,
    pub created_at: String,
}

impl TradeMatch {
    pub fn score_class(&self) -> &'static str {
        if self.score >= 80 {
            "score-high"
        } else if self.score >= 60 {
            "score-medium"
        } else {
            "score-low"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    Nft,
    Token,
}

/// An asset moved in a multi-party trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeAsset {
    pub id: String,
    pub name: String,
    pub image: String,
    pub kind: AssetKind,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyStatus {
    Pending,
    Approved,
    Rejected,
}

impl PartyStatus {
    pub fn label(self) -> &'static str {
        match self {
            PartyStatus::Pending => "pending",
            PartyStatus::Approved => "approved",
            PartyStatus::Rejected => "rejected",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            PartyStatus::Pending => "badge status-paused",
            PartyStatus::Approved => "badge status-completed",
            PartyStatus::Rejected => "badge status-expired",
        }
    }
}

/// One party's legs and approval state inside an execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeParty {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub offering: Vec<TradeAsset>,
    pub receiving: Vec<TradeAsset>,
    pub status: PartyStatus,
    pub approved_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    Pending,
    Executing,
    Completed,
    Failed,
}

impl ExecutionStatus {
    pub fn label(self) -> &'static str {
        match self {
            ExecutionStatus::Pending => "pending",
            ExecutionStatus::Executing => "executing",
            ExecutionStatus::Completed => "completed",
            ExecutionStatus::Failed => "failed",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ExecutionStatus::Pending => "badge status-paused",
            ExecutionStatus::Executing => "badge status-active",
            ExecutionStatus::Completed => "badge status-completed",
            ExecutionStatus::Failed => "badge status-expired",
        }
    }
}

/// Multi-party trade record with per-party approval statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Execution {
    pub id: String,
    pub trade_id: String,
    pub kind: String,
    pub parties: Vec<TradeParty>,
    pub status: ExecutionStatus,
    pub created_at: String,
    pub estimated_completion: String,
}

impl Execution {
    pub fn approved_count(&self) -> usize {
        self.parties
            .iter()
            .filter(|p| p.status == PartyStatus::Approved)
            .count()
    }

    /// Approval progress percentage across all parties.
    pub fn approval_pct(&self) -> f64 {
        if self.parties.is_empty() {
            0.0
        } else {
            self.approved_count() as f64 / self.parties.len() as f64 * 100.0
        }
    }

    pub fn fully_approved(&self) -> bool {
        !self.parties.is_empty() && self.approved_count() == self.parties.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_rank_orders_tiers() {
        assert!(Rarity::Common.rank() < Rarity::Rare.rank());
        assert!(Rarity::Rare.rank() < Rarity::Epic.rank());
        assert!(Rarity::Epic.rank() < Rarity::Legendary.rank());
    }

    #[test]
    fn rarity_parses_labels_and_rejects_garbage() {
        assert_eq!("Epic".parse::<Rarity>(), Ok(Rarity::Epic));
        assert!("Mythic".parse::<Rarity>().is_err());
    }

    #[test]
    fn tally_percentages() {
        let tally = VoteTally {
            for_votes: 125_000,
            against_votes: 45_000,
            abstain_votes: 12_000,
            total: 182_000,
        };
        assert_eq!(tally.cast(), 182_000);
        assert!((tally.for_pct() - 68.681).abs() < 0.001);

        let empty = VoteTally {
            for_votes: 0,
            against_votes: 0,
            abstain_votes: 0,
            total: 0,
        };
        assert_eq!(empty.for_pct(), 0.0);
        assert_eq!(empty.against_pct(), 0.0);
    }

    #[test]
    fn approval_progress() {
        let party = |status| TradeParty {
            id: "p".into(),
            name: "P".into(),
            avatar: String::new(),
            offering: vec![],
            receiving: vec![],
            status,
            approved_at: None,
        };
        let exec = Execution {
            id: "e1".into(),
            trade_id: "t1".into(),
            kind: "Multi-Party Exchange".into(),
            parties: vec![
                party(PartyStatus::Approved),
                party(PartyStatus::Approved),
                party(PartyStatus::Pending),
            ],
            status: ExecutionStatus::Pending,
            created_at: String::new(),
            estimated_completion: String::new(),
        };
        assert_eq!(exec.approved_count(), 2);
        assert!((exec.approval_pct() - 66.666).abs() < 0.01);
        assert!(!exec.fully_approved());
    }
}
