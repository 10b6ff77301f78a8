//! Mock Fixtures
//!
//! Hard-coded records backing every page, re-created on each call. There is
//! no backend; these are the only data the app ever shows.

use crate::models::*;

fn nft(
    id: &str,
    name: &str,
    collection: &str,
    image: &str,
    price: Option<&str>,
    rarity: Rarity,
    category: Category,
    listed_at: &str,
    owned: bool,
) -> Nft {
    Nft {
        id: id.to_string(),
        name: name.to_string(),
        collection: collection.to_string(),
        image: image.to_string(),
        price: price.map(str::to_string),
        rarity,
        category,
        listed_at: listed_at.to_string(),
        owned,
    }
}

/// The six NFTs browsable on the marketplace page.
pub fn marketplace_nfts() -> Vec<Nft> {
    vec![
        nft(
            "1",
            "Cyber Warrior #1234",
            "CyberPunks",
            "/cyberpunk-warrior-nft-digital-art.jpg",
            Some("2.5"),
            Rarity::Epic,
            Category::Gaming,
            "2024-01-15T10:30:00Z",
            false,
        ),
        nft(
            "2",
            "Abstract Dreams",
            "Digital Canvas",
            "/abstract-digital-art-nft-colorful.jpg",
            Some("1.8"),
            Rarity::Rare,
            Category::Art,
            "2024-01-14T09:20:00Z",
            false,
        ),
        nft(
            "3",
            "Beat Drop #567",
            "SoundWaves",
            "/music-nft-sound-waves-visualization.jpg",
            Some("0.9"),
            Rarity::Common,
            Category::Music,
            "2024-01-12T16:45:00Z",
            false,
        ),
        nft(
            "4",
            "Golden Goal",
            "Sports Legends",
            "/sports-nft-golden-soccer-ball.jpg",
            Some("5.2"),
            Rarity::Legendary,
            Category::Sports,
            "2024-01-16T11:05:00Z",
            false,
        ),
        nft(
            "5",
            "DAO Membership",
            "Governance Tokens",
            "/dao-governance-token-nft-badge.jpg",
            Some("3.1"),
            Rarity::Epic,
            Category::Utility,
            "2024-01-13T08:10:00Z",
            false,
        ),
        nft(
            "6",
            "Pixel Knight #789",
            "8-Bit Heroes",
            "/pixel-art-knight-nft-8bit-style.jpg",
            Some("1.2"),
            Rarity::Rare,
            Category::Gaming,
            "2024-01-11T14:30:00Z",
            false,
        ),
    ]
}

/// The user's own collection shown on the dashboard.
pub fn owned_nfts() -> Vec<Nft> {
    vec![
        nft(
            "user-1",
            "My Cyber Warrior #1234",
            "CyberPunks",
            "/owned-cyberpunk-warrior-nft.jpg",
            None,
            Rarity::Epic,
            Category::Gaming,
            "2024-01-08T12:00:00Z",
            true,
        ),
        nft(
            "user-2",
            "My Abstract Dreams",
            "Digital Canvas",
            "/owned-abstract-digital-art-nft.jpg",
            None,
            Rarity::Rare,
            Category::Art,
            "2024-01-06T15:30:00Z",
            true,
        ),
        nft(
            "user-3",
            "My DAO Membership",
            "Governance Tokens",
            "/owned-dao-governance-token-nft.jpg",
            None,
            Rarity::Epic,
            Category::Utility,
            "2024-01-04T10:15:00Z",
            true,
        ),
    ]
}

fn intent(
    id: &str,
    title: &str,
    description: &str,
    status: IntentStatus,
    progress: u8,
    matches: u32,
    total_matches: u32,
    created_at: &str,
    priority: Priority,
    category: &str,
) -> Intent {
    Intent {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status,
        progress,
        matches,
        total_matches,
        created_at: created_at.to_string(),
        priority,
        category: category.to_string(),
    }
}

/// The user's trading intents.
pub fn intents() -> Vec<Intent> {
    vec![
        intent(
            "1",
            "Gaming NFTs → Art NFTs",
            "Trade my gaming collection for art NFTs of similar rarity and value",
            IntentStatus::Active,
            67,
            2,
            3,
            "2024-01-15T10:30:00Z",
            Priority::Balanced,
            "Cross-Category",
        ),
        intent(
            "2",
            "Collection → DAO Tokens",
            "Exchange my entire collection for governance tokens in art DAOs",
            IntentStatus::Active,
            25,
            1,
            4,
            "2024-01-14T15:45:00Z",
            Priority::Value,
            "Governance",
        ),
        intent(
            "3",
            "Rarity Upgrade Trade",
            "Trade 3 common CryptoPunks for 1 rare Bored Ape",
            IntentStatus::Completed,
            100,
            1,
            1,
            "2024-01-10T09:15:00Z",
            Priority::Rarity,
            "Upgrade",
        ),
        intent(
            "4",
            "Music NFTs → Sports NFTs",
            "Swap my music collection for sports memorabilia NFTs",
            IntentStatus::Paused,
            0,
            0,
            2,
            "2024-01-12T14:20:00Z",
            Priority::Speed,
            "Cross-Category",
        ),
    ]
}

/// Discoverable governance communities.
pub fn daos() -> Vec<Dao> {
    vec![
        Dao {
            id: "dao1".to_string(),
            name: "ArtistsDAO".to_string(),
            description: "A decentralized community of digital artists creating and trading NFT \
                          art with collective governance over platform decisions and revenue sharing."
                .to_string(),
            logo: "/placeholder.svg".to_string(),
            category: "Art & Culture".to_string(),
            members: 15_420,
            total_supply: "1M ART".to_string(),
            market_cap: "$2.4M".to_string(),
            active_proposals: 3,
            governance_token: GovernanceToken {
                symbol: "ART".to_string(),
                price: "$2.40".to_string(),
                change_24h: 5.2,
            },
            user_holdings: Some(UserHoldings {
                amount: "1,250 ART".to_string(),
                voting_power: "0.125%".to_string(),
                value: "$3,000".to_string(),
            }),
        },
        Dao {
            id: "dao2".to_string(),
            name: "GamersUnited".to_string(),
            description: "Gaming-focused DAO that governs a play-to-earn ecosystem, manages \
                          tournament prizes, and votes on new game integrations and partnerships."
                .to_string(),
            logo: "/placeholder.svg".to_string(),
            category: "Gaming".to_string(),
            members: 28_750,
            total_supply: "5M GAME".to_string(),
            market_cap: "$8.7M".to_string(),
            active_proposals: 5,
            governance_token: GovernanceToken {
                symbol: "GAME".to_string(),
                price: "$1.74".to_string(),
                change_24h: -2.1,
            },
            user_holdings: None,
        },
        Dao {
            id: "dao3".to_string(),
            name: "MusicDAO".to_string(),
            description: "Decentralized music platform where artists and fans collaborate on \
                          music production, distribution, and royalty sharing through democratic \
                          governance."
                .to_string(),
            logo: "/placeholder.svg".to_string(),
            category: "Music".to_string(),
            members: 9_830,
            total_supply: "2M MUSIC".to_string(),
            market_cap: "$1.8M".to_string(),
            active_proposals: 2,
            governance_token: GovernanceToken {
                symbol: "MUSIC".to_string(),
                price: "$0.90".to_string(),
                change_24h: 8.7,
            },
            user_holdings: None,
        },
    ]
}

/// Governance proposals across the mock DAOs.
pub fn proposals() -> Vec<Proposal> {
    vec![
        Proposal {
            id: "prop1".to_string(),
            title: "Increase Artist Royalty Share to 15%".to_string(),
            description: "Proposal to increase the royalty percentage for original artists from \
                          10% to 15% on all secondary sales to better support creators in our \
                          ecosystem."
                .to_string(),
            proposer_name: "Alice Chen".to_string(),
            proposer_avatar: "/placeholder.svg".to_string(),
            dao_name: "ArtistsDAO".to_string(),
            dao_logo: "/placeholder.svg".to_string(),
            status: ProposalStatus::Active,
            tally: VoteTally {
                for_votes: 125_000,
                against_votes: 45_000,
                abstain_votes: 12_000,
                total: 182_000,
            },
            end_time: "2024-01-20T18:00:00Z".to_string(),
            quorum: 100_000,
            user_vote: Some(VoteChoice::For),
            user_voting_power: Some("1,250 ART".to_string()),
        },
        Proposal {
            id: "prop2".to_string(),
            title: "Add New Tournament Prize Pool".to_string(),
            description: "Allocate 500,000 GAME tokens to create a monthly tournament prize pool \
                          for competitive gaming events and community challenges."
                .to_string(),
            proposer_name: "Mike Johnson".to_string(),
            proposer_avatar: "/placeholder.svg".to_string(),
            dao_name: "GamersUnited".to_string(),
            dao_logo: "/placeholder.svg".to_string(),
            status: ProposalStatus::Active,
            tally: VoteTally {
                for_votes: 890_000,
                against_votes: 120_000,
                abstain_votes: 45_000,
                total: 1_055_000,
            },
            end_time: "2024-01-18T12:00:00Z".to_string(),
            quorum: 500_000,
            user_vote: None,
            user_voting_power: None,
        },
        Proposal {
            id: "prop3".to_string(),
            title: "Partnership with Spotify Integration".to_string(),
            description: "Establish a partnership with Spotify to enable direct music streaming \
                          and royalty distribution through our platform's smart contracts."
                .to_string(),
            proposer_name: "Sarah Kim".to_string(),
            proposer_avatar: "/placeholder.svg".to_string(),
            dao_name: "MusicDAO".to_string(),
            dao_logo: "/placeholder.svg".to_string(),
            status: ProposalStatus::Passed,
            tally: VoteTally {
                for_votes: 450_000,
                against_votes: 89_000,
                abstain_votes: 23_000,
                total: 562_000,
            },
            end_time: "2024-01-15T09:00:00Z".to_string(),
            quorum: 200_000,
            user_vote: None,
            user_voting_power: None,
        },
    ]
}

fn participant(id: &str, name: &str, offering: &str, seeking: &str, reputation: u8) -> Participant {
    Participant {
        id: id.to_string(),
        name: name.to_string(),
        avatar: "/placeholder.svg".to_string(),
        offering: offering.to_string(),
        seeking: seeking.to_string(),
        reputation,
    }
}

/// Matches found by the (simulated) matching engine.
pub fn trade_matches() -> Vec<TradeMatch> {
    vec![
        TradeMatch {
            id: "match-1".to_string(),
            score: 92,
            confidence: Confidence::High,
            kind: TradeKind::Direct,
            participants: vec![
                participant(
                    "user-1",
                    "CryptoTrader_42",
                    "Gaming NFTs (3x Epic)",
                    "Art NFTs (Similar Rarity)",
                    98,
                ),
                participant(
                    "user-2",
                    "ArtCollector_99",
                    "Digital Art (2x Epic)",
                    "Gaming Collection",
                    95,
                ),
            ],
            value: EstimatedValue {
                ours: "4.2 ETH".to_string(),
                theirs: "4.5 ETH".to_string(),
                difference: 7.1,
            },
            timeline: "2-4 hours".to_string(),
            complexity: Complexity::Simple,
            requirements: vec![
                "Rarity Match".to_string(),
                "Value ±10%".to_string(),
                "Instant Settlement".to_string(),
            ],
            created_at: "2024-01-15T10:30:00Z".to_string(),
        },
        TradeMatch {
            id: "match-2".to_string(),
            score: 78,
            confidence: Confidence::Medium,
            kind: TradeKind::MultiParty,
            participants: vec![
                participant(
                    "user-3",
                    "DAOGov_Master",
                    "Governance Tokens",
                    "Art Collection",
                    89,
                ),
                participant(
                    "user-4",
                    "MusicNFT_Fan",
                    "Music NFTs",
                    "Gaming Assets",
                    92,
                ),
                participant(
                    "user-5",
                    "SportsFan_2024",
                    "Sports Memorabilia",
                    "DAO Tokens",
                    87,
                ),
            ],
            value: EstimatedValue {
                ours: "6.8 ETH".to_string(),
                theirs: "7.1 ETH".to_string(),
                difference: 4.4,
            },
            timeline: "6-12 hours".to_string(),
            complexity: Complexity::Complex,
            requirements: vec![
                "Multi-Party Coordination".to_string(),
                "Cross-Category".to_string(),
                "DAO Integration".to_string(),
                "Escrow Required".to_string(),
            ],
            created_at: "2024-01-15T09:15:00Z".to_string(),
        },
    ]
}

fn asset(id: &str, name: &str, image: &str, kind: AssetKind, value: &str) -> TradeAsset {
    TradeAsset {
        id: id.to_string(),
        name: name.to_string(),
        image: image.to_string(),
        kind,
        value: value.to_string(),
    }
}

fn party(
    id: &str,
    name: &str,
    offering: Vec<TradeAsset>,
    receiving: Vec<TradeAsset>,
    status: PartyStatus,
    approved_at: Option<&str>,
) -> TradeParty {
    TradeParty {
        id: id.to_string(),
        name: name.to_string(),
        avatar: "/placeholder.svg".to_string(),
        offering,
        receiving,
        status,
        approved_at: approved_at.map(str::to_string),
    }
}

/// In-flight multi-party trade executions.
pub fn executions() -> Vec<Execution> {
    let cyber = || {
        asset(
            "nft1",
            "CyberPunk Warrior #1234",
            "/cyberpunk-warrior-nft-digital-art.jpg",
            AssetKind::Nft,
            "Rare",
        )
    };
    let abstract_art = || {
        asset(
            "nft2",
            "Abstract Art #5678",
            "/abstract-digital-art-nft-colorful.jpg",
            AssetKind::Nft,
            "Epic",
        )
    };
    let vote_tokens = || {
        asset(
            "token1",
            "DAO Governance Tokens",
            "/dao-governance-token-nft-badge.jpg",
            AssetKind::Token,
            "1000 VOTE",
        )
    };
    let music = || {
        asset(
            "nft3",
            "Music NFT #9999",
            "/music-nft-sound-waves-visualization.jpg",
            AssetKind::Nft,
            "Legendary",
        )
    };
    let sports = || {
        asset(
            "nft4",
            "Sports Card #1111",
            "/sports-nft-golden-soccer-ball.jpg",
            AssetKind::Nft,
            "Rare",
        )
    };

    vec![
        Execution {
            id: "exec_001".to_string(),
            trade_id: "trade_abc123".to_string(),
            kind: "Multi-Party Exchange".to_string(),
            parties: vec![
                party(
                    "user1",
                    "Alex Chen",
                    vec![cyber()],
                    vec![abstract_art()],
                    PartyStatus::Approved,
                    Some("2024-01-15T10:30:00Z"),
                ),
                party(
                    "user2",
                    "Sarah Kim",
                    vec![abstract_art()],
                    vec![vote_tokens()],
                    PartyStatus::Approved,
                    Some("2024-01-15T10:45:00Z"),
                ),
                party(
                    "user3",
                    "Mike Johnson",
                    vec![vote_tokens()],
                    vec![cyber()],
                    PartyStatus::Pending,
                    None,
                ),
            ],
            status: ExecutionStatus::Pending,
            created_at: "2024-01-15T09:00:00Z".to_string(),
            estimated_completion: "2024-01-15T12:00:00Z".to_string(),
        },
        Execution {
            id: "exec_002".to_string(),
            trade_id: "trade_def456".to_string(),
            kind: "Chain Exchange".to_string(),
            parties: vec![
                party(
                    "user4",
                    "Emma Wilson",
                    vec![music()],
                    vec![sports()],
                    PartyStatus::Approved,
                    Some("2024-01-15T11:00:00Z"),
                ),
                party(
                    "user5",
                    "David Lee",
                    vec![sports()],
                    vec![music()],
                    PartyStatus::Approved,
                    Some("2024-01-15T11:15:00Z"),
                ),
            ],
            status: ExecutionStatus::Executing,
            created_at: "2024-01-15T10:30:00Z".to_string(),
            estimated_completion: "2024-01-15T11:30:00Z".to_string(),
        },
    ]
}

/// Canned intent templates offered by the builder.
pub struct IntentTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub template: &'static str,
}

pub const INTENT_TEMPLATES: &[IntentTemplate] = &[
    IntentTemplate {
        id: "gaming-to-art",
        title: "Gaming → Art NFTs",
        description: "Trade gaming NFTs for art pieces of similar value",
        template: "I want to trade my {gaming collection} for {art NFTs} of {similar rarity} and {comparable floor price}",
    },
    IntentTemplate {
        id: "collection-to-dao",
        title: "Collection → DAO Tokens",
        description: "Exchange collection for governance power",
        template: "Exchange my {entire collection} for {governance tokens} that give me {voting power} in {art DAOs}",
    },
    IntentTemplate {
        id: "rarity-upgrade",
        title: "Rarity Upgrade",
        description: "Trade multiple common NFTs for rare ones",
        template: "Trade my {3-5 common NFTs} for {1 rare NFT} from {same collection} or {similar projects}",
    },
    IntentTemplate {
        id: "cross-chain",
        title: "Cross-Chain Swap",
        description: "Exchange NFTs across different blockchains",
        template: "Swap my {Ethereum NFTs} for {Solana NFTs} of {equivalent value} in {gaming category}",
    },
];

/// Starter suggestions shown before the user has typed anything.
pub const AI_SUGGESTIONS: &[&str] = &[
    "Trade 3 common gaming NFTs for 1 rare art piece",
    "Exchange my CryptoPunks for equivalent value in Bored Apes",
    "Swap my music NFTs for DAO governance tokens",
    "Trade my entire collection for voting power in art DAOs",
];

/// Hints swapped in once the intent text is long enough to "parse".
pub const PARSE_HINTS: &[&str] = &[
    "Detected: Gaming → Art trade intent",
    "Suggested: Add rarity matching condition",
    "Tip: Specify collection preferences for better matches",
];

/// Wallet connect options: (name, description).
pub const WALLET_OPTIONS: &[(&str, &str)] = &[
    ("MetaMask", "Connect using MetaMask wallet"),
    ("Rabby", "Connect using Rabby wallet"),
    ("OKX Wallet", "Connect using OKX wallet"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn marketplace_ids_are_unique() {
        let items = marketplace_nfts();
        let ids: HashSet<_> = items.iter().map(|n| n.id.as_str().to_owned()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn owned_nfts_are_flagged_and_unpriced() {
        for nft in owned_nfts() {
            assert!(nft.owned);
            assert!(nft.price.is_none());
        }
    }

    #[test]
    fn first_execution_awaits_one_approval() {
        let execs = executions();
        assert_eq!(execs[0].approved_count(), 2);
        assert_eq!(execs[0].parties.len(), 3);
        assert!(!execs[0].fully_approved());
        assert!(execs[1].fully_approved());
    }

    #[test]
    fn intent_status_counts() {
        let items = intents();
        let active = items
            .iter()
            .filter(|i| i.status == IntentStatus::Active)
            .count();
        assert_eq!(active, 2);
        assert_eq!(items.len(), 4);
    }
}
