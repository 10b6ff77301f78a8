//! Collection Filter/Sort Pipeline
//!
//! Shared by the marketplace, intents, DAO and matching pages: a conjunction
//! of predicates over an in-memory list, followed by a stable sort. Never
//! mutates its input; malformed numeric tokens exclude items instead of
//! panicking.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::Rarity;

/// A filter token that failed to parse. Items hitting this are dropped from
/// the result set rather than surfacing an error to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFilterValue {
    pub kind: &'static str,
    pub token: String,
}

impl InvalidFilterValue {
    pub fn new(kind: &'static str, token: &str) -> Self {
        Self {
            kind,
            token: token.to_string(),
        }
    }
}

impl fmt::Display for InvalidFilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} value: {:?}", self.kind, self.token)
    }
}

impl std::error::Error for InvalidFilterValue {}

/// Price window parsed from tokens like `"1-5"` (inclusive both ends) or
/// `"10+"` (open-ended).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}

impl FromStr for PriceRange {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InvalidFilterValue::new("price range", s);

        if let Some(min) = s.strip_suffix('+') {
            let min: f64 = min.parse().map_err(|_| err())?;
            return Ok(PriceRange { min, max: None });
        }
        let (min, max) = s.split_once('-').ok_or_else(err)?;
        let min: f64 = min.parse().map_err(|_| err())?;
        let max: f64 = max.parse().map_err(|_| err())?;
        if max < min {
            return Err(err());
        }
        Ok(PriceRange {
            min,
            max: Some(max),
        })
    }
}

/// Sort keys supported by the listing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    PriceLowHigh,
    PriceHighLow,
    Rarity,
    Popular,
}

impl SortKey {
    pub const OPTIONS: [(SortKey, &'static str, &'static str); 6] = [
        (SortKey::Newest, "newest", "Newest"),
        (SortKey::Oldest, "oldest", "Oldest"),
        (SortKey::PriceLowHigh, "price-low", "Price: Low to High"),
        (SortKey::PriceHighLow, "price-high", "Price: High to Low"),
        (SortKey::Rarity, "rarity", "Rarity"),
        (SortKey::Popular, "popular", "Most Popular"),
    ];

    pub fn token(self) -> &'static str {
        Self::OPTIONS
            .iter()
            .find(|(key, _, _)| *key == self)
            .map(|(_, token, _)| *token)
            .unwrap_or("newest")
    }

    /// Unknown tokens fall back to the default key.
    pub fn from_token(token: &str) -> SortKey {
        Self::OPTIONS
            .iter()
            .find(|(_, t, _)| *t == token)
            .map(|(key, _, _)| *key)
            .unwrap_or_default()
    }
}

/// Current filter selections for one listing page. `None` is the
/// "all" sentinel; `Default` is the fully cleared state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub search: String,
    pub category: Option<String>,
    pub rarity: Option<Rarity>,
    pub status: Option<String>,
    /// Raw price-range token, e.g. `"1-5"` or `"10+"`.
    pub price_range: Option<String>,
    pub sort: SortKey,
}

/// Fields rendered as removable chips (search and sort are not shown).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Category,
    Rarity,
    Status,
    PriceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterChip {
    pub field: FilterField,
    pub label: String,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Display chips for the active selections, excluding search and sort.
    pub fn active_chips(&self) -> Vec<FilterChip> {
        let mut chips = Vec::new();
        if let Some(category) = &self.category {
            chips.push(FilterChip {
                field: FilterField::Category,
                label: format!("category: {category}"),
            });
        }
        if let Some(rarity) = self.rarity {
            chips.push(FilterChip {
                field: FilterField::Rarity,
                label: format!("rarity: {rarity}"),
            });
        }
        if let Some(status) = &self.status {
            chips.push(FilterChip {
                field: FilterField::Status,
                label: format!("status: {status}"),
            });
        }
        if let Some(range) = &self.price_range {
            chips.push(FilterChip {
                field: FilterField::PriceRange,
                label: format!("price: {range} ETH"),
            });
        }
        chips
    }

    /// Resets a single selection to its sentinel.
    pub fn clear_field(&mut self, field: FilterField) {
        match field {
            FilterField::Category => self.category = None,
            FilterField::Rarity => self.rarity = None,
            FilterField::Status => self.status = None,
            FilterField::PriceRange => self.price_range = None,
        }
    }

    /// Resets every field, including search and sort.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }
}

/// What a record must expose to pass through the pipeline. Every accessor
/// except the search haystacks is optional; a record lacking an attribute
/// simply fails that predicate and sorts last under that key.
pub trait Filterable: Clone {
    /// Text fields searched by the case-insensitive substring predicate.
    fn search_haystacks(&self) -> Vec<&str>;

    fn category_label(&self) -> Option<&str> {
        None
    }

    fn rarity(&self) -> Option<Rarity> {
        None
    }

    fn status_label(&self) -> Option<&str> {
        None
    }

    /// Raw decimal price string, parsed lazily so malformed values can be
    /// excluded instead of crashing.
    fn price(&self) -> Option<&str> {
        None
    }

    /// RFC 3339 timestamp; lexicographic order is chronological.
    fn listed_at(&self) -> Option<&str> {
        None
    }

    fn popularity(&self) -> Option<u32> {
        None
    }
}

fn parsed_price<T: Filterable>(item: &T) -> Option<f64> {
    item.price().and_then(|raw| raw.trim().parse::<f64>().ok())
}

/// Conjunction of all active predicates. Order of evaluation does not affect
/// the result.
pub fn matches<T: Filterable>(item: &T, filters: &FilterState) -> bool {
    if !filters.search.is_empty() {
        let needle = filters.search.to_lowercase();
        let hit = item
            .search_haystacks()
            .iter()
            .any(|hay| hay.to_lowercase().contains(&needle));
        if !hit {
            return false;
        }
    }

    if let Some(category) = &filters.category {
        if item.category_label() != Some(category.as_str()) {
            return false;
        }
    }

    if let Some(rarity) = filters.rarity {
        if item.rarity() != Some(rarity) {
            return false;
        }
    }

    if let Some(status) = &filters.status {
        if item.status_label() != Some(status.as_str()) {
            return false;
        }
    }

    if let Some(token) = &filters.price_range {
        let range: PriceRange = match token.parse() {
            Ok(range) => range,
            Err(_) => return false,
        };
        match parsed_price(item) {
            Some(price) => {
                if !range.contains(price) {
                    return false;
                }
            }
            None => return false,
        }
    }

    true
}

/// Stable in-place sort by the selected key. Items missing the key's data
/// order last; equal keys keep their pre-sort order.
pub fn sort<T: Filterable>(items: &mut [T], key: SortKey) {
    match key {
        SortKey::Newest => items.sort_by(|a, b| cmp_desc(a.listed_at(), b.listed_at())),
        SortKey::Oldest => items.sort_by(|a, b| cmp_asc(a.listed_at(), b.listed_at())),
        SortKey::PriceLowHigh => items.sort_by(|a, b| cmp_asc(parsed_price(a), parsed_price(b))),
        SortKey::PriceHighLow => items.sort_by(|a, b| cmp_desc(parsed_price(a), parsed_price(b))),
        SortKey::Rarity => {
            items.sort_by(|a, b| cmp_desc(a.rarity().map(Rarity::rank), b.rarity().map(Rarity::rank)))
        }
        SortKey::Popular => items.sort_by(|a, b| cmp_desc(a.popularity(), b.popularity())),
    }
}

// `None` (missing or unparsable data) orders last in both directions.

fn cmp_asc<V: PartialOrd>(a: Option<V>, b: Option<V>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_desc<V: PartialOrd>(a: Option<V>, b: Option<V>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Full pipeline: predicate stage then sort stage, into a fresh list.
pub fn apply<T: Filterable>(items: &[T], filters: &FilterState) -> Vec<T> {
    let mut out: Vec<T> = items
        .iter()
        .filter(|item| matches(*item, filters))
        .cloned()
        .collect();
    sort(&mut out, filters.sort);
    out
}

impl Filterable for crate::models::Nft {
    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.collection]
    }

    fn category_label(&self) -> Option<&str> {
        Some(self.category.label())
    }

    fn rarity(&self) -> Option<Rarity> {
        Some(self.rarity)
    }

    fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    fn listed_at(&self) -> Option<&str> {
        Some(&self.listed_at)
    }
}

impl Filterable for crate::models::Intent {
    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }

    fn category_label(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.label())
    }

    fn listed_at(&self) -> Option<&str> {
        Some(&self.created_at)
    }
}

impl Filterable for crate::models::Dao {
    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }

    fn category_label(&self) -> Option<&str> {
        Some(&self.category)
    }
}

impl Filterable for crate::models::Execution {
    // Searchable by trade id, participant, or asset.
    fn search_haystacks(&self) -> Vec<&str> {
        let mut hay = vec![self.id.as_str(), self.trade_id.as_str(), self.kind.as_str()];
        for party in &self.parties {
            hay.push(&party.name);
            for asset in party.offering.iter().chain(&party.receiving) {
                hay.push(&asset.name);
            }
        }
        hay
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.label())
    }

    fn listed_at(&self) -> Option<&str> {
        Some(&self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use crate::models::{Category, Nft};

    fn make_nft(id: &str, price: Option<&str>, rarity: Rarity, listed_at: &str) -> Nft {
        Nft {
            id: id.to_string(),
            name: format!("NFT {}", id),
            collection: "Test Collection".to_string(),
            image: String::new(),
            price: price.map(str::to_string),
            rarity,
            category: Category::Gaming,
            listed_at: listed_at.to_string(),
            owned: false,
        }
    }

    fn ids(nfts: &[Nft]) -> Vec<&str> {
        nfts.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn identity_filter_returns_sorted_full_input() {
        let items = mock::marketplace_nfts();
        let out = apply(&items, &FilterState::default());
        assert_eq!(out.len(), items.len());

        // Default sort is newest first.
        for pair in out.windows(2) {
            assert!(pair[0].listed_at >= pair[1].listed_at);
        }
    }

    #[test]
    fn absent_search_string_matches_nothing() {
        let items = mock::marketplace_nfts();
        let filters = FilterState {
            search: "zzz-no-such-nft".to_string(),
            ..Default::default()
        };
        assert!(apply(&items, &filters).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_collection() {
        let items = mock::marketplace_nfts();
        let filters = FilterState {
            search: "CYBER".to_string(),
            ..Default::default()
        };
        let out = apply(&items, &filters);
        assert!(!out.is_empty());
        assert!(out.iter().all(|n| {
            n.name.to_lowercase().contains("cyber") || n.collection.to_lowercase().contains("cyber")
        }));
    }

    #[test]
    fn gaming_category_returns_exactly_two_marketplace_items() {
        let items = mock::marketplace_nfts();
        let filters = FilterState {
            category: Some("Gaming".to_string()),
            ..Default::default()
        };
        let out = apply(&items, &filters);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|n| n.category == Category::Gaming));
    }

    #[test]
    fn price_range_is_inclusive_at_both_ends() {
        let items = vec![
            make_nft("a", Some("2.5"), Rarity::Common, "2024-01-01T00:00:00Z"),
            make_nft("b", Some("0.9"), Rarity::Common, "2024-01-02T00:00:00Z"),
            make_nft("c", Some("5.2"), Rarity::Common, "2024-01-03T00:00:00Z"),
            make_nft("d", Some("5"), Rarity::Common, "2024-01-04T00:00:00Z"),
        ];
        let filters = FilterState {
            price_range: Some("1-5".to_string()),
            sort: SortKey::PriceLowHigh,
            ..Default::default()
        };
        assert_eq!(ids(&apply(&items, &filters)), vec!["a", "d"]);
    }

    #[test]
    fn open_ended_price_range() {
        let items = vec![
            make_nft("a", Some("9.9"), Rarity::Common, "2024-01-01T00:00:00Z"),
            make_nft("b", Some("10"), Rarity::Common, "2024-01-02T00:00:00Z"),
            make_nft("c", Some("42.0"), Rarity::Common, "2024-01-03T00:00:00Z"),
        ];
        let filters = FilterState {
            price_range: Some("10+".to_string()),
            sort: SortKey::PriceLowHigh,
            ..Default::default()
        };
        assert_eq!(ids(&apply(&items, &filters)), vec!["b", "c"]);
    }

    #[test]
    fn malformed_range_token_excludes_everything_without_panicking() {
        let items = mock::marketplace_nfts();
        let filters = FilterState {
            price_range: Some("cheap".to_string()),
            ..Default::default()
        };
        assert!(apply(&items, &filters).is_empty());
    }

    #[test]
    fn malformed_item_price_is_excluded_and_sorts_last() {
        let items = vec![
            make_nft("bad", Some("n/a"), Rarity::Common, "2024-01-01T00:00:00Z"),
            make_nft("ok", Some("2.0"), Rarity::Common, "2024-01-02T00:00:00Z"),
            make_nft("unpriced", None, Rarity::Common, "2024-01-03T00:00:00Z"),
        ];

        let ranged = FilterState {
            price_range: Some("1-5".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&items, &ranged)), vec!["ok"]);

        let sorted = FilterState {
            sort: SortKey::PriceLowHigh,
            ..Default::default()
        };
        let out = apply(&items, &sorted);
        assert_eq!(out[0].id, "ok");
        // Unparsable prices order last, in original relative order.
        assert_eq!(ids(&out)[1..], ["bad", "unpriced"]);

        // Last in both directions.
        let reversed = FilterState {
            sort: SortKey::PriceHighLow,
            ..Default::default()
        };
        let out = apply(&items, &reversed);
        assert_eq!(out[0].id, "ok");
        assert_eq!(ids(&out)[1..], ["bad", "unpriced"]);
    }

    #[test]
    fn price_ascending_then_descending_is_exactly_reversed() {
        let items = vec![
            make_nft("a", Some("2.5"), Rarity::Common, "2024-01-01T00:00:00Z"),
            make_nft("b", Some("0.9"), Rarity::Common, "2024-01-02T00:00:00Z"),
            make_nft("c", Some("5.2"), Rarity::Common, "2024-01-03T00:00:00Z"),
        ];
        let asc = apply(
            &items,
            &FilterState {
                sort: SortKey::PriceLowHigh,
                ..Default::default()
            },
        );
        let mut desc = apply(
            &items,
            &FilterState {
                sort: SortKey::PriceHighLow,
                ..Default::default()
            },
        );
        desc.reverse();
        assert_eq!(ids(&asc), ids(&desc));
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let items = vec![
            make_nft("first", Some("1.0"), Rarity::Epic, "2024-01-01T00:00:00Z"),
            make_nft("second", Some("2.0"), Rarity::Epic, "2024-01-02T00:00:00Z"),
            make_nft("third", Some("3.0"), Rarity::Rare, "2024-01-03T00:00:00Z"),
        ];
        let out = apply(
            &items,
            &FilterState {
                sort: SortKey::Rarity,
                ..Default::default()
            },
        );
        // Both epics keep their original relative order ahead of the rare.
        assert_eq!(ids(&out), vec!["first", "second", "third"]);
    }

    #[test]
    fn rarity_sorts_legendary_first() {
        let items = mock::marketplace_nfts();
        let out = apply(
            &items,
            &FilterState {
                sort: SortKey::Rarity,
                ..Default::default()
            },
        );
        for pair in out.windows(2) {
            assert!(pair[0].rarity.rank() >= pair[1].rarity.rank());
        }
        assert_eq!(out[0].rarity, Rarity::Legendary);
    }

    #[test]
    fn popularity_without_data_is_a_stable_no_op() {
        let items = mock::marketplace_nfts();
        let out = apply(
            &items,
            &FilterState {
                sort: SortKey::Popular,
                ..Default::default()
            },
        );
        assert_eq!(ids(&out), ids(&items));
    }

    #[test]
    fn oldest_reverses_newest() {
        let items = mock::marketplace_nfts();
        let newest = apply(
            &items,
            &FilterState {
                sort: SortKey::Newest,
                ..Default::default()
            },
        );
        let mut oldest = apply(
            &items,
            &FilterState {
                sort: SortKey::Oldest,
                ..Default::default()
            },
        );
        oldest.reverse();
        assert_eq!(ids(&newest), ids(&oldest));
    }

    #[test]
    fn chips_exclude_search_and_sort() {
        let filters = FilterState {
            search: "cyber".to_string(),
            category: Some("Gaming".to_string()),
            price_range: Some("1-5".to_string()),
            sort: SortKey::PriceHighLow,
            ..Default::default()
        };
        let chips = filters.active_chips();
        assert_eq!(chips.len(), 2);
        assert_eq!(chips[0].field, FilterField::Category);
        assert_eq!(chips[0].label, "category: Gaming");
        assert_eq!(chips[1].field, FilterField::PriceRange);
    }

    #[test]
    fn clearing_one_chip_resets_only_that_field() {
        let mut filters = FilterState {
            category: Some("Gaming".to_string()),
            rarity: Some(Rarity::Epic),
            ..Default::default()
        };
        filters.clear_field(FilterField::Category);
        assert_eq!(filters.category, None);
        assert_eq!(filters.rarity, Some(Rarity::Epic));
    }

    #[test]
    fn clear_all_restores_the_default_state() {
        let mut filters = FilterState {
            search: "cyber".to_string(),
            category: Some("Gaming".to_string()),
            rarity: Some(Rarity::Epic),
            status: Some("active".to_string()),
            price_range: Some("1-5".to_string()),
            sort: SortKey::Rarity,
        };
        assert!(!filters.is_default());
        filters.clear_all();
        assert_eq!(filters, FilterState::default());
        assert!(filters.is_default());
    }

    #[test]
    fn price_range_parsing() {
        assert_eq!(
            "1-5".parse::<PriceRange>(),
            Ok(PriceRange {
                min: 1.0,
                max: Some(5.0)
            })
        );
        assert_eq!(
            "10+".parse::<PriceRange>(),
            Ok(PriceRange { min: 10.0, max: None })
        );
        assert!("".parse::<PriceRange>().is_err());
        assert!("abc".parse::<PriceRange>().is_err());
        assert!("5-1".parse::<PriceRange>().is_err());
        assert!("1-".parse::<PriceRange>().is_err());
    }

    #[test]
    fn sort_key_tokens_round_trip() {
        for (key, token, _) in SortKey::OPTIONS {
            assert_eq!(SortKey::from_token(token), key);
            assert_eq!(key.token(), token);
        }
        assert_eq!(SortKey::from_token("nonsense"), SortKey::Newest);
    }

    #[test]
    fn intent_status_and_category_filters_compose() {
        let items = mock::intents();
        let filters = FilterState {
            status: Some("active".to_string()),
            category: Some("Cross-Category".to_string()),
            ..Default::default()
        };
        let out = apply(&items, &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Gaming NFTs → Art NFTs");
    }
}
