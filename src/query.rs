//! Pure filter/sort queries over the item catalog.
//!
//! `run` takes the full record slice and a query, and returns a fresh,
//! ordered subset. It never mutates its input and has no side effects;
//! the UI (or CLI) owns the query's lifecycle and calls back in on every
//! filter change.

use crate::catalog::{Action, Category, Item, Rarity};
use std::str::FromStr;

/// One filter dimension: everything, one recognized tag, or an
/// unrecognized tag that matches nothing. Unrecognized user input
/// deliberately yields an empty result instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selector<T> {
    #[default]
    All,
    Is(T),
    Unmatched,
}

impl<T: FromStr + Copy + PartialEq> Selector<T> {
    /// Parse a filter string. `"all"` (any case) disables the filter.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return Selector::All;
        }
        match raw.parse::<T>() {
            Ok(value) => Selector::Is(value),
            Err(_) => Selector::Unmatched,
        }
    }

    fn admits(&self, value: T) -> bool {
        match self {
            Selector::All => true,
            Selector::Is(want) => *want == value,
            Selector::Unmatched => false,
        }
    }
}

/// Sort key for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Case-insensitive name, ascending.
    #[default]
    Name,
    /// Vendor value, descending.
    Value,
    /// Rarity tier, descending (legendary first).
    Rarity,
}

impl SortKey {
    /// Parse a sort key string, falling back to name order.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "value" => SortKey::Value,
            "rarity" => SortKey::Rarity,
            _ => SortKey::Name,
        }
    }
}

/// A full item query. `Default` is the open query: no filters, name order.
#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    /// Case-insensitive substring matched against name and description.
    pub search: String,
    pub category: Selector<Category>,
    pub action: Selector<Action>,
    pub rarity: Selector<Rarity>,
    pub sort: SortKey,
}

impl ItemQuery {
    /// Build a query from raw filter strings, as they arrive from a
    /// search box or CLI flags.
    pub fn from_raw(search: &str, category: &str, action: &str, rarity: &str, sort: &str) -> Self {
        Self {
            search: search.to_string(),
            category: Selector::parse(category),
            action: Selector::parse(action),
            rarity: Selector::parse(rarity),
            sort: SortKey::parse(sort),
        }
    }
}

/// Run a query: filter with AND semantics, then sort the matches.
///
/// Sorting is stable, so equal keys keep their catalog order. The input
/// slice is untouched; the returned `Vec` is freshly allocated.
pub fn run<'a>(items: &'a [Item], query: &ItemQuery) -> Vec<&'a Item> {
    let needle = query.search.trim().to_lowercase();
    let mut matched: Vec<&Item> = items
        .iter()
        .filter(|item| matches_search(item, &needle))
        .filter(|item| query.category.admits(item.category))
        .filter(|item| query.action.admits(item.action))
        .filter(|item| query.rarity.admits(item.rarity))
        .collect();

    match query.sort {
        SortKey::Name => matched.sort_by_cached_key(|item| item.name.to_lowercase()),
        SortKey::Value => matched.sort_by(|a, b| b.value.cmp(&a.value)),
        SortKey::Rarity => matched.sort_by(|a, b| b.rarity.cmp(&a.rarity)),
    }
    matched
}

fn matches_search(item: &Item, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.name.to_lowercase().contains(needle) || item.description.to_lowercase().contains(needle)
}
