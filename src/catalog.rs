//! Item catalog: typed records for every lootable object and its
//! recommended disposition.
//!
//! The catalog itself is a static table (see [`crate::data::items`]);
//! this module owns the record types, the closed enumerations they use,
//! and load-time validation. Records never change after construction.
//! Queries over them live in [`crate::query`].

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Item quality tier. Declaration order is the sort order:
/// `Common < Uncommon < Rare < Epic < Legendary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Lowercase data tag, as used in exports and CLI filters.
    pub fn tag(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Rarity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "common" => Ok(Rarity::Common),
            "uncommon" => Ok(Rarity::Uncommon),
            "rare" => Ok(Rarity::Rare),
            "epic" => Ok(Rarity::Epic),
            "legendary" => Ok(Rarity::Legendary),
            other => Err(Error::UnknownRarity(other.to_string())),
        }
    }
}

/// Recommended disposition for an item: keep it, sell it, or feed it
/// to the recycler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Keep,
    Sell,
    Recycle,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Keep, Action::Sell, Action::Recycle];

    pub fn tag(self) -> &'static str {
        match self {
            Action::Keep => "keep",
            Action::Sell => "sell",
            Action::Recycle => "recycle",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "keep" => Ok(Action::Keep),
            "sell" => Ok(Action::Sell),
            "recycle" => Ok(Action::Recycle),
            other => Err(Error::UnknownAction(other.to_string())),
        }
    }
}

/// Item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    ArcParts,
    QuestItems,
    CraftingMaterials,
    Recyclable,
    Consumables,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::ArcParts,
        Category::QuestItems,
        Category::CraftingMaterials,
        Category::Recyclable,
        Category::Consumables,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Category::ArcParts => "arc_parts",
            Category::QuestItems => "quest_items",
            Category::CraftingMaterials => "crafting_materials",
            Category::Recyclable => "recyclable",
            Category::Consumables => "consumables",
        }
    }

    /// Human-readable name for headers and filter menus.
    pub fn label(self) -> &'static str {
        match self {
            Category::ArcParts => "ARC Parts",
            Category::QuestItems => "Quest Items",
            Category::CraftingMaterials => "Crafting Materials",
            Category::Recyclable => "Recyclable",
            Category::Consumables => "Consumables",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "arc_parts" => Ok(Category::ArcParts),
            "quest_items" => Ok(Category::QuestItems),
            "crafting_materials" => Ok(Category::CraftingMaterials),
            "recyclable" => Ok(Category::Recyclable),
            "consumables" => Ok(Category::Consumables),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Stable unique id (snake_case of the display name).
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub action: Action,
    pub rarity: Rarity,
    /// Vendor value in credits.
    pub value: u32,
    /// Primary icon path, relative to the asset root.
    pub icon: &'static str,
    /// Materials produced when recycled (empty if not recyclable).
    pub recycles_into: &'static [&'static str],
    /// Upgrades and quests that consume this item.
    pub used_for: &'static [&'static str],
    /// Location tags where this item commonly spawns.
    pub location_types: &'static [&'static str],
}

/// Validated, immutable item collection. Input order is preserved and
/// serves as the tie-break order for stable sorts.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: &'static [Item],
}

impl Catalog {
    /// Wrap a record slice, rejecting duplicate ids.
    pub fn new(items: &'static [Item]) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for item in items {
            if !seen.insert(item.id) {
                return Err(Error::DuplicateItem(item.id.to_string()));
            }
        }
        tracing::debug!(count = items.len(), "catalog loaded");
        Ok(Self { items })
    }

    /// The generated built-in catalog. Its invariants are enforced by
    /// the generator; `tests/catalog_data.rs` re-checks them.
    pub fn builtin() -> Self {
        Self {
            items: crate::data::items::ITEMS,
        }
    }

    pub fn items(&self) -> &'static [Item] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&'static Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Item count per category, in `Category::ALL` order.
    pub fn category_counts(&self) -> [(Category, usize); 5] {
        Category::ALL.map(|cat| {
            let count = self.items.iter().filter(|i| i.category == cat).count();
            (cat, count)
        })
    }
}

/// Base materials the recycler produces. Some double as catalog items;
/// the rest only exist as recycler output.
pub const RECYCLE_MATERIALS: &[&str] = &[
    "Electrical Components",
    "Metal Parts",
    "Wires",
    "Battery",
    "Plastic Parts",
    "Rubber Parts",
    "Fabric",
    "Sensors",
    "Chemicals",
];

/// Items worth feeding to the recycler: recommended action is recycle,
/// or the item yields materials when recycled.
pub fn recyclable(items: &[Item]) -> Vec<&Item> {
    items
        .iter()
        .filter(|item| item.action == Action::Recycle || !item.recycles_into.is_empty())
        .collect()
}

/// Items that recycle into the given material (case-insensitive name match).
pub fn recycle_sources<'a>(items: &'a [Item], material: &str) -> Vec<&'a Item> {
    let needle = material.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.recycles_into
                .iter()
                .any(|m| m.to_lowercase() == needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_order() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Uncommon < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Legendary);
    }

    #[test]
    fn test_tag_round_trips() {
        for rarity in Rarity::ALL {
            assert_eq!(rarity.tag().parse::<Rarity>().unwrap(), rarity);
        }
        for action in Action::ALL {
            assert_eq!(action.tag().parse::<Action>().unwrap(), action);
        }
        for category in Category::ALL {
            assert_eq!(category.tag().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_tags_are_errors() {
        assert!("mythic".parse::<Rarity>().is_err());
        assert!("hoard".parse::<Action>().is_err());
        assert!("weapons".parse::<Category>().is_err());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        static DUPED: &[Item] = &[
            Item {
                id: "battery",
                name: "Battery",
                description: "",
                category: Category::CraftingMaterials,
                action: Action::Keep,
                rarity: Rarity::Common,
                value: 50,
                icon: "/items/battery.png",
                recycles_into: &[],
                used_for: &[],
                location_types: &[],
            },
            Item {
                id: "battery",
                name: "Battery (again)",
                description: "",
                category: Category::CraftingMaterials,
                action: Action::Keep,
                rarity: Rarity::Common,
                value: 50,
                icon: "/items/battery.png",
                recycles_into: &[],
                used_for: &[],
                location_types: &[],
            },
        ];
        assert!(matches!(
            Catalog::new(DUPED),
            Err(Error::DuplicateItem(id)) if id == "battery"
        ));
    }
}
