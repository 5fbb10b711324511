//! Tests for the item query engine: filter semantics, sort orders,
//! stability, and the defensive handling of unrecognized filter tags.

use arc_companion::catalog::{Action, Category, Item, Rarity};
use arc_companion::query::{self, ItemQuery, Selector, SortKey};

fn item(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: Category,
    action: Action,
    rarity: Rarity,
    value: u32,
) -> Item {
    Item {
        id,
        name,
        description,
        category,
        action,
        rarity,
        value,
        icon: "",
        recycles_into: &[],
        used_for: &[],
        location_types: &[],
    }
}

fn fixture() -> Vec<Item> {
    vec![
        item(
            "battery",
            "Battery",
            "Standard power cell.",
            Category::CraftingMaterials,
            Action::Keep,
            Rarity::Common,
            50,
        ),
        item(
            "arc_alloy",
            "ARC Alloy",
            "Refined alloy from destroyed ARC machines.",
            Category::CraftingMaterials,
            Action::Keep,
            Rarity::Rare,
            1000,
        ),
        item(
            "rusted_gears",
            "Rusted Gears",
            "Corroded gearbox internals.",
            Category::Recyclable,
            Action::Recycle,
            Rarity::Common,
            80,
        ),
        item(
            "queen_reactor",
            "Queen Reactor",
            "Power plant of a Queen-class ARC.",
            Category::ArcParts,
            Action::Keep,
            Rarity::Legendary,
            5000,
        ),
        item(
            "dog_collar",
            "Dog Collar",
            "Trinket, pure credit item.",
            Category::CraftingMaterials,
            Action::Sell,
            Rarity::Uncommon,
            350,
        ),
        // Same value as dog_collar, later in catalog order: exercises
        // the stable tie-break.
        item(
            "radio",
            "Radio",
            "Dead consumer radio.",
            Category::Recyclable,
            Action::Recycle,
            Rarity::Uncommon,
            350,
        ),
    ]
}

fn names(results: &[&Item]) -> Vec<&'static str> {
    results.iter().map(|i| i.name).collect()
}

#[test]
fn open_query_returns_everything_name_sorted() {
    let items = fixture();
    let results = query::run(&items, &ItemQuery::default());
    assert_eq!(
        names(&results),
        vec![
            "ARC Alloy",
            "Battery",
            "Dog Collar",
            "Queen Reactor",
            "Radio",
            "Rusted Gears",
        ]
    );
}

#[test]
fn result_is_subset_of_input() {
    let items = fixture();
    let query = ItemQuery::from_raw("a", "all", "keep", "all", "value");
    let results = query::run(&items, &query);
    for result in results {
        assert!(items.iter().any(|i| i == result));
    }
}

#[test]
fn query_is_pure_and_idempotent() {
    let items = fixture();
    let before: Vec<Item> = items.clone();
    let query = ItemQuery::from_raw("arc", "all", "all", "all", "rarity");
    let first = query::run(&items, &query);
    let second = query::run(&items, &query);
    assert_eq!(first, second);
    // Input order untouched.
    assert_eq!(items, before);
}

#[test]
fn search_is_case_insensitive() {
    let items = fixture();
    let upper = query::run(&items, &ItemQuery::from_raw("ARC", "all", "all", "all", "name"));
    let lower = query::run(&items, &ItemQuery::from_raw("arc", "all", "all", "all", "name"));
    assert_eq!(upper, lower);
    assert!(!upper.is_empty());
}

#[test]
fn search_covers_name_and_description() {
    let items = fixture();
    // "gearbox" appears only in Rusted Gears' description.
    let results = query::run(&items, &ItemQuery::from_raw("gearbox", "all", "all", "all", "name"));
    assert_eq!(names(&results), vec!["Rusted Gears"]);
}

#[test]
fn filters_are_anded() {
    let items = fixture();
    let combined = query::run(
        &items,
        &ItemQuery::from_raw("", "crafting_materials", "keep", "all", "name"),
    );
    let by_category = query::run(
        &items,
        &ItemQuery::from_raw("", "crafting_materials", "all", "all", "name"),
    );
    let by_action = query::run(&items, &ItemQuery::from_raw("", "all", "keep", "all", "name"));

    for item in &combined {
        assert!(by_category.contains(item));
        assert!(by_action.contains(item));
    }
    // And nothing in both individual results is missing from the
    // combined one.
    for item in &by_category {
        if by_action.contains(item) {
            assert!(combined.contains(item));
        }
    }
}

#[test]
fn category_filter_narrows_all() {
    let items = fixture();
    let all = query::run(&items, &ItemQuery::from_raw("", "all", "all", "all", "name"));
    let narrowed = query::run(&items, &ItemQuery::from_raw("", "recyclable", "all", "all", "name"));
    assert!(narrowed.len() < all.len());
    for item in &narrowed {
        assert!(all.contains(item));
        assert_eq!(item.category, Category::Recyclable);
    }
}

#[test]
fn value_sort_descends_with_stable_ties() {
    let items = fixture();
    let results = query::run(&items, &ItemQuery::from_raw("", "all", "all", "all", "value"));
    for pair in results.windows(2) {
        assert!(pair[0].value >= pair[1].value);
    }
    // Dog Collar and Radio share a value; catalog order breaks the tie.
    let dog = results.iter().position(|i| i.id == "dog_collar").unwrap();
    let radio = results.iter().position(|i| i.id == "radio").unwrap();
    assert!(dog < radio);
}

#[test]
fn rarity_sort_descends_with_stable_ties() {
    let items = fixture();
    let results = query::run(&items, &ItemQuery::from_raw("", "all", "all", "all", "rarity"));
    for pair in results.windows(2) {
        assert!(pair[0].rarity >= pair[1].rarity);
    }
    assert_eq!(results[0].rarity, Rarity::Legendary);
    // Battery and Rusted Gears are both common; Battery comes first in
    // the catalog.
    let battery = results.iter().position(|i| i.id == "battery").unwrap();
    let gears = results.iter().position(|i| i.id == "rusted_gears").unwrap();
    assert!(battery < gears);
}

#[test]
fn empty_input_yields_empty_output() {
    let empty: Vec<Item> = Vec::new();
    let query = ItemQuery::from_raw("anything", "arc_parts", "keep", "epic", "value");
    assert!(query::run(&empty, &query).is_empty());
}

#[test]
fn unmatched_search_yields_empty_output() {
    let items = fixture();
    let query = ItemQuery::from_raw("zzz_no_such_item", "all", "all", "all", "name");
    assert!(query::run(&items, &query).is_empty());
}

#[test]
fn unrecognized_filter_tag_yields_empty_not_panic() {
    let items = fixture();
    let query = ItemQuery::from_raw("", "weapons", "all", "all", "name");
    assert!(query::run(&items, &query).is_empty());
    assert_eq!(query.category, Selector::Unmatched);

    let query = ItemQuery::from_raw("", "all", "hoard", "mythic", "name");
    assert!(query::run(&items, &query).is_empty());
}

#[test]
fn worked_example_from_the_cheat_sheet() {
    // Two-item scenario: value sort puts ARC Alloy first; searching
    // "battery" finds exactly Battery; a quest_items filter matches
    // neither.
    let items = vec![
        item(
            "battery",
            "Battery",
            "",
            Category::CraftingMaterials,
            Action::Keep,
            Rarity::Common,
            50,
        ),
        item(
            "arc_alloy",
            "ARC Alloy",
            "",
            Category::CraftingMaterials,
            Action::Keep,
            Rarity::Rare,
            1000,
        ),
    ];

    let by_value = query::run(&items, &ItemQuery::from_raw("", "all", "all", "all", "value"));
    assert_eq!(names(&by_value), vec!["ARC Alloy", "Battery"]);

    let by_search = query::run(&items, &ItemQuery::from_raw("battery", "all", "all", "all", "name"));
    assert_eq!(names(&by_search), vec!["Battery"]);

    let by_cat = query::run(&items, &ItemQuery::from_raw("", "quest_items", "all", "all", "name"));
    assert!(by_cat.is_empty());
}

#[test]
fn builtin_catalog_queries() {
    let catalog = arc_companion::catalog::Catalog::builtin();
    let query = ItemQuery {
        search: String::new(),
        category: Selector::Is(Category::ArcParts),
        action: Selector::All,
        rarity: Selector::All,
        sort: SortKey::Value,
    };
    let results = query::run(catalog.items(), &query);
    assert!(!results.is_empty());
    for item in &results {
        assert_eq!(item.category, Category::ArcParts);
    }
    for pair in results.windows(2) {
        assert!(pair[0].value >= pair[1].value);
    }
}
