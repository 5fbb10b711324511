//! Tests for the cross-reference lookups: item → quests, material →
//! recipes, item → maps, material → recycle sources.

use arc_companion::catalog::{recycle_sources, Catalog};
use arc_companion::data::{items, maps, quests, recipes};
use arc_companion::maps::areas_with_item;
use arc_companion::quests::quests_requiring;
use arc_companion::workshop::{available_at_level, recipes_using};

#[test]
fn arc_alloy_is_wanted_everywhere() {
    let needing = quests_requiring(quests::QUESTS, "ARC Alloy");
    assert!(needing.iter().any(|q| q.id == "workshop_upgrade_2"));
    assert!(needing.iter().any(|q| q.id == "workshop_upgrade_3"));

    let consuming = recipes_using(recipes::RECIPES, "ARC Alloy");
    assert!(consuming.iter().any(|r| r.id == "railgun"));
    assert!(consuming.iter().any(|r| r.id == "arc_armor"));
}

#[test]
fn lookups_are_case_insensitive() {
    assert_eq!(
        quests_requiring(quests::QUESTS, "battery").len(),
        quests_requiring(quests::QUESTS, "BATTERY").len()
    );
    assert_eq!(
        recipes_using(recipes::RECIPES, "fabric").len(),
        recipes_using(recipes::RECIPES, "Fabric").len()
    );
}

#[test]
fn unknown_names_yield_empty() {
    assert!(quests_requiring(quests::QUESTS, "Hearthstone").is_empty());
    assert!(recipes_using(recipes::RECIPES, "Hearthstone").is_empty());
    assert!(areas_with_item(maps::MAP_AREAS, "Hearthstone").is_empty());
}

#[test]
fn rusted_gears_farm_routes() {
    let areas = areas_with_item(maps::MAP_AREAS, "Rusted Gears");
    // Every map currently advertises a gears route.
    assert_eq!(areas.len(), maps::MAP_AREAS.len());
    assert!(areas.iter().any(|a| a.id == "buried_city"));
}

#[test]
fn map_slugs_resolve_with_either_separator() {
    let hyphen = maps::get_map_area("buried-city").expect("hyphen slug");
    let underscore = maps::get_map_area("buried_city").expect("underscore slug");
    assert_eq!(hyphen.id, underscore.id);
    assert!(maps::get_map_area("atoll").is_none());
}

#[test]
fn metal_parts_have_recycle_sources() {
    let catalog = Catalog::builtin();
    let sources = recycle_sources(catalog.items(), "Metal Parts");
    assert!(sources.iter().any(|i| i.id == "rusted_gears"));
    assert!(sources.iter().any(|i| i.id == "arc_performance_steel"));
    // Sources must actually produce the material.
    for source in sources {
        assert!(source
            .recycles_into
            .iter()
            .any(|m| m.eq_ignore_ascii_case("Metal Parts")));
    }
}

#[test]
fn workshop_levels_gate_recipes() {
    let level_1 = available_at_level(recipes::RECIPES, 1);
    let level_3 = available_at_level(recipes::RECIPES, 3);
    assert!(!level_1.is_empty());
    assert!(level_1.len() < level_3.len());
    assert_eq!(level_3.len(), recipes::RECIPES.len());
    assert!(level_1.iter().all(|r| r.workshop_level == 1));
}

#[test]
fn item_detail_cross_references_line_up() {
    // The Rocketeer Driver card should reach the explosive workshop
    // quest and the rocket launcher recipe through its display name.
    let item = items::get_item("rocketeer_driver").unwrap();
    assert!(quests_requiring(quests::QUESTS, item.name)
        .iter()
        .any(|q| q.id == "explosive_workshop"));
    assert!(recipes_using(recipes::RECIPES, item.name)
        .iter()
        .any(|r| r.id == "rocket_launcher"));
}
