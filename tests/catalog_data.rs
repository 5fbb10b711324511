//! Invariant checks over the built-in data tables: these re-verify what
//! the generators enforce, so hand edits cannot rot silently.

use arc_companion::catalog::{Catalog, RECYCLE_MATERIALS};
use arc_companion::data::{items, maps, quests, recipes, skills};
use arc_companion::skills as skill_defs;
use std::collections::HashSet;

fn known_material_names() -> HashSet<String> {
    let mut names: HashSet<String> = items::ITEMS.iter().map(|i| i.name.to_lowercase()).collect();
    names.extend(RECYCLE_MATERIALS.iter().map(|m| m.to_lowercase()));
    names
}

#[test]
fn catalog_validates() {
    let catalog = Catalog::new(items::ITEMS).expect("builtin catalog must validate");
    assert_eq!(catalog.len(), items::ITEMS.len());
}

#[test]
fn catalog_covers_every_enum_tag() {
    use arc_companion::catalog::{Action, Category, Rarity};
    for category in Category::ALL {
        assert!(
            items::ITEMS.iter().any(|i| i.category == category),
            "no item in category {category}"
        );
    }
    for action in Action::ALL {
        assert!(
            items::ITEMS.iter().any(|i| i.action == action),
            "no item with action {action}"
        );
    }
    for rarity in Rarity::ALL {
        assert!(
            items::ITEMS.iter().any(|i| i.rarity == rarity),
            "no item with rarity {rarity}"
        );
    }
}

#[test]
fn category_counts_sum_to_catalog_size() {
    let catalog = Catalog::builtin();
    let total: usize = catalog.category_counts().iter().map(|(_, n)| n).sum();
    assert_eq!(total, catalog.len());
}

#[test]
fn recycle_outputs_are_known_materials() {
    let known = known_material_names();
    for item in items::ITEMS {
        for material in item.recycles_into {
            assert!(
                known.contains(&material.to_lowercase()),
                "{} recycles into unknown material {material:?}",
                item.id
            );
        }
    }
}

#[test]
fn skill_table_validates() {
    skill_defs::validate(skills::SKILLS).expect("builtin skill table must validate");
}

#[test]
fn every_tree_is_populated_and_rowed() {
    for tree in skill_defs::Tree::ALL {
        let members = skill_defs::in_tree(skills::SKILLS, tree);
        assert!(members.len() >= 10, "{tree} has too few skills");

        let rows = skill_defs::tree_rows(skills::SKILLS, tree);
        assert!(!rows.is_empty());
        let in_rows: usize = rows.iter().map(|r| r.slots().count()).sum();
        assert_eq!(in_rows, members.len(), "{tree} rows lost a skill");
        // Rows come back in tier order.
        for pair in rows.windows(2) {
            assert!(pair[0].tier < pair[1].tier);
        }
    }
}

#[test]
fn quest_requirements_resolve() {
    let known = known_material_names();
    for quest in quests::QUESTS {
        assert!(!quest.required_items.is_empty(), "{} needs items", quest.id);
        for req in quest.required_items {
            assert!(
                known.contains(&req.item.to_lowercase()),
                "{} requires unknown item {:?}",
                quest.id,
                req.item
            );
            assert!(req.quantity > 0);
        }
    }
}

#[test]
fn recipe_materials_resolve() {
    let known = known_material_names();
    for recipe in recipes::RECIPES {
        assert!(!recipe.materials.is_empty(), "{} needs materials", recipe.id);
        for line in recipe.materials {
            assert!(
                known.contains(&line.name.to_lowercase()),
                "{} uses unknown material {:?}",
                recipe.id,
                line.name
            );
            assert!(line.quantity > 0);
        }
        assert!((1..=3).contains(&recipe.workshop_level));
    }
}

#[test]
fn map_best_items_resolve() {
    let known = known_material_names();
    for area in maps::MAP_AREAS {
        assert!(!area.key_locations.is_empty());
        for best in area.best_items {
            assert!(
                known.contains(&best.to_lowercase()),
                "{} lists unknown best item {best:?}",
                area.id
            );
        }
    }
}
