//! Workshop crafting recipes.
//!
//! Each recipe names its materials by display name; `recipes_using`
//! answers "is this material worth holding on to".

use crate::catalog::Rarity;
use std::fmt;

/// What kind of gear a recipe produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeCategory {
    Weapons,
    Armor,
    Consumables,
    Equipment,
}

impl fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecipeCategory::Weapons => "Weapons",
            RecipeCategory::Armor => "Armor",
            RecipeCategory::Consumables => "Consumables",
            RecipeCategory::Equipment => "Equipment",
        })
    }
}

/// One material line of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialLine {
    pub name: &'static str,
    pub quantity: u32,
}

/// One crafting recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: RecipeCategory,
    pub materials: &'static [MaterialLine],
    /// Display name of the crafted result, e.g. `"Railgun (Legendary)"`.
    pub output: &'static str,
    pub output_rarity: Rarity,
    /// Workshop station level required (1..=3).
    pub workshop_level: u8,
}

/// Recipes that consume the given material (case-insensitive name match).
pub fn recipes_using<'a>(recipes: &'a [Recipe], material: &str) -> Vec<&'a Recipe> {
    let needle = material.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| {
            recipe
                .materials
                .iter()
                .any(|line| line.name.to_lowercase() == needle)
        })
        .collect()
}

/// Recipes available at or below the given workshop level.
pub fn available_at_level(recipes: &'static [Recipe], level: u8) -> Vec<&'static Recipe> {
    recipes
        .iter()
        .filter(|recipe| recipe.workshop_level <= level)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    static RECIPES: &[Recipe] = &[
        Recipe {
            id: "basic_rifle",
            name: "Basic Assault Rifle",
            description: "",
            category: RecipeCategory::Weapons,
            materials: &[
                MaterialLine { name: "Metal Parts", quantity: 15 },
                MaterialLine { name: "Wires", quantity: 5 },
            ],
            output: "Assault Rifle (Common)",
            output_rarity: Rarity::Common,
            workshop_level: 1,
        },
        Recipe {
            id: "railgun",
            name: "Railgun",
            description: "",
            category: RecipeCategory::Weapons,
            materials: &[MaterialLine { name: "ARC Alloy", quantity: 8 }],
            output: "Railgun (Legendary)",
            output_rarity: Rarity::Legendary,
            workshop_level: 3,
        },
    ];

    #[test]
    fn test_recipes_using() {
        let hits = recipes_using(RECIPES, "arc alloy");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "railgun");
        assert!(recipes_using(RECIPES, "Rubber Parts").is_empty());
    }

    #[test]
    fn test_available_at_level() {
        assert_eq!(available_at_level(RECIPES, 1).len(), 1);
        assert_eq!(available_at_level(RECIPES, 3).len(), 2);
    }
}
