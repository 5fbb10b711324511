//! Raid map reference: areas, key locations, and what farms well where.

use crate::quests::Difficulty;

/// A named point of interest within a map area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLocation {
    pub name: &'static str,
    /// Short zone tag: Industrial, Military, Residential, …
    pub tag: &'static str,
    /// What to expect there.
    pub detail: &'static str,
}

/// One raid map area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapArea {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub size: &'static str,
    /// Player count range, e.g. `"32-48"`.
    pub players: &'static str,
    pub extractions: u8,
    pub key_locations: &'static [KeyLocation],
    /// Display names of items this map farms best.
    pub best_items: &'static [&'static str],
}

/// Map areas where the given item farms well. Matches case-insensitive
/// substrings over best-item names and key-location details.
pub fn areas_with_item<'a>(areas: &'a [MapArea], item_name: &str) -> Vec<&'a MapArea> {
    let needle = item_name.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    areas
        .iter()
        .filter(|area| {
            area.best_items
                .iter()
                .any(|name| name.to_lowercase().contains(&needle))
                || area
                    .key_locations
                    .iter()
                    .any(|loc| loc.detail.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    static AREAS: &[MapArea] = &[MapArea {
        id: "buried_city",
        name: "Buried City",
        description: "",
        difficulty: Difficulty::Medium,
        size: "Medium",
        players: "24-32",
        extractions: 3,
        key_locations: &[KeyLocation {
            name: "Marano Station Car Park",
            tag: "Urban",
            detail: "Rusted Gears (best farming route)",
        }],
        best_items: &["Dog Collars", "Rusted Gears"],
    }];

    #[test]
    fn test_areas_with_item() {
        assert_eq!(areas_with_item(AREAS, "rusted gears").len(), 1);
        assert_eq!(areas_with_item(AREAS, "dog collar").len(), 1);
        assert!(areas_with_item(AREAS, "exodus module").is_empty());
        assert!(areas_with_item(AREAS, "").is_empty());
    }
}
