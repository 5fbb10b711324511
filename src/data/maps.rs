//! Raid map areas.

use crate::maps::{KeyLocation, MapArea};
use crate::quests::Difficulty;

pub static MAP_AREAS: &[MapArea] = &[
    MapArea {
        id: "dam_battlegrounds",
        name: "Dam Battlegrounds",
        description: "Large industrial map with excellent farming routes for batteries and gears. Hydroponic Dome on northwest is a hotspot for Industrial Batteries.",
        difficulty: Difficulty::Medium,
        size: "Large",
        players: "32-48",
        extractions: 4,
        key_locations: &[
            KeyLocation {
                name: "Hydroponic Dome Complex",
                tag: "Industrial",
                detail: "Industrial Batteries, high-tier components",
            },
            KeyLocation {
                name: "Control Tower",
                tag: "Military",
                detail: "Weapon caches, ARC parts",
            },
            KeyLocation {
                name: "Power Generation Complex",
                tag: "Industrial",
                detail: "Electrical Components, batteries",
            },
            KeyLocation {
                name: "Research & Administration",
                tag: "Tech",
                detail: "Sensors, advanced electronics",
            },
        ],
        best_items: &["Industrial Battery", "Rusted Gears", "Battery"],
    },
    MapArea {
        id: "spaceport",
        name: "Spaceport",
        description: "Industrial areas concentrated in map center. Great for Rusted Gears and high-tier loot. Residential areas have good Dog Collar spawn rates.",
        difficulty: Difficulty::Hard,
        size: "Large",
        players: "32-48",
        extractions: 5,
        key_locations: &[
            KeyLocation {
                name: "Rocket Assembly",
                tag: "Industrial",
                detail: "Industrial Batteries, ARC tech",
            },
            KeyLocation {
                name: "Terminal Buildings",
                tag: "Commercial",
                detail: "General loot, quest items",
            },
            KeyLocation {
                name: "Residential Quarter",
                tag: "Residential",
                detail: "Dog Collars, household items",
            },
            KeyLocation {
                name: "Launch Platform",
                tag: "Military",
                detail: "Weapon caches, ammunition",
            },
        ],
        best_items: &["Dog Collar", "Rusted Gears"],
    },
    MapArea {
        id: "buried_city",
        name: "Buried City",
        description: "Best map for Rusted Gears farming at Marano Station car park. Multiple residential areas excellent for Dog Collars.",
        difficulty: Difficulty::Medium,
        size: "Medium",
        players: "24-32",
        extractions: 3,
        key_locations: &[
            KeyLocation {
                name: "Marano Station Car Park",
                tag: "Urban",
                detail: "Rusted Gears (best farming route)",
            },
            KeyLocation {
                name: "Grandioso Apartments",
                tag: "Residential",
                detail: "Dog Collars, household items",
            },
            KeyLocation {
                name: "Red Tower",
                tag: "Residential",
                detail: "Dog Collars, consumables",
            },
            KeyLocation {
                name: "Pharmacy",
                tag: "Medical",
                detail: "Antiseptic, medical supplies",
            },
        ],
        best_items: &["Rusted Gears", "Dog Collar", "Encrypted Data Drive"],
    },
    MapArea {
        id: "blue_gate",
        name: "Blue Gate",
        description: "Smallest map, perfect for beginners and quick loot runs. Warehouse Complex underground parking is the best spot for Rusted Gears with 40+ searchable vehicles.",
        difficulty: Difficulty::Easy,
        size: "Small",
        players: "16-24",
        extractions: 2,
        key_locations: &[
            KeyLocation {
                name: "Warehouse Complex",
                tag: "Industrial",
                detail: "Rusted Gears (40+ vehicles in underground parking), Industrial Batteries",
            },
            KeyLocation {
                name: "Raider's Refuge",
                tag: "Residential",
                detail: "Dog Collars, basic supplies",
            },
            KeyLocation {
                name: "Gate Control Room",
                tag: "Military",
                detail: "Gate Security Codes, event loot",
            },
            KeyLocation {
                name: "Village",
                tag: "Residential",
                detail: "General loot",
            },
        ],
        best_items: &["Rusted Gears", "Gate Security Code"],
    },
];

/// Look up a map area by id, tolerating hyphenated slugs.
pub fn get_map_area(slug: &str) -> Option<&'static MapArea> {
    let normalized = slug.trim().to_lowercase().replace('-', "_");
    MAP_AREAS.iter().find(|area| area.id == normalized)
}
