//! Workshop crafting recipes.

use crate::catalog::Rarity;
use crate::workshop::{MaterialLine, Recipe, RecipeCategory};

pub static RECIPES: &[Recipe] = &[
    Recipe {
        id: "basic_rifle",
        name: "Basic Assault Rifle",
        description: "Standard assault rifle with balanced stats. Good for beginners.",
        category: RecipeCategory::Weapons,
        materials: &[
            MaterialLine { name: "Metal Parts", quantity: 15 },
            MaterialLine { name: "Steel Spring", quantity: 3 },
            MaterialLine { name: "Wires", quantity: 5 },
        ],
        output: "Assault Rifle (Common)",
        output_rarity: Rarity::Common,
        workshop_level: 1,
    },
    Recipe {
        id: "advanced_rifle",
        name: "Advanced Assault Rifle",
        description: "Enhanced assault rifle with improved accuracy and damage.",
        category: RecipeCategory::Weapons,
        materials: &[
            MaterialLine { name: "ARC Alloy", quantity: 5 },
            MaterialLine { name: "Advanced Electrical Components", quantity: 3 },
            MaterialLine { name: "Steel Spring", quantity: 5 },
        ],
        output: "Assault Rifle (Rare)",
        output_rarity: Rarity::Rare,
        workshop_level: 2,
    },
    Recipe {
        id: "energy_rifle",
        name: "Energy Rifle",
        description: "ARC-derived energy weapon. Ignores conventional armor.",
        category: RecipeCategory::Weapons,
        materials: &[
            MaterialLine { name: "Magnetic Accelerator", quantity: 2 },
            MaterialLine { name: "Advanced Electrical Components", quantity: 5 },
            MaterialLine { name: "Battery", quantity: 8 },
        ],
        output: "Energy Rifle (Epic)",
        output_rarity: Rarity::Epic,
        workshop_level: 2,
    },
    Recipe {
        id: "railgun",
        name: "Railgun",
        description: "The endgame. One shot, one downed Bastion.",
        category: RecipeCategory::Weapons,
        materials: &[
            MaterialLine { name: "Magnetic Accelerator", quantity: 3 },
            MaterialLine { name: "Exodus Module", quantity: 2 },
            MaterialLine { name: "ARC Alloy", quantity: 8 },
        ],
        output: "Railgun (Legendary)",
        output_rarity: Rarity::Legendary,
        workshop_level: 3,
    },
    Recipe {
        id: "rocket_launcher",
        name: "Rocket Launcher",
        description: "Heavy explosive weapon for dealing with groups and vehicles.",
        category: RecipeCategory::Weapons,
        materials: &[
            MaterialLine { name: "Rocketeer Driver", quantity: 2 },
            MaterialLine { name: "Explosive Mixture", quantity: 5 },
            MaterialLine { name: "Metal Parts", quantity: 20 },
        ],
        output: "Rocket Launcher (Epic)",
        output_rarity: Rarity::Epic,
        workshop_level: 2,
    },
    Recipe {
        id: "basic_armor",
        name: "Basic Tactical Vest",
        description: "Standard protective vest offering basic damage reduction.",
        category: RecipeCategory::Armor,
        materials: &[
            MaterialLine { name: "Fabric", quantity: 20 },
            MaterialLine { name: "Metal Parts", quantity: 10 },
            MaterialLine { name: "Rubber Parts", quantity: 5 },
        ],
        output: "Tactical Vest (Common)",
        output_rarity: Rarity::Common,
        workshop_level: 1,
    },
    Recipe {
        id: "advanced_armor",
        name: "Advanced Combat Armor",
        description: "Enhanced armor with improved protection and mobility.",
        category: RecipeCategory::Armor,
        materials: &[
            MaterialLine { name: "Fabric", quantity: 15 },
            MaterialLine { name: "ARC Alloy", quantity: 8 },
            MaterialLine { name: "Rubber Parts", quantity: 10 },
        ],
        output: "Combat Armor (Rare)",
        output_rarity: Rarity::Rare,
        workshop_level: 2,
    },
    Recipe {
        id: "arc_armor",
        name: "ARC Composite Armor",
        description: "Top-tier armor incorporating ARC technology for maximum protection.",
        category: RecipeCategory::Armor,
        materials: &[
            MaterialLine { name: "ARC Alloy", quantity: 15 },
            MaterialLine { name: "Exodus Module", quantity: 3 },
            MaterialLine { name: "Fabric", quantity: 20 },
        ],
        output: "ARC Armor (Legendary)",
        output_rarity: Rarity::Legendary,
        workshop_level: 3,
    },
    Recipe {
        id: "medkit",
        name: "Medical Kit",
        description: "Restores health over time. Essential for survival.",
        category: RecipeCategory::Consumables,
        materials: &[
            MaterialLine { name: "Antiseptic", quantity: 2 },
            MaterialLine { name: "Fabric", quantity: 5 },
            MaterialLine { name: "Syringe", quantity: 1 },
        ],
        output: "Medical Kit x3",
        output_rarity: Rarity::Common,
        workshop_level: 1,
    },
    Recipe {
        id: "stim",
        name: "Combat Stimulant",
        description: "Instantly restores health and provides temporary damage boost.",
        category: RecipeCategory::Consumables,
        materials: &[
            MaterialLine { name: "Antiseptic", quantity: 3 },
            MaterialLine { name: "Syringe", quantity: 2 },
            MaterialLine { name: "Advanced Electrical Components", quantity: 1 },
        ],
        output: "Combat Stim x2",
        output_rarity: Rarity::Rare,
        workshop_level: 2,
    },
    Recipe {
        id: "recon_drone",
        name: "Reconnaissance Drone",
        description: "Deployable drone for scouting and marking enemies.",
        category: RecipeCategory::Equipment,
        materials: &[
            MaterialLine { name: "ARC Motion Core", quantity: 1 },
            MaterialLine { name: "Sensors", quantity: 5 },
            MaterialLine { name: "Battery", quantity: 3 },
        ],
        output: "Recon Drone",
        output_rarity: Rarity::Rare,
        workshop_level: 2,
    },
    Recipe {
        id: "trap",
        name: "Proximity Mine",
        description: "Explosive trap that detonates when enemies approach.",
        category: RecipeCategory::Equipment,
        materials: &[
            MaterialLine { name: "Explosive Mixture", quantity: 3 },
            MaterialLine { name: "Sensors", quantity: 2 },
            MaterialLine { name: "Wires", quantity: 5 },
        ],
        output: "Proximity Mine x2",
        output_rarity: Rarity::Rare,
        workshop_level: 2,
    },
];
