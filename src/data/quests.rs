//! Hideout and crafting progression quests.

use crate::quests::{Difficulty, Quest, QuestCategory, Requirement};

pub static QUESTS: &[Quest] = &[
    Quest {
        id: "medical_station",
        name: "Medical Station Setup",
        description: "Establish a basic medical facility in your hideout to craft healing items and treat injuries.",
        category: QuestCategory::Hideout,
        difficulty: Difficulty::Easy,
        required_items: &[
            Requirement { item: "Antiseptic", quantity: 3 },
            Requirement { item: "Syringe", quantity: 5 },
            Requirement { item: "Fabric", quantity: 10 },
        ],
        rewards: &["Medical Station Level 1", "500 Credits", "First Aid Kit x3"],
    },
    Quest {
        id: "power_grid",
        name: "Power Grid Installation",
        description: "Install a power generation system to enable advanced crafting stations and lighting.",
        category: QuestCategory::Hideout,
        difficulty: Difficulty::Medium,
        required_items: &[
            Requirement { item: "Power Rod", quantity: 2 },
            Requirement { item: "Battery", quantity: 5 },
            Requirement { item: "Wires", quantity: 15 },
            Requirement { item: "Electrical Components", quantity: 8 },
        ],
        rewards: &["Generator Level 1", "800 Credits", "Electrical Components x10"],
    },
    Quest {
        id: "water_system",
        name: "Water Purification System",
        description: "Set up a water purification system to provide clean water for your hideout.",
        category: QuestCategory::Hideout,
        difficulty: Difficulty::Medium,
        required_items: &[
            Requirement { item: "Water Pump", quantity: 1 },
            Requirement { item: "Water Filter", quantity: 3 },
            Requirement { item: "Metal Parts", quantity: 12 },
        ],
        rewards: &["Water Station", "600 Credits", "Clean Water x10"],
    },
    Quest {
        id: "workshop_upgrade_1",
        name: "Workshop Upgrade Level 1",
        description: "Upgrade your workshop to unlock basic weapon crafting and modifications.",
        category: QuestCategory::Crafting,
        difficulty: Difficulty::Easy,
        required_items: &[
            Requirement { item: "Metal Parts", quantity: 20 },
            Requirement { item: "Steel Spring", quantity: 5 },
            Requirement { item: "Wires", quantity: 10 },
        ],
        rewards: &["Workshop Level 1", "Basic Weapon Crafting", "400 Credits"],
    },
    Quest {
        id: "workshop_upgrade_2",
        name: "Workshop Upgrade Level 2",
        description: "Unlock advanced weapon crafting including energy weapons and modifications.",
        category: QuestCategory::Crafting,
        difficulty: Difficulty::Medium,
        required_items: &[
            Requirement { item: "ARC Alloy", quantity: 5 },
            Requirement { item: "Advanced Electrical Components", quantity: 8 },
            Requirement { item: "Magnetic Accelerator", quantity: 2 },
        ],
        rewards: &["Workshop Level 2", "Advanced Weapon Crafting", "1000 Credits"],
    },
    Quest {
        id: "workshop_upgrade_3",
        name: "Workshop Upgrade Level 3",
        description: "Achieve master crafting status with access to legendary weapon blueprints.",
        category: QuestCategory::Crafting,
        difficulty: Difficulty::Hard,
        required_items: &[
            Requirement { item: "Exodus Module", quantity: 3 },
            Requirement { item: "Queen Reactor", quantity: 1 },
            Requirement { item: "ARC Alloy", quantity: 10 },
        ],
        rewards: &["Workshop Level 3", "Legendary Crafting", "2000 Credits"],
    },
    Quest {
        id: "security_station",
        name: "Security Station Installation",
        description: "Install a security system to protect your hideout from raids.",
        category: QuestCategory::Hideout,
        difficulty: Difficulty::Medium,
        required_items: &[
            Requirement { item: "Sentinel Firing Core", quantity: 1 },
            Requirement { item: "Sensors", quantity: 8 },
            Requirement { item: "Electrical Components", quantity: 10 },
        ],
        rewards: &["Security Station", "Alarm System", "700 Credits"],
    },
    Quest {
        id: "communication_hub",
        name: "Communication Hub Setup",
        description: "Establish a communication network for better team coordination.",
        category: QuestCategory::Hideout,
        difficulty: Difficulty::Medium,
        required_items: &[
            Requirement { item: "ARC Circuitry", quantity: 3 },
            Requirement { item: "Advanced Electrical Components", quantity: 5 },
            Requirement { item: "Battery", quantity: 8 },
        ],
        rewards: &["Communication Hub", "Team Coordination Bonus", "900 Credits"],
    },
    Quest {
        id: "drone_workshop",
        name: "Drone Workshop Construction",
        description: "Build a specialized workshop for crafting and modifying reconnaissance drones.",
        category: QuestCategory::Crafting,
        difficulty: Difficulty::Hard,
        required_items: &[
            Requirement { item: "ARC Motion Core", quantity: 3 },
            Requirement { item: "Advanced Electrical Components", quantity: 10 },
            Requirement { item: "Sensors", quantity: 15 },
        ],
        rewards: &["Drone Workshop", "Drone Crafting", "1500 Credits"],
    },
    Quest {
        id: "explosive_workshop",
        name: "Explosive Workshop Setup",
        description: "Construct a workshop dedicated to crafting explosives and rocket launchers.",
        category: QuestCategory::Crafting,
        difficulty: Difficulty::Hard,
        required_items: &[
            Requirement { item: "Rocketeer Driver", quantity: 2 },
            Requirement { item: "Synthesized Fuel", quantity: 10 },
            Requirement { item: "Metal Parts", quantity: 25 },
        ],
        rewards: &["Explosive Workshop", "Explosive Crafting", "1800 Credits"],
    },
];
