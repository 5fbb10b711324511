//! Auto-generated item data from the cheat-sheet JSON export.
//! Do not edit manually - regenerate with: cargo run --bin arc-cli generate items

use crate::catalog::{Action, Category, Item, Rarity};
use phf::phf_map;

/// Full catalog in export order. This order is the tie-break order for
/// stable sorts.
pub static ITEMS: &[Item] = &[
    Item {
        id: "arc_alloy",
        name: "ARC Alloy",
        description: "Refined alloy recovered from destroyed ARC machines. Core material for advanced weapon crafting.",
        category: Category::ArcParts,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 1000,
        icon: "/items/arc_alloy.png",
        recycles_into: &[],
        used_for: &["Advanced Assault Rifle", "Railgun", "ARC Armor"],
        location_types: &["Industrial", "Military"],
    },
    Item {
        id: "arc_motion_core",
        name: "ARC Motion Core",
        description: "Intact servo core from a walker-class ARC. Prized for drone crafting.",
        category: Category::ArcParts,
        action: Action::Keep,
        rarity: Rarity::Epic,
        value: 2500,
        icon: "/items/arc_motion_core.png",
        recycles_into: &[],
        used_for: &["Drone Assembly Bay", "Recon Drone"],
        location_types: &["Military"],
    },
    Item {
        id: "damaged_arc_motion_core",
        name: "Damaged ARC Motion Core",
        description: "Scorched servo core. Too damaged to reuse, but the recycler salvages plenty from it.",
        category: Category::ArcParts,
        action: Action::Recycle,
        rarity: Rarity::Rare,
        value: 800,
        icon: "/items/damaged_arc_motion_core.png",
        recycles_into: &["Electrical Components", "Metal Parts"],
        used_for: &[],
        location_types: &["Military"],
    },
    Item {
        id: "arc_circuitry",
        name: "ARC Circuitry",
        description: "Printed control boards stripped from ARC chassis. Feeds energy weapon crafting.",
        category: Category::ArcParts,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 1200,
        icon: "/items/arc_circuitry.png",
        recycles_into: &[],
        used_for: &["Energy Rifle", "Communication Hub"],
        location_types: &["Industrial", "Tech"],
    },
    Item {
        id: "arc_powercell",
        name: "ARC Powercell",
        description: "Standard ARC energy cell. Holds a charge for years.",
        category: Category::ArcParts,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 900,
        icon: "/items/arc_powercell.png",
        recycles_into: &[],
        used_for: &["Energy Rifle"],
        location_types: &["Industrial"],
    },
    Item {
        id: "advanced_arc_powercell",
        name: "Advanced ARC Powercell",
        description: "High-density cell from late-wave ARC units. Required for top-tier energy weapons.",
        category: Category::ArcParts,
        action: Action::Keep,
        rarity: Rarity::Epic,
        value: 2000,
        icon: "/items/advanced_arc_powercell.png",
        recycles_into: &[],
        used_for: &["Railgun"],
        location_types: &["Military"],
    },
    Item {
        id: "sentinel_firing_core",
        name: "Sentinel Firing Core",
        description: "Targeting computer from a Sentinel turret. Rare drop from fortified positions.",
        category: Category::ArcParts,
        action: Action::Keep,
        rarity: Rarity::Epic,
        value: 2200,
        icon: "/items/sentinel_firing_core.png",
        recycles_into: &[],
        used_for: &["Security Station"],
        location_types: &["Military"],
    },
    Item {
        id: "rocketeer_driver",
        name: "Rocketeer Driver",
        description: "Launch controller pulled from a downed Rocketeer. Needed for explosive weaponry.",
        category: Category::ArcParts,
        action: Action::Keep,
        rarity: Rarity::Epic,
        value: 1800,
        icon: "/items/rocketeer_driver.png",
        recycles_into: &[],
        used_for: &["Rocket Launcher", "Explosives Bench"],
        location_types: &["Military"],
    },
    Item {
        id: "queen_reactor",
        name: "Queen Reactor",
        description: "Power plant of a Queen-class ARC. The rarest salvage in the game.",
        category: Category::ArcParts,
        action: Action::Keep,
        rarity: Rarity::Legendary,
        value: 5000,
        icon: "/items/queen_reactor.png",
        recycles_into: &[],
        used_for: &["Exodus research"],
        location_types: &["Military"],
    },
    Item {
        id: "bastion_cell",
        name: "Bastion Cell",
        description: "Armor capacitor from a Bastion. No crafting use, but vendors pay well.",
        category: Category::ArcParts,
        action: Action::Sell,
        rarity: Rarity::Rare,
        value: 1500,
        icon: "/items/bastion_cell.png",
        recycles_into: &[],
        used_for: &[],
        location_types: &["Military"],
    },
    Item {
        id: "broken_guidance_system",
        name: "Broken Guidance System",
        description: "Shattered ARC guidance package. Recycles into sensor parts.",
        category: Category::ArcParts,
        action: Action::Recycle,
        rarity: Rarity::Uncommon,
        value: 400,
        icon: "/items/broken_guidance_system.png",
        recycles_into: &["Electrical Components", "Sensors"],
        used_for: &[],
        location_types: &["Military", "Industrial"],
    },
    Item {
        id: "magnetic_accelerator",
        name: "Magnetic Accelerator",
        description: "Coilgun stage from a heavy ARC weapon platform. Essential for railgun crafting.",
        category: Category::ArcParts,
        action: Action::Keep,
        rarity: Rarity::Legendary,
        value: 4000,
        icon: "/items/magnetic_accelerator.png",
        recycles_into: &[],
        used_for: &["Railgun", "Energy Rifle"],
        location_types: &["Military", "Industrial"],
    },
    Item {
        id: "battery",
        name: "Battery",
        description: "Standard power cell found in flashlights and power banks. Used everywhere in the hideout.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Common,
        value: 50,
        icon: "/items/battery.png",
        recycles_into: &[],
        used_for: &["Power Grid Installation", "Energy Rifle"],
        location_types: &["Residential", "Industrial"],
    },
    Item {
        id: "industrial_battery",
        name: "Industrial Battery",
        description: "Heavy-duty cell from industrial machinery. Farm the Hydroponic Dome on Dam Battlegrounds.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 800,
        icon: "/items/industrial_battery.png",
        recycles_into: &[],
        used_for: &["Generator Level 2"],
        location_types: &["Industrial"],
    },
    Item {
        id: "wires",
        name: "Wires",
        description: "Copper wiring stripped from cables and old electronics.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Common,
        value: 30,
        icon: "/items/wires.png",
        recycles_into: &[],
        used_for: &["Basic Assault Rifle", "Power Grid Installation"],
        location_types: &["Residential", "Industrial", "Urban"],
    },
    Item {
        id: "metal_parts",
        name: "Metal Parts",
        description: "Scrap metal fittings. The backbone of every workshop project.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Common,
        value: 40,
        icon: "/items/metal_parts.png",
        recycles_into: &[],
        used_for: &["Basic Assault Rifle", "Water Purification System", "Tactical Vest"],
        location_types: &["Industrial", "Urban", "Residential"],
    },
    Item {
        id: "steel_spring",
        name: "Steel Spring",
        description: "Tempered spring. Needed for every firearm trigger group.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Uncommon,
        value: 150,
        icon: "/items/steel_spring.png",
        recycles_into: &[],
        used_for: &["Basic Assault Rifle", "Advanced Assault Rifle"],
        location_types: &["Industrial"],
    },
    Item {
        id: "electrical_components",
        name: "Electrical Components",
        description: "Assorted boards and relays from broken electronics.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Uncommon,
        value: 200,
        icon: "/items/electrical_components.png",
        recycles_into: &[],
        used_for: &["Power Grid Installation", "Security Station"],
        location_types: &["Residential", "Tech"],
    },
    Item {
        id: "advanced_electrical_components",
        name: "Advanced Electrical Components",
        description: "Precision electronics from lab equipment. Scarce outside Tech zones.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 900,
        icon: "/items/advanced_electrical_components.png",
        recycles_into: &[],
        used_for: &["Advanced Assault Rifle", "Energy Rifle"],
        location_types: &["Tech"],
    },
    Item {
        id: "chemicals",
        name: "Chemicals",
        description: "Industrial reagents. Feed the medical lab and explosives bench.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Uncommon,
        value: 180,
        icon: "/items/chemicals.png",
        recycles_into: &[],
        used_for: &["Combat Stim", "Breaching Charge"],
        location_types: &["Industrial", "Tech"],
    },
    Item {
        id: "arc_coolant",
        name: "ARC Coolant",
        description: "Good to recycle (gives Chemicals)",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 1000,
        icon: "/items/arc_coolant.png",
        recycles_into: &["Chemicals"],
        used_for: &[],
        location_types: &["Industrial"],
    },
    Item {
        id: "arc_flex_rubber",
        name: "ARC Flex Rubber",
        description: "Recycle if low on Rubber Parts, otherwise sell",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 1000,
        icon: "/items/arc_flex_rubber.png",
        recycles_into: &["Rubber Parts"],
        used_for: &[],
        location_types: &["Industrial"],
    },
    Item {
        id: "arc_performance_steel",
        name: "ARC Performance Steel",
        description: "Recycle if low on Metal Parts, otherwise sell",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 1000,
        icon: "/items/arc_performance_steel.png",
        recycles_into: &["Metal Parts"],
        used_for: &[],
        location_types: &["Industrial", "Military"],
    },
    Item {
        id: "arc_synthetic_resin",
        name: "ARC Synthetic Resin",
        description: "Recycle if low on Plastic Parts, otherwise sell",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 1000,
        icon: "/items/arc_synthetic_resin.png",
        recycles_into: &["Plastic Parts"],
        used_for: &[],
        location_types: &["Industrial"],
    },
    Item {
        id: "arc_thermo_lining",
        name: "ARC Thermo Lining",
        description: "Recycle if low on Fabric, otherwise sell",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 1000,
        icon: "/items/arc_thermo_lining.png",
        recycles_into: &["Fabric"],
        used_for: &[],
        location_types: &["Industrial", "Military"],
    },
    Item {
        id: "exodus_module",
        name: "Exodus Module",
        description: "Sealed pre-collapse technology. Keep every one you find.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Legendary,
        value: 6000,
        icon: "/items/exodus_module.png",
        recycles_into: &[],
        used_for: &["Railgun", "Exodus research"],
        location_types: &["Military", "Tech"],
    },
    Item {
        id: "power_rod",
        name: "Power Rod",
        description: "Industrial conductor rod. The power grid needs two.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 700,
        icon: "/items/power_rod.png",
        recycles_into: &[],
        used_for: &["Power Grid Installation"],
        location_types: &["Industrial"],
    },
    Item {
        id: "fabric",
        name: "Fabric",
        description: "Salvaged cloth from clothes, blankets, and parachutes.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Common,
        value: 25,
        icon: "/items/fabric.png",
        recycles_into: &[],
        used_for: &["Medical Station Setup", "Tactical Vest"],
        location_types: &["Residential"],
    },
    Item {
        id: "antiseptic",
        name: "Antiseptic",
        description: "Medical-grade disinfectant. The medical station cannot open without it.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Uncommon,
        value: 120,
        icon: "/items/antiseptic.png",
        recycles_into: &[],
        used_for: &["Medical Station Setup", "Medical Kit"],
        location_types: &["Residential", "Commercial"],
    },
    Item {
        id: "syringe",
        name: "Syringe",
        description: "Sterile syringe. Stock up for the medical station.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Common,
        value: 60,
        icon: "/items/syringe.png",
        recycles_into: &[],
        used_for: &["Medical Station Setup"],
        location_types: &["Commercial"],
    },
    Item {
        id: "water_pump",
        name: "Water Pump",
        description: "Working pump assembly. One unlocks the water system.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 650,
        icon: "/items/water_pump.png",
        recycles_into: &[],
        used_for: &["Water Purification System"],
        location_types: &["Industrial", "Residential"],
    },
    Item {
        id: "water_filter",
        name: "Water Filter",
        description: "Replaceable filter cartridge.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Uncommon,
        value: 200,
        icon: "/items/water_filter.png",
        recycles_into: &[],
        used_for: &["Water Purification System"],
        location_types: &["Residential", "Industrial"],
    },
    Item {
        id: "synthesized_fuel",
        name: "Synthesized Fuel",
        description: "Workshop: Explosives Station L2 (x3)",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 700,
        icon: "/items/synthesized_fuel.png",
        recycles_into: &[],
        used_for: &["Breaching Charge"],
        location_types: &["Industrial"],
    },
    Item {
        id: "laboratory_reagents",
        name: "Laboratory Reagents",
        description: "Workshop: Explosives Station L3 (x3)",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 2000,
        icon: "/items/laboratory_reagents.png",
        recycles_into: &[],
        used_for: &["Combat Stim"],
        location_types: &["Tech"],
    },
    Item {
        id: "heavy_gun_parts",
        name: "Heavy Gun Parts",
        description: "Used to craft: Gunsmith: Bettina I, Hullcracker I",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 700,
        icon: "/items/heavy_gun_parts.png",
        recycles_into: &[],
        used_for: &["Rocket Launcher"],
        location_types: &["Military"],
    },
    Item {
        id: "dog_collar",
        name: "Dog Collar",
        description: "Trinket - no crafting use, pure credit item. Farm residential areas.",
        category: Category::CraftingMaterials,
        action: Action::Sell,
        rarity: Rarity::Uncommon,
        value: 350,
        icon: "/items/dog_collar.png",
        recycles_into: &[],
        used_for: &[],
        location_types: &["Residential"],
    },
    Item {
        id: "rubber_duck",
        name: "Rubber Duck",
        description: "It squeaks. Vendors inexplicably pay a fortune for it.",
        category: Category::CraftingMaterials,
        action: Action::Sell,
        rarity: Rarity::Common,
        value: 1000,
        icon: "/items/rubber_duck.png",
        recycles_into: &[],
        used_for: &[],
        location_types: &["Residential"],
    },
    Item {
        id: "lightbulb",
        name: "Lightbulb",
        description: "Intact bulb. Check ceiling fixtures and hardware shelves.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Common,
        value: 40,
        icon: "/items/lightbulb.png",
        recycles_into: &[],
        used_for: &["Hideout lighting"],
        location_types: &["Residential", "Urban"],
    },
    Item {
        id: "cooling_fan",
        name: "Cooling Fan",
        description: "Salvaged case fan. Generators overheat without them.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Uncommon,
        value: 250,
        icon: "/items/cooling_fan.png",
        recycles_into: &[],
        used_for: &["Generator Level 2"],
        location_types: &["Industrial", "Tech"],
    },
    Item {
        id: "rusted_gears",
        name: "Rusted Gears",
        description: "Corroded gearbox internals. Best farmed at the Marano Station car park.",
        category: Category::Recyclable,
        action: Action::Recycle,
        rarity: Rarity::Common,
        value: 80,
        icon: "/items/rusted_gears.png",
        recycles_into: &["Metal Parts"],
        used_for: &[],
        location_types: &["Urban", "Industrial"],
    },
    Item {
        id: "fried_motherboard",
        name: "Fried Motherboard",
        description: "Burnt-out board. Worthless whole, valuable shredded.",
        category: Category::Recyclable,
        action: Action::Recycle,
        rarity: Rarity::Uncommon,
        value: 150,
        icon: "/items/fried_motherboard.png",
        recycles_into: &["Electrical Components", "Wires"],
        used_for: &[],
        location_types: &["Tech", "Residential"],
    },
    Item {
        id: "crumpled_plastic_bottle",
        name: "Crumpled Plastic Bottle",
        description: "Litter. Recycles into Plastic Parts.",
        category: Category::Recyclable,
        action: Action::Recycle,
        rarity: Rarity::Common,
        value: 10,
        icon: "/items/crumpled_plastic_bottle.png",
        recycles_into: &["Plastic Parts"],
        used_for: &[],
        location_types: &["Urban", "Residential"],
    },
    Item {
        id: "polluted_air_filter",
        name: "Polluted Air Filter",
        description: "Clogged HVAC filter.",
        category: Category::Recyclable,
        action: Action::Recycle,
        rarity: Rarity::Uncommon,
        value: 120,
        icon: "/items/polluted_air_filter.png",
        recycles_into: &["Fabric", "Plastic Parts"],
        used_for: &[],
        location_types: &["Industrial"],
    },
    Item {
        id: "ruined_tactical_vest",
        name: "Ruined Tactical Vest",
        description: "Shredded body armor. Strip it for fabric and plating.",
        category: Category::Recyclable,
        action: Action::Recycle,
        rarity: Rarity::Uncommon,
        value: 140,
        icon: "/items/ruined_tactical_vest.png",
        recycles_into: &["Fabric", "Metal Parts"],
        used_for: &[],
        location_types: &["Military"],
    },
    Item {
        id: "radio",
        name: "Radio",
        description: "Dead consumer radio. A reliable source of wires.",
        category: Category::Recyclable,
        action: Action::Recycle,
        rarity: Rarity::Common,
        value: 90,
        icon: "/items/radio.png",
        recycles_into: &["Wires", "Electrical Components"],
        used_for: &[],
        location_types: &["Residential"],
    },
    Item {
        id: "cracked_bioscanner",
        name: "Cracked Bioscanner",
        description: "Broken lab scanner. One of the few sources of Sensors.",
        category: Category::Recyclable,
        action: Action::Recycle,
        rarity: Rarity::Rare,
        value: 500,
        icon: "/items/cracked_bioscanner.png",
        recycles_into: &["Sensors", "Electrical Components"],
        used_for: &[],
        location_types: &["Tech"],
    },
    Item {
        id: "rusted_tools",
        name: "Rusted Tools",
        description: "Seized hand tools.",
        category: Category::Recyclable,
        action: Action::Recycle,
        rarity: Rarity::Common,
        value: 70,
        icon: "/items/rusted_tools.png",
        recycles_into: &["Metal Parts"],
        used_for: &[],
        location_types: &["Industrial", "Urban"],
    },
    Item {
        id: "pillow",
        name: "Pillow",
        description: "Goose down, mostly dry. Recycles into Fabric.",
        category: Category::Recyclable,
        action: Action::Recycle,
        rarity: Rarity::Common,
        value: 15,
        icon: "/items/pillow.png",
        recycles_into: &["Fabric"],
        used_for: &[],
        location_types: &["Residential"],
    },
    Item {
        id: "encrypted_data_drive",
        name: "Encrypted Data Drive",
        description: "Locked ARC storage drive. Celeste wants these intact.",
        category: Category::QuestItems,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 0,
        icon: "/items/encrypted_data_drive.png",
        recycles_into: &[],
        used_for: &["Deciphering the Data"],
        location_types: &["Tech", "Military"],
    },
    Item {
        id: "husk_core_sample",
        name: "Husk Core Sample",
        description: "Tissue sample from a first-wave husk. Required for the field survey.",
        category: Category::QuestItems,
        action: Action::Keep,
        rarity: Rarity::Uncommon,
        value: 0,
        icon: "/items/husk_core_sample.png",
        recycles_into: &[],
        used_for: &["Search the First Wave Husks"],
        location_types: &["Wilderness"],
    },
    Item {
        id: "gate_security_code",
        name: "Gate Security Code",
        description: "One of four codes for the Blue Gate control room. Event item, cannot be banked.",
        category: Category::QuestItems,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 0,
        icon: "/items/gate_security_code.png",
        recycles_into: &[],
        used_for: &["Locked Gate event"],
        location_types: &["Military"],
    },
    Item {
        id: "first_aid_kit",
        name: "First Aid Kit",
        description: "Restores health over a few seconds. Always carry two.",
        category: Category::Consumables,
        action: Action::Keep,
        rarity: Rarity::Common,
        value: 100,
        icon: "/items/first_aid_kit.png",
        recycles_into: &[],
        used_for: &[],
        location_types: &["Residential", "Commercial"],
    },
    Item {
        id: "sterilized_bandage",
        name: "Sterilized Bandage",
        description: "High value - better to sell!",
        category: Category::Consumables,
        action: Action::Sell,
        rarity: Rarity::Rare,
        value: 2000,
        icon: "/items/sterilized_bandage.png",
        recycles_into: &[],
        used_for: &[],
        location_types: &["Commercial"],
    },
    Item {
        id: "combat_stim",
        name: "Combat Stim",
        description: "Short burst of stamina and damage resistance.",
        category: Category::Consumables,
        action: Action::Keep,
        rarity: Rarity::Rare,
        value: 600,
        icon: "/items/combat_stim.png",
        recycles_into: &[],
        used_for: &[],
        location_types: &["Military", "Tech"],
    },
    Item {
        id: "mushrooms",
        name: "Mushrooms",
        description: "Edible fungus. Harvest in shaded ruins; restores a little stamina.",
        category: Category::Consumables,
        action: Action::Keep,
        rarity: Rarity::Common,
        value: 20,
        icon: "/items/mushrooms.png",
        recycles_into: &[],
        used_for: &[],
        location_types: &["Wilderness"],
    },
    Item {
        id: "prickly_pear",
        name: "Prickly Pear",
        description: "Desert fruit. Eat on the move.",
        category: Category::Consumables,
        action: Action::Keep,
        rarity: Rarity::Common,
        value: 15,
        icon: "/items/prickly_pear.png",
        recycles_into: &[],
        used_for: &[],
        location_types: &["Wilderness"],
    },
    Item {
        id: "explosive_mixture",
        name: "Explosive Mixture",
        description: "Unstable compound. Handle with care; the explosives bench wants plenty.",
        category: Category::CraftingMaterials,
        action: Action::Keep,
        rarity: Rarity::Uncommon,
        value: 220,
        icon: "/items/explosive_mixture.png",
        recycles_into: &[],
        used_for: &["Rocket Launcher", "Proximity Mine"],
        location_types: &["Industrial", "Military"],
    },
];

/// Item id → index into [`ITEMS`].
pub static ITEM_INDEX: phf::Map<&'static str, usize> = phf_map! {
    "arc_alloy" => 0,
    "arc_motion_core" => 1,
    "damaged_arc_motion_core" => 2,
    "arc_circuitry" => 3,
    "arc_powercell" => 4,
    "advanced_arc_powercell" => 5,
    "sentinel_firing_core" => 6,
    "rocketeer_driver" => 7,
    "queen_reactor" => 8,
    "bastion_cell" => 9,
    "broken_guidance_system" => 10,
    "magnetic_accelerator" => 11,
    "battery" => 12,
    "industrial_battery" => 13,
    "wires" => 14,
    "metal_parts" => 15,
    "steel_spring" => 16,
    "electrical_components" => 17,
    "advanced_electrical_components" => 18,
    "chemicals" => 19,
    "arc_coolant" => 20,
    "arc_flex_rubber" => 21,
    "arc_performance_steel" => 22,
    "arc_synthetic_resin" => 23,
    "arc_thermo_lining" => 24,
    "exodus_module" => 25,
    "power_rod" => 26,
    "fabric" => 27,
    "antiseptic" => 28,
    "syringe" => 29,
    "water_pump" => 30,
    "water_filter" => 31,
    "synthesized_fuel" => 32,
    "laboratory_reagents" => 33,
    "heavy_gun_parts" => 34,
    "dog_collar" => 35,
    "rubber_duck" => 36,
    "lightbulb" => 37,
    "cooling_fan" => 38,
    "rusted_gears" => 39,
    "fried_motherboard" => 40,
    "crumpled_plastic_bottle" => 41,
    "polluted_air_filter" => 42,
    "ruined_tactical_vest" => 43,
    "radio" => 44,
    "cracked_bioscanner" => 45,
    "rusted_tools" => 46,
    "pillow" => 47,
    "encrypted_data_drive" => 48,
    "husk_core_sample" => 49,
    "gate_security_code" => 50,
    "first_aid_kit" => 51,
    "sterilized_bandage" => 52,
    "combat_stim" => 53,
    "mushrooms" => 54,
    "prickly_pear" => 55,
    "explosive_mixture" => 56,
};

pub fn get_item(id: &str) -> Option<&'static Item> {
    ITEM_INDEX.get(id).map(|&idx| &ITEMS[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_count() {
        assert_eq!(ITEMS.len(), ITEM_INDEX.len());
        assert!(ITEMS.len() >= 40);
    }

    #[test]
    fn test_index_matches_slice() {
        for (idx, item) in ITEMS.iter().enumerate() {
            assert_eq!(ITEM_INDEX.get(item.id), Some(&idx), "index drift: {}", item.id);
        }
    }

    #[test]
    fn test_battery() {
        let item = get_item("battery").expect("battery should exist");
        assert_eq!(item.name, "Battery");
        assert_eq!(item.value, 50);
    }

    #[test]
    fn test_nonexistent_item() {
        assert!(get_item("no_such_item").is_none());
    }
}
