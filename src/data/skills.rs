//! Auto-generated skill data from the cheat-sheet JSON export.
//! Do not edit manually - regenerate with: cargo run --bin arc-cli generate skills

use crate::skills::{Skill, Slot, Tree};
use phf::phf_map;

/// All skill nodes in export order: by tree, then tier, then slot.
pub static SKILLS: &[Skill] = &[
    // Mobility
    Skill {
        id: "marathon_runner",
        name: "Marathon Runner",
        description: "Increased sprint duration and stamina efficiency.",
        tree: Tree::Mobility,
        tier: 1,
        position: Slot::Left,
        max_points: 3,
        capstone: false,
        icon: "/skills/marathon_runner.png",
    },
    Skill {
        id: "youthful_lungs",
        name: "Youthful Lungs",
        description: "Faster stamina regeneration.",
        tree: Tree::Mobility,
        tier: 1,
        position: Slot::Right,
        max_points: 3,
        capstone: false,
        icon: "/skills/youthful_lungs.png",
    },
    Skill {
        id: "swift_climber",
        name: "Swift Climber",
        description: "Climb and mantle ledges faster.",
        tree: Tree::Mobility,
        tier: 2,
        position: Slot::Left,
        max_points: 2,
        capstone: false,
        icon: "/skills/swift_climber.png",
    },
    Skill {
        id: "soft_landing",
        name: "Soft Landing",
        description: "Reduced fall damage and landing stagger.",
        tree: Tree::Mobility,
        tier: 2,
        position: Slot::Right,
        max_points: 1,
        capstone: false,
        icon: "/skills/soft_landing.png",
    },
    Skill {
        id: "swift_dodger",
        name: "Swift Dodger",
        description: "Reduced dodge cooldown and stamina cost.",
        tree: Tree::Mobility,
        tier: 3,
        position: Slot::Left,
        max_points: 2,
        capstone: false,
        icon: "/skills/swift_dodger.png",
    },
    Skill {
        id: "zipline_expert",
        name: "Zipline Expert",
        description: "Faster zipline travel; mount and dismount without slowing.",
        tree: Tree::Mobility,
        tier: 3,
        position: Slot::Center,
        max_points: 1,
        capstone: false,
        icon: "/skills/zipline_expert.png",
    },
    Skill {
        id: "slippery",
        name: "Slippery",
        description: "Slides carry further and break ankle-height hits.",
        tree: Tree::Mobility,
        tier: 3,
        position: Slot::Right,
        max_points: 1,
        capstone: false,
        icon: "/skills/slippery.png",
    },
    Skill {
        id: "parkour_master",
        name: "Parkour Master",
        description: "Enhanced climbing and vaulting speed.",
        tree: Tree::Mobility,
        tier: 4,
        position: Slot::Left,
        max_points: 1,
        capstone: false,
        icon: "/skills/parkour_master.png",
    },
    Skill {
        id: "second_wind",
        name: "Second Wind",
        description: "Sprinting while below half stamina costs less.",
        tree: Tree::Mobility,
        tier: 4,
        position: Slot::Right,
        max_points: 2,
        capstone: false,
        icon: "/skills/second_wind.png",
    },
    Skill {
        id: "momentum",
        name: "Momentum",
        description: "Each second of uninterrupted sprint speeds you up slightly.",
        tree: Tree::Mobility,
        tier: 5,
        position: Slot::Center,
        max_points: 3,
        capstone: false,
        icon: "/skills/momentum.png",
    },
    Skill {
        id: "untouchable",
        name: "Untouchable",
        description: "A perfect dodge grants a burst of full sprint speed.",
        tree: Tree::Mobility,
        tier: 6,
        position: Slot::Center,
        max_points: 1,
        capstone: true,
        icon: "/skills/untouchable.png",
    },
    // Survival
    Skill {
        id: "looters_instincts",
        name: "Looter's Instincts",
        description: "Highlight nearby loot and improve loot quality.",
        tree: Tree::Survival,
        tier: 1,
        position: Slot::Left,
        max_points: 3,
        capstone: false,
        icon: "/skills/looters_instincts.png",
    },
    Skill {
        id: "broad_shoulders",
        name: "Broad Shoulders",
        description: "Increased carry weight before movement penalties.",
        tree: Tree::Survival,
        tier: 1,
        position: Slot::Right,
        max_points: 3,
        capstone: false,
        icon: "/skills/broad_shoulders.png",
    },
    Skill {
        id: "scavenger_expert",
        name: "Scavenger Expert",
        description: "Faster looting and better loot detection range.",
        tree: Tree::Survival,
        tier: 2,
        position: Slot::Left,
        max_points: 2,
        capstone: false,
        icon: "/skills/scavenger_expert.png",
    },
    Skill {
        id: "pack_mule",
        name: "Pack Mule",
        description: "Significantly increased carrying capacity.",
        tree: Tree::Survival,
        tier: 2,
        position: Slot::Right,
        max_points: 2,
        capstone: false,
        icon: "/skills/pack_mule.png",
    },
    Skill {
        id: "field_medic",
        name: "Field Medic",
        description: "Bandages and kits apply faster on yourself and allies.",
        tree: Tree::Survival,
        tier: 3,
        position: Slot::Left,
        max_points: 2,
        capstone: false,
        icon: "/skills/field_medic.png",
    },
    Skill {
        id: "in_round_crafting",
        name: "In-Round Crafting",
        description: "Craft bandages, shield rechargers, and ammo during raids.",
        tree: Tree::Survival,
        tier: 3,
        position: Slot::Center,
        max_points: 1,
        capstone: false,
        icon: "/skills/in_round_crafting.png",
    },
    Skill {
        id: "quick_hands",
        name: "Quick Hands",
        description: "Faster container searches and door interactions.",
        tree: Tree::Survival,
        tier: 3,
        position: Slot::Right,
        max_points: 2,
        capstone: false,
        icon: "/skills/quick_hands.png",
    },
    Skill {
        id: "efficient_recycler",
        name: "Efficient Recycler",
        description: "Recycling yields bonus materials.",
        tree: Tree::Survival,
        tier: 4,
        position: Slot::Left,
        max_points: 2,
        capstone: false,
        icon: "/skills/efficient_recycler.png",
    },
    Skill {
        id: "loaded_arms",
        name: "Loaded Arms",
        description: "Carry one extra heavy item without slowing.",
        tree: Tree::Survival,
        tier: 4,
        position: Slot::Right,
        max_points: 1,
        capstone: false,
        icon: "/skills/loaded_arms.png",
    },
    Skill {
        id: "deep_pockets",
        name: "Deep Pockets",
        description: "Extra quick-use slots in the safe pocket.",
        tree: Tree::Survival,
        tier: 5,
        position: Slot::Center,
        max_points: 3,
        capstone: false,
        icon: "/skills/deep_pockets.png",
    },
    Skill {
        id: "master_scavenger",
        name: "Master Scavenger",
        description: "Opened containers have a chance to hold an extra rare roll.",
        tree: Tree::Survival,
        tier: 6,
        position: Slot::Center,
        max_points: 1,
        capstone: true,
        icon: "/skills/master_scavenger.png",
    },
    // Conditioning
    Skill {
        id: "silent_steps",
        name: "Silent Steps",
        description: "Reduced movement noise for stealth.",
        tree: Tree::Conditioning,
        tier: 1,
        position: Slot::Left,
        max_points: 3,
        capstone: false,
        icon: "/skills/silent_steps.png",
    },
    Skill {
        id: "used_to_the_weight",
        name: "Used to the Weight",
        description: "Reduced movement penalty from heavy gear.",
        tree: Tree::Conditioning,
        tier: 1,
        position: Slot::Right,
        max_points: 3,
        capstone: false,
        icon: "/skills/used_to_the_weight.png",
    },
    Skill {
        id: "melee_mastery",
        name: "Melee Mastery",
        description: "Increased melee damage and swing speed.",
        tree: Tree::Conditioning,
        tier: 2,
        position: Slot::Left,
        max_points: 2,
        capstone: false,
        icon: "/skills/melee_mastery.png",
    },
    Skill {
        id: "heavy_lifter",
        name: "Heavy Lifter",
        description: "Shoulder heavy loot with one hand free for a sidearm.",
        tree: Tree::Conditioning,
        tier: 2,
        position: Slot::Right,
        max_points: 2,
        capstone: false,
        icon: "/skills/heavy_lifter.png",
    },
    Skill {
        id: "quick_recovery",
        name: "Quick Recovery",
        description: "Faster health regeneration out of combat.",
        tree: Tree::Conditioning,
        tier: 3,
        position: Slot::Left,
        max_points: 2,
        capstone: false,
        icon: "/skills/quick_recovery.png",
    },
    Skill {
        id: "combat_breathing",
        name: "Combat Breathing",
        description: "Shield regeneration starts sooner after taking damage.",
        tree: Tree::Conditioning,
        tier: 3,
        position: Slot::Center,
        max_points: 1,
        capstone: false,
        icon: "/skills/combat_breathing.png",
    },
    Skill {
        id: "thick_skin",
        name: "Thick Skin",
        description: "Small reduction to environmental and fall damage.",
        tree: Tree::Conditioning,
        tier: 3,
        position: Slot::Right,
        max_points: 2,
        capstone: false,
        icon: "/skills/thick_skin.png",
    },
    Skill {
        id: "silent_strikes",
        name: "Silent Strikes",
        description: "Melee takedowns make no noise.",
        tree: Tree::Conditioning,
        tier: 4,
        position: Slot::Left,
        max_points: 1,
        capstone: false,
        icon: "/skills/silent_strikes.png",
    },
    Skill {
        id: "endurance_training",
        name: "Endurance Training",
        description: "Melee swings and vaults cost less stamina.",
        tree: Tree::Conditioning,
        tier: 4,
        position: Slot::Right,
        max_points: 2,
        capstone: false,
        icon: "/skills/endurance_training.png",
    },
    Skill {
        id: "adrenaline_surge",
        name: "Adrenaline Surge",
        description: "Taking shield damage briefly boosts movement speed.",
        tree: Tree::Conditioning,
        tier: 5,
        position: Slot::Center,
        max_points: 3,
        capstone: false,
        icon: "/skills/adrenaline_surge.png",
    },
    Skill {
        id: "juggernaut",
        name: "Juggernaut",
        description: "Melee hits stagger ARC units a full size class larger.",
        tree: Tree::Conditioning,
        tier: 6,
        position: Slot::Center,
        max_points: 1,
        capstone: true,
        icon: "/skills/juggernaut.png",
    },
];

/// Skill id → index into [`SKILLS`].
pub static SKILL_INDEX: phf::Map<&'static str, usize> = phf_map! {
    "marathon_runner" => 0,
    "youthful_lungs" => 1,
    "swift_climber" => 2,
    "soft_landing" => 3,
    "swift_dodger" => 4,
    "zipline_expert" => 5,
    "slippery" => 6,
    "parkour_master" => 7,
    "second_wind" => 8,
    "momentum" => 9,
    "untouchable" => 10,
    "looters_instincts" => 11,
    "broad_shoulders" => 12,
    "scavenger_expert" => 13,
    "pack_mule" => 14,
    "field_medic" => 15,
    "in_round_crafting" => 16,
    "quick_hands" => 17,
    "efficient_recycler" => 18,
    "loaded_arms" => 19,
    "deep_pockets" => 20,
    "master_scavenger" => 21,
    "silent_steps" => 22,
    "used_to_the_weight" => 23,
    "melee_mastery" => 24,
    "heavy_lifter" => 25,
    "quick_recovery" => 26,
    "combat_breathing" => 27,
    "thick_skin" => 28,
    "silent_strikes" => 29,
    "endurance_training" => 30,
    "adrenaline_surge" => 31,
    "juggernaut" => 32,
};

pub fn get_skill(id: &str) -> Option<&'static Skill> {
    SKILL_INDEX.get(id).map(|&idx| &SKILLS[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_count() {
        assert_eq!(SKILLS.len(), SKILL_INDEX.len());
    }

    #[test]
    fn test_index_matches_slice() {
        for (idx, skill) in SKILLS.iter().enumerate() {
            assert_eq!(SKILL_INDEX.get(skill.id), Some(&idx), "index drift: {}", skill.id);
        }
    }

    #[test]
    fn test_marathon_runner() {
        let skill = get_skill("marathon_runner").expect("marathon_runner should exist");
        assert_eq!(skill.tree, Tree::Mobility);
        assert_eq!(skill.max_points, 3);
    }

    #[test]
    fn test_each_tree_has_one_capstone() {
        for tree in Tree::ALL {
            let capstones = SKILLS
                .iter()
                .filter(|s| s.tree == tree && s.capstone)
                .count();
            assert_eq!(capstones, 1, "{tree} should have exactly one capstone");
        }
    }
}
