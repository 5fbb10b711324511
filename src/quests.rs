//! Hideout progression quests and their item requirements.
//!
//! Static reference data: which quests exist, what they consume, what
//! they unlock. The interesting operation is the reverse lookup from an
//! item to the quests that need it, which drives the keep/sell call.

use std::fmt;

/// Rough effort rating, shared with the map reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        })
    }
}

/// Which progression track a quest advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestCategory {
    Hideout,
    Crafting,
}

impl fmt::Display for QuestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuestCategory::Hideout => "Hideout",
            QuestCategory::Crafting => "Crafting",
        })
    }
}

/// One item requirement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    /// Display name of the required item.
    pub item: &'static str,
    pub quantity: u32,
}

/// One hideout quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quest {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: QuestCategory,
    pub difficulty: Difficulty,
    pub required_items: &'static [Requirement],
    /// Station levels, credits, and goods granted on turn-in.
    pub rewards: &'static [&'static str],
}

impl Quest {
    /// Total number of items (across all lines) the quest consumes.
    pub fn total_items(&self) -> u32 {
        self.required_items.iter().map(|r| r.quantity).sum()
    }
}

/// Quests whose requirements name the given item (case-insensitive).
pub fn quests_requiring<'a>(quests: &'a [Quest], item_name: &str) -> Vec<&'a Quest> {
    let needle = item_name.to_lowercase();
    quests
        .iter()
        .filter(|quest| {
            quest
                .required_items
                .iter()
                .any(|req| req.item.to_lowercase() == needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    static QUESTS: &[Quest] = &[
        Quest {
            id: "power_grid",
            name: "Power Grid Installation",
            description: "",
            category: QuestCategory::Hideout,
            difficulty: Difficulty::Medium,
            required_items: &[
                Requirement { item: "Power Rod", quantity: 2 },
                Requirement { item: "Battery", quantity: 5 },
            ],
            rewards: &["Generator Level 1"],
        },
        Quest {
            id: "water_system",
            name: "Water Purification System",
            description: "",
            category: QuestCategory::Hideout,
            difficulty: Difficulty::Medium,
            required_items: &[Requirement { item: "Water Pump", quantity: 1 }],
            rewards: &["Water Station"],
        },
    ];

    #[test]
    fn test_reverse_lookup() {
        let hits = quests_requiring(QUESTS, "battery");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "power_grid");
        assert!(quests_requiring(QUESTS, "Dog Collar").is_empty());
    }

    #[test]
    fn test_total_items() {
        assert_eq!(QUESTS[0].total_items(), 7);
    }
}
