//! Skill tree records and layout.
//!
//! Skills live in three trees, arranged in tiers with up to three slots
//! per tier. The records are static (see [`crate::data::skills`]);
//! interactive point allocation is in [`planner`].

pub mod planner;

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// One of the three skill trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tree {
    Mobility,
    Survival,
    Conditioning,
}

impl Tree {
    pub const ALL: [Tree; 3] = [Tree::Mobility, Tree::Survival, Tree::Conditioning];

    pub fn tag(self) -> &'static str {
        match self {
            Tree::Mobility => "mobility",
            Tree::Survival => "survival",
            Tree::Conditioning => "conditioning",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tree::Mobility => "Mobility",
            Tree::Survival => "Survival",
            Tree::Conditioning => "Conditioning",
        }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Tree {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mobility" => Ok(Tree::Mobility),
            "survival" => Ok(Tree::Survival),
            "conditioning" => Ok(Tree::Conditioning),
            other => Err(Error::UnknownTree(other.to_string())),
        }
    }
}

/// Horizontal slot within a tier row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Left,
    Center,
    Right,
}

impl Slot {
    pub fn tag(self) -> &'static str {
        match self {
            Slot::Left => "left",
            Slot::Center => "center",
            Slot::Right => "right",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Slot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(Slot::Left),
            "center" => Ok(Slot::Center),
            "right" => Ok(Slot::Right),
            other => Err(Error::UnknownSlot(other.to_string())),
        }
    }
}

/// One skill node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    /// Stable unique id (snake_case of the display name).
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tree: Tree,
    /// Vertical rank within the tree; 1 is the first row.
    pub tier: u8,
    pub position: Slot,
    /// Points that can be sunk into this node (at least 1).
    pub max_points: u8,
    /// Marks the tree's culminating node. Cosmetic only.
    pub capstone: bool,
    pub icon: &'static str,
}

/// Check the structural invariants of a skill list: unique ids, tiers
/// starting at 1, at least one point per node, and at most one skill
/// per `(tree, tier, position)` slot.
pub fn validate(skills: &[Skill]) -> Result<()> {
    let mut ids = std::collections::HashSet::new();
    let mut slots = std::collections::HashSet::new();
    for skill in skills {
        if !ids.insert(skill.id) {
            return Err(Error::DuplicateSkill(skill.id.to_string()));
        }
        if skill.tier == 0 {
            return Err(Error::InvalidSkill {
                id: skill.id.to_string(),
                reason: "tier must be at least 1".to_string(),
            });
        }
        if skill.max_points == 0 {
            return Err(Error::InvalidSkill {
                id: skill.id.to_string(),
                reason: "max_points must be at least 1".to_string(),
            });
        }
        if !slots.insert((skill.tree, skill.tier, skill.position)) {
            return Err(Error::SlotConflict {
                tree: skill.tree,
                tier: skill.tier,
                slot: skill.position,
            });
        }
    }
    Ok(())
}

/// Skills of one tree, in catalog order.
pub fn in_tree(skills: &'static [Skill], tree: Tree) -> Vec<&'static Skill> {
    skills.iter().filter(|s| s.tree == tree).collect()
}

/// One rendered tier row: up to three slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct TierRow {
    pub tier: u8,
    pub left: Option<&'static Skill>,
    pub center: Option<&'static Skill>,
    pub right: Option<&'static Skill>,
}

impl TierRow {
    /// Occupied slots, left to right.
    pub fn slots(&self) -> impl Iterator<Item = &'static Skill> {
        [self.left, self.center, self.right].into_iter().flatten()
    }
}

/// Group a tree's skills into tier rows, tier 1 first. Gaps in the tier
/// numbering produce no row.
pub fn tree_rows(skills: &'static [Skill], tree: Tree) -> Vec<TierRow> {
    let members = in_tree(skills, tree);
    let max_tier = members.iter().map(|s| s.tier).max().unwrap_or(0);
    let mut rows = Vec::new();
    for tier in 1..=max_tier {
        let mut row = TierRow {
            tier,
            ..TierRow::default()
        };
        for skill in members.iter().filter(|s| s.tier == tier) {
            match skill.position {
                Slot::Left => row.left = Some(skill),
                Slot::Center => row.center = Some(skill),
                Slot::Right => row.right = Some(skill),
            }
        }
        if row.slots().next().is_some() {
            rows.push(row);
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &'static str, tree: Tree, tier: u8, position: Slot) -> Skill {
        Skill {
            id,
            name: id,
            description: "",
            tree,
            tier,
            position,
            max_points: 1,
            capstone: false,
            icon: "",
        }
    }

    #[test]
    fn test_slot_conflict_rejected() {
        let skills = vec![
            node("a", Tree::Mobility, 1, Slot::Left),
            node("b", Tree::Mobility, 1, Slot::Left),
        ];
        assert!(matches!(
            validate(&skills),
            Err(Error::SlotConflict {
                tree: Tree::Mobility,
                tier: 1,
                slot: Slot::Left,
            })
        ));
    }

    #[test]
    fn test_same_slot_different_trees_ok() {
        let skills = vec![
            node("a", Tree::Mobility, 1, Slot::Left),
            node("b", Tree::Survival, 1, Slot::Left),
        ];
        assert!(validate(&skills).is_ok());
    }

    #[test]
    fn test_zero_tier_rejected() {
        let skills = vec![node("a", Tree::Mobility, 0, Slot::Center)];
        assert!(matches!(validate(&skills), Err(Error::InvalidSkill { .. })));
    }
}
