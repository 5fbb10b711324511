//! Skill tree interactive state (points tentatively allocated per node).
//!
//! A scratchpad for planning builds: clicking a node cycles its counter
//! 0 → 1 → … → max → 0. Nothing is persisted and no prerequisite or
//! tree-wide budget is enforced; the total is display-only.

use crate::skills::{Skill, Tree};
use std::collections::HashMap;

/// Per-tree allocation state.
pub struct Planner {
    tree: Tree,
    /// Per-node point cap: skill id → max_points.
    caps: HashMap<&'static str, u8>,
    /// Points currently allocated: skill id → points (absent = 0).
    points: HashMap<&'static str, u8>,
}

impl Planner {
    /// Build a planner over one tree's nodes from a skill list.
    pub fn new(tree: Tree, skills: &'static [Skill]) -> Self {
        let caps = skills
            .iter()
            .filter(|s| s.tree == tree)
            .map(|s| (s.id, s.max_points))
            .collect();
        Self {
            tree,
            caps,
            points: HashMap::new(),
        }
    }

    /// Planner over the built-in skill table.
    pub fn for_tree(tree: Tree) -> Self {
        Self::new(tree, crate::data::skills::SKILLS)
    }

    pub fn tree(&self) -> Tree {
        self.tree
    }

    /// Cycle one node's counter: +1, wrapping to 0 at the cap. Only the
    /// targeted node changes. Returns the new counter.
    ///
    /// Ids not in this tree cannot arrive through the interaction
    /// surface; they are a caller bug.
    pub fn toggle(&mut self, id: &str) -> u8 {
        let Some((&id, &cap)) = self.caps.get_key_value(id) else {
            debug_assert!(false, "toggle on unknown skill id: {id}");
            return 0;
        };
        let counter = self.points.entry(id).or_insert(0);
        *counter = if *counter >= cap { 0 } else { *counter + 1 };
        *counter
    }

    /// Points currently allocated to a node.
    pub fn points(&self, id: &str) -> u8 {
        self.points.get(id).copied().unwrap_or(0)
    }

    /// Whether a node is at its cap.
    pub fn is_maxed(&self, id: &str) -> bool {
        match self.caps.get(id) {
            Some(&cap) => self.points(id) >= cap,
            None => false,
        }
    }

    /// Sum of all counters. Derived on demand, never stored.
    pub fn total(&self) -> u32 {
        self.points.values().map(|&p| u32::from(p)).sum()
    }

    /// Clear every counter.
    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Number of nodes in this tree.
    pub fn node_count(&self) -> usize {
        self.caps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::Slot;

    static TEST_SKILLS: &[Skill] = &[
        Skill {
            id: "marathon_runner",
            name: "Marathon Runner",
            description: "",
            tree: Tree::Mobility,
            tier: 1,
            position: Slot::Left,
            max_points: 3,
            capstone: false,
            icon: "",
        },
        Skill {
            id: "swift_dodger",
            name: "Swift Dodger",
            description: "",
            tree: Tree::Mobility,
            tier: 1,
            position: Slot::Right,
            max_points: 1,
            capstone: false,
            icon: "",
        },
        Skill {
            id: "pack_mule",
            name: "Pack Mule",
            description: "",
            tree: Tree::Survival,
            tier: 1,
            position: Slot::Center,
            max_points: 2,
            capstone: false,
            icon: "",
        },
    ];

    #[test]
    fn test_toggle_cycles_through_cap() {
        let mut planner = Planner::new(Tree::Mobility, TEST_SKILLS);
        assert_eq!(planner.points("marathon_runner"), 0);
        assert_eq!(planner.toggle("marathon_runner"), 1);
        assert_eq!(planner.toggle("marathon_runner"), 2);
        assert_eq!(planner.toggle("marathon_runner"), 3);
        assert!(planner.is_maxed("marathon_runner"));
        // Fourth click wraps back to zero.
        assert_eq!(planner.toggle("marathon_runner"), 0);
    }

    #[test]
    fn test_toggle_is_isolated() {
        let mut planner = Planner::new(Tree::Mobility, TEST_SKILLS);
        planner.toggle("marathon_runner");
        assert_eq!(planner.points("swift_dodger"), 0);
        planner.toggle("swift_dodger");
        assert_eq!(planner.points("marathon_runner"), 1);
    }

    #[test]
    fn test_other_tree_nodes_excluded() {
        let planner = Planner::new(Tree::Mobility, TEST_SKILLS);
        assert_eq!(planner.node_count(), 2);
        assert!(!planner.is_maxed("pack_mule"));
    }

    #[test]
    fn test_total_tracks_counters() {
        let mut planner = Planner::new(Tree::Mobility, TEST_SKILLS);
        for expected in [1, 2, 3, 0] {
            planner.toggle("marathon_runner");
            assert_eq!(planner.total(), expected);
        }
        planner.toggle("marathon_runner");
        planner.toggle("swift_dodger");
        assert_eq!(planner.total(), 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut planner = Planner::new(Tree::Mobility, TEST_SKILLS);
        planner.toggle("marathon_runner");
        planner.toggle("marathon_runner");
        planner.toggle("swift_dodger");
        planner.reset();
        assert_eq!(planner.total(), 0);
        assert_eq!(planner.points("marathon_runner"), 0);
        assert_eq!(planner.points("swift_dodger"), 0);
    }
}
