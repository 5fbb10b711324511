//! Generator for src/data/skills.rs from the cheat-sheet JSON export.
//!
//! Run with: cargo run --bin arc-cli generate skills
//!
//! Validates the tree layout before emitting: unknown tree/position
//! tags, duplicate ids, zero-point nodes, and doubly-occupied
//! `(tree, tier, position)` slots all abort the run.

use arc_companion::error::{Error, Result};
use arc_companion::skills::{Slot, Tree};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SourceSkill {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    tree: String,
    tier: u8,
    position: String,
    max_points: u8,
    #[serde(default)]
    is_capstone: bool,
    #[serde(default)]
    icon: String,
}

struct CheckedSkill {
    source: SourceSkill,
    tree: Tree,
    position: Slot,
}

pub fn run(input: &Path, output: &Path) -> Result<()> {
    println!("Loading skill export from {}...", input.display());
    let raw = std::fs::read_to_string(input)?;
    let sources: Vec<SourceSkill> = serde_json::from_str(&raw)?;

    let mut ids = HashSet::new();
    let mut slots = HashSet::new();
    let mut skills = Vec::with_capacity(sources.len());
    for source in sources {
        if !ids.insert(source.id.clone()) {
            return Err(Error::DuplicateSkill(source.id));
        }
        let tree: Tree = source.tree.parse()?;
        let position: Slot = source.position.parse()?;
        if source.tier == 0 {
            return Err(Error::InvalidSkill {
                id: source.id,
                reason: "tier must be at least 1".to_string(),
            });
        }
        if source.max_points == 0 {
            return Err(Error::InvalidSkill {
                id: source.id,
                reason: "max_points must be at least 1".to_string(),
            });
        }
        if !slots.insert((tree, source.tier, position)) {
            return Err(Error::SlotConflict {
                tree,
                tier: source.tier,
                slot: position,
            });
        }
        skills.push(CheckedSkill {
            source,
            tree,
            position,
        });
    }

    // Emit grouped by tree, then tier, then slot order, so the table
    // reads the way the trees render.
    skills.sort_by_key(|s| (tree_order(s.tree), s.source.tier, slot_order(s.position)));

    let mut out = File::create(output)?;
    write_header(&mut out)?;
    write_skills(&mut out, &skills)?;
    write_index(&mut out, &skills)?;
    write_lookup_fn(&mut out)?;
    write_tests(&mut out)?;

    println!("Generated {} skill entries", skills.len());
    println!("Output: {}", output.display());
    Ok(())
}

fn tree_order(tree: Tree) -> u8 {
    match tree {
        Tree::Mobility => 0,
        Tree::Survival => 1,
        Tree::Conditioning => 2,
    }
}

fn slot_order(slot: Slot) -> u8 {
    match slot {
        Slot::Left => 0,
        Slot::Center => 1,
        Slot::Right => 2,
    }
}

fn write_header(out: &mut File) -> std::io::Result<()> {
    writeln!(out, "//! Auto-generated skill data from the cheat-sheet JSON export.")?;
    writeln!(
        out,
        "//! Do not edit manually - regenerate with: cargo run --bin arc-cli generate skills"
    )?;
    writeln!(out)?;
    writeln!(out, "use crate::skills::{{Skill, Slot, Tree}};")?;
    writeln!(out, "use phf::phf_map;")?;
    writeln!(out)?;
    Ok(())
}

fn write_skills(out: &mut File, skills: &[CheckedSkill]) -> std::io::Result<()> {
    writeln!(
        out,
        "/// All skill nodes in export order: by tree, then tier, then slot."
    )?;
    writeln!(out, "pub static SKILLS: &[Skill] = &[")?;
    let mut current_tree = None;
    for skill in skills {
        if current_tree != Some(skill.tree) {
            writeln!(out, "    // {}", skill.tree.label())?;
            current_tree = Some(skill.tree);
        }
        writeln!(out, "    Skill {{")?;
        writeln!(out, "        id: \"{}\",", escape_str(&skill.source.id))?;
        writeln!(out, "        name: \"{}\",", escape_str(&skill.source.name))?;
        writeln!(
            out,
            "        description: \"{}\",",
            escape_str(&skill.source.description)
        )?;
        writeln!(out, "        tree: Tree::{:?},", skill.tree)?;
        writeln!(out, "        tier: {},", skill.source.tier)?;
        writeln!(out, "        position: Slot::{:?},", skill.position)?;
        writeln!(out, "        max_points: {},", skill.source.max_points)?;
        writeln!(out, "        capstone: {},", skill.source.is_capstone)?;
        writeln!(out, "        icon: \"{}\",", escape_str(&skill.source.icon))?;
        writeln!(out, "    }},")?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;
    Ok(())
}

fn write_index(out: &mut File, skills: &[CheckedSkill]) -> std::io::Result<()> {
    writeln!(out, "/// Skill id → index into [`SKILLS`].")?;
    writeln!(
        out,
        "pub static SKILL_INDEX: phf::Map<&'static str, usize> = phf_map! {{"
    )?;
    for (idx, skill) in skills.iter().enumerate() {
        writeln!(out, "    \"{}\" => {},", escape_str(&skill.source.id), idx)?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;
    Ok(())
}

fn write_lookup_fn(out: &mut File) -> std::io::Result<()> {
    writeln!(out, "pub fn get_skill(id: &str) -> Option<&'static Skill> {{")?;
    writeln!(out, "    SKILL_INDEX.get(id).map(|&idx| &SKILLS[idx])")?;
    writeln!(out, "}}")?;
    Ok(())
}

fn write_tests(out: &mut File) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "#[cfg(test)]")?;
    writeln!(out, "mod tests {{")?;
    writeln!(out, "    use super::*;")?;
    writeln!(out)?;
    writeln!(out, "    #[test]")?;
    writeln!(out, "    fn test_skill_count() {{")?;
    writeln!(out, "        assert_eq!(SKILLS.len(), SKILL_INDEX.len());")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    #[test]")?;
    writeln!(out, "    fn test_index_matches_slice() {{")?;
    writeln!(out, "        for (idx, skill) in SKILLS.iter().enumerate() {{")?;
    writeln!(
        out,
        "            assert_eq!(SKILL_INDEX.get(skill.id), Some(&idx), \"index drift: {{}}\", skill.id);"
    )?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    #[test]")?;
    writeln!(out, "    fn test_marathon_runner() {{")?;
    writeln!(
        out,
        "        let skill = get_skill(\"marathon_runner\").expect(\"marathon_runner should exist\");"
    )?;
    writeln!(out, "        assert_eq!(skill.tree, Tree::Mobility);")?;
    writeln!(out, "        assert_eq!(skill.max_points, 3);")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    #[test]")?;
    writeln!(out, "    fn test_each_tree_has_one_capstone() {{")?;
    writeln!(out, "        for tree in Tree::ALL {{")?;
    writeln!(out, "            let capstones = SKILLS")?;
    writeln!(out, "                .iter()")?;
    writeln!(out, "                .filter(|s| s.tree == tree && s.capstone)")?;
    writeln!(out, "                .count();")?;
    writeln!(
        out,
        "            assert_eq!(capstones, 1, \"{{tree}} should have exactly one capstone\");"
    )?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(())
}

/// Escape a string for use inside a Rust string literal.
fn escape_str(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
