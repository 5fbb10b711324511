//! Generator for src/data/items.rs from the cheat-sheet JSON export.
//!
//! Run with: cargo run --bin arc-cli generate items
//!
//! The export is an array of objects with camelCase keys (the shape the
//! site's extraction scripts produce). Every enum tag is validated up
//! front; an unknown category/action/rarity aborts the run instead of
//! emitting a table that cannot compile.

use arc_companion::catalog::{Action, Category, Rarity};
use arc_companion::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SourceItem {
    id: String,
    name: String,
    category: String,
    rarity: String,
    action: String,
    value: u32,
    #[serde(default)]
    image: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    recycles_into: Vec<String>,
    #[serde(default)]
    used_for: Vec<String>,
    #[serde(default)]
    location_types: Vec<String>,
}

struct CheckedItem {
    source: SourceItem,
    category: Category,
    action: Action,
    rarity: Rarity,
}

pub fn run(input: &Path, output: &Path) -> Result<()> {
    println!("Loading item export from {}...", input.display());
    let raw = std::fs::read_to_string(input)?;
    let sources: Vec<SourceItem> = serde_json::from_str(&raw)?;

    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(sources.len());
    for source in sources {
        if !seen.insert(source.id.clone()) {
            return Err(Error::DuplicateItem(source.id));
        }
        let category: Category = source.category.parse()?;
        let action: Action = source.action.parse()?;
        let rarity: Rarity = source.rarity.parse()?;
        items.push(CheckedItem {
            source,
            category,
            action,
            rarity,
        });
    }

    let mut out = File::create(output)?;
    write_header(&mut out)?;
    write_items(&mut out, &items)?;
    write_index(&mut out, &items)?;
    write_lookup_fn(&mut out)?;
    write_tests(&mut out)?;

    println!("Generated {} item entries", items.len());
    println!("Output: {}", output.display());
    Ok(())
}

fn write_header(out: &mut File) -> std::io::Result<()> {
    writeln!(out, "//! Auto-generated item data from the cheat-sheet JSON export.")?;
    writeln!(
        out,
        "//! Do not edit manually - regenerate with: cargo run --bin arc-cli generate items"
    )?;
    writeln!(out)?;
    writeln!(out, "use crate::catalog::{{Action, Category, Item, Rarity}};")?;
    writeln!(out, "use phf::phf_map;")?;
    writeln!(out)?;
    Ok(())
}

fn write_items(out: &mut File, items: &[CheckedItem]) -> std::io::Result<()> {
    writeln!(
        out,
        "/// Full catalog in export order. This order is the tie-break order for"
    )?;
    writeln!(out, "/// stable sorts.")?;
    writeln!(out, "pub static ITEMS: &[Item] = &[")?;
    for item in items {
        writeln!(out, "    Item {{")?;
        writeln!(out, "        id: \"{}\",", escape_str(&item.source.id))?;
        writeln!(out, "        name: \"{}\",", escape_str(&item.source.name))?;
        writeln!(
            out,
            "        description: \"{}\",",
            escape_str(strip_markers(&item.source.description))
        )?;
        writeln!(out, "        category: Category::{:?},", item.category)?;
        writeln!(out, "        action: Action::{:?},", item.action)?;
        writeln!(out, "        rarity: Rarity::{:?},", item.rarity)?;
        writeln!(out, "        value: {},", item.source.value)?;
        writeln!(out, "        icon: \"{}\",", escape_str(&item.source.image))?;
        writeln!(
            out,
            "        recycles_into: &[{}],",
            str_slice(&item.source.recycles_into)
        )?;
        writeln!(out, "        used_for: &[{}],", str_slice(&item.source.used_for))?;
        writeln!(
            out,
            "        location_types: &[{}],",
            str_slice(&item.source.location_types)
        )?;
        writeln!(out, "    }},")?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;
    Ok(())
}

fn write_index(out: &mut File, items: &[CheckedItem]) -> std::io::Result<()> {
    writeln!(out, "/// Item id → index into [`ITEMS`].")?;
    writeln!(
        out,
        "pub static ITEM_INDEX: phf::Map<&'static str, usize> = phf_map! {{"
    )?;
    for (idx, item) in items.iter().enumerate() {
        writeln!(out, "    \"{}\" => {},", escape_str(&item.source.id), idx)?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;
    Ok(())
}

fn write_lookup_fn(out: &mut File) -> std::io::Result<()> {
    writeln!(out, "pub fn get_item(id: &str) -> Option<&'static Item> {{")?;
    writeln!(out, "    ITEM_INDEX.get(id).map(|&idx| &ITEMS[idx])")?;
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
    writeln!(out, "    fn test_item_count() {{")?;
    writeln!(out, "        assert_eq!(ITEMS.len(), ITEM_INDEX.len());")?;
    writeln!(out, "        assert!(ITEMS.len() >= 40);")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    #[test]")?;
    writeln!(out, "    fn test_index_matches_slice() {{")?;
    writeln!(out, "        for (idx, item) in ITEMS.iter().enumerate() {{")?;
    writeln!(
        out,
        "            assert_eq!(ITEM_INDEX.get(item.id), Some(&idx), \"index drift: {{}}\", item.id);"
    )?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    #[test]")?;
    writeln!(out, "    fn test_battery() {{")?;
    writeln!(
        out,
        "        let item = get_item(\"battery\").expect(\"battery should exist\");"
    )?;
    writeln!(out, "        assert_eq!(item.name, \"Battery\");")?;
    writeln!(out, "        assert_eq!(item.value, 50);")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    #[test]")?;
    writeln!(out, "    fn test_nonexistent_item() {{")?;
    writeln!(out, "        assert!(get_item(\"no_such_item\").is_none());")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(())
}

/// Drop the export's leading emoji markers (🔧, 🏗️, 💰) and trim.
fn strip_markers(s: &str) -> &str {
    s.trim_start_matches(|c: char| !c.is_ascii()).trim()
}

fn str_slice(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("\"{}\"", escape_str(v)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escape a string for use inside a Rust string literal.
fn escape_str(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markers() {
        assert_eq!(strip_markers("🔧 Used to craft: Bettina I"), "Used to craft: Bettina I");
        assert_eq!(strip_markers("plain text"), "plain text");
        assert_eq!(strip_markers(""), "");
    }

    #[test]
    fn test_escape_str() {
        assert_eq!(escape_str(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_str("a\\b"), "a\\\\b");
    }
}
