//! Icon path resolution with deterministic fallbacks.
//!
//! Records carry a primary icon path; when the file is missing from the
//! asset root, a category-keyed (or tree-keyed) stand-in is used instead.

use crate::catalog::Category;
use crate::skills::Tree;
use std::path::{Path, PathBuf};

/// Stand-in icon for items whose own icon is missing.
pub fn item_fallback(category: Category) -> &'static str {
    match category {
        Category::ArcParts => "/items/fallback_arc_parts.png",
        Category::QuestItems => "/items/fallback_quest.png",
        Category::CraftingMaterials => "/items/fallback_materials.png",
        Category::Recyclable => "/items/fallback_recyclable.png",
        Category::Consumables => "/items/fallback_consumables.png",
    }
}

/// Tree emblem, also the stand-in for skill icons.
pub fn tree_icon(tree: Tree) -> &'static str {
    match tree {
        Tree::Mobility => "/skills/mobility_tree.png",
        Tree::Survival => "/skills/survival_tree.png",
        Tree::Conditioning => "/skills/conditioning_tree.png",
    }
}

/// Resolve an icon against an asset root: the primary path if the file
/// exists, else the fallback. Paths in the data use a leading `/`.
pub fn resolve(primary: &str, fallback: &str, asset_root: &Path) -> PathBuf {
    let candidate = asset_root.join(primary.trim_start_matches('/'));
    if candidate.is_file() {
        candidate
    } else {
        asset_root.join(fallback.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_primary_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = resolve(
            "/items/nope.png",
            item_fallback(Category::Consumables),
            dir.path(),
        );
        assert_eq!(
            resolved,
            dir.path().join("items/fallback_consumables.png")
        );
    }

    #[test]
    fn test_existing_primary_wins() {
        let dir = tempfile::tempdir().unwrap();
        let items = dir.path().join("items");
        std::fs::create_dir_all(&items).unwrap();
        std::fs::write(items.join("battery.png"), b"png").unwrap();
        let resolved = resolve(
            "/items/battery.png",
            item_fallback(Category::CraftingMaterials),
            dir.path(),
        );
        assert_eq!(resolved, dir.path().join("items/battery.png"));
    }
}
