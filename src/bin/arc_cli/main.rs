//! Arc Raiders companion CLI.
//!
//! Usage:
//!   arc-cli items --search battery        # Query the item database
//!   arc-cli item arc_alloy                # Item detail card
//!   arc-cli skills survival               # Print a skill tree
//!   arc-cli plan mobility                 # Interactive point planner
//!   arc-cli quests --item "ARC Alloy"     # Quests needing an item
//!   arc-cli recipes --material "Fabric"   # Recipes consuming a material
//!   arc-cli recycling --material "Wires"  # What shreds into a material
//!   arc-cli maps --item "Rusted Gears"    # Where an item farms best
//!   arc-cli generate items                # Regenerate src/data/items.rs

mod gen_items;
mod gen_skills;

use arc_companion::catalog::{self, Catalog, Rarity};
use arc_companion::config::AppConfig;
use arc_companion::data;
use arc_companion::icons;
use arc_companion::maps;
use arc_companion::query::{self, ItemQuery, Selector};
use arc_companion::quests;
use arc_companion::skills::planner::Planner;
use arc_companion::skills::{self, Tree};
use arc_companion::workshop;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arc-cli")]
#[command(about = "Arc Raiders companion: item database, skill planner, crafting reference")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the item database
    Items {
        /// Substring match on name and description
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category filter (arc_parts, quest_items, crafting_materials,
        /// recyclable, consumables, or "all")
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Action filter (keep, sell, recycle, or "all")
        #[arg(short, long, default_value = "all")]
        action: String,

        /// Rarity filter (common..legendary, or "all")
        #[arg(short, long, default_value = "all")]
        rarity: String,

        /// Sort key: name, value, or rarity (default from config)
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show one item in full detail
    Item {
        /// Item id, e.g. "arc_alloy"
        id: String,

        /// Asset root; when given, the resolved icon path is printed
        #[arg(long)]
        assets: Option<PathBuf>,
    },

    /// Print a skill tree tier by tier
    Skills {
        /// Tree name: mobility, survival, or conditioning (default from config)
        tree: Option<String>,
    },

    /// Interactive skill point planner (type "help" inside)
    Plan {
        /// Tree name: mobility, survival, or conditioning (default from config)
        tree: Option<String>,
    },

    /// List quests, optionally only those requiring an item
    Quests {
        /// Item display name, e.g. "ARC Alloy"
        #[arg(short, long)]
        item: Option<String>,
    },

    /// List workshop recipes, optionally only those using a material
    Recipes {
        /// Material display name, e.g. "Fabric"
        #[arg(short, long)]
        material: Option<String>,
    },

    /// Recycling guide: what to shred, and where materials come from
    Recycling {
        /// Material display name, e.g. "Plastic Parts"
        #[arg(short, long)]
        material: Option<String>,
    },

    /// List raid maps, or show one map in detail
    Maps {
        /// Map slug, e.g. "buried-city"
        slug: Option<String>,

        /// Only maps where this item farms well, e.g. "Rusted Gears"
        #[arg(short, long)]
        item: Option<String>,
    },

    /// Regenerate static data files from JSON exports (standalone)
    Generate {
        #[command(subcommand)]
        what: GenerateTarget,
    },
}

#[derive(Subcommand)]
enum GenerateTarget {
    /// Generate src/data/items.rs from an item export
    Items {
        /// Input JSON export
        #[arg(long, default_value = "export/items.json")]
        input: PathBuf,

        /// Output Rust file
        #[arg(long, default_value = "src/data/items.rs")]
        output: PathBuf,
    },
    /// Generate src/data/skills.rs from a skill export
    Skills {
        /// Input JSON export
        #[arg(long, default_value = "export/skills.json")]
        input: PathBuf,

        /// Output Rust file
        #[arg(long, default_value = "src/data/skills.rs")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load();

    match cli.command {
        Commands::Items {
            search,
            category,
            action,
            rarity,
            sort,
        } => {
            let sort = sort.unwrap_or_else(|| config.default_sort.clone());
            let query = ItemQuery::from_raw(&search, &category, &action, &rarity, &sort);
            cmd_items(&query, config.color_output);
        }
        Commands::Item { id, assets } => cmd_item(&id, assets.as_deref(), config.color_output),
        Commands::Skills { tree } => {
            let tree = parse_tree(tree.as_deref(), &config)?;
            cmd_skills(tree);
        }
        Commands::Plan { tree } => {
            let tree = parse_tree(tree.as_deref(), &config)?;
            cmd_plan(tree)?;
        }
        Commands::Quests { item } => cmd_quests(item.as_deref()),
        Commands::Recipes { material } => cmd_recipes(material.as_deref()),
        Commands::Recycling { material } => cmd_recycling(material.as_deref()),
        Commands::Maps { slug, item } => cmd_maps(slug.as_deref(), item.as_deref()),
        Commands::Generate { what } => match what {
            GenerateTarget::Items { input, output } => gen_items::run(&input, &output)?,
            GenerateTarget::Skills { input, output } => gen_skills::run(&input, &output)?,
        },
    }
    Ok(())
}

fn parse_tree(raw: Option<&str>, config: &AppConfig) -> Result<Tree, arc_companion::Error> {
    let name = raw.unwrap_or(&config.default_tree);
    name.to_lowercase().parse()
}

fn rarity_color(rarity: Rarity, enabled: bool) -> &'static str {
    if !enabled {
        return "";
    }
    match rarity {
        Rarity::Common => "\x1b[37m",
        Rarity::Uncommon => "\x1b[32m",
        Rarity::Rare => "\x1b[34m",
        Rarity::Epic => "\x1b[35m",
        Rarity::Legendary => "\x1b[33m",
    }
}

fn reset_color(enabled: bool) -> &'static str {
    if enabled { "\x1b[0m" } else { "" }
}

fn cmd_items(query: &ItemQuery, color: bool) {
    let catalog = Catalog::builtin();
    let results = query::run(catalog.items(), query);

    println!(
        "{:<32} {:<20} {:<10} {:<8} {:>7}",
        "NAME", "CATEGORY", "RARITY", "ACTION", "VALUE"
    );
    for item in &results {
        println!(
            "{:<32} {:<20} {}{:<10}{} {:<8} {:>7}",
            item.name,
            item.category.label(),
            rarity_color(item.rarity, color),
            item.rarity,
            reset_color(color),
            item.action,
            item.value,
        );
    }
    println!("\nShowing {} of {} items", results.len(), catalog.len());
    if query.category == Selector::All {
        let breakdown: Vec<String> = catalog
            .category_counts()
            .iter()
            .map(|(cat, count)| format!("{}: {}", cat.label(), count))
            .collect();
        println!("{}", breakdown.join("  |  "));
    }
    if results.is_empty() {
        if let Selector::Unmatched = query.category {
            eprintln!("note: unrecognized category filter");
        }
        if let Selector::Unmatched = query.action {
            eprintln!("note: unrecognized action filter");
        }
        if let Selector::Unmatched = query.rarity {
            eprintln!("note: unrecognized rarity filter");
        }
    }
}

fn cmd_item(id: &str, assets: Option<&std::path::Path>, color: bool) {
    let catalog = Catalog::builtin();
    let Some(item) = catalog.get(id) else {
        eprintln!("No item with id {id:?}. Try: arc-cli items --search <name>");
        std::process::exit(1);
    };

    println!(
        "{}{}{} [{}] - {}",
        rarity_color(item.rarity, color),
        item.name,
        reset_color(color),
        item.rarity,
        item.category.label()
    );
    println!("  {}", item.description);
    println!("  Action: {}   Value: {} credits", item.action, item.value);
    if !item.recycles_into.is_empty() {
        println!("  Recycles into: {}", item.recycles_into.join(", "));
    }
    if !item.used_for.is_empty() {
        println!("  Used for: {}", item.used_for.join(", "));
    }
    if !item.location_types.is_empty() {
        println!("  Found in: {}", item.location_types.join(", "));
    }
    if let Some(root) = assets {
        let resolved = icons::resolve(item.icon, icons::item_fallback(item.category), root);
        println!("  Icon: {}", resolved.display());
    }

    let needing = quests::quests_requiring(data::quests::QUESTS, item.name);
    if !needing.is_empty() {
        println!("  Quests:");
        for quest in needing {
            println!("    - {} ({})", quest.name, quest.difficulty);
        }
    }
    let consuming = workshop::recipes_using(data::recipes::RECIPES, item.name);
    if !consuming.is_empty() {
        println!("  Recipes:");
        for recipe in consuming {
            println!("    - {} -> {}", recipe.name, recipe.output);
        }
    }
    let farms = maps::areas_with_item(data::maps::MAP_AREAS, item.name);
    if !farms.is_empty() {
        println!("  Farm on:");
        for area in farms {
            println!("    - {} ({})", area.name, area.difficulty);
        }
    }
}

fn cmd_skills(tree: Tree) {
    let rows = skills::tree_rows(data::skills::SKILLS, tree);
    let count = skills::in_tree(data::skills::SKILLS, tree).len();
    println!(
        "{} Tree - {} skills (emblem {})",
        tree.label(),
        count,
        icons::tree_icon(tree)
    );
    for row in rows {
        print!("  Tier {}:", row.tier);
        let mut first = true;
        for skill in row.slots() {
            if !first {
                print!(" |");
            }
            first = false;
            print!(" {} ({})", skill.name, skill.max_points);
            if skill.capstone {
                print!(" [capstone]");
            }
        }
        println!();
    }
}

fn cmd_quests(item: Option<&str>) {
    let quests: Vec<&quests::Quest> = match item {
        Some(name) => quests::quests_requiring(data::quests::QUESTS, name),
        None => data::quests::QUESTS.iter().collect(),
    };
    if quests.is_empty() {
        println!("No quests found.");
        return;
    }
    for quest in quests {
        println!("{} [{}] ({})", quest.name, quest.category, quest.difficulty);
        for req in quest.required_items {
            println!("    needs {} x{}", req.item, req.quantity);
        }
        println!("    rewards: {}", quest.rewards.join(", "));
    }
}

fn cmd_recipes(material: Option<&str>) {
    let recipes: Vec<&workshop::Recipe> = match material {
        Some(name) => workshop::recipes_using(data::recipes::RECIPES, name),
        None => data::recipes::RECIPES.iter().collect(),
    };
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }
    for recipe in recipes {
        println!(
            "{} [{}] (Workshop L{}) -> {}",
            recipe.name, recipe.category, recipe.workshop_level, recipe.output
        );
        for line in recipe.materials {
            println!("    {} x{}", line.name, line.quantity);
        }
    }
}

fn cmd_recycling(material: Option<&str>) {
    let catalog = Catalog::builtin();
    match material {
        Some(name) => {
            let sources = catalog::recycle_sources(catalog.items(), name);
            if sources.is_empty() {
                println!("Nothing recycles into {name:?}.");
                return;
            }
            println!("Sources of {name}:");
            for item in sources {
                println!("    {} ({}, value {})", item.name, item.rarity, item.value);
            }
        }
        None => {
            println!("Worth recycling:");
            for item in catalog::recyclable(catalog.items()) {
                println!(
                    "    {:<32} -> {}",
                    item.name,
                    if item.recycles_into.is_empty() {
                        "raw materials".to_string()
                    } else {
                        item.recycles_into.join(", ")
                    }
                );
            }
        }
    }
}

fn cmd_maps(slug: Option<&str>, item: Option<&str>) {
    if let Some(slug) = slug {
        let Some(area) = data::maps::get_map_area(slug) else {
            eprintln!("No map with slug {slug:?}. Try: arc-cli maps");
            std::process::exit(1);
        };
        print_map(area);
        println!("    {}", area.description);
        println!("    Best items: {}", area.best_items.join(", "));
        return;
    }
    let areas: Vec<&maps::MapArea> = match item {
        Some(name) => maps::areas_with_item(data::maps::MAP_AREAS, name),
        None => data::maps::MAP_AREAS.iter().collect(),
    };
    if areas.is_empty() {
        println!("No maps found.");
        return;
    }
    for area in areas {
        print_map(area);
    }
}

fn print_map(area: &maps::MapArea) {
    println!(
        "{} ({}, {}, {} players, {} extractions)",
        area.name, area.difficulty, area.size, area.players, area.extractions
    );
    for loc in area.key_locations {
        println!("    {} [{}]: {}", loc.name, loc.tag, loc.detail);
    }
}

/// Interactive planner loop. Reads one command per line from stdin.
fn cmd_plan(tree: Tree) -> io::Result<()> {
    let mut planner = Planner::for_tree(tree);
    println!(
        "{} planner - {} nodes. Type a skill id to add a point, \"help\" for commands.",
        tree.label(),
        planner.node_count()
    );

    let stdin = io::stdin();
    loop {
        print!("plan> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        match input {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("  <skill_id>  cycle a node's points (wraps at max)");
                println!("  show        print the tree with current points");
                println!("  list        list skill ids in this tree");
                println!("  total       total allocated points");
                println!("  reset       clear all points");
                println!("  quit        leave the planner");
            }
            "show" => show_plan(&planner),
            "list" => {
                for skill in skills::in_tree(data::skills::SKILLS, tree) {
                    println!("  {:<24} {}/{}", skill.id, planner.points(skill.id), skill.max_points);
                }
            }
            "total" => println!("  {} points allocated", planner.total()),
            "reset" => {
                planner.reset();
                println!("  all points cleared");
            }
            id => {
                if data::skills::get_skill(id).is_some_and(|s| s.tree == tree) {
                    let points = planner.toggle(id);
                    let max = data::skills::get_skill(id).map(|s| s.max_points).unwrap_or(0);
                    println!("  {id}: {points}/{max} (total {})", planner.total());
                } else {
                    println!("  unknown skill id {id:?} - try \"list\"");
                }
            }
        }
    }
    Ok(())
}

fn show_plan(planner: &Planner) {
    let rows = skills::tree_rows(data::skills::SKILLS, planner.tree());
    for row in rows {
        print!("  Tier {}:", row.tier);
        let mut first = true;
        for skill in row.slots() {
            if !first {
                print!(" |");
            }
            first = false;
            let marker = if planner.is_maxed(skill.id) { "*" } else { "" };
            print!(
                " {} {}/{}{}",
                skill.name,
                planner.points(skill.id),
                skill.max_points,
                marker
            );
        }
        println!();
    }
    println!("  Total: {} points", planner.total());
}
