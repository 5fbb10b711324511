//! Static data tables.
//!
//! `items` and `skills` are generated from JSON exports via
//! `arc-cli generate`; the remaining tables are hand-maintained.

pub mod items;
pub mod maps;
pub mod quests;
pub mod recipes;
pub mod skills;
