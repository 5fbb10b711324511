use crate::skills::{Slot, Tree};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown item category: {0}")]
    UnknownCategory(String),

    #[error("Unknown item action: {0}")]
    UnknownAction(String),

    #[error("Unknown rarity: {0}")]
    UnknownRarity(String),

    #[error("Unknown skill tree: {0}")]
    UnknownTree(String),

    #[error("Unknown slot position: {0}")]
    UnknownSlot(String),

    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),

    #[error("Duplicate skill id: {0}")]
    DuplicateSkill(String),

    #[error("Skill slot already occupied: {tree} tier {tier} {slot}")]
    SlotConflict { tree: Tree, tier: u8, slot: Slot },

    #[error("Invalid skill {id}: {reason}")]
    InvalidSkill { id: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
