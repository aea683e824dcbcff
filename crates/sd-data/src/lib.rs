//! sd-data: Static game data for Sultan's Dungeon
//!
//! The standard monster and item spawn tables and the resident NPC.
//! Depends on `sd-core` for the template types; core never depends on
//! data, it only consumes table references.

mod items;
mod monsters;
mod npcs;

pub use items::item_table;
pub use monsters::monster_table;
pub use npcs::resident_npc;

use sd_core::entity::SpawnTables;

/// The standard level population: goblins, orcs and trolls, healing
/// potions, and the Sultan.
pub fn standard_tables() -> SpawnTables {
    SpawnTables {
        monsters: monster_table(),
        items: item_table(),
        npc: resident_npc(),
    }
}
