//! The resident NPC.

use sd_core::data::colors;
use sd_core::entity::{NpcTemplate, Profession, Race};

/// The Sultan: a high-level human mage who holds court somewhere on
/// every generated level.
pub fn resident_npc() -> NpcTemplate {
    NpcTemplate {
        name: "Sultan",
        glyph: 'H',
        color: colors::WHITE,
        race: Race::Human,
        profession: Profession::Mage,
        level: 8,
    }
}
