//! Standard item spawn table.

use sd_core::data::colors;
use sd_core::entity::{ItemEffect, ItemTemplate, WeightedTable};

/// The single standard item category: a healing potion.
pub fn item_table() -> WeightedTable<ItemTemplate> {
    WeightedTable::from_entries(vec![(
        100,
        ItemTemplate {
            name: "Healing Potion",
            glyph: '!',
            color: colors::VIOLET,
            effect: ItemEffect::Heal { amount: 4 },
        },
    )])
}
