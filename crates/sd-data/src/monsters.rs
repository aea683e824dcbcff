//! Standard monster spawn table.

use sd_core::data::colors;
use sd_core::entity::{MonsterTemplate, Race, WeightedTable};

/// Weighted monster categories.
///
/// A roll in `[0, 100)` lands goblins on `[0, 50)`, orcs on `[50, 80)`
/// and trolls on `[80, 100)`.
pub fn monster_table() -> WeightedTable<MonsterTemplate> {
    WeightedTable::from_entries(vec![
        (
            50,
            MonsterTemplate {
                name: "Goblin",
                glyph: 'g',
                color: colors::RED,
                race: Race::Goblin,
                level: 1,
                hp: 8,
                defense: 0,
                power: 2,
            },
        ),
        (
            30,
            MonsterTemplate {
                name: "Orc",
                glyph: 'o',
                color: colors::DESATURATED_GREEN,
                race: Race::Orc,
                level: 1,
                hp: 10,
                defense: 1,
                power: 3,
            },
        ),
        (
            20,
            MonsterTemplate {
                name: "Troll",
                glyph: 'T',
                color: colors::DARKER_GREEN,
                race: Race::Troll,
                level: 1,
                hp: 16,
                defense: 2,
                power: 4,
            },
        ),
    ])
}
