//! Entity model
//!
//! Positioned game objects with optional capability components. The
//! generation core only constructs and appends entities; moving,
//! fighting and using them belongs to the game loop.

mod ai;
mod fighter;
mod humanoid;
mod item;
mod template;

pub use ai::AiBehavior;
pub use fighter::Fighter;
pub use humanoid::{Humanoid, Profession, Race};
pub use item::ItemEffect;
pub use template::{
    ItemTemplate, MonsterTemplate, NpcTemplate, SpawnTables, WeightedTable,
};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::data::colors::Color;

/// Draw layering for entities sharing a tile: higher values render on top
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumIter,
)]
#[repr(u8)]
pub enum RenderOrder {
    Corpse = 1,
    Item = 2,
    Actor = 3,
}

/// A positioned game object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
    pub color: Color,
    pub name: String,
    /// Whether this entity blocks movement through its tile
    pub blocks: bool,
    pub render_order: RenderOrder,
    pub fighter: Option<Fighter>,
    pub humanoid: Option<Humanoid>,
    pub item: Option<ItemEffect>,
    pub ai: Option<AiBehavior>,
}

impl Entity {
    /// Create an entity with no capability components
    pub fn new(
        x: i32,
        y: i32,
        glyph: char,
        color: Color,
        name: impl Into<String>,
        blocks: bool,
        render_order: RenderOrder,
    ) -> Self {
        Self {
            x,
            y,
            glyph,
            color,
            name: name.into(),
            blocks,
            render_order,
            fighter: None,
            humanoid: None,
            item: None,
            ai: None,
        }
    }

    /// Attach combat stats
    pub fn with_fighter(mut self, fighter: Fighter) -> Self {
        self.fighter = Some(fighter);
        self
    }

    /// Attach a humanoid descriptor
    pub fn with_humanoid(mut self, humanoid: Humanoid) -> Self {
        self.humanoid = Some(humanoid);
        self
    }

    /// Attach an item descriptor
    pub fn with_item(mut self, item: ItemEffect) -> Self {
        self.item = Some(item);
        self
    }

    /// Attach an AI behavior
    pub fn with_ai(mut self, ai: AiBehavior) -> Self {
        self.ai = Some(ai);
        self
    }

    /// Check whether the entity occupies the given tile
    pub fn is_at(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::colors;

    #[test]
    fn test_entity_builder() {
        let goblin = Entity::new(3, 4, 'g', colors::RED, "Goblin", true, RenderOrder::Actor)
            .with_fighter(Fighter::new(8, 0, 2))
            .with_humanoid(Humanoid::new(Race::Goblin, Profession::Monster, 1))
            .with_ai(AiBehavior::BasicMonster);

        assert!(goblin.is_at(3, 4));
        assert!(!goblin.is_at(4, 3));
        assert_eq!(goblin.name, "Goblin");
        assert_eq!(goblin.fighter.unwrap().max_hp, 8);
        assert!(goblin.item.is_none());
    }

    #[test]
    fn test_render_order_layering() {
        assert!(RenderOrder::Corpse < RenderOrder::Item);
        assert!(RenderOrder::Item < RenderOrder::Actor);
    }
}
