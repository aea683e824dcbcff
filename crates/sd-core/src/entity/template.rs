//! Spawn templates and weighted category tables.
//!
//! Category selection is a single roll in `[0, total_weight)` resolved
//! against cumulative thresholds, so new monster or item tiers are table
//! entries rather than new branches. The standard tables live in the
//! `sd-data` crate; core only takes references to them.

use super::{AiBehavior, Entity, Fighter, Humanoid, ItemEffect, Profession, Race, RenderOrder};
use crate::data::colors::Color;
use crate::rng::GameRng;

/// One weighted entry
#[derive(Debug, Clone)]
pub struct WeightedEntry<T> {
    pub weight: u32,
    pub value: T,
}

/// Weighted category table
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<WeightedEntry<T>>,
}

impl<T> WeightedTable<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn from_entries(entries: Vec<(u32, T)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(weight, value)| WeightedEntry { weight, value })
                .collect(),
        }
    }

    pub fn push(&mut self, weight: u32, value: T) {
        self.entries.push(WeightedEntry { weight, value });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entry weights
    pub fn total_weight(&self) -> u32 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Resolve a raw roll in `[0, total_weight)` against cumulative
    /// thresholds. Returns `None` when the table is empty or the roll is
    /// out of range.
    pub fn pick(&self, roll: u32) -> Option<&T> {
        let mut threshold = 0;
        for entry in &self.entries {
            threshold += entry.weight;
            if roll < threshold {
                return Some(&entry.value);
            }
        }
        None
    }

    /// Draw a category with one uniform roll
    pub fn roll(&self, rng: &mut GameRng) -> Option<&T> {
        let total = self.total_weight();
        if total == 0 {
            return None;
        }
        self.pick(rng.rand_below(total))
    }
}

impl<T> Default for WeightedTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Stat block for one monster category
#[derive(Debug, Clone, Copy)]
pub struct MonsterTemplate {
    pub name: &'static str,
    pub glyph: char,
    pub color: Color,
    pub race: Race,
    pub level: u32,
    pub hp: i32,
    pub defense: i32,
    pub power: i32,
}

impl MonsterTemplate {
    /// Build a hostile monster entity on the given tile
    pub fn spawn(&self, x: i32, y: i32) -> Entity {
        Entity::new(
            x,
            y,
            self.glyph,
            self.color,
            self.name,
            true,
            RenderOrder::Actor,
        )
        .with_humanoid(Humanoid::new(self.race, Profession::Monster, self.level))
        .with_fighter(Fighter::new(self.hp, self.defense, self.power))
        .with_ai(AiBehavior::BasicMonster)
    }
}

/// Descriptor for one item category
#[derive(Debug, Clone, Copy)]
pub struct ItemTemplate {
    pub name: &'static str,
    pub glyph: char,
    pub color: Color,
    pub effect: ItemEffect,
}

impl ItemTemplate {
    /// Build a non-blocking item entity on the given tile
    pub fn spawn(&self, x: i32, y: i32) -> Entity {
        Entity::new(
            x,
            y,
            self.glyph,
            self.color,
            self.name,
            false,
            RenderOrder::Item,
        )
        .with_item(self.effect)
    }
}

/// Descriptor for the unique resident NPC
#[derive(Debug, Clone, Copy)]
pub struct NpcTemplate {
    pub name: &'static str,
    pub glyph: char,
    pub color: Color,
    pub race: Race,
    pub profession: Profession,
    pub level: u32,
}

impl NpcTemplate {
    /// Build the resident NPC on the given tile
    pub fn spawn(&self, x: i32, y: i32) -> Entity {
        Entity::new(
            x,
            y,
            self.glyph,
            self.color,
            self.name,
            true,
            RenderOrder::Actor,
        )
        .with_humanoid(Humanoid::new(self.race, self.profession, self.level))
        .with_ai(AiBehavior::BasicNpc)
    }
}

/// Everything the population sampler needs to stock a level
#[derive(Debug, Clone)]
pub struct SpawnTables {
    pub monsters: WeightedTable<MonsterTemplate>,
    pub items: WeightedTable<ItemTemplate>,
    pub npc: NpcTemplate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> WeightedTable<&'static str> {
        WeightedTable::from_entries(vec![(50, "weak"), (30, "medium"), (20, "strong")])
    }

    #[test]
    fn test_pick_thresholds() {
        let t = table();
        assert_eq!(t.pick(0), Some(&"weak"));
        assert_eq!(t.pick(49), Some(&"weak"));
        assert_eq!(t.pick(50), Some(&"medium"));
        assert_eq!(t.pick(79), Some(&"medium"));
        assert_eq!(t.pick(80), Some(&"strong"));
        assert_eq!(t.pick(99), Some(&"strong"));
        assert_eq!(t.pick(100), None);
    }

    #[test]
    fn test_total_weight() {
        assert_eq!(table().total_weight(), 100);
        assert_eq!(WeightedTable::<u8>::new().total_weight(), 0);
    }

    #[test]
    fn test_zero_weight_entries_never_picked() {
        let t = WeightedTable::from_entries(vec![(0, "never"), (10, "always")]);
        for roll in 0..10 {
            assert_eq!(t.pick(roll), Some(&"always"));
        }
    }

    #[test]
    fn test_roll_empty_table() {
        let t = WeightedTable::<u8>::new();
        let mut rng = GameRng::new(42);
        assert!(t.roll(&mut rng).is_none());
    }

    #[test]
    fn test_roll_stays_in_table() {
        let t = table();
        let mut rng = GameRng::new(42);
        for _ in 0..200 {
            assert!(t.roll(&mut rng).is_some());
        }
    }
}
