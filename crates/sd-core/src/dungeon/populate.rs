//! Room population: monsters, items, and the resident NPC.
//!
//! Placement never retries an occupied tile, so per-room counts are
//! upper bounds rather than guarantees. Occupancy is a linear scan over
//! the entities placed so far, O(n) per placement.

use super::rect::Rect;
use crate::entity::{Entity, NpcTemplate, SpawnTables};
use crate::rng::GameRng;

/// Redraw budget when the resident NPC lands on an occupied tile
const NPC_PLACEMENT_TRIES: u32 = 32;

/// Check whether any placed entity (or the player start) holds a tile
fn is_occupied(entities: &[Entity], player_start: Option<(i32, i32)>, x: i32, y: i32) -> bool {
    if player_start == Some((x, y)) {
        return true;
    }
    entities.iter().any(|entity| entity.is_at(x, y))
}

/// Stock one room with a random number of monsters and items.
///
/// Monster and item counts are drawn independently from
/// `[0, max_monsters]` and `[0, max_items]`. Each placement draws an
/// interior tile and is silently dropped if the tile is taken; the
/// weighted category roll happens only for free tiles.
pub fn place_entities(
    room: &Rect,
    entities: &mut Vec<Entity>,
    player_start: Option<(i32, i32)>,
    tables: &SpawnTables,
    max_monsters: u32,
    max_items: u32,
    rng: &mut GameRng,
) {
    let number_of_monsters = rng.rand_range(0, max_monsters as i32);
    let number_of_items = rng.rand_range(0, max_items as i32);

    for _ in 0..number_of_monsters {
        let (x, y) = room.random_interior_point(rng);
        if is_occupied(entities, player_start, x, y) {
            continue;
        }
        if let Some(template) = tables.monsters.roll(rng) {
            entities.push(template.spawn(x, y));
        }
    }

    for _ in 0..number_of_items {
        let (x, y) = room.random_interior_point(rng);
        if is_occupied(entities, player_start, x, y) {
            continue;
        }
        if let Some(template) = tables.items.roll(rng) {
            entities.push(template.spawn(x, y));
        }
    }
}

/// Place the unique resident NPC in a randomly chosen room.
///
/// Exactly one NPC is appended per generation run. The coordinate is
/// redrawn a bounded number of times while occupied; if every redraw
/// collides, the last coordinate is used anyway so the NPC always
/// exists. Does nothing when the room list is empty (the layout
/// generator fails fast before that can happen).
pub fn place_resident_npc(
    rooms: &[Rect],
    entities: &mut Vec<Entity>,
    player_start: Option<(i32, i32)>,
    npc: &NpcTemplate,
    rng: &mut GameRng,
) {
    let Some(room) = rng.choose(rooms) else {
        return;
    };
    let room = *room;

    let (mut x, mut y) = room.random_interior_point(rng);
    for _ in 1..NPC_PLACEMENT_TRIES {
        if !is_occupied(entities, player_start, x, y) {
            break;
        }
        (x, y) = room.random_interior_point(rng);
    }

    entities.push(npc.spawn(x, y));
}
