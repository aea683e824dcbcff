//! Room layout generation.
//!
//! Runs a fixed budget of placement attempts, rejecting candidates that
//! touch an accepted room, carving the survivors and joining consecutive
//! room centers with L-shaped tunnels. Each accepted room is populated
//! immediately; the resident NPC is placed once the layout is final.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::carve::{carve_h_tunnel, carve_room, carve_v_tunnel};
use super::grid::GameMap;
use super::populate::{place_entities, place_resident_npc};
use super::rect::Rect;
use crate::consts;
use crate::entity::{Entity, SpawnTables};
use crate::rng::GameRng;

/// Errors from configuration validation and layout generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("max_rooms must be at least 1")]
    NoRoomAttempts,

    #[error("room size range is invalid: min {min}, max {max}")]
    InvalidRoomSize { min: i32, max: i32 },

    #[error("rooms of size {size} cannot fit on a {width}x{height} map")]
    RoomTooLarge { size: i32, width: i32, height: i32 },

    #[error("grid is {grid_width}x{grid_height} but the config expects {width}x{height}")]
    GridSizeMismatch {
        grid_width: i32,
        grid_height: i32,
        width: i32,
        height: i32,
    },

    #[error("no rooms were accepted after {attempts} attempts")]
    NoRoomsAccepted { attempts: u32 },
}

/// Level generation parameters
///
/// Validated up front so the carving layer never has to bounds-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    pub map_width: i32,
    pub map_height: i32,
    /// Number of placement attempts. A rejected attempt still consumes
    /// one, so the accepted room count is usually lower.
    pub max_rooms: u32,
    pub room_min_size: i32,
    pub room_max_size: i32,
    pub max_monsters_per_room: u32,
    pub max_items_per_room: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            map_width: consts::MAP_WIDTH,
            map_height: consts::MAP_HEIGHT,
            max_rooms: consts::MAX_ROOMS,
            room_min_size: consts::ROOM_MIN_SIZE,
            room_max_size: consts::ROOM_MAX_SIZE,
            max_monsters_per_room: consts::MAX_MONSTERS_PER_ROOM,
            max_items_per_room: consts::MAX_ITEMS_PER_ROOM,
        }
    }
}

impl MapConfig {
    /// Check the parameters against the grid they will carve into.
    ///
    /// Room positions are drawn from `[0, map_width - w - 1]`, so the
    /// largest room plus its far-edge margin must fit on both axes;
    /// with that established, no carve can ever leave the grid.
    pub fn validate(&self, map: &GameMap) -> Result<(), GenerationError> {
        if map.width() != self.map_width || map.height() != self.map_height {
            return Err(GenerationError::GridSizeMismatch {
                grid_width: map.width(),
                grid_height: map.height(),
                width: self.map_width,
                height: self.map_height,
            });
        }
        if self.max_rooms == 0 {
            return Err(GenerationError::NoRoomAttempts);
        }
        if self.room_min_size < 2 || self.room_min_size > self.room_max_size {
            return Err(GenerationError::InvalidRoomSize {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }
        if self.room_max_size > self.map_width - 1 || self.room_max_size > self.map_height - 1 {
            return Err(GenerationError::RoomTooLarge {
                size: self.room_max_size,
                width: self.map_width,
                height: self.map_height,
            });
        }
        Ok(())
    }
}

/// Everything one generation run produces.
///
/// The caller merges the entity list into its own state; generation
/// never writes to shared collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedLevel {
    /// Accepted rooms, in acceptance order
    pub rooms: Vec<Rect>,
    /// Center of the first accepted room
    pub player_start: (i32, i32),
    /// Monsters, items and the resident NPC, in placement order
    pub entities: Vec<Entity>,
}

/// Generate a level: carve rooms and tunnels into `map` and stock them
/// with entities drawn from `tables`.
///
/// Runs exactly `config.max_rooms` placement attempts. Each attempt
/// draws a size in `[room_min_size, room_max_size]` and a position that
/// keeps a margin on the far edges; a candidate touching any accepted
/// room is skipped without retry. The first accepted room holds the
/// player start; every later room is joined to its predecessor's center
/// with an L-shaped tunnel whose bend orientation is a coin flip.
///
/// The per-room draw order is fixed (width, height, x, y, coin flip for
/// non-first rooms, monster count, item count, per-entity draws), so a
/// given seed and configuration always produce the same level.
pub fn generate_level(
    map: &mut GameMap,
    config: &MapConfig,
    tables: &SpawnTables,
    rng: &mut GameRng,
) -> Result<GeneratedLevel, GenerationError> {
    config.validate(map)?;

    let mut rooms: Vec<Rect> = Vec::new();
    let mut entities: Vec<Entity> = Vec::new();
    let mut player_start: Option<(i32, i32)> = None;

    for _ in 0..config.max_rooms {
        let w = rng.rand_range(config.room_min_size, config.room_max_size);
        let h = rng.rand_range(config.room_min_size, config.room_max_size);
        let x = rng.rand_range(0, config.map_width - w - 1);
        let y = rng.rand_range(0, config.map_height - h - 1);

        let new_room = Rect::new(x, y, w, h);

        if rooms.iter().any(|other| new_room.intersects(other)) {
            continue;
        }

        carve_room(map, &new_room);
        let (new_x, new_y) = new_room.center();

        match rooms.last() {
            None => {
                player_start = Some((new_x, new_y));
            }
            Some(prev) => {
                let (prev_x, prev_y) = prev.center();
                if rng.coin_flip() {
                    // Horizontal leg first, along the previous room's row.
                    carve_h_tunnel(map, prev_x, new_x, prev_y);
                    carve_v_tunnel(map, prev_y, new_y, new_x);
                } else {
                    carve_v_tunnel(map, prev_y, new_y, prev_x);
                    carve_h_tunnel(map, prev_x, new_x, new_y);
                }
            }
        }

        place_entities(
            &new_room,
            &mut entities,
            player_start,
            tables,
            config.max_monsters_per_room,
            config.max_items_per_room,
            rng,
        );

        rooms.push(new_room);
    }

    let player_start = player_start.ok_or(GenerationError::NoRoomsAccepted {
        attempts: config.max_rooms,
    })?;

    place_resident_npc(&rooms, &mut entities, Some(player_start), &tables.npc, rng);

    Ok(GeneratedLevel {
        rooms,
        player_start,
        entities,
    })
}
