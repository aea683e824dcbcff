//! Dungeon generation
//!
//! Tile grid, room rectangles, carving, room layout and population.

mod carve;
mod generation;
mod grid;
mod populate;
mod rect;

pub use carve::{carve_h_tunnel, carve_room, carve_v_tunnel};
pub use generation::{GeneratedLevel, GenerationError, MapConfig, generate_level};
pub use grid::{GameMap, TileFlags};
pub use populate::{place_entities, place_resident_npc};
pub use rect::Rect;
