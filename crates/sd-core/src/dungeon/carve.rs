//! Tile carving for rooms and tunnels.
//!
//! These helpers only flip walkable/transparent flags and do no bounds
//! checking of their own; configuration validation in the layout
//! generator guarantees every carved coordinate is on the grid.

use super::grid::GameMap;
use super::rect::Rect;

/// Carve a room: the open rectangle `(x1, x2) x (y1, y2)`.
/// The tiles on the rectangle's edges are left solid as walls.
pub fn carve_room(map: &mut GameMap, room: &Rect) {
    for x in (room.x1 + 1)..room.x2 {
        for y in (room.y1 + 1)..room.y2 {
            map.set_walkable(x, y, true);
            map.set_transparent(x, y, true);
        }
    }
}

/// Carve a horizontal tunnel along row `y`, endpoints inclusive in
/// either order.
pub fn carve_h_tunnel(map: &mut GameMap, x1: i32, x2: i32, y: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        map.set_walkable(x, y, true);
        map.set_transparent(x, y, true);
    }
}

/// Carve a vertical tunnel along column `x`, endpoints inclusive in
/// either order.
pub fn carve_v_tunnel(map: &mut GameMap, y1: i32, y2: i32, x: i32) {
    for y in y1.min(y2)..=y1.max(y2) {
        map.set_walkable(x, y, true);
        map.set_transparent(x, y, true);
    }
}
