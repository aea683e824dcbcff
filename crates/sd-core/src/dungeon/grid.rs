//! Tile grid storage.
//!
//! A fixed-size 2-D grid of flag tiles. Walkable and transparent flags
//! are carved by generation; the explored/visible pair is visibility
//! memory maintained by the renderer's field-of-view pass and never
//! touched by generation itself.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Per-tile flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TileFlags: u8 {
        /// Entities can stand here
        const WALKABLE = 0x01;
        /// Sight lines pass through
        const TRANSPARENT = 0x02;
        /// The player has seen this tile at some point
        const EXPLORED = 0x04;
        /// The tile is in the player's current field of view
        const VISIBLE = 0x08;
    }
}

// Manual serde impl for TileFlags
impl Serialize for TileFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TileFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(TileFlags::from_bits_truncate(bits))
    }
}

/// 2-D tile grid indexed by `(x, y)`
///
/// Dimensions are fixed at construction and never change. Every tile
/// starts as solid rock: not walkable, not transparent, unexplored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMap {
    width: i32,
    height: i32,
    tiles: Vec<Vec<TileFlags>>,
}

impl GameMap {
    /// Create a grid of solid rock
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            tiles: vec![vec![TileFlags::default(); height as usize]; width as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if a position is on the grid
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    fn get(&self, x: i32, y: i32) -> TileFlags {
        self.tiles[x as usize][y as usize]
    }

    fn set(&mut self, x: i32, y: i32, flag: TileFlags, value: bool) {
        self.tiles[x as usize][y as usize].set(flag, value);
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.get(x, y).contains(TileFlags::WALKABLE)
    }

    /// Set the walkable flag. The coordinate must be on the grid.
    pub fn set_walkable(&mut self, x: i32, y: i32, walkable: bool) {
        self.set(x, y, TileFlags::WALKABLE, walkable);
    }

    pub fn is_transparent(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.get(x, y).contains(TileFlags::TRANSPARENT)
    }

    /// Set the transparent flag. The coordinate must be on the grid.
    pub fn set_transparent(&mut self, x: i32, y: i32, transparent: bool) {
        self.set(x, y, TileFlags::TRANSPARENT, transparent);
    }

    pub fn is_explored(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.get(x, y).contains(TileFlags::EXPLORED)
    }

    /// Mark a tile as explored. Out-of-range coordinates are ignored.
    pub fn set_explored(&mut self, x: i32, y: i32) {
        if self.in_bounds(x, y) {
            self.tiles[x as usize][y as usize].insert(TileFlags::EXPLORED);
        }
    }

    pub fn is_visible(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.get(x, y).contains(TileFlags::VISIBLE)
    }

    /// Recompute the field of view from the player position.
    ///
    /// Simple raycasting: every tile within `radius` (circular) that has
    /// an unobstructed sight line from the player becomes visible and is
    /// remembered as explored.
    pub fn update_visibility(&mut self, player_x: i32, player_y: i32, radius: i32) {
        for col in &mut self.tiles {
            for tile in col {
                tile.remove(TileFlags::VISIBLE);
            }
        }

        if !self.in_bounds(player_x, player_y) {
            return;
        }
        self.tiles[player_x as usize][player_y as usize]
            .insert(TileFlags::VISIBLE | TileFlags::EXPLORED);

        for dx in -radius..=radius {
            for dy in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }

                let target_x = player_x + dx;
                let target_y = player_y + dy;

                if self.in_bounds(target_x, target_y)
                    && self.has_line_of_sight(player_x, player_y, target_x, target_y)
                {
                    self.tiles[target_x as usize][target_y as usize]
                        .insert(TileFlags::VISIBLE | TileFlags::EXPLORED);
                }
            }
        }
    }

    /// Check the sight line between two tiles (Bresenham's algorithm).
    /// An opaque tile ends the line but is itself visible.
    pub fn has_line_of_sight(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> bool {
        let mut x = x0;
        let mut y = y0;

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if x != x0 || y != y0 {
                if !self.in_bounds(x, y) {
                    return false;
                }
                if !self.get(x, y).contains(TileFlags::TRANSPARENT) {
                    // The blocking tile itself can be seen, nothing past it.
                    return x == x1 && y == y1;
                }
            }

            if x == x1 && y == y1 {
                return true;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_is_solid_rock() {
        let map = GameMap::new(10, 8);
        assert_eq!(map.width(), 10);
        assert_eq!(map.height(), 8);
        for x in 0..10 {
            for y in 0..8 {
                assert!(!map.is_walkable(x, y));
                assert!(!map.is_transparent(x, y));
                assert!(!map.is_explored(x, y));
                assert!(!map.is_visible(x, y));
            }
        }
    }

    #[test]
    fn test_bounds() {
        let map = GameMap::new(10, 8);
        assert!(map.in_bounds(0, 0));
        assert!(map.in_bounds(9, 7));
        assert!(!map.in_bounds(10, 0));
        assert!(!map.in_bounds(0, 8));
        assert!(!map.in_bounds(-1, 0));
    }

    #[test]
    fn test_flag_mutators() {
        let mut map = GameMap::new(10, 8);
        map.set_walkable(3, 4, true);
        map.set_transparent(3, 4, true);
        assert!(map.is_walkable(3, 4));
        assert!(map.is_transparent(3, 4));

        map.set_walkable(3, 4, false);
        assert!(!map.is_walkable(3, 4));
        assert!(map.is_transparent(3, 4), "flags are independent");
    }

    #[test]
    fn test_explored_latches() {
        let mut map = GameMap::new(10, 8);
        map.set_explored(2, 2);
        assert!(map.is_explored(2, 2));
        // Out-of-range marks are ignored rather than panicking.
        map.set_explored(-5, 100);
    }

    #[test]
    fn test_line_of_sight_blocked_by_rock() {
        let mut map = GameMap::new(10, 10);
        for x in 1..9 {
            map.set_transparent(x, 5, true);
        }
        assert!(map.has_line_of_sight(1, 5, 8, 5));
        // Drop an opaque tile in the middle of the corridor.
        map.set_transparent(4, 5, false);
        assert!(!map.has_line_of_sight(1, 5, 8, 5));
        // The blocking tile itself is still visible.
        assert!(map.has_line_of_sight(1, 5, 4, 5));
    }

    #[test]
    fn test_update_visibility_marks_explored() {
        let mut map = GameMap::new(20, 20);
        for x in 5..15 {
            for y in 5..15 {
                map.set_walkable(x, y, true);
                map.set_transparent(x, y, true);
            }
        }

        map.update_visibility(10, 10, 4);
        assert!(map.is_visible(10, 10));
        assert!(map.is_visible(12, 10));
        assert!(map.is_explored(12, 10));
        // Outside the radius.
        assert!(!map.is_visible(10, 18));

        // Visibility is per-frame, explored is memory.
        map.update_visibility(6, 6, 2);
        assert!(!map.is_visible(12, 10));
        assert!(map.is_explored(12, 10));
    }
}
