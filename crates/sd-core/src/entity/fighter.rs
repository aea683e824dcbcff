//! Combat statistics component.

use serde::{Deserialize, Serialize};

/// Combat stats for an entity that can deal and take damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    pub max_hp: i32,
    pub hp: i32,
    pub defense: i32,
    pub power: i32,
}

impl Fighter {
    /// Create a fighter at full health
    pub fn new(hp: i32, defense: i32, power: i32) -> Self {
        Self {
            max_hp: hp,
            hp,
            defense,
            power,
        }
    }
}
