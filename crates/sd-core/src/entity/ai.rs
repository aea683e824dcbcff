//! AI behavior tags.
//!
//! Generation only assigns behaviors; the decision logic lives with the
//! game loop.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Behavior assigned to an entity at spawn time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum AiBehavior {
    /// Chases and attacks the player on sight
    BasicMonster,
    /// Holds its ground and converses; never initiates combat
    BasicNpc,
}

impl AiBehavior {
    pub fn is_hostile(self) -> bool {
        matches!(self, AiBehavior::BasicMonster)
    }
}
