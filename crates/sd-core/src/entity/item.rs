//! Consumable item descriptor.

use serde::{Deserialize, Serialize};

/// Effect applied when an item is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    /// Restore up to `amount` hit points
    Heal { amount: i32 },
}
