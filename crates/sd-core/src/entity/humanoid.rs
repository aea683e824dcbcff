//! Humanoid descriptor component.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Race {
    Goblin,
    Orc,
    Troll,
    Human,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Profession {
    Monster,
    Mage,
}

/// Race, calling and experience level of a humanoid entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Humanoid {
    pub race: Race,
    pub profession: Profession,
    pub level: u32,
}

impl Humanoid {
    pub fn new(race: Race, profession: Profession, level: u32) -> Self {
        Self {
            race,
            profession,
            level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Race::Goblin.to_string(), "Goblin");
        assert_eq!(Profession::Mage.to_string(), "Mage");
    }
}
