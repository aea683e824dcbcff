//! sd-core: Core level generation for the Sultan's Dungeon roguelike
//!
//! This crate contains the map-generation and entity-placement logic with
//! no I/O dependencies. It is designed to be pure and testable: every
//! randomized operation takes an explicit seedable [`GameRng`], and one
//! generation run returns its results as a value rather than writing to
//! shared state.
//!
//! The standard spawn tables live in the `sd-data` crate; generation here
//! only consumes table references, so the dependency always points from
//! data to core.

pub mod data;
pub mod dungeon;
pub mod entity;

mod consts;
mod rng;

pub use consts::*;
pub use rng::GameRng;
