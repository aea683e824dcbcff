//! Static lookup data.

pub mod colors;
