//! Computer science fundamentals.

pub mod data_structures;
pub mod operating_systems;
