pub mod archetype;
pub mod stats;
