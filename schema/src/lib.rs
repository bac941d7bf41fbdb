// Overworld Events Schema - Shared type definitions
// This crate contains the core enums and data types shared between the
// event logic crate and anything that produces species data for it.

// Re-export the main types
pub use moves::*;
pub use pokemon_types::*;
pub use species::*;
pub use species_data::*;

pub mod moves;
pub mod pokemon_types;
pub mod species;
pub mod species_data;
