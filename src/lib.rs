// In: src/lib.rs

//! Overworld Events
//!
//! Save-state driven event logic for the overworld: the Dig and Teleport field
//! moves, gym leader rematch unlocking, and Wonder Trade. Every procedure works
//! on an explicit [`GameState`] and takes its randomness as an injected
//! [`rand::Rng`].

// --- MODULE DECLARATIONS ---
pub mod config;
pub mod errors;
pub mod field_moves;
pub mod pokemon;
pub mod rematch;
pub mod species;
pub mod specials;
pub mod state;
pub mod wonder_trade;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{BaseStats, Item, Learnset, Move, PokemonSpecies, PokemonType, Species};

// --- From this crate's modules (`src/`) ---

// Save state and creatures.
pub use pokemon::{OriginalTrainer, OtGender, OtIdMode, PokemonInst};
pub use species::SpeciesTable;
pub use state::{Flag, GameState, MapContext, MapType, Var};

// Event procedures.
pub use field_moves::{
    run_field_move_continuation, run_post_menu_field_callback, setup_field_move_dig,
    setup_field_move_teleport, OverworldCommand,
};
pub use rematch::{update_gym_leader_rematch, GymLeader, RematchSelection, RematchUnlocks};
pub use specials::{execute_special, EventContext, Special, SpecialOutcome};
pub use wonder_trade::{
    prepare_wonder_trade_scene, wonder_trade, TradeDestination, WonderTradeError,
    WonderTradeReceipt, WonderTradeResult,
};

// Configuration and errors.
pub use config::EventConfig;
pub use errors::{ConfigError, ConfigResult, SpeciesDataError, SpeciesDataResult};
