use crate::config::WonderTradeConfig;
use crate::pokemon::PokemonInst;
use crate::species::Species;
use crate::state::GameState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum WonderTradeError {
    /// The party is empty
    #[error("the party is empty")]
    EmptyParty,
    /// Slot index does not point into the party
    #[error("party slot {slot} is out of range for a party of {party_count}")]
    InvalidSlot { slot: usize, party_count: usize },
    #[error("eggs cannot be wonder traded")]
    EggBlocked,
    /// The offered Pokemon was itself received through Wonder Trade
    #[error("{species} was already received through wonder trade")]
    AlreadyTraded { species: Species },
    #[error("{species} has level 0")]
    ZeroLevel { species: Species },
    /// No creature passing the sanity checks could be created
    #[error("failed to create a valid pokemon to receive")]
    GenerationFailed,
}

impl WonderTradeError {
    /// Code written to the script result variable.
    pub fn result_code(&self) -> u16 {
        match self {
            WonderTradeError::EggBlocked => 2,
            WonderTradeError::AlreadyTraded { .. } => 3,
            WonderTradeError::EmptyParty
            | WonderTradeError::InvalidSlot { .. }
            | WonderTradeError::ZeroLevel { .. }
            | WonderTradeError::GenerationFailed => 1,
        }
    }
}

/// Carries the Wonder Trade OT id or name.
pub fn is_already_wonder_traded(pokemon: &PokemonInst, config: &WonderTradeConfig) -> bool {
    pokemon.ot.id == config.ot_id || pokemon.ot.name == config.ot_name
}

/// Validate the offered party slot and return the offered Pokemon.
pub fn validate_offer<'a>(
    state: &'a GameState,
    slot: usize,
    config: &WonderTradeConfig,
) -> Result<&'a PokemonInst, WonderTradeError> {
    let party_count = state.party_count();
    if party_count == 0 {
        return Err(WonderTradeError::EmptyParty);
    }

    let offered = match state.party.get(slot).and_then(|entry| entry.as_ref()) {
        Some(pokemon) if slot < party_count => pokemon,
        _ => return Err(WonderTradeError::InvalidSlot { slot, party_count }),
    };

    if offered.is_egg || offered.species_or_egg() == Species::EGG {
        return Err(WonderTradeError::EggBlocked);
    }

    if is_already_wonder_traded(offered, config) {
        return Err(WonderTradeError::AlreadyTraded {
            species: offered.species,
        });
    }

    if offered.level == 0 {
        return Err(WonderTradeError::ZeroLevel {
            species: offered.species,
        });
    }

    Ok(offered)
}
