//! Wonder Trade: swap a party Pokemon for a randomly generated one.
//!
//! Both entry points share [`exchange`]; they differ only in where the
//! received Pokemon lands. Nothing is written unless the trade succeeds.

pub mod exclusions;
pub mod generation;
pub mod validation;

pub use exclusions::*;
pub use generation::*;
pub use validation::*;

use crate::config::WonderTradeConfig;
use crate::species::{Species, SpeciesTable};
use crate::state::GameState;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// In-game trade template id used by the trade scene for Wonder Trade.
pub const INGAME_TRADE_WONDER: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDestination {
    /// Replace the offered party slot directly.
    PartySlot,
    /// Stage the received Pokemon in enemy party slot 0 for the trade scene.
    IncomingTradeSlot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WonderTradeReceipt {
    pub slot: usize,
    pub offered: Species,
    pub received: Species,
    pub level: u8,
    pub destination: TradeDestination,
}

pub type WonderTradeResult = Result<WonderTradeReceipt, WonderTradeError>;

/// Code written to the script result variable: 0 on success.
pub fn result_code(result: &WonderTradeResult) -> u16 {
    match result {
        Ok(_) => 0,
        Err(err) => err.result_code(),
    }
}

/// Validate the offer in `slot`, generate the received Pokemon and write it to
/// `destination`.
pub fn exchange(
    state: &mut GameState,
    slot: usize,
    destination: TradeDestination,
    table: &SpeciesTable,
    config: &WonderTradeConfig,
    rng: &mut impl Rng,
) -> WonderTradeResult {
    let offered = validate_offer(state, slot, config)?;
    let offered_species = offered.species;
    let level = offered.level;

    let mut received = create_received_pokemon(level, table, config, rng)
        .ok_or(WonderTradeError::GenerationFailed)?;

    received.ot = wonder_trade_ot(config);
    received.met_location = config.met_location;
    received.met_level = level;
    received
        .recalculate_stats(table)
        .map_err(|_| WonderTradeError::GenerationFailed)?;

    let received_species = received.species;
    match destination {
        TradeDestination::PartySlot => state.party[slot] = Some(received),
        TradeDestination::IncomingTradeSlot => state.enemy_party[0] = Some(received),
    }

    info!(
        slot,
        offered = %offered_species,
        received = %received_species,
        level,
        ?destination,
        "wonder trade complete"
    );

    Ok(WonderTradeReceipt {
        slot,
        offered: offered_species,
        received: received_species,
        level,
        destination,
    })
}

/// Trade the Pokemon in `slot` and replace it in the party.
pub fn wonder_trade(
    state: &mut GameState,
    slot: usize,
    table: &SpeciesTable,
    config: &WonderTradeConfig,
    rng: &mut impl Rng,
) -> WonderTradeResult {
    let result = exchange(state, slot, TradeDestination::PartySlot, table, config, rng);
    state.special_vars.result = result_code(&result);
    result
}

/// Prepare the trade scene: the received Pokemon is staged for the trade
/// animation instead of replacing the party slot.
///
/// Once `slot` is known to be in range the scene inputs are overwritten so a
/// stale in-game trade template can never leak into the scene.
pub fn prepare_wonder_trade_scene(
    state: &mut GameState,
    slot: usize,
    table: &SpeciesTable,
    config: &WonderTradeConfig,
    rng: &mut impl Rng,
) -> WonderTradeResult {
    let party_count = state.party_count();
    if party_count == 0 || slot >= party_count {
        state.special_vars.result = 1;
        return Err(if party_count == 0 {
            WonderTradeError::EmptyParty
        } else {
            WonderTradeError::InvalidSlot { slot, party_count }
        });
    }

    state.special_vars.var_8004 = INGAME_TRADE_WONDER;
    state.special_vars.var_8005 = slot as u16;

    let result = exchange(
        state,
        slot,
        TradeDestination::IncomingTradeSlot,
        table,
        config,
        rng,
    );
    state.special_vars.result = result_code(&result);
    result
}
